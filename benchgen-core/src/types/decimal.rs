//! Fixed-point decimal modeled as a signed integer with an explicit scale,
//! matching the reference generator's pricing arithmetic (add/sub keep the
//! wider operand's scale, multiply/divide adjust precision explicitly).

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Decimal {
    /// Number of significant digits tracked before the decimal point in the
    /// reference kit's bookkeeping; carried through for parity but not used
    /// for rendering.
    pub scale: i32,
    /// Number of fractional digits `number` is scaled by.
    pub precision: i32,
    pub number: i64,
}

impl Decimal {
    pub const ZERO: Decimal = Decimal { scale: 0, precision: 2, number: 0 };

    pub fn from_str(input: &str) -> Self {
        let mut scale = 0;
        let mut precision = 0;
        let mut number;

        if let Some(dot) = input.find('.') {
            let integer_part = &input[..dot];
            let fraction_part = &input[dot + 1..];
            scale = integer_part.len() as i32;
            number = integer_part.parse::<i64>().unwrap_or(0);
            precision = fraction_part.len() as i32;
            for _ in 0..precision {
                number *= 10;
            }
            if !fraction_part.is_empty() {
                number += fraction_part.parse::<i64>().unwrap_or(0);
            }
            if input.starts_with('-') && number > 0 {
                number *= -1;
            }
        } else {
            scale = input.len() as i32;
            number = input.parse::<i64>().unwrap_or(0);
        }

        Decimal { scale, precision, number }
    }

    pub fn from_int(value: i64) -> Self {
        let mut scale = 1;
        let mut bound = 1;
        while bound * 10 <= value {
            scale += 1;
            bound *= 10;
        }
        Decimal { scale, precision: 0, number: value }
    }

    pub fn negate(&self) -> Decimal {
        Decimal { number: -self.number, ..*self }
    }

    pub fn add(&self, other: &Decimal) -> Decimal {
        Decimal {
            scale: self.scale.max(other.scale),
            precision: self.precision.max(other.precision),
            number: self.number + other.number,
        }
    }

    pub fn sub(&self, other: &Decimal) -> Decimal {
        Decimal {
            scale: self.scale.max(other.scale),
            precision: self.precision.max(other.precision),
            number: self.number - other.number,
        }
    }

    pub fn mul(&self, other: &Decimal) -> Decimal {
        let precision = self.precision.max(other.precision);
        let mut combined_precision = self.precision + other.precision;
        let mut number = self.number * other.number;
        while combined_precision > precision {
            number /= 10;
            combined_precision -= 1;
        }
        Decimal { scale: self.scale.max(other.scale), precision, number }
    }

    pub fn div(&self, other: &Decimal) -> Decimal {
        let precision = self.precision.max(other.precision);
        let mut f1 = self.number as f64;
        let mut np = self.precision;
        while np < precision {
            f1 *= 10.0;
            np += 1;
        }
        let mut f2 = other.number as f64;
        np = other.precision;
        while np < precision {
            f2 *= 10.0;
            np += 1;
        }
        Decimal {
            scale: self.scale.max(other.scale),
            precision,
            number: (f1 / f2) as i64,
        }
    }

    pub fn as_f64(&self) -> f64 {
        self.number as f64 / 10f64.powi(self.precision)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.precision <= 0 {
            return write!(f, "{}", self.number);
        }
        let divisor = 10i64.pow(self.precision as u32);
        let whole = self.number / divisor;
        let frac = (self.number % divisor).abs();
        write!(f, "{}.{:0width$}", whole, frac, width = self.precision as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_renders_round_trip() {
        let d = Decimal::from_str("123.45");
        assert_eq!(d.number, 12345);
        assert_eq!(d.precision, 2);
        assert_eq!(d.to_string(), "123.45");
    }

    #[test]
    fn multiply_adjusts_precision() {
        let a = Decimal::from_str("2.00");
        let b = Decimal::from_str("3.50");
        let product = a.mul(&b);
        assert_eq!(product.precision, 2);
        assert_eq!(product.as_f64(), 7.00);
    }

    #[test]
    fn negate_flips_sign() {
        let d = Decimal::from_str("10.00");
        assert_eq!(d.negate().number, -1000);
    }
}
