//! Small stream-consuming helpers shared by every benchmark's generators.

use super::stream::RandomStream;

/// Shape of a random draw: uniform over the range, or a 12-term
/// Irwin-Hall-style approximation of a normal distribution centered between
/// `min` and `max` (used by a handful of reference columns that want a
/// bell-shaped rather than flat distribution).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distribution {
    Uniform,
    Exponential,
}

pub fn uniform_int(min: i64, max: i64, stream: &mut RandomStream) -> i64 {
    stream.next_uniform_int(min, max)
}

pub fn random_int(dist: Distribution, min: i64, max: i64, stream: &mut RandomStream) -> i64 {
    match dist {
        Distribution::Uniform => stream.next_uniform_int(min, max),
        Distribution::Exponential => {
            let mut fres = 0.0;
            for _ in 0..12 {
                fres += stream.next_random_double() - 0.5;
            }
            min + (((max - min + 1) as f64) * fres) as i64
        }
    }
}

/// Draws a string of `[min, max]` characters from `charset`, always
/// consuming `max` draws so seed usage is independent of the actual length —
/// mirrors the reference kit's charset-fill loop.
pub fn random_charset(charset: &[u8], min: i64, max: i64, stream: &mut RandomStream) -> String {
    let length = stream.next_uniform_int(min, max);
    let mut out = Vec::with_capacity(length as usize);
    for i in 0..max {
        let index = stream.next_uniform_int(0, charset.len() as i64 - 1) as usize;
        if i < length {
            out.push(charset[index]);
        }
    }
    String::from_utf8(out).expect("charset is restricted to ASCII")
}

/// Draws a uniform decimal in `[min, max]` at the given number of fractional
/// digits, the way the reference kit's `GenerateRandomDecimal` turns a double
/// draw into a priced column.
pub fn random_decimal(min: f64, max: f64, precision: u32, stream: &mut RandomStream) -> crate::types::Decimal {
    let draw = min + (max - min) * stream.next_random_double();
    let scale = 10f64.powi(precision as i32);
    let number = (draw * scale).round() as i64;
    crate::types::Decimal { scale: 0, precision: precision as i32, number }
}

pub const ALPHANUMERIC: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
pub const DIGITS: &[u8] = b"0123456789";

/// Encodes a 64-bit unique id as a 16-character business key using nibbles
/// mapped through `A`-`P` (so the key is stable across scale factors and
/// never collides with the generated surrogate integer keys).
pub fn business_key(id: u64) -> String {
    const KEY_CHARS: &[u8] = b"ABCDEFGHIJKLMNOP";
    let to_eight = |mut value: u64| -> String {
        let mut out = [b'A'; 8];
        for slot in out.iter_mut() {
            *slot = KEY_CHARS[(value & 0xF) as usize];
            value >>= 4;
        }
        String::from_utf8(out.to_vec()).unwrap()
    };
    format!("{}{}", to_eight(id >> 32), to_eight(id))
}

/// Fisher-Yates permutation of `[0, size)`, drawn once per generator and
/// reused for every row via [`permutation_entry`].
pub fn make_permutation(size: usize, stream: &mut RandomStream) -> Vec<usize> {
    let mut values: Vec<usize> = (0..size).collect();
    for i in 0..size {
        let index = stream.next_uniform_int(0, size as i64 - 1) as usize;
        values.swap(i, index);
    }
    values
}

/// 1-based lookup into a permutation built by [`make_permutation`], returning
/// a 1-based value (matching the reference kit's index conventions).
pub fn permutation_entry(permutation: &[usize], index: i64) -> i64 {
    assert!(index >= 1 && (index as usize) <= permutation.len());
    permutation[(index - 1) as usize] as i64 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn business_key_is_sixteen_uppercase_chars() {
        let key = business_key(0xDEAD_BEEF_CAFE_F00D);
        assert_eq!(key.len(), 16);
        assert!(key.bytes().all(|b| (b'A'..=b'P').contains(&b)));
    }

    #[test]
    fn permutation_is_a_bijection() {
        let mut stream = RandomStream::from_seed(7, 0);
        let perm = make_permutation(50, &mut stream);
        let mut seen = vec![false; 50];
        for i in 1..=50i64 {
            let v = permutation_entry(&perm, i);
            assert!(v >= 1 && v <= 50);
            assert!(!seen[(v - 1) as usize]);
            seen[(v - 1) as usize] = true;
        }
    }
}
