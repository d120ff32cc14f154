//! The external pipe-delimited text format (§6 "External text format"):
//! one row per line, fields separated by `|` with a trailing `|` before
//! the newline, matching the original `dbgen` tool's `.tbl` output.

use benchgen_core::row::{Row, Value};

pub fn write_row(buffer: &mut Vec<u8>, row: &Row) {
    for value in row {
        write_value(buffer, value);
        buffer.push(b'|');
    }
    buffer.push(b'\n');
}

fn write_value(buffer: &mut Vec<u8>, value: &Value) {
    match value {
        Value::Null => {}
        Value::Int(v) => buffer.extend_from_slice(v.to_string().as_bytes()),
        Value::Decimal(d) => buffer.extend_from_slice(d.to_string().as_bytes()),
        Value::Text(s) => buffer.extend_from_slice(s.as_bytes()),
        Value::Date(d) => buffer.extend_from_slice(d.to_iso_string().as_bytes()),
        Value::Bool(b) => buffer.push(if *b { b'Y' } else { b'N' }),
        Value::Float(f) => buffer.extend_from_slice(format_float(*f).as_bytes()),
    }
}

/// Renders a compact shortest form; integer-valued floats drop the
/// decimal point entirely.
fn format_float(value: f32) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchgen_core::types::{Date, Decimal};

    #[test]
    fn renders_nulls_as_empty_fields() {
        let mut buffer = Vec::new();
        write_row(&mut buffer, &vec![Value::Null, Value::Int(5)]);
        assert_eq!(String::from_utf8(buffer).unwrap(), "|5|\n");
    }

    #[test]
    fn renders_decimals_at_declared_scale() {
        let mut buffer = Vec::new();
        write_row(&mut buffer, &vec![Value::Decimal(Decimal::from_str("12.50"))]);
        assert_eq!(String::from_utf8(buffer).unwrap(), "12.50|\n");
    }

    #[test]
    fn renders_dates_as_iso() {
        let mut buffer = Vec::new();
        write_row(&mut buffer, &vec![Value::Date(Date::new(1998, 1, 2))]);
        assert_eq!(String::from_utf8(buffer).unwrap(), "1998-01-02|\n");
    }

    #[test]
    fn renders_booleans_as_y_n() {
        let mut buffer = Vec::new();
        write_row(&mut buffer, &vec![Value::Bool(true), Value::Bool(false)]);
        assert_eq!(String::from_utf8(buffer).unwrap(), "Y|N|\n");
    }

    #[test]
    fn integer_valued_floats_drop_the_point() {
        assert_eq!(format_float(3.0), "3");
        assert_eq!(format_float(3.5), "3.5");
    }
}
