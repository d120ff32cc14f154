//! Delimiter-separated values output. Reuses the same field rendering as
//! [`crate::tbl`] but quotes a field whenever it contains the delimiter, a
//! quote, or a line break, RFC 4180 style.

use benchgen_core::row::{Row, TableSchema, Value};

pub fn write_header(buffer: &mut Vec<u8>, delimiter: u8, schema: &TableSchema) {
    for (i, column) in schema.columns.iter().enumerate() {
        if i > 0 {
            buffer.push(delimiter);
        }
        buffer.extend_from_slice(column.name.as_bytes());
    }
    buffer.push(b'\n');
}

pub fn write_row(buffer: &mut Vec<u8>, delimiter: u8, row: &Row) {
    for (i, value) in row.iter().enumerate() {
        if i > 0 {
            buffer.push(delimiter);
        }
        write_value(buffer, delimiter, value);
    }
    buffer.push(b'\n');
}

fn write_value(buffer: &mut Vec<u8>, delimiter: u8, value: &Value) {
    match value {
        Value::Null => {}
        Value::Int(v) => buffer.extend_from_slice(v.to_string().as_bytes()),
        Value::Decimal(d) => buffer.extend_from_slice(d.to_string().as_bytes()),
        Value::Bool(b) => buffer.push(if *b { b'Y' } else { b'N' }),
        Value::Float(f) => buffer.extend_from_slice(format_float(*f).as_bytes()),
        Value::Date(d) => buffer.extend_from_slice(d.to_iso_string().as_bytes()),
        Value::Text(s) => write_quoted_field(buffer, delimiter, s),
    }
}

fn format_float(value: f32) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

fn write_quoted_field(buffer: &mut Vec<u8>, delimiter: u8, value: &str) {
    let needs_quotes = value.as_bytes().iter().any(|&b| b == delimiter || b == b'"' || b == b'\n' || b == b'\r');
    if !needs_quotes {
        buffer.extend_from_slice(value.as_bytes());
        return;
    }
    buffer.push(b'"');
    for &b in value.as_bytes() {
        if b == b'"' {
            buffer.push(b'"');
        }
        buffer.push(b);
    }
    buffer.push(b'"');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_fields_containing_the_delimiter() {
        let mut buffer = Vec::new();
        write_quoted_field(&mut buffer, b',', "a,b");
        assert_eq!(String::from_utf8(buffer).unwrap(), "\"a,b\"");
    }

    #[test]
    fn leaves_plain_fields_unquoted() {
        let mut buffer = Vec::new();
        write_quoted_field(&mut buffer, b',', "plain");
        assert_eq!(String::from_utf8(buffer).unwrap(), "plain");
    }

    #[test]
    fn doubles_embedded_quotes() {
        let mut buffer = Vec::new();
        write_quoted_field(&mut buffer, b',', "a\"b");
        assert_eq!(String::from_utf8(buffer).unwrap(), "\"a\"\"b\"");
    }
}
