//! `time_dim`: one row per second of the day, a pure function of row number.

use crate::error::Result;
use crate::row::{ColumnSchema, ColumnType, Row, RowGenerator, TableSchema, Value};

const SECONDS_PER_DAY: u64 = 86_400;

fn schema() -> TableSchema {
    TableSchema::new(
        "time_dim",
        vec![
            ColumnSchema { name: "t_time_sk", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "t_time_id", column_type: ColumnType::Text, nullable: false },
            ColumnSchema { name: "t_time", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "t_hour", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "t_minute", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "t_second", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "t_am_pm", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "t_shift", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "t_sub_shift", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "t_meal_time", column_type: ColumnType::Text, nullable: true },
        ],
    )
}

fn shift_for(hour: i64) -> (&'static str, &'static str) {
    match hour {
        7..=14 => ("first", if hour < 11 { "morning" } else { "afternoon" }),
        15..=22 => ("second", if hour < 19 { "afternoon" } else { "evening" }),
        _ => ("third", "night"),
    }
}

fn meal_time_for(hour: i64) -> Value {
    match hour {
        7..=8 => Value::Text("breakfast".to_string()),
        11..=12 => Value::Text("lunch".to_string()),
        17..=18 => Value::Text("dinner".to_string()),
        _ => Value::Null,
    }
}

pub struct TimeDimGenerator {
    schema: TableSchema,
    row: u64,
}

impl TimeDimGenerator {
    pub fn new() -> Self {
        TimeDimGenerator { schema: schema(), row: 1 }
    }
}

impl Default for TimeDimGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RowGenerator for TimeDimGenerator {
    fn schema(&self) -> &TableSchema {
        &self.schema
    }

    fn total_rows(&self) -> u64 {
        SECONDS_PER_DAY
    }

    fn skip_to(&mut self, row: u64) -> Result<()> {
        self.row = row;
        Ok(())
    }

    fn next_row(&mut self) -> Result<Row> {
        let sk = self.row as i64;
        let second_of_day = sk - 1;
        let hour = second_of_day / 3600;
        let minute = (second_of_day % 3600) / 60;
        let second = second_of_day % 60;
        let am_pm = if hour < 12 { "AM" } else { "PM" };
        let (shift, sub_shift) = shift_for(hour);

        self.row += 1;
        Ok(vec![
            Value::Int(sk),
            Value::Text(format!("AAAAAAAA{second_of_day:05}")),
            Value::Int(second_of_day),
            Value::Int(hour),
            Value::Int(minute),
            Value::Int(second),
            Value::Text(am_pm.to_string()),
            Value::Text(shift.to_string()),
            Value::Text(sub_shift.to_string()),
            meal_time_for(hour),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_length_matches_schema() {
        let mut gen = TimeDimGenerator::new();
        let row = gen.next_row().unwrap();
        assert_eq!(row.len(), gen.schema().columns.len());
    }

    #[test]
    fn skip_to_matches_sequential_generation() {
        let mut sequential = TimeDimGenerator::new();
        sequential.next_row().unwrap();
        let expected = sequential.next_row().unwrap();

        let mut skipped = TimeDimGenerator::new();
        skipped.skip_to(2).unwrap();
        let actual = skipped.next_row().unwrap();
        assert_eq!(actual, expected);
    }
}
