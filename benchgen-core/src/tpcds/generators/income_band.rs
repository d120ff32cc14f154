//! `income_band`: 20 fixed, non-overlapping income ranges. No random draws;
//! each row is a pure function of its row number, matching the reference
//! kit's static `income_band` table.

use crate::error::Result;
use crate::row::{ColumnSchema, ColumnType, Row, RowGenerator, TableSchema, Value};

const BAND_WIDTH: i64 = 10_000;

fn schema() -> TableSchema {
    TableSchema::new(
        "income_band",
        vec![
            ColumnSchema { name: "ib_income_band_sk", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "ib_lower_bound", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "ib_upper_bound", column_type: ColumnType::Integer, nullable: false },
        ],
    )
}

pub struct IncomeBandGenerator {
    schema: TableSchema,
    row: u64,
}

impl IncomeBandGenerator {
    pub fn new() -> Self {
        IncomeBandGenerator { schema: schema(), row: 1 }
    }
}

impl Default for IncomeBandGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RowGenerator for IncomeBandGenerator {
    fn schema(&self) -> &TableSchema {
        &self.schema
    }

    fn total_rows(&self) -> u64 {
        20
    }

    fn skip_to(&mut self, row: u64) -> Result<()> {
        self.row = row;
        Ok(())
    }

    fn next_row(&mut self) -> Result<Row> {
        let sk = self.row as i64;
        let lower = (sk - 1) * BAND_WIDTH;
        let upper = lower + BAND_WIDTH - 1;
        self.row += 1;
        Ok(vec![Value::Int(sk), Value::Int(lower), Value::Int(upper)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_length_matches_schema() {
        let mut gen = IncomeBandGenerator::new();
        let row = gen.next_row().unwrap();
        assert_eq!(row.len(), gen.schema().columns.len());
    }

    #[test]
    fn skip_to_matches_sequential_generation() {
        let mut sequential = IncomeBandGenerator::new();
        sequential.next_row().unwrap();
        let expected = sequential.next_row().unwrap();

        let mut skipped = IncomeBandGenerator::new();
        skipped.skip_to(2).unwrap();
        let actual = skipped.next_row().unwrap();
        assert_eq!(actual, expected);
    }
}
