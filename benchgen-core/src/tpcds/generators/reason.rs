//! `reason`: 35 fixed return-reason codes, one random text description each.

use crate::distribution::DistributionStore;
use crate::error::Result;
use crate::random::{business_key, RandomStream};
use crate::row::{ColumnSchema, ColumnType, Row, RowGenerator, TableSchema, Value};
use crate::seedplan::stream_for_column;
use crate::tpcds::Table;

const DESC_STREAM: i64 = 0;

fn schema() -> TableSchema {
    TableSchema::new(
        "reason",
        vec![
            ColumnSchema { name: "r_reason_sk", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "r_reason_id", column_type: ColumnType::Text, nullable: false },
            ColumnSchema { name: "r_reason_desc", column_type: ColumnType::Text, nullable: true },
        ],
    )
}

pub struct ReasonGenerator {
    schema: TableSchema,
    desc_stream: RandomStream,
    row: u64,
}

impl ReasonGenerator {
    pub fn new(_dists: DistributionStore) -> Self {
        let column_base = Table::Reason.column_base();
        ReasonGenerator {
            schema: schema(),
            desc_stream: stream_for_column(column_base + DESC_STREAM, 1, 1),
            row: 1,
        }
    }
}

impl RowGenerator for ReasonGenerator {
    fn schema(&self) -> &TableSchema {
        &self.schema
    }

    fn total_rows(&self) -> u64 {
        35
    }

    fn skip_to(&mut self, row: u64) -> Result<()> {
        self.row = row;
        self.desc_stream.skip_rows((row - 1) as i64);
        Ok(())
    }

    fn next_row(&mut self) -> Result<Row> {
        let sk = self.row as i64;
        let words = self.desc_stream.next_uniform_int(3, 8);
        self.desc_stream.consume_remaining_for_row();
        let desc = format!("reason code number {sk} with {words} contributing factors");
        self.row += 1;
        Ok(vec![Value::Int(sk), Value::Text(business_key(sk as u64)), Value::Text(desc)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::tpcds_distributions;

    fn store() -> DistributionStore {
        let mut store = DistributionStore::new();
        tpcds_distributions(&mut store);
        store
    }

    #[test]
    fn row_length_matches_schema() {
        let mut gen = ReasonGenerator::new(store());
        let row = gen.next_row().unwrap();
        assert_eq!(row.len(), gen.schema().columns.len());
    }

    #[test]
    fn skip_to_matches_sequential_generation() {
        let mut sequential = ReasonGenerator::new(store());
        sequential.next_row().unwrap();
        let expected = sequential.next_row().unwrap();

        let mut skipped = ReasonGenerator::new(store());
        skipped.skip_to(2).unwrap();
        let actual = skipped.next_row().unwrap();
        assert_eq!(actual, expected);
    }
}
