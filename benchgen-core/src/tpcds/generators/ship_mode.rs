//! `ship_mode`: 20 fixed carrier/mode combinations.

use crate::distribution::DistributionStore;
use crate::error::Result;
use crate::random::{business_key, RandomStream};
use crate::row::{ColumnSchema, ColumnType, Row, RowGenerator, TableSchema, Value};
use crate::seedplan::stream_for_column;
use crate::tpcds::Table;

const TYPE_STREAM: i64 = 0;
const CARRIER_STREAM: i64 = 1;

const SHIP_TYPES: [&str; 4] = ["EXPRESS", "OVERNIGHT", "TWO DAY", "LIBRARY"];
const CARRIERS: [&str; 8] =
    ["AIRBORNE", "BOXWAY", "DHL", "FEDEX", "UPS", "USPO", "ZHOU", "GREAT EASTERN"];

fn schema() -> TableSchema {
    TableSchema::new(
        "ship_mode",
        vec![
            ColumnSchema { name: "sm_ship_mode_sk", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "sm_ship_mode_id", column_type: ColumnType::Text, nullable: false },
            ColumnSchema { name: "sm_type", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "sm_code", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "sm_carrier", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "sm_contract", column_type: ColumnType::Text, nullable: true },
        ],
    )
}

pub struct ShipModeGenerator {
    schema: TableSchema,
    type_stream: RandomStream,
    carrier_stream: RandomStream,
    row: u64,
}

impl ShipModeGenerator {
    pub fn new(_dists: DistributionStore) -> Self {
        let column_base = Table::ShipMode.column_base();
        ShipModeGenerator {
            schema: schema(),
            type_stream: stream_for_column(column_base + TYPE_STREAM, 1, 1),
            carrier_stream: stream_for_column(column_base + CARRIER_STREAM, 2, 1),
            row: 1,
        }
    }
}

impl RowGenerator for ShipModeGenerator {
    fn schema(&self) -> &TableSchema {
        &self.schema
    }

    fn total_rows(&self) -> u64 {
        20
    }

    fn skip_to(&mut self, row: u64) -> Result<()> {
        self.row = row;
        self.type_stream.skip_rows((row - 1) as i64);
        self.carrier_stream.skip_rows((row - 1) as i64);
        Ok(())
    }

    fn next_row(&mut self) -> Result<Row> {
        let sk = self.row as i64;
        let type_index = self.type_stream.next_uniform_int(0, SHIP_TYPES.len() as i64 - 1);
        self.type_stream.consume_remaining_for_row();
        let carrier_index = self.carrier_stream.next_uniform_int(0, CARRIERS.len() as i64 - 1);
        let code = self.carrier_stream.next_uniform_int(100000, 999999);
        self.carrier_stream.consume_remaining_for_row();

        self.row += 1;
        Ok(vec![
            Value::Int(sk),
            Value::Text(business_key(sk as u64)),
            Value::Text(SHIP_TYPES[type_index as usize].to_string()),
            Value::Text(format!("SM-{code}")),
            Value::Text(CARRIERS[carrier_index as usize].to_string()),
            Value::Text(format!("CONTRACT-{code}")),
        ])
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
        let mut gen = ShipModeGenerator::new(store());
        let row = gen.next_row().unwrap();
        assert_eq!(row.len(), gen.schema().columns.len());
    }

    #[test]
    fn skip_to_matches_sequential_generation() {
        let mut sequential = ShipModeGenerator::new(store());
        sequential.next_row().unwrap();
        let expected = sequential.next_row().unwrap();

        let mut skipped = ShipModeGenerator::new(store());
        skipped.skip_to(2).unwrap();
        let actual = skipped.next_row().unwrap();
        assert_eq!(actual, expected);
    }
}
