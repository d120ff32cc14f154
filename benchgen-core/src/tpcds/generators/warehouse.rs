//! `warehouse`: a small, slowly-growing "outlet" dimension (no SCD, unlike
//! its sibling `store`/`call_center`/`web_site` outlets).

use crate::distribution::DistributionStore;
use crate::error::Result;
use crate::random::{business_key, RandomStream};
use crate::row::{ColumnSchema, ColumnType, Row, RowGenerator, TableSchema, Value};
use crate::seedplan::stream_for_column;
use crate::tpcds::{scaling, Table};
use crate::types::address::generate_address;

const NAME_STREAM: i64 = 0;
const SQFT_STREAM: i64 = 1;
const ADDRESS_STREAM: i64 = 2;

fn schema() -> TableSchema {
    TableSchema::new(
        "warehouse",
        vec![
            ColumnSchema { name: "w_warehouse_sk", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "w_warehouse_id", column_type: ColumnType::Text, nullable: false },
            ColumnSchema { name: "w_warehouse_name", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "w_warehouse_sq_ft", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "w_street_number", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "w_street_name", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "w_street_type", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "w_suite_number", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "w_city", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "w_county", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "w_state", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "w_zip", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "w_country", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "w_gmt_offset", column_type: ColumnType::Decimal, nullable: true },
        ],
    )
}

pub struct WarehouseGenerator {
    schema: TableSchema,
    dists: DistributionStore,
    name_stream: RandomStream,
    sqft_stream: RandomStream,
    address_stream: RandomStream,
    total_rows: u64,
    row: u64,
}

impl WarehouseGenerator {
    pub fn new(dists: DistributionStore, scale_factor: f64) -> Self {
        let column_base = Table::Warehouse.column_base();
        WarehouseGenerator {
            schema: schema(),
            dists,
            name_stream: stream_for_column(column_base + NAME_STREAM, 1, 1),
            sqft_stream: stream_for_column(column_base + SQFT_STREAM, 1, 1),
            address_stream: stream_for_column(column_base + ADDRESS_STREAM, 9, 1),
            total_rows: scaling::row_count(Table::Warehouse, scale_factor),
            row: 1,
        }
    }
}

impl RowGenerator for WarehouseGenerator {
    fn schema(&self) -> &TableSchema {
        &self.schema
    }

    fn total_rows(&self) -> u64 {
        self.total_rows
    }

    fn skip_to(&mut self, row: u64) -> Result<()> {
        self.row = row;
        self.name_stream.skip_rows((row - 1) as i64);
        self.sqft_stream.skip_rows((row - 1) as i64);
        self.address_stream.skip_rows((row - 1) as i64);
        Ok(())
    }

    fn next_row(&mut self) -> Result<Row> {
        let sk = self.row as i64;
        let suffix = self.name_stream.next_uniform_int(1, self.total_rows.max(1) as i64);
        self.name_stream.consume_remaining_for_row();
        let sq_ft = self.sqft_stream.next_uniform_int(50_000, 1_000_000);
        self.sqft_stream.consume_remaining_for_row();
        let address = generate_address(&self.dists, &mut self.address_stream, true)?;
        self.address_stream.consume_remaining_for_row();

        self.row += 1;
        Ok(vec![
            Value::Int(sk),
            Value::Text(business_key(sk as u64)),
            Value::Text(format!("Warehouse #{suffix}")),
            Value::Int(sq_ft),
            Value::Text(address.street_number.to_string()),
            Value::Text(address.street_name),
            Value::Text(address.street_type),
            Value::Text(address.suite_number),
            Value::Text(address.city),
            Value::Text(address.county),
            Value::Text(address.state),
            Value::Text(format!("{:05}", address.zip)),
            Value::Text(address.country),
            Value::Decimal(crate::types::Decimal::from_int(address.gmt_offset)),
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
        let mut gen = WarehouseGenerator::new(store(), 0.01);
        let row = gen.next_row().unwrap();
        assert_eq!(row.len(), gen.schema().columns.len());
    }

    #[test]
    fn total_rows_matches_scaling_table() {
        let gen = WarehouseGenerator::new(store(), 0.01);
        assert_eq!(gen.total_rows(), crate::tpcds::scaling::row_count(Table::Warehouse, 0.01));
    }

    #[test]
    fn skip_to_matches_sequential_generation() {
        let mut sequential = WarehouseGenerator::new(store(), 0.01);
        sequential.next_row().unwrap();
        let expected = sequential.next_row().unwrap();

        let mut skipped = WarehouseGenerator::new(store(), 0.01);
        skipped.skip_to(2).unwrap();
        let actual = skipped.next_row().unwrap();
        assert_eq!(actual, expected);
    }
}
