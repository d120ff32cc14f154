//! `customer_address`: one postal address per row, no SCD versioning.

use crate::distribution::DistributionStore;
use crate::error::Result;
use crate::random::{business_key, RandomStream};
use crate::row::{ColumnSchema, ColumnType, Row, RowGenerator, TableSchema, Value};
use crate::seedplan::stream_for_column;
use crate::tpcds::{scaling, Table};
use crate::types::{generate_address, Decimal};

const ADDRESS_STREAM: i64 = 0;
const TYPE_STREAM: i64 = 9;

const LOCATION_TYPES: [&str; 3] = ["apartment", "single family", "condo"];

fn schema() -> TableSchema {
    TableSchema::new(
        "customer_address",
        vec![
            ColumnSchema { name: "ca_address_sk", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "ca_address_id", column_type: ColumnType::Text, nullable: false },
            ColumnSchema { name: "ca_street_number", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "ca_street_name", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "ca_street_type", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "ca_suite_number", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "ca_city", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "ca_county", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "ca_state", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "ca_zip", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "ca_country", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "ca_gmt_offset", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "ca_location_type", column_type: ColumnType::Text, nullable: true },
        ],
    )
}

pub struct CustomerAddressGenerator {
    schema: TableSchema,
    dists: DistributionStore,
    address_stream: RandomStream,
    type_stream: RandomStream,
    total_rows: u64,
    row: u64,
}

impl CustomerAddressGenerator {
    pub fn new(dists: DistributionStore, scale_factor: f64) -> Self {
        let column_base = Table::CustomerAddress.column_base();
        CustomerAddressGenerator {
            schema: schema(),
            dists,
            address_stream: stream_for_column(column_base + ADDRESS_STREAM, 9, 1),
            type_stream: stream_for_column(column_base + TYPE_STREAM, 1, 1),
            total_rows: scaling::row_count(Table::CustomerAddress, scale_factor),
            row: 1,
        }
    }
}

impl RowGenerator for CustomerAddressGenerator {
    fn schema(&self) -> &TableSchema {
        &self.schema
    }

    fn total_rows(&self) -> u64 {
        self.total_rows
    }

    fn skip_to(&mut self, row: u64) -> Result<()> {
        self.row = row;
        self.address_stream.skip_rows((row - 1) as i64);
        self.type_stream.skip_rows((row - 1) as i64);
        Ok(())
    }

    fn next_row(&mut self) -> Result<Row> {
        let sk = self.row as i64;
        let address = generate_address(&self.dists, &mut self.address_stream, false)?;
        self.address_stream.consume_remaining_for_row();
        let type_index = self.type_stream.next_uniform_int(0, LOCATION_TYPES.len() as i64 - 1);
        self.type_stream.consume_remaining_for_row();

        self.row += 1;
        Ok(vec![
            Value::Int(sk),
            Value::Text(business_key(sk as u64)),
            Value::Text(address.street_number.to_string()),
            Value::Text(address.street_name),
            Value::Text(address.street_type),
            Value::Text(address.suite_number),
            Value::Text(address.city),
            Value::Text(address.county),
            Value::Text(address.state),
            Value::Text(format!("{:05}", address.zip)),
            Value::Text(address.country),
            Value::Decimal(Decimal::from_int(address.gmt_offset)),
            Value::Text(LOCATION_TYPES[type_index as usize].to_string()),
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
        let mut gen = CustomerAddressGenerator::new(store(), 0.01);
        let row = gen.next_row().unwrap();
        assert_eq!(row.len(), gen.schema().columns.len());
    }

    #[test]
    fn total_rows_matches_scaling_table() {
        let gen = CustomerAddressGenerator::new(store(), 0.01);
        assert_eq!(gen.total_rows(), crate::tpcds::scaling::row_count(Table::CustomerAddress, 0.01));
    }

    #[test]
    fn skip_to_matches_sequential_generation() {
        let mut sequential = CustomerAddressGenerator::new(store(), 0.01);
        sequential.next_row().unwrap();
        let expected = sequential.next_row().unwrap();

        let mut skipped = CustomerAddressGenerator::new(store(), 0.01);
        skipped.skip_to(2).unwrap();
        let actual = skipped.next_row().unwrap();
        assert_eq!(actual, expected);
    }
}
