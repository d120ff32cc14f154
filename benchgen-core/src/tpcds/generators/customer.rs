//! `customer`: one shopper per row, joined (by uniform draw) to an address,
//! a demographic pair and a birth date; `c_login` is always null, matching
//! the reference kit's own long-standing quirk (DESIGN.md).

use crate::distribution::DistributionStore;
use crate::error::Result;
use crate::random::{business_key, RandomStream};
use crate::row::{ColumnSchema, ColumnType, Row, RowGenerator, TableSchema, Value};
use crate::seedplan::stream_for_column;
use crate::tpcds::{scaling, Table};
use crate::types::Date;

const ADDRESS_STREAM: i64 = 0;
const DEMO_STREAM: i64 = 1;
const HDEMO_STREAM: i64 = 2;
const NAME_STREAM: i64 = 3;
const BIRTH_STREAM: i64 = 4;
const PREFERRED_STREAM: i64 = 5;
const FIRST_SHIPTO_STREAM: i64 = 6;
const FIRST_SALES_STREAM: i64 = 7;

const COUNTRIES: [&str; 3] = ["United States", "Canada", "Mexico"];

fn schema() -> TableSchema {
    TableSchema::new(
        "customer",
        vec![
            ColumnSchema { name: "c_customer_sk", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "c_customer_id", column_type: ColumnType::Text, nullable: false },
            ColumnSchema { name: "c_current_cdemo_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "c_current_hdemo_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "c_current_addr_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "c_first_shipto_date_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "c_first_sales_date_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "c_salutation", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "c_first_name", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "c_last_name", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "c_preferred_cust_flag", column_type: ColumnType::Boolean, nullable: true },
            ColumnSchema { name: "c_birth_day", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "c_birth_month", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "c_birth_year", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "c_birth_country", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "c_login", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "c_email_address", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "c_last_review_date", column_type: ColumnType::Integer, nullable: true },
        ],
    )
}

pub struct CustomerGenerator {
    schema: TableSchema,
    dists: DistributionStore,
    address_stream: RandomStream,
    demo_stream: RandomStream,
    hdemo_stream: RandomStream,
    name_stream: RandomStream,
    birth_stream: RandomStream,
    preferred_stream: RandomStream,
    shipto_stream: RandomStream,
    sales_stream: RandomStream,
    address_count: u64,
    demo_count: u64,
    hdemo_count: u64,
    base_julian: i32,
    total_rows: u64,
    row: u64,
}

impl CustomerGenerator {
    pub fn new(dists: DistributionStore, scale_factor: f64) -> Self {
        let column_base = Table::Customer.column_base();
        let (y, m, d) = crate::tpcds::DATA_START_DATE;
        CustomerGenerator {
            schema: schema(),
            dists,
            address_stream: stream_for_column(column_base + ADDRESS_STREAM, 1, 1),
            demo_stream: stream_for_column(column_base + DEMO_STREAM, 1, 1),
            hdemo_stream: stream_for_column(column_base + HDEMO_STREAM, 1, 1),
            name_stream: stream_for_column(column_base + NAME_STREAM, 3, 1),
            birth_stream: stream_for_column(column_base + BIRTH_STREAM, 4, 1),
            preferred_stream: stream_for_column(column_base + PREFERRED_STREAM, 1, 1),
            shipto_stream: stream_for_column(column_base + FIRST_SHIPTO_STREAM, 1, 1),
            sales_stream: stream_for_column(column_base + FIRST_SALES_STREAM, 1, 1),
            address_count: scaling::row_count(Table::CustomerAddress, scale_factor),
            demo_count: scaling::row_count(Table::CustomerDemographics, scale_factor),
            hdemo_count: scaling::row_count(Table::HouseholdDemographics, scale_factor),
            base_julian: Date::new(y, m, d).to_julian_days(),
            total_rows: scaling::row_count(Table::Customer, scale_factor),
            row: 1,
        }
    }
}

impl RowGenerator for CustomerGenerator {
    fn schema(&self) -> &TableSchema {
        &self.schema
    }

    fn total_rows(&self) -> u64 {
        self.total_rows
    }

    fn skip_to(&mut self, row: u64) -> Result<()> {
        let skip = (row - 1) as i64;
        self.address_stream.skip_rows(skip);
        self.demo_stream.skip_rows(skip);
        self.hdemo_stream.skip_rows(skip);
        self.name_stream.skip_rows(skip);
        self.birth_stream.skip_rows(skip);
        self.preferred_stream.skip_rows(skip);
        self.shipto_stream.skip_rows(skip);
        self.sales_stream.skip_rows(skip);
        self.row = row;
        Ok(())
    }

    fn next_row(&mut self) -> Result<Row> {
        let sk = self.row as i64;

        let addr_sk = self.address_stream.next_uniform_int(1, self.address_count.max(1) as i64);
        self.address_stream.consume_remaining_for_row();
        let cdemo_sk = self.demo_stream.next_uniform_int(1, self.demo_count.max(1) as i64);
        self.demo_stream.consume_remaining_for_row();
        let hdemo_sk = self.hdemo_stream.next_uniform_int(1, self.hdemo_count.max(1) as i64);
        self.hdemo_stream.consume_remaining_for_row();

        let salutation_draw = self.name_stream.next_uniform_int(0, 4);
        let first_names = self.dists.find("first_names")?;
        let first_index = first_names.pick_index(1, &mut self.name_stream);
        let first_name = first_names.get_string(first_index, 1).to_string();
        let last_names = self.dists.find("last_names")?;
        let last_index = last_names.pick_index(1, &mut self.name_stream);
        let last_name = last_names.get_string(last_index, 1).to_string();
        self.name_stream.consume_remaining_for_row();
        let salutation = ["MR.", "MRS.", "MS.", "DR.", "MISS"][salutation_draw as usize];

        let birth_day = self.birth_stream.next_uniform_int(1, 28);
        let birth_month = self.birth_stream.next_uniform_int(1, 12);
        let birth_year = self.birth_stream.next_uniform_int(1924, 1992);
        let country_draw = self.birth_stream.next_uniform_int(0, COUNTRIES.len() as i64 - 1);
        self.birth_stream.consume_remaining_for_row();

        let preferred = self.preferred_stream.next_uniform_int(0, 1) == 1;
        self.preferred_stream.consume_remaining_for_row();

        let shipto_offset = self.shipto_stream.next_uniform_int(0, 1800);
        self.shipto_stream.consume_remaining_for_row();
        let sales_offset = self.sales_stream.next_uniform_int(0, 1800);
        self.sales_stream.consume_remaining_for_row();

        let email_domain = self.dists.find("top_domains")?;
        let email = format!(
            "{}.{}@{}",
            first_name.to_lowercase(),
            last_name.to_lowercase(),
            email_domain.get_string(1, 1)
        );

        self.row += 1;
        Ok(vec![
            Value::Int(sk),
            Value::Text(business_key(sk as u64)),
            Value::Int(cdemo_sk),
            Value::Int(hdemo_sk),
            Value::Int(addr_sk),
            Value::Int(self.base_julian as i64 + shipto_offset),
            Value::Int(self.base_julian as i64 + sales_offset),
            Value::Text(salutation.to_string()),
            Value::Text(first_name),
            Value::Text(last_name),
            Value::Bool(preferred),
            Value::Int(birth_day),
            Value::Int(birth_month),
            Value::Int(birth_year),
            Value::Text(COUNTRIES[country_draw as usize].to_string()),
            Value::Null,
            Value::Text(email),
            Value::Null,
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
        let mut gen = CustomerGenerator::new(store(), 0.01);
        let row = gen.next_row().unwrap();
        assert_eq!(row.len(), gen.schema().columns.len());
    }

    #[test]
    fn total_rows_matches_scaling_table() {
        let gen = CustomerGenerator::new(store(), 0.01);
        assert_eq!(gen.total_rows(), crate::tpcds::scaling::row_count(Table::Customer, 0.01));
    }

    #[test]
    fn skip_to_matches_sequential_generation() {
        let mut sequential = CustomerGenerator::new(store(), 0.01);
        sequential.next_row().unwrap();
        let expected = sequential.next_row().unwrap();

        let mut skipped = CustomerGenerator::new(store(), 0.01);
        skipped.skip_to(2).unwrap();
        let actual = skipped.next_row().unwrap();
        assert_eq!(actual, expected);
    }
}
