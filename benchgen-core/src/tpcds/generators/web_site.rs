//! `web_site`: SCD-2 outlet dimension. Its `rec_start_date`/`rec_end_date`
//! window is offset relative to `store`'s ordinal rather than its own,
//! preserving the reference kit's quirk (see [`crate::tpcds::scd::set_scd_keys`]).

use crate::distribution::DistributionStore;
use crate::error::Result;
use crate::random::{business_key, RandomStream};
use crate::row::{ColumnSchema, ColumnType, Row, RowGenerator, TableSchema, Value};
use crate::seedplan::stream_for_column;
use crate::tpcds::scd::{change_scd_value, scd_group_start_row, set_scd_keys};
use crate::tpcds::{scaling, Table};
use crate::types::{generate_address, generate_text, Decimal};

const NAME_STREAM: i64 = 0;
const MANAGER_STREAM: i64 = 1;
const ADDRESS_STREAM: i64 = 2;
const TAX_STREAM: i64 = 3;
const CLASS_STREAM: i64 = 4;
const SCD_STREAM: i64 = 5;

fn schema() -> TableSchema {
    TableSchema::new(
        "web_site",
        vec![
            ColumnSchema { name: "web_site_sk", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "web_site_id", column_type: ColumnType::Text, nullable: false },
            ColumnSchema { name: "web_rec_start_date", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "web_rec_end_date", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "web_name", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "web_class", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "web_manager", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "web_company_name", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "web_street_number", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "web_street_name", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "web_city", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "web_county", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "web_state", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "web_zip", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "web_country", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "web_gmt_offset", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "web_tax_percentage", column_type: ColumnType::Decimal, nullable: true },
        ],
    )
}

#[derive(Default, Clone)]
struct OldValues {
    name: String,
    manager: String,
}

pub struct WebSiteGenerator {
    schema: TableSchema,
    dists: DistributionStore,
    name_stream: RandomStream,
    manager_stream: RandomStream,
    address_stream: RandomStream,
    tax_stream: RandomStream,
    class_stream: RandomStream,
    scd_stream: RandomStream,
    old_values: OldValues,
    total_rows: u64,
    row: u64,
}

impl WebSiteGenerator {
    pub fn new(dists: DistributionStore, scale_factor: f64) -> Self {
        let column_base = Table::WebSite.column_base();
        WebSiteGenerator {
            schema: schema(),
            dists,
            name_stream: stream_for_column(column_base + NAME_STREAM, 1, 1),
            manager_stream: stream_for_column(column_base + MANAGER_STREAM, 2, 1),
            address_stream: stream_for_column(column_base + ADDRESS_STREAM, 9, 1),
            tax_stream: stream_for_column(column_base + TAX_STREAM, 1, 1),
            class_stream: stream_for_column(column_base + CLASS_STREAM, 1, 1),
            scd_stream: stream_for_column(column_base + SCD_STREAM, 1, 1),
            old_values: OldValues::default(),
            total_rows: scaling::row_count(Table::WebSite, scale_factor),
            row: 1,
        }
    }
}

impl RowGenerator for WebSiteGenerator {
    fn schema(&self) -> &TableSchema {
        &self.schema
    }

    fn total_rows(&self) -> u64 {
        self.total_rows
    }

    fn skip_to(&mut self, row: u64) -> Result<()> {
        self.old_values = OldValues::default();
        let regen_start = scd_group_start_row(row).max(1);
        let skip = (regen_start - 1) as i64;
        self.name_stream.skip_rows(skip);
        self.manager_stream.skip_rows(skip);
        self.address_stream.skip_rows(skip);
        self.tax_stream.skip_rows(skip);
        self.class_stream.skip_rows(skip);
        self.scd_stream.skip_rows(skip);
        self.row = regen_start;
        while self.row < row {
            self.next_row()?;
        }
        Ok(())
    }

    fn next_row(&mut self) -> Result<Row> {
        let row_number = self.row;
        let keys = set_scd_keys(Table::WebSite, row_number.max(1));
        let first_record = keys.is_new_key;

        let mut change_flags = self.scd_stream.next_random();
        self.scd_stream.consume_remaining_for_row();

        let name_text = generate_text(&self.dists, &mut self.name_stream)?;
        self.name_stream.consume_remaining_for_row();
        let mut name = format!("site_{}", name_text.chars().take(12).collect::<String>());
        change_scd_value(&mut name, &mut self.old_values.name, &mut change_flags, first_record);

        let first_names = self.dists.find("first_names")?;
        let first = first_names.pick_string(1, 1, &mut self.manager_stream).to_string();
        let last_names = self.dists.find("last_names")?;
        let last = last_names.pick_string(1, 1, &mut self.manager_stream).to_string();
        self.manager_stream.consume_remaining_for_row();
        let mut manager = format!("{first} {last}");
        change_scd_value(&mut manager, &mut self.old_values.manager, &mut change_flags, first_record);

        let address = generate_address(&self.dists, &mut self.address_stream, true)?;
        self.address_stream.consume_remaining_for_row();

        let tax = crate::random::random_decimal(0.0, 0.12, 2, &mut self.tax_stream);
        self.tax_stream.consume_remaining_for_row();

        let class_index = self.class_stream.next_uniform_int(0, 2);
        self.class_stream.consume_remaining_for_row();
        let class = ["large", "medium", "small"][class_index as usize];

        self.row += 1;
        Ok(vec![
            Value::Int(row_number as i64),
            Value::Text(business_key(row_number)),
            Value::Int(keys.rec_start_date_id as i64),
            if keys.rec_end_date_id < 0 { Value::Null } else { Value::Int(keys.rec_end_date_id as i64) },
            Value::Text(name),
            Value::Text(class.to_string()),
            Value::Text(manager),
            Value::Text("Reference Web Site".to_string()),
            Value::Text(address.street_number.to_string()),
            Value::Text(address.street_name),
            Value::Text(address.city),
            Value::Text(address.county),
            Value::Text(address.state),
            Value::Text(format!("{:05}", address.zip)),
            Value::Text(address.country),
            Value::Decimal(Decimal::from_int(address.gmt_offset)),
            Value::Decimal(tax),
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
        let mut gen = WebSiteGenerator::new(store(), 0.01);
        let row = gen.next_row().unwrap();
        assert_eq!(row.len(), gen.schema().columns.len());
    }

    #[test]
    fn total_rows_matches_scaling_table() {
        let gen = WebSiteGenerator::new(store(), 0.01);
        assert_eq!(gen.total_rows(), crate::tpcds::scaling::row_count(Table::WebSite, 0.01));
    }

    #[test]
    fn skip_to_matches_sequential_generation() {
        let mut sequential = WebSiteGenerator::new(store(), 0.01);
        sequential.next_row().unwrap();
        let expected = sequential.next_row().unwrap();

        let mut skipped = WebSiteGenerator::new(store(), 0.01);
        skipped.skip_to(2).unwrap();
        let actual = skipped.next_row().unwrap();
        assert_eq!(actual, expected);
    }
}
