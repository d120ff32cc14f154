//! `web_page`: SCD-2 dimension for individual web pages within a site.

use crate::distribution::DistributionStore;
use crate::error::Result;
use crate::random::{business_key, RandomStream};
use crate::row::{ColumnSchema, ColumnType, Row, RowGenerator, TableSchema, Value};
use crate::seedplan::stream_for_column;
use crate::tpcds::scd::{change_scd_value, scd_group_start_row, set_scd_keys};
use crate::tpcds::{scaling, Table};

const TYPE_STREAM: i64 = 0;
const LINK_STREAM: i64 = 1;
const IMAGE_STREAM: i64 = 2;
const AD_STREAM: i64 = 3;
const SCD_STREAM: i64 = 4;

const PAGE_TYPES: [&str; 4] = ["feedback", "review", "general", "order"];

fn schema() -> TableSchema {
    TableSchema::new(
        "web_page",
        vec![
            ColumnSchema { name: "wp_web_page_sk", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "wp_web_page_id", column_type: ColumnType::Text, nullable: false },
            ColumnSchema { name: "wp_rec_start_date", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "wp_rec_end_date", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "wp_creation_date_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "wp_access_date_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "wp_autogen_flag", column_type: ColumnType::Boolean, nullable: true },
            ColumnSchema { name: "wp_url", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "wp_type", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "wp_char_count", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "wp_link_count", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "wp_image_count", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "wp_max_ad_count", column_type: ColumnType::Integer, nullable: true },
        ],
    )
}

#[derive(Default, Clone)]
struct OldValues {
    char_count: i64,
}

pub struct WebPageGenerator {
    schema: TableSchema,
    type_stream: RandomStream,
    link_stream: RandomStream,
    image_stream: RandomStream,
    ad_stream: RandomStream,
    scd_stream: RandomStream,
    old_values: OldValues,
    base_julian: i32,
    total_rows: u64,
    row: u64,
}

impl WebPageGenerator {
    pub fn new(_dists: DistributionStore, scale_factor: f64) -> Self {
        let column_base = Table::WebPage.column_base();
        let (y, m, d) = crate::tpcds::DATA_START_DATE;
        WebPageGenerator {
            schema: schema(),
            type_stream: stream_for_column(column_base + TYPE_STREAM, 1, 1),
            link_stream: stream_for_column(column_base + LINK_STREAM, 1, 1),
            image_stream: stream_for_column(column_base + IMAGE_STREAM, 1, 1),
            ad_stream: stream_for_column(column_base + AD_STREAM, 1, 1),
            scd_stream: stream_for_column(column_base + SCD_STREAM, 1, 1),
            old_values: OldValues::default(),
            base_julian: crate::types::Date::new(y, m, d).to_julian_days(),
            total_rows: scaling::row_count(Table::WebPage, scale_factor),
            row: 1,
        }
    }
}

impl RowGenerator for WebPageGenerator {
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
        self.type_stream.skip_rows(skip);
        self.link_stream.skip_rows(skip);
        self.image_stream.skip_rows(skip);
        self.ad_stream.skip_rows(skip);
        self.scd_stream.skip_rows(skip);
        self.row = regen_start;
        while self.row < row {
            self.next_row()?;
        }
        Ok(())
    }

    fn next_row(&mut self) -> Result<Row> {
        let row_number = self.row;
        let keys = set_scd_keys(Table::WebPage, row_number.max(1));
        let first_record = keys.is_new_key;

        let mut change_flags = self.scd_stream.next_random();
        self.scd_stream.consume_remaining_for_row();

        let type_index = self.type_stream.next_uniform_int(0, PAGE_TYPES.len() as i64 - 1);
        self.type_stream.consume_remaining_for_row();

        let link_count = self.link_stream.next_uniform_int(2, 25);
        self.link_stream.consume_remaining_for_row();

        let image_count = self.image_stream.next_uniform_int(1, 7);
        self.image_stream.consume_remaining_for_row();

        let ad_count = self.ad_stream.next_uniform_int(0, 4);
        self.ad_stream.consume_remaining_for_row();

        let mut char_count = (link_count + image_count) * 125;
        change_scd_value(&mut char_count, &mut self.old_values.char_count, &mut change_flags, first_record);

        let autogen = row_number % 2 == 0;

        self.row += 1;
        Ok(vec![
            Value::Int(row_number as i64),
            Value::Text(business_key(row_number)),
            Value::Int(keys.rec_start_date_id as i64),
            if keys.rec_end_date_id < 0 { Value::Null } else { Value::Int(keys.rec_end_date_id as i64) },
            Value::Int(self.base_julian as i64),
            Value::Int(self.base_julian as i64 + (row_number as i64 % 365)),
            Value::Bool(autogen),
            Value::Text(format!("http://www.benchgen.example/page{row_number}.html")),
            Value::Text(PAGE_TYPES[type_index as usize].to_string()),
            Value::Int(char_count),
            Value::Int(link_count),
            Value::Int(image_count),
            Value::Int(ad_count),
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
        let mut gen = WebPageGenerator::new(store(), 0.01);
        let row = gen.next_row().unwrap();
        assert_eq!(row.len(), gen.schema().columns.len());
    }

    #[test]
    fn total_rows_matches_scaling_table() {
        let gen = WebPageGenerator::new(store(), 0.01);
        assert_eq!(gen.total_rows(), crate::tpcds::scaling::row_count(Table::WebPage, 0.01));
    }

    #[test]
    fn skip_to_matches_sequential_generation() {
        let mut sequential = WebPageGenerator::new(store(), 0.01);
        sequential.next_row().unwrap();
        let expected = sequential.next_row().unwrap();

        let mut skipped = WebPageGenerator::new(store(), 0.01);
        skipped.skip_to(2).unwrap();
        let actual = skipped.next_row().unwrap();
        assert_eq!(actual, expected);
    }
}
