//! `catalog_page`: catalog issue metadata, one row per catalog page.

use crate::distribution::DistributionStore;
use crate::error::Result;
use crate::random::{business_key, RandomStream};
use crate::row::{ColumnSchema, ColumnType, Row, RowGenerator, TableSchema, Value};
use crate::seedplan::stream_for_column;
use crate::tpcds::{scaling, Table};
use crate::types::generate_text;

const TYPE_STREAM: i64 = 0;
const DATE_STREAM: i64 = 1;
const NUMBER_STREAM: i64 = 2;
const DESC_STREAM: i64 = 3;

const CATALOGS_PER_YEAR: i64 = 9;
const PAGES_PER_CATALOG: i64 = 24;

fn schema() -> TableSchema {
    TableSchema::new(
        "catalog_page",
        vec![
            ColumnSchema { name: "cp_catalog_page_sk", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "cp_catalog_page_id", column_type: ColumnType::Text, nullable: false },
            ColumnSchema { name: "cp_start_date_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "cp_end_date_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "cp_department", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "cp_catalog_number", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "cp_catalog_page_number", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "cp_description", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "cp_type", column_type: ColumnType::Text, nullable: true },
        ],
    )
}

pub struct CatalogPageGenerator {
    schema: TableSchema,
    dists: DistributionStore,
    type_stream: RandomStream,
    date_stream: RandomStream,
    number_stream: RandomStream,
    desc_stream: RandomStream,
    base_julian: i32,
    total_rows: u64,
    row: u64,
}

impl CatalogPageGenerator {
    pub fn new(dists: DistributionStore, scale_factor: f64) -> Self {
        let column_base = Table::CatalogPage.column_base();
        let (y, m, d) = crate::tpcds::DATA_START_DATE;
        CatalogPageGenerator {
            schema: schema(),
            dists,
            type_stream: stream_for_column(column_base + TYPE_STREAM, 1, 1),
            date_stream: stream_for_column(column_base + DATE_STREAM, 1, 1),
            number_stream: stream_for_column(column_base + NUMBER_STREAM, 1, 1),
            desc_stream: stream_for_column(column_base + DESC_STREAM, 1, 1),
            base_julian: crate::types::Date::new(y, m, d).to_julian_days(),
            total_rows: scaling::row_count(Table::CatalogPage, scale_factor),
            row: 1,
        }
    }
}

impl RowGenerator for CatalogPageGenerator {
    fn schema(&self) -> &TableSchema {
        &self.schema
    }

    fn total_rows(&self) -> u64 {
        self.total_rows
    }

    fn skip_to(&mut self, row: u64) -> Result<()> {
        self.row = row;
        self.type_stream.skip_rows((row - 1) as i64);
        self.date_stream.skip_rows((row - 1) as i64);
        self.number_stream.skip_rows((row - 1) as i64);
        self.desc_stream.skip_rows((row - 1) as i64);
        Ok(())
    }

    fn next_row(&mut self) -> Result<Row> {
        let sk = self.row as i64;
        let pages_per_year = CATALOGS_PER_YEAR * PAGES_PER_CATALOG;
        let year_offset = (sk - 1) / pages_per_year;
        let within_year = (sk - 1) % pages_per_year;
        let catalog_number = within_year / PAGES_PER_CATALOG + 1;
        let page_number = within_year % PAGES_PER_CATALOG + 1;

        let catalog_page_types = self.dists.find("catalog_page_type")?;
        let type_index = self.type_stream.next_uniform_int(1, catalog_page_types.size() as i64);
        self.type_stream.consume_remaining_for_row();
        let page_type = catalog_page_types.get_string(type_index, 1).to_string();

        let days_span = 365 / CATALOGS_PER_YEAR;
        let start_sk = self.base_julian as i64 + year_offset * 365 + (catalog_number - 1) * days_span;
        let end_sk = start_sk + days_span - 1;
        let _ = self.date_stream.next_uniform_int(0, 0);
        self.date_stream.consume_remaining_for_row();

        let department_draw = self.number_stream.next_uniform_int(0, 3);
        self.number_stream.consume_remaining_for_row();
        let department = ["SPORTS", "HOME", "ELECTRONICS", "CLOTHES"][department_draw as usize];

        let description = generate_text(&self.dists, &mut self.desc_stream)?;
        self.desc_stream.consume_remaining_for_row();

        self.row += 1;
        Ok(vec![
            Value::Int(sk),
            Value::Text(business_key(sk as u64)),
            Value::Int(start_sk),
            Value::Int(end_sk),
            Value::Text(department.to_string()),
            Value::Int(catalog_number),
            Value::Int(page_number),
            Value::Text(description.chars().take(100).collect()),
            Value::Text(page_type),
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
        let mut gen = CatalogPageGenerator::new(store(), 0.01);
        let row = gen.next_row().unwrap();
        assert_eq!(row.len(), gen.schema().columns.len());
    }

    #[test]
    fn total_rows_matches_scaling_table() {
        let gen = CatalogPageGenerator::new(store(), 0.01);
        assert_eq!(gen.total_rows(), crate::tpcds::scaling::row_count(Table::CatalogPage, 0.01));
    }

    #[test]
    fn skip_to_matches_sequential_generation() {
        let mut sequential = CatalogPageGenerator::new(store(), 0.01);
        sequential.next_row().unwrap();
        let expected = sequential.next_row().unwrap();

        let mut skipped = CatalogPageGenerator::new(store(), 0.01);
        skipped.skip_to(2).unwrap();
        let actual = skipped.next_row().unwrap();
        assert_eq!(actual, expected);
    }
}
