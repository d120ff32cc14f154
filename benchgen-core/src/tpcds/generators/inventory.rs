//! `inventory`: weekly on-hand snapshot, one row per (item, warehouse, week).
//! Row number decomposes into the three axes the way `customer_demographics`
//! decomposes into its category axes; only the quantity column is random.

use crate::error::Result;
use crate::random::RandomStream;
use crate::row::{ColumnSchema, ColumnType, Row, RowGenerator, TableSchema, Value};
use crate::seedplan::stream_for_column;
use crate::tpcds::{scaling, Table};
use crate::types::Date;

const QUANTITY_STREAM: i64 = 0;
const WEEKS: i64 = 261;

fn schema() -> TableSchema {
    TableSchema::new(
        "inventory",
        vec![
            ColumnSchema { name: "inv_date_sk", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "inv_item_sk", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "inv_warehouse_sk", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "inv_quantity_on_hand", column_type: ColumnType::Integer, nullable: true },
        ],
    )
}

pub struct InventoryGenerator {
    schema: TableSchema,
    quantity_stream: RandomStream,
    item_count: i64,
    warehouse_count: i64,
    base_julian: i32,
    total_rows: u64,
    row: u64,
}

impl InventoryGenerator {
    pub fn new(scale_factor: f64) -> Self {
        let column_base = Table::Inventory.column_base();
        let (y, m, d) = crate::tpcds::DATA_START_DATE;
        InventoryGenerator {
            schema: schema(),
            quantity_stream: stream_for_column(column_base + QUANTITY_STREAM, 1, 1),
            item_count: scaling::row_count(Table::Item, scale_factor).max(1) as i64,
            warehouse_count: scaling::row_count(Table::Warehouse, scale_factor).max(1) as i64,
            base_julian: Date::new(y, m, d).to_julian_days(),
            total_rows: scaling::row_count(Table::Inventory, scale_factor),
            row: 1,
        }
    }
}

impl RowGenerator for InventoryGenerator {
    fn schema(&self) -> &TableSchema {
        &self.schema
    }

    fn total_rows(&self) -> u64 {
        self.total_rows
    }

    fn skip_to(&mut self, row: u64) -> Result<()> {
        self.row = row;
        self.quantity_stream.skip_rows((row - 1) as i64);
        Ok(())
    }

    fn next_row(&mut self) -> Result<Row> {
        let mut idx = (self.row - 1) as i64;
        let item_index = idx % self.item_count;
        idx /= self.item_count;
        let warehouse_index = idx % self.warehouse_count;
        idx /= self.warehouse_count;
        let week_index = idx % WEEKS;

        let date_sk = self.base_julian as i64 + week_index * 7;
        let quantity = self.quantity_stream.next_uniform_int(0, 1000);
        self.quantity_stream.consume_remaining_for_row();

        self.row += 1;
        Ok(vec![
            Value::Int(date_sk),
            Value::Int(item_index + 1),
            Value::Int(warehouse_index + 1),
            Value::Int(quantity),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_length_matches_schema() {
        let mut gen = InventoryGenerator::new(0.01);
        let row = gen.next_row().unwrap();
        assert_eq!(row.len(), gen.schema().columns.len());
    }

    #[test]
    fn total_rows_matches_scaling_table() {
        let gen = InventoryGenerator::new(0.01);
        assert_eq!(gen.total_rows(), crate::tpcds::scaling::row_count(Table::Inventory, 0.01));
    }
}
