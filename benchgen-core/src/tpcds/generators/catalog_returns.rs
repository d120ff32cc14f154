//! `catalog_returns`: the catalog channel's return fact table. Follows the
//! same independent-context simplification as [`super::store_returns`].

use crate::distribution::DistributionStore;
use crate::error::Result;
use crate::random::RandomStream;
use crate::row::{ColumnSchema, ColumnType, Row, RowGenerator, TableSchema, Value};
use crate::seedplan::stream_for_column;
use crate::tpcds::{scaling, Table};
use crate::types::{set_pricing, set_return_pricing, PricingLimits};

const ITEM_STREAM: i64 = 0;
const CUSTOMER_STREAM: i64 = 1;
const CDEMO_STREAM: i64 = 2;
const HDEMO_STREAM: i64 = 3;
const ADDR_STREAM: i64 = 4;
const CALL_CENTER_STREAM: i64 = 5;
const CATALOG_PAGE_STREAM: i64 = 6;
const SHIP_MODE_STREAM: i64 = 7;
const REASON_STREAM: i64 = 8;
const DATE_STREAM: i64 = 9;
const SALE_STREAM: i64 = 10;
const RETURN_STREAM: i64 = 11;

fn schema() -> TableSchema {
    TableSchema::new(
        "catalog_returns",
        vec![
            ColumnSchema { name: "cr_returned_date_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "cr_item_sk", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "cr_refunded_customer_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "cr_refunded_cdemo_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "cr_refunded_hdemo_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "cr_refunded_addr_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "cr_call_center_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "cr_catalog_page_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "cr_ship_mode_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "cr_reason_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "cr_order_number", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "cr_return_quantity", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "cr_return_amount", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "cr_return_tax", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "cr_return_amt_inc_tax", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "cr_fee", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "cr_return_ship_cost", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "cr_refunded_cash", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "cr_reversed_charge", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "cr_store_credit", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "cr_net_loss", column_type: ColumnType::Decimal, nullable: true },
        ],
    )
}

pub struct CatalogReturnsGenerator {
    schema: TableSchema,
    item_stream: RandomStream,
    customer_stream: RandomStream,
    cdemo_stream: RandomStream,
    hdemo_stream: RandomStream,
    addr_stream: RandomStream,
    call_center_stream: RandomStream,
    catalog_page_stream: RandomStream,
    ship_mode_stream: RandomStream,
    reason_stream: RandomStream,
    date_stream: RandomStream,
    sale_stream: RandomStream,
    return_stream: RandomStream,
    item_count: u64,
    customer_count: u64,
    cdemo_count: u64,
    hdemo_count: u64,
    addr_count: u64,
    call_center_count: u64,
    catalog_page_count: u64,
    ship_mode_count: u64,
    reason_count: u64,
    base_julian: i64,
    total_rows: u64,
    row: u64,
}

impl CatalogReturnsGenerator {
    pub fn new(_dists: DistributionStore, scale_factor: f64) -> Self {
        let column_base = Table::CatalogReturns.column_base();
        let (y, m, d) = crate::tpcds::DATA_START_DATE;
        CatalogReturnsGenerator {
            schema: schema(),
            item_stream: stream_for_column(column_base + ITEM_STREAM, 1, 1),
            customer_stream: stream_for_column(column_base + CUSTOMER_STREAM, 1, 1),
            cdemo_stream: stream_for_column(column_base + CDEMO_STREAM, 1, 1),
            hdemo_stream: stream_for_column(column_base + HDEMO_STREAM, 1, 1),
            addr_stream: stream_for_column(column_base + ADDR_STREAM, 1, 1),
            call_center_stream: stream_for_column(column_base + CALL_CENTER_STREAM, 1, 1),
            catalog_page_stream: stream_for_column(column_base + CATALOG_PAGE_STREAM, 1, 1),
            ship_mode_stream: stream_for_column(column_base + SHIP_MODE_STREAM, 1, 1),
            reason_stream: stream_for_column(column_base + REASON_STREAM, 1, 1),
            date_stream: stream_for_column(column_base + DATE_STREAM, 1, 1),
            sale_stream: stream_for_column(column_base + SALE_STREAM, 2, 1),
            return_stream: stream_for_column(column_base + RETURN_STREAM, 5, 1),
            item_count: scaling::row_count(Table::Item, scale_factor),
            customer_count: scaling::row_count(Table::Customer, scale_factor),
            cdemo_count: scaling::row_count(Table::CustomerDemographics, scale_factor),
            hdemo_count: scaling::row_count(Table::HouseholdDemographics, scale_factor),
            addr_count: scaling::row_count(Table::CustomerAddress, scale_factor),
            call_center_count: scaling::row_count(Table::CallCenter, scale_factor),
            catalog_page_count: scaling::row_count(Table::CatalogPage, scale_factor),
            ship_mode_count: scaling::row_count(Table::ShipMode, scale_factor),
            reason_count: scaling::row_count(Table::Reason, scale_factor),
            base_julian: crate::types::Date::new(y, m, d).to_julian_days() as i64,
            total_rows: scaling::row_count(Table::CatalogReturns, scale_factor),
            row: 1,
        }
    }
}

impl RowGenerator for CatalogReturnsGenerator {
    fn schema(&self) -> &TableSchema {
        &self.schema
    }

    fn total_rows(&self) -> u64 {
        self.total_rows
    }

    fn skip_to(&mut self, row: u64) -> Result<()> {
        let skip = row as i64;
        self.item_stream.skip_rows(skip);
        self.customer_stream.skip_rows(skip);
        self.cdemo_stream.skip_rows(skip);
        self.hdemo_stream.skip_rows(skip);
        self.addr_stream.skip_rows(skip);
        self.call_center_stream.skip_rows(skip);
        self.catalog_page_stream.skip_rows(skip);
        self.ship_mode_stream.skip_rows(skip);
        self.reason_stream.skip_rows(skip);
        self.date_stream.skip_rows(skip);
        self.sale_stream.skip_rows(skip);
        self.return_stream.skip_rows(skip);
        self.row = row + 1;
        Ok(())
    }

    fn next_row(&mut self) -> Result<Row> {
        let row_number = self.row;

        let item_sk = self.item_stream.next_uniform_int(1, self.item_count.max(1) as i64);
        self.item_stream.consume_remaining_for_row();
        let customer_sk = self.customer_stream.next_uniform_int(1, self.customer_count.max(1) as i64);
        self.customer_stream.consume_remaining_for_row();
        let cdemo_sk = self.cdemo_stream.next_uniform_int(1, self.cdemo_count.max(1) as i64);
        self.cdemo_stream.consume_remaining_for_row();
        let hdemo_sk = self.hdemo_stream.next_uniform_int(1, self.hdemo_count.max(1) as i64);
        self.hdemo_stream.consume_remaining_for_row();
        let addr_sk = self.addr_stream.next_uniform_int(1, self.addr_count.max(1) as i64);
        self.addr_stream.consume_remaining_for_row();
        let call_center_sk = self.call_center_stream.next_uniform_int(1, self.call_center_count.max(1) as i64);
        self.call_center_stream.consume_remaining_for_row();
        let catalog_page_sk =
            self.catalog_page_stream.next_uniform_int(1, self.catalog_page_count.max(1) as i64);
        self.catalog_page_stream.consume_remaining_for_row();
        let ship_mode_sk = self.ship_mode_stream.next_uniform_int(1, self.ship_mode_count.max(1) as i64);
        self.ship_mode_stream.consume_remaining_for_row();
        let reason_sk = self.reason_stream.next_uniform_int(1, self.reason_count.max(1) as i64);
        self.reason_stream.consume_remaining_for_row();
        let returned_date_sk = self.base_julian + self.date_stream.next_uniform_int(0, 365 * 5);
        self.date_stream.consume_remaining_for_row();

        let sale_quantity = self.sale_stream.next_uniform_int(1, 100);
        let wholesale_cost = crate::random::random_decimal(1.0, 100.0, 2, &mut self.sale_stream);
        let sale = set_pricing(sale_quantity, wholesale_cost, PricingLimits::default(), &mut self.sale_stream);
        self.sale_stream.consume_remaining_for_row();

        let return_quantity = self.return_stream.next_uniform_int(1, sale_quantity);
        let return_pricing = set_return_pricing(&sale, return_quantity, &mut self.return_stream);
        self.return_stream.consume_remaining_for_row();

        self.row += 1;
        Ok(vec![
            Value::Int(returned_date_sk),
            Value::Int(item_sk),
            Value::Int(customer_sk),
            Value::Int(cdemo_sk),
            Value::Int(hdemo_sk),
            Value::Int(addr_sk),
            Value::Int(call_center_sk),
            Value::Int(catalog_page_sk),
            Value::Int(ship_mode_sk),
            Value::Int(reason_sk),
            Value::Int(row_number as i64),
            Value::Int(return_pricing.return_quantity),
            Value::Decimal(return_pricing.return_amt),
            Value::Decimal(return_pricing.return_tax),
            Value::Decimal(return_pricing.return_amt_inc_tax),
            Value::Decimal(return_pricing.fee),
            Value::Decimal(return_pricing.return_ship_cost),
            Value::Decimal(return_pricing.refunded_cash),
            Value::Decimal(return_pricing.reversed_charge),
            Value::Decimal(return_pricing.store_credit),
            Value::Decimal(return_pricing.net_loss),
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
        let mut gen = CatalogReturnsGenerator::new(store(), 0.01);
        let row = gen.next_row().unwrap();
        assert_eq!(row.len(), gen.schema().columns.len());
    }

    #[test]
    fn total_rows_matches_scaling_table() {
        let gen = CatalogReturnsGenerator::new(store(), 0.01);
        assert_eq!(gen.total_rows(), crate::tpcds::scaling::row_count(Table::CatalogReturns, 0.01));
    }
}
