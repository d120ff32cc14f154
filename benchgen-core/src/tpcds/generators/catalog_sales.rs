//! `catalog_sales`: the catalog channel's fact table. Shares the ticket/line
//! shape of [`super::store_sales`] but with a catalog page, a ship mode, a
//! separate bill/ship customer pair, and a ship-date offset from the sold
//! date.

use crate::distribution::DistributionStore;
use crate::error::Result;
use crate::random::RandomStream;
use crate::row::{ColumnSchema, ColumnType, Row, RowGenerator, TableSchema, Value};
use crate::seedplan::stream_for_column;
use crate::tpcds::{scaling, Table};
use crate::types::{set_pricing, PricingLimits};

use super::sales_common::{locate_row, DateCursor};

pub const MIN_ITEMS_PER_ORDER: i64 = 4;
pub const MAX_ITEMS_PER_ORDER: i64 = 12;

const TICKET_STREAM: i64 = 0;
const ITEM_STREAM: i64 = 1;
const BILL_CUSTOMER_STREAM: i64 = 2;
const SHIP_CUSTOMER_STREAM: i64 = 3;
const CDEMO_STREAM: i64 = 4;
const HDEMO_STREAM: i64 = 5;
const BILL_ADDR_STREAM: i64 = 6;
const SHIP_ADDR_STREAM: i64 = 7;
const CALL_CENTER_STREAM: i64 = 8;
const CATALOG_PAGE_STREAM: i64 = 9;
const SHIP_MODE_STREAM: i64 = 10;
const PROMO_STREAM: i64 = 11;
const SHIP_DATE_STREAM: i64 = 12;
const QUANTITY_STREAM: i64 = 13;
const PRICING_STREAM: i64 = 14;

fn schema() -> TableSchema {
    TableSchema::new(
        "catalog_sales",
        vec![
            ColumnSchema { name: "cs_sold_date_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "cs_ship_date_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "cs_bill_customer_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "cs_bill_cdemo_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "cs_bill_hdemo_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "cs_bill_addr_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "cs_ship_customer_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "cs_ship_addr_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "cs_call_center_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "cs_catalog_page_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "cs_ship_mode_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "cs_promo_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "cs_order_number", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "cs_item_sk", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "cs_quantity", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "cs_wholesale_cost", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "cs_list_price", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "cs_sales_price", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "cs_ext_discount_amt", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "cs_ext_sales_price", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "cs_ext_wholesale_cost", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "cs_ext_list_price", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "cs_ext_tax", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "cs_coupon_amt", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "cs_ext_ship_cost", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "cs_net_paid", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "cs_net_paid_inc_tax", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "cs_net_paid_inc_ship", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "cs_net_paid_inc_ship_tax", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "cs_net_profit", column_type: ColumnType::Decimal, nullable: true },
        ],
    )
}

pub struct CatalogSalesGenerator {
    schema: TableSchema,
    dists: DistributionStore,
    ticket_stream: RandomStream,
    item_stream: RandomStream,
    bill_customer_stream: RandomStream,
    ship_customer_stream: RandomStream,
    cdemo_stream: RandomStream,
    hdemo_stream: RandomStream,
    bill_addr_stream: RandomStream,
    ship_addr_stream: RandomStream,
    call_center_stream: RandomStream,
    catalog_page_stream: RandomStream,
    ship_mode_stream: RandomStream,
    promo_stream: RandomStream,
    ship_date_stream: RandomStream,
    quantity_stream: RandomStream,
    pricing_stream: RandomStream,
    date_cursor: DateCursor,
    item_count: u64,
    customer_count: u64,
    cdemo_count: u64,
    hdemo_count: u64,
    addr_count: u64,
    call_center_count: u64,
    catalog_page_count: u64,
    ship_mode_count: u64,
    promo_count: u64,
    total_rows: u64,
    total_orders: u64,
    row: u64,
    order_number: u64,
    line_number: u64,
    order_entered_for: u64,
    order_date_sk: i64,
    order_bill_customer_sk: i64,
    order_ship_customer_sk: i64,
}

impl CatalogSalesGenerator {
    pub fn new(dists: DistributionStore, scale_factor: f64) -> Result<Self> {
        let column_base = Table::CatalogSales.column_base();
        let total_rows = scaling::row_count(Table::CatalogSales, scale_factor);
        let avg_items = ((MIN_ITEMS_PER_ORDER + MAX_ITEMS_PER_ORDER) / 2) as u64;
        let total_orders = (total_rows / avg_items.max(1)).max(1);

        let (y, m, d) = crate::tpcds::DATA_START_DATE;
        let start_julian = crate::types::Date::new(y, m, d).to_julian_days();
        let date_cursor = DateCursor::new(total_orders, &dists, start_julian)?;

        let customer_count = scaling::row_count(Table::Customer, scale_factor);

        Ok(CatalogSalesGenerator {
            schema: schema(),
            dists,
            ticket_stream: stream_for_column(column_base + TICKET_STREAM, 1, 1),
            item_stream: stream_for_column(column_base + ITEM_STREAM, 1, 1),
            bill_customer_stream: stream_for_column(column_base + BILL_CUSTOMER_STREAM, 1, 1),
            ship_customer_stream: stream_for_column(column_base + SHIP_CUSTOMER_STREAM, 1, 1),
            cdemo_stream: stream_for_column(column_base + CDEMO_STREAM, 1, 1),
            hdemo_stream: stream_for_column(column_base + HDEMO_STREAM, 1, 1),
            bill_addr_stream: stream_for_column(column_base + BILL_ADDR_STREAM, 1, 1),
            ship_addr_stream: stream_for_column(column_base + SHIP_ADDR_STREAM, 1, 1),
            call_center_stream: stream_for_column(column_base + CALL_CENTER_STREAM, 1, 1),
            catalog_page_stream: stream_for_column(column_base + CATALOG_PAGE_STREAM, 1, 1),
            ship_mode_stream: stream_for_column(column_base + SHIP_MODE_STREAM, 1, 1),
            promo_stream: stream_for_column(column_base + PROMO_STREAM, 1, 1),
            ship_date_stream: stream_for_column(column_base + SHIP_DATE_STREAM, 1, 1),
            quantity_stream: stream_for_column(column_base + QUANTITY_STREAM, 1, 1),
            pricing_stream: stream_for_column(column_base + PRICING_STREAM, 6, 1),
            date_cursor,
            item_count: scaling::row_count(Table::Item, scale_factor),
            customer_count,
            cdemo_count: scaling::row_count(Table::CustomerDemographics, scale_factor),
            hdemo_count: scaling::row_count(Table::HouseholdDemographics, scale_factor),
            addr_count: scaling::row_count(Table::CustomerAddress, scale_factor),
            call_center_count: scaling::row_count(Table::CallCenter, scale_factor),
            catalog_page_count: scaling::row_count(Table::CatalogPage, scale_factor),
            ship_mode_count: scaling::row_count(Table::ShipMode, scale_factor),
            promo_count: scaling::row_count(Table::Promotion, scale_factor),
            total_rows,
            total_orders,
            row: 1,
            order_number: 0,
            line_number: 0,
            order_entered_for: 0,
            order_date_sk: 0,
            order_bill_customer_sk: 0,
            order_ship_customer_sk: 0,
        })
    }

    fn locate(&self, row_number: u64) -> (u64, u64) {
        locate_row(MIN_ITEMS_PER_ORDER, MAX_ITEMS_PER_ORDER, self.ticket_stream.clone(), row_number)
    }

    fn enter_order(&mut self, order_number: u64) -> Result<()> {
        let date = self.date_cursor.date_for_order(order_number, self.total_orders, &self.dists)?;
        self.order_date_sk = date.to_julian_days() as i64;
        self.order_bill_customer_sk =
            self.bill_customer_stream.next_uniform_int(1, self.customer_count.max(1) as i64);
        self.bill_customer_stream.consume_remaining_for_row();
        self.order_ship_customer_sk =
            self.ship_customer_stream.next_uniform_int(1, self.customer_count.max(1) as i64);
        self.ship_customer_stream.consume_remaining_for_row();
        Ok(())
    }
}

impl RowGenerator for CatalogSalesGenerator {
    fn schema(&self) -> &TableSchema {
        &self.schema
    }

    fn total_rows(&self) -> u64 {
        self.total_rows
    }

    fn skip_to(&mut self, row: u64) -> Result<()> {
        if row == 0 {
            self.row = 0;
            self.order_number = 0;
            self.line_number = 0;
            self.order_entered_for = 0;
            return Ok(());
        }
        let (order_number, line_number) = self.locate(row);
        let skip = (row - 1) as i64;
        self.item_stream.skip_rows(skip);
        self.cdemo_stream.skip_rows(skip);
        self.hdemo_stream.skip_rows(skip);
        self.bill_addr_stream.skip_rows(skip);
        self.ship_addr_stream.skip_rows(skip);
        self.call_center_stream.skip_rows(skip);
        self.catalog_page_stream.skip_rows(skip);
        self.ship_mode_stream.skip_rows(skip);
        self.promo_stream.skip_rows(skip);
        self.ship_date_stream.skip_rows(skip);
        self.quantity_stream.skip_rows(skip);
        self.pricing_stream.skip_rows(skip);
        let order_skip = (order_number - 1) as i64;
        self.bill_customer_stream.skip_rows(order_skip);
        self.ship_customer_stream.skip_rows(order_skip);
        self.order_number = order_number;
        self.line_number = line_number;
        self.row = row;
        self.enter_order(order_number)?;
        self.order_entered_for = order_number;
        Ok(())
    }

    fn next_row(&mut self) -> Result<Row> {
        let row_number = self.row;
        if self.line_number == 0 {
            let (order_number, line_number) = self.locate(row_number.max(1));
            self.order_number = order_number;
            self.line_number = line_number;
        }
        if self.order_entered_for != self.order_number {
            self.enter_order(self.order_number)?;
            self.order_entered_for = self.order_number;
        }

        let item_sk = self.item_stream.next_uniform_int(1, self.item_count.max(1) as i64);
        self.item_stream.consume_remaining_for_row();
        let cdemo_sk = self.cdemo_stream.next_uniform_int(1, self.cdemo_count.max(1) as i64);
        self.cdemo_stream.consume_remaining_for_row();
        let hdemo_sk = self.hdemo_stream.next_uniform_int(1, self.hdemo_count.max(1) as i64);
        self.hdemo_stream.consume_remaining_for_row();
        let bill_addr_sk = self.bill_addr_stream.next_uniform_int(1, self.addr_count.max(1) as i64);
        self.bill_addr_stream.consume_remaining_for_row();
        let ship_addr_sk = self.ship_addr_stream.next_uniform_int(1, self.addr_count.max(1) as i64);
        self.ship_addr_stream.consume_remaining_for_row();
        let call_center_sk = self.call_center_stream.next_uniform_int(1, self.call_center_count.max(1) as i64);
        self.call_center_stream.consume_remaining_for_row();
        let catalog_page_sk =
            self.catalog_page_stream.next_uniform_int(1, self.catalog_page_count.max(1) as i64);
        self.catalog_page_stream.consume_remaining_for_row();
        let ship_mode_sk = self.ship_mode_stream.next_uniform_int(1, self.ship_mode_count.max(1) as i64);
        self.ship_mode_stream.consume_remaining_for_row();
        let promo_roll = self.promo_stream.next_uniform_int(0, 99);
        let promo_sk = if promo_roll < 5 {
            Value::Int(self.promo_stream.next_uniform_int(1, self.promo_count.max(1) as i64))
        } else {
            Value::Null
        };
        self.promo_stream.consume_remaining_for_row();
        let ship_date_sk = self.order_date_sk + self.ship_date_stream.next_uniform_int(1, 14);
        self.ship_date_stream.consume_remaining_for_row();

        let quantity = self.quantity_stream.next_uniform_int(1, 100);
        self.quantity_stream.consume_remaining_for_row();
        let wholesale_cost = crate::random::random_decimal(1.0, 100.0, 2, &mut self.pricing_stream);
        let pricing = set_pricing(quantity, wholesale_cost, PricingLimits::default(), &mut self.pricing_stream);
        self.pricing_stream.consume_remaining_for_row();

        self.row += 1;
        self.line_number += 1;

        Ok(vec![
            Value::Int(self.order_date_sk),
            Value::Int(ship_date_sk),
            Value::Int(self.order_bill_customer_sk),
            Value::Int(cdemo_sk),
            Value::Int(hdemo_sk),
            Value::Int(bill_addr_sk),
            Value::Int(self.order_ship_customer_sk),
            Value::Int(ship_addr_sk),
            Value::Int(call_center_sk),
            Value::Int(catalog_page_sk),
            Value::Int(ship_mode_sk),
            promo_sk,
            Value::Int(self.order_number as i64),
            Value::Int(item_sk),
            Value::Int(pricing.quantity),
            Value::Decimal(pricing.wholesale_cost),
            Value::Decimal(pricing.list_price),
            Value::Decimal(pricing.sales_price),
            Value::Decimal(pricing.ext_discount_amt),
            Value::Decimal(pricing.ext_sales_price),
            Value::Decimal(pricing.ext_wholesale_cost),
            Value::Decimal(pricing.ext_list_price),
            Value::Decimal(pricing.ext_tax),
            Value::Decimal(pricing.coupon_amt),
            Value::Decimal(pricing.ext_ship_cost),
            Value::Decimal(pricing.net_paid),
            Value::Decimal(pricing.net_paid_inc_tax),
            Value::Decimal(pricing.net_paid_inc_ship),
            Value::Decimal(pricing.net_paid_inc_ship_tax),
            Value::Decimal(pricing.net_profit),
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
        let mut gen = CatalogSalesGenerator::new(store(), 0.01).unwrap();
        let row = gen.next_row().unwrap();
        assert_eq!(row.len(), gen.schema().columns.len());
    }

    #[test]
    fn total_rows_matches_scaling_table() {
        let gen = CatalogSalesGenerator::new(store(), 0.01).unwrap();
        assert_eq!(gen.total_rows(), crate::tpcds::scaling::row_count(Table::CatalogSales, 0.01));
    }
}
