//! `store_sales`: the store channel's fact table. Lines are grouped into
//! tickets (§4.5 "Date-weighted calendars" / [`super::sales_common`]); each
//! ticket's length is drawn once and its lines share a ticket number, a
//! sold date, and a customer.

use crate::distribution::DistributionStore;
use crate::error::Result;
use crate::random::RandomStream;
use crate::row::{ColumnSchema, ColumnType, Row, RowGenerator, TableSchema, Value};
use crate::seedplan::stream_for_column;
use crate::tpcds::{scaling, Table};
use crate::types::{set_pricing, PricingLimits};

use super::sales_common::{locate_row, DateCursor};

pub const MIN_ITEMS_PER_TICKET: i64 = 8;
pub const MAX_ITEMS_PER_TICKET: i64 = 16;

const TICKET_STREAM: i64 = 0;
const ITEM_STREAM: i64 = 1;
const CUSTOMER_STREAM: i64 = 2;
const CDEMO_STREAM: i64 = 3;
const HDEMO_STREAM: i64 = 4;
const ADDR_STREAM: i64 = 5;
const STORE_STREAM: i64 = 6;
const PROMO_STREAM: i64 = 7;
const TIME_STREAM: i64 = 8;
const QUANTITY_STREAM: i64 = 9;
const PRICING_STREAM: i64 = 10;

fn schema() -> TableSchema {
    TableSchema::new(
        "store_sales",
        vec![
            ColumnSchema { name: "ss_sold_date_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "ss_sold_time_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "ss_item_sk", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "ss_customer_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "ss_cdemo_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "ss_hdemo_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "ss_addr_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "ss_store_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "ss_promo_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "ss_ticket_number", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "ss_quantity", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "ss_wholesale_cost", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "ss_list_price", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "ss_sales_price", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "ss_ext_discount_amt", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "ss_ext_sales_price", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "ss_ext_wholesale_cost", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "ss_ext_list_price", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "ss_ext_tax", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "ss_coupon_amt", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "ss_ext_ship_cost", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "ss_net_paid", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "ss_net_paid_inc_tax", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "ss_net_paid_inc_ship", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "ss_net_paid_inc_ship_tax", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "ss_net_profit", column_type: ColumnType::Decimal, nullable: true },
        ],
    )
}

pub struct StoreSalesGenerator {
    schema: TableSchema,
    dists: DistributionStore,
    ticket_stream: RandomStream,
    item_stream: RandomStream,
    customer_stream: RandomStream,
    cdemo_stream: RandomStream,
    hdemo_stream: RandomStream,
    addr_stream: RandomStream,
    store_stream: RandomStream,
    promo_stream: RandomStream,
    time_stream: RandomStream,
    quantity_stream: RandomStream,
    pricing_stream: RandomStream,
    date_cursor: DateCursor,
    item_count: u64,
    customer_count: u64,
    cdemo_count: u64,
    hdemo_count: u64,
    addr_count: u64,
    store_count: u64,
    promo_count: u64,
    total_rows: u64,
    total_orders: u64,
    row: u64,
    order_number: u64,
    line_number: u64,
    order_entered_for: u64,
    order_date_sk: i64,
    order_customer_sk: i64,
}

impl StoreSalesGenerator {
    pub fn new(dists: DistributionStore, scale_factor: f64) -> Result<Self> {
        let column_base = Table::StoreSales.column_base();
        let total_rows = scaling::row_count(Table::StoreSales, scale_factor);
        let avg_items = ((MIN_ITEMS_PER_TICKET + MAX_ITEMS_PER_TICKET) / 2) as u64;
        let total_orders = (total_rows / avg_items.max(1)).max(1);

        let (y, m, d) = crate::tpcds::DATA_START_DATE;
        let start_julian = crate::types::Date::new(y, m, d).to_julian_days();
        let date_cursor = DateCursor::new(total_orders, &dists, start_julian)?;

        let item_count = scaling::row_count(Table::Item, scale_factor);
        let customer_count = scaling::row_count(Table::Customer, scale_factor);
        let cdemo_count = scaling::row_count(Table::CustomerDemographics, scale_factor);
        let hdemo_count = scaling::row_count(Table::HouseholdDemographics, scale_factor);
        let addr_count = scaling::row_count(Table::CustomerAddress, scale_factor);
        let store_count = scaling::row_count(Table::Store, scale_factor);
        let promo_count = scaling::row_count(Table::Promotion, scale_factor);

        Ok(StoreSalesGenerator {
            schema: schema(),
            dists,
            ticket_stream: stream_for_column(column_base + TICKET_STREAM, 1, 1),
            item_stream: stream_for_column(column_base + ITEM_STREAM, 1, 1),
            customer_stream: stream_for_column(column_base + CUSTOMER_STREAM, 1, 1),
            cdemo_stream: stream_for_column(column_base + CDEMO_STREAM, 1, 1),
            hdemo_stream: stream_for_column(column_base + HDEMO_STREAM, 1, 1),
            addr_stream: stream_for_column(column_base + ADDR_STREAM, 1, 1),
            store_stream: stream_for_column(column_base + STORE_STREAM, 1, 1),
            promo_stream: stream_for_column(column_base + PROMO_STREAM, 1, 1),
            time_stream: stream_for_column(column_base + TIME_STREAM, 1, 1),
            quantity_stream: stream_for_column(column_base + QUANTITY_STREAM, 1, 1),
            pricing_stream: stream_for_column(column_base + PRICING_STREAM, 6, 1),
            date_cursor,
            item_count,
            customer_count,
            cdemo_count,
            hdemo_count,
            addr_count,
            store_count,
            promo_count,
            total_rows,
            total_orders,
            row: 1,
            order_number: 0,
            line_number: 0,
            order_entered_for: 0,
            order_date_sk: 0,
            order_customer_sk: 0,
        })
    }

    fn enter_order(&mut self, order_number: u64) -> Result<()> {
        let date = self.date_cursor.date_for_order(order_number, self.total_orders, &self.dists)?;
        self.order_date_sk = date.to_julian_days() as i64;
        self.order_customer_sk = self.customer_stream.next_uniform_int(1, self.customer_count.max(1) as i64);
        self.customer_stream.consume_remaining_for_row();
        Ok(())
    }

    fn locate(&self, row_number: u64) -> (u64, u64) {
        locate_row(MIN_ITEMS_PER_TICKET, MAX_ITEMS_PER_TICKET, self.ticket_stream.clone(), row_number)
    }
}

impl RowGenerator for StoreSalesGenerator {
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
        self.item_stream.skip_rows((row - 1) as i64);
        self.cdemo_stream.skip_rows((row - 1) as i64);
        self.hdemo_stream.skip_rows((row - 1) as i64);
        self.addr_stream.skip_rows((row - 1) as i64);
        self.store_stream.skip_rows((row - 1) as i64);
        self.promo_stream.skip_rows((row - 1) as i64);
        self.time_stream.skip_rows((row - 1) as i64);
        self.quantity_stream.skip_rows((row - 1) as i64);
        self.pricing_stream.skip_rows((row - 1) as i64);
        self.customer_stream.skip_rows((order_number - 1) as i64);
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
        let addr_sk = self.addr_stream.next_uniform_int(1, self.addr_count.max(1) as i64);
        self.addr_stream.consume_remaining_for_row();
        let store_sk = self.store_stream.next_uniform_int(1, self.store_count.max(1) as i64);
        self.store_stream.consume_remaining_for_row();
        let promo_roll = self.promo_stream.next_uniform_int(0, 99);
        let promo_sk = if promo_roll < 5 {
            Value::Int(self.promo_stream.next_uniform_int(1, self.promo_count.max(1) as i64))
        } else {
            Value::Null
        };
        self.promo_stream.consume_remaining_for_row();
        let time_sk = self.time_stream.next_uniform_int(0, 86_399);
        self.time_stream.consume_remaining_for_row();

        let quantity = self.quantity_stream.next_uniform_int(1, 100);
        self.quantity_stream.consume_remaining_for_row();
        let wholesale_cost = crate::random::random_decimal(1.0, 100.0, 2, &mut self.pricing_stream);
        let pricing = set_pricing(quantity, wholesale_cost, PricingLimits::default(), &mut self.pricing_stream);
        self.pricing_stream.consume_remaining_for_row();

        self.row += 1;
        self.line_number += 1;

        Ok(vec![
            Value::Int(self.order_date_sk),
            Value::Int(time_sk),
            Value::Int(item_sk),
            Value::Int(self.order_customer_sk),
            Value::Int(cdemo_sk),
            Value::Int(hdemo_sk),
            Value::Int(addr_sk),
            Value::Int(store_sk),
            promo_sk,
            Value::Int(self.order_number as i64),
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
        let mut gen = StoreSalesGenerator::new(store(), 0.01).unwrap();
        let row = gen.next_row().unwrap();
        assert_eq!(row.len(), gen.schema().columns.len());
    }

    #[test]
    fn total_rows_matches_scaling_table() {
        let gen = StoreSalesGenerator::new(store(), 0.01).unwrap();
        assert_eq!(gen.total_rows(), crate::tpcds::scaling::row_count(Table::StoreSales, 0.01));
    }
}
