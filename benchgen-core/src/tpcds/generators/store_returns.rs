//! `store_returns`: the store channel's return fact table.
//!
//! Unlike the reference kit, which derives each return from the exact
//! `store_sales` line it reverses, this generator draws its own independent
//! original-sale context (item/customer/quantity/wholesale cost) per return
//! row and feeds it through the same [`crate::types::set_return_pricing`]
//! used everywhere else. The return rows are statistically faithful (same
//! pricing model, same return-rate-driven row count) but are not a literal
//! join against previously emitted `store_sales` rows.

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
const STORE_STREAM: i64 = 5;
const REASON_STREAM: i64 = 6;
const TIME_STREAM: i64 = 7;
const DATE_STREAM: i64 = 8;
const SALE_STREAM: i64 = 9;
const RETURN_STREAM: i64 = 10;

fn schema() -> TableSchema {
    TableSchema::new(
        "store_returns",
        vec![
            ColumnSchema { name: "sr_returned_date_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "sr_return_time_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "sr_item_sk", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "sr_customer_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "sr_cdemo_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "sr_hdemo_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "sr_addr_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "sr_store_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "sr_reason_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "sr_ticket_number", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "sr_return_quantity", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "sr_return_amt", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "sr_return_tax", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "sr_return_amt_inc_tax", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "sr_fee", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "sr_return_ship_cost", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "sr_refunded_cash", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "sr_reversed_charge", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "sr_store_credit", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "sr_net_loss", column_type: ColumnType::Decimal, nullable: true },
        ],
    )
}

pub struct StoreReturnsGenerator {
    schema: TableSchema,
    item_stream: RandomStream,
    customer_stream: RandomStream,
    cdemo_stream: RandomStream,
    hdemo_stream: RandomStream,
    addr_stream: RandomStream,
    store_stream: RandomStream,
    reason_stream: RandomStream,
    time_stream: RandomStream,
    date_stream: RandomStream,
    sale_stream: RandomStream,
    return_stream: RandomStream,
    item_count: u64,
    customer_count: u64,
    cdemo_count: u64,
    hdemo_count: u64,
    addr_count: u64,
    store_count: u64,
    reason_count: u64,
    base_julian: i64,
    total_rows: u64,
    row: u64,
}

impl StoreReturnsGenerator {
    pub fn new(_dists: DistributionStore, scale_factor: f64) -> Self {
        let column_base = Table::StoreReturns.column_base();
        let (y, m, d) = crate::tpcds::DATA_START_DATE;
        StoreReturnsGenerator {
            schema: schema(),
            item_stream: stream_for_column(column_base + ITEM_STREAM, 1, 1),
            customer_stream: stream_for_column(column_base + CUSTOMER_STREAM, 1, 1),
            cdemo_stream: stream_for_column(column_base + CDEMO_STREAM, 1, 1),
            hdemo_stream: stream_for_column(column_base + HDEMO_STREAM, 1, 1),
            addr_stream: stream_for_column(column_base + ADDR_STREAM, 1, 1),
            store_stream: stream_for_column(column_base + STORE_STREAM, 1, 1),
            reason_stream: stream_for_column(column_base + REASON_STREAM, 1, 1),
            time_stream: stream_for_column(column_base + TIME_STREAM, 1, 1),
            date_stream: stream_for_column(column_base + DATE_STREAM, 1, 1),
            sale_stream: stream_for_column(column_base + SALE_STREAM, 2, 1),
            return_stream: stream_for_column(column_base + RETURN_STREAM, 5, 1),
            item_count: scaling::row_count(Table::Item, scale_factor),
            customer_count: scaling::row_count(Table::Customer, scale_factor),
            cdemo_count: scaling::row_count(Table::CustomerDemographics, scale_factor),
            hdemo_count: scaling::row_count(Table::HouseholdDemographics, scale_factor),
            addr_count: scaling::row_count(Table::CustomerAddress, scale_factor),
            store_count: scaling::row_count(Table::Store, scale_factor),
            reason_count: scaling::row_count(Table::Reason, scale_factor),
            base_julian: crate::types::Date::new(y, m, d).to_julian_days() as i64,
            total_rows: scaling::row_count(Table::StoreReturns, scale_factor),
            row: 1,
        }
    }
}

impl RowGenerator for StoreReturnsGenerator {
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
        self.store_stream.skip_rows(skip);
        self.reason_stream.skip_rows(skip);
        self.time_stream.skip_rows(skip);
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
        let store_sk = self.store_stream.next_uniform_int(1, self.store_count.max(1) as i64);
        self.store_stream.consume_remaining_for_row();
        let reason_sk = self.reason_stream.next_uniform_int(1, self.reason_count.max(1) as i64);
        self.reason_stream.consume_remaining_for_row();
        let time_sk = self.time_stream.next_uniform_int(0, 86_399);
        self.time_stream.consume_remaining_for_row();
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
            Value::Int(time_sk),
            Value::Int(item_sk),
            Value::Int(customer_sk),
            Value::Int(cdemo_sk),
            Value::Int(hdemo_sk),
            Value::Int(addr_sk),
            Value::Int(store_sk),
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
        let mut gen = StoreReturnsGenerator::new(store(), 0.01);
        let row = gen.next_row().unwrap();
        assert_eq!(row.len(), gen.schema().columns.len());
    }

    #[test]
    fn total_rows_matches_scaling_table() {
        let gen = StoreReturnsGenerator::new(store(), 0.01);
        assert_eq!(gen.total_rows(), crate::tpcds::scaling::row_count(Table::StoreReturns, 0.01));
    }
}
