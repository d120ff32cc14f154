//! `web_returns`: the web channel's return fact table. Shares
//! [`super::catalog_returns`]'s independent-context simplification, and adds
//! `wr_refunded`/`wr_returning` customer pair.

use crate::distribution::DistributionStore;
use crate::error::Result;
use crate::random::RandomStream;
use crate::row::{ColumnSchema, ColumnType, Row, RowGenerator, TableSchema, Value};
use crate::seedplan::stream_for_column;
use crate::tpcds::{scaling, Table};
use crate::types::{set_pricing, set_return_pricing, PricingLimits};

const ITEM_STREAM: i64 = 0;
const REFUNDED_CUSTOMER_STREAM: i64 = 1;
const RETURNING_CUSTOMER_STREAM: i64 = 2;
const CDEMO_STREAM: i64 = 3;
const HDEMO_STREAM: i64 = 4;
const ADDR_STREAM: i64 = 5;
const WEB_PAGE_STREAM: i64 = 6;
const REASON_STREAM: i64 = 7;
const DATE_STREAM: i64 = 8;
const SALE_STREAM: i64 = 9;
const RETURN_STREAM: i64 = 10;

fn schema() -> TableSchema {
    TableSchema::new(
        "web_returns",
        vec![
            ColumnSchema { name: "wr_returned_date_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "wr_item_sk", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "wr_refunded_customer_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "wr_refunded_cdemo_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "wr_refunded_hdemo_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "wr_refunded_addr_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "wr_returning_customer_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "wr_web_page_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "wr_reason_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "wr_order_number", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "wr_return_quantity", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "wr_return_amt", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "wr_return_tax", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "wr_return_amt_inc_tax", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "wr_fee", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "wr_return_ship_cost", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "wr_refunded_cash", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "wr_reversed_charge", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "wr_account_credit", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "wr_net_loss", column_type: ColumnType::Decimal, nullable: true },
        ],
    )
}

pub struct WebReturnsGenerator {
    schema: TableSchema,
    item_stream: RandomStream,
    refunded_customer_stream: RandomStream,
    returning_customer_stream: RandomStream,
    cdemo_stream: RandomStream,
    hdemo_stream: RandomStream,
    addr_stream: RandomStream,
    web_page_stream: RandomStream,
    reason_stream: RandomStream,
    date_stream: RandomStream,
    sale_stream: RandomStream,
    return_stream: RandomStream,
    item_count: u64,
    customer_count: u64,
    cdemo_count: u64,
    hdemo_count: u64,
    addr_count: u64,
    web_page_count: u64,
    reason_count: u64,
    base_julian: i64,
    total_rows: u64,
    row: u64,
}

impl WebReturnsGenerator {
    pub fn new(_dists: DistributionStore, scale_factor: f64) -> Self {
        let column_base = Table::WebReturns.column_base();
        let (y, m, d) = crate::tpcds::DATA_START_DATE;
        WebReturnsGenerator {
            schema: schema(),
            item_stream: stream_for_column(column_base + ITEM_STREAM, 1, 1),
            refunded_customer_stream: stream_for_column(column_base + REFUNDED_CUSTOMER_STREAM, 1, 1),
            returning_customer_stream: stream_for_column(column_base + RETURNING_CUSTOMER_STREAM, 1, 1),
            cdemo_stream: stream_for_column(column_base + CDEMO_STREAM, 1, 1),
            hdemo_stream: stream_for_column(column_base + HDEMO_STREAM, 1, 1),
            addr_stream: stream_for_column(column_base + ADDR_STREAM, 1, 1),
            web_page_stream: stream_for_column(column_base + WEB_PAGE_STREAM, 1, 1),
            reason_stream: stream_for_column(column_base + REASON_STREAM, 1, 1),
            date_stream: stream_for_column(column_base + DATE_STREAM, 1, 1),
            sale_stream: stream_for_column(column_base + SALE_STREAM, 2, 1),
            return_stream: stream_for_column(column_base + RETURN_STREAM, 5, 1),
            item_count: scaling::row_count(Table::Item, scale_factor),
            customer_count: scaling::row_count(Table::Customer, scale_factor),
            cdemo_count: scaling::row_count(Table::CustomerDemographics, scale_factor),
            hdemo_count: scaling::row_count(Table::HouseholdDemographics, scale_factor),
            addr_count: scaling::row_count(Table::CustomerAddress, scale_factor),
            web_page_count: scaling::row_count(Table::WebPage, scale_factor),
            reason_count: scaling::row_count(Table::Reason, scale_factor),
            base_julian: crate::types::Date::new(y, m, d).to_julian_days() as i64,
            total_rows: scaling::row_count(Table::WebReturns, scale_factor),
            row: 1,
        }
    }
}

impl RowGenerator for WebReturnsGenerator {
    fn schema(&self) -> &TableSchema {
        &self.schema
    }

    fn total_rows(&self) -> u64 {
        self.total_rows
    }

    fn skip_to(&mut self, row: u64) -> Result<()> {
        let skip = row as i64;
        self.item_stream.skip_rows(skip);
        self.refunded_customer_stream.skip_rows(skip);
        self.returning_customer_stream.skip_rows(skip);
        self.cdemo_stream.skip_rows(skip);
        self.hdemo_stream.skip_rows(skip);
        self.addr_stream.skip_rows(skip);
        self.web_page_stream.skip_rows(skip);
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
        let refunded_customer_sk =
            self.refunded_customer_stream.next_uniform_int(1, self.customer_count.max(1) as i64);
        self.refunded_customer_stream.consume_remaining_for_row();
        let returning_customer_sk =
            self.returning_customer_stream.next_uniform_int(1, self.customer_count.max(1) as i64);
        self.returning_customer_stream.consume_remaining_for_row();
        let cdemo_sk = self.cdemo_stream.next_uniform_int(1, self.cdemo_count.max(1) as i64);
        self.cdemo_stream.consume_remaining_for_row();
        let hdemo_sk = self.hdemo_stream.next_uniform_int(1, self.hdemo_count.max(1) as i64);
        self.hdemo_stream.consume_remaining_for_row();
        let addr_sk = self.addr_stream.next_uniform_int(1, self.addr_count.max(1) as i64);
        self.addr_stream.consume_remaining_for_row();
        let web_page_sk = self.web_page_stream.next_uniform_int(1, self.web_page_count.max(1) as i64);
        self.web_page_stream.consume_remaining_for_row();
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
            Value::Int(refunded_customer_sk),
            Value::Int(cdemo_sk),
            Value::Int(hdemo_sk),
            Value::Int(addr_sk),
            Value::Int(returning_customer_sk),
            Value::Int(web_page_sk),
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
        let mut gen = WebReturnsGenerator::new(store(), 0.01);
        let row = gen.next_row().unwrap();
        assert_eq!(row.len(), gen.schema().columns.len());
    }

    #[test]
    fn total_rows_matches_scaling_table() {
        let gen = WebReturnsGenerator::new(store(), 0.01);
        assert_eq!(gen.total_rows(), crate::tpcds::scaling::row_count(Table::WebReturns, 0.01));
    }
}
