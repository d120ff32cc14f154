//! Orders and LineItem are generated together: an order's total price is the
//! sum of its line items' extended prices, so both tables replay the same
//! per-order draws from independently-constructed but identically-seeded
//! streams (same column id -> same initial seed -> same sequence).
//!
//! LineItem's row position addresses *orders*, not individual line rows —
//! the number of lines per order is itself random (1-7), so an absolute
//! line-row number can't be skipped to in O(log n) without having generated
//! every preceding order. Parallel chunking of lineitem is done by order-key
//! range, matching how the reference generator itself partitions this table.

use crate::distribution::DistributionStore;
use crate::error::Result;
use crate::random::RandomStream;
use crate::row::{ColumnSchema, ColumnType, Row, RowGenerator, TableSchema, Value};
use crate::seedplan::{self, tpch::Table};
use crate::types::{generate_text, Date, Decimal};

const MIN_LINES: i64 = 1;
const MAX_LINES: i64 = 7;
const ORDER_DATE_START: (i32, i32, i32) = (1992, 1, 1);
const ORDER_DATE_SPAN_DAYS: i32 = 2557;

struct OrderStreams {
    custkey: RandomStream,
    orderdate: RandomStream,
    priority: RandomStream,
    clerk: RandomStream,
    comment: RandomStream,
    line_count: RandomStream,
    partkey: RandomStream,
    suppkey: RandomStream,
    quantity: RandomStream,
    discount: RandomStream,
    tax: RandomStream,
    returnflag: RandomStream,
    shipdate: RandomStream,
    shipinstruct: RandomStream,
    shipmode: RandomStream,
    linecomment: RandomStream,
}

impl OrderStreams {
    fn new() -> Self {
        let t = Table::Orders;
        OrderStreams {
            custkey: seedplan::stream_for_column_tpch_ssb(t.column_id(0), 1, 1),
            orderdate: seedplan::stream_for_column_tpch_ssb(t.column_id(1), 1, 1),
            priority: seedplan::stream_for_column_tpch_ssb(t.column_id(2), 1, 1),
            clerk: seedplan::stream_for_column_tpch_ssb(t.column_id(3), 1, 1),
            comment: seedplan::stream_for_column_tpch_ssb(t.column_id(4), 8, 1),
            line_count: seedplan::stream_for_column_tpch_ssb(t.column_id(5), 1, 1),
            partkey: seedplan::stream_for_column_tpch_ssb(t.column_id(6), MAX_LINES as u32, 1),
            suppkey: seedplan::stream_for_column_tpch_ssb(t.column_id(7), MAX_LINES as u32, 1),
            quantity: seedplan::stream_for_column_tpch_ssb(t.column_id(8), MAX_LINES as u32, 1),
            discount: seedplan::stream_for_column_tpch_ssb(t.column_id(9), MAX_LINES as u32, 1),
            tax: seedplan::stream_for_column_tpch_ssb(t.column_id(10), MAX_LINES as u32, 1),
            returnflag: seedplan::stream_for_column_tpch_ssb(t.column_id(11), MAX_LINES as u32, 1),
            shipdate: seedplan::stream_for_column_tpch_ssb(t.column_id(12), MAX_LINES as u32 * 3, 1),
            shipinstruct: seedplan::stream_for_column_tpch_ssb(t.column_id(13), MAX_LINES as u32, 1),
            shipmode: seedplan::stream_for_column_tpch_ssb(t.column_id(14), MAX_LINES as u32, 1),
            linecomment: seedplan::stream_for_column_tpch_ssb(t.column_id(15), MAX_LINES as u32 * 8, 1),
        }
    }

    fn skip_to_order(&mut self, order_row: u64) {
        let skip = (order_row - 1) as i64;
        self.custkey.skip_rows(skip);
        self.orderdate.skip_rows(skip);
        self.priority.skip_rows(skip);
        self.clerk.skip_rows(skip);
        self.comment.skip_rows(skip);
        self.line_count.skip_rows(skip);
        self.partkey.skip_rows(skip);
        self.suppkey.skip_rows(skip);
        self.quantity.skip_rows(skip);
        self.discount.skip_rows(skip);
        self.tax.skip_rows(skip);
        self.returnflag.skip_rows(skip);
        self.shipdate.skip_rows(skip);
        self.shipinstruct.skip_rows(skip);
        self.shipmode.skip_rows(skip);
        self.linecomment.skip_rows(skip);
    }
}

#[derive(Debug, Clone)]
struct OrderFields {
    order_key: i64,
    cust_key: i64,
    status: &'static str,
    total_price: Decimal,
    order_date: Date,
    priority: String,
    clerk: String,
    ship_priority: i64,
    comment: String,
}

#[derive(Debug, Clone)]
struct LineFields {
    part_key: i64,
    supp_key: i64,
    line_number: i64,
    quantity: i64,
    extended_price: Decimal,
    discount: Decimal,
    tax: Decimal,
    return_flag: &'static str,
    line_status: &'static str,
    ship_date: Date,
    commit_date: Date,
    receipt_date: Date,
    ship_instruct: String,
    ship_mode: String,
    comment: String,
}

fn order_date_for(stream: &mut RandomStream) -> Date {
    let offset = stream.next_uniform_int(0, ORDER_DATE_SPAN_DAYS as i64);
    let (y, m, d) = ORDER_DATE_START;
    Date::from_julian_days(Date::new(y, m, d).to_julian_days() + offset as i32)
}

fn compute_order(
    order_key: i64,
    scale_factor: f64,
    dists: &DistributionStore,
    s: &mut OrderStreams,
) -> Result<(OrderFields, Vec<LineFields>)> {
    let customer_count = (150_000.0 * scale_factor.max(0.0)) as i64;
    let cust_key = s.custkey.next_uniform_int(0, (customer_count - 1).max(0));
    s.custkey.consume_remaining_for_row();

    let order_date = order_date_for(&mut s.orderdate);
    s.orderdate.consume_remaining_for_row();

    let priority = dists.find("o_oprio")?.pick_string(1, 1, &mut s.priority).to_string();
    s.priority.consume_remaining_for_row();

    let clerk_num = s.clerk.next_uniform_int(1, (1000.0 * scale_factor.max(1.0)) as i64);
    let clerk = format!("Clerk#{clerk_num:09}");
    s.clerk.consume_remaining_for_row();

    let comment = generate_text(dists, &mut s.comment)?;
    s.comment.consume_remaining_for_row();

    let line_count = s.line_count.next_uniform_int(MIN_LINES, MAX_LINES);
    s.line_count.consume_remaining_for_row();

    let part_count = (200_000.0 * scale_factor.max(0.0)) as i64;
    let supplier_count = (10_000.0 * scale_factor.max(0.0)) as i64;

    let mut lines = Vec::with_capacity(line_count as usize);
    let mut total_paid = Decimal::ZERO;
    let mut max_ship_date = order_date;

    for line_number in 1..=line_count {
        let part_key = s.partkey.next_uniform_int(0, (part_count - 1).max(0));
        let supp_key = s.suppkey.next_uniform_int(0, (supplier_count - 1).max(0));
        let quantity = s.quantity.next_uniform_int(1, 50);
        let discount_pct = s.discount.next_uniform_int(0, 10);
        let tax_pct = s.tax.next_uniform_int(0, 8);
        let return_flag = match s.returnflag.next_uniform_int(0, 2) {
            0 => "R",
            1 => "A",
            _ => "N",
        };

        let ship_offset = s.shipdate.next_uniform_int(1, 121);
        let commit_offset = s.shipdate.next_uniform_int(30, 90);
        let receipt_offset = s.shipdate.next_uniform_int(1, 30);
        let ship_date = Date::from_julian_days(order_date.to_julian_days() + ship_offset as i32);
        let commit_date = Date::from_julian_days(order_date.to_julian_days() + commit_offset as i32);
        let receipt_date = Date::from_julian_days(ship_date.to_julian_days() + receipt_offset as i32);
        if ship_date > max_ship_date {
            max_ship_date = ship_date;
        }

        let line_status = if ship_date.days_since_epoch() <= current_date_proxy() { "F" } else { "O" };

        let ship_instruct = dists.find("instruct")?.pick_string(1, 1, &mut s.shipinstruct).to_string();
        let ship_mode = dists.find("smode")?.pick_string(1, 1, &mut s.shipmode).to_string();
        let comment = generate_text(dists, &mut s.linecomment)?;

        let part_retail = Decimal { scale: 0, precision: 2, number: 90_000 + (part_key / 10 % 20_001) + 100 * (part_key % 1_000) };
        let extended_price = part_retail.mul(&Decimal::from_int(quantity));
        let discount = Decimal { scale: 0, precision: 2, number: discount_pct };
        let tax = Decimal { scale: 0, precision: 2, number: tax_pct };
        let net = extended_price.sub(&extended_price.mul(&discount));
        total_paid = total_paid.add(&net.add(&net.mul(&tax)));

        lines.push(LineFields {
            part_key,
            supp_key,
            line_number,
            quantity,
            extended_price,
            discount,
            tax,
            return_flag,
            line_status,
            ship_date,
            commit_date,
            receipt_date,
            ship_instruct,
            ship_mode,
            comment,
        });
    }

    s.partkey.consume_remaining_for_row();
    s.suppkey.consume_remaining_for_row();
    s.quantity.consume_remaining_for_row();
    s.discount.consume_remaining_for_row();
    s.tax.consume_remaining_for_row();
    s.returnflag.consume_remaining_for_row();
    s.shipdate.consume_remaining_for_row();
    s.shipinstruct.consume_remaining_for_row();
    s.shipmode.consume_remaining_for_row();
    s.linecomment.consume_remaining_for_row();

    let status = if max_ship_date.days_since_epoch() <= current_date_proxy() { "F" } else { "O" };
    let ship_priority = order_key % 10;

    Ok((
        OrderFields {
            order_key,
            cust_key,
            status,
            total_price: total_paid,
            order_date,
            priority,
            clerk,
            ship_priority,
            comment,
        },
        lines,
    ))
}

/// Fixed reference point the reference kit's classic dbgen uses to split
/// `O`pen from `F`ulfilled orders/lines (1998-08-02, the kit's data horizon).
fn current_date_proxy() -> i32 {
    Date::new(1998, 8, 2).days_since_epoch()
}

fn order_schema() -> TableSchema {
    TableSchema::new(
        "orders",
        vec![
            ColumnSchema { name: "o_orderkey", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "o_custkey", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "o_orderstatus", column_type: ColumnType::Text, nullable: false },
            ColumnSchema { name: "o_totalprice", column_type: ColumnType::Decimal, nullable: false },
            ColumnSchema { name: "o_orderdate", column_type: ColumnType::Date, nullable: false },
            ColumnSchema { name: "o_orderpriority", column_type: ColumnType::Text, nullable: false },
            ColumnSchema { name: "o_clerk", column_type: ColumnType::Text, nullable: false },
            ColumnSchema { name: "o_shippriority", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "o_comment", column_type: ColumnType::Text, nullable: false },
        ],
    )
}

fn lineitem_schema() -> TableSchema {
    TableSchema::new(
        "lineitem",
        vec![
            ColumnSchema { name: "l_orderkey", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "l_partkey", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "l_suppkey", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "l_linenumber", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "l_quantity", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "l_extendedprice", column_type: ColumnType::Decimal, nullable: false },
            ColumnSchema { name: "l_discount", column_type: ColumnType::Decimal, nullable: false },
            ColumnSchema { name: "l_tax", column_type: ColumnType::Decimal, nullable: false },
            ColumnSchema { name: "l_returnflag", column_type: ColumnType::Text, nullable: false },
            ColumnSchema { name: "l_linestatus", column_type: ColumnType::Text, nullable: false },
            ColumnSchema { name: "l_shipdate", column_type: ColumnType::Date, nullable: false },
            ColumnSchema { name: "l_commitdate", column_type: ColumnType::Date, nullable: false },
            ColumnSchema { name: "l_receiptdate", column_type: ColumnType::Date, nullable: false },
            ColumnSchema { name: "l_shipinstruct", column_type: ColumnType::Text, nullable: false },
            ColumnSchema { name: "l_shipmode", column_type: ColumnType::Text, nullable: false },
            ColumnSchema { name: "l_comment", column_type: ColumnType::Text, nullable: false },
        ],
    )
}

pub struct OrdersGenerator {
    schema: TableSchema,
    dists: DistributionStore,
    scale_factor: f64,
    streams: OrderStreams,
    total_rows: u64,
    row: u64,
}

impl OrdersGenerator {
    pub fn new(dists: DistributionStore, scale_factor: f64) -> Self {
        OrdersGenerator {
            schema: order_schema(),
            dists,
            scale_factor,
            streams: OrderStreams::new(),
            total_rows: (1_500_000.0 * scale_factor.max(0.0)) as u64,
            row: 1,
        }
    }
}

impl RowGenerator for OrdersGenerator {
    fn schema(&self) -> &TableSchema {
        &self.schema
    }

    fn total_rows(&self) -> u64 {
        self.total_rows
    }

    fn skip_to(&mut self, row: u64) -> Result<()> {
        self.streams.skip_to_order(row);
        self.row = row;
        Ok(())
    }

    fn next_row(&mut self) -> Result<Row> {
        let order_key = seedplan::mk_sparse(self.row as i64, 0);
        let (order, _lines) = compute_order(order_key, self.scale_factor, &self.dists, &mut self.streams)?;
        self.row += 1;
        Ok(vec![
            Value::Int(order.order_key),
            Value::Int(order.cust_key),
            Value::Text(order.status.to_string()),
            Value::Decimal(order.total_price),
            Value::Date(order.order_date),
            Value::Text(order.priority),
            Value::Text(order.clerk),
            Value::Int(order.ship_priority),
            Value::Text(order.comment),
        ])
    }
}

pub struct LineItemGenerator {
    schema: TableSchema,
    dists: DistributionStore,
    scale_factor: f64,
    streams: OrderStreams,
    total_rows: u64,
    order_row: u64,
    buffer: Vec<(i64, LineFields)>,
    buffer_index: usize,
}

impl LineItemGenerator {
    pub fn new(dists: DistributionStore, scale_factor: f64) -> Self {
        LineItemGenerator {
            schema: lineitem_schema(),
            dists,
            scale_factor,
            streams: OrderStreams::new(),
            total_rows: (1_500_000.0 * scale_factor.max(0.0)) as u64 * 4,
            order_row: 1,
            buffer: Vec::new(),
            buffer_index: 0,
        }
    }

    fn fill_buffer(&mut self) -> Result<()> {
        let order_key = seedplan::mk_sparse(self.order_row as i64, 0);
        let (_, lines) = compute_order(order_key, self.scale_factor, &self.dists, &mut self.streams)?;
        self.buffer = lines.into_iter().map(|l| (order_key, l)).collect();
        self.buffer_index = 0;
        self.order_row += 1;
        Ok(())
    }
}

impl RowGenerator for LineItemGenerator {
    fn schema(&self) -> &TableSchema {
        &self.schema
    }

    fn total_rows(&self) -> u64 {
        self.total_rows
    }

    /// `row` addresses the order-key position, matching [`OrdersGenerator`].
    fn skip_to(&mut self, row: u64) -> Result<()> {
        self.streams.skip_to_order(row);
        self.order_row = row;
        self.buffer.clear();
        self.buffer_index = 0;
        Ok(())
    }

    fn next_row(&mut self) -> Result<Row> {
        if self.buffer_index >= self.buffer.len() {
            self.fill_buffer()?;
        }
        let (order_key, line) = self.buffer[self.buffer_index].clone();
        self.buffer_index += 1;
        Ok(vec![
            Value::Int(order_key),
            Value::Int(line.part_key),
            Value::Int(line.supp_key),
            Value::Int(line.line_number),
            Value::Int(line.quantity),
            Value::Decimal(line.extended_price),
            Value::Decimal(line.discount),
            Value::Decimal(line.tax),
            Value::Text(line.return_flag.to_string()),
            Value::Text(line.line_status.to_string()),
            Value::Date(line.ship_date),
            Value::Date(line.commit_date),
            Value::Date(line.receipt_date),
            Value::Text(line.ship_instruct),
            Value::Text(line.ship_mode),
            Value::Text(line.comment),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::tpch_distributions;

    fn dists() -> DistributionStore {
        let mut store = DistributionStore::new();
        tpch_distributions(&mut store);
        store
    }

    #[test]
    fn first_order_row_has_orderkey_one() {
        let mut gen = OrdersGenerator::new(dists(), 1.0);
        let row = gen.next_row().unwrap();
        assert_eq!(row[0], Value::Int(1));
    }

    #[test]
    fn first_lineitem_row_joins_the_first_order() {
        let mut gen = LineItemGenerator::new(dists(), 1.0);
        let row = gen.next_row().unwrap();
        assert_eq!(row[0], Value::Int(1));
    }

    #[test]
    fn orderkeys_stay_distinct_across_several_orders() {
        let mut gen = OrdersGenerator::new(dists(), 1.0);
        let keys: Vec<Value> = (0..20).map(|_| gen.next_row().unwrap()[0].clone()).collect();
        let mut seen = std::collections::HashSet::new();
        assert!(keys.iter().all(|k| seen.insert(format!("{k:?}"))));
    }
}
