//! `lineorder` denormalizes TPC-H's orders+lineitem into one flat fact
//! table (SSB's defining simplification): order-level fields repeat across
//! every line of an order, so this generator's row position addresses the
//! order key, same as TPC-H's `LineItemGenerator`.

use crate::distribution::DistributionStore;
use crate::error::Result;
use crate::random::RandomStream;
use crate::row::{ColumnSchema, ColumnType, Row, RowGenerator, TableSchema, Value};
use crate::seedplan::{self, ssb::Table};
use crate::types::{Decimal, Date};

const MIN_LINES: i64 = 1;
const MAX_LINES: i64 = 7;
const ORDER_DATE_START: (i32, i32, i32) = (1992, 1, 1);
const ORDER_DATE_SPAN_DAYS: i32 = 2556;

struct Streams {
    custkey: RandomStream,
    orderdate: RandomStream,
    priority: RandomStream,
    shipmode: RandomStream,
    line_count: RandomStream,
    partkey: RandomStream,
    suppkey: RandomStream,
    quantity: RandomStream,
    discount: RandomStream,
    tax: RandomStream,
    commit_offset: RandomStream,
}

impl Streams {
    fn new() -> Self {
        let t = Table::Lineorder;
        Streams {
            custkey: seedplan::stream_for_column_tpch_ssb(t.column_id(0), 1, 1),
            orderdate: seedplan::stream_for_column_tpch_ssb(t.column_id(1), 1, 1),
            priority: seedplan::stream_for_column_tpch_ssb(t.column_id(2), 1, 1),
            shipmode: seedplan::stream_for_column_tpch_ssb(t.column_id(3), MAX_LINES as u32, 1),
            line_count: seedplan::stream_for_column_tpch_ssb(t.column_id(4), 1, 1),
            partkey: seedplan::stream_for_column_tpch_ssb(t.column_id(5), MAX_LINES as u32, 1),
            suppkey: seedplan::stream_for_column_tpch_ssb(t.column_id(6), MAX_LINES as u32, 1),
            quantity: seedplan::stream_for_column_tpch_ssb(t.column_id(7), MAX_LINES as u32, 1),
            discount: seedplan::stream_for_column_tpch_ssb(t.column_id(8), MAX_LINES as u32, 1),
            tax: seedplan::stream_for_column_tpch_ssb(t.column_id(9), MAX_LINES as u32, 1),
            commit_offset: seedplan::stream_for_column_tpch_ssb(t.column_id(10), MAX_LINES as u32, 1),
        }
    }

    fn skip_to_order(&mut self, order_row: u64) {
        let skip = (order_row - 1) as i64;
        self.custkey.skip_rows(skip);
        self.orderdate.skip_rows(skip);
        self.priority.skip_rows(skip);
        self.shipmode.skip_rows(skip);
        self.line_count.skip_rows(skip);
        self.partkey.skip_rows(skip);
        self.suppkey.skip_rows(skip);
        self.quantity.skip_rows(skip);
        self.discount.skip_rows(skip);
        self.tax.skip_rows(skip);
        self.commit_offset.skip_rows(skip);
    }
}

#[derive(Clone)]
struct Line {
    line_number: i64,
    custkey: i64,
    partkey: i64,
    suppkey: i64,
    order_datekey: i64,
    priority: String,
    ship_priority: i64,
    quantity: i64,
    extended_price: Decimal,
    order_total_price: Decimal,
    discount: Decimal,
    revenue: Decimal,
    supply_cost: Decimal,
    tax: Decimal,
    commit_datekey: i64,
    ship_mode: String,
}

fn datekey_for(offset: i32) -> i64 {
    let (y, m, d) = ORDER_DATE_START;
    let date = Date::from_julian_days(Date::new(y, m, d).to_julian_days() + offset);
    (date.year * 10000 + date.month * 100 + date.day) as i64
}

fn compute_lines(
    order_key: i64,
    customer_count: i64,
    part_count: i64,
    supplier_count: i64,
    dists: &DistributionStore,
    s: &mut Streams,
) -> Result<Vec<Line>> {
    let custkey = s.custkey.next_uniform_int(0, (customer_count - 1).max(0));
    s.custkey.consume_remaining_for_row();

    let order_offset = s.orderdate.next_uniform_int(0, ORDER_DATE_SPAN_DAYS as i64 - 1);
    s.orderdate.consume_remaining_for_row();
    let order_datekey = datekey_for(order_offset as i32);

    let priority = dists.find("o_oprio")?.pick_string(1, 1, &mut s.priority).to_string();
    s.priority.consume_remaining_for_row();

    let ship_priority = order_key % 5;

    let line_count = s.line_count.next_uniform_int(MIN_LINES, MAX_LINES);
    s.line_count.consume_remaining_for_row();

    let mut lines = Vec::with_capacity(line_count as usize);
    let mut order_total = Decimal::ZERO;
    let mut pending = Vec::with_capacity(line_count as usize);

    for line_number in 1..=line_count {
        let partkey = s.partkey.next_uniform_int(0, (part_count - 1).max(0));
        let suppkey = s.suppkey.next_uniform_int(0, (supplier_count - 1).max(0));
        let quantity = s.quantity.next_uniform_int(1, 50);
        let discount_pct = s.discount.next_uniform_int(0, 10);
        let tax_pct = s.tax.next_uniform_int(0, 8);
        let commit_offset = s.commit_offset.next_uniform_int(1, 30);
        let ship_mode = dists.find("smode")?.pick_string(1, 1, &mut s.shipmode).to_string();

        let unit_price = Decimal { scale: 0, precision: 2, number: 90_000 + (partkey / 10 % 20_001) + 100 * (partkey % 1_000) };
        let extended_price = unit_price.mul(&Decimal::from_int(quantity));
        let discount = Decimal { scale: 0, precision: 2, number: discount_pct };
        let tax = Decimal { scale: 0, precision: 2, number: tax_pct };
        let revenue = extended_price.sub(&extended_price.mul(&discount));
        let supply_cost = unit_price.mul(&Decimal::from_str("0.6"));

        order_total = order_total.add(&revenue);

        pending.push((line_number, partkey, suppkey, quantity, extended_price, discount, revenue, supply_cost, tax, commit_offset, ship_mode));
    }
    s.partkey.consume_remaining_for_row();
    s.suppkey.consume_remaining_for_row();
    s.quantity.consume_remaining_for_row();
    s.discount.consume_remaining_for_row();
    s.tax.consume_remaining_for_row();
    s.commit_offset.consume_remaining_for_row();
    s.shipmode.consume_remaining_for_row();

    for (line_number, partkey, suppkey, quantity, extended_price, discount, revenue, supply_cost, tax, commit_offset, ship_mode) in pending {
        lines.push(Line {
            line_number,
            custkey,
            partkey,
            suppkey,
            order_datekey,
            priority: priority.clone(),
            ship_priority,
            quantity,
            extended_price,
            order_total_price: order_total,
            discount,
            revenue,
            supply_cost,
            tax,
            commit_datekey: datekey_for((order_offset + commit_offset).min(ORDER_DATE_SPAN_DAYS as i64 - 1) as i32),
            ship_mode,
        });
    }

    Ok(lines)
}

fn schema() -> TableSchema {
    TableSchema::new(
        "lineorder",
        vec![
            ColumnSchema { name: "lo_orderkey", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "lo_linenumber", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "lo_custkey", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "lo_partkey", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "lo_suppkey", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "lo_orderdate", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "lo_orderpriority", column_type: ColumnType::Text, nullable: false },
            ColumnSchema { name: "lo_shippriority", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "lo_quantity", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "lo_extendedprice", column_type: ColumnType::Decimal, nullable: false },
            ColumnSchema { name: "lo_ordertotalprice", column_type: ColumnType::Decimal, nullable: false },
            ColumnSchema { name: "lo_discount", column_type: ColumnType::Decimal, nullable: false },
            ColumnSchema { name: "lo_revenue", column_type: ColumnType::Decimal, nullable: false },
            ColumnSchema { name: "lo_supplycost", column_type: ColumnType::Decimal, nullable: false },
            ColumnSchema { name: "lo_tax", column_type: ColumnType::Decimal, nullable: false },
            ColumnSchema { name: "lo_commitdate", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "lo_shipmode", column_type: ColumnType::Text, nullable: false },
        ],
    )
}

pub struct LineorderGenerator {
    schema: TableSchema,
    dists: DistributionStore,
    customer_count: i64,
    part_count: i64,
    supplier_count: i64,
    streams: Streams,
    total_rows: u64,
    order_row: u64,
    buffer: Vec<(i64, Line)>,
    buffer_index: usize,
}

impl LineorderGenerator {
    pub fn new(dists: DistributionStore, scale_factor: f64) -> Self {
        let sf = scale_factor.max(1.0);
        LineorderGenerator {
            schema: schema(),
            dists,
            customer_count: (30_000.0 * sf) as i64,
            part_count: (200_000.0 * (1.0 + sf.log2())).floor() as i64,
            supplier_count: (2_000.0 * sf) as i64,
            streams: Streams::new(),
            total_rows: (6_000_000.0 * sf) as u64,
            order_row: 1,
            buffer: Vec::new(),
            buffer_index: 0,
        }
    }

    fn fill_buffer(&mut self) -> Result<()> {
        let order_key = seedplan::mk_sparse(self.order_row as i64, 0);
        let lines = compute_lines(
            order_key,
            self.customer_count,
            self.part_count,
            self.supplier_count,
            &self.dists,
            &mut self.streams,
        )?;
        self.buffer = lines.into_iter().map(|l| (order_key, l)).collect();
        self.buffer_index = 0;
        self.order_row += 1;
        Ok(())
    }
}

impl RowGenerator for LineorderGenerator {
    fn schema(&self) -> &TableSchema {
        &self.schema
    }

    fn total_rows(&self) -> u64 {
        self.total_rows
    }

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
            Value::Int(line.line_number),
            Value::Int(line.custkey),
            Value::Int(line.partkey),
            Value::Int(line.suppkey),
            Value::Int(line.order_datekey),
            Value::Text(line.priority),
            Value::Int(line.ship_priority),
            Value::Int(line.quantity),
            Value::Decimal(line.extended_price),
            Value::Decimal(line.order_total_price),
            Value::Decimal(line.discount),
            Value::Decimal(line.revenue),
            Value::Decimal(line.supply_cost),
            Value::Decimal(line.tax),
            Value::Int(line.commit_datekey),
            Value::Text(line.ship_mode),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::ssb_distributions;

    fn dists() -> DistributionStore {
        let mut store = DistributionStore::new();
        ssb_distributions(&mut store);
        store
    }

    #[test]
    fn first_lineorder_row_has_orderkey_one() {
        let mut gen = LineorderGenerator::new(dists(), 1.0);
        let row = gen.next_row().unwrap();
        assert_eq!(row[0], Value::Int(1));
    }
}
