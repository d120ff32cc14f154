use crate::distribution::DistributionStore;
use crate::error::Result;
use crate::random::RandomStream;
use crate::row::{ColumnSchema, ColumnType, Row, RowGenerator, TableSchema, Value};
use crate::seedplan::{self, tpch::Table};
use crate::types::{generate_text, Decimal};

const SUPPLIERS_PER_PART: i64 = 4;

pub struct PartSuppGenerator {
    schema: TableSchema,
    dists: DistributionStore,
    part_count: u64,
    supplier_count: i64,
    availqty_stream: RandomStream,
    supplycost_stream: RandomStream,
    comment_stream: RandomStream,
    /// Position addresses parts, not individual partsupp rows: each part
    /// yields `SUPPLIERS_PER_PART` consecutive rows before advancing.
    part_row: u64,
    supplier_offset: i64,
}

fn schema() -> TableSchema {
    TableSchema::new(
        "partsupp",
        vec![
            ColumnSchema { name: "ps_partkey", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "ps_suppkey", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "ps_availqty", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "ps_supplycost", column_type: ColumnType::Decimal, nullable: false },
            ColumnSchema { name: "ps_comment", column_type: ColumnType::Text, nullable: false },
        ],
    )
}

impl PartSuppGenerator {
    pub fn new(dists: DistributionStore, scale_factor: f64) -> Self {
        let part_count = (200_000.0 * scale_factor.max(0.0)) as u64;
        PartSuppGenerator {
            schema: schema(),
            dists,
            part_count,
            supplier_count: (10_000.0 * scale_factor.max(0.0)) as i64,
            availqty_stream: seedplan::stream_for_column_tpch_ssb(Table::PartSupp.column_id(0), 5 * SUPPLIERS_PER_PART as u32, 1),
            supplycost_stream: seedplan::stream_for_column_tpch_ssb(Table::PartSupp.column_id(1), 5 * SUPPLIERS_PER_PART as u32, 1),
            comment_stream: seedplan::stream_for_column_tpch_ssb(Table::PartSupp.column_id(2), 5 * SUPPLIERS_PER_PART as u32, 1),
            part_row: 1,
            supplier_offset: 0,
        }
    }

    /// Classic dbgen spreads a part's `SUPPLIERS_PER_PART` suppliers evenly
    /// across the supplier population: `S(i) = (P + i * (S/4 + P/S)) mod S`
    /// with `P` the part key and `S` the supplier count.
    fn supplier_key_for(&self, part_key: i64, offset: i64, supplier_count: i64) -> i64 {
        let s = supplier_count.max(1);
        (part_key + offset * (s / SUPPLIERS_PER_PART + part_key / s)) % s
    }
}

impl RowGenerator for PartSuppGenerator {
    fn schema(&self) -> &TableSchema {
        &self.schema
    }

    fn total_rows(&self) -> u64 {
        self.part_count * SUPPLIERS_PER_PART as u64
    }

    fn skip_to(&mut self, row: u64) -> Result<()> {
        let part_row = (row - 1) / SUPPLIERS_PER_PART as u64 + 1;
        let offset = ((row - 1) % SUPPLIERS_PER_PART as u64) as i64;
        let skip = (part_row - 1) as i64;
        self.availqty_stream.skip_rows(skip);
        self.supplycost_stream.skip_rows(skip);
        self.comment_stream.skip_rows(skip);
        self.part_row = part_row;
        self.supplier_offset = offset;
        Ok(())
    }

    fn next_row(&mut self) -> Result<Row> {
        let part_key = self.part_row as i64 - 1;
        let suppkey = self.supplier_key_for(part_key, self.supplier_offset, self.supplier_count);

        let availqty = self.availqty_stream.next_uniform_int(1, 9999);
        let supplycost_cents = self.supplycost_stream.next_uniform_int(100, 100000);
        let supplycost = Decimal { scale: 0, precision: 2, number: supplycost_cents };
        let comment = generate_text(&self.dists, &mut self.comment_stream)?;

        self.supplier_offset += 1;
        if self.supplier_offset >= SUPPLIERS_PER_PART {
            self.availqty_stream.consume_remaining_for_row();
            self.supplycost_stream.consume_remaining_for_row();
            self.comment_stream.consume_remaining_for_row();
            self.supplier_offset = 0;
            self.part_row += 1;
        }

        Ok(vec![
            Value::Int(part_key),
            Value::Int(suppkey),
            Value::Int(availqty),
            Value::Decimal(supplycost),
            Value::Text(comment),
        ])
    }
}
