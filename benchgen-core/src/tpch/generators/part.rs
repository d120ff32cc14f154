use crate::distribution::DistributionStore;
use crate::error::Result;
use crate::random::RandomStream;
use crate::row::{ColumnSchema, ColumnType, Row, RowGenerator, TableSchema, Value};
use crate::seedplan::{self, tpch::Table};
use crate::types::{generate_text, Decimal};

pub struct PartGenerator {
    schema: TableSchema,
    dists: DistributionStore,
    total_rows: u64,
    name_stream: RandomStream,
    mfgr_stream: RandomStream,
    type_stream: RandomStream,
    size_stream: RandomStream,
    container_stream: RandomStream,
    comment_stream: RandomStream,
    row: u64,
}

fn schema() -> TableSchema {
    TableSchema::new(
        "part",
        vec![
            ColumnSchema { name: "p_partkey", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "p_name", column_type: ColumnType::Text, nullable: false },
            ColumnSchema { name: "p_mfgr", column_type: ColumnType::Text, nullable: false },
            ColumnSchema { name: "p_brand", column_type: ColumnType::Text, nullable: false },
            ColumnSchema { name: "p_type", column_type: ColumnType::Text, nullable: false },
            ColumnSchema { name: "p_size", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "p_container", column_type: ColumnType::Text, nullable: false },
            ColumnSchema { name: "p_retailprice", column_type: ColumnType::Decimal, nullable: false },
            ColumnSchema { name: "p_comment", column_type: ColumnType::Text, nullable: false },
        ],
    )
}

/// Classic dbgen retail-price formula: a deterministic function of the part
/// key, not a random draw, so every scale factor reproduces the same price
/// for the same key.
fn retail_price(part_key: i64) -> Decimal {
    let cents = 90_000 + (part_key / 10 % 20_001) + 100 * (part_key % 1_000);
    Decimal { scale: 0, precision: 2, number: cents }
}

impl PartGenerator {
    pub fn new(dists: DistributionStore, scale_factor: f64) -> Self {
        PartGenerator {
            schema: schema(),
            dists,
            total_rows: (200_000.0 * scale_factor.max(0.0)) as u64,
            name_stream: seedplan::stream_for_column_tpch_ssb(Table::Part.column_id(0), 5, 1),
            mfgr_stream: seedplan::stream_for_column_tpch_ssb(Table::Part.column_id(1), 5, 1),
            type_stream: seedplan::stream_for_column_tpch_ssb(Table::Part.column_id(2), 5, 1),
            size_stream: seedplan::stream_for_column_tpch_ssb(Table::Part.column_id(3), 5, 1),
            container_stream: seedplan::stream_for_column_tpch_ssb(Table::Part.column_id(4), 5, 1),
            comment_stream: seedplan::stream_for_column_tpch_ssb(Table::Part.column_id(5), 5, 1),
            row: 1,
        }
    }
}

impl RowGenerator for PartGenerator {
    fn schema(&self) -> &TableSchema {
        &self.schema
    }

    fn total_rows(&self) -> u64 {
        self.total_rows
    }

    fn skip_to(&mut self, row: u64) -> Result<()> {
        let skip = (row - 1) as i64;
        self.name_stream.skip_rows(skip);
        self.mfgr_stream.skip_rows(skip);
        self.type_stream.skip_rows(skip);
        self.size_stream.skip_rows(skip);
        self.container_stream.skip_rows(skip);
        self.comment_stream.skip_rows(skip);
        self.row = row;
        Ok(())
    }

    fn next_row(&mut self) -> Result<Row> {
        let partkey = self.row as i64 - 1;

        let words = self.dists.find("p_name_words")?;
        let mut picked = Vec::with_capacity(5);
        for _ in 0..5 {
            picked.push(words.pick_string(1, 1, &mut self.name_stream).to_string());
        }
        self.name_stream.consume_remaining_for_row();
        let name = picked.join(" ");

        let mfgr_num = self.mfgr_stream.next_uniform_int(1, 5);
        let brand_num = self.mfgr_stream.next_uniform_int(1, 5);
        self.mfgr_stream.consume_remaining_for_row();
        let mfgr = format!("Manufacturer#{mfgr_num}");
        let brand = format!("Brand#{mfgr_num}{brand_num}");

        let part_type = self
            .dists
            .find("p_types")?
            .pick_string(1, 1, &mut self.type_stream)
            .to_string();
        self.type_stream.consume_remaining_for_row();

        let size = self.size_stream.next_uniform_int(1, 50);
        self.size_stream.consume_remaining_for_row();

        let container = self
            .dists
            .find("containers")?
            .pick_string(1, 1, &mut self.container_stream)
            .to_string();
        self.container_stream.consume_remaining_for_row();

        let comment = generate_text(&self.dists, &mut self.comment_stream)?;
        self.comment_stream.consume_remaining_for_row();

        self.row += 1;
        Ok(vec![
            Value::Int(partkey),
            Value::Text(name),
            Value::Text(mfgr),
            Value::Text(brand),
            Value::Text(part_type),
            Value::Int(size),
            Value::Text(container),
            Value::Decimal(retail_price(partkey)),
            Value::Text(comment),
        ])
    }
}
