use crate::distribution::DistributionStore;
use crate::error::Result;
use crate::random::RandomStream;
use crate::row::{ColumnSchema, ColumnType, Row, RowGenerator, TableSchema, Value};
use crate::seedplan::{self, tpch::Table};
use crate::types::generate_text;

pub struct RegionGenerator {
    schema: TableSchema,
    dists: DistributionStore,
    comment_stream: RandomStream,
    names: Vec<String>,
    row: u64,
}

fn schema() -> TableSchema {
    TableSchema::new(
        "region",
        vec![
            ColumnSchema { name: "r_regionkey", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "r_name", column_type: ColumnType::Text, nullable: false },
            ColumnSchema { name: "r_comment", column_type: ColumnType::Text, nullable: false },
        ],
    )
}

impl RegionGenerator {
    pub fn new(dists: DistributionStore) -> Self {
        let names = dists
            .find("regions")
            .map(|d| (1..=d.size() as i64).map(|i| d.get_string(i, 1).to_string()).collect())
            .unwrap_or_default();
        RegionGenerator {
            schema: schema(),
            dists,
            comment_stream: seedplan::stream_for_column_tpch_ssb(Table::Region.column_id(0), 8, 1),
            names,
            row: 1,
        }
    }
}

impl RowGenerator for RegionGenerator {
    fn schema(&self) -> &TableSchema {
        &self.schema
    }

    fn total_rows(&self) -> u64 {
        self.names.len() as u64
    }

    fn skip_to(&mut self, row: u64) -> Result<()> {
        self.comment_stream.skip_rows((row - 1) as i64);
        self.row = row;
        Ok(())
    }

    fn next_row(&mut self) -> Result<Row> {
        let index = (self.row - 1) as usize;
        let name = self.names[index].clone();
        let comment = generate_text(&self.dists, &mut self.comment_stream)?;
        self.comment_stream.consume_remaining_for_row();
        self.row += 1;
        Ok(vec![
            Value::Int(index as i64),
            Value::Text(name),
            Value::Text(comment),
        ])
    }
}
