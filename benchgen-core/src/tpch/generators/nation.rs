use crate::distribution::DistributionStore;
use crate::error::Result;
use crate::random::RandomStream;
use crate::row::{ColumnSchema, ColumnType, Row, RowGenerator, TableSchema, Value};
use crate::seedplan::{self, tpch::Table};
use crate::types::generate_text;

pub struct NationGenerator {
    schema: TableSchema,
    dists: DistributionStore,
    comment_stream: RandomStream,
    names: Vec<String>,
    region_keys: Vec<i64>,
    row: u64,
}

fn schema() -> TableSchema {
    TableSchema::new(
        "nation",
        vec![
            ColumnSchema { name: "n_nationkey", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "n_name", column_type: ColumnType::Text, nullable: false },
            ColumnSchema { name: "n_regionkey", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "n_comment", column_type: ColumnType::Text, nullable: false },
        ],
    )
}

/// `n_regionkey` for each of the 25 nations in `nations` list order, matching
/// the classic dbgen `nation.tbl` region assignment.
const REGION_KEYS: [i64; 25] = [
    0, 1, 1, 1, 4, 0, 3, 3, 2, 2, 4, 4, 2, 4, 0, 0, 0, 1, 2, 3, 4, 2, 3, 3, 1,
];

impl NationGenerator {
    pub fn new(dists: DistributionStore) -> Self {
        let names = dists
            .find("nations")
            .map(|d| (1..=d.size() as i64).map(|i| d.get_string(i, 1).to_string()).collect())
            .unwrap_or_default();
        NationGenerator {
            schema: schema(),
            dists,
            comment_stream: seedplan::stream_for_column_tpch_ssb(Table::Nation.column_id(0), 8, 1),
            names,
            region_keys: REGION_KEYS.to_vec(),
            row: 1,
        }
    }
}

impl RowGenerator for NationGenerator {
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
        let region_key = self.region_keys.get(index).copied().unwrap_or(0);
        let comment = generate_text(&self.dists, &mut self.comment_stream)?;
        self.comment_stream.consume_remaining_for_row();
        self.row += 1;
        Ok(vec![
            Value::Int(index as i64),
            Value::Text(name),
            Value::Int(region_key),
            Value::Text(comment),
        ])
    }
}
