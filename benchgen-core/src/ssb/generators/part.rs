use crate::distribution::DistributionStore;
use crate::error::Result;
use crate::random::RandomStream;
use crate::row::{ColumnSchema, ColumnType, Row, RowGenerator, TableSchema, Value};
use crate::seedplan::{self, ssb::Table};

pub struct PartGenerator {
    schema: TableSchema,
    dists: DistributionStore,
    total_rows: u64,
    name_stream: RandomStream,
    category_stream: RandomStream,
    brand_stream: RandomStream,
    color_stream: RandomStream,
    container_stream: RandomStream,
    row: u64,
}

fn schema() -> TableSchema {
    TableSchema::new(
        "part",
        vec![
            ColumnSchema { name: "p_partkey", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "p_name", column_type: ColumnType::Text, nullable: false },
            ColumnSchema { name: "p_mfgr", column_type: ColumnType::Text, nullable: false },
            ColumnSchema { name: "p_category", column_type: ColumnType::Text, nullable: false },
            ColumnSchema { name: "p_brand1", column_type: ColumnType::Text, nullable: false },
            ColumnSchema { name: "p_color", column_type: ColumnType::Text, nullable: false },
            ColumnSchema { name: "p_type", column_type: ColumnType::Text, nullable: false },
            ColumnSchema { name: "p_size", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "p_container", column_type: ColumnType::Text, nullable: false },
        ],
    )
}

impl PartGenerator {
    pub fn new(dists: DistributionStore, scale_factor: f64) -> Self {
        let sf = scale_factor.max(1.0);
        PartGenerator {
            schema: schema(),
            dists,
            total_rows: (200_000.0 * (1.0 + sf.log2())).floor() as u64,
            name_stream: seedplan::stream_for_column_tpch_ssb(Table::Part.column_id(0), 6, 1),
            category_stream: seedplan::stream_for_column_tpch_ssb(Table::Part.column_id(1), 6, 1),
            brand_stream: seedplan::stream_for_column_tpch_ssb(Table::Part.column_id(2), 6, 1),
            color_stream: seedplan::stream_for_column_tpch_ssb(Table::Part.column_id(3), 6, 1),
            container_stream: seedplan::stream_for_column_tpch_ssb(Table::Part.column_id(4), 6, 1),
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
        self.category_stream.skip_rows(skip);
        self.brand_stream.skip_rows(skip);
        self.color_stream.skip_rows(skip);
        self.container_stream.skip_rows(skip);
        self.row = row;
        Ok(())
    }

    fn next_row(&mut self) -> Result<Row> {
        let partkey = self.row as i64 - 1;
        let name = self
            .dists
            .find("p_name_words")?
            .pick_string(1, 1, &mut self.name_stream)
            .to_string();
        self.name_stream.consume_remaining_for_row();

        let mfgr_num = self.category_stream.next_uniform_int(1, 5);
        let category_num = self.category_stream.next_uniform_int(1, 5);
        let mfgr = format!("MFGR#{mfgr_num}");
        let category = format!("MFGR#{mfgr_num}{category_num}");
        self.category_stream.consume_remaining_for_row();

        let brand_num = self.brand_stream.next_uniform_int(1, 40);
        let brand = format!("{category}{brand_num:02}");
        self.brand_stream.consume_remaining_for_row();

        let color = self.dists.find("colors")?.pick_string(1, 1, &mut self.color_stream).to_string();
        self.color_stream.consume_remaining_for_row();

        let part_type = self.dists.find("p_types")?.pick_string(1, 1, &mut self.container_stream).to_string();
        let size = self.container_stream.next_uniform_int(1, 50);
        let container = self.dists.find("containers")?.pick_string(1, 1, &mut self.container_stream).to_string();
        self.container_stream.consume_remaining_for_row();

        self.row += 1;
        Ok(vec![
            Value::Int(partkey),
            Value::Text(name),
            Value::Text(mfgr),
            Value::Text(category),
            Value::Text(brand),
            Value::Text(color),
            Value::Text(part_type),
            Value::Int(size),
            Value::Text(container),
        ])
    }
}
