use crate::common::phone_number;
use crate::distribution::DistributionStore;
use crate::error::Result;
use crate::random::{random_charset, RandomStream, ALPHANUMERIC};
use crate::row::{ColumnSchema, ColumnType, Row, RowGenerator, TableSchema, Value};
use crate::seedplan::{self, ssb::Table};

pub struct SupplierGenerator {
    schema: TableSchema,
    dists: DistributionStore,
    total_rows: u64,
    address_stream: RandomStream,
    nation_stream: RandomStream,
    phone_stream: RandomStream,
    row: u64,
}

fn schema() -> TableSchema {
    TableSchema::new(
        "supplier",
        vec![
            ColumnSchema { name: "s_suppkey", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "s_name", column_type: ColumnType::Text, nullable: false },
            ColumnSchema { name: "s_address", column_type: ColumnType::Text, nullable: false },
            ColumnSchema { name: "s_city", column_type: ColumnType::Text, nullable: false },
            ColumnSchema { name: "s_nation", column_type: ColumnType::Text, nullable: false },
            ColumnSchema { name: "s_region", column_type: ColumnType::Text, nullable: false },
            ColumnSchema { name: "s_phone", column_type: ColumnType::Text, nullable: false },
        ],
    )
}

impl SupplierGenerator {
    pub fn new(dists: DistributionStore, scale_factor: f64) -> Self {
        SupplierGenerator {
            schema: schema(),
            dists,
            total_rows: (2_000.0 * scale_factor.max(1.0)) as u64,
            address_stream: seedplan::stream_for_column_tpch_ssb(Table::Supplier.column_id(0), 4, 1),
            nation_stream: seedplan::stream_for_column_tpch_ssb(Table::Supplier.column_id(1), 4, 1),
            phone_stream: seedplan::stream_for_column_tpch_ssb(Table::Supplier.column_id(2), 4, 1),
            row: 1,
        }
    }
}

impl RowGenerator for SupplierGenerator {
    fn schema(&self) -> &TableSchema {
        &self.schema
    }

    fn total_rows(&self) -> u64 {
        self.total_rows
    }

    fn skip_to(&mut self, row: u64) -> Result<()> {
        let skip = (row - 1) as i64;
        self.address_stream.skip_rows(skip);
        self.nation_stream.skip_rows(skip);
        self.phone_stream.skip_rows(skip);
        self.row = row;
        Ok(())
    }

    fn next_row(&mut self) -> Result<Row> {
        let suppkey = self.row as i64 - 1;
        let name = format!("Supplier#{:09}", self.row);
        let address = random_charset(ALPHANUMERIC, 10, 40, &mut self.address_stream);
        self.address_stream.consume_remaining_for_row();

        let nations = self.dists.find("nations")?;
        let nation_index = nations.pick_index(1, &mut self.nation_stream);
        let nation = nations.get_string(nation_index, 1).to_string();
        let region = self.dists.find("regions")?.get_string(1 + nation_index % 5, 1).to_string();
        let city = format!("{}  {}", &nation[..nation.len().min(9)], self.nation_stream.next_uniform_int(0, 9));
        self.nation_stream.consume_remaining_for_row();

        let phone = phone_number(nation_index, &mut self.phone_stream);
        self.phone_stream.consume_remaining_for_row();

        self.row += 1;
        Ok(vec![
            Value::Int(suppkey),
            Value::Text(name),
            Value::Text(address),
            Value::Text(city),
            Value::Text(nation),
            Value::Text(region),
            Value::Text(phone),
        ])
    }
}
