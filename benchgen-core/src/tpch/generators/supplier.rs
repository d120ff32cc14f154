use crate::common::{account_balance, phone_number};
use crate::distribution::DistributionStore;
use crate::error::Result;
use crate::random::RandomStream;
use crate::row::{ColumnSchema, ColumnType, Row, RowGenerator, TableSchema, Value};
use crate::seedplan::{self, tpch::Table};
use crate::types::generate_text;

pub struct SupplierGenerator {
    schema: TableSchema,
    dists: DistributionStore,
    total_rows: u64,
    address_stream: RandomStream,
    nation_stream: RandomStream,
    phone_stream: RandomStream,
    acctbal_stream: RandomStream,
    comment_stream: RandomStream,
    row: u64,
}

fn schema() -> TableSchema {
    TableSchema::new(
        "supplier",
        vec![
            ColumnSchema { name: "s_suppkey", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "s_name", column_type: ColumnType::Text, nullable: false },
            ColumnSchema { name: "s_address", column_type: ColumnType::Text, nullable: false },
            ColumnSchema { name: "s_nationkey", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "s_phone", column_type: ColumnType::Text, nullable: false },
            ColumnSchema { name: "s_acctbal", column_type: ColumnType::Decimal, nullable: false },
            ColumnSchema { name: "s_comment", column_type: ColumnType::Text, nullable: false },
        ],
    )
}

impl SupplierGenerator {
    pub fn new(dists: DistributionStore, scale_factor: f64) -> Self {
        SupplierGenerator {
            schema: schema(),
            dists,
            total_rows: (10_000.0 * scale_factor.max(0.0)) as u64,
            address_stream: seedplan::stream_for_column_tpch_ssb(Table::Supplier.column_id(0), 9, 1),
            nation_stream: seedplan::stream_for_column_tpch_ssb(Table::Supplier.column_id(1), 9, 1),
            phone_stream: seedplan::stream_for_column_tpch_ssb(Table::Supplier.column_id(2), 9, 1),
            acctbal_stream: seedplan::stream_for_column_tpch_ssb(Table::Supplier.column_id(3), 9, 1),
            comment_stream: seedplan::stream_for_column_tpch_ssb(Table::Supplier.column_id(4), 9, 1),
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
        self.acctbal_stream.skip_rows(skip);
        self.comment_stream.skip_rows(skip);
        self.row = row;
        Ok(())
    }

    fn next_row(&mut self) -> Result<Row> {
        let suppkey = self.row as i64 - 1;
        let name = format!("Supplier#{:09}", self.row);
        let address = crate::random::random_charset(crate::random::ALPHANUMERIC, 10, 40, &mut self.address_stream);
        self.address_stream.consume_remaining_for_row();

        let nation_key = self.nation_stream.next_uniform_int(0, 24);
        self.nation_stream.consume_remaining_for_row();

        let phone = phone_number(nation_key, &mut self.phone_stream);
        self.phone_stream.consume_remaining_for_row();

        let acctbal = account_balance(&mut self.acctbal_stream);
        self.acctbal_stream.consume_remaining_for_row();

        let comment = generate_text(&self.dists, &mut self.comment_stream)?;
        self.comment_stream.consume_remaining_for_row();

        self.row += 1;
        Ok(vec![
            Value::Int(suppkey),
            Value::Text(name),
            Value::Text(address),
            Value::Int(nation_key),
            Value::Text(phone),
            Value::Decimal(crate::types::Decimal::from_str(&format!("{acctbal:.2}"))),
            Value::Text(comment),
        ])
    }
}
