//! `promotion`: date-scoped marketing promotions tied to a random item.

use crate::distribution::DistributionStore;
use crate::error::Result;
use crate::random::{business_key, RandomStream};
use crate::row::{ColumnSchema, ColumnType, Row, RowGenerator, TableSchema, Value};
use crate::seedplan::stream_for_column;
use crate::tpcds::{scaling, Table};
use crate::types::{generate_text, Decimal};

const ITEM_STREAM: i64 = 0;
const DATE_STREAM: i64 = 1;
const COST_STREAM: i64 = 2;
const CHANNEL_STREAM: i64 = 3;
const NAME_STREAM: i64 = 4;
const RESPONSE_STREAM: i64 = 5;

const RESPONSE_TARGETS: [&str; 3] = ["Unknown", "Print", "Email"];

fn schema() -> TableSchema {
    TableSchema::new(
        "promotion",
        vec![
            ColumnSchema { name: "p_promo_sk", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "p_promo_id", column_type: ColumnType::Text, nullable: false },
            ColumnSchema { name: "p_start_date_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "p_end_date_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "p_item_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "p_cost", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "p_response_target", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "p_promo_name", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "p_channel_dmail", column_type: ColumnType::Boolean, nullable: true },
            ColumnSchema { name: "p_channel_email", column_type: ColumnType::Boolean, nullable: true },
            ColumnSchema { name: "p_channel_catalog", column_type: ColumnType::Boolean, nullable: true },
            ColumnSchema { name: "p_channel_tv", column_type: ColumnType::Boolean, nullable: true },
            ColumnSchema { name: "p_channel_radio", column_type: ColumnType::Boolean, nullable: true },
            ColumnSchema { name: "p_channel_press", column_type: ColumnType::Boolean, nullable: true },
            ColumnSchema { name: "p_channel_event", column_type: ColumnType::Boolean, nullable: true },
            ColumnSchema { name: "p_channel_demo", column_type: ColumnType::Boolean, nullable: true },
            ColumnSchema { name: "p_channel_details", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "p_purpose", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "p_discount_active", column_type: ColumnType::Boolean, nullable: true },
        ],
    )
}

pub struct PromotionGenerator {
    schema: TableSchema,
    dists: DistributionStore,
    item_stream: RandomStream,
    date_stream: RandomStream,
    cost_stream: RandomStream,
    channel_stream: RandomStream,
    name_stream: RandomStream,
    response_stream: RandomStream,
    item_count: u64,
    base_julian: i32,
    total_rows: u64,
    row: u64,
}

impl PromotionGenerator {
    pub fn new(dists: DistributionStore, scale_factor: f64) -> Self {
        let column_base = Table::Promotion.column_base();
        let (y, m, d) = crate::tpcds::DATA_START_DATE;
        PromotionGenerator {
            schema: schema(),
            dists,
            item_stream: stream_for_column(column_base + ITEM_STREAM, 1, 1),
            date_stream: stream_for_column(column_base + DATE_STREAM, 2, 1),
            cost_stream: stream_for_column(column_base + COST_STREAM, 1, 1),
            channel_stream: stream_for_column(column_base + CHANNEL_STREAM, 9, 1),
            name_stream: stream_for_column(column_base + NAME_STREAM, 1, 1),
            response_stream: stream_for_column(column_base + RESPONSE_STREAM, 1, 1),
            item_count: scaling::row_count(Table::Item, scale_factor),
            base_julian: crate::types::Date::new(y, m, d).to_julian_days(),
            total_rows: scaling::row_count(Table::Promotion, scale_factor),
            row: 1,
        }
    }
}

impl RowGenerator for PromotionGenerator {
    fn schema(&self) -> &TableSchema {
        &self.schema
    }

    fn total_rows(&self) -> u64 {
        self.total_rows
    }

    fn skip_to(&mut self, row: u64) -> Result<()> {
        self.row = row;
        self.item_stream.skip_rows((row - 1) as i64);
        self.date_stream.skip_rows((row - 1) as i64);
        self.cost_stream.skip_rows((row - 1) as i64);
        self.channel_stream.skip_rows((row - 1) as i64);
        self.name_stream.skip_rows((row - 1) as i64);
        self.response_stream.skip_rows((row - 1) as i64);
        Ok(())
    }

    fn next_row(&mut self) -> Result<Row> {
        let sk = self.row as i64;
        let item_sk = self.item_stream.next_uniform_int(1, self.item_count.max(1) as i64);
        self.item_stream.consume_remaining_for_row();

        let start_offset = self.date_stream.next_uniform_int(0, 1800);
        let length = self.date_stream.next_uniform_int(1, 60);
        self.date_stream.consume_remaining_for_row();
        let start_sk = self.base_julian as i64 + start_offset;
        let end_sk = start_sk + length;

        let cost = self.cost_stream.next_uniform_int(1000, 100000);
        self.cost_stream.consume_remaining_for_row();

        let mut channels = [false; 8];
        for slot in channels.iter_mut() {
            *slot = self.channel_stream.next_uniform_int(0, 1) == 1;
        }
        self.channel_stream.consume_remaining_for_row();

        let response_index = self.name_stream.next_uniform_int(0, RESPONSE_TARGETS.len() as i64 - 1);
        let name = generate_text(&self.dists, &mut self.name_stream)?;
        self.name_stream.consume_remaining_for_row();

        let purpose_draw = self.response_stream.next_uniform_int(0, 99);
        let discount_active = self.response_stream.next_uniform_int(0, 1) == 1;
        self.response_stream.consume_remaining_for_row();
        let purpose = if purpose_draw < 50 { "Exposure" } else { "Increase Revenue" };

        self.row += 1;
        Ok(vec![
            Value::Int(sk),
            Value::Text(business_key(sk as u64)),
            Value::Int(start_sk),
            Value::Int(end_sk),
            Value::Int(item_sk),
            Value::Decimal(Decimal::from_int(cost)),
            Value::Int(response_index + 1),
            Value::Text(name.chars().take(50).collect()),
            Value::Bool(channels[0]),
            Value::Bool(channels[1]),
            Value::Bool(channels[2]),
            Value::Bool(channels[3]),
            Value::Bool(channels[4]),
            Value::Bool(channels[5]),
            Value::Bool(channels[6]),
            Value::Bool(channels[7]),
            Value::Text(RESPONSE_TARGETS[response_index as usize].to_string()),
            Value::Text(purpose.to_string()),
            Value::Bool(discount_active),
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
        let mut gen = PromotionGenerator::new(store(), 0.01);
        let row = gen.next_row().unwrap();
        assert_eq!(row.len(), gen.schema().columns.len());
    }

    #[test]
    fn total_rows_matches_scaling_table() {
        let gen = PromotionGenerator::new(store(), 0.01);
        assert_eq!(gen.total_rows(), crate::tpcds::scaling::row_count(Table::Promotion, 0.01));
    }

    #[test]
    fn skip_to_matches_sequential_generation() {
        let mut sequential = PromotionGenerator::new(store(), 0.01);
        sequential.next_row().unwrap();
        let expected = sequential.next_row().unwrap();

        let mut skipped = PromotionGenerator::new(store(), 0.01);
        skipped.skip_to(2).unwrap();
        let actual = skipped.next_row().unwrap();
        assert_eq!(actual, expected);
    }
}
