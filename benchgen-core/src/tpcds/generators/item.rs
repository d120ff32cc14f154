//! `item`: the first slowly-changing dimension, ported from the reference
//! kit's `ItemRowGenerator`. Category/class/brand are derived from the SCD
//! group's start row (rather than a separate hierarchy cache) so every
//! version sharing a business key shares the same merchandise hierarchy
//! (DESIGN.md records this as a deliberate simplification of `HierarchyItem`).

use crate::distribution::DistributionStore;
use crate::error::Result;
use crate::random::{random_charset, random_decimal, RandomStream, DIGITS};
use crate::row::{ColumnSchema, ColumnType, Row, RowGenerator, TableSchema, Value};
use crate::seedplan::stream_for_column;
use crate::tpcds::scd::{change_scd_value, consume_scd_flag, scd_group_start_row, set_scd_keys};
use crate::tpcds::{scaling, Table};
use crate::types::{generate_text, Decimal};

const DESC_STREAM: i64 = 0;
const PRICE_STREAM: i64 = 1;
const MARKDOWN_STREAM: i64 = 2;
const HIERARCHY_STREAM: i64 = 3;
const MANUFACT_STREAM: i64 = 4;
const FORMULATION_STREAM: i64 = 5;
const COLOR_STREAM: i64 = 6;
const UNITS_STREAM: i64 = 7;
const CONTAINER_STREAM: i64 = 8;
const MANAGER_STREAM: i64 = 9;
const SCD_STREAM: i64 = 10;

const CATEGORIES: [&str; 8] = ["Women", "Men", "Children", "Sports", "Electronics", "Home", "Music", "Books"];
const CLASSES_PER_CATEGORY: i64 = 5;
const BRANDS_PER_CLASS: i64 = 4;
const COLORS: [&str; 12] = [
    "almond", "antique", "aquamarine", "azure", "beige", "black", "blue", "brown", "chocolate",
    "coral", "cream", "cyan",
];
const UNITS: [&str; 8] = ["Each", "Box", "Case", "Dozen", "Pound", "Gross", "Bundle", "Carton"];
const CONTAINERS: [&str; 4] = ["Small", "Medium", "Large", "Jumbo"];
const SIZES: [&str; 4] = ["economy", "petite", "small", "extra large"];

fn schema() -> TableSchema {
    TableSchema::new(
        "item",
        vec![
            ColumnSchema { name: "i_item_sk", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "i_item_id", column_type: ColumnType::Text, nullable: false },
            ColumnSchema { name: "i_rec_start_date", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "i_rec_end_date", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "i_item_desc", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "i_current_price", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "i_wholesale_cost", column_type: ColumnType::Decimal, nullable: true },
            ColumnSchema { name: "i_brand_id", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "i_brand", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "i_class_id", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "i_class", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "i_category_id", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "i_category", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "i_manufact_id", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "i_manufact", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "i_size", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "i_formulation", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "i_color", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "i_units", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "i_container", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "i_manager_id", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "i_product_name", column_type: ColumnType::Text, nullable: true },
        ],
    )
}

#[derive(Default, Clone)]
struct OldValues {
    desc: String,
    price: Decimal,
    wholesale_cost: Decimal,
    class_id: i64,
    brand_id: i64,
    manufact_id: i64,
    manufact: String,
    formulation: String,
    color: String,
    units: String,
    container: String,
    size: String,
}

pub struct ItemGenerator {
    schema: TableSchema,
    dists: DistributionStore,
    desc_stream: RandomStream,
    price_stream: RandomStream,
    markdown_stream: RandomStream,
    hierarchy_stream: RandomStream,
    manufact_stream: RandomStream,
    formulation_stream: RandomStream,
    color_stream: RandomStream,
    units_stream: RandomStream,
    container_stream: RandomStream,
    manager_stream: RandomStream,
    scd_stream: RandomStream,
    old_values: OldValues,
    total_rows: u64,
    row: u64,
}

impl ItemGenerator {
    pub fn new(dists: DistributionStore, scale_factor: f64) -> Self {
        let column_base = Table::Item.column_base();
        ItemGenerator {
            schema: schema(),
            dists,
            desc_stream: stream_for_column(column_base + DESC_STREAM, 1, 1),
            price_stream: stream_for_column(column_base + PRICE_STREAM, 1, 1),
            markdown_stream: stream_for_column(column_base + MARKDOWN_STREAM, 1, 1),
            hierarchy_stream: stream_for_column(column_base + HIERARCHY_STREAM, 2, 1),
            manufact_stream: stream_for_column(column_base + MANUFACT_STREAM, 1, 1),
            formulation_stream: stream_for_column(column_base + FORMULATION_STREAM, 8, 1),
            color_stream: stream_for_column(column_base + COLOR_STREAM, 1, 1),
            units_stream: stream_for_column(column_base + UNITS_STREAM, 1, 1),
            container_stream: stream_for_column(column_base + CONTAINER_STREAM, 1, 1),
            manager_stream: stream_for_column(column_base + MANAGER_STREAM, 1, 1),
            scd_stream: stream_for_column(column_base + SCD_STREAM, 1, 1),
            old_values: OldValues::default(),
            total_rows: scaling::row_count(Table::Item, scale_factor),
            row: 1,
        }
    }
}

impl RowGenerator for ItemGenerator {
    fn schema(&self) -> &TableSchema {
        &self.schema
    }

    fn total_rows(&self) -> u64 {
        self.total_rows
    }

    fn skip_to(&mut self, row: u64) -> Result<()> {
        self.old_values = OldValues::default();
        if row == 0 {
            self.row = 0;
            return Ok(());
        }
        let regen_start = scd_group_start_row(row).max(1);
        let skip = (regen_start - 1) as i64;
        self.desc_stream.skip_rows(skip);
        self.price_stream.skip_rows(skip);
        self.markdown_stream.skip_rows(skip);
        self.hierarchy_stream.skip_rows(skip);
        self.manufact_stream.skip_rows(skip);
        self.formulation_stream.skip_rows(skip);
        self.color_stream.skip_rows(skip);
        self.units_stream.skip_rows(skip);
        self.container_stream.skip_rows(skip);
        self.manager_stream.skip_rows(skip);
        self.scd_stream.skip_rows(skip);
        self.row = regen_start;
        while self.row < row {
            self.next_row()?;
        }
        Ok(())
    }

    fn next_row(&mut self) -> Result<Row> {
        let row_number = self.row;
        let keys = set_scd_keys(Table::Item, row_number.max(1));
        let first_record = keys.is_new_key;

        let mut change_flags = self.scd_stream.next_random();
        self.scd_stream.consume_remaining_for_row();

        let item_desc = generate_text(&self.dists, &mut self.desc_stream)?;
        self.desc_stream.consume_remaining_for_row();
        let mut item_desc = item_desc.chars().take(80).collect::<String>();
        change_scd_value(&mut item_desc, &mut self.old_values.desc, &mut change_flags, first_record);

        let current_price = random_decimal(0.5, 200.0, 2, &mut self.price_stream);
        self.price_stream.consume_remaining_for_row();
        let mut current_price = current_price;
        change_scd_value(&mut current_price, &mut self.old_values.price, &mut change_flags, first_record);

        let markdown = random_decimal(0.1, 0.9, 2, &mut self.markdown_stream);
        self.markdown_stream.consume_remaining_for_row();
        let mut wholesale_cost = current_price.mul(&markdown);
        change_scd_value(&mut wholesale_cost, &mut self.old_values.wholesale_cost, &mut change_flags, first_record);

        let group_start = scd_group_start_row(row_number.max(1)).max(1) as i64;
        let category_index = (group_start / 7) % CATEGORIES.len() as i64;
        let category_id = category_index + 1;
        let category = CATEGORIES[category_index as usize].to_string();

        let class_draw = self.hierarchy_stream.next_uniform_int(0, CLASSES_PER_CATEGORY - 1);
        let mut class_id = category_id * CLASSES_PER_CATEGORY + class_draw;
        change_scd_value(&mut class_id, &mut self.old_values.class_id, &mut change_flags, first_record);
        let class_name = format!("{category}-class-{class_draw}");

        let brand_draw = self.hierarchy_stream.next_uniform_int(0, BRANDS_PER_CLASS - 1);
        self.hierarchy_stream.consume_remaining_for_row();
        let mut brand_id = class_id * BRANDS_PER_CLASS + brand_draw;
        change_scd_value(&mut brand_id, &mut self.old_values.brand_id, &mut change_flags, first_record);
        let brand_syllables = self.dists.find("brand_syllables")?;
        let brand = format!(
            "{}{}",
            brand_syllables.get_string(1 + (brand_id % brand_syllables.size() as i64), 1),
            brand_id % 1000
        );

        let size = if !category.is_empty() {
            let size_index = (group_start as usize + 1) % SIZES.len();
            let mut size = SIZES[size_index].to_string();
            change_scd_value(&mut size, &mut self.old_values.size, &mut change_flags, first_record);
            size
        } else {
            consume_scd_flag(&mut change_flags);
            String::new()
        };

        let manufact_id = self.manufact_stream.next_uniform_int(1, 1000);
        self.manufact_stream.consume_remaining_for_row();
        let mut manufact_id = manufact_id;
        change_scd_value(&mut manufact_id, &mut self.old_values.manufact_id, &mut change_flags, first_record);
        let brand_syllables = self.dists.find("brand_syllables")?;
        let mut manufact = format!(
            "{}{}",
            brand_syllables.get_string(1 + (manufact_id % brand_syllables.size() as i64), 1),
            brand_syllables.get_string(1 + ((manufact_id * 7) % brand_syllables.size() as i64), 1)
        );
        change_scd_value(&mut manufact, &mut self.old_values.manufact, &mut change_flags, first_record);

        let mut formulation = random_charset(DIGITS, 8, 20, &mut self.formulation_stream);
        self.formulation_stream.consume_remaining_for_row();
        formulation.push_str(&COLORS[(row_number as usize) % COLORS.len()][..2]);
        change_scd_value(&mut formulation, &mut self.old_values.formulation, &mut change_flags, first_record);

        let color_index = self.color_stream.next_uniform_int(0, COLORS.len() as i64 - 1) as usize;
        self.color_stream.consume_remaining_for_row();
        let mut color = COLORS[color_index].to_string();
        change_scd_value(&mut color, &mut self.old_values.color, &mut change_flags, first_record);

        let units_index = self.units_stream.next_uniform_int(0, UNITS.len() as i64 - 1) as usize;
        self.units_stream.consume_remaining_for_row();
        let mut units = UNITS[units_index].to_string();
        change_scd_value(&mut units, &mut self.old_values.units, &mut change_flags, first_record);

        let container_index = self.container_stream.next_uniform_int(0, CONTAINERS.len() as i64 - 1) as usize;
        self.container_stream.consume_remaining_for_row();
        let mut container = CONTAINERS[container_index].to_string();
        change_scd_value(&mut container, &mut self.old_values.container, &mut change_flags, first_record);

        let manager_id = self.manager_stream.next_uniform_int(1, 100);
        self.manager_stream.consume_remaining_for_row();

        let product_name = format!("{manufact}-{brand}-{row_number}");

        self.row += 1;
        Ok(vec![
            Value::Int(row_number as i64),
            Value::Text(keys.business_key),
            Value::Int(keys.rec_start_date_id as i64),
            if keys.rec_end_date_id < 0 { Value::Null } else { Value::Int(keys.rec_end_date_id as i64) },
            Value::Text(item_desc),
            Value::Decimal(current_price),
            Value::Decimal(wholesale_cost),
            Value::Int(brand_id),
            Value::Text(brand),
            Value::Int(class_id),
            Value::Text(class_name),
            Value::Int(category_id),
            Value::Text(category),
            Value::Int(manufact_id),
            Value::Text(manufact),
            Value::Text(size),
            Value::Text(formulation),
            Value::Text(color),
            Value::Text(units),
            Value::Text(container),
            Value::Int(manager_id),
            Value::Text(product_name),
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
        let mut gen = ItemGenerator::new(store(), 0.01);
        let row = gen.next_row().unwrap();
        assert_eq!(row.len(), gen.schema().columns.len());
    }

    #[test]
    fn total_rows_matches_scaling_table() {
        let gen = ItemGenerator::new(store(), 0.01);
        assert_eq!(gen.total_rows(), crate::tpcds::scaling::row_count(Table::Item, 0.01));
    }

    #[test]
    fn skip_to_matches_sequential_generation() {
        let mut sequential = ItemGenerator::new(store(), 0.01);
        sequential.next_row().unwrap();
        let expected = sequential.next_row().unwrap();

        let mut skipped = ItemGenerator::new(store(), 0.01);
        skipped.skip_to(2).unwrap();
        let actual = skipped.next_row().unwrap();
        assert_eq!(actual, expected);
    }
}
