//! `household_demographics`: cross product of income band, buy potential and
//! dependent/vehicle counts — like `customer_demographics`, a pure function
//! of row number rather than a random draw.

use crate::error::Result;
use crate::row::{ColumnSchema, ColumnType, Row, RowGenerator, TableSchema, Value};

const INCOME_BANDS: i64 = 20;
const BUY_POTENTIALS: [&str; 6] =
    ["Unknown", "0-500", "501-1000", "1001-5000", "5001-10000", "10001+"];
const DEP_COUNTS: i64 = 10;
const VEHICLE_COUNTS: i64 = 6;

fn schema() -> TableSchema {
    TableSchema::new(
        "household_demographics",
        vec![
            ColumnSchema { name: "hd_demo_sk", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "hd_income_band_sk", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "hd_buy_potential", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "hd_dep_count", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "hd_vehicle_count", column_type: ColumnType::Integer, nullable: true },
        ],
    )
}

pub struct HouseholdDemographicsGenerator {
    schema: TableSchema,
    total_rows: u64,
    row: u64,
}

impl HouseholdDemographicsGenerator {
    pub fn new() -> Self {
        let total_rows = (INCOME_BANDS * BUY_POTENTIALS.len() as i64 * DEP_COUNTS * VEHICLE_COUNTS) as u64;
        HouseholdDemographicsGenerator { schema: schema(), total_rows, row: 1 }
    }
}

impl Default for HouseholdDemographicsGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RowGenerator for HouseholdDemographicsGenerator {
    fn schema(&self) -> &TableSchema {
        &self.schema
    }

    fn total_rows(&self) -> u64 {
        self.total_rows
    }

    fn skip_to(&mut self, row: u64) -> Result<()> {
        self.row = row;
        Ok(())
    }

    fn next_row(&mut self) -> Result<Row> {
        let sk = self.row as i64;
        let mut idx = (self.row - 1) as i64;

        let vehicle_count = idx % VEHICLE_COUNTS;
        idx /= VEHICLE_COUNTS;
        let dep_count = idx % DEP_COUNTS;
        idx /= DEP_COUNTS;
        let buy_potential = idx as usize % BUY_POTENTIALS.len();
        idx /= BUY_POTENTIALS.len() as i64;
        let income_band = (idx % INCOME_BANDS) + 1;

        self.row += 1;
        Ok(vec![
            Value::Int(sk),
            Value::Int(income_band),
            Value::Text(BUY_POTENTIALS[buy_potential].to_string()),
            Value::Int(dep_count),
            Value::Int(vehicle_count),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_length_matches_schema() {
        let mut gen = HouseholdDemographicsGenerator::new();
        let row = gen.next_row().unwrap();
        assert_eq!(row.len(), gen.schema().columns.len());
    }

    #[test]
    fn skip_to_matches_sequential_generation() {
        let mut sequential = HouseholdDemographicsGenerator::new();
        sequential.next_row().unwrap();
        let expected = sequential.next_row().unwrap();

        let mut skipped = HouseholdDemographicsGenerator::new();
        skipped.skip_to(2).unwrap();
        let actual = skipped.next_row().unwrap();
        assert_eq!(actual, expected);
    }
}
