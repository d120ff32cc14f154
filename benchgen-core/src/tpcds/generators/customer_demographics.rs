//! `customer_demographics`: the reference kit generates this table as the
//! full cross product of a handful of fixed category axes rather than from
//! random draws, so each row is a pure decomposition of its row number.

use crate::error::Result;
use crate::row::{ColumnSchema, ColumnType, Row, RowGenerator, TableSchema, Value};

const GENDERS: [&str; 2] = ["M", "F"];
const MARITAL_STATUSES: [&str; 5] = ["M", "S", "D", "W", "U"];
const EDUCATIONS: [&str; 7] = [
    "Primary", "Secondary", "College", "2 yr Degree", "4 yr Degree", "Advanced Degree",
    "Unknown",
];
const CREDIT_RATINGS: [&str; 4] = ["Low Risk", "Good", "High Risk", "Unknown"];
const PURCHASE_ESTIMATES: [i64; 20] = [
    500, 1000, 1500, 2000, 2500, 3000, 3500, 4000, 4500, 5000, 5500, 6000, 6500, 7000, 7500, 8000,
    8500, 9000, 9500, 10000,
];

const DEP_COUNT_RANGE: i64 = 7;
const DEP_EMPLOYED_RANGE: i64 = 7;
const DEP_COLLEGE_RANGE: i64 = 7;

fn schema() -> TableSchema {
    TableSchema::new(
        "customer_demographics",
        vec![
            ColumnSchema { name: "cd_demo_sk", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "cd_gender", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "cd_marital_status", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "cd_education_status", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "cd_purchase_estimate", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "cd_credit_rating", column_type: ColumnType::Text, nullable: true },
            ColumnSchema { name: "cd_dep_count", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "cd_dep_employed_count", column_type: ColumnType::Integer, nullable: true },
            ColumnSchema { name: "cd_dep_college_count", column_type: ColumnType::Integer, nullable: true },
        ],
    )
}

pub struct CustomerDemographicsGenerator {
    schema: TableSchema,
    total_rows: u64,
    row: u64,
}

impl CustomerDemographicsGenerator {
    pub fn new() -> Self {
        let total_rows = GENDERS.len()
            * MARITAL_STATUSES.len()
            * EDUCATIONS.len()
            * PURCHASE_ESTIMATES.len()
            * CREDIT_RATINGS.len()
            * DEP_COUNT_RANGE as usize
            * DEP_EMPLOYED_RANGE as usize
            * DEP_COLLEGE_RANGE as usize;
        CustomerDemographicsGenerator { schema: schema(), total_rows: total_rows as u64, row: 1 }
    }
}

impl Default for CustomerDemographicsGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RowGenerator for CustomerDemographicsGenerator {
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

        let dep_college = idx % DEP_COLLEGE_RANGE;
        idx /= DEP_COLLEGE_RANGE;
        let dep_employed = idx % DEP_EMPLOYED_RANGE;
        idx /= DEP_EMPLOYED_RANGE;
        let dep_count = idx % DEP_COUNT_RANGE;
        idx /= DEP_COUNT_RANGE;
        let credit = idx as usize % CREDIT_RATINGS.len();
        idx /= CREDIT_RATINGS.len() as i64;
        let purchase = idx as usize % PURCHASE_ESTIMATES.len();
        idx /= PURCHASE_ESTIMATES.len() as i64;
        let education = idx as usize % EDUCATIONS.len();
        idx /= EDUCATIONS.len() as i64;
        let marital = idx as usize % MARITAL_STATUSES.len();
        idx /= MARITAL_STATUSES.len() as i64;
        let gender = idx as usize % GENDERS.len();

        self.row += 1;
        Ok(vec![
            Value::Int(sk),
            Value::Text(GENDERS[gender].to_string()),
            Value::Text(MARITAL_STATUSES[marital].to_string()),
            Value::Text(EDUCATIONS[education].to_string()),
            Value::Int(PURCHASE_ESTIMATES[purchase]),
            Value::Text(CREDIT_RATINGS[credit].to_string()),
            Value::Int(dep_count),
            Value::Int(dep_employed),
            Value::Int(dep_college),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_length_matches_schema() {
        let mut gen = CustomerDemographicsGenerator::new();
        let row = gen.next_row().unwrap();
        assert_eq!(row.len(), gen.schema().columns.len());
    }

    #[test]
    fn skip_to_matches_sequential_generation() {
        let mut sequential = CustomerDemographicsGenerator::new();
        sequential.next_row().unwrap();
        let expected = sequential.next_row().unwrap();

        let mut skipped = CustomerDemographicsGenerator::new();
        skipped.skip_to(2).unwrap();
        let actual = skipped.next_row().unwrap();
        assert_eq!(actual, expected);
    }
}
