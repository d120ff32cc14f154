use crate::error::Result;
use crate::row::{ColumnSchema, ColumnType, Row, RowGenerator, TableSchema, Value};
use crate::types::Date;

const START: (i32, i32, i32) = (1992, 1, 1);
const TOTAL_DAYS: u64 = 2_556;

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];
const DAY_NAMES: [&str; 7] =
    ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"];

/// `date` is purely computed from the calendar, unlike every other SSB
/// table: no RNG streams are involved (matches the reference kit treating
/// `date_dim`-style dimensions as deterministic given the scale window).
pub struct DateGenerator {
    schema: TableSchema,
    row: u64,
}

fn schema() -> TableSchema {
    TableSchema::new(
        "date",
        vec![
            ColumnSchema { name: "d_datekey", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "d_date", column_type: ColumnType::Text, nullable: false },
            ColumnSchema { name: "d_dayofweek", column_type: ColumnType::Text, nullable: false },
            ColumnSchema { name: "d_month", column_type: ColumnType::Text, nullable: false },
            ColumnSchema { name: "d_year", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "d_yearmonthnum", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "d_yearmonth", column_type: ColumnType::Text, nullable: false },
            ColumnSchema { name: "d_daynuminweek", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "d_daynuminmonth", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "d_daynuminyear", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "d_monthnuminyear", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "d_weeknuminyear", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "d_lastdayinmonthfl", column_type: ColumnType::Integer, nullable: false },
            ColumnSchema { name: "d_weekdayfl", column_type: ColumnType::Integer, nullable: false },
        ],
    )
}

impl DateGenerator {
    pub fn new() -> Self {
        DateGenerator { schema: schema(), row: 1 }
    }
}

impl Default for DateGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RowGenerator for DateGenerator {
    fn schema(&self) -> &TableSchema {
        &self.schema
    }

    fn total_rows(&self) -> u64 {
        TOTAL_DAYS
    }

    fn skip_to(&mut self, row: u64) -> Result<()> {
        self.row = row;
        Ok(())
    }

    fn next_row(&mut self) -> Result<Row> {
        let offset = (self.row - 1) as i32;
        let (y, m, d) = START;
        let epoch = Date::new(y, m, d);
        let date = Date::from_julian_days(epoch.to_julian_days() + offset);

        let datekey = date.year * 10000 + date.month * 100 + date.day;
        let dayofweek = DAY_NAMES[date.day_of_week() as usize].to_string();
        let month_name = MONTH_NAMES[(date.month - 1) as usize].to_string();
        let yearmonthnum = date.year * 100 + date.month;
        let yearmonth = format!("{}{}", &month_name[..3.min(month_name.len())], date.year);
        let day_num_in_week = date.day_of_week() + 1;
        let day_num_in_month = date.day;
        let day_num_in_year = date.day_number();
        let month_num_in_year = date.month;
        let week_num_in_year = (day_num_in_year - 1) / 7 + 1;
        let last_day_in_month_fl = if date.last_day_of_month() == date { 1 } else { 0 };
        let weekday_fl = if (1..=5).contains(&day_num_in_week) { 1 } else { 0 };

        self.row += 1;
        Ok(vec![
            Value::Int(datekey as i64),
            Value::Text(date.to_iso_string()),
            Value::Text(dayofweek),
            Value::Text(month_name),
            Value::Int(date.year as i64),
            Value::Int(yearmonthnum as i64),
            Value::Text(yearmonth),
            Value::Int(day_num_in_week as i64),
            Value::Int(day_num_in_month as i64),
            Value::Int(day_num_in_year as i64),
            Value::Int(month_num_in_year as i64),
            Value::Int(week_num_in_year as i64),
            Value::Int(last_day_in_month_fl),
            Value::Int(weekday_fl),
        ])
    }
}
