//! SSB table ordinals and seed-advance order, ported from the reference
//! kit's SSB `TableId` enum and `DbgenContext::AdvanceSeedsForTable`.

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i64)]
pub enum Table {
    Customer = 0,
    Part = 1,
    Supplier = 2,
    Date = 3,
    Lineorder = 4,
}

pub const TABLE_COUNT: usize = 5;
const COLUMNS_PER_TABLE: i64 = 25;

impl Table {
    pub fn name(&self) -> &'static str {
        match self {
            Table::Customer => "customer",
            Table::Part => "part",
            Table::Supplier => "supplier",
            Table::Date => "date",
            Table::Lineorder => "lineorder",
        }
    }

    pub fn from_name(name: &str) -> Result<Self> {
        Ok(match name {
            "customer" => Table::Customer,
            "part" => Table::Part,
            "supplier" => Table::Supplier,
            "date" => Table::Date,
            "lineorder" => Table::Lineorder,
            other => return Err(Error::invalid_argument(format!("unknown ssb table '{other}'"))),
        })
    }

    pub fn column_base(&self) -> i64 {
        (*self as i64) * COLUMNS_PER_TABLE
    }

    pub fn column_id(&self, column_in_table: i64) -> i64 {
        self.column_base() + column_in_table
    }
}

/// `Part -> Supplier -> Customer -> Date -> Lineorder`.
pub const SEED_ADVANCE_ORDER: [Table; TABLE_COUNT] = [
    Table::Part,
    Table::Supplier,
    Table::Customer,
    Table::Date,
    Table::Lineorder,
];
