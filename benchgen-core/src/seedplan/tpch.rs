//! TPC-H table ordinals and seed-advance order, ported from the reference
//! kit's `TableId` enum and `DbgenContext::AdvanceSeedsForTable`.

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i64)]
pub enum Table {
    Part = 0,
    PartSupp = 1,
    Supplier = 2,
    Customer = 3,
    Orders = 4,
    LineItem = 5,
    Nation = 6,
    Region = 7,
}

pub const TABLE_COUNT: usize = 8;

/// Column budget reserved to each table in the global column-id space;
/// generous enough to cover every table's widest column count without the
/// per-column seeds of two tables ever colliding.
const COLUMNS_PER_TABLE: i64 = 20;

impl Table {
    pub fn name(&self) -> &'static str {
        match self {
            Table::Part => "part",
            Table::PartSupp => "partsupp",
            Table::Supplier => "supplier",
            Table::Customer => "customer",
            Table::Orders => "orders",
            Table::LineItem => "lineitem",
            Table::Nation => "nation",
            Table::Region => "region",
        }
    }

    pub fn from_name(name: &str) -> Result<Self> {
        Ok(match name {
            "part" => Table::Part,
            "partsupp" => Table::PartSupp,
            "supplier" => Table::Supplier,
            "customer" => Table::Customer,
            "orders" => Table::Orders,
            "lineitem" => Table::LineItem,
            "nation" => Table::Nation,
            "region" => Table::Region,
            other => return Err(Error::invalid_argument(format!("unknown tpch table '{other}'"))),
        })
    }

    /// Base of this table's reserved column-id range.
    pub fn column_base(&self) -> i64 {
        (*self as i64) * COLUMNS_PER_TABLE
    }

    pub fn column_id(&self, column_in_table: i64) -> i64 {
        self.column_base() + column_in_table
    }
}

/// Tables whose row depends on another table's same-row draw and therefore
/// must have its seed streams advanced in lockstep, ported from
/// `AdvanceSeedsForTable`'s skip order (`Part -> PartSupp -> Supplier ->
/// Customer -> Orders -> LineItem -> Nation -> Region`).
pub const SEED_ADVANCE_ORDER: [Table; TABLE_COUNT] = [
    Table::Part,
    Table::PartSupp,
    Table::Supplier,
    Table::Customer,
    Table::Orders,
    Table::LineItem,
    Table::Nation,
    Table::Region,
];
