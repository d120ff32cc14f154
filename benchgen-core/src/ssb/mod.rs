//! Star Schema Benchmark row generators (§4.5): customer, part, supplier,
//! date and lineorder. SSB scale factors are defined only for `sf >= 1`,
//! matching the reference kit's `DbgenContext::Init` constraint.

pub mod generators;

pub use crate::seedplan::ssb::{Table, SEED_ADVANCE_ORDER, TABLE_COUNT};

pub fn base_row_count(table: Table, scale_factor: f64) -> u64 {
    let sf = scale_factor.max(1.0);
    match table {
        Table::Part => (200_000.0 * (1.0 + sf.log2())).floor() as u64,
        Table::Supplier => (2_000.0 * sf) as u64,
        Table::Customer => (30_000.0 * sf) as u64,
        Table::Date => 2_556,
        Table::Lineorder => (6_000_000.0 * sf) as u64,
    }
}
