//! TPC-H row generators (§4.5): region, nation, supplier, customer, part,
//! partsupp, orders and lineitem.

pub mod generators;

pub use crate::seedplan::tpch::{Table, SEED_ADVANCE_ORDER, TABLE_COUNT};

/// Row counts at scale factor 1, scaled linearly by `scale_factor` the same
/// way the reference kit's table generators do (region/nation are fixed
/// reference tables and never scale).
pub fn base_row_count(table: Table, scale_factor: f64) -> u64 {
    let sf = scale_factor.max(0.0);
    match table {
        Table::Region => 5,
        Table::Nation => 25,
        Table::Part => (200_000.0 * sf) as u64,
        Table::Supplier => (10_000.0 * sf) as u64,
        Table::Customer => (150_000.0 * sf) as u64,
        Table::Orders => (1_500_000.0 * sf) as u64,
        Table::PartSupp => (200_000.0 * sf) as u64 * 4,
        // Average 4 line items per order; lineitem is otherwise addressed by
        // order key, not by an absolute line row number (see LineItemGenerator).
        Table::LineItem => (1_500_000.0 * sf) as u64 * 4,
    }
}
