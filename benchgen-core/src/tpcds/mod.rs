//! TPC-DS row generators (§4.5): the sales/returns channels, the slowly
//! changing dimensions, and the remaining static/date-based dimensions.
//!
//! TPC-DS layers two extra primitives on top of what TPC-H needs: SCD-2
//! dimension versioning ([`scd`]) and a date-weighted sales calendar
//! ([`date_scaling`]). Both are owned here rather than in `types` because
//! they are specific to this benchmark's schema (`rec_start_date`/
//! `rec_end_date`, the five-year `date_dim` span).

pub mod date_scaling;
pub mod generators;
pub mod scaling;
pub mod scd;

pub use crate::seedplan::tpcds::{Table, TableFlags, ALL_TABLES, TABLE_COUNT};

/// First day of the reference kit's five-year data window.
pub const DATA_START_DATE: (i32, i32, i32) = (1998, 1, 1);
/// Last day of the reference kit's five-year data window.
pub const DATA_END_DATE: (i32, i32, i32) = (2002, 12, 31);

/// Store, catalog and web channel return rates (§ GLOSSARY "Return
/// percentage"), each a fixed percent of the channel's sales rows.
pub const SR_RETURN_PCT: i64 = 10;
pub const CR_RETURN_PCT: i64 = 10;
pub const WR_RETURN_PCT: i64 = 10;
