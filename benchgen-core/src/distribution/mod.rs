//! Distribution store (§4.3): weighted lookup tables shared by every row
//! generator within a benchmark.

mod embedded;
mod store;

pub use embedded::{ssb_distributions, tpcds_distributions, tpch_distributions};
pub use store::{Distribution, DistributionBuilder, DistributionStore};
