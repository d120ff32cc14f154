//! Benchmark Data Generator CLI Library
//!
//! Provides both a command-line tool and a library for generating TPC-H,
//! TPC-DS and SSB benchmark data in pipe-delimited (`.tbl`), CSV or Parquet
//! form.
//!
//! # Examples
//!
//! ```no_run
//! use benchgen_cli::{BenchGenerator, OutputFormat};
//! use benchgen_core::SuiteId;
//! use std::path::PathBuf;
//!
//! # async fn example() -> std::io::Result<()> {
//! let generator = BenchGenerator::builder(SuiteId::Tpch)
//!     .with_scale_factor(10.0)
//!     .with_output_dir(PathBuf::from("./data"))
//!     .with_format(OutputFormat::Csv)
//!     .build();
//!
//! generator.generate().await?;
//! # Ok(())
//! # }
//! ```

pub mod csv;
pub mod generate;
pub mod statistics;
pub mod tbl;

pub use crate::generate::{Sink, WriterSink};

use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use benchgen_core::SeedMode;
use benchgen_core::SuiteId;

/// Output format for generated data.
///
/// - **TBL**: pipe-delimited format compatible with the original `dbgen` tool.
/// - **CSV**: delimiter-separated values with RFC 4180 quoting.
/// - **Parquet**: columnar output assembled via `benchgen-arrow`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    Tbl,
    Csv,
    Parquet,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tbl" => Ok(OutputFormat::Tbl),
            "csv" => Ok(OutputFormat::Csv),
            "parquet" => Ok(OutputFormat::Parquet),
            _ => Err(format!("Invalid output format: {s}. Valid formats are: tbl, csv, parquet")),
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Tbl => write!(f, "tbl"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Parquet => write!(f, "parquet"),
        }
    }
}

/// Parses a `--benchmark` value, tolerating `-`/`_` and case the way table
/// name lookup already does inside `benchgen-core`.
pub fn parse_suite(value: &str) -> Result<SuiteId, String> {
    let normalized = value.to_lowercase().replace('-', "_");
    match normalized.as_str() {
        "tpch" => Ok(SuiteId::Tpch),
        "tpcds" => Ok(SuiteId::Tpcds),
        "ssb" => Ok(SuiteId::Ssb),
        _ => Err(format!("Invalid benchmark: {value}. Valid benchmarks are: tpch, tpcds, ssb")),
    }
}

/// Resolves a user-supplied table name against a suite's canonical table
/// list, tolerating case and `-`/`_` separators (§6 "Benchmark + table
/// naming").
pub fn resolve_table_name(suite: SuiteId, value: &str) -> Result<&'static str, String> {
    let normalized = value.to_lowercase().replace('-', "_");
    suite
        .table_names()
        .into_iter()
        .find(|name| *name == normalized)
        .ok_or_else(|| format!("Unknown table '{value}' for benchmark {suite}"))
}

/// Parses a delimiter value for CSV output.
///
/// Accepts a single ASCII character (including a literal tab) or common
/// escape sequences: `\t`, `\n`, `\r`, `\\`, and `\xNN` (hex).
pub fn parse_csv_delimiter(value: &str) -> Result<u8, String> {
    if value.is_empty() {
        return Err("CSV delimiter must not be empty".to_string());
    }

    let delimiter = if value.len() == 1 {
        value.as_bytes()[0]
    } else if value.starts_with('\\') {
        match value.as_bytes() {
            [b'\\', b't'] => b'\t',
            [b'\\', b'n'] => b'\n',
            [b'\\', b'r'] => b'\r',
            [b'\\', b'\\'] => b'\\',
            [b'\\', b'x', hi, lo] => {
                fn hex(b: u8) -> Option<u8> {
                    match b {
                        b'0'..=b'9' => Some(b - b'0'),
                        b'a'..=b'f' => Some(b - b'a' + 10),
                        b'A'..=b'F' => Some(b - b'A' + 10),
                        _ => None,
                    }
                }
                let Some(hi) = hex(*hi) else {
                    return Err(format!("Invalid CSV delimiter escape: {value}"));
                };
                let Some(lo) = hex(*lo) else {
                    return Err(format!("Invalid CSV delimiter escape: {value}"));
                };
                hi << 4 | lo
            }
            _ => return Err(format!("Invalid CSV delimiter escape: {value}")),
        }
    } else {
        let mut chars = value.chars();
        let Some(c) = chars.next() else {
            return Err("CSV delimiter must not be empty".to_string());
        };
        if chars.next().is_some() {
            return Err("CSV delimiter must be a single character".to_string());
        }
        if !c.is_ascii() {
            return Err("CSV delimiter must be an ASCII character".to_string());
        }
        c as u8
    };

    match delimiter {
        0 => Err("CSV delimiter cannot be NUL".to_string()),
        b'\n' | b'\r' => Err("CSV delimiter cannot be a newline character".to_string()),
        b'"' => Err("CSV delimiter cannot be '\"'".to_string()),
        _ => Ok(delimiter),
    }
}

/// Configuration for a generation run.
///
/// This struct holds every parameter needed to drive [`generate::run`]. It's
/// typically not constructed directly — use [`BenchGeneratorBuilder`].
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Which benchmark to generate (`tpch`, `tpcds`, `ssb`).
    pub suite: SuiteId,
    /// Scale factor (e.g. 1.0, 10.0, 100.0).
    pub scale_factor: f64,
    /// 1-based starting row, applied to every selected table.
    pub start_row: u64,
    /// Row count window; `None` means "to the end of the table".
    pub row_count: Option<u64>,
    /// Rows buffered per write.
    pub chunk_size: usize,
    /// Tables to generate; `None` generates every table in the suite.
    pub tables: Option<Vec<&'static str>>,
    /// Output format.
    pub format: OutputFormat,
    /// Delimiter byte for CSV output (default: `,`).
    pub csv_delimiter: u8,
    /// Output directory for generated files.
    pub output_dir: PathBuf,
    /// Number of concurrent generation tasks.
    pub num_threads: usize,
    /// Number of row-range partitions per table (1 = one file per table).
    pub parallel: usize,
    /// `PerTable` (default) or `AllTables` seed advancement.
    pub dbgen_seed_mode: SeedMode,
    /// Write output to stdout instead of files.
    pub stdout: bool,
    /// Directory holding `<suite>.dss` override distribution files. `None`
    /// uses the embedded defaults.
    pub distribution_dir: Option<PathBuf>,
}

impl GeneratorConfig {
    pub fn new(suite: SuiteId) -> Self {
        GeneratorConfig {
            suite,
            scale_factor: 1.0,
            start_row: 1,
            row_count: None,
            chunk_size: 10_000,
            tables: None,
            format: OutputFormat::Tbl,
            csv_delimiter: b',',
            output_dir: PathBuf::from("."),
            num_threads: num_cpus::get(),
            parallel: 1,
            dbgen_seed_mode: SeedMode::PerTable,
            stdout: false,
            distribution_dir: None,
        }
    }
}

/// The main entry point for generating benchmark data.
///
/// Use the builder pattern via [`BenchGenerator::builder`] to configure and
/// create instances.
pub struct BenchGenerator {
    config: GeneratorConfig,
}

impl BenchGenerator {
    pub fn builder(suite: SuiteId) -> BenchGeneratorBuilder {
        BenchGeneratorBuilder::new(suite)
    }

    /// Runs the configured generation to completion.
    pub async fn generate(self) -> std::io::Result<()> {
        generate::run(self.config).await
    }
}

/// Builder for constructing a [`BenchGenerator`].
#[derive(Debug, Clone)]
pub struct BenchGeneratorBuilder {
    config: GeneratorConfig,
}

impl BenchGeneratorBuilder {
    pub fn new(suite: SuiteId) -> Self {
        Self { config: GeneratorConfig::new(suite) }
    }

    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.config.scale_factor = scale_factor;
        self
    }

    pub fn with_start_row(mut self, start_row: u64) -> Self {
        self.config.start_row = start_row;
        self
    }

    pub fn with_row_count(mut self, row_count: u64) -> Self {
        self.config.row_count = Some(row_count);
        self
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.config.chunk_size = chunk_size;
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = output_dir.into();
        self
    }

    pub fn with_tables(mut self, tables: Vec<&'static str>) -> Self {
        self.config.tables = Some(tables);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.config.format = format;
        self
    }

    pub fn with_csv_delimiter(mut self, csv_delimiter: u8) -> Self {
        self.config.csv_delimiter = csv_delimiter;
        self
    }

    pub fn with_num_threads(mut self, num_threads: usize) -> Self {
        self.config.num_threads = num_threads;
        self
    }

    pub fn with_parallel(mut self, parallel: usize) -> Self {
        self.config.parallel = parallel;
        self
    }

    pub fn with_dbgen_seed_mode(mut self, mode: SeedMode) -> Self {
        self.config.dbgen_seed_mode = mode;
        self
    }

    pub fn with_stdout(mut self, stdout: bool) -> Self {
        self.config.stdout = stdout;
        self
    }

    pub fn with_distribution_dir(mut self, distribution_dir: impl Into<PathBuf>) -> Self {
        self.config.distribution_dir = Some(distribution_dir.into());
        self
    }

    pub fn build(self) -> BenchGenerator {
        BenchGenerator { config: self.config }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_suites() {
        assert_eq!(parse_suite("tpch").unwrap(), SuiteId::Tpch);
        assert_eq!(parse_suite("TPC-DS").unwrap(), SuiteId::Tpcds);
        assert_eq!(parse_suite("ssb").unwrap(), SuiteId::Ssb);
        assert!(parse_suite("bogus").is_err());
    }

    #[test]
    fn resolves_table_names_case_and_separator_insensitively() {
        assert_eq!(resolve_table_name(SuiteId::Tpch, "LineItem").unwrap(), "lineitem");
        assert_eq!(resolve_table_name(SuiteId::Tpcds, "store-sales").unwrap(), "store_sales");
        assert!(resolve_table_name(SuiteId::Ssb, "nonexistent").is_err());
    }

    #[test]
    fn parses_csv_delimiter_escapes() {
        assert_eq!(parse_csv_delimiter("\\t").unwrap(), b'\t');
        assert_eq!(parse_csv_delimiter(",").unwrap(), b',');
        assert!(parse_csv_delimiter("\"").is_err());
    }
}
