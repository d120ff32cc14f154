//! Command-line entry point: generates TPC-H, TPC-DS or SSB benchmark data
//! in pipe-delimited, CSV, or Parquet form (§6 "CLI surface").

use std::path::PathBuf;
use std::process::ExitCode;

use benchgen_cli::{parse_csv_delimiter, parse_suite, resolve_table_name, BenchGenerator, OutputFormat};
use benchgen_core::SeedMode;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "benchgen-cli", about = "Generate TPC-H, TPC-DS and SSB test data")]
struct Args {
    /// Benchmark to generate: tpch, tpcds, or ssb
    #[arg(long, value_parser = parse_suite)]
    benchmark: benchgen_core::SuiteId,

    /// Table(s) to generate; repeat to select several. Omit for all tables.
    #[arg(long = "table")]
    tables: Vec<String>,

    /// Scale factor (1.0, 10.0, 100.0, ...)
    #[arg(long, default_value_t = 1.0)]
    scale: f64,

    /// Rows buffered per write
    #[arg(long = "chunk-size", default_value_t = 10_000)]
    chunk_size: usize,

    /// 1-based starting row
    #[arg(long = "start-row", default_value_t = 1)]
    start_row: u64,

    /// Number of rows to generate; omit for "to the end of the table"
    #[arg(long = "row-count")]
    row_count: Option<u64>,

    /// Output directory (ignored when writing to stdout)
    #[arg(long, default_value = ".")]
    output: PathBuf,

    /// Output format: tbl, csv, or parquet
    #[arg(long, default_value = "tbl")]
    format: String,

    /// Delimiter for CSV output
    #[arg(long = "csv-delimiter", default_value = ",")]
    csv_delimiter: String,

    /// Number of row-range partitions generated per table
    #[arg(long, default_value_t = 1)]
    parallel: usize,

    /// Number of concurrently-running generation tasks
    #[arg(long = "num-threads")]
    num_threads: Option<usize>,

    /// Seed advancement mode: per-table (default) or all-tables
    #[arg(long = "dbgen-seed-mode", default_value = "per-table")]
    dbgen_seed_mode: String,

    /// Write output to stdout instead of files
    #[arg(long)]
    stdout: bool,

    /// Directory of `<suite>.dss` override distribution files (e.g. `tpch.dss`);
    /// omit to use the embedded defaults
    #[arg(long = "distribution-dir")]
    distribution_dir: Option<PathBuf>,
}

fn parse_seed_mode(value: &str) -> Result<SeedMode, String> {
    match value.to_lowercase().replace('_', "-").as_str() {
        "per-table" | "pertable" => Ok(SeedMode::PerTable),
        "all-tables" | "alltables" => Ok(SeedMode::AllTables),
        _ => Err(format!("Invalid --dbgen-seed-mode: {value}. Valid values are: per-table, all-tables")),
    }
}

fn run(args: Args) -> Result<BenchGenerator, String> {
    let format = args.format.parse::<OutputFormat>()?;
    let csv_delimiter = parse_csv_delimiter(&args.csv_delimiter)?;
    let dbgen_seed_mode = parse_seed_mode(&args.dbgen_seed_mode)?;

    let tables = if args.tables.is_empty() {
        None
    } else {
        Some(
            args.tables
                .iter()
                .map(|t| resolve_table_name(args.benchmark, t))
                .collect::<Result<Vec<_>, _>>()?,
        )
    };

    let mut builder = BenchGenerator::builder(args.benchmark)
        .with_scale_factor(args.scale)
        .with_start_row(args.start_row)
        .with_chunk_size(args.chunk_size)
        .with_output_dir(args.output)
        .with_format(format)
        .with_csv_delimiter(csv_delimiter)
        .with_parallel(args.parallel.max(1))
        .with_dbgen_seed_mode(dbgen_seed_mode)
        .with_stdout(args.stdout);

    if let Some(distribution_dir) = args.distribution_dir {
        builder = builder.with_distribution_dir(distribution_dir);
    }
    if let Some(tables) = tables {
        builder = builder.with_tables(tables);
    }
    if let Some(row_count) = args.row_count {
        builder = builder.with_row_count(row_count);
    }
    if let Some(num_threads) = args.num_threads {
        builder = builder.with_num_threads(num_threads);
    }

    Ok(builder.build())
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let generator = match run(args) {
        Ok(generator) => generator,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = generator.generate().await {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
