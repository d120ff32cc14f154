//! Orchestrates table generation: resolves which tables and row ranges to
//! produce, fans work out across a bounded thread pool, and drives each
//! unit of work through a [`Sink`].

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use benchgen_core::error::Error as GenError;
use benchgen_core::{make_table_generator, plan_ranges, resolve_table_row_count, GeneratorOptions, SeedMode, SuiteId};
use log::info;
use tokio::sync::Semaphore;

use crate::statistics::WriteStatistics;
use crate::{GeneratorConfig, OutputFormat};

/// Destination for generated output buffers. Mirrors the reference kit's
/// chunked-write pattern: a generator fills an in-memory buffer with
/// several rows' worth of text, then hands it to the sink in one call.
pub trait Sink: Send {
    fn sink(&mut self, buffer: &[u8]) -> io::Result<()>;
    fn flush(self) -> io::Result<()>
    where
        Self: Sized;
}

/// Wraps any [`Write`] as a [`Sink`], counting buffers and bytes written.
pub struct WriterSink<W: Write> {
    statistics: WriteStatistics,
    inner: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, statistics: WriteStatistics::new("buffers") }
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn sink(&mut self, buffer: &[u8]) -> io::Result<()> {
        self.statistics.increment_chunks(1);
        self.statistics.increment_bytes(buffer.len());
        self.inner.write_all(buffer)
    }

    fn flush(mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

fn to_io_error(err: GenError) -> io::Error {
    io::Error::new(io::ErrorKind::Other, err.to_string())
}

/// One table, optionally split into a contiguous row sub-range, with the
/// output file stem it should be written under.
struct Unit {
    table_name: &'static str,
    start_row: u64,
    row_count: u64,
    part_index: Option<usize>,
}

fn plan_units(
    suite: SuiteId,
    table_name: &'static str,
    scale_factor: f64,
    start_row: u64,
    row_count: Option<u64>,
    parallel: usize,
) -> io::Result<Vec<Unit>> {
    let total = resolve_table_row_count(suite, table_name, scale_factor).map_err(to_io_error)?;
    let window_start = start_row.max(1);
    let window_len = row_count.unwrap_or_else(|| total.saturating_sub(window_start - 1));
    if parallel <= 1 {
        return Ok(vec![Unit { table_name, start_row: window_start, row_count: window_len, part_index: None }]);
    }
    Ok(plan_ranges(window_start, window_len, parallel)
        .into_iter()
        .enumerate()
        .map(|(index, (start, count))| Unit { table_name, start_row: start, row_count: count, part_index: Some(index + 1) })
        .collect())
}

fn output_path(output_dir: &Path, table_name: &str, format: OutputFormat, part_index: Option<usize>) -> PathBuf {
    let extension = match format {
        OutputFormat::Tbl => "tbl",
        OutputFormat::Csv => "csv",
        OutputFormat::Parquet => "parquet",
    };
    let stem = match part_index {
        Some(index) => format!("{table_name}-{index}"),
        None => table_name.to_string(),
    };
    output_dir.join(format!("{stem}.{extension}"))
}

/// Generates one table/partition's worth of pipe- or comma-delimited text
/// into `sink`, `chunk_size` rows at a time.
fn generate_text_unit(
    suite: SuiteId,
    unit: &Unit,
    scale_factor: f64,
    chunk_size: usize,
    format: OutputFormat,
    csv_delimiter: u8,
    distribution_dir: Option<&Path>,
    sink: &mut dyn Sink,
) -> io::Result<()> {
    let options = GeneratorOptions {
        scale_factor,
        start_row: unit.start_row,
        row_count: Some(unit.row_count),
        chunk_size,
        seed_mode: SeedMode::PerTable,
        distribution_dir: distribution_dir.map(Path::to_path_buf),
        ..Default::default()
    };
    let mut generator = make_table_generator(suite, unit.table_name, &options).map_err(to_io_error)?;

    let mut buffer = Vec::with_capacity(chunk_size * 64);
    let mut emitted_in_buffer = 0usize;
    for _ in 0..unit.row_count {
        let row = generator.next_row().map_err(to_io_error)?;
        match format {
            OutputFormat::Tbl => crate::tbl::write_row(&mut buffer, &row),
            OutputFormat::Csv => crate::csv::write_row(&mut buffer, csv_delimiter, &row),
            OutputFormat::Parquet => unreachable!("parquet tables are written by generate_parquet_unit"),
        }
        emitted_in_buffer += 1;
        if emitted_in_buffer >= chunk_size {
            sink.sink(&buffer)?;
            buffer.clear();
            emitted_in_buffer = 0;
        }
    }
    if !buffer.is_empty() {
        sink.sink(&buffer)?;
    }
    Ok(())
}

fn generate_parquet_unit(
    suite: SuiteId,
    unit: &Unit,
    scale_factor: f64,
    chunk_size: usize,
    distribution_dir: Option<&Path>,
    path: &Path,
) -> io::Result<()> {
    use parquet::arrow::ArrowWriter;
    use std::fs::File;

    // `BatchAssembler::new` positions the generator itself, so the
    // generator is constructed at row 1 here rather than skipped twice.
    let options = GeneratorOptions {
        scale_factor,
        chunk_size,
        seed_mode: SeedMode::PerTable,
        distribution_dir: distribution_dir.map(Path::to_path_buf),
        ..Default::default()
    };
    let generator = make_table_generator(suite, unit.table_name, &options).map_err(to_io_error)?;
    let mut assembler =
        benchgen_arrow::BatchAssembler::new(generator, unit.start_row, Some(unit.row_count), chunk_size, None).map_err(to_io_error)?;

    let file = File::create(path)?;
    let mut writer = ArrowWriter::try_new(file, assembler.schema().clone(), None).map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
    while let Some(batch) = assembler.next_batch().map_err(to_io_error)? {
        writer.write(&batch).map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
    }
    writer.close().map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
    Ok(())
}

async fn run_unit(
    suite: SuiteId,
    unit: Unit,
    config: Arc<GeneratorConfig>,
) -> io::Result<()> {
    let table_name = unit.table_name.to_string();
    let part_index = unit.part_index;
    let result = tokio::task::spawn_blocking(move || -> io::Result<()> {
        match config.format {
            OutputFormat::Parquet => {
                let path = output_path(&config.output_dir, unit.table_name, config.format, unit.part_index);
                generate_parquet_unit(suite, &unit, config.scale_factor, config.chunk_size, config.distribution_dir.as_deref(), &path)
            }
            _ if config.stdout => {
                let mut sink = WriterSink::new(io::stdout());
                generate_text_unit(
                    suite,
                    &unit,
                    config.scale_factor,
                    config.chunk_size,
                    config.format,
                    config.csv_delimiter,
                    config.distribution_dir.as_deref(),
                    &mut sink,
                )?;
                sink.flush()
            }
            _ => {
                let path = output_path(&config.output_dir, unit.table_name, config.format, unit.part_index);
                let file = std::fs::File::create(&path)?;
                let mut sink = WriterSink::new(io::BufWriter::new(file));
                generate_text_unit(
                    suite,
                    &unit,
                    config.scale_factor,
                    config.chunk_size,
                    config.format,
                    config.csv_delimiter,
                    config.distribution_dir.as_deref(),
                    &mut sink,
                )?;
                sink.flush()
            }
        }
    })
    .await;

    match result {
        Ok(inner) => {
            info!("{table_name}{} done", part_index.map(|i| format!(" part {i}")).unwrap_or_default());
            inner
        }
        Err(join_err) => Err(io::Error::new(io::ErrorKind::Other, join_err.to_string())),
    }
}

pub async fn run(config: GeneratorConfig) -> io::Result<()> {
    if config.dbgen_seed_mode == SeedMode::AllTables {
        return Err(to_io_error(GenError::not_implemented(
            "--dbgen-seed-mode all-tables (cross-table seed advancement) is not implemented; use per-table",
        )));
    }

    if !config.stdout {
        std::fs::create_dir_all(&config.output_dir)?;
    }

    let tables: Vec<&'static str> = match &config.tables {
        Some(names) => names.clone(),
        None => config.suite.table_names(),
    };

    let mut all_units = Vec::new();
    for table_name in tables {
        all_units.extend(plan_units(
            config.suite,
            table_name,
            config.scale_factor,
            config.start_row,
            config.row_count,
            config.parallel,
        )?);
    }

    let semaphore = Arc::new(Semaphore::new(config.num_threads.max(1)));
    let config = Arc::new(config);
    let mut tasks = Vec::with_capacity(all_units.len());
    for unit in all_units {
        let semaphore = semaphore.clone();
        let config = config.clone();
        let suite = config.suite;
        tasks.push(tokio::spawn(async move {
            let _permit = semaphore.acquire_owned().await.expect("semaphore is never closed");
            run_unit(suite, unit, config).await
        }));
    }

    for task in tasks {
        task.await.map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))??;
    }

    info!("generation complete");
    Ok(())
}
