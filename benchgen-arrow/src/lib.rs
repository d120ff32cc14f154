//! Batch Assembler (§4.6): turns a [`benchgen_core::row::RowGenerator`]'s
//! stream of [`benchgen_core::row::Row`]s into fixed-size Arrow
//! `RecordBatch`es, honoring `chunk_size`, `start_row`/`row_count`
//! windowing and an optional column projection.

use std::sync::Arc;

use arrow::array::{
    ArrayRef, BooleanBuilder, Date32Builder, Decimal128Builder, Float32Builder, Int64Builder,
    StringBuilder,
};
use arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use arrow::record_batch::RecordBatch;

use benchgen_core::error::{Error, Result};
use benchgen_core::row::{ColumnSchema, ColumnType, RowGenerator, TableSchema, Value};

/// Arrow's `Decimal128` fractional-digit count used for every decimal
/// column this crate emits. Every table's money/percentage fields are
/// generated with two fractional digits (§4.4 "Decimals"), so one constant
/// scale covers the whole schema rather than threading per-column scale
/// through `ColumnSchema`.
pub const DECIMAL_SCALE: i8 = 2;
pub const DECIMAL_PRECISION: u8 = 20;

fn arrow_data_type(column_type: ColumnType) -> DataType {
    match column_type {
        ColumnType::Integer => DataType::Int64,
        ColumnType::Decimal => DataType::Decimal128(DECIMAL_PRECISION, DECIMAL_SCALE),
        ColumnType::Text => DataType::Utf8,
        ColumnType::Date => DataType::Date32,
        ColumnType::Boolean => DataType::Boolean,
        ColumnType::Float => DataType::Float32,
    }
}

fn arrow_field(column: &ColumnSchema) -> Field {
    Field::new(column.name, arrow_data_type(column.column_type), column.nullable)
}

/// Builds the full Arrow schema for a table, or a projected sub-schema plus
/// the indices (into the table's own column list) that the projection
/// selects, preserving the caller's requested order.
pub fn arrow_schema(table: &TableSchema, column_names: Option<&[String]>) -> Result<(SchemaRef, Vec<usize>)> {
    let indices: Vec<usize> = match column_names {
        None => (0..table.columns.len()).collect(),
        Some(names) => {
            let mut seen = std::collections::HashSet::new();
            let mut indices = Vec::with_capacity(names.len());
            for name in names {
                if !seen.insert(name.as_str()) {
                    return Err(Error::invalid_argument(format!("duplicate column name '{name}'")));
                }
                let idx = table
                    .column_index(name)
                    .ok_or_else(|| Error::invalid_argument(format!("unknown column '{name}' on table '{}'", table.table_name)))?;
                indices.push(idx);
            }
            indices
        }
    };
    let fields: Vec<Field> = indices.iter().map(|&i| arrow_field(&table.columns[i])).collect();
    Ok((Arc::new(Schema::new(fields)), indices))
}

enum ColumnBuilder {
    Integer(Int64Builder),
    Decimal(Decimal128Builder),
    Text(StringBuilder),
    Date(Date32Builder),
    Boolean(BooleanBuilder),
    Float(Float32Builder),
}

impl ColumnBuilder {
    fn new(column_type: ColumnType, capacity: usize) -> Self {
        match column_type {
            ColumnType::Integer => ColumnBuilder::Integer(Int64Builder::with_capacity(capacity)),
            ColumnType::Decimal => ColumnBuilder::Decimal(
                Decimal128Builder::with_capacity(capacity)
                    .with_precision_and_scale(DECIMAL_PRECISION, DECIMAL_SCALE)
                    .expect("fixed precision/scale is always valid"),
            ),
            ColumnType::Text => ColumnBuilder::Text(StringBuilder::with_capacity(capacity, capacity * 8)),
            ColumnType::Date => ColumnBuilder::Date(Date32Builder::with_capacity(capacity)),
            ColumnType::Boolean => ColumnBuilder::Boolean(BooleanBuilder::with_capacity(capacity)),
            ColumnType::Float => ColumnBuilder::Float(Float32Builder::with_capacity(capacity)),
        }
    }

    fn append(&mut self, value: &Value, column_name: &str) -> Result<()> {
        match (self, value) {
            (ColumnBuilder::Integer(b), Value::Int(v)) => b.append_value(*v),
            (ColumnBuilder::Integer(b), Value::Null) => b.append_null(),
            (ColumnBuilder::Decimal(b), Value::Decimal(d)) => {
                let scaled = (d.as_f64() * 10f64.powi(DECIMAL_SCALE as i32)).round() as i128;
                b.append_value(scaled)
            }
            (ColumnBuilder::Decimal(b), Value::Null) => b.append_null(),
            (ColumnBuilder::Text(b), Value::Text(s)) => b.append_value(s),
            (ColumnBuilder::Text(b), Value::Null) => b.append_null(),
            (ColumnBuilder::Date(b), Value::Date(d)) => b.append_value(d.to_julian_days() - UNIX_EPOCH_JULIAN_DAY),
            (ColumnBuilder::Date(b), Value::Null) => b.append_null(),
            (ColumnBuilder::Boolean(b), Value::Bool(v)) => b.append_value(*v),
            (ColumnBuilder::Boolean(b), Value::Null) => b.append_null(),
            (ColumnBuilder::Float(b), Value::Float(v)) => b.append_value(*v),
            (ColumnBuilder::Float(b), Value::Null) => b.append_null(),
            _ => {
                return Err(Error::internal(format!(
                    "row generator produced a value of the wrong type for column '{column_name}'"
                )))
            }
        }
        Ok(())
    }

    fn finish(self) -> ArrayRef {
        match self {
            ColumnBuilder::Integer(mut b) => Arc::new(b.finish()),
            ColumnBuilder::Decimal(mut b) => Arc::new(b.finish()),
            ColumnBuilder::Text(mut b) => Arc::new(b.finish()),
            ColumnBuilder::Date(mut b) => Arc::new(b.finish()),
            ColumnBuilder::Boolean(mut b) => Arc::new(b.finish()),
            ColumnBuilder::Float(mut b) => Arc::new(b.finish()),
        }
    }
}

/// Julian day number of the Unix epoch (1970-01-01), used to convert this
/// crate's `Date` (Julian days) into Arrow's `Date32` (days since epoch).
const UNIX_EPOCH_JULIAN_DAY: i32 = 2_440_588;

/// Drains a [`RowGenerator`] into `RecordBatch`es of at most `chunk_size`
/// rows apiece, starting at `start_row` and stopping after `row_count` rows
/// (or at the generator's own exhaustion when `row_count` is `None`).
pub struct BatchAssembler {
    generator: Box<dyn RowGenerator>,
    schema: SchemaRef,
    projected_indices: Vec<usize>,
    chunk_size: usize,
    remaining: u64,
    exhausted: bool,
}

impl BatchAssembler {
    pub fn new(
        mut generator: Box<dyn RowGenerator>,
        start_row: u64,
        row_count: Option<u64>,
        chunk_size: usize,
        column_names: Option<&[String]>,
    ) -> Result<Self> {
        if chunk_size == 0 {
            return Err(Error::invalid_argument("chunk_size must be positive"));
        }
        let (schema, projected_indices) = arrow_schema(generator.schema(), column_names)?;
        if start_row > 1 {
            generator.skip_to(start_row)?;
        } else if start_row == 0 {
            return Err(Error::invalid_argument("start_row is 1-based and must be >= 1"));
        }
        let remaining = row_count.unwrap_or_else(|| generator.total_rows().saturating_sub(start_row - 1));
        Ok(BatchAssembler {
            generator,
            schema,
            projected_indices,
            chunk_size,
            remaining,
            exhausted: false,
        })
    }

    pub fn schema(&self) -> &SchemaRef {
        &self.schema
    }

    /// Produces the next batch, or `None` once the generator or the
    /// requested `row_count` window is exhausted.
    pub fn next_batch(&mut self) -> Result<Option<RecordBatch>> {
        if self.exhausted {
            return Ok(None);
        }
        if self.remaining == 0 {
            self.exhausted = true;
            return Ok(None);
        }
        let table = self.generator.schema().clone();
        let batch_rows = self.remaining.min(self.chunk_size as u64) as usize;

        let mut builders: Vec<ColumnBuilder> = self
            .projected_indices
            .iter()
            .map(|&i| ColumnBuilder::new(table.columns[i].column_type, batch_rows))
            .collect();

        for _ in 0..batch_rows {
            let row = self.generator.next_row()?;
            for (slot, &col_idx) in builders.iter_mut().zip(self.projected_indices.iter()) {
                slot.append(&row[col_idx], table.columns[col_idx].name)?;
            }
        }

        self.remaining -= batch_rows as u64;
        if self.remaining == 0 {
            self.exhausted = true;
        }

        let arrays: Vec<ArrayRef> = builders.into_iter().map(ColumnBuilder::finish).collect();
        let batch = RecordBatch::try_new(self.schema.clone(), arrays)
            .map_err(|e| Error::internal(format!("failed to assemble record batch: {e}")))?;
        Ok(Some(batch))
    }
}

impl Iterator for BatchAssembler {
    type Item = Result<RecordBatch>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_batch().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchgen_core::{make_table_generator, GeneratorOptions, SuiteId};

    #[test]
    fn assembles_region_into_one_batch() {
        let options = GeneratorOptions { scale_factor: 1.0, chunk_size: 100, ..Default::default() };
        let generator = make_table_generator(SuiteId::Tpch, "region", &options).unwrap();
        let mut assembler = BatchAssembler::new(generator, 1, None, 100, None).unwrap();
        let batch = assembler.next_batch().unwrap().expect("region has rows");
        assert_eq!(batch.num_rows(), 5);
        assert!(assembler.next_batch().unwrap().is_none());
    }

    #[test]
    fn respects_chunk_size_and_row_count_window() {
        let options = GeneratorOptions { scale_factor: 0.01, chunk_size: 4, ..Default::default() };
        let generator = make_table_generator(SuiteId::Tpch, "nation", &options).unwrap();
        let mut assembler = BatchAssembler::new(generator, 1, Some(10), 4, None).unwrap();
        let mut total = 0;
        while let Some(batch) = assembler.next_batch().unwrap() {
            assert!(batch.num_rows() <= 4);
            total += batch.num_rows();
        }
        assert_eq!(total, 10);
    }

    #[test]
    fn projection_selects_requested_columns_in_order() {
        let options = GeneratorOptions { scale_factor: 1.0, chunk_size: 10, ..Default::default() };
        let generator = make_table_generator(SuiteId::Tpch, "region", &options).unwrap();
        let columns = vec!["r_comment".to_string(), "r_regionkey".to_string()];
        let mut assembler = BatchAssembler::new(generator, 1, None, 10, Some(&columns)).unwrap();
        let batch = assembler.next_batch().unwrap().unwrap();
        assert_eq!(batch.schema().field(0).name(), "r_comment");
        assert_eq!(batch.schema().field(1).name(), "r_regionkey");
    }
}
