use std::ffi::OsString;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use arrow::array::{ArrayRef, BooleanArray, Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::arrow::ArrowWriter;

use super::model::{Column, Table};
use crate::error::PrepError;

// ---------------------------------------------------------------------------
// Writing
// ---------------------------------------------------------------------------

/// Serialize `table` to a Parquet file at `path`.
///
/// Column names, types, row order, and missing-value positions all survive a
/// round trip through [`read_parquet`]. Every field is written nullable;
/// missing values become Parquet nulls.
///
/// The data goes to a `.tmp` sibling first and is renamed into place on
/// success, so a failed run leaves nothing at `path`. Fails with
/// [`PrepError::Io`] when the parent directory is missing or unwritable.
pub fn write_parquet(table: &Table, path: &Path) -> Result<(), PrepError> {
    let fields: Vec<Field> = table
        .columns()
        .iter()
        .map(|(name, column)| Field::new(name, arrow_type(column), true))
        .collect();
    let schema = Arc::new(Schema::new(fields));

    let arrays: Vec<ArrayRef> = table.columns().iter().map(|(_, c)| to_array(c)).collect();
    let batch = RecordBatch::try_new(schema.clone(), arrays)?;

    let tmp = tmp_path(path);
    if let Err(err) = write_batch(&batch, schema, &tmp) {
        let _ = std::fs::remove_file(&tmp);
        return Err(err);
    }
    std::fs::rename(&tmp, path).map_err(|e| PrepError::io(path, e))
}

fn write_batch(batch: &RecordBatch, schema: Arc<Schema>, tmp: &Path) -> Result<(), PrepError> {
    let file = File::create(tmp).map_err(|e| PrepError::io(tmp, e))?;
    let mut writer = ArrowWriter::try_new(file, schema, None)?;
    writer.write(batch)?;
    writer.close()?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

fn arrow_type(column: &Column) -> DataType {
    match column {
        Column::Int(_) => DataType::Int64,
        Column::Float(_) => DataType::Float64,
        Column::Bool(_) => DataType::Boolean,
        Column::Text(_) => DataType::Utf8,
    }
}

fn to_array(column: &Column) -> ArrayRef {
    match column {
        Column::Int(v) => Arc::new(Int64Array::from(v.clone())),
        Column::Float(v) => Arc::new(Float64Array::from(v.clone())),
        Column::Bool(v) => Arc::new(BooleanArray::from(v.clone())),
        Column::Text(v) => Arc::new(StringArray::from(v.clone())),
    }
}

// ---------------------------------------------------------------------------
// Reading back
// ---------------------------------------------------------------------------

/// Load a Parquet file written by [`write_parquet`] back into a [`Table`].
pub fn read_parquet(path: &Path) -> Result<Table, PrepError> {
    let file = File::open(path).map_err(|e| PrepError::io(path, e))?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    let schema = builder.schema().clone();
    let reader = builder.build()?;

    let mut columns: Vec<(String, Column)> = schema
        .fields()
        .iter()
        .map(|field| Ok((field.name().clone(), empty_column(field)?)))
        .collect::<Result<_, PrepError>>()?;

    for batch in reader {
        let batch = batch?;
        for (idx, (_, column)) in columns.iter_mut().enumerate() {
            append_batch_column(column, batch.column(idx))?;
        }
    }

    let mut table = Table::new();
    for (name, column) in columns {
        table.push_column(name, column);
    }
    Ok(table)
}

fn empty_column(field: &Field) -> Result<Column, PrepError> {
    match field.data_type() {
        DataType::Int64 => Ok(Column::Int(Vec::new())),
        DataType::Float64 => Ok(Column::Float(Vec::new())),
        DataType::Boolean => Ok(Column::Bool(Vec::new())),
        DataType::Utf8 => Ok(Column::Text(Vec::new())),
        other => Err(ArrowError::SchemaError(format!(
            "unsupported type {other:?} for column '{}'",
            field.name()
        ))
        .into()),
    }
}

fn append_batch_column(column: &mut Column, array: &ArrayRef) -> Result<(), PrepError> {
    fn downcast<'a, T: 'static>(array: &'a ArrayRef, expected: &str) -> Result<&'a T, PrepError> {
        array
            .as_any()
            .downcast_ref::<T>()
            .ok_or_else(|| {
                ArrowError::CastError(format!(
                    "expected {expected}, got {:?}",
                    array.data_type()
                ))
                .into()
            })
    }
    match column {
        Column::Int(values) => {
            values.extend(downcast::<Int64Array>(array, "Int64Array")?.iter());
        }
        Column::Float(values) => {
            values.extend(downcast::<Float64Array>(array, "Float64Array")?.iter());
        }
        Column::Bool(values) => {
            values.extend(downcast::<BooleanArray>(array, "BooleanArray")?.iter());
        }
        Column::Text(values) => {
            let arr = downcast::<StringArray>(array, "StringArray")?;
            values.extend(arr.iter().map(|v| v.map(str::to_string)));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_table() -> Table {
        let mut table = Table::new();
        table.push_column("id", Column::Int(vec![Some(1), Some(2), None]));
        table.push_column(
            "amount",
            Column::Float(vec![Some(406597.5), None, Some(0.0)]),
        );
        table.push_column("flag", Column::Bool(vec![Some(true), Some(false), None]));
        table.push_column(
            "gender",
            Column::Text(vec![Some("M".to_string()), None, Some("F".to_string())]),
        );
        table
    }

    #[test]
    fn round_trip_preserves_the_table() {
        let path = std::env::temp_dir().join("credit_prep_roundtrip.parquet");
        let table = full_table();

        write_parquet(&table, &path).unwrap();
        let loaded = read_parquet(&path).unwrap();

        assert_eq!(loaded, table);
    }

    #[test]
    fn no_tmp_file_survives_a_successful_write() {
        let path = std::env::temp_dir().join("credit_prep_tmpfile.parquet");
        write_parquet(&full_table(), &path).unwrap();
        assert!(path.exists());
        assert!(!tmp_path(&path).exists());
    }

    #[test]
    fn missing_parent_directory_is_an_io_error() {
        let path = Path::new("/nonexistent/out/credit.parquet");
        let err = write_parquet(&full_table(), path).unwrap_err();
        assert!(matches!(err, PrepError::Io { .. }));
        assert!(!tmp_path(path).exists());
    }

    #[test]
    fn missing_input_file_is_an_io_error() {
        let err = read_parquet(Path::new("/nonexistent/in.parquet")).unwrap_err();
        assert!(matches!(err, PrepError::Io { .. }));
    }
}
