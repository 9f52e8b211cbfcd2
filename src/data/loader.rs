use std::fs::File;
use std::path::Path;

use log::debug;

use super::model::{Column, Table};
use crate::error::PrepError;

/// Load a delimited text file with a header row into a [`Table`].
///
/// Column types are inferred from the whole column: integer when every
/// non-empty field parses as `i64`, otherwise float when every non-empty
/// field parses as `f64`, otherwise boolean when every non-empty field is
/// `true` or `false`, otherwise text. A column mixing numeric and
/// non-numeric literals is therefore text, and a column with no non-empty
/// fields at all is text. Empty fields are missing values in every type.
///
/// Fails with [`PrepError::Io`] when the path cannot be opened and with
/// [`PrepError::Parse`] when a row is malformed (inconsistent field count,
/// invalid UTF-8).
pub fn load_csv(path: &Path) -> Result<Table, PrepError> {
    let file = File::open(path).map_err(|e| PrepError::io(path, e))?;
    let mut reader = csv::Reader::from_reader(file);

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    // Row-oriented file to column-oriented cells. The reader rejects rows
    // whose field count differs from the header's.
    let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for result in reader.records() {
        let record = result?;
        for (idx, field) in record.iter().enumerate() {
            cells[idx].push(field.to_string());
        }
    }

    let mut table = Table::new();
    for (name, values) in headers.into_iter().zip(cells) {
        let column = build_column(infer_type(&values), values);
        debug!("column '{name}' inferred as {}", column.type_name());
        table.push_column(name, column);
    }
    Ok(table)
}

// ---------------------------------------------------------------------------
// Type inference
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, PartialEq)]
enum Inferred {
    Int,
    Float,
    Bool,
    Text,
}

fn infer_type(values: &[String]) -> Inferred {
    let mut present = values.iter().filter(|v| !v.is_empty()).peekable();
    if present.peek().is_none() {
        return Inferred::Text;
    }
    if present.clone().all(|v| v.parse::<i64>().is_ok()) {
        Inferred::Int
    } else if present.clone().all(|v| v.parse::<f64>().is_ok()) {
        Inferred::Float
    } else if present.all(|v| v == "true" || v == "false") {
        Inferred::Bool
    } else {
        Inferred::Text
    }
}

/// Build a typed column from raw fields. Inference already proved every
/// non-empty field parses, so the per-value `parse().ok()` never loses data.
fn build_column(kind: Inferred, values: Vec<String>) -> Column {
    fn slots<T>(values: Vec<String>, parse: impl Fn(&str) -> Option<T>) -> Vec<Option<T>> {
        values
            .into_iter()
            .map(|v| if v.is_empty() { None } else { parse(&v) })
            .collect()
    }
    match kind {
        Inferred::Int => Column::Int(slots(values, |v| v.parse().ok())),
        Inferred::Float => Column::Float(slots(values, |v| v.parse().ok())),
        Inferred::Bool => Column::Bool(slots(values, |v| Some(v == "true"))),
        Inferred::Text => Column::Text(slots(values, |v| Some(v.to_string()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp_csv(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_headers_and_infers_types() {
        let path = write_temp_csv(
            "credit_prep_loader_types.csv",
            "SK_ID_CURR,AMT_CREDIT,CODE_GENDER,FLAG_DOC\n\
             100001,406597.5,M,true\n\
             100002,1293502.5,F,false\n",
        );
        let table = load_csv(&path).unwrap();

        assert_eq!(table.num_rows(), 2);
        assert_eq!(
            table.column("SK_ID_CURR"),
            Some(&Column::Int(vec![Some(100001), Some(100002)]))
        );
        assert_eq!(
            table.column("AMT_CREDIT"),
            Some(&Column::Float(vec![Some(406597.5), Some(1293502.5)]))
        );
        assert_eq!(
            table.column("CODE_GENDER"),
            Some(&Column::Text(vec![
                Some("M".to_string()),
                Some("F".to_string())
            ]))
        );
        assert_eq!(
            table.column("FLAG_DOC"),
            Some(&Column::Bool(vec![Some(true), Some(false)]))
        );
    }

    #[test]
    fn empty_fields_are_missing_in_every_type() {
        let path = write_temp_csv(
            "credit_prep_loader_missing.csv",
            "a,b,c\n1,,x\n,2.5,\n",
        );
        let table = load_csv(&path).unwrap();

        assert_eq!(table.column("a"), Some(&Column::Int(vec![Some(1), None])));
        assert_eq!(
            table.column("b"),
            Some(&Column::Float(vec![None, Some(2.5)]))
        );
        assert_eq!(
            table.column("c"),
            Some(&Column::Text(vec![Some("x".to_string()), None]))
        );
    }

    #[test]
    fn mixed_literals_fall_back_to_text() {
        let path = write_temp_csv(
            "credit_prep_loader_mixed.csv",
            "v\n1\ntwo\n3\n",
        );
        let table = load_csv(&path).unwrap();
        assert_eq!(
            table.column("v"),
            Some(&Column::Text(vec![
                Some("1".to_string()),
                Some("two".to_string()),
                Some("3".to_string())
            ]))
        );
    }

    #[test]
    fn all_missing_column_is_text() {
        let path = write_temp_csv("credit_prep_loader_blank.csv", "v,w\n,1\n,2\n");
        let table = load_csv(&path).unwrap();
        assert_eq!(table.column("v"), Some(&Column::Text(vec![None, None])));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_csv(Path::new("/nonexistent/input.csv")).unwrap_err();
        assert!(matches!(err, PrepError::Io { .. }));
    }

    #[test]
    fn inconsistent_field_count_is_a_parse_error() {
        let path = write_temp_csv(
            "credit_prep_loader_ragged.csv",
            "a,b\n1,2\n3,4,5\n",
        );
        let err = load_csv(&path).unwrap_err();
        assert!(matches!(err, PrepError::Parse(_)));
    }
}
