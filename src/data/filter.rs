use super::model::{Column, Table};
use crate::error::PrepError;

/// Remove every row whose value in `column` equals `literal`. Returns the
/// number of rows removed.
///
/// Missing values never equal the literal, so rows with a missing field in
/// `column` survive, and a non-text column matches nothing. Fails with
/// [`PrepError::Schema`] when the column is absent.
pub fn drop_rows_equal(
    table: &mut Table,
    column: &str,
    literal: &str,
) -> Result<usize, PrepError> {
    let col = table
        .column(column)
        .ok_or_else(|| PrepError::schema(column))?;

    let keep: Vec<bool> = match col {
        Column::Text(values) => values
            .iter()
            .map(|v| v.as_deref() != Some(literal))
            .collect(),
        _ => vec![true; table.num_rows()],
    };

    let dropped = keep.iter().filter(|k| !**k).count();
    if dropped > 0 {
        table.retain_rows(&keep);
    }
    Ok(dropped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gender_table() -> Table {
        let mut table = Table::new();
        table.push_column(
            "code_gender",
            Column::Text(vec![
                Some("M".to_string()),
                Some("F".to_string()),
                Some("XNA".to_string()),
                None,
            ]),
        );
        table.push_column(
            "sk_id_curr",
            Column::Int(vec![Some(1), Some(2), Some(3), Some(4)]),
        );
        table
    }

    #[test]
    fn drops_exactly_the_matching_rows() {
        let mut table = gender_table();
        let dropped = drop_rows_equal(&mut table, "code_gender", "XNA").unwrap();

        assert_eq!(dropped, 1);
        assert_eq!(table.num_rows(), 3);
        assert_eq!(
            table.column("sk_id_curr"),
            Some(&Column::Int(vec![Some(1), Some(2), Some(4)]))
        );
    }

    #[test]
    fn missing_values_never_match_the_literal() {
        let mut table = gender_table();
        drop_rows_equal(&mut table, "code_gender", "XNA").unwrap();
        // The row with a missing gender is still here.
        assert_eq!(
            table.column("code_gender"),
            Some(&Column::Text(vec![
                Some("M".to_string()),
                Some("F".to_string()),
                None,
            ]))
        );
    }

    #[test]
    fn absent_column_is_a_schema_error() {
        let mut table = gender_table();
        let err = drop_rows_equal(&mut table, "nope", "XNA").unwrap_err();
        assert!(matches!(err, PrepError::Schema { .. }));
    }

    #[test]
    fn non_text_column_matches_nothing() {
        let mut table = gender_table();
        let dropped = drop_rows_equal(&mut table, "sk_id_curr", "XNA").unwrap();
        assert_eq!(dropped, 0);
        assert_eq!(table.num_rows(), 4);
    }
}
