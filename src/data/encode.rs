use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use super::model::{Column, Table};

/// Prefix joining a derived code column to its source text column.
pub const CATEGORY_PREFIX: &str = "cat_";

/// Append an integer-coded twin column for every text column with at most
/// `max_levels` distinct non-missing values.
///
/// Codes are dense, start at 0, and follow the sorted lexicographic order of
/// the distinct values, so re-running over the same table always assigns the
/// same codes. Missing source values stay missing in the derived column.
/// The twin is named `cat_<source>` and appended after the existing columns,
/// in source-column order. Returns the number of columns encoded; zero
/// eligible columns is a no-op, not an error.
pub fn encode_categoricals(table: &mut Table, max_levels: usize) -> usize {
    let mut derived: Vec<(String, Column)> = Vec::new();

    for (name, column) in table.columns() {
        let Column::Text(values) = column else {
            continue;
        };
        let levels: BTreeSet<&str> = values.iter().flatten().map(String::as_str).collect();
        if levels.len() > max_levels {
            continue;
        }
        let code_of: BTreeMap<&str, i64> = levels
            .iter()
            .enumerate()
            .map(|(code, value)| (*value, code as i64))
            .collect();
        let codes: Vec<Option<i64>> = values
            .iter()
            .map(|v| v.as_deref().and_then(|s| code_of.get(s).copied()))
            .collect();

        debug!("encoding '{name}' ({} levels)", levels.len());
        derived.push((format!("{CATEGORY_PREFIX}{name}"), Column::Int(codes)));
    }

    let count = derived.len();
    for (name, column) in derived {
        table.push_column(name, column);
    }
    count
}
