use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::data::encode::encode_categoricals;
use crate::data::filter::drop_rows_equal;
use crate::data::loader::load_csv;
use crate::data::writer::write_parquet;

/// Dataset-specific preparation constants.
///
/// The defaults are the `application_train` decisions: text columns with at
/// most 10 levels get category codes, and the handful of rows with
/// `code_gender == "XNA"` are dropped.
#[derive(Debug, Clone)]
pub struct PrepConfig {
    /// Largest distinct-value count a text column may have and still be
    /// treated as categorical.
    pub max_categorical_levels: usize,
    /// Column whose value decides row removal.
    pub filter_column: String,
    /// Rows equal to this literal in `filter_column` are removed.
    pub filter_value: String,
}

impl Default for PrepConfig {
    fn default() -> Self {
        PrepConfig {
            max_categorical_levels: 10,
            filter_column: "code_gender".to_string(),
            filter_value: "XNA".to_string(),
        }
    }
}

/// Run the whole preparation pass: load the CSV, lowercase column names,
/// encode categoricals, drop filtered rows, write Parquet.
///
/// One [`Table`](crate::data::model::Table) flows through the stages; each
/// stage either succeeds or aborts the run with a diagnostic naming the
/// stage and the offending path or column.
pub fn run(input: &Path, output: &Path, config: &PrepConfig) -> Result<()> {
    let mut table =
        load_csv(input).with_context(|| format!("loading {}", input.display()))?;
    info!(
        "loaded {} rows x {} columns from {}",
        table.num_rows(),
        table.num_columns(),
        input.display()
    );

    table.lowercase_names();

    let encoded = encode_categoricals(&mut table, config.max_categorical_levels);
    info!(
        "encoded {encoded} categorical columns (<= {} levels)",
        config.max_categorical_levels
    );

    let dropped = drop_rows_equal(&mut table, &config.filter_column, &config.filter_value)
        .with_context(|| format!("filtering rows on '{}'", config.filter_column))?;
    info!(
        "dropped {dropped} rows where {} == {:?}, {} rows remain",
        config.filter_column,
        config.filter_value,
        table.num_rows()
    );

    write_parquet(&table, output)
        .with_context(|| format!("writing {}", output.display()))?;
    info!("wrote {}", output.display());
    Ok(())
}
