// ---------------------------------------------------------------------------
// Column – one named, typed value vector
// ---------------------------------------------------------------------------

/// A column of values of one declared type.
///
/// Every slot is optional: `None` is a missing field, in every type. Derived
/// category-code columns are `Int` columns whose missing slots line up with
/// the missing slots of their source text column.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Int(Vec<Option<i64>>),
    Float(Vec<Option<f64>>),
    Bool(Vec<Option<bool>>),
    Text(Vec<Option<String>>),
}

impl Column {
    /// Number of values (rows) in the column, missing slots included.
    pub fn len(&self) -> usize {
        match self {
            Column::Int(v) => v.len(),
            Column::Float(v) => v.len(),
            Column::Bool(v) => v.len(),
            Column::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Short type name for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Column::Int(_) => "int",
            Column::Float(_) => "float",
            Column::Bool(_) => "bool",
            Column::Text(_) => "text",
        }
    }

    fn retain_rows(&mut self, keep: &[bool]) {
        fn apply<T>(values: &mut Vec<Option<T>>, keep: &[bool]) {
            let mut flags = keep.iter().copied();
            values.retain(|_| flags.next().unwrap_or(false));
        }
        match self {
            Column::Int(v) => apply(v, keep),
            Column::Float(v) => apply(v, keep),
            Column::Bool(v) => apply(v, keep),
            Column::Text(v) => apply(v, keep),
        }
    }
}

// ---------------------------------------------------------------------------
// Table – the in-memory columnar dataset
// ---------------------------------------------------------------------------

/// In-memory columnar table: ordered named columns, uniform row count.
///
/// Built once by the loader, transformed in place by the pipeline stages,
/// consumed once by the writer. Row order is preserved throughout; the row
/// filter is the only stage that removes rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<(String, Column)>,
    rows: usize,
}

impl Table {
    pub fn new() -> Self {
        Table::default()
    }

    pub fn num_rows(&self) -> usize {
        self.rows
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// All columns in order, with their names.
    pub fn columns(&self) -> &[(String, Column)] {
        &self.columns
    }

    /// Look up a column by exact name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c)
    }

    /// Append a column. The first column fixes the table's row count; every
    /// later column must match it.
    pub fn push_column(&mut self, name: impl Into<String>, column: Column) {
        if self.columns.is_empty() {
            self.rows = column.len();
        }
        debug_assert_eq!(column.len(), self.rows);
        self.columns.push((name.into(), column));
    }

    /// Lowercase every column name. Non-alphabetic characters are left
    /// unchanged, so applying this twice is the same as applying it once.
    pub fn lowercase_names(&mut self) {
        for (name, _) in &mut self.columns {
            *name = name.to_lowercase();
        }
    }

    /// Keep only the rows whose `keep` flag is true. `keep` must have one
    /// flag per row.
    pub fn retain_rows(&mut self, keep: &[bool]) {
        debug_assert_eq!(keep.len(), self.rows);
        for (_, column) in &mut self.columns {
            column.retain_rows(keep);
        }
        self.rows = keep.iter().filter(|k| **k).count();
    }
}
