//! One-shot preparation of the Home Credit `application_train` dataset:
//! CSV in, lowercased column names, sorted-order category codes for
//! low-cardinality text columns, `code_gender == "XNA"` rows dropped,
//! Parquet out.

pub mod data;
pub mod error;
pub mod pipeline;

pub use data::model::{Column, Table};
pub use error::PrepError;
pub use pipeline::{run, PrepConfig};
