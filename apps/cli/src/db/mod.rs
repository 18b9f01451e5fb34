//! Word persistence.

pub mod date_utils;
pub mod error;
pub mod repository;

pub use error::DbError;
pub use repository::{export_csv, JsonRepository, WordRepository};
