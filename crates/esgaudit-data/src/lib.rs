//! Table adapters: read the supplier table, write supplier and exception tables.
//!
//! This crate is allowed to do filesystem IO. Parsing is split from reading so the
//! parser can be exercised from memory.

#![forbid(unsafe_code)]

mod error;
mod read;
mod write;

use camino::Utf8Path;
use esgaudit_domain::model::SupplierTable;

pub use error::{LoadError, WriteError};
pub use read::{COLUMNS, Column, parse_supplier_csv};
pub use write::{
    EXCEPTION_COLUMNS, exceptions_csv_string, supplier_csv_string, write_exceptions_csv,
    write_supplier_csv,
};

/// Fuzz-friendly API for testing parsing robustness without filesystem access.
/// These functions are designed to never panic on any input.
pub mod fuzz {
    use super::*;

    /// Parse arbitrary text as a supplier table.
    ///
    /// Returns the number of loaded rows on success. **Never panics** on any input.
    pub fn parse_supplier_table(text: &str) -> Result<usize, LoadError> {
        parse_supplier_csv(text).map(|t| t.len())
    }

    /// Parse a single field the way numeric columns are parsed.
    ///
    /// **Never panics** on any input.
    pub fn parse_measure(raw: &str) -> Option<f64> {
        read::measure(raw, 0, "fuzz")
    }
}

/// Load and validate the supplier table at `path`.
///
/// Any error here is fatal for an audit run: nothing downstream sees a partial table.
pub fn load_supplier_table(path: &Utf8Path) -> Result<SupplierTable, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            LoadError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let table = parse_supplier_csv(&text)?;
    tracing::debug!(path = %path, rows = table.len(), "loaded supplier table");
    Ok(table)
}
