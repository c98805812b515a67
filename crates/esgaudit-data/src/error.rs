use camino::Utf8PathBuf;
use esgaudit_domain::model::DuplicateSupplierId;

/// Reasons the supplier table cannot be used. All of them abort an audit.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("input table not found: {path}")]
    NotFound { path: Utf8PathBuf },

    #[error("failed to read {path}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV")]
    Csv(#[from] csv::Error),

    #[error("missing required column '{column}'")]
    MissingColumn { column: &'static str },

    #[error("row {row}: empty supplier_id")]
    EmptySupplierId { row: u32 },

    #[error(transparent)]
    DuplicateSupplierId(#[from] DuplicateSupplierId),

    #[error("input table has no data rows")]
    Empty,
}

#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("failed to write {path}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode CSV")]
    Csv(#[from] csv::Error),
}
