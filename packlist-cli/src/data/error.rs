//! Fatal pipeline errors
//!
//! Only two things abort a table build: the workbook cannot be read, or it
//! has no usable schema. Per-cell numeric parse failures are absorbed by the
//! numeric projector and never surface here.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    /// The workbook file is missing, unreadable, or a sheet failed to parse.
    #[error("cannot read workbook at {path}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The workbook opened but yielded nothing to build a table from.
    #[error("unusable workbook at {path}: {reason}")]
    Schema { path: PathBuf, reason: String },
}

impl DataError {
    pub fn file_access(
        path: impl Into<PathBuf>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        DataError::FileAccess {
            path: path.into(),
            source: Box::new(source),
        }
    }

    pub fn schema(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        DataError::Schema {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
