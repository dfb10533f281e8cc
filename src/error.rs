//! Error kinds raised while importing products
//!
//! Every fallible function in this crate returns [`eyre::Result`]. When the
//! failure belongs to the import itself, the report wraps an [`ImportError`]
//! so callers can recover the kind with `report.downcast_ref::<ImportError>()`.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// The import file does not exist
    #[error("Import file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    /// The import file exists but could not be opened
    #[error("Failed to open import file: {}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line of the import file could not be decoded
    #[error("Failed to read import file: {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A line with the right field count is not valid UTF-8
    #[error("Invalid UTF-8 on line {line} of {}", .path.display())]
    Decode {
        path: PathBuf,
        line: u64,
        #[source]
        source: csv::FromUtf8Error,
    },

    /// A record lacks one of the required product fields
    #[error("Missing field `{field}` on line {line}")]
    MissingField { field: &'static str, line: u64 },

    /// A numeric product field holds something other than an integer
    #[error("Invalid value {value:?} for field `{field}` on line {line}")]
    InvalidValue {
        field: &'static str,
        value: String,
        line: u64,
    },

    /// The store rejected a staged product or failed to commit
    #[error("Failed to persist products")]
    Persistence(#[source] sqlx::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_context() {
        let err = ImportError::MissingField {
            field: "taxRate",
            line: 3,
        };
        assert_eq!(err.to_string(), "Missing field `taxRate` on line 3");

        let err = ImportError::InvalidValue {
            field: "price",
            value: "9.99".to_string(),
            line: 2,
        };
        assert_eq!(
            err.to_string(),
            "Invalid value \"9.99\" for field `price` on line 2"
        );
    }

    #[test]
    fn test_downcast_through_report() {
        let report: eyre::Report = ImportError::FileNotFound {
            path: PathBuf::from("missing.csv"),
        }
        .into();

        assert!(matches!(
            report.downcast_ref::<ImportError>(),
            Some(ImportError::FileNotFound { .. })
        ));
        assert!(report.to_string().contains("missing.csv"));
    }
}
