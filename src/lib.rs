//! BPR Reconciler Library
//!
//! A Rust library for reconciling organizational-change request batches
//! against a previously published BPR reference snapshot of the
//! organizational hierarchy.
//!
//! This library provides tools for:
//! - Classifying free-text remarks into structured shapes (sales-department
//!   affiliation, area-group, or unclassified)
//! - Splitting compound branch names into a parent and a sub-unit part
//! - Loading and indexing reference snapshots for O(1) composite-key lookups
//! - Propagating prior target-flag attributes onto changed/abolished rows
//! - Resolving internal-sales, area, and section-group request rows
//! - Comprehensive error handling for data-integrity violations

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod branch_splitter;
        pub mod reconciliation;
        pub mod reference_registry;
        pub mod remarks_classifier;
    }
    pub mod adapters {
        pub mod csv_tables;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{ApplicationType, Classification, ReferenceRow, RequestRow, TargetOrg};
pub use app::services::reconciliation::ReconciliationEngine;
pub use app::services::reference_registry::ReferenceRegistry;
pub use config::ReconcilerConfig;

/// Result type alias for the BPR reconciler
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse error families of the reconciliation contract
///
/// Every [`Error`] variant maps onto exactly one kind; callers that only
/// need the family (surface vs. retry vs. abort decisions) match on this
/// instead of the concrete variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An input table could not be obtained
    DataLoad,
    /// The join/reconciliation step itself failed
    DataMerge,
    /// The name-splitting step failed
    BranchNameSplit,
    /// The classification step or a remarks-related integrity check failed
    RemarksParse,
    /// Configuration or CLI-level validation failed
    Configuration,
}

/// Comprehensive error types for reconciliation operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// A required column is missing from an input table
    #[error("missing column '{column}' in table '{file}'")]
    MissingColumn { file: String, column: String },

    /// A cell value could not be parsed into its typed field
    #[error("invalid field in table '{file}' row {row}: {message}")]
    InvalidField {
        file: String,
        row: usize,
        message: String,
    },

    /// A value does not satisfy the data model's constraints
    #[error("data validation error: {message}")]
    DataValidation { message: String },

    /// The merge/reconciliation step failed unexpectedly
    #[error("data merge error: {message}")]
    DataMerge { message: String },

    /// A non-empty CHANGE/ABOLISH subset produced zero reference matches
    #[error(
        "no reference row matched any of the {non_new_rows} non-NEW request rows; \
         a CHANGE/ABOLISH request must have a prior reference counterpart"
    )]
    NoReferenceMatch { non_new_rows: usize },

    /// An application-side area code is too short to carry the leading digit
    #[error("area code '{area_code}' is too short to strip the application-side prefix")]
    AreaCodeTooShort { area_code: String },

    /// The branch-name splitting step failed unexpectedly
    #[error("branch name split error: {message}")]
    BranchNameSplit { message: String },

    /// The remarks classification step failed unexpectedly
    #[error("remarks parse error: {message}")]
    RemarksParse { message: String },

    /// The request batch carries duplicate internal-sales branch names
    #[error("duplicate internal sales branch names in request batch: {}", .names.join(", "))]
    DuplicateInternalSalesNames { names: Vec<String> },

    /// Configuration error
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a missing-column error
    pub fn missing_column(file: impl Into<String>, column: impl Into<String>) -> Self {
        Self::MissingColumn {
            file: file.into(),
            column: column.into(),
        }
    }

    /// Create an invalid-field error for a specific table row
    pub fn invalid_field(file: impl Into<String>, row: usize, message: impl Into<String>) -> Self {
        Self::InvalidField {
            file: file.into(),
            row,
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a data merge error
    pub fn data_merge(message: impl Into<String>) -> Self {
        Self::DataMerge {
            message: message.into(),
        }
    }

    /// Create a no-reference-match error
    pub fn no_reference_match(non_new_rows: usize) -> Self {
        Self::NoReferenceMatch { non_new_rows }
    }

    /// Create an area-code-too-short error
    pub fn area_code_too_short(area_code: impl Into<String>) -> Self {
        Self::AreaCodeTooShort {
            area_code: area_code.into(),
        }
    }

    /// Create a branch-name split error
    pub fn branch_name_split(message: impl Into<String>) -> Self {
        Self::BranchNameSplit {
            message: message.into(),
        }
    }

    /// Create a remarks parse error
    pub fn remarks_parse(message: impl Into<String>) -> Self {
        Self::RemarksParse {
            message: message.into(),
        }
    }

    /// Create a duplicate-internal-sales-names error
    pub fn duplicate_internal_sales_names(names: Vec<String>) -> Self {
        Self::DuplicateInternalSalesNames { names }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// The coarse error family this variant belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io { .. }
            | Self::CsvParsing { .. }
            | Self::MissingColumn { .. }
            | Self::InvalidField { .. }
            | Self::DataValidation { .. } => ErrorKind::DataLoad,
            Self::DataMerge { .. }
            | Self::NoReferenceMatch { .. }
            | Self::AreaCodeTooShort { .. } => ErrorKind::DataMerge,
            Self::BranchNameSplit { .. } => ErrorKind::BranchNameSplit,
            Self::RemarksParse { .. } | Self::DuplicateInternalSalesNames { .. } => {
                ErrorKind::RemarksParse
            }
            Self::Configuration { .. } => ErrorKind::Configuration,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}
