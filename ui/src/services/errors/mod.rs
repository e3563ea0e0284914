use thiserror::Error;

use crate::features::form::{FieldId, FieldKind};
use crate::utils::format_bytes_human;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Unknown field: {id}")]
    UnknownField { id: FieldId },

    #[error("Field kind mismatch: {id} is a {expected} field, update carried {found}")]
    KindMismatch {
        id: FieldId,
        expected: FieldKind,
        found: FieldKind,
    },

    #[error("Photo upload not supported for {kind} field {id}")]
    PhotoNotSupported { id: FieldId, kind: FieldKind },

    #[error("Photo upload requires {id} to be the selected field")]
    NotSelected { id: FieldId },
}

/// Errors raised while turning a picked file into an embeddable photo
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhotoError {
    #[error("Failed to read file: {name}")]
    ReadFailed { name: String },

    #[error("File is empty: {name}")]
    Empty { name: String },

    #[error("Image too large: {name} is {} (limit {})", human(.size), human(.limit))]
    TooLarge { name: String, size: u64, limit: u64 },
}

fn human(bytes: &u64) -> String {
    format_bytes_human(*bytes)
}

pub type FormResult<T> = Result<T, FormError>;
pub type PhotoResult<T> = Result<T, PhotoError>;

impl FormError {
    /// Get error severity for logging purposes
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Selection races and stray clicks, expected during normal use
            FormError::UnknownField { .. } | FormError::NotSelected { .. } => ErrorSeverity::Low,
            FormError::PhotoNotSupported { .. } => ErrorSeverity::Medium,
            FormError::KindMismatch { .. } => ErrorSeverity::High,
        }
    }
}

impl PhotoError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PhotoError::Empty { .. } | PhotoError::TooLarge { .. } => ErrorSeverity::Medium,
            PhotoError::ReadFailed { .. } => ErrorSeverity::High,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
}

/// Log an error at the console level matching its severity
pub fn log_error(context: &str, error: &dyn std::error::Error, severity: ErrorSeverity) {
    match severity {
        ErrorSeverity::Low => crate::console_debug!("[{}] {}", context, error),
        ErrorSeverity::Medium => crate::console_warn!("[{}] {}", context, error),
        ErrorSeverity::High => crate::console_error!("[{}] {}", context, error),
    }
}
