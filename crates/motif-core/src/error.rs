//! Unified error handling for Motif Core.
//!
//! The pattern demos themselves cannot fail. Everything here is ambient:
//! the console port refusing a write, a section name nobody recognises, or
//! configuration that does not make sense.

use thiserror::Error;

/// Root error type for Motif Core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MotifError {
    /// The console port could not accept a line.
    #[error("Output error: {reason}")]
    Output { reason: String },

    /// A section name did not match any known demo.
    #[error("Unknown section '{name}'")]
    UnknownSection { name: String },

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl MotifError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Output { reason } => vec![
                format!("Writing output failed: {}", reason),
                "Check that stdout or the --output file is writable".into(),
            ],
            Self::UnknownSection { name } => {
                let mut hints = vec![
                    format!("'{}' is not a known section", name),
                    "Known sections:".into(),
                ];
                hints.extend(
                    crate::application::Section::ALL
                        .iter()
                        .map(|s| format!("  • {}", s.name())),
                );
                hints.push("Example: motif run flyweight bridge".into());
                hints
            }
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in Motif".into(),
                "Please report this issue at: https://github.com/cosecruz/motif/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownSection { .. } => ErrorCategory::Validation,
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Output { .. } | Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type MotifResult<T> = Result<T, MotifError>;

/// Extension trait for adding context to errors.
pub trait Context<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> MotifResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> MotifResult<T> {
        self.map_err(|e| MotifError::Output {
            reason: format!("{}: {}", msg.into(), e),
        })
    }
}
