//! Error types for taskprompt.
//!
//! Uses thiserror for derive macros. The composition engine itself never
//! fails; these errors belong to its collaborators (template loading,
//! config parsing, task file I/O).

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for taskprompt operations.
#[derive(Error, Debug)]
pub enum PromptError {
    /// User provided invalid arguments or an unusable input file.
    #[error("{0}")]
    UserError(String),

    /// The configuration file is malformed or failed validation.
    #[error("config error: {0}")]
    Config(String),

    /// No template set contains the requested key.
    #[error("template '{key}' not found (template set '{set}', fallback 'en')")]
    TemplateNotFound {
        /// The path-like template key, e.g. `updateTaskContent/index.md`.
        key: String,
        /// The template set that was requested.
        set: String,
    },

    /// Reading a file from disk failed.
    #[error("failed to read '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A task file could not be parsed.
    #[error("failed to parse {0}")]
    Parse(String),
}

impl PromptError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PromptError::UserError(_) => exit_codes::USER_ERROR,
            PromptError::Io { .. } => exit_codes::USER_ERROR,
            PromptError::Parse(_) => exit_codes::USER_ERROR,
            PromptError::TemplateNotFound { .. } => exit_codes::TEMPLATE_FAILURE,
            PromptError::Config(_) => exit_codes::CONFIG_FAILURE,
        }
    }
}

/// Result type alias for taskprompt operations.
pub type Result<T> = std::result::Result<T, PromptError>;
