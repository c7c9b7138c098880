//! Configuration for taskprompt.
//!
//! The config file is YAML:
//!
//! ```yaml
//! templates_use: en
//! data_dir: ./data
//! overrides:
//!   UPDATE_TASK_CONTENT:
//!     mode: append
//!     content: "Remember to run the tests."
//! ```
//!
//! It supports forward-compatible parsing (unknown fields are ignored),
//! defaults for every field, and environment overrides for the template
//! settings.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use types::{DATA_DIR_ENV, OverrideEntry, TEMPLATES_USE_ENV};
