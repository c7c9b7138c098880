//! taskprompt: template-driven status reports for task-tracking operations.
//!
//! The library composes the human-readable report for an "update task
//! content" operation from named templates, task data and an optional
//! operator override. See [`prompt::render_update_task_content`].

pub mod config;
pub mod error;
pub mod exit_codes;
pub mod prompt;
pub mod task;
