//! CLI argument parsing for taskprompt.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::Parser;
use clap::Subcommand;
use std::path::PathBuf;

/// taskprompt: render task-tracking status reports from templates.
///
/// Template sets and the custom template directory come from the config
/// file and the `TEMPLATES_USE` / `DATA_DIR` environment variables.
/// `MCP_PROMPT_<NAME>` and `MCP_PROMPT_<NAME>_APPEND` override or extend
/// a rendered report.
#[derive(Parser, Debug)]
#[command(name = "taskprompt")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a YAML config file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands for taskprompt.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the report for an update-task-content operation.
    ///
    /// Without --task-file the task is treated as not found.
    RenderUpdate(RenderUpdateArgs),

    /// Print the resolved body of a template key.
    ///
    /// Useful to check which template set or custom file is picked up.
    ShowTemplate(ShowTemplateArgs),
}

/// Arguments for the `render-update` command.
#[derive(Parser, Debug)]
pub struct RenderUpdateArgs {
    /// Identifier of the task that was updated.
    pub task_id: String,

    /// Task as it was found before the update (JSON or YAML).
    #[arg(long)]
    pub task_file: Option<PathBuf>,

    /// Validation failure message for the requested fields.
    #[arg(long)]
    pub validation_error: Option<String>,

    /// The request contained no fields to change.
    #[arg(long)]
    pub empty_update: bool,

    /// The update was not applied.
    #[arg(long)]
    pub failed: bool,

    /// Message from the storage layer.
    #[arg(short, long)]
    pub message: Option<String>,

    /// Task after the update (JSON or YAML). Ignored with --failed.
    #[arg(long)]
    pub updated_task_file: Option<PathBuf>,
}

/// Arguments for the `show-template` command.
#[derive(Parser, Debug)]
pub struct ShowTemplateArgs {
    /// Template key, e.g. updateTaskContent/index.md.
    pub key: String,
}
