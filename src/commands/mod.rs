//! Command implementations for taskprompt.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, and builds the effective configuration they share.

mod render_update;
mod show_template;

use crate::cli::{Cli, Command};
use std::path::Path;
use taskprompt::config::Config;
use taskprompt::error::Result;
use tracing::debug;

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::RenderUpdate(args) => render_update::cmd_render_update(args, config),
        Command::ShowTemplate(args) => show_template::cmd_show_template(args, &config),
    }
}

/// Config file (or defaults) with the template environment variables applied.
fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            Config::load(path)?
        }
        None => Config::default(),
    };
    config.apply_env(std::env::vars())
}
