//! Implementation of the `taskprompt render-update` command.

use crate::cli::RenderUpdateArgs;
use taskprompt::config::Config;
use taskprompt::error::Result;
use taskprompt::prompt::{
    EnvOverrides, LayeredTemplateStore, OverrideChain, UpdateSignals, render_update_task_content,
};
use taskprompt::task::Task;

/// Execute the `taskprompt render-update` command.
///
/// Builds the update signals from the arguments, renders the report and
/// prints it to stdout. Environment overrides take precedence over the
/// config file's `overrides` section.
pub fn cmd_render_update(args: RenderUpdateArgs, config: Config) -> Result<()> {
    let signals = build_signals(args)?;
    let store = LayeredTemplateStore::from_config(&config);
    let overrides = override_chain(EnvOverrides::from_env(), config);

    let report = render_update_task_content(signals, &store, &overrides)?;
    println!("{}", report);
    Ok(())
}

/// Environment rules first, then the config file's `overrides` section.
fn override_chain(env: EnvOverrides, config: Config) -> OverrideChain {
    OverrideChain::new().with(env).with(config)
}

fn build_signals(args: RenderUpdateArgs) -> Result<UpdateSignals> {
    let mut signals = UpdateSignals::new(args.task_id);

    if let Some(path) = &args.task_file {
        signals = signals.with_task(Task::load(path)?);
    }
    if let Some(error) = args.validation_error {
        signals = signals.with_validation_error(error);
    }
    if args.empty_update {
        signals = signals.with_empty_update();
    }

    signals = if args.failed {
        signals.failed()
    } else {
        let updated = args
            .updated_task_file
            .as_deref()
            .map(Task::load)
            .transpose()?;
        signals.succeeded(updated)
    };

    if let Some(message) = args.message {
        signals = signals.with_message(message);
    }

    Ok(signals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use taskprompt::prompt::{
        MemoryTemplateStore, OverrideResolver, OverrideRule, UPDATE_TASK_CONTENT,
    };
    use tempfile::TempDir;

    const TASK_JSON: &str =
        r#"{"id":"T-42","name":"Login","description":"Form","updatedAt":"2026-01-01T00:00:00Z"}"#;

    fn args(task_file: Option<PathBuf>) -> RenderUpdateArgs {
        RenderUpdateArgs {
            task_id: "T-42".to_string(),
            task_file,
            validation_error: None,
            empty_update: false,
            failed: false,
            message: None,
            updated_task_file: None,
        }
    }

    #[test]
    fn no_task_file_means_not_found() {
        let signals = build_signals(args(None)).unwrap();
        assert!(signals.task.is_none());
        assert_eq!(signals.task_id, "T-42");
    }

    #[test]
    fn task_files_are_loaded() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("task.json");
        std::fs::write(&path, TASK_JSON).unwrap();

        let mut args = args(Some(path.clone()));
        args.updated_task_file = Some(path);
        args.message = Some("done".to_string());

        let signals = build_signals(args).unwrap();
        assert!(signals.success);
        assert_eq!(signals.task.map(|t| t.name), Some("Login".to_string()));
        assert!(signals.updated_task.is_some());
        assert_eq!(signals.message.as_deref(), Some("done"));
    }

    #[test]
    fn failed_ignores_updated_task() {
        let mut args = args(None);
        args.failed = true;
        args.updated_task_file = Some(PathBuf::from("does-not-exist.json"));

        let signals = build_signals(args).unwrap();
        assert!(!signals.success);
        assert!(signals.updated_task.is_none());
    }

    #[test]
    fn unreadable_task_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = build_signals(args(Some(dir.path().join("missing.json")))).unwrap_err();
        assert_eq!(err.exit_code(), taskprompt::exit_codes::USER_ERROR);
    }

    const CONFIG_YAML: &str = r#"
overrides:
  UPDATE_TASK_CONTENT:
    mode: append
    content: "from config"
"#;

    #[test]
    fn env_override_wins_over_config() {
        let config = Config::from_yaml(CONFIG_YAML).unwrap();
        let env = EnvOverrides::from_vars([("MCP_PROMPT_UPDATE_TASK_CONTENT", "from env")]);

        let chain = override_chain(env, config);

        assert_eq!(
            chain.resolve(UPDATE_TASK_CONTENT),
            Some(OverrideRule::replace("from env"))
        );
    }

    #[test]
    fn config_override_applies_without_env() {
        let config = Config::from_yaml(CONFIG_YAML).unwrap();
        let chain = override_chain(EnvOverrides::from_vars([("PATH", "/bin")]), config);

        let signals = build_signals(RenderUpdateArgs {
            failed: true,
            message: Some("disk full".to_string()),
            ..args(None)
        })
        .unwrap();
        // Give the classifier a found task so the completed path runs.
        let signals = signals.with_task(Task::from_json(TASK_JSON).unwrap());
        let store = MemoryTemplateStore::builtin("en");

        let report = render_update_task_content(signals, &store, &chain).unwrap();
        assert!(report.ends_with("disk full\n\n\nfrom config"));
    }

    #[test]
    fn malformed_config_overrides_still_render() {
        let config = Config::from_yaml(
            "overrides:\n  update_task_content: x\n  UPDATE_TASK_CONTENT: [1, 2]\n",
        )
        .unwrap();
        let chain = override_chain(EnvOverrides::default(), config);
        let store = MemoryTemplateStore::builtin("en");

        let not_found =
            render_update_task_content(build_signals(args(None)).unwrap(), &store, &chain)
                .unwrap();
        assert!(not_found.contains("T-42"));

        let signals = UpdateSignals::new("T-42")
            .with_task(Task::from_json(TASK_JSON).unwrap())
            .failed()
            .with_message("disk full");
        let report = render_update_task_content(signals, &store, &chain).unwrap();
        assert_eq!(report, "## Task Content Update - Failure\n\ndisk full\n");
    }
}
