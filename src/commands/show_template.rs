//! Implementation of the `taskprompt show-template` command.

use crate::cli::ShowTemplateArgs;
use taskprompt::config::Config;
use taskprompt::error::Result;
use taskprompt::prompt::{LayeredTemplateStore, TemplateSource};

/// Execute the `taskprompt show-template` command.
///
/// Prints where the key resolves from (to stderr), then the raw body.
pub fn cmd_show_template(args: ShowTemplateArgs, config: &Config) -> Result<()> {
    let (body, source) = resolve_template(&args.key, config)?;
    eprintln!("{}", header(&args.key, &source));
    print!("{}", body);
    Ok(())
}

fn resolve_template(key: &str, config: &Config) -> Result<(String, TemplateSource)> {
    LayeredTemplateStore::from_config(config).resolve(key)
}

fn header(key: &str, source: &TemplateSource) -> String {
    format!("# {} ({})", key, source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_names_fallback_set() {
        let config = Config::default()
            .apply_env([("TEMPLATES_USE", "fr")])
            .unwrap();

        let (body, source) = resolve_template("updateTaskContent/index.md", &config).unwrap();

        assert!(body.contains("{responseTitle}"));
        assert_eq!(
            header("updateTaskContent/index.md", &source),
            "# updateTaskContent/index.md (built-in, set 'en')"
        );
    }

    #[test]
    fn unknown_key_is_an_error() {
        let result = resolve_template("updateTaskContent/nope.md", &Config::default());
        assert!(result.is_err());
    }
}
