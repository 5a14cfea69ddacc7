//! Validate command

use clap::Args;
use console::style;
use tracing::info;

use chronicle_core::config::{
    apply_env_overrides, find_config, load_config, validate_config, Config,
};

use crate::cli::{output, Cli, OutputFormat};
use crate::exit_codes;

/// Validate configuration
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// Strict mode - treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

impl ValidateCommand {
    /// Execute the validate command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(strict = self.strict, "executing validate command");
        let cwd = std::env::current_dir()?;

        let mut errors: Vec<String> = Vec::new();
        let mut warnings: Vec<String> = Vec::new();

        let config_path = cli.config.clone().or_else(|| find_config(&cwd));
        let config = match &config_path {
            Some(path) => match load_config(path) {
                Ok(config) => Some(config),
                Err(e) => {
                    errors.push(format!("Configuration: {}", e));
                    None
                }
            },
            None => {
                warnings.push("No configuration file found, defaults apply".to_string());
                Some(Config::default())
            }
        };

        if let Some(mut config) = config {
            apply_env_overrides(&mut config);
            if let Err(e) = validate_config(&config) {
                errors.push(format!("Configuration validation: {}", e));
            }
            warnings.extend(environment_warnings(&config, |key| std::env::var(key).ok()));
        }

        if self.strict {
            errors.append(&mut warnings);
        }

        let passed = errors.is_empty();

        match cli.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "valid": passed,
                    "config_path": config_path.as_ref().map(|p| p.to_string_lossy().to_string()),
                    "errors": errors,
                    "warnings": warnings
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Text => {
                if !cli.quiet {
                    println!("{}", output::header("Validation Results"));
                    println!();

                    if let Some(path) = &config_path {
                        println!("Config: {}", output::path_style().apply_to(path.display()));
                        println!();
                    }

                    if !errors.is_empty() {
                        println!("{}", style("Errors:").red().bold());
                        for error in &errors {
                            println!("  {} {}", style("✗").red(), error);
                        }
                        println!();
                    }

                    if !warnings.is_empty() {
                        println!("{}", style("Warnings:").yellow().bold());
                        for warning in &warnings {
                            println!("  {} {}", style("!").yellow(), warning);
                        }
                        println!();
                    }

                    if passed {
                        if warnings.is_empty() {
                            println!("{}", style("✓ All checks passed").green().bold());
                        } else {
                            println!(
                                "{} with {} warning(s)",
                                style("✓ Validation passed").green().bold(),
                                warnings.len()
                            );
                        }
                    } else {
                        println!(
                            "{} with {} error(s)",
                            style("✗ Validation failed").red().bold(),
                            errors.len()
                        );
                    }
                }
            }
        }

        if !passed {
            std::process::exit(exit_codes::CONFIG_ERROR);
        }

        Ok(())
    }
}

/// Warnings about settings that only matter when fetching from GitHub
fn environment_warnings<F>(config: &Config, lookup: F) -> Vec<String>
where
    F: Fn(&str) -> Option<String>,
{
    let mut warnings = Vec::new();

    if config.github.repository.is_none() {
        warnings.push(
            "github.repository is not set; generate will need --input or GITHUB_REPOSITORY"
                .to_string(),
        );
    }

    if lookup(&config.github.token_env)
        .filter(|token| !token.trim().is_empty())
        .is_none()
    {
        warnings.push(format!(
            "{} is not set; GitHub requests will be unauthenticated",
            config.github.token_env
        ));
    }

    warnings
}
