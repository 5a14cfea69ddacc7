//! Init command

use clap::Args;
use console::style;
use tracing::info;

use chronicle_core::config::{
    Config, DEFAULT_CONFIG_TEMPLATE, DEFAULT_CONFIG_TOML, DEFAULT_CONFIG_TOML_TEMPLATE,
    DEFAULT_CONFIG_YAML,
};

use crate::cli::{output, Cli, OutputFormat};

/// Initialize a new Chronicle configuration
#[derive(Debug, Args)]
pub struct InitCommand {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Write TOML instead of YAML
    #[arg(long)]
    pub toml: bool,
}

impl InitCommand {
    /// Execute the init command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(force = self.force, toml = self.toml, "executing init command");
        let cwd = std::env::current_dir()?;

        let (file_name, content) = if self.toml {
            (DEFAULT_CONFIG_TOML, DEFAULT_CONFIG_TOML_TEMPLATE)
        } else {
            (DEFAULT_CONFIG_YAML, DEFAULT_CONFIG_TEMPLATE)
        };
        let config_path = cwd.join(file_name);

        if config_path.exists() && !self.force {
            anyhow::bail!(
                "Configuration file already exists at {}. Use --force to overwrite.",
                config_path.display()
            );
        }

        // The template must load like any user-written file
        let _parsed: Config = if self.toml {
            toml::from_str(content)?
        } else {
            serde_yaml::from_str(content)?
        };

        std::fs::write(&config_path, content)?;

        match cli.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "created": config_path.to_string_lossy(),
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Text => {
                if !cli.quiet {
                    output::success(&format!(
                        "Created configuration at {}",
                        output::path_style().apply_to(config_path.display())
                    ));
                    println!();
                    println!("Next steps:");
                    println!("  1. Set github.repository in {}", config_path.display());
                    println!("  2. Run {} to verify your setup", style("chronicle validate").cyan());
                    println!(
                        "  3. Run {} to curate your next release",
                        style("chronicle generate <VERSION>").cyan()
                    );
                }
            }
        }

        Ok(())
    }
}
