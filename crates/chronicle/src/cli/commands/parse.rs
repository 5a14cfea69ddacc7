//! Parse command

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use chronicle_notes::SectionParser;

use super::{load_cli_config, read_input};
use crate::cli::{output, Cli, OutputFormat};

/// Print the sections found in a release body
#[derive(Debug, Args)]
pub struct ParseCommand {
    /// Release body to parse ('-' for stdin)
    #[arg(short, long, value_name = "FILE", default_value = "-")]
    pub input: PathBuf,
}

impl ParseCommand {
    /// Execute the parse command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(input = %self.input.display(), "executing parse command");
        let (config, _) = load_cli_config(cli)?;

        let body = read_input(&self.input)?;
        let sections = SectionParser::from_config(&config.notes).parse(&body);

        match cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&sections)?);
            }
            OutputFormat::Text => {
                if !cli.quiet {
                    eprintln!("{}", output::header(&format!("{} section(s)", sections.len())));
                    for section in &sections {
                        let status = if config.notes.is_excluded(&section.title) {
                            "excluded"
                        } else if config.notes.is_dependencies_section(&section.title) {
                            "dependencies"
                        } else {
                            "kept"
                        };
                        eprintln!(
                            "{}",
                            output::key_value(
                                &section.title,
                                &format!("{} item(s), {}", section.items.len(), status)
                            )
                        );
                    }
                    eprintln!();
                }
                print!("{}", sections.to_markdown());
            }
        }

        Ok(())
    }
}
