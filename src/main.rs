// SPDX-License-Identifier: PMPL-1.0-or-later

//! pseudoloc: generate pseudo-localized `.resx` resource files
//!
//! Reads string resources, rewrites culture-name entries to the pseudo-locale
//! and pseudo-translates everything else, then writes
//! `<name>.<pseudo-locale>.resx` next to each input.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use pseudoloc::config::Settings;
use pseudoloc::{i18n, logging, pipeline};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pseudoloc")]
#[command(version)]
#[command(about = "Generate pseudo-localized .resx resource files")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate pseudo-loc files for .resx files or directories
    Generate {
        /// Resource files or directories to search for .resx files
        #[arg(value_name = "INPUT", required = true)]
        inputs: Vec<PathBuf>,

        /// Write generated files here instead of next to their inputs
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Settings file (.json, .yaml or .yml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Pseudo-locale tag for file names and culture-name entries
        #[arg(short, long)]
        locale: Option<String>,

        /// Expansion padding ratio, e.g. 0.3 for 30% longer strings
        #[arg(long)]
        pad: Option<f64>,

        /// Wrap translated strings in [brackets]
        #[arg(long)]
        brackets: bool,

        /// Save the batch report (JSON, or YAML by extension)
        #[arg(long)]
        report: Option<PathBuf>,

        /// Suppress the summary table
        #[arg(short, long)]
        quiet: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print the pseudo-translation of a single string
    Pseudofy {
        #[arg(value_name = "TEXT")]
        text: String,

        /// Expansion padding ratio
        #[arg(long)]
        pad: Option<f64>,

        /// Wrap the result in [brackets]
        #[arg(long)]
        brackets: bool,
    },

    /// Report whether a value is a locale identifier
    Classify {
        #[arg(value_name = "VALUE")]
        value: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            inputs,
            output_dir,
            config,
            locale,
            pad,
            brackets,
            report,
            quiet,
            verbose,
        } => {
            logging::setup_logger(verbose, quiet);

            let mut settings = match config {
                Some(path) => Settings::load(&path)?,
                None => Settings::default(),
            };
            if let Some(locale) = locale {
                settings.pseudo_locale = locale;
            }
            if let Some(ratio) = pad {
                settings.expansion = ratio;
            }
            if brackets {
                settings.brackets = true;
            }
            if output_dir.is_some() {
                settings.output_dir = output_dir;
            }

            let batch = pipeline::run(&inputs, &settings)?;
            pipeline::print_summary(&batch, quiet);

            if let Some(report_path) = report {
                pipeline::write_report(&batch, &report_path)?;
                if !quiet {
                    println!("Report saved to: {}", report_path.display());
                }
            }

            if batch.has_failures() {
                return Err(anyhow!(
                    "{} of {} resource file(s) failed to convert",
                    batch.files_failed,
                    batch.files_seen
                ));
            }
        }

        Commands::Pseudofy {
            text,
            pad,
            brackets,
        } => {
            let settings = Settings {
                expansion: pad.unwrap_or(0.0),
                brackets,
                ..Settings::default()
            };
            settings.validate()?;
            println!("{}", settings.pseudofier().pseudofy(&text));
        }

        Commands::Classify { value } => match i18n::parse_locale(&value) {
            Some(langid) => {
                let language = langid.language.to_string();
                match i18n::language_name(&language) {
                    Some(name) => println!("locale: {} ({})", langid, name),
                    None => println!("locale: {}", langid),
                }
            }
            None => println!("text: {:?} is not a locale identifier", value),
        },
    }

    Ok(())
}
