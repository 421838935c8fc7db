use crate::config::toml_config::{
    TomlConfig, MAX_CHESSBOARD_SIZE, MAX_FIZZBUZZ_LIMIT, MAX_TRIANGLE_ROWS,
};
use crate::domain::model::{Exercise, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "small-drills")]
#[command(about = "Small programming drills: patterns, minimum and bean counting")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    /// Optional TOML file with defaults for the drills
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Subcommand)]
pub enum Command {
    /// Print a triangle of '#' characters
    Triangle {
        #[arg(long)]
        rows: Option<usize>,
    },
    /// Print FizzBuzz from 1 up to the limit
    Fizzbuzz {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Print a chessboard pattern
    Chessboard {
        #[arg(long)]
        size: Option<usize>,
    },
    /// Print the smaller of two integers
    Min {
        #[arg(allow_negative_numbers = true)]
        a: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
    },
    /// Ask for two integers and print the smaller
    MinPrompted,
    /// Count how many items equal the label
    CountBeans {
        #[arg(long)]
        label: Option<String>,
        items: Vec<String>,
    },
}

impl CliConfig {
    pub fn load_file_config(&self) -> Result<TomlConfig> {
        match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                TomlConfig::from_file(path)
            }
            None => Ok(TomlConfig::default()),
        }
    }

    /// Applies command-line overrides on top of `file_config` and builds the
    /// exercise to run. Only the settings the chosen drill reads are validated.
    pub fn resolve(&self, file_config: &TomlConfig) -> Result<Exercise> {
        let patterns = &file_config.patterns;
        let exercise = match &self.command {
            Command::Triangle { rows } => {
                let rows = rows.unwrap_or(patterns.triangle_rows);
                validate_range("patterns.triangle_rows", rows, 1, MAX_TRIANGLE_ROWS)?;
                Exercise::Triangle { rows }
            }
            Command::Fizzbuzz { limit } => {
                let limit = limit.unwrap_or(patterns.fizzbuzz_limit);
                validate_range("patterns.fizzbuzz_limit", limit, 1, MAX_FIZZBUZZ_LIMIT)?;
                Exercise::FizzBuzz { limit }
            }
            Command::Chessboard { size } => {
                let size = size.unwrap_or(patterns.chessboard_size);
                validate_range("patterns.chessboard_size", size, 1, MAX_CHESSBOARD_SIZE)?;
                Exercise::Chessboard { size }
            }
            Command::Min { a, b } => Exercise::Minimum { a: *a, b: *b },
            Command::MinPrompted => Exercise::PromptedMinimum,
            Command::CountBeans { label, items } => {
                let label = label.as_ref().unwrap_or(&file_config.beans.label);
                validate_non_empty_string("beans.label", label)?;
                Exercise::CountBeans {
                    items: items.clone(),
                    label: label.clone(),
                }
            }
        };
        Ok(exercise)
    }
}
