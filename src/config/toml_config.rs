use crate::core::beans::BEAN_LABEL;
use crate::core::patterns::{
    DEFAULT_CHESSBOARD_SIZE, DEFAULT_FIZZBUZZ_LIMIT, DEFAULT_TRIANGLE_ROWS,
};
use crate::utils::error::{DrillError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MAX_TRIANGLE_ROWS: usize = 1000;
pub const MAX_FIZZBUZZ_LIMIT: u32 = 100_000;
pub const MAX_CHESSBOARD_SIZE: usize = 1000;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub patterns: PatternsConfig,
    pub beans: BeansConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternsConfig {
    pub triangle_rows: usize,
    pub fizzbuzz_limit: u32,
    pub chessboard_size: usize,
}

impl Default for PatternsConfig {
    fn default() -> Self {
        Self {
            triangle_rows: DEFAULT_TRIANGLE_ROWS,
            fizzbuzz_limit: DEFAULT_FIZZBUZZ_LIMIT,
            chessboard_size: DEFAULT_CHESSBOARD_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeansConfig {
    pub label: String,
}

impl Default for BeansConfig {
    fn default() -> Self {
        Self {
            label: BEAN_LABEL.to_string(),
        }
    }
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DrillError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DrillError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DrillError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_range(
            "patterns.triangle_rows",
            self.patterns.triangle_rows,
            1,
            MAX_TRIANGLE_ROWS,
        )?;
        validate_range(
            "patterns.fizzbuzz_limit",
            self.patterns.fizzbuzz_limit,
            1,
            MAX_FIZZBUZZ_LIMIT,
        )?;
        validate_range(
            "patterns.chessboard_size",
            self.patterns.chessboard_size,
            1,
            MAX_CHESSBOARD_SIZE,
        )?;
        validate_non_empty_string("beans.label", &self.beans.label)?;
        Ok(())
    }
}
