use crate::core::minimum::min;
use crate::domain::ports::NumberSource;
use crate::utils::error::{DrillError, Result};

pub const FIRST_PROMPT: &str = "Enter the first number:";
pub const SECOND_PROMPT: &str = "Enter the second number:";

/// Parses a base-10 integer, ignoring surrounding whitespace.
pub fn parse_number(raw: &str) -> Result<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DrillError::invalid_input(raw, "no number was entered"));
    }
    trimmed
        .parse::<i64>()
        .map_err(|e| DrillError::invalid_input(trimmed, e.to_string()))
}

pub fn min_prompted<N: NumberSource>(source: &mut N) -> Result<i64> {
    let a = source.read_number(FIRST_PROMPT)?;
    let b = source.read_number(SECOND_PROMPT)?;
    tracing::debug!("Read prompted values a={} b={}", a, b);
    Ok(min(a, b))
}
