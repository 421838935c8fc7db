use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "exercise", rename_all = "snake_case")]
pub enum Exercise {
    Triangle { rows: usize },
    FizzBuzz { limit: u32 },
    Chessboard { size: usize },
    Minimum { a: i64, b: i64 },
    PromptedMinimum,
    CountBeans { items: Vec<String>, label: String },
}

impl Exercise {
    pub fn name(&self) -> &'static str {
        match self {
            Exercise::Triangle { .. } => "triangle",
            Exercise::FizzBuzz { .. } => "fizzbuzz",
            Exercise::Chessboard { .. } => "chessboard",
            Exercise::Minimum { .. } => "min",
            Exercise::PromptedMinimum => "min-prompted",
            Exercise::CountBeans { .. } => "count-beans",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseReport {
    pub exercise: String,
    pub lines: Vec<String>,
}

impl ExerciseReport {
    pub fn new(exercise: &Exercise, lines: Vec<String>) -> Self {
        Self {
            exercise: exercise.name().to_string(),
            lines,
        }
    }

    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn to_json(&self) -> crate::utils::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn render(&self, format: OutputFormat) -> crate::utils::error::Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Json => self.to_json(),
        }
    }
}
