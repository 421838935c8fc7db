pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::console::ConsoleSource;
pub use config::TomlConfig;
pub use core::beans::{count_beans, count_label};
pub use core::minimum::min;
pub use core::prompted::min_prompted;
pub use core::runner::ExerciseRunner;
pub use domain::model::{Exercise, ExerciseReport, OutputFormat};
pub use domain::ports::NumberSource;
pub use utils::error::{DrillError, Result};
