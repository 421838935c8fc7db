pub mod beans;
pub mod minimum;
pub mod patterns;
pub mod prompted;
pub mod runner;

pub use crate::domain::model::{Exercise, ExerciseReport};
pub use crate::domain::ports::NumberSource;
pub use crate::utils::error::Result;
