use crate::core::beans::count_label;
use crate::core::minimum::min;
use crate::core::patterns::{chessboard, fizzbuzz, triangle};
use crate::core::prompted::min_prompted;
use crate::domain::model::{Exercise, ExerciseReport};
use crate::domain::ports::NumberSource;
use crate::utils::error::Result;

pub struct ExerciseRunner<N: NumberSource> {
    source: N,
}

impl<N: NumberSource> ExerciseRunner<N> {
    pub fn new(source: N) -> Self {
        Self { source }
    }

    pub fn run(&mut self, exercise: &Exercise) -> Result<ExerciseReport> {
        tracing::info!("Running exercise: {}", exercise.name());
        tracing::debug!("Exercise parameters: {:?}", exercise);

        let lines = match exercise {
            Exercise::Triangle { rows } => triangle(*rows),
            Exercise::FizzBuzz { limit } => fizzbuzz(*limit),
            Exercise::Chessboard { size } => chessboard(*size),
            Exercise::Minimum { a, b } => vec![min(*a, *b).to_string()],
            Exercise::PromptedMinimum => vec![min_prompted(&mut self.source)?.to_string()],
            Exercise::CountBeans { items, label } => {
                vec![count_label(items, label).to_string()]
            }
        };

        tracing::info!(
            "Finished exercise: {} ({} lines)",
            exercise.name(),
            lines.len()
        );
        Ok(ExerciseReport::new(exercise, lines))
    }

    pub fn into_source(self) -> N {
        self.source
    }
}
