use crate::utils::error::Result;

/// Supplies whole numbers from somewhere outside the program, typically a
/// person answering prompts.
pub trait NumberSource {
    fn read_number(&mut self, prompt: &str) -> Result<i64>;
}

impl<N: NumberSource + ?Sized> NumberSource for &mut N {
    fn read_number(&mut self, prompt: &str) -> Result<i64> {
        (**self).read_number(prompt)
    }
}
