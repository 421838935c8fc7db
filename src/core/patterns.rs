use std::fmt;

pub const DEFAULT_TRIANGLE_ROWS: usize = 7;
pub const DEFAULT_FIZZBUZZ_LIMIT: u32 = 100;
pub const DEFAULT_CHESSBOARD_SIZE: usize = 8;

pub fn triangle(rows: usize) -> Vec<String> {
    (1..=rows).map(|width| "#".repeat(width)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FizzBuzz {
    Fizz,
    Buzz,
    FizzBuzz,
    Number(u32),
}

impl FizzBuzz {
    pub fn classify(n: u32) -> Self {
        match (n % 3, n % 5) {
            (0, 0) => FizzBuzz::FizzBuzz,
            (0, _) => FizzBuzz::Fizz,
            (_, 0) => FizzBuzz::Buzz,
            _ => FizzBuzz::Number(n),
        }
    }
}

impl fmt::Display for FizzBuzz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FizzBuzz::Fizz => f.write_str("Fizz"),
            FizzBuzz::Buzz => f.write_str("Buzz"),
            FizzBuzz::FizzBuzz => f.write_str("FizzBuzz"),
            FizzBuzz::Number(n) => write!(f, "{}", n),
        }
    }
}

pub fn fizzbuzz(limit: u32) -> Vec<String> {
    (1..=limit)
        .map(|n| FizzBuzz::classify(n).to_string())
        .collect()
}

/// Rows of alternating `#` and space; the top-left cell is `#`.
pub fn chessboard(size: usize) -> Vec<String> {
    (0..size)
        .map(|row| {
            (0..size)
                .map(|col| if (row + col) % 2 == 0 { '#' } else { ' ' })
                .collect::<String>()
        })
        .collect()
}
