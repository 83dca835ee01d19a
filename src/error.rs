use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("No character sets selected; enable at least one of uppercase, lowercase, numbers or symbols")]
    EmptyAlphabet,

    #[error("Password length too short ({length} chars, minimum is {minimum})")]
    LengthTooShort { length: usize, minimum: usize },

    #[error("Length too long ({length} chars, maximum is {maximum})")]
    LengthTooLong { length: usize, maximum: usize },

    #[error("Too many syllables ({count}, maximum is {maximum})")]
    TooManySyllables { count: usize, maximum: usize },

    #[error("Breach check unavailable: {0}")]
    BreachCheckUnavailable(String),

    #[error("Failed to seed random source: {0}")]
    Entropy(String),
}

pub type Result<T> = std::result::Result<T, Error>;
