use crate::config::GenerationConfig;
use crate::error::{Error, Result};

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const NUMBERS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";
pub const SIMILAR: &str = "il1Lo0O";

/// Characters eligible for selection in one password generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet(Vec<u8>);

impl Alphabet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn contains(&self, ch: u8) -> bool {
        self.0.contains(&ch)
    }
}

/// Concatenates enabled classes in uppercase, lowercase, numbers, symbols order,
/// then strips the visually similar set when requested.
pub fn build_alphabet(config: &GenerationConfig) -> Result<Alphabet> {
    let classes = [
        (config.use_uppercase, UPPERCASE),
        (config.use_lowercase, LOWERCASE),
        (config.use_numbers, NUMBERS),
        (config.use_symbols, SYMBOLS),
    ];

    let mut chars: Vec<u8> = classes
        .iter()
        .filter(|(enabled, _)| *enabled)
        .flat_map(|(_, class)| class.bytes())
        .collect();

    if config.exclude_similar {
        chars.retain(|c| !SIMILAR.as_bytes().contains(c));
    }

    if chars.is_empty() {
        return Err(Error::EmptyAlphabet);
    }

    Ok(Alphabet(chars))
}
