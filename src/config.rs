use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

pub const MIN_PASSWORD_LENGTH: usize = 4;
pub const MAX_PASSWORD_LENGTH: usize = 1024;
pub const DEFAULT_PASSWORD_LENGTH: usize = 16;

pub const CHARS_PER_WORD: usize = 6;
pub const MIN_PASSPHRASE_WORDS: usize = 3;
pub const MAX_PASSPHRASE_WORDS: usize = 8;

pub const DEFAULT_SYLLABLE_COUNT: usize = 3;
pub const MAX_SYLLABLE_COUNT: usize = 256;

pub const MAX_HISTORY: usize = 50;

pub const HIBP_RANGE_URL: &str = "https://api.pwnedpasswords.com/range/";

/// Options for one generation call. Passphrases only look at `length`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub length: usize,
    pub use_uppercase: bool,
    pub use_lowercase: bool,
    pub use_numbers: bool,
    pub use_symbols: bool,
    pub exclude_similar: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_PASSWORD_LENGTH,
            use_uppercase: true,
            use_lowercase: true,
            use_numbers: true,
            use_symbols: true,
            exclude_similar: false,
        }
    }
}

impl GenerationConfig {
    pub fn has_any_class(&self) -> bool {
        self.use_uppercase || self.use_lowercase || self.use_numbers || self.use_symbols
    }

    /// Upper bound shared by every generation mode.
    pub fn validate_bounds(&self) -> Result<()> {
        if self.length > MAX_PASSWORD_LENGTH {
            return Err(Error::LengthTooLong {
                length: self.length,
                maximum: MAX_PASSWORD_LENGTH,
            });
        }

        Ok(())
    }

    /// Checks the fixed-alphabet policy: length bounds first, then class selection.
    pub fn validate(&self) -> Result<()> {
        self.validate_bounds()?;

        if self.length < MIN_PASSWORD_LENGTH {
            return Err(Error::LengthTooShort {
                length: self.length,
                minimum: MIN_PASSWORD_LENGTH,
            });
        }

        if !self.has_any_class() {
            return Err(Error::EmptyAlphabet);
        }

        Ok(())
    }

    pub fn passphrase_word_count(&self) -> usize {
        (self.length / CHARS_PER_WORD).clamp(MIN_PASSPHRASE_WORDS, MAX_PASSPHRASE_WORDS)
    }
}
