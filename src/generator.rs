use crate::charset::build_alphabet;
use crate::config::{GenerationConfig, MAX_SYLLABLE_COUNT};
use crate::error::{Error, Result};
use crate::pronounceable::generate_pronounceable;
use crate::rng::RandomSource;
use crate::wordlist::get_wordlist;
use zeroize::Zeroizing;

const PASSPHRASE_NUMBER_RANGE: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    Password,
    Passphrase,
    Pronounceable { syllables: usize },
}

pub fn generate_password<R: RandomSource>(
    config: &GenerationConfig,
    rng: &mut R,
) -> Result<Zeroizing<String>> {
    config.validate()?;
    let alphabet = build_alphabet(config)?;
    let chars = alphabet.as_bytes();

    let mut password = Zeroizing::new(String::with_capacity(config.length));
    for _ in 0..config.length {
        password.push(*rng.pick(chars) as char);
    }

    log::debug!(
        "Generated password of {} chars over a {}-char alphabet",
        config.length,
        alphabet.len()
    );

    Ok(password)
}

/// Hyphen-joined words from the word list, one capitalized, with a trailing number
/// in `0..100`. Word count follows `config.length`; output length does not.
pub fn generate_passphrase<R: RandomSource>(
    config: &GenerationConfig,
    rng: &mut R,
) -> Zeroizing<String> {
    let wordlist = get_wordlist();
    let word_count = config.passphrase_word_count();

    let mut words: Vec<Zeroizing<String>> = (0..word_count)
        .map(|_| Zeroizing::new(rng.pick(wordlist).to_string()))
        .collect();

    let number = rng.below(PASSPHRASE_NUMBER_RANGE);
    let capitalize_index = rng.below(word_count);
    capitalize_first(&mut words[capitalize_index]);

    let mut passphrase = Zeroizing::new(String::new());
    for word in &words {
        passphrase.push_str(word);
        passphrase.push('-');
    }
    passphrase.push_str(&number.to_string());

    log::debug!("Generated passphrase of {} words", word_count);

    passphrase
}

/// Runs the selected generator `count` times. Every mode is bounds-checked and
/// password configs fully validated once, before any draw.
pub fn generate_batch<R: RandomSource>(
    mode: GenerationMode,
    config: &GenerationConfig,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Zeroizing<String>>> {
    match mode {
        GenerationMode::Password => config.validate()?,
        GenerationMode::Passphrase => config.validate_bounds()?,
        GenerationMode::Pronounceable { syllables } => {
            config.validate_bounds()?;
            if syllables > MAX_SYLLABLE_COUNT {
                return Err(Error::TooManySyllables {
                    count: syllables,
                    maximum: MAX_SYLLABLE_COUNT,
                });
            }
        }
    }

    let mut outputs = Vec::with_capacity(count);
    for _ in 0..count {
        let output = match mode {
            GenerationMode::Password => generate_password(config, rng)?,
            GenerationMode::Passphrase => generate_passphrase(config, rng),
            GenerationMode::Pronounceable { syllables } => {
                generate_pronounceable(config.length, syllables, rng)
            }
        };
        outputs.push(output);
    }

    Ok(outputs)
}

pub(crate) fn capitalize_first(segment: &mut String) {
    if let Some(first) = segment.chars().next() {
        let upper: String = first.to_uppercase().collect();
        segment.replace_range(..first.len_utf8(), &upper);
    }
}
