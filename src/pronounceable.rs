use crate::config::{MAX_PASSWORD_LENGTH, MAX_SYLLABLE_COUNT};
use crate::generator::capitalize_first;
use crate::rng::RandomSource;
use zeroize::Zeroizing;

pub const CONSONANTS: &[u8] = b"bcdfghjklmnpqrstvwxyz";
pub const VOWELS: &[u8] = b"aeiou";

/// Consonant/vowel templates, one picked uniformly per syllable.
const TEMPLATES: [&[u8]; 5] = [b"cv", b"vc", b"cvc", b"vcc", b"ccv"];

/// One in five syllables that open on a consonant get an extra leading one.
const DOUBLE_CONSONANT_ODDS: usize = 5;

fn consonant<R: RandomSource>(rng: &mut R) -> char {
    *rng.pick(CONSONANTS) as char
}

fn vowel<R: RandomSource>(rng: &mut R) -> char {
    *rng.pick(VOWELS) as char
}

fn syllable<R: RandomSource>(rng: &mut R) -> String {
    let template = rng.pick(&TEMPLATES);
    let mut syllable = String::with_capacity(template.len() + 1);

    for &slot in template.iter() {
        match slot {
            b'c' => {
                if syllable.is_empty() && rng.below(DOUBLE_CONSONANT_ODDS) == 0 {
                    syllable.push(consonant(rng));
                }
                syllable.push(consonant(rng));
            }
            _ => syllable.push(vowel(rng)),
        }
    }

    syllable
}

/// Builds `syllable_count` hyphen-joined syllables, pads or truncates the result
/// to `length` characters (hyphens included), capitalizes each segment and
/// appends one digit. The returned string is therefore `length + 1` long.
///
/// `length` and `syllable_count` are capped at `MAX_PASSWORD_LENGTH` and
/// `MAX_SYLLABLE_COUNT`; `generate_batch` rejects larger values instead.
pub fn generate_pronounceable<R: RandomSource>(
    length: usize,
    syllable_count: usize,
    rng: &mut R,
) -> Zeroizing<String> {
    let length = length.min(MAX_PASSWORD_LENGTH);
    let syllable_count = syllable_count.min(MAX_SYLLABLE_COUNT);

    let syllables: Vec<Zeroizing<String>> = (0..syllable_count)
        .map(|_| Zeroizing::new(syllable(rng)))
        .collect();

    let mut joined = Zeroizing::new(
        syllables
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join("-"),
    );

    while joined.len() < length {
        let next = if joined.ends_with('-') || rng.below(2) == 0 {
            consonant(rng)
        } else {
            vowel(rng)
        };
        joined.push(next);
    }

    if joined.len() > length {
        joined.truncate(length);
        if joined.ends_with('-') {
            joined.pop();
            joined.push(consonant(rng));
        }
    }

    let mut password = Zeroizing::new(String::with_capacity(length + 1));
    for (i, segment) in joined.split('-').enumerate() {
        if i > 0 {
            password.push('-');
        }
        let mut segment = Zeroizing::new(segment.to_string());
        capitalize_first(&mut segment);
        password.push_str(&segment);
    }

    let digit = rng.below(10);
    password.push(char::from(b'0' + digit as u8));

    log::debug!(
        "Generated pronounceable password from {} syllables",
        syllable_count
    );

    password
}
