pub mod analysis;
pub mod breach;
pub mod charset;
pub mod config;
pub mod error;
pub mod generator;
pub mod history;
pub mod pronounceable;
pub mod rng;
pub mod stats;
pub mod strength;
pub mod wordlist;

pub use analysis::{analyze_weakness, recommendations, Assessment, WeaknessReport};
pub use breach::{check_password, BreachStatus, HibpClient, RangeSource};
pub use charset::{build_alphabet, Alphabet};
pub use config::GenerationConfig;
pub use error::{Error, Result};
pub use generator::{generate_batch, generate_passphrase, generate_password, GenerationMode};
pub use history::History;
pub use pronounceable::generate_pronounceable;
pub use rng::{ChaChaSource, RandomSource};
pub use stats::Stats;
pub use strength::{score_strength, StrengthLabel, StrengthResult};
pub use wordlist::{get_wordlist, wordlist_size};
