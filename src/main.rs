mod ui;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use vaultpass::config::{
    DEFAULT_PASSWORD_LENGTH, DEFAULT_SYLLABLE_COUNT, HIBP_RANGE_URL, MAX_PASSWORD_LENGTH,
    MAX_SYLLABLE_COUNT,
};
use vaultpass::{
    build_alphabet, check_password, generate_batch, wordlist_size, Assessment, ChaChaSource,
    GenerationConfig, GenerationMode, HibpClient, History, Stats,
};

#[derive(Parser)]
#[command(
    name = "vaultpass",
    version,
    author,
    about = "Password, passphrase and pronounceable secret generator with strength and breach checks"
)]
struct Cli {
    #[arg(short, long, value_enum, default_value = "password")]
    mode: Mode,

    /// Target length (word count for passphrases is length / 6, clamped to 3..=8)
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_PASSWORD_LENGTH as u16,
        value_parser = clap::value_parser!(u16).range(1..=MAX_PASSWORD_LENGTH as i64)
    )]
    length: u16,

    #[arg(long)]
    no_uppercase: bool,

    #[arg(long)]
    no_lowercase: bool,

    #[arg(long)]
    no_numbers: bool,

    #[arg(long)]
    no_symbols: bool,

    /// Drop visually similar characters (i, l, 1, L, o, 0, O)
    #[arg(short = 'x', long)]
    exclude_similar: bool,

    #[arg(
        short,
        long,
        default_value_t = DEFAULT_SYLLABLE_COUNT as u16,
        value_parser = clap::value_parser!(u16).range(1..=MAX_SYLLABLE_COUNT as i64)
    )]
    syllables: u16,

    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=100))]
    count: u16,

    /// Look each result up in the breach corpus (only a 5-char hash prefix is sent)
    #[arg(short, long)]
    breach: bool,

    #[arg(long, env = "VAULTPASS_HIBP_URL", default_value = HIBP_RANGE_URL)]
    hibp_url: String,

    /// Print the session history, with each assessment, as JSON instead of the report
    #[arg(long)]
    json: bool,

    /// Print usage counters as JSON after the run
    #[arg(long)]
    stats: bool,

    #[arg(short, long)]
    quiet: bool,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
enum Mode {
    Password,
    Passphrase,
    Pronounceable,
    Check,
}

impl Cli {
    fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            length: usize::from(self.length),
            use_uppercase: !self.no_uppercase,
            use_lowercase: !self.no_lowercase,
            use_numbers: !self.no_numbers,
            use_symbols: !self.no_symbols,
            exclude_similar: self.exclude_similar,
        }
    }

    fn generation_mode(&self) -> Option<GenerationMode> {
        match self.mode {
            Mode::Password => Some(GenerationMode::Password),
            Mode::Passphrase => Some(GenerationMode::Passphrase),
            Mode::Pronounceable => Some(GenerationMode::Pronounceable {
                syllables: usize::from(self.syllables),
            }),
            Mode::Check => None,
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn settings_info(mode: GenerationMode, config: &GenerationConfig) -> Result<ui::SettingsInfo> {
    let info = match mode {
        GenerationMode::Password => {
            let alphabet = build_alphabet(config)?;
            ui::SettingsInfo {
                mode: "Password",
                source: format!("{} chars", alphabet.len()),
                target: format!("{} chars", config.length),
            }
        }
        GenerationMode::Passphrase => ui::SettingsInfo {
            mode: "Passphrase",
            source: format!("Wordlist ({} words)", wordlist_size()),
            target: format!("{} words", config.passphrase_word_count()),
        },
        GenerationMode::Pronounceable { syllables } => ui::SettingsInfo {
            mode: "Pronounceable",
            source: format!("{} syllables", syllables),
            target: format!("{} chars + digit", config.length),
        },
    };
    Ok(info)
}

fn assess(
    password: &str,
    breach_client: Option<&HibpClient>,
    options: &ui::DisplayOptions,
    stats: &mut Stats,
) -> Result<Assessment> {
    stats.record_strength_check();

    let breach = match breach_client {
        Some(client) => {
            let (status, elapsed) = ui::show_progress(
                options.unicode_support,
                "Checking breach corpus...",
                || Ok(check_password(password, client)),
            )?;
            log::debug!("Breach lookup took {:.1}s", elapsed.as_secs_f64());
            stats.record_breach_check(status);
            Some(status)
        }
        None => None,
    };

    Ok(Assessment::new(password, breach))
}

fn run_generate(
    cli: &Cli,
    mode: GenerationMode,
    options: &ui::DisplayOptions,
    stats: &mut Stats,
) -> Result<()> {
    let config = cli.generation_config();
    let mut rng = ChaChaSource::from_os().context("Failed to initialise random source")?;
    let outputs = generate_batch(mode, &config, usize::from(cli.count), &mut rng)?;

    let mut history = History::new();
    let mut ids = Vec::with_capacity(outputs.len());
    for output in &outputs {
        ids.push(history.add(output, None));
        stats.record_generated(mode);
    }

    let breach_client = if cli.breach {
        Some(HibpClient::new(cli.hibp_url.as_str())?)
    } else {
        None
    };

    let mut assessments = Vec::with_capacity(outputs.len());
    for output in &outputs {
        assessments.push(assess(output, breach_client.as_ref(), options, stats)?);
    }

    if cli.json {
        for (id, assessment) in ids.into_iter().zip(&assessments) {
            history.attach_assessment(id, assessment.clone());
        }
        println!("{}", history.export().context("Failed to export history")?);
    } else {
        let settings = settings_info(mode, &config)?;
        ui::display_outputs(&outputs, &settings, &assessments, options);
    }

    Ok(())
}

fn run_check(cli: &Cli, options: &ui::DisplayOptions, stats: &mut Stats) -> Result<()> {
    let password = ui::prompt_password()?;

    let breach_client = if cli.breach {
        Some(HibpClient::new(cli.hibp_url.as_str())?)
    } else {
        None
    };

    let assessment = assess(&password, breach_client.as_ref(), options, stats)?;
    println!();
    ui::display_assessment("Stats:", password.chars().count(), &assessment, options);

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = ui::DisplayOptions {
        unicode_support: ui::detect_unicode_support(),
        color_support: ui::detect_color_support(),
        quiet: cli.quiet,
    };

    let mut stats = Stats::new();

    match cli.generation_mode() {
        Some(mode) => run_generate(&cli, mode, &options, &mut stats)?,
        None => run_check(&cli, &options, &mut stats)?,
    }

    if cli.stats {
        println!("{}", stats.export().context("Failed to export stats")?);
    }

    Ok(())
}
