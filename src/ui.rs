use anyhow::{Context, Result};
use console::{Style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use rpassword::read_password;
use std::io::{self, Write};
use std::time::{Duration, Instant};
use unicode_normalization::UnicodeNormalization;
use vaultpass::{Assessment, BreachStatus, StrengthLabel};
use zeroize::Zeroizing;

pub const MAX_CHECK_BYTES: usize = 1024 * 1024;

pub struct DisplayOptions {
    pub unicode_support: bool,
    pub color_support: bool,
    pub quiet: bool,
}

/// What the generator was asked for, shown under "Settings".
pub struct SettingsInfo {
    pub mode: &'static str,
    pub source: String,
    pub target: String,
}

pub fn detect_unicode_support() -> bool {
    supports_unicode::on(supports_unicode::Stream::Stdout)
}

pub fn detect_color_support() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

pub fn get_status_symbols(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support {
        ("✓", "!")
    } else {
        ("+", "!")
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

fn validate_control_characters(s: &str, input_name: &str) -> Result<Zeroizing<String>> {
    let control_chars: Vec<(usize, char)> = s
        .chars()
        .enumerate()
        .filter(|(_, c)| c.is_control())
        .collect();

    if !control_chars.is_empty() {
        let term = Term::stderr();

        let warning_msg = format!(
            "WARNING: {} contains {} control character(s) at position(s): {}",
            input_name,
            control_chars.len(),
            control_chars
                .iter()
                .map(|(pos, _)| pos.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );

        term.write_line(&warning_msg)?;
        term.write_str("Continue anyway? [y/N]: ")?;
        term.flush()?;

        let mut response = String::new();
        io::stdin().read_line(&mut response)?;
        let response = response.trim().to_lowercase();

        term.clear_last_lines(2)?;

        if response != "y" && response != "yes" {
            anyhow::bail!("Aborted");
        }
    }

    Ok(Zeroizing::new(s.to_string()))
}

fn normalize_and_validate(s: &str, input_name: &str) -> Result<Zeroizing<String>> {
    let trimmed = s.trim();
    let normalized = Zeroizing::new(trimmed.nfc().collect::<String>());
    validate_control_characters(&normalized, input_name)
}

/// Reads the password to assess without echoing it.
pub fn prompt_password() -> Result<Zeroizing<String>> {
    print!("In [0]: ");
    io::stdout().flush()?;

    let password = Zeroizing::new(read_password().context("Failed to read password")?);

    let normalized = normalize_and_validate(&password, "Password")?;
    if normalized.is_empty() {
        anyhow::bail!("Password cannot be empty");
    }

    if normalized.len() > MAX_CHECK_BYTES {
        anyhow::bail!(
            "Password too long ({} bytes, maximum is {})",
            normalized.len(),
            MAX_CHECK_BYTES
        );
    }

    Ok(normalized)
}

pub fn show_progress<F, T>(unicode_support: bool, message: &'static str, f: F) -> Result<(T, Duration)>
where
    F: FnOnce() -> Result<T>,
{
    let term = Term::stderr();
    term.hide_cursor().ok();

    let pb = ProgressBar::new_spinner();

    if unicode_support {
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✓"]),
        );
    } else {
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars("-\\|/-"),
        );
    }

    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(80));

    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed();

    pb.finish_and_clear();
    term.show_cursor().ok();

    result.map(|r| (r, elapsed))
}

fn strength_style(label: StrengthLabel, options: &DisplayOptions) -> Style {
    if !options.color_support {
        return Style::new();
    }

    match label {
        StrengthLabel::Weak => Style::new().red(),
        StrengthLabel::Fair | StrengthLabel::Good => Style::new().yellow(),
        StrengthLabel::Strong | StrengthLabel::Secure => Style::new().green(),
    }
}

fn flag_style(ok: bool, options: &DisplayOptions) -> Style {
    match (options.color_support, ok) {
        (false, _) => Style::new(),
        (true, true) => Style::new().green(),
        (true, false) => Style::new().yellow(),
    }
}

pub fn display_outputs(
    outputs: &[Zeroizing<String>],
    settings: &SettingsInfo,
    assessments: &[Assessment],
    options: &DisplayOptions,
) {
    for (i, output) in outputs.iter().enumerate() {
        if options.quiet {
            println!("{}", &**output);
        } else {
            println!("Out[{}]:\n{}", i, &**output);
        }
    }

    if options.quiet {
        return;
    }

    println!();
    display_settings(settings, outputs.len());

    for (i, (output, assessment)) in outputs.iter().zip(assessments).enumerate() {
        let title = if outputs.len() == 1 {
            "Stats:".to_string()
        } else {
            format!("Stats [{}]:", i)
        };
        display_assessment(&title, output.chars().count(), assessment, options);
    }
}

fn display_settings(settings: &SettingsInfo, count: usize) {
    println!("Settings:");
    println!("  ├─ Mode       {}", settings.mode);
    println!("  ├─ Source     {}", settings.source);
    println!("  ├─ Target     {}", settings.target);
    println!("  ├─ Keystream  ChaCha20 (256-bit, OS seeded)");
    println!("  └─ Batch      {} {}", count, plural(count, "output", "outputs"));
    println!();
}

pub fn display_assessment(
    title: &str,
    length: usize,
    assessment: &Assessment,
    options: &DisplayOptions,
) {
    let (check_ok, check_warn) = get_status_symbols(options.unicode_support);

    let strength = &assessment.strength;
    let entropy_ok = strength.label >= StrengthLabel::Strong;
    let entropy_style = strength_style(strength.label, options);
    let entropy_icon = if entropy_ok { check_ok } else { check_warn };

    let weakness = &assessment.weakness;
    let mut patterns = Vec::new();
    if weakness.is_sequential {
        patterns.push("sequential");
    }
    if weakness.is_repeated {
        patterns.push("repeated");
    }
    if weakness.is_common {
        patterns.push("common");
    }
    let patterns_ok = patterns.is_empty();
    let patterns_style = flag_style(patterns_ok, options);

    println!("{}", title);

    println!(
        "  ├─ Entropy    {} {} bits ({})",
        entropy_style.apply_to(format!("[{}]", entropy_icon)),
        entropy_style.apply_to(strength.entropy_bits),
        entropy_style.apply_to(strength.label)
    );

    println!("  ├─ Length     {} {}", length, plural(length, "char", "chars"));

    let pattern_text = if patterns_ok {
        "none".to_string()
    } else {
        patterns.join(", ")
    };
    let breach_branch = if assessment.breach.is_some() { "├─" } else { "└─" };
    println!(
        "  {} Patterns   {} {}",
        breach_branch,
        patterns_style.apply_to(format!(
            "[{}]",
            if patterns_ok { check_ok } else { check_warn }
        )),
        patterns_style.apply_to(pattern_text)
    );

    if let Some(status) = assessment.breach {
        let (ok, text) = match status {
            BreachStatus::Found(count) => (
                false,
                format!("seen {} {}", count, if count == 1 { "time" } else { "times" }),
            ),
            BreachStatus::NotFound => (true, "not found".to_string()),
            BreachStatus::LookupFailed => (false, "unknown (lookup failed)".to_string()),
        };
        let style = flag_style(ok, options);
        println!(
            "  └─ Breach     {} {}",
            style.apply_to(format!("[{}]", if ok { check_ok } else { check_warn })),
            style.apply_to(text)
        );
    }

    if !assessment.recommendations.is_empty() {
        println!();
        println!("Recommendations:");
        let last = assessment.recommendations.len() - 1;
        for (i, hint) in assessment.recommendations.iter().enumerate() {
            let prefix = if i == last { "└─" } else { "├─" };
            println!("  {} {}", prefix, hint);
        }
    }

    println!(
        "\n{} Security: {}\n",
        entropy_style.apply_to(format!("[{}]", entropy_icon)),
        entropy_style.apply_to(strength.label)
    );
}
