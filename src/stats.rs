use crate::breach::BreachStatus;
use crate::generator::GenerationMode;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub passwords_generated: u64,
    pub passphrases_generated: u64,
    pub pronounceable_generated: u64,
    pub strength_checks: u64,
    pub breach_checks: u64,
    pub breaches_found: u64,
    pub breach_checks_failed: u64,
    pub last_generated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    pub total_generated: u64,
    pub strength_checks: u64,
    pub breach_checks: u64,
    pub breaches_found: u64,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_generated(&mut self, mode: GenerationMode) {
        match mode {
            GenerationMode::Password => self.passwords_generated += 1,
            GenerationMode::Passphrase => self.passphrases_generated += 1,
            GenerationMode::Pronounceable { .. } => self.pronounceable_generated += 1,
        }
        self.last_generated = Some(Utc::now());
    }

    pub fn record_strength_check(&mut self) {
        self.strength_checks += 1;
    }

    pub fn record_breach_check(&mut self, status: BreachStatus) {
        self.breach_checks += 1;
        match status {
            BreachStatus::Found(_) => self.breaches_found += 1,
            BreachStatus::LookupFailed => self.breach_checks_failed += 1,
            BreachStatus::NotFound => {}
        }
    }

    pub fn summary(&self) -> StatsSummary {
        StatsSummary {
            total_generated: self.passwords_generated
                + self.passphrases_generated
                + self.pronounceable_generated,
            strength_checks: self.strength_checks,
            breach_checks: self.breach_checks,
            breaches_found: self.breaches_found,
        }
    }

    pub fn export(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_generated_by_mode() {
        let mut stats = Stats::new();
        stats.record_generated(GenerationMode::Password);
        stats.record_generated(GenerationMode::Password);
        stats.record_generated(GenerationMode::Passphrase);
        stats.record_generated(GenerationMode::Pronounceable { syllables: 3 });

        assert_eq!(stats.passwords_generated, 2);
        assert_eq!(stats.passphrases_generated, 1);
        assert_eq!(stats.pronounceable_generated, 1);
        assert!(stats.last_generated.is_some());
        assert_eq!(stats.summary().total_generated, 4);
    }

    #[test]
    fn test_breach_outcomes_counted_separately() {
        let mut stats = Stats::new();
        stats.record_breach_check(BreachStatus::Found(12));
        stats.record_breach_check(BreachStatus::NotFound);
        stats.record_breach_check(BreachStatus::LookupFailed);

        assert_eq!(stats.breach_checks, 3);
        assert_eq!(stats.breaches_found, 1);
        assert_eq!(stats.breach_checks_failed, 1);
    }

    #[test]
    fn test_reset() {
        let mut stats = Stats::new();
        stats.record_strength_check();
        stats.record_generated(GenerationMode::Passphrase);
        stats.reset();

        assert_eq!(stats, Stats::default());
    }

    #[test]
    fn test_export_camel_case() {
        let mut stats = Stats::new();
        stats.record_strength_check();

        let json: serde_json::Value = serde_json::from_str(&stats.export().unwrap()).unwrap();
        assert_eq!(json["strengthChecks"], 1);
        assert_eq!(json["passwordsGenerated"], 0);
        assert!(json["lastGenerated"].is_null());
    }
}
