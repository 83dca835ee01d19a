use crate::analysis::Assessment;
use crate::config::MAX_HISTORY;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::VecDeque;
use std::fmt;
use uuid::Uuid;
use zeroize::{Zeroize, ZeroizeOnDrop};

const EXPORT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Clone, Serialize, Zeroize, ZeroizeOnDrop)]
pub struct HistoryEntry {
    #[zeroize(skip)]
    pub id: Uuid,
    pub value: String,
    #[zeroize(skip)]
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[zeroize(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessment: Option<Assessment>,
}

impl fmt::Debug for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistoryEntry")
            .field("id", &self.id)
            .field("value", &"[redacted]")
            .field("timestamp", &self.timestamp)
            .field("note", &self.note)
            .field("assessment", &self.assessment)
            .finish()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HistoryExport<'a> {
    version: &'a str,
    export_date: DateTime<Utc>,
    passwords: &'a VecDeque<HistoryEntry>,
}

/// Newest-first record of generated secrets for the current session.
#[derive(Debug, Default)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `value` at the front, dropping the oldest entry past the cap.
    pub fn add(&mut self, value: &str, note: Option<String>) -> Uuid {
        let id = Uuid::new_v4();
        self.entries.push_front(HistoryEntry {
            id,
            value: value.to_string(),
            timestamp: Utc::now(),
            note,
            assessment: None,
        });
        self.entries.truncate(MAX_HISTORY);
        id
    }

    pub fn update_note(&mut self, id: Uuid, note: &str) -> bool {
        match self.entries.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => {
                entry.note = Some(note.to_string());
                true
            }
            None => false,
        }
    }

    pub fn attach_assessment(&mut self, id: Uuid, assessment: Assessment) -> bool {
        match self.entries.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => {
                entry.assessment = Some(assessment);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn export(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&HistoryExport {
            version: EXPORT_VERSION,
            export_date: Utc::now(),
            passwords: &self.entries,
        })
    }
}
