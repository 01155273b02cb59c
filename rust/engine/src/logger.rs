use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::player::Action;
use crate::table::Street;

/// One applied action.
/// `action` is what the seat asked for after validation; `paid` is what actually moved.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub seat: usize,
    pub street: Street,
    pub action: Action,
    /// Chips moved from the stack into the pot
    #[serde(default)]
    pub paid: u32,
}

/// Complete record of a hand, one JSON object per line in a history file.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// YYYYMMDD-NNNNNN; assigned by [`HandLogger`] when left empty
    pub hand_id: String,
    /// Shuffle seed, when the deck was seeded
    pub seed: Option<u64>,
    pub button: usize,
    pub actions: Vec<ActionRecord>,
    pub board: Vec<Card>,
    /// Human readable summary of the result
    pub result: Option<String>,
    /// RFC3339 timestamp, injected on write when missing
    #[serde(default)]
    pub ts: Option<String>,
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
    #[serde(default)]
    pub showdown: Option<ShowdownInfo>,
    /// `(seat, chips)` credited at payout
    #[serde(default)]
    pub payouts: Vec<(usize, u32)>,
}

/// Which seats won at showdown.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownInfo {
    pub winners: Vec<usize>,
    /// e.g. "split pot", "Flush (13)"
    #[serde(default)]
    pub notes: Option<String>,
}

pub fn format_hand_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends [`HandRecord`]s to a JSONL file.
pub struct HandLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl HandLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// Logger without a file and with a fixed date, for id sequencing in tests.
    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_hand_id(&self.date, self.seq)
    }

    /// Writes one record followed by a single LF. Returns the id it was written under.
    pub fn write(&mut self, record: &HandRecord) -> std::io::Result<String> {
        let mut rec = record.clone();
        if rec.hand_id.is_empty() {
            rec.hand_id = self.next_id();
        }
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(rec.hand_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential() {
        let mut l = HandLogger::with_seq_for_test("20250102");
        assert_eq!(l.next_id(), "20250102-000001");
        assert_eq!(l.next_id(), "20250102-000002");
    }
}
