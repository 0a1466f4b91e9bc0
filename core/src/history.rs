use alloc::string::String;
use alloc::vec::Vec;
use chrono::{DateTime, Utc};
use core::cmp::Reverse;
use serde::{Deserialize, Deserializer, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordResult {
    Won,
    /// Anything else found in storage, shown as-is rather than dropped.
    #[default]
    #[serde(other)]
    Unknown,
}

impl RecordResult {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Won => "Won",
            Self::Unknown => "?",
        }
    }
}

/// A finished round. The serialized field names are the ones already present in players' storage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    #[serde(rename = "startGameDate")]
    pub started_at: DateTime<Utc>,
    #[serde(rename = "endGameDate")]
    pub ended_at: DateTime<Utc>,
    #[serde(default)]
    pub result: RecordResult,
    #[serde(default)]
    pub shots: ShotCount,
    #[serde(default)]
    pub duration: String,
}

impl GameRecord {
    pub fn won(started_at: DateTime<Utc>, ended_at: DateTime<Utc>, shots: ShotCount) -> Self {
        Self {
            started_at,
            ended_at,
            result: RecordResult::Won,
            shots,
            duration: format_duration(ended_at, started_at),
        }
    }
}

/// Row order for the score table.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryOrder {
    /// Oldest round first.
    #[default]
    Recorded,
    /// Highest shot count first, ties keep their recorded order.
    MostShots,
}

/// Append-only log of won rounds, oldest first.
///
/// Decoding skips entries that are not records instead of failing, so one damaged row cannot take the rest of the
/// stored history down with it.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct History(Vec<GameRecord>);

impl<'de> Deserialize<'de> for History {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let entries = Vec::<serde_json::Value>::deserialize(deserializer)?;
        let records = entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match serde_json::from_value(entry) {
                Ok(record) => Some(record),
                Err(err) => {
                    log::warn!("skipping history entry {}: {}", index, err);
                    None
                }
            })
            .collect();
        Ok(Self(records))
    }
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: GameRecord) {
        self.0.push(record);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last(&self) -> Option<&GameRecord> {
        self.0.last()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, GameRecord> {
        self.0.iter()
    }

    pub fn ordered(&self, order: HistoryOrder) -> Vec<&GameRecord> {
        let mut rows: Vec<_> = self.0.iter().collect();
        match order {
            HistoryOrder::Recorded => {}
            HistoryOrder::MostShots => rows.sort_by_key(|record| Reverse(record.shots)),
        }
        rows
    }
}

impl From<Vec<GameRecord>> for History {
    fn from(records: Vec<GameRecord>) -> Self {
        Self(records)
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a GameRecord;
    type IntoIter = core::slice::Iter<'a, GameRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
