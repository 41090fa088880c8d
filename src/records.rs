//! Ordered student → score store shared by every analysis step.

use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

use crate::error::RecordError;

/// One student's score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub name: String,
    pub score: f64,
}

/// Scores keyed by student name, iterated in insertion order.
///
/// Re-inserting an existing name replaces its score but keeps the
/// position of the first insert.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the score for `name` (trimmed).
    ///
    /// Returns the previous score when the name was already present.
    pub fn insert(&mut self, name: &str, score: f64) -> Result<Option<f64>, RecordError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RecordError::EmptyIdentifier);
        }
        if !score.is_finite() {
            return Err(RecordError::NonFiniteScore {
                identifier: name.to_string(),
            });
        }

        if let Some(&pos) = self.index.get(name) {
            let previous = std::mem::replace(&mut self.records[pos].score, score);
            return Ok(Some(previous));
        }

        self.index.insert(name.to_string(), self.records.len());
        self.records.push(Record {
            name: name.to_string(),
            score,
        });
        Ok(None)
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.index.get(name).map(|&pos| self.records[pos].score)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name.as_str())
    }

    /// Score values in insertion order.
    pub fn scores(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.score).collect()
    }
}

/// Builds a store from pairs, skipping entries [`RecordStore::insert`] rejects.
impl<S: AsRef<str>> FromIterator<(S, f64)> for RecordStore {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut store = RecordStore::new();
        for (name, score) in iter {
            if let Err(e) = store.insert(name.as_ref(), score) {
                debug!(name = name.as_ref(), score, error = %e, "Dropping rejected record");
            }
        }
        store
    }
}

impl Serialize for RecordStore {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.records)
    }
}
