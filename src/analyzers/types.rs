//! Data types produced by the grading pipeline.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::fmt;

use crate::stats::ScoreStats;

/// Letter grade. Ordered worst to best, so `Grade::F < Grade::A`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Grade {
    F,
    D,
    C,
    B,
    A,
}

impl Grade {
    /// All grades in report order.
    pub const ALL: [Grade; 5] = [Grade::A, Grade::B, Grade::C, Grade::D, Grade::F];

    pub fn as_char(self) -> char {
        match self {
            Grade::A => 'A',
            Grade::B => 'B',
            Grade::C => 'C',
            Grade::D => 'D',
            Grade::F => 'F',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }

    /// Position of this grade in [`Grade::ALL`].
    fn slot(self) -> usize {
        match self {
            Grade::A => 0,
            Grade::B => 1,
            Grade::C => 2,
            Grade::D => 3,
            Grade::F => 4,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Grade {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Grade per student, in the order of the store it was derived from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GradeAssignment {
    pub(crate) entries: Vec<(String, Grade)>,
}

impl GradeAssignment {
    pub fn get(&self, name: &str) -> Option<Grade> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, g)| *g)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Grade)> {
        self.entries.iter().map(|(n, g)| (n.as_str(), *g))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for GradeAssignment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Number of students per grade. Every grade is present, possibly with 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Distribution {
    counts: [usize; 5],
}

impl Distribution {
    pub fn count(&self, grade: Grade) -> usize {
        self.counts[grade.slot()]
    }

    pub(crate) fn record(&mut self, grade: Grade) {
        self.counts[grade.slot()] += 1;
    }

    /// `(grade, count)` pairs in A..F order.
    pub fn iter(&self) -> impl Iterator<Item = (Grade, usize)> + '_ {
        Grade::ALL.iter().map(|&g| (g, self.count(g)))
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

impl Serialize for Distribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Students split by the pass threshold, each side in store order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PassFailPartition {
    pub passed: Vec<String>,
    pub failed: Vec<String>,
}

/// One table row of a finished analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradedRecord {
    pub name: String,
    pub score: f64,
    pub grade: Grade,
}

/// Complete result of one analysis cycle.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub generated_at: DateTime<Utc>,
    pub records: Vec<GradedRecord>,
    pub stats: ScoreStats,
    pub distribution: Distribution,
    pub partition: PassFailPartition,
}
