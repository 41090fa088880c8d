use serde::{Deserialize, Serialize};

use crate::analyzers::types::{Distribution, Grade, GradeAssignment};
use crate::records::RecordStore;

pub const A_MIN: f64 = 90.0;
pub const B_MIN: f64 = 80.0;
pub const C_MIN: f64 = 70.0;
pub const D_MIN: f64 = 60.0;

/// Inclusive lower bounds for each passing letter; anything below `d` is an F.
///
/// | Range  | Grade |
/// |--------|-------|
/// | >= 90  | A     |
/// | >= 80  | B     |
/// | >= 70  | C     |
/// | >= 60  | D     |
/// | < 60   | F     |
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradeThresholds {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl Default for GradeThresholds {
    fn default() -> Self {
        Self {
            a: A_MIN,
            b: B_MIN,
            c: C_MIN,
            d: D_MIN,
        }
    }
}

impl GradeThresholds {
    /// Converts a score into a letter grade. The highest matching band wins.
    pub fn grade(&self, score: f64) -> Grade {
        match score {
            s if s >= self.a => Grade::A,
            s if s >= self.b => Grade::B,
            s if s >= self.c => Grade::C,
            s if s >= self.d => Grade::D,
            _ => Grade::F,
        }
    }
}

/// Converts a score into a letter grade using the default bands.
pub fn grade(score: f64) -> Grade {
    GradeThresholds::default().grade(score)
}

impl GradeAssignment {
    /// Grades every student in `store`, keeping store order.
    pub fn from_store(store: &RecordStore, thresholds: &GradeThresholds) -> Self {
        Self {
            entries: store
                .iter()
                .map(|r| (r.name.clone(), thresholds.grade(r.score)))
                .collect(),
        }
    }
}

impl Distribution {
    /// Tallies grades. The total always equals `assignment.len()`.
    pub fn from_assignment(assignment: &GradeAssignment) -> Self {
        let mut dist = Distribution::default();
        for (_, g) in assignment.iter() {
            dist.record(g);
        }
        dist
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(grade(100.0), Grade::A);
        assert_eq!(grade(90.0), Grade::A);
        assert_eq!(grade(89.99), Grade::B);
        assert_eq!(grade(80.0), Grade::B);
        assert_eq!(grade(79.9), Grade::C);
        assert_eq!(grade(70.0), Grade::C);
        assert_eq!(grade(69.5), Grade::D);
        assert_eq!(grade(60.0), Grade::D);
        assert_eq!(grade(59.99), Grade::F);
        assert_eq!(grade(0.0), Grade::F);
    }

    #[test]
    fn test_grade_outside_conventional_range() {
        assert_eq!(grade(250.0), Grade::A);
        assert_eq!(grade(-15.0), Grade::F);
    }

    #[test]
    fn test_grade_is_monotonic() {
        let scores: Vec<f64> = (-20..=220).map(|n| n as f64 * 0.5).collect();
        for pair in scores.windows(2) {
            assert!(grade(pair[1]) >= grade(pair[0]), "{:?}", pair);
        }
    }

    #[test]
    fn test_custom_thresholds() {
        let strict = GradeThresholds {
            a: 95.0,
            b: 85.0,
            c: 75.0,
            d: 65.0,
        };
        assert_eq!(strict.grade(92.0), Grade::B);
        assert_eq!(strict.grade(64.0), Grade::F);
    }

    #[test]
    fn test_assignment_and_distribution() {
        let store: RecordStore = [
            ("Alice", 95.0),
            ("Bob", 82.0),
            ("Carol", 67.0),
            ("Dave", 40.0),
            ("Eve", 30.0),
        ]
        .into_iter()
        .collect();

        let grades = GradeAssignment::from_store(&store, &GradeThresholds::default());
        let letters: String = grades.iter().map(|(_, g)| g.as_char()).collect();
        assert_eq!(letters, "ABDFF");
        assert_eq!(grades.get("Carol"), Some(Grade::D));

        let dist = Distribution::from_assignment(&grades);
        assert_eq!(dist.count(Grade::A), 1);
        assert_eq!(dist.count(Grade::C), 0);
        assert_eq!(dist.count(Grade::F), 2);
        assert_eq!(dist.total(), store.len());
    }

    #[test]
    fn test_thresholds_partial_json_uses_defaults() {
        let t: GradeThresholds = serde_json::from_str(r#"{"a": 85}"#).unwrap();
        assert_eq!(t.a, 85.0);
        assert_eq!(t.b, B_MIN);
    }
}
