use serde::Serialize;

use crate::analyzers::utility::{max, mean, median, min};
use crate::records::RecordStore;

/// Aggregate measures over the scores of one store.
///
/// `highest` and `lowest` are `None` for an empty store, while `average`
/// and `median` fall back to 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScoreStats {
    pub count: usize,
    pub average: f64,
    pub median: f64,
    pub highest: Option<f64>,
    pub lowest: Option<f64>,
}

impl ScoreStats {
    pub fn from_store(store: &RecordStore) -> Self {
        let scores = store.scores();

        ScoreStats {
            count: scores.len(),
            average: mean(&scores),
            median: median(&scores),
            highest: max(&scores),
            lowest: min(&scores),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(pairs: &[(&str, f64)]) -> RecordStore {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_from_store_empty() {
        let stats = ScoreStats::from_store(&RecordStore::new());

        assert_eq!(stats.count, 0);
        assert_eq!(stats.average, 0.0);
        assert_eq!(stats.median, 0.0);
        assert_eq!(stats.highest, None);
        assert_eq!(stats.lowest, None);
    }

    #[test]
    fn test_from_store_five_students() {
        let s = store(&[
            ("Alice", 95.0),
            ("Bob", 82.0),
            ("Carol", 67.0),
            ("Dave", 40.0),
            ("Eve", 30.0),
        ]);
        let stats = ScoreStats::from_store(&s);

        assert_eq!(stats.count, 5);
        assert!((stats.average - 62.8).abs() < 1e-9);
        assert_eq!(stats.median, 67.0);
        assert_eq!(stats.highest, Some(95.0));
        assert_eq!(stats.lowest, Some(30.0));
    }

    #[test]
    fn test_even_count_median() {
        let stats = ScoreStats::from_store(&store(&[("X", 70.0), ("Y", 80.0)]));
        assert_eq!(stats.median, 75.0);
    }

    #[test]
    fn test_names_do_not_matter() {
        let a = ScoreStats::from_store(&store(&[("a", 1.0), ("b", 9.0), ("c", 4.0)]));
        let b = ScoreStats::from_store(&store(&[("zz", 4.0), ("yy", 1.0), ("xx", 9.0)]));
        assert_eq!(a, b);
    }

    #[test]
    fn test_bounds_hold() {
        let samples: &[&[f64]] = &[
            &[1.0],
            &[0.0, 100.0],
            &[55.5, 55.5, 55.5],
            &[-10.0, 3.0, 99.0, 42.0, 42.0, 7.25],
            &[100.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            &[0.1, 0.1, 0.1],
            &[1e308, 1e308],
            &[1e308, -1e308, 1e308],
            &[33.3, 66.7, 99.9, 0.7, 12.1],
        ];
        for values in samples {
            let s: RecordStore = values
                .iter()
                .enumerate()
                .map(|(i, v)| (format!("s{i}"), *v))
                .collect();
            let stats = ScoreStats::from_store(&s);
            let (lo, hi) = (stats.lowest.unwrap(), stats.highest.unwrap());

            assert!(stats.average.is_finite(), "{values:?}");
            assert!(lo <= stats.median && stats.median <= hi, "{values:?}");
            assert!(lo <= stats.average && stats.average <= hi, "{values:?}");
        }
    }

    #[test]
    fn test_does_not_mutate_store() {
        let s = store(&[("B", 20.0), ("A", 10.0)]);
        let before = s.clone();
        ScoreStats::from_store(&s);
        assert_eq!(s, before);
    }
}
