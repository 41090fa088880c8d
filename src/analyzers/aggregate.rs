use chrono::Utc;
use tracing::debug;

use crate::analyzers::types::{
    Analysis, Distribution, GradeAssignment, GradedRecord, PassFailPartition,
};
use crate::config::GradingConfig;
use crate::records::RecordStore;
use crate::stats::ScoreStats;

/// Runs one analysis cycle over `store`.
///
/// Statistics and grading read the store independently; the pass/fail split
/// works from raw scores, not grades.
pub fn analyze(store: &RecordStore, config: &GradingConfig) -> Analysis {
    let stats = ScoreStats::from_store(store);
    let grades = GradeAssignment::from_store(store, &config.thresholds);
    let distribution = Distribution::from_assignment(&grades);
    let partition = PassFailPartition::classify(store, config.pass_threshold);

    let records = store
        .iter()
        .zip(grades.iter())
        .map(|(r, (_, grade))| GradedRecord {
            name: r.name.clone(),
            score: r.score,
            grade,
        })
        .collect();

    debug!(
        students = stats.count,
        passed = partition.passed.len(),
        failed = partition.failed.len(),
        "Analysis complete"
    );

    Analysis {
        generated_at: Utc::now(),
        records,
        stats,
        distribution,
        partition,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::types::Grade;

    #[test]
    fn test_analyze_five_students() {
        let store: RecordStore = [
            ("Alice", 95.0),
            ("Bob", 82.0),
            ("Carol", 67.0),
            ("Dave", 40.0),
            ("Eve", 30.0),
        ]
        .into_iter()
        .collect();

        let a = analyze(&store, &GradingConfig::default());

        let names: Vec<_> = a.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Carol", "Dave", "Eve"]);
        assert_eq!(a.records[0].grade, Grade::A);
        assert_eq!(a.records[1].grade, Grade::B);
        assert_eq!(a.records[2].grade, Grade::D);
        assert_eq!(a.records[4].grade, Grade::F);
        assert_eq!(a.distribution.total(), 5);
        assert_eq!(a.partition.passed, vec!["Alice", "Bob", "Carol", "Dave"]);
        assert_eq!(a.partition.failed, vec!["Eve"]);
    }

    #[test]
    fn test_analyze_empty() {
        let a = analyze(&RecordStore::new(), &GradingConfig::default());

        assert!(a.records.is_empty());
        assert_eq!(a.stats.average, 0.0);
        assert_eq!(a.stats.median, 0.0);
        assert_eq!(a.stats.highest, None);
        assert_eq!(a.stats.lowest, None);
        assert!(a.distribution.iter().all(|(_, n)| n == 0));
        assert!(a.partition.passed.is_empty() && a.partition.failed.is_empty());
    }

    #[test]
    fn test_analyze_uses_config() {
        let store: RecordStore = [("Kim", 45.0)].into_iter().collect();
        let config = GradingConfig {
            pass_threshold: 50.0,
            ..GradingConfig::default()
        };
        let a = analyze(&store, &config);
        assert_eq!(a.partition.failed, vec!["Kim"]);
    }
}
