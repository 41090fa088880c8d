use crate::analyzers::types::PassFailPartition;
use crate::records::RecordStore;

/// Minimum score counted as a pass.
pub const PASS_THRESHOLD: f64 = 40.0;

impl PassFailPartition {
    /// Splits students into those scoring at least `threshold` and the rest.
    pub fn classify(store: &RecordStore, threshold: f64) -> Self {
        let (passed, failed): (Vec<_>, Vec<_>) =
            store.iter().partition(|r| r.score >= threshold);

        Self {
            passed: passed.into_iter().map(|r| r.name.clone()).collect(),
            failed: failed.into_iter().map(|r| r.name.clone()).collect(),
        }
    }
}
