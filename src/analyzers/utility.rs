/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
///
/// The result always lies between the smallest and largest value, even when
/// the plain sum would round upward or overflow.
pub fn mean(values: &[f64]) -> f64 {
    let (Some(lo), Some(hi)) = (min(values), max(values)) else {
        return 0.0;
    };
    let n = values.len() as f64;

    let sum = values.iter().sum::<f64>();
    let avg = if sum.is_finite() {
        sum / n
    } else {
        values.iter().map(|v| v / n).sum::<f64>()
    };
    avg.max(lo).min(hi)
}

/// Computes the median of a slice of values. Returns 0.0 for empty input.
///
/// For an even count this is the mean of the two middle values.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        let (a, b) = (sorted[mid - 1], sorted[mid]);
        (a / 2.0 + b / 2.0).max(a).min(b)
    } else {
        sorted[mid]
    }
}

/// Largest value, or `None` for empty input.
pub fn max(values: &[f64]) -> Option<f64> {
    values.iter().copied().max_by(f64::total_cmp)
}

/// Smallest value, or `None` for empty input.
pub fn min(values: &[f64]) -> Option<f64> {
    values.iter().copied().min_by(f64::total_cmp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(median(&[]), 0.0);
        assert_eq!(max(&[]), None);
        assert_eq!(min(&[]), None);
    }

    #[test]
    fn test_mean() {
        let m = mean(&[95.0, 82.0, 67.0, 40.0, 30.0]);
        assert!((m - 62.8).abs() < 1e-9);
    }

    #[test]
    fn test_mean_stays_within_range() {
        assert_eq!(mean(&[0.1, 0.1, 0.1]), 0.1);
        assert_eq!(mean(&[1e308, 1e308]), 1e308);
        assert_eq!(mean(&[-1e308, -1e308]), -1e308);
    }

    #[test]
    fn test_median_even_does_not_overflow() {
        assert_eq!(median(&[1e308, 1e308]), 1e308);
        assert_eq!(median(&[f64::MAX, -f64::MAX]), 0.0);
        assert_eq!(median(&[0.1, 0.1]), 0.1);
    }

    #[test]
    fn test_median_odd_unsorted() {
        assert_eq!(median(&[95.0, 30.0, 67.0, 82.0, 40.0]), 67.0);
    }

    #[test]
    fn test_median_even() {
        assert_eq!(median(&[70.0, 80.0]), 75.0);
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
    }

    #[test]
    fn test_median_with_ties() {
        assert_eq!(median(&[50.0, 50.0, 50.0, 90.0]), 50.0);
    }

    #[test]
    fn test_median_does_not_reorder_input() {
        let values = [3.0, 1.0, 2.0];
        median(&values);
        assert_eq!(values, [3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_max_min() {
        let values = [12.5, -3.0, 100.0, 0.0];
        assert_eq!(max(&values), Some(100.0));
        assert_eq!(min(&values), Some(-3.0));
        assert_eq!(max(&[7.0]), Some(7.0));
        assert_eq!(min(&[7.0]), Some(7.0));
    }
}
