//! Order-independent aggregates over seconds samples.

/// Arithmetic mean. Returns 0.0 for an empty slice; callers rely on this
/// instead of guarding against division by zero themselves.
pub fn mean(values: &[i64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<i64>() as f64 / values.len() as f64
}

/// Sum of the samples; 0 for an empty slice.
pub fn sum(values: &[i64]) -> i64 {
    values.iter().sum()
}
