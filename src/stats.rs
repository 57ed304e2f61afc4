use crate::observability::labels::Labels;
use metrics::{counter, Counter};

pub const VALIDATION_COUNT: &str = "validation.count";

const RESULT: &str = "result";

/// Counters for the outcome of a single configured validator.
pub struct ValidationMetrics {
    pub valid: Counter,
    pub invalid: Counter,
}

impl ValidationMetrics {
    pub fn new(labels: &Labels) -> Self {
        ValidationMetrics {
            valid: counter!(
                VALIDATION_COUNT,
                labels.clone_with_labels(&[(RESULT, "valid")])
            ),
            invalid: counter!(
                VALIDATION_COUNT,
                labels.clone_with_labels(&[(RESULT, "invalid")])
            ),
        }
    }

    pub fn record(&self, is_valid: bool) {
        if is_valid {
            self.valid.increment(1);
        } else {
            self.invalid.increment(1);
        }
    }
}

impl Default for ValidationMetrics {
    fn default() -> Self {
        ValidationMetrics::new(&Labels::empty())
    }
}
