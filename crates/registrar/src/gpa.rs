//! Parallel divide-and-conquer reduction behind GPA calculation.
//!
//! Sequences are split at the midpoint until a range is shorter than the
//! split threshold; both halves are summed concurrently on rayon's global
//! pool and then combined.

/// Sums grade points and credit hours for a GPA
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpaReducer {
    split_threshold: usize,
}

impl Default for GpaReducer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SPLIT_THRESHOLD)
    }
}

impl GpaReducer {
    pub const DEFAULT_SPLIT_THRESHOLD: usize = 3;

    /// A threshold of 1 would split single-element ranges forever
    pub const MIN_SPLIT_THRESHOLD: usize = 2;

    pub fn new(split_threshold: usize) -> Self {
        Self {
            split_threshold: split_threshold.max(Self::MIN_SPLIT_THRESHOLD),
        }
    }

    pub fn split_threshold(&self) -> usize {
        self.split_threshold
    }

    /// Sums `values`, forking both halves of any range at or above the
    /// threshold
    pub fn sum(&self, values: &[f64]) -> f64 {
        if values.len() < self.split_threshold {
            return values.iter().sum();
        }

        let (left, right) = values.split_at(values.len() / 2);
        let (left, right) = rayon::join(|| self.sum(left), || self.sum(right));

        left + right
    }

    /// Credit-weighted mean of `(grade, credit_hours)` pairs, rounded to two
    /// decimals. Returns 0.0 when there are no credits.
    pub fn weighted_average(&self, entries: &[(f64, f64)]) -> f64 {
        let (points, credits): (Vec<f64>, Vec<f64>) = entries
            .iter()
            .map(|&(grade, credit_hours)| (grade * credit_hours, credit_hours))
            .unzip();

        let (points, credits) = rayon::join(|| self.sum(&points), || self.sum(&credits));
        if credits == 0.0 {
            return 0.0;
        }

        round_hundredths(points / credits)
    }
}

/// Rounds half away from zero to two decimal places
pub fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
