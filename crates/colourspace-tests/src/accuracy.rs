//! Accuracy measurement
//!
//! Differences are measured per component as absolute error, in whatever
//! units the compared triples use.

/// Statistics from a comparison of triples
#[derive(Debug, Clone, Default)]
pub struct ErrorStats {
    /// Mean of the per-sample maximum component error
    pub mean: f64,
    /// Largest component error seen
    pub max: f64,
    /// Sample that produced `max`
    pub worst: Option<[f64; 3]>,
    /// Number of samples
    pub count: usize,
}

impl ErrorStats {
    /// Build statistics from `(input, actual, expected)` triples
    pub fn collect<I>(samples: I) -> Self
    where
        I: IntoIterator<Item = ([f64; 3], [f64; 3], [f64; 3])>,
    {
        let mut stats = Self::default();
        let mut sum = 0.0;

        for (input, actual, expected) in samples {
            let diff = max_abs_diff(actual, expected);
            sum += diff;
            stats.count += 1;
            // NaN must surface as a failure, not be skipped by `>`
            if diff > stats.max || diff.is_nan() {
                stats.max = diff;
                stats.worst = Some(input);
            }
        }

        if stats.count > 0 {
            stats.mean = sum / stats.count as f64;
        }
        stats
    }

    /// Merge two sets of statistics
    pub fn merge(self, other: Self) -> Self {
        let count = self.count + other.count;
        let mean = if count == 0 {
            0.0
        } else {
            (self.mean * self.count as f64 + other.mean * other.count as f64) / count as f64
        };
        let (max, worst) = if other.max > self.max || other.max.is_nan() {
            (other.max, other.worst)
        } else {
            (self.max, self.worst)
        };
        Self {
            mean,
            max,
            worst,
            count,
        }
    }

    /// Check every sample was within `tolerance`
    pub fn within(&self, tolerance: f64) -> bool {
        self.max <= tolerance
    }
}

/// Largest absolute component difference between two triples
pub fn max_abs_diff(a: [f64; 3], b: [f64; 3]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, |acc, d| if d > acc || d.is_nan() { d } else { acc })
}
