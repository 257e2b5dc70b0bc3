//! Ordinary least-squares fit over season-local episode indices

/// Fitted line `y = slope * x + intercept`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    /// Fitted value at local index `x`
    pub fn value_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fit a least-squares line over the implicit x sequence `0, 1, .., k-1`.
///
/// A single value yields a flat line through it: the classic closed form
/// is undefined at k = 1, and aborting a whole render over a one-episode
/// season (a pilot, a special) is not worth it.
pub fn fit_least_squares(values: &[f64]) -> LinearFit {
    match values {
        [] => LinearFit {
            slope: 0.0,
            intercept: 0.0,
        },
        [single] => LinearFit {
            slope: 0.0,
            intercept: *single,
        },
        _ => {
            let n = values.len() as f64;
            let x_values: Vec<f64> = (0..values.len()).map(|i| i as f64).collect();

            let sum_x: f64 = x_values.iter().sum();
            let sum_y: f64 = values.iter().sum();
            let sum_xy: f64 = x_values.iter().zip(values.iter()).map(|(x, y)| x * y).sum();
            let sum_x_squared: f64 = x_values.iter().map(|x| x.powi(2)).sum();

            let slope = (n * sum_xy - sum_x * sum_y) / (n * sum_x_squared - sum_x.powi(2));
            let intercept = (sum_y - slope * sum_x) / n;

            LinearFit { slope, intercept }
        }
    }
}
