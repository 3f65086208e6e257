use serde::Serialize;

/// Ordinary least-squares line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearTrend {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearTrend {
    /// Fits `values` against their indices `0..n`.
    ///
    /// Returns `None` for fewer than two values, where the slope is undefined.
    pub fn fit(values: &[f64]) -> Option<Self> {
        let points: Vec<(f64, f64)> = values
            .iter()
            .enumerate()
            .map(|(index, value)| (index as f64, *value))
            .collect();
        Self::fit_points(&points)
    }

    /// Fits arbitrary `(x, y)` pairs. Returns `None` when the closed-form
    /// denominator `nΣx² − (Σx)²` is zero, i.e. `n ≤ 1` or every `x` coincides.
    pub fn fit_points(points: &[(f64, f64)]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let n = points.len() as f64;
        let (sum_x, sum_y, sum_xy, sum_xx) = points.iter().fold(
            (0.0, 0.0, 0.0, 0.0),
            |(sum_x, sum_y, sum_xy, sum_xx), (x, y)| {
                (sum_x + x, sum_y + y, sum_xy + x * y, sum_xx + x * x)
            },
        );

        let denominator = n * sum_xx - sum_x * sum_x;
        if denominator == 0.0 || !denominator.is_finite() {
            return None;
        }

        let slope = (n * sum_xy - sum_x * sum_y) / denominator;
        let intercept = (sum_y - slope * sum_x) / n;
        Some(Self { slope, intercept })
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recovers_an_exact_line() {
        let trend = LinearTrend::fit(&[1.0, 3.0, 5.0, 7.0]).expect("fit exists");
        assert_eq!(trend.slope, 2.0);
        assert_eq!(trend.intercept, 1.0);
        assert_eq!(trend.predict(4.0), 9.0);
    }

    #[test]
    fn flat_series_has_zero_slope() {
        let trend = LinearTrend::fit(&[5.0, 5.0, 5.0]).expect("fit exists");
        assert_eq!(trend.slope, 0.0);
        assert_eq!(trend.intercept, 5.0);
    }

    #[test]
    fn degenerate_inputs_have_no_fit() {
        assert_eq!(LinearTrend::fit(&[]), None);
        assert_eq!(LinearTrend::fit(&[42.0]), None);
        assert_eq!(
            LinearTrend::fit_points(&[(3.0, 1.0), (3.0, 2.0), (3.0, 9.0)]),
            None
        );
    }

    #[test]
    fn repeated_fits_are_bit_identical() {
        let values = [1250.0, 0.0, 3136.7, 2140.25, 5796.0, 469.0];
        let first = LinearTrend::fit(&values).expect("fit exists");
        for _ in 0..16 {
            let again = LinearTrend::fit(&values).expect("fit exists");
            assert_eq!(first.slope.to_bits(), again.slope.to_bits());
            assert_eq!(first.intercept.to_bits(), again.intercept.to_bits());
        }
    }
}
