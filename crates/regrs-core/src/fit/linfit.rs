use crate::stats::fiterror::FitResult;
use crate::stats::stats::{r2_from_predictions, rmse};
use crate::stats::LinReg;

use serde::Serialize;
use std::fmt;

/// A trained model together with its in-sample goodness-of-fit numbers.
#[derive(Clone, Debug, Serialize)]
pub struct LinearFit {
    pub model: LinReg,
    pub r2: f64,
    pub rmse: f64,
    pub n: usize,
}

impl fmt::Display for LinearFit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}, r: {}, r2: {}, rmse: {}, n: {}",
            self.model, self.model.r, self.r2, self.rmse, self.n
        )
    }
}

impl LinearFit {
    pub fn from_data(x: &[f64], y: &[f64]) -> FitResult<Self> {
        let model = LinReg::train(x, y)?;

        let y_hat: Vec<f64> = x.iter().map(|&xi| model.calculate(xi)).collect();
        let r2 = r2_from_predictions(y, &y_hat).unwrap_or(0.0);
        let rmse_val = rmse(y, &y_hat).unwrap_or(0.0);

        Ok(Self { model, r2, rmse: rmse_val, n: x.len() })
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.model.calculate(x)
    }
}

/// Train on (x, y) and evaluate the fitted line at `input` in one step.
pub fn predict_at(x: &[f64], y: &[f64], input: f64) -> FitResult<f64> {
    Ok(LinReg::train(x, y)?.calculate(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::FitError;

    fn rss(x: &[f64], y: &[f64], intercept: f64, slope: f64) -> f64 {
        x.iter().zip(y.iter()).map(|(&xi, &yi)| (yi - (intercept + slope * xi)).powi(2)).sum()
    }

    #[test]
    fn test_from_data_perfect_line() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 4.0, 6.0, 8.0, 10.0];

        let fit = LinearFit::from_data(&x, &y).unwrap();
        assert!((fit.r2 - 1.0).abs() < 1e-12);
        assert!(fit.rmse < 1e-12);
        assert_eq!(fit.n, 5);
        assert!((fit.predict(10.0) - 20.0).abs() < 1e-12);
    }
    #[test]
    fn test_predict_at_end_to_end() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 4.0, 6.0, 8.0, 10.0];

        let result = predict_at(&x, &y, 10.0).unwrap();
        assert!((result - 20.0).abs() < 1e-12);
    }
    #[test]
    fn test_fit_minimizes_rss() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [1.1, 2.9, 5.2, 6.8, 9.1, 10.9];

        let fit = LinearFit::from_data(&x, &y).unwrap();
        let best = rss(&x, &y, fit.model.intercept, fit.model.slope);

        // brute force: no nearby line beats the closed form
        for di in -10..=10 {
            for ds in -10..=10 {
                let intercept = fit.model.intercept + di as f64 * 0.05;
                let slope = fit.model.slope + ds as f64 * 0.05;
                assert!(best <= rss(&x, &y, intercept, slope) + 1e-9);
            }
        }
    }
    #[test]
    fn test_from_data_degenerate() {
        let x = [3.0, 3.0, 3.0];
        let y = [1.0, 2.0, 3.0];

        assert!(matches!(LinearFit::from_data(&x, &y), Err(FitError::DegenerateX)));
    }
}
