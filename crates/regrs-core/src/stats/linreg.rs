use crate::stats::fiterror::{FitError, FitResult};
use crate::stats::stats::{mean, pearson_correlation, sample_std};

use serde::Serialize;
use std::fmt;

#[derive(Clone, Copy, Debug, Serialize)]
pub struct LinReg {
    pub intercept: f64,
    pub slope: f64,
    pub r: f64,
}

impl fmt::Display for LinReg {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "y = {} + {}x", self.intercept, self.slope)
    }
}

impl Default for LinReg {
    fn default() -> Self {
        Self::new()
    }
}

impl LinReg {
    pub fn new() -> Self {
        Self { intercept: 0., slope: 0., r: 0. }
    }
    pub fn calculate(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
    pub fn from_val(intercept: f64, slope: f64, r: f64) -> Self {
        Self { intercept, slope, r }
    }

    /// Fit by correlation: slope = r * (std_y / std_x), intercept through the means.
    pub fn train(x: &[f64], y: &[f64]) -> FitResult<Self> {
        if x.len() != y.len() {
            return Err(FitError::LengthMismatch { len_x: x.len(), len_y: y.len() });
        }
        if x.len() < 2 {
            return Err(FitError::NotEnoughPoints { len: x.len(), needed: 2 });
        }
        if x.iter().any(|v| !v.is_finite()) || y.iter().any(|v| !v.is_finite()) {
            return Err(FitError::NonFiniteData);
        }

        let x_mean = mean(x)?;
        let y_mean = mean(y)?;

        let std_x = sample_std(x, x_mean)?;
        let std_y = sample_std(y, y_mean)?;

        // errors out before the slope can divide by a zero std_x
        let r = pearson_correlation(x, y, x_mean, y_mean)?;

        let slope = r * (std_y / std_x);
        let intercept = y_mean - slope * x_mean;

        Ok(Self { intercept, slope, r })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_train_perfect_line() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 4.0, 6.0, 8.0, 10.0];

        let model = LinReg::train(&x, &y).unwrap();
        assert!((model.slope - 2.0).abs() < 1e-12);
        assert!(model.intercept.abs() < 1e-12);
        assert!((model.r - 1.0).abs() < 1e-12);
        assert!((model.calculate(10.0) - 20.0).abs() < 1e-12);
    }
    #[test]
    fn test_train_affine_line() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [3.0, 3.5, 4.0, 4.5]; // y = 3 + 0.5x

        let model = LinReg::train(&x, &y).unwrap();
        assert!((model.slope - 0.5).abs() < 1e-12);
        assert!((model.intercept - 3.0).abs() < 1e-12);
    }
    #[test]
    fn test_train_negative_slope() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [8.0, 6.0, 4.0, 2.0];

        let model = LinReg::train(&x, &y).unwrap();
        assert!((model.slope + 2.0).abs() < 1e-12);
        assert!((model.r + 1.0).abs() < 1e-12);
    }
    #[test]
    fn test_train_matches_least_squares_form() {
        // slope via r * (std_y / std_x) must agree with ss_xy / ss_xx
        let x: Vec<f64> = (0..20).map(|i| i as f64).collect();
        let y: Vec<f64> = (0..20).map(|i| 2.0 * i as f64 + ((i * 7) % 5) as f64).collect();

        let model = LinReg::train(&x, &y).unwrap();

        let x_mean = x.iter().sum::<f64>() / x.len() as f64;
        let y_mean = y.iter().sum::<f64>() / y.len() as f64;
        let ss_xy: f64 =
            x.iter().zip(y.iter()).map(|(&xi, &yi)| (xi - x_mean) * (yi - y_mean)).sum();
        let ss_xx: f64 = x.iter().map(|&xi| (xi - x_mean).powi(2)).sum();

        assert!((model.slope - ss_xy / ss_xx).abs() < 1e-10);
        assert!((model.intercept - (y_mean - model.slope * x_mean)).abs() < 1e-10);
    }
    #[test]
    fn test_train_degenerate_x() {
        let x = [3.0, 3.0, 3.0];
        let y = [1.0, 2.0, 3.0];

        assert!(matches!(LinReg::train(&x, &y), Err(FitError::DegenerateX)));
    }
    #[test]
    fn test_train_single_sample() {
        let x = [1.0];
        let y = [2.0];

        assert!(matches!(
            LinReg::train(&x, &y),
            Err(FitError::NotEnoughPoints { len: 1, needed: 2 })
        ));
    }
    #[test]
    fn test_train_length_mismatch() {
        let x = [1.0, 2.0, 3.0];
        let y = [1.0, 2.0];

        assert!(matches!(
            LinReg::train(&x, &y),
            Err(FitError::LengthMismatch { len_x: 3, len_y: 2 })
        ));
    }
    #[test]
    fn test_train_non_finite() {
        let x = [1.0, 2.0, f64::NAN];
        let y = [1.0, 2.0, 3.0];

        assert!(matches!(LinReg::train(&x, &y), Err(FitError::NonFiniteData)));
    }
}
