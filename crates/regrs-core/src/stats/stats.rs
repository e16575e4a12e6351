use crate::stats::fiterror::{FitError, FitResult};

pub fn mean(values: &[f64]) -> FitResult<f64> {
    if values.is_empty() {
        return Err(FitError::EmptyData);
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation, n - 1 in the denominator.
pub fn sample_std(values: &[f64], mean: f64) -> FitResult<f64> {
    if values.len() < 2 {
        return Err(FitError::NotEnoughPoints { len: values.len(), needed: 2 });
    }
    let n = values.len() as f64 - 1.0;
    let total: f64 = values.iter().map(|&v| (v - mean).powi(2)).sum();

    Ok((total / n).sqrt())
}

/// Signed Pearson correlation coefficient.
pub fn pearson_correlation(x: &[f64], y: &[f64], x_mean: f64, y_mean: f64) -> FitResult<f64> {
    if x.len() != y.len() {
        return Err(FitError::LengthMismatch { len_x: x.len(), len_y: y.len() });
    }
    if x.is_empty() {
        return Err(FitError::EmptyData);
    }

    let numerator: f64 =
        x.iter().zip(y.iter()).map(|(&xi, &yi)| (xi - x_mean) * (yi - y_mean)).sum();

    let denominator_x: f64 = x.iter().map(|&xi| (xi - x_mean).powi(2)).sum();
    let denominator_y: f64 = y.iter().map(|&yi| (yi - y_mean).powi(2)).sum();

    if denominator_x == 0.0 {
        return Err(FitError::DegenerateX);
    }
    if denominator_y == 0.0 {
        return Err(FitError::DegenerateY);
    }

    Ok(numerator / (denominator_x * denominator_y).sqrt())
}

pub fn rmse(y: &[f64], y_hat: &[f64]) -> Option<f64> {
    if y.len() != y_hat.len() || y.is_empty() {
        return None;
    }

    let sum_sq: f64 = y.iter().zip(y_hat.iter()).map(|(&yi, &yhi)| (yi - yhi).powi(2)).sum();

    Some((sum_sq / y.len() as f64).sqrt())
}

pub fn r2_from_predictions(y: &[f64], y_hat: &[f64]) -> Option<f64> {
    if y.len() != y_hat.len() || y.len() < 2 {
        return None;
    }

    let y_mean = y.iter().sum::<f64>() / y.len() as f64;

    let ss_res: f64 = y.iter().zip(y_hat).map(|(&yi, &yhi)| (yi - yhi).powi(2)).sum();
    let ss_tot: f64 = y.iter().map(|&yi| (yi - y_mean).powi(2)).sum();

    if ss_tot == 0.0 {
        return None;
    }

    Some(1.0 - ss_res / ss_tot)
}
