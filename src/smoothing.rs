//! Holt's linear-trend exponential smoothing (additive trend, no seasonal
//! component). The level and trend recursions are
//!
//! ```text
//! l_t = alpha * y_t + (1 - alpha) * (l_{t-1} + b_{t-1})
//! b_t = beta * (l_t - l_{t-1}) + (1 - beta) * b_{t-1}
//! ```
//!
//! and the h-step forecast is `l_n + h * b_n`. Smoothing parameters are
//! chosen by an exhaustive grid search over one-step-ahead squared error,
//! which keeps the fit deterministic for identical input.

use serde::Serialize;
use thiserror::Error;

/// Minimum history length: one point to seed the level, one to seed the
/// trend, and at least one more to score a one-step prediction.
pub const MIN_OBSERVATIONS: usize = 3;

const GRID_STEPS: u32 = 20;

#[derive(Debug, Error, PartialEq)]
pub enum FitError {
    #[error("need at least {MIN_OBSERVATIONS} observations to fit a trend, got {0}")]
    TooShort(usize),
    #[error("input values produced a non-finite fit")]
    Degenerate,
}

/// Fitted parameters and in-sample error, reported back to the user.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FitSummary {
    pub alpha: f64,
    pub beta: f64,
    pub sse: f64,
}

/// A fitted trend model, ready to extrapolate.
#[derive(Debug, Clone)]
pub struct TrendModel {
    alpha: f64,
    beta: f64,
    level: f64,
    trend: f64,
    sse: f64,
}

impl TrendModel {
    /// Fits the model to `values`, selecting `alpha` and `beta` on a fixed
    /// 0.05-step grid by minimum one-step-ahead SSE. Ties keep the first
    /// grid point, so the result is fully deterministic.
    pub fn fit(values: &[f64]) -> Result<Self, FitError> {
        if values.len() < MIN_OBSERVATIONS {
            return Err(FitError::TooShort(values.len()));
        }

        let mut best: Option<(f64, f64, f64)> = None;
        for a in 1..GRID_STEPS {
            let alpha = f64::from(a) / f64::from(GRID_STEPS);
            for b in 1..GRID_STEPS {
                let beta = f64::from(b) / f64::from(GRID_STEPS);
                let sse = one_step_sse(alpha, beta, values);
                if !sse.is_finite() {
                    continue;
                }
                if best.is_none_or(|(best_sse, _, _)| sse < best_sse) {
                    best = Some((sse, alpha, beta));
                }
            }
        }

        let (sse, alpha, beta) = best.ok_or(FitError::Degenerate)?;
        let (level, trend) = smooth(alpha, beta, values);
        if !level.is_finite() || !trend.is_finite() {
            return Err(FitError::Degenerate);
        }

        Ok(Self {
            alpha,
            beta,
            level,
            trend,
            sse,
        })
    }

    /// Point predictions for the next `horizon` periods. Additive trend can
    /// extrapolate below zero; callers must tolerate negative values.
    pub fn forecast(&self, horizon: usize) -> Vec<f64> {
        (1..=horizon)
            .map(|h| self.level + h as f64 * self.trend)
            .collect()
    }

    pub fn summary(&self) -> FitSummary {
        FitSummary {
            alpha: self.alpha,
            beta: self.beta,
            sse: self.sse,
        }
    }

    pub fn components(&self) -> (f64, f64) {
        (self.level, self.trend)
    }
}

fn smooth(alpha: f64, beta: f64, values: &[f64]) -> (f64, f64) {
    let mut level = values[0];
    let mut trend = values[1] - values[0];
    for &value in &values[1..] {
        let prev_level = level;
        level = alpha * value + (1.0 - alpha) * (level + trend);
        trend = beta * (level - prev_level) + (1.0 - beta) * trend;
    }
    (level, trend)
}

fn one_step_sse(alpha: f64, beta: f64, values: &[f64]) -> f64 {
    let mut level = values[0];
    let mut trend = values[1] - values[0];
    let mut sse = 0.0;
    for &value in &values[1..] {
        let error = value - (level + trend);
        sse += error * error;
        let prev_level = level;
        level = alpha * value + (1.0 - alpha) * (level + trend);
        trend = beta * (level - prev_level) + (1.0 - beta) * trend;
    }
    sse
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forecast_has_exactly_horizon_points() {
        let values: Vec<f64> = (0..10).map(|i| 100.0 + i as f64).collect();
        let model = TrendModel::fit(&values).unwrap();
        assert_eq!(model.forecast(30).len(), 30);
        assert!(model.forecast(0).is_empty());
    }

    #[test]
    fn linear_series_extrapolates_the_slope() {
        let values: Vec<f64> = (0..20).map(|i| 10.0 + 2.0 * i as f64).collect();
        let model = TrendModel::fit(&values).unwrap();
        let forecast = model.forecast(5);
        // Perfectly linear input: one-step predictions are exact, so the
        // grid search finds a fit that keeps the slope.
        for (h, value) in forecast.iter().enumerate() {
            let expected = 10.0 + 2.0 * (20 + h) as f64;
            assert!(
                (value - expected).abs() < 1.0,
                "h={h}: {value} vs {expected}"
            );
        }
    }

    #[test]
    fn constant_series_forecasts_flat() {
        let values = vec![100.0; 10];
        let model = TrendModel::fit(&values).unwrap();
        for value in model.forecast(10) {
            assert!((value - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn too_short_series_is_an_error() {
        assert_eq!(TrendModel::fit(&[5.0]).unwrap_err(), FitError::TooShort(1));
        assert_eq!(
            TrendModel::fit(&[5.0, 6.0]).unwrap_err(),
            FitError::TooShort(2)
        );
    }

    #[test]
    fn fit_is_deterministic() {
        let values: Vec<f64> = (0..30).map(|i| 50.0 + (i as f64 * 0.7).sin() * 10.0).collect();
        let first = TrendModel::fit(&values).unwrap();
        let second = TrendModel::fit(&values).unwrap();
        assert_eq!(first.summary().alpha, second.summary().alpha);
        assert_eq!(first.summary().beta, second.summary().beta);
        assert_eq!(first.forecast(100), second.forecast(100));
    }

    #[test]
    fn declining_series_may_forecast_negative() {
        let values: Vec<f64> = (0..10).map(|i| 90.0 - 10.0 * i as f64).collect();
        let model = TrendModel::fit(&values).unwrap();
        let forecast = model.forecast(10);
        assert!(forecast.last().unwrap() < &0.0);
    }
}
