use crate::models::{
    CombinedPoint, CombinedSeries, CumulativePoint, ForecastResponse, ForecastSeries, PointSource,
    Series,
};
use crate::smoothing::{FitError, TrendModel};
use tracing::info;

/// Runs the whole pipeline for one request: fit, extrapolate, concatenate,
/// prefix-sum, and scan for the target crossing.
pub fn run(series: &Series, target: f64, horizon_days: u32) -> Result<ForecastResponse, FitError> {
    let model = TrendModel::fit(&series.counts())?;
    let last_date = series.last_date().ok_or(FitError::TooShort(0))?;

    let forecast =
        ForecastSeries::from_predictions(last_date, model.forecast(horizon_days as usize));
    let combined = combine(series, &forecast);
    let crossing = first_crossing(&combined, target);

    let fit = model.summary();
    info!(
        alpha = fit.alpha,
        beta = fit.beta,
        sse = fit.sse,
        horizon_days,
        reached = crossing.is_some(),
        "pipeline run complete"
    );

    let message = match &crossing {
        Some(point) => format!(
            "The cumulative total of {} loaded vehicles is reached on {}.",
            format_count(target),
            point.date
        ),
        None => format!(
            "The target of {} is not reached within the forecast horizon.",
            format_count(target)
        ),
    };

    let cumulative = combined
        .points
        .iter()
        .map(|point| CumulativePoint {
            date: point.date,
            total: point.cumulative,
        })
        .collect();

    Ok(ForecastResponse {
        target,
        horizon_days,
        reached_on: crossing.map(|point| point.date),
        message,
        fit,
        daily: combined.points,
        cumulative,
    })
}

/// Concatenates history and forecast in date order and attaches the running
/// total. Forecast dates strictly follow the history, so no reordering.
pub fn combine(series: &Series, forecast: &ForecastSeries) -> CombinedSeries {
    let mut points = Vec::with_capacity(series.len() + forecast.len());
    let mut total = 0.0;

    for obs in series.observations() {
        total += obs.count;
        points.push(CombinedPoint {
            date: obs.date,
            value: obs.count,
            cumulative: total,
            source: PointSource::Observed,
        });
    }
    for obs in forecast.points() {
        total += obs.count;
        points.push(CombinedPoint {
            date: obs.date,
            value: obs.count,
            cumulative: total,
            source: PointSource::Forecast,
        });
    }

    CombinedSeries { points }
}

/// First point (ascending date order) whose running total is at or above
/// `target`. A linear scan on purpose: negative forecast values can make the
/// running total dip, so binary search on it would be unsound.
pub fn first_crossing(combined: &CombinedSeries, target: f64) -> Option<CombinedPoint> {
    combined
        .points
        .iter()
        .copied()
        .find(|point| point.cumulative >= target)
}

fn format_count(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{}", rounded.abs() as i64);
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if rounded < 0.0 { format!("-{out}") } else { out }
}
