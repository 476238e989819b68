use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One historical data point: how many vehicles were loaded on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Observation {
    pub date: NaiveDate,
    pub count: f64,
}

/// The uploaded history. Invariant: non-empty, dates strictly ascending.
/// `ingest::parse_series` is the only producer and enforces both.
#[derive(Debug, Clone)]
pub struct Series {
    observations: Vec<Observation>,
}

impl Series {
    pub(crate) fn new(observations: Vec<Observation>) -> Self {
        debug_assert!(observations.windows(2).all(|w| w[0].date < w[1].date));
        Self { observations }
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn counts(&self) -> Vec<f64> {
        self.observations.iter().map(|obs| obs.count).collect()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.observations.first().map(|obs| obs.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.observations.last().map(|obs| obs.date)
    }
}

/// Predicted points for the days immediately after the history ends.
#[derive(Debug, Clone)]
pub struct ForecastSeries {
    points: Vec<Observation>,
}

impl ForecastSeries {
    /// Attaches consecutive dates to raw predictions, starting the day after
    /// `last_observed`.
    pub fn from_predictions(last_observed: NaiveDate, predictions: Vec<f64>) -> Self {
        let points = predictions
            .into_iter()
            .enumerate()
            .map(|(offset, count)| Observation {
                date: last_observed + chrono::Duration::days(offset as i64 + 1),
                count,
            })
            .collect();
        Self { points }
    }

    pub fn points(&self) -> &[Observation] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PointSource {
    Observed,
    Forecast,
}

/// One row of the combined history-plus-forecast table.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CombinedPoint {
    pub date: NaiveDate,
    pub value: f64,
    pub cumulative: f64,
    pub source: PointSource,
}

/// History followed by forecast in date order, with a prefix-sum column:
/// `points[i].cumulative` is the sum of `points[0..=i].value`.
#[derive(Debug, Clone)]
pub struct CombinedSeries {
    pub points: Vec<CombinedPoint>,
}

#[derive(Debug, Serialize)]
pub struct PreviewRow {
    pub delivery_date: NaiveDate,
    pub loaded_vehicles: f64,
}

#[derive(Debug, Serialize)]
pub struct UploadSummary {
    pub rows: usize,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub preview: Vec<PreviewRow>,
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub uploaded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<UploadSummary>,
}

#[derive(Debug, Deserialize)]
pub struct ForecastRequest {
    pub target: f64,
    pub horizon_days: u32,
}

#[derive(Debug, Serialize)]
pub struct CumulativePoint {
    pub date: NaiveDate,
    pub total: f64,
}

#[derive(Debug, Serialize)]
pub struct ForecastResponse {
    pub target: f64,
    pub horizon_days: u32,
    pub reached_on: Option<NaiveDate>,
    pub message: String,
    pub fit: crate::smoothing::FitSummary,
    pub daily: Vec<CombinedPoint>,
    pub cumulative: Vec<CumulativePoint>,
}
