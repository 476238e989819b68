use crate::errors::AppError;
use crate::models::{
    ForecastRequest, ForecastResponse, PreviewResponse, PreviewRow, Series, UploadSummary,
};
use crate::pipeline;
use crate::state::AppState;
use crate::ui;
use axum::{
    Json,
    extract::{Multipart, State},
    response::Html,
};
use tracing::info;

pub const MIN_HORIZON_DAYS: u32 = 30;
pub const MAX_HORIZON_DAYS: u32 = 1095;

const PREVIEW_ROWS: usize = 5;

pub async fn index() -> Html<&'static str> {
    Html(ui::INDEX_HTML)
}

pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadSummary>, AppError> {
    let mut bytes = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| AppError::bad_request(format!("invalid multipart request: {err}")))?
    {
        if field.name() == Some("file") {
            bytes = Some(field.bytes().await.map_err(|err| {
                AppError::bad_request(format!("failed to read uploaded file: {err}"))
            })?);
            break;
        }
    }
    let bytes = bytes.ok_or_else(|| AppError::bad_request("missing `file` part"))?;

    let series = crate::ingest::parse_series(&bytes)?;
    let summary = summarize(&series);
    info!(
        rows = series.len(),
        start = %summary.start_date,
        end = %summary.end_date,
        "accepted upload"
    );

    *state.series.lock().await = Some(series);
    Ok(Json(summary))
}

pub async fn preview(State(state): State<AppState>) -> Json<PreviewResponse> {
    let guard = state.series.lock().await;
    Json(PreviewResponse {
        uploaded: guard.is_some(),
        summary: guard.as_ref().map(summarize),
    })
}

pub async fn forecast(
    State(state): State<AppState>,
    Json(payload): Json<ForecastRequest>,
) -> Result<Json<ForecastResponse>, AppError> {
    if !(MIN_HORIZON_DAYS..=MAX_HORIZON_DAYS).contains(&payload.horizon_days) {
        return Err(AppError::bad_request(format!(
            "horizon must be between {MIN_HORIZON_DAYS} and {MAX_HORIZON_DAYS} days"
        )));
    }
    if !payload.target.is_finite() || payload.target <= 0.0 {
        return Err(AppError::bad_request("target must be a positive number"));
    }

    let guard = state.series.lock().await;
    let series = guard
        .as_ref()
        .ok_or_else(|| AppError::bad_request("upload a CSV first"))?;

    let response = pipeline::run(series, payload.target, payload.horizon_days)?;
    Ok(Json(response))
}

fn summarize(series: &Series) -> UploadSummary {
    let observations = series.observations();
    UploadSummary {
        rows: series.len(),
        // Series is never empty; fall back to the epoch rather than panic.
        start_date: series.first_date().unwrap_or_default(),
        end_date: series.last_date().unwrap_or_default(),
        preview: observations
            .iter()
            .take(PREVIEW_ROWS)
            .map(|obs| PreviewRow {
                delivery_date: obs.date,
                loaded_vehicles: obs.count,
            })
            .collect(),
    }
}
