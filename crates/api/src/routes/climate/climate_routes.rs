use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use log::error;
use std::sync::Arc;

use crate::{
    db, last_year_window, AppState, DateWindow, Precipitation, TemperatureObservation,
    TemperatureStats, MOST_ACTIVE_STATION,
};

fn internal_error(err: db::Error) -> StatusCode {
    error!("error querying climate data: {}", err);
    StatusCode::INTERNAL_SERVER_ERROR
}

#[utoipa::path(
    get,
    path = "/api/v1.0/precipitation",
    responses(
        (status = OK, description = "Daily precipitation for the last year of data", body = Vec<Precipitation>),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to query precipitation")
    ))]
pub async fn precipitation(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Precipitation>>, StatusCode> {
    state
        .climate_db
        .precipitation(&last_year_window())
        .await
        .map(Json)
        .map_err(internal_error)
}

#[utoipa::path(
    get,
    path = "/api/v1.0/stations",
    responses(
        (status = OK, description = "Every station code in the dataset", body = Vec<String>),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to query stations")
    ))]
pub async fn stations(State(state): State<Arc<AppState>>) -> Result<Json<Vec<String>>, StatusCode> {
    state
        .climate_db
        .stations()
        .await
        .map(Json)
        .map_err(internal_error)
}

#[utoipa::path(
    get,
    path = "/api/v1.0/tobs",
    responses(
        (status = OK, description = "Temperature observations of the most active station for the last year of data", body = Vec<TemperatureObservation>),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to query temperature observations")
    ))]
pub async fn tobs(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TemperatureObservation>>, StatusCode> {
    state
        .climate_db
        .temperature_observations(MOST_ACTIVE_STATION.to_string(), &last_year_window())
        .await
        .map(Json)
        .map_err(internal_error)
}

#[utoipa::path(
    get,
    path = "/api/v1.0/{start}",
    params(
        ("start" = String, Path, description = "First day to include, YYYY-MM-DD"),
    ),
    responses(
        (status = OK, description = "Temperature statistics from the start date onward", body = Vec<TemperatureStats>),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to query temperature statistics")
    ))]
pub async fn start_stats(
    State(state): State<Arc<AppState>>,
    Path(start): Path<String>,
) -> Result<Json<Vec<TemperatureStats>>, StatusCode> {
    temperature_stats(&state, DateWindow::since(start)).await
}

#[utoipa::path(
    get,
    path = "/api/v1.0/{start}/{end}",
    params(
        ("start" = String, Path, description = "First day to include, YYYY-MM-DD"),
        ("end" = String, Path, description = "Last day to include, YYYY-MM-DD"),
    ),
    responses(
        (status = OK, description = "Temperature statistics between the start and end dates", body = Vec<TemperatureStats>),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to query temperature statistics")
    ))]
pub async fn range_stats(
    State(state): State<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<Vec<TemperatureStats>>, StatusCode> {
    temperature_stats(&state, DateWindow::between(start, end)).await
}

// Always a single-element array, even when every value is null
async fn temperature_stats(
    state: &AppState,
    window: DateWindow,
) -> Result<Json<Vec<TemperatureStats>>, StatusCode> {
    let stats = state
        .climate_db
        .temperature_stats(&window)
        .await
        .map_err(internal_error)?;
    Ok(Json(vec![stats]))
}
