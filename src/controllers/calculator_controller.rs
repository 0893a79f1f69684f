use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};

use std::sync::Arc;

use crate::config::Config;
use crate::error::AppError;
use crate::models::capacity::{CalculatorDefaults, CapacityRequest, CapacityResponse};
use crate::models::irradiance::{City, IrradianceQuery, IrradianceResponse, IrradianceRow, Month};
use crate::services::calculator_service;
use crate::services::irradiance_table::IrradianceTable;

/// GET /api/cities
/// List selectable cities
///
/// Cities in the order the form offers them.
#[utoipa::path(
    get,
    path = "/api/cities",
    responses(
        (status = 200, description = "Supported cities", body = Vec<City>)
    )
)]
pub async fn list_cities() -> impl IntoResponse {
    Json(City::ALL.to_vec())
}

/// GET /api/months
/// List selectable months
///
/// French month names in form order (darkest to sunniest).
#[utoipa::path(
    get,
    path = "/api/months",
    responses(
        (status = 200, description = "Supported months", body = Vec<Month>)
    )
)]
pub async fn list_months() -> impl IntoResponse {
    Json(Month::ALL.to_vec())
}

/// GET /api/irradiance
/// Look up irradiance for a city/month selection
///
/// Returns `null` irradiance while either selector is missing or blank.
#[utoipa::path(
    get,
    path = "/api/irradiance",
    params(IrradianceQuery),
    responses(
        (status = 200, description = "Irradiance for the selection", body = IrradianceResponse),
        (status = 400, description = "Unknown city or month")
    )
)]
pub async fn get_irradiance(
    State(table): State<&'static IrradianceTable>,
    Query(query): Query<IrradianceQuery>,
) -> Result<Json<IrradianceResponse>, AppError> {
    let (city, month) =
        calculator_service::parse_selection(query.city.as_deref(), query.month.as_deref())?;
    Ok(Json(IrradianceResponse {
        city,
        month,
        irradiance_wh_m2_day: table.lookup(month, city),
    }))
}

/// GET /api/irradiance/table
/// Full irradiance table (Wh/m²/day)
#[utoipa::path(
    get,
    path = "/api/irradiance/table",
    responses(
        (status = 200, description = "12 months × 6 cities", body = Vec<IrradianceRow>)
    )
)]
pub async fn get_irradiance_table(
    State(table): State<&'static IrradianceTable>,
) -> impl IntoResponse {
    Json(table.rows())
}

/// GET /api/defaults
/// Form defaults and loss factors in effect
#[utoipa::path(
    get,
    path = "/api/defaults",
    responses(
        (status = 200, description = "Defaults", body = CalculatorDefaults)
    )
)]
pub async fn get_defaults(State(config): State<Arc<Config>>) -> impl IntoResponse {
    Json(config.calculator_defaults())
}

/// POST /api/capacity
/// Compute the required PV capacity
///
/// Irradiance comes from `solar_irradiance` when given, otherwise from the
/// table entry for `city` and `month`. Inputs are not range-checked: zero
/// irradiance yields a `null` capacity and `"Infinity"` display.
#[utoipa::path(
    post,
    path = "/api/capacity",
    request_body = CapacityRequest,
    responses(
        (status = 200, description = "Capacity and intermediate values", body = CapacityResponse),
        (status = 400, description = "Unknown city or month"),
        (status = 422, description = "No irradiance source")
    )
)]
pub async fn calculate_capacity(
    State(table): State<&'static IrradianceTable>,
    State(config): State<Arc<Config>>,
    Json(req): Json<CapacityRequest>,
) -> Result<Json<CapacityResponse>, AppError> {
    let response = calculator_service::calculate(&req, table, config.losses)?;
    Ok(Json(response))
}
