use axum::{routing::{get, post}, Router};
use crate::controllers::calculator_controller::{
    // Lookup
    list_cities, list_months, get_irradiance, get_irradiance_table,
    // Calculation
    calculate_capacity, get_defaults,
};
use crate::controllers::form_controller::{show_form, submit_form};
use crate::shared_state::SharedState;

/// Build the `/api/*` sub-router.
pub fn api_routes(state: SharedState) -> Router {
    Router::new()
        .route("/cities",            get(list_cities))
        .route("/months",            get(list_months))
        .route("/irradiance",        get(get_irradiance))
        .route("/irradiance/table",  get(get_irradiance_table))
        .route("/defaults",          get(get_defaults))
        .route("/capacity",          post(calculate_capacity))
        .with_state(state)
}

/// The HTML calculator page at `/`.
pub fn form_routes(state: SharedState) -> Router {
    Router::new()
        .route("/", get(show_form).post(submit_form))
        .with_state(state)
}
