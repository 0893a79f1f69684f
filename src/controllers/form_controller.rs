use axum::{
    extract::{Form, State},
    response::Html,
};

use std::sync::Arc;

use crate::config::Config;
use crate::models::capacity::CalculatorForm;
use crate::services::calculator_service::{self, FormState};
use crate::services::irradiance_table::IrradianceTable;
use crate::views::form_page;

/// GET /
/// Empty calculator with the configured defaults.
pub async fn show_form(State(config): State<Arc<Config>>) -> Html<String> {
    let defaults = config.calculator_defaults();
    Html(form_page::render(&FormState::initial(&defaults)))
}

/// POST /
/// Recompute from the submitted fields and render the page with the result.
pub async fn submit_form(
    State(table): State<&'static IrradianceTable>,
    State(config): State<Arc<Config>>,
    Form(form): Form<CalculatorForm>,
) -> Html<String> {
    let outcome = calculator_service::submit_form(&form, table, config.losses);
    tracing::info!(
        city = ?outcome.city,
        month = ?outcome.month,
        irradiance = outcome.solar_irradiance,
        result = outcome.result.as_deref().unwrap_or_default(),
        "form submitted"
    );
    Html(form_page::render(&outcome))
}
