use chrono::Utc;

use crate::error::{AppError, Result};
use crate::models::capacity::{
    CalculationInput, CalculatorDefaults, CalculatorForm, CapacityRequest, CapacityResponse,
    LossFactors,
};
use crate::models::irradiance::{City, Month};
use crate::services::capacity_service::{breakdown, coerce_number, format_capacity};
use crate::services::irradiance_table::IrradianceTable;

/// Everything the form page needs to render one state of the calculator.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub city: Option<City>,
    pub month: Option<Month>,
    /// Echoed back verbatim so the user sees what they typed
    pub pump_power_cv: String,
    pub operation_hours: String,
    /// Derived from the selectors; 0 until both are chosen
    pub solar_irradiance: u32,
    /// Formatted capacity, present only after a submission
    pub result: Option<String>,
}

impl FormState {
    /// Initial page: nothing selected, default pump power and hours.
    pub fn initial(defaults: &CalculatorDefaults) -> Self {
        Self {
            city: None,
            month: None,
            pump_power_cv: defaults.pump_power_cv.to_string(),
            operation_hours: defaults.operation_hours.to_string(),
            solar_irradiance: 0,
            result: None,
        }
    }
}

/// Empty or unknown names leave the selector unset.
fn selector<T: std::str::FromStr>(raw: &str) -> Option<T> {
    let raw = raw.trim();
    if raw.is_empty() { None } else { raw.parse().ok() }
}

/// Form submission. Mirrors the browser behavior: no validation, the
/// irradiance stays 0 without a full selection and the result is whatever
/// the formula yields.
pub fn submit_form(
    form: &CalculatorForm,
    table: &IrradianceTable,
    losses: LossFactors,
) -> FormState {
    let city = selector::<City>(&form.city);
    let month = selector::<Month>(&form.month);
    let solar_irradiance = table.lookup(month, city).unwrap_or(0);

    let input = CalculationInput {
        pump_power_cv: coerce_number(&form.pump_power_cv),
        operation_hours: coerce_number(&form.operation_hours),
        solar_irradiance: solar_irradiance as f64,
        losses,
    };
    let capacity = breakdown(&input).capacity_kwc;

    FormState {
        city,
        month,
        pump_power_cv: form.pump_power_cv.clone(),
        operation_hours: form.operation_hours.clone(),
        solar_irradiance,
        result: Some(format_capacity(capacity)),
    }
}

/// Blank names count as "not selected"; anything else must be a known name.
fn parse_selector<T>(raw: Option<&str>) -> Result<Option<T>>
where
    T: std::str::FromStr<Err = AppError>,
{
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(name) => name.parse().map(Some),
    }
}

pub fn parse_selection(city: Option<&str>, month: Option<&str>) -> Result<(Option<City>, Option<Month>)> {
    Ok((parse_selector(city)?, parse_selector(month)?))
}

/// JSON calculation: an explicit irradiance wins over the table.
pub fn calculate(
    req: &CapacityRequest,
    table: &IrradianceTable,
    configured_losses: LossFactors,
) -> Result<CapacityResponse> {
    let (city, month) = parse_selection(req.city.as_deref(), req.month.as_deref())?;

    let solar_irradiance = match req.solar_irradiance {
        Some(value) => value,
        None => table
            .lookup(month, city)
            .map(f64::from)
            .ok_or(AppError::MissingIrradiance)?,
    };
    let losses = req.losses.unwrap_or(configured_losses);

    let input = CalculationInput {
        pump_power_cv: req.pump_power_cv,
        operation_hours: req.operation_hours,
        solar_irradiance,
        losses,
    };
    let breakdown = breakdown(&input);

    Ok(CapacityResponse {
        timestamp: Utc::now(),
        city,
        month,
        pump_power_cv: req.pump_power_cv,
        operation_hours: req.operation_hours,
        solar_irradiance,
        losses,
        capacity_kwc: breakdown.capacity_kwc,
        capacity_display: format_capacity(breakdown.capacity_kwc),
        breakdown,
    })
}
