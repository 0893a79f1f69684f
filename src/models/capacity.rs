use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::irradiance::{City, Month};

// ─── Core calculation types ──────────────────────────────────────────────────

/// AC/DC losses and inverter efficiency, each a fraction in [0, 1).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LossFactors {
    #[serde(default = "default_ac_loss")]
    pub ac_loss: f64,
    #[serde(default = "default_dc_loss")]
    pub dc_loss: f64,
    #[serde(default = "default_inverter_efficiency")]
    pub inverter_efficiency: f64,
}

fn default_ac_loss() -> f64 { 0.03 }
fn default_dc_loss() -> f64 { 0.01 }
fn default_inverter_efficiency() -> f64 { 0.93 }

impl Default for LossFactors {
    fn default() -> Self {
        Self {
            ac_loss: default_ac_loss(),
            dc_loss: default_dc_loss(),
            inverter_efficiency: default_inverter_efficiency(),
        }
    }
}

/// Snapshot of everything the formula needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationInput {
    /// Pump rating (CV)
    pub pump_power_cv: f64,
    /// Hours per day the pump runs
    pub operation_hours: f64,
    /// Wh/m²/day
    pub solar_irradiance: f64,
    pub losses: LossFactors,
}

/// Intermediate values of the sizing formula plus the final capacity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct CapacityBreakdown {
    pub pump_power_kw: f64,
    /// kWh/day
    pub daily_energy_kwh: f64,
    pub ipv_efficiency: f64,
    pub global_efficiency: f64,
    /// Required array capacity (kWc). Serialised as `null` when not finite.
    pub capacity_kwc: f64,
}

// ─── REST API types ──────────────────────────────────────────────────────────

/// Body of `POST /api/capacity`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CapacityRequest {
    pub pump_power_cv: f64,
    pub operation_hours: f64,
    pub city: Option<String>,
    pub month: Option<String>,
    /// Explicit irradiance (Wh/m²/day); takes precedence over city/month
    pub solar_irradiance: Option<f64>,
    /// Overrides the configured loss factors
    pub losses: Option<LossFactors>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CapacityResponse {
    pub timestamp: DateTime<Utc>,
    pub city: Option<City>,
    pub month: Option<Month>,
    pub pump_power_cv: f64,
    pub operation_hours: f64,
    pub solar_irradiance: f64,
    pub losses: LossFactors,
    pub breakdown: CapacityBreakdown,
    /// Same value as `breakdown.capacity_kwc`
    pub capacity_kwc: f64,
    /// Two-decimal rendering, e.g. `"0.15"`, `"Infinity"`, `"NaN"`
    pub capacity_display: String,
}

/// Defaults the form starts from, as served by `GET /api/defaults`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CalculatorDefaults {
    pub pump_power_cv: f64,
    pub operation_hours: f64,
    pub losses: LossFactors,
}

// ─── HTML form ───────────────────────────────────────────────────────────────

/// Raw `application/x-www-form-urlencoded` fields. Kept as strings so the
/// numeric coercion matches what a browser form submits.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalculatorForm {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub month: String,
    #[serde(default)]
    pub pump_power_cv: String,
    #[serde(default)]
    pub operation_hours: String,
}
