use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::AppError;

// ─── Selectors ───────────────────────────────────────────────────────────────

/// Month selector. Variants are declared in form display order, which runs
/// from the darkest month to the sunniest rather than following the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Month {
    #[serde(rename = "Décembre")]
    Decembre,
    Janvier,
    Novembre,
    #[serde(rename = "Février")]
    Fevrier,
    Octobre,
    Mars,
    Septembre,
    Avril,
    #[serde(rename = "Août")]
    Aout,
    Mai,
    Juin,
    Juillet,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::Decembre,
        Month::Janvier,
        Month::Novembre,
        Month::Fevrier,
        Month::Octobre,
        Month::Mars,
        Month::Septembre,
        Month::Avril,
        Month::Aout,
        Month::Mai,
        Month::Juin,
        Month::Juillet,
    ];

    /// Display name as shown in the form.
    pub fn name(self) -> &'static str {
        match self {
            Month::Decembre => "Décembre",
            Month::Janvier => "Janvier",
            Month::Novembre => "Novembre",
            Month::Fevrier => "Février",
            Month::Octobre => "Octobre",
            Month::Mars => "Mars",
            Month::Septembre => "Septembre",
            Month::Avril => "Avril",
            Month::Aout => "Août",
            Month::Mai => "Mai",
            Month::Juin => "Juin",
            Month::Juillet => "Juillet",
        }
    }

    /// Row index into the irradiance table.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Month {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Month::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| AppError::UnknownMonth(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum City {
    Jendouba,
    Tunis,
    Gabes,
    Kairouan,
    Tozeur,
    Sfax,
}

impl City {
    pub const ALL: [City; 6] = [
        City::Jendouba,
        City::Tunis,
        City::Gabes,
        City::Kairouan,
        City::Tozeur,
        City::Sfax,
    ];

    pub fn name(self) -> &'static str {
        match self {
            City::Jendouba => "Jendouba",
            City::Tunis => "Tunis",
            City::Gabes => "Gabes",
            City::Kairouan => "Kairouan",
            City::Tozeur => "Tozeur",
            City::Sfax => "Sfax",
        }
    }

    /// Column index into the irradiance table.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for City {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        City::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| AppError::UnknownCity(s.to_string()))
    }
}

// ─── REST API types ──────────────────────────────────────────────────────────

/// Query for `GET /api/irradiance`. Empty strings count as "not selected".
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IrradianceQuery {
    /// City name, e.g. `Tunis`
    pub city: Option<String>,
    /// French month name, e.g. `Mars`
    pub month: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct IrradianceResponse {
    pub city: Option<City>,
    pub month: Option<Month>,
    /// Average daily irradiance (Wh/m²/day); `null` until both selectors are set
    pub irradiance_wh_m2_day: Option<u32>,
}

/// One row of the full table dump.
#[derive(Debug, Serialize, ToSchema)]
pub struct IrradianceRow {
    pub month: Month,
    /// City name → irradiance (Wh/m²/day), in city display order
    pub values: Vec<IrradianceCell>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct IrradianceCell {
    pub city: City,
    pub irradiance_wh_m2_day: u32,
}
