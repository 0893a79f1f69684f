use utoipa::OpenApi;
use crate::controllers::calculator_controller;
use crate::models::{capacity, irradiance};

#[derive(OpenApi)]
#[openapi(
    paths(
        calculator_controller::list_cities,
        calculator_controller::list_months,
        calculator_controller::get_irradiance,
        calculator_controller::get_irradiance_table,
        calculator_controller::get_defaults,
        calculator_controller::calculate_capacity
    ),
    components(
        schemas(
            irradiance::City,
            irradiance::Month,
            irradiance::IrradianceResponse,
            irradiance::IrradianceRow,
            irradiance::IrradianceCell,
            capacity::LossFactors,
            capacity::CapacityRequest,
            capacity::CapacityResponse,
            capacity::CapacityBreakdown,
            capacity::CalculatorDefaults
        )
    ),
    tags(
        (name = "pv-capacity-calculator", description = "PV array sizing for solar water pumping")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_api_route_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/cities",
            "/api/months",
            "/api/irradiance",
            "/api/irradiance/table",
            "/api/defaults",
            "/api/capacity",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
