pub mod calculator_service;
pub mod capacity_service;
pub mod irradiance_table;
