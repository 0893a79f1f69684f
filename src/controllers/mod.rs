pub mod calculator_controller;
pub mod form_controller;
