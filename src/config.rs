use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::capacity::{CalculatorDefaults, LossFactors};

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 3000 }
fn default_static_dir() -> String { "static".to_string() }
fn default_pump_power_cv() -> f64 { 75.0 }
fn default_operation_hours() -> f64 { 10.0 }

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    #[serde(default)]
    pub defaults: FormDefaults,
    #[serde(default)]
    pub losses: LossFactors,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            static_dir: default_static_dir(),
            defaults: FormDefaults::default(),
            losses: LossFactors::default(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

/// Values the form fields start with.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FormDefaults {
    #[serde(default = "default_pump_power_cv")]
    pub pump_power_cv: f64,
    #[serde(default = "default_operation_hours")]
    pub operation_hours: f64,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            pump_power_cv: default_pump_power_cv(),
            operation_hours: default_operation_hours(),
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| AppError::ConfigIo {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content).map_err(|source| AppError::ConfigParse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!("{} not found, using built-in defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn from_json(content: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    pub fn calculator_defaults(&self) -> CalculatorDefaults {
        CalculatorDefaults {
            pump_power_cv: self.defaults.pump_power_cv,
            operation_hours: self.defaults.operation_hours,
            losses: self.losses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let cfg = Config::from_json("{}").unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 3000);
        assert_eq!(cfg.static_dir, "static");
        assert_eq!(cfg.defaults.pump_power_cv, 75.0);
        assert_eq!(cfg.defaults.operation_hours, 10.0);
        assert_eq!(cfg.losses, LossFactors::default());
    }

    #[test]
    fn default_matches_empty_file() {
        let parsed = Config::from_json("{}").unwrap();
        let built = Config::default();
        assert_eq!(parsed.server.port, built.server.port);
        assert_eq!(parsed.static_dir, built.static_dir);
        assert_eq!(parsed.losses, built.losses);
        assert_eq!(parsed.defaults.pump_power_cv, built.defaults.pump_power_cv);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let cfg = Config::from_json(
            r#"{ "server": { "port": 8080 }, "losses": { "inverter_efficiency": 0.95 } }"#,
        )
        .unwrap();
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.losses.inverter_efficiency, 0.95);
        assert_eq!(cfg.losses.ac_loss, 0.03);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("pv-capacity-calculator-missing-config.json");
        let _ = std::fs::remove_file(&path);
        let cfg = Config::load_or_default(&path).unwrap();
        assert_eq!(cfg.server.port, 3000);
        assert!(matches!(Config::load(&path), Err(AppError::ConfigIo { .. })));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = std::env::temp_dir().join("pv-capacity-calculator-bad-config.json");
        std::fs::write(&path, "{ not json").unwrap();
        let result = Config::load_or_default(&path);
        let _ = std::fs::remove_file(&path);
        assert!(matches!(result, Err(AppError::ConfigParse { .. })));
    }
}
