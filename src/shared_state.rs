use std::sync::Arc;

use axum::extract::FromRef;

use crate::config::Config;
use crate::services::irradiance_table::{IrradianceTable, IRRADIANCE};

/// Router state. Handlers pull the piece they need (`State<Arc<Config>>`,
/// `State<&'static IrradianceTable>`) through `FromRef`.
#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<Config>,
    pub table: &'static IrradianceTable,
}

impl SharedState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            table: &IRRADIANCE,
        }
    }
}

impl FromRef<SharedState> for Arc<Config> {
    fn from_ref(state: &SharedState) -> Self {
        state.config.clone()
    }
}

impl FromRef<SharedState> for &'static IrradianceTable {
    fn from_ref(state: &SharedState) -> Self {
        state.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substates_share_the_same_data() {
        let mut config = Config::default();
        config.server.port = 8123;
        let shared = SharedState::new(config);

        let config: Arc<Config> = FromRef::from_ref(&shared);
        assert_eq!(config.server.port, 8123);
        assert!(Arc::ptr_eq(&config, &shared.config));

        let table: &'static IrradianceTable = FromRef::from_ref(&shared);
        assert!(std::ptr::eq(table, &IRRADIANCE));
    }
}
