use std::sync::Arc;

use crate::{config::AppConfig, services::ServiceContext};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub services: ServiceContext,
}

impl AppState {
    pub fn new(config: AppConfig, services: ServiceContext) -> Arc<Self> {
        Arc::new(Self { config, services })
    }
}

#[cfg(test)]
mod tests {
    use super::AppState;
    use crate::{config::AppConfig, services::ServiceContext};

    #[test]
    fn bind_address_comes_from_the_shared_config() {
        let mut config = AppConfig::default();
        config.general.host = "0.0.0.0".to_string();
        config.general.port = 8081;

        let state = AppState::new(config, ServiceContext::in_memory());

        assert_eq!(state.config.bind_address(), "0.0.0.0:8081");
    }
}
