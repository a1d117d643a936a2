use hr_auth::JwtValidator;
use hr_db::DependentStore;

use std::sync::Arc;

/// Shared, immutable dependencies injected into every request
#[derive(Clone)]
pub struct AppState {
    pub jwt_validator: Arc<JwtValidator>,
    pub store: Arc<dyn DependentStore>,
}

impl AppState {
    pub fn new(jwt_validator: JwtValidator, store: Arc<dyn DependentStore>) -> Self {
        Self {
            jwt_validator: Arc::new(jwt_validator),
            store,
        }
    }
}
