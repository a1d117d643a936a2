pub mod api;
pub mod app_state;
pub mod error;
pub mod logger;
pub mod routes;


pub use api::{
    dependents::{dependents::list_dependents, response_envelope::ResponseEnvelope},
    error::ApiError,
    error::Result as ApiResult,
    extractors::authenticated_employee::AuthenticatedEmployee,
};
pub use app_state::AppState;
pub use error::{Result as ServerResult, ServerError};
pub use routes::{DEPENDENTS_PATH, build_router};
