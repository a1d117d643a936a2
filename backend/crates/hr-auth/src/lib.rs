pub mod bearer;
pub mod claims;
pub mod error;
pub mod jwt_validator;

pub use bearer::{authorization_value, extract_bearer_token};
pub use claims::Claims;
pub use error::{AuthError, Result};
pub use jwt_validator::JwtValidator;
