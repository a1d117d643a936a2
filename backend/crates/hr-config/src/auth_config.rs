use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_JWT_LEEWAY_SECS, MAX_JWT_LEEWAY_SECS,
    MIN_JWT_SECRET_LENGTH,
};

use serde::Deserialize;

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret shared with the token issuer
    pub jwt_secret: Option<String>,
    /// Clock skew tolerance applied to `exp`, `nbf` and `iat`
    pub leeway_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            leeway_secs: DEFAULT_JWT_LEEWAY_SECS,
        }
    }
}

// Hand-written so the secret never reaches a log line.
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "<redacted>"))
            .field("leeway_secs", &self.leeway_secs)
            .finish()
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let Some(secret) = self.jwt_secret.as_deref() else {
            return Err(ConfigError::auth(
                "jwt_secret is required (set JWT_SECRET or auth.jwt_secret)",
            ));
        };

        if secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::auth(format!(
                "jwt_secret must be at least {} characters, got {}",
                MIN_JWT_SECRET_LENGTH,
                secret.len()
            )));
        }

        if self.leeway_secs > MAX_JWT_LEEWAY_SECS {
            return Err(ConfigError::auth(format!(
                "auth.leeway_secs must be at most {}, got {}",
                MAX_JWT_LEEWAY_SECS, self.leeway_secs
            )));
        }

        Ok(())
    }
}
