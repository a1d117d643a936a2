use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use jsonwebtoken::{
    Algorithm, DecodingKey, Validation, decode, errors::ErrorKind, get_current_timestamp,
};

/// HS256 JWT validator bound to a single pre-shared secret
pub struct JwtValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtValidator {
    /// Create validator with HS256 (symmetric secret).
    ///
    /// `exp` and `nbf` are enforced when present but not required, and the
    /// audience is never checked. A token is expired once `now - leeway`
    /// reaches `exp`.
    pub fn with_hs256(secret: &[u8], leeway_secs: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();
        validation.leeway = leeway_secs;
        // Shifts the decoder's `exp < now` test to `exp <= now`.
        validation.reject_tokens_expiring_in_less_than = 1;

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Verify signature and time claims, returning the decoded claims
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                    location: ErrorLocation::from(Location::caller()),
                },
                _ => AuthError::JwtDecode {
                    source: e,
                    location: ErrorLocation::from(Location::caller()),
                },
            })?;

        self.check_issued_at(&token_data.claims)?;

        Ok(token_data.claims)
    }

    /// Without `nbf`, a token issued in the future is not yet valid.
    #[track_caller]
    fn check_issued_at(&self, claims: &Claims) -> AuthErrorResult<()> {
        if claims.nbf.is_some() {
            return Ok(());
        }

        let Some(issued_at) = claims.issued_at() else {
            return Ok(());
        };

        let latest = get_current_timestamp().saturating_add(self.validation.leeway) as f64;
        if issued_at > latest {
            return Err(AuthError::IssuedInFuture {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// Get the algorithm being used (for logging)
    pub fn algorithm(&self) -> &'static str {
        "HS256"
    }
}
