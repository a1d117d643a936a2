//! Bearer credential extraction from request headers

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use http::{HeaderMap, header::AUTHORIZATION};

const BEARER: &str = "Bearer";

/// Resolve the raw `Authorization` value.
///
/// Header names are case-insensitive, so `Authorization` and `authorization`
/// are one lookup. Only the request's own headers are consulted. A header
/// that is empty or not visible ASCII counts as absent.
#[track_caller]
pub fn authorization_value(headers: &HeaderMap) -> AuthErrorResult<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| AuthError::MissingHeader {
            location: ErrorLocation::from(Location::caller()),
        })
}

/// Pull the token out of a `Bearer <token>` credential.
///
/// The scheme may appear anywhere in the value and must be followed by a
/// single whitespace character and a run of non-whitespace characters; the
/// run is the token.
#[track_caller]
pub fn extract_bearer_token(value: &str) -> AuthErrorResult<&str> {
    for (start, _) in value.match_indices(BEARER) {
        let rest = &value[start + BEARER.len()..];

        let Some(separator) = rest.chars().next() else {
            continue;
        };
        if !separator.is_whitespace() {
            continue;
        }

        let token_start = separator.len_utf8();
        let token_len = rest[token_start..]
            .find(char::is_whitespace)
            .unwrap_or(rest.len() - token_start);

        if token_len > 0 {
            return Ok(&rest[token_start..token_start + token_len]);
        }
    }

    Err(AuthError::InvalidScheme {
        location: ErrorLocation::from(Location::caller()),
    })
}
