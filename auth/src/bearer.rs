//! Bearer credential extraction from an `Authorization` header value.

use crate::error::{auth_error, Error, ErrorKind};

const BEARER_PREFIX: &str = "bearer ";

/// Returns the token carried by a `Bearer <token>` header value.
///
/// The scheme is matched case-insensitively and the token is everything after
/// the first space.
pub fn extract_bearer_token(header_value: Option<&str>) -> Result<&str, Error> {
    let value = match header_value {
        Some(value) if !value.is_empty() => value,
        _ => {
            return Err(Error {
                source: None,
                error_kind: ErrorKind::MissingCredential,
            })
        }
    };

    let has_prefix = value
        .get(..BEARER_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(BEARER_PREFIX));
    if !has_prefix {
        return Err(auth_error(
            ErrorKind::MalformedCredential,
            "Invalid authentication header",
        ));
    }

    match value.split_once(' ') {
        Some((_, token)) if !token.is_empty() => Ok(token),
        _ => Err(auth_error(
            ErrorKind::MalformedCredential,
            "Authentication header carries no token",
        )),
    }
}
