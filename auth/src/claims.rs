use serde::{Deserialize, Serialize};

/// Claims read from a verified identity token.
///
/// Only `sub` is required here; `exp` is required by the validation rules
/// instead, so a token without it fails as an invalid signature rather than a
/// decoding error.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject, the identity provider's user id (e.g. `auth0|5f7c8ec7c33c6c004bbafe82`).
    pub sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbf: Option<u64>,
}
