//! Bearer token verification against the identity provider's key set.

use std::time::Duration;

use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use log::*;

use crate::bearer::extract_bearer_token;
use crate::certificate::certificate_to_pem;
use crate::claims::Claims;
use crate::decision::AuthorizationDecision;
use crate::error::{auth_error, Error, ErrorKind};
use crate::http::build_client;
use crate::jwks::KeySetClient;

/// Settings for a [`Verifier`].
#[derive(Clone, Debug, Default)]
pub struct VerifierConfig {
    /// The provider's `/.well-known/jwks.json` URL.
    pub jwks_url: String,
    /// Required `iss` claim, if any.
    pub issuer: Option<String>,
    /// Required `aud` claim, if any. The audience is not checked when unset.
    pub audience: Option<String>,
    /// How long a fetched key set may be reused; `None` fetches on every call.
    pub cache_ttl: Option<Duration>,
}

/// Verifies RS256 identity tokens and turns the outcome into an
/// [`AuthorizationDecision`].
///
/// Build one per process and share it; it holds no per-request state.
pub struct Verifier {
    key_sets: KeySetClient,
    validation: Validation,
}

impl Verifier {
    pub fn new(config: VerifierConfig) -> Result<Self, Error> {
        let client = build_client()?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: reqwest::Client, config: VerifierConfig) -> Self {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.validate_nbf = true;
        match &config.audience {
            Some(audience) => validation.set_audience(&[audience]),
            None => validation.validate_aud = false,
        }
        if let Some(issuer) = &config.issuer {
            validation.set_issuer(&[issuer]);
        }

        Self {
            key_sets: KeySetClient::new(client, config.jwks_url, config.cache_ttl),
            validation,
        }
    }

    /// Decides whether the request carrying `authorization_header` may proceed.
    ///
    /// Never fails: every verification error becomes a deny decision whose
    /// reason is logged and kept on the decision for diagnostics.
    pub async fn authorize(&self, authorization_header: Option<&str>) -> AuthorizationDecision {
        debug!("Authorizing a user");

        match self.verify(authorization_header).await {
            Ok(claims) => {
                info!("User was authorized: {}", claims.sub);
                AuthorizationDecision::allow(claims.sub)
            }
            Err(e) => {
                error!("User not authorized: {e}");
                AuthorizationDecision::deny(e.error_kind)
            }
        }
    }

    /// Verifies the bearer token in `authorization_header` and returns its claims.
    pub async fn verify(&self, authorization_header: Option<&str>) -> Result<Claims, Error> {
        let token = extract_bearer_token(authorization_header)?;

        let header = decode_header(token).map_err(|e| Error {
            source: Some(Box::new(e)),
            error_kind: ErrorKind::MalformedToken,
        })?;
        let kid = header
            .kid
            .ok_or_else(|| auth_error(ErrorKind::MalformedToken, "Token header has no kid"))?;

        let key_set = self.key_sets.fetch().await?;

        let signing_key = key_set.find(&kid).ok_or_else(|| {
            auth_error(
                ErrorKind::UnknownSigningKey,
                &format!("Unable to find a signing key that matches: {kid}"),
            )
        })?;
        let certificate = signing_key.x5c.first().ok_or_else(|| {
            auth_error(
                ErrorKind::UnknownSigningKey,
                &format!("Signing key {kid} carries no certificate"),
            )
        })?;

        let pem = certificate_to_pem(certificate);
        let decoding_key = DecodingKey::from_rsa_pem(pem.as_bytes()).map_err(|e| Error {
            source: Some(Box::new(e)),
            error_kind: ErrorKind::SignatureInvalid,
        })?;

        let token_data = decode::<Claims>(token, &decoding_key, &self.validation).map_err(|e| {
            Error {
                source: Some(Box::new(e)),
                error_kind: ErrorKind::SignatureInvalid,
            }
        })?;

        Ok(token_data.claims)
    }

    pub fn jwks_url(&self) -> &str {
        self.key_sets.url()
    }
}
