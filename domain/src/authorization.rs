use std::time::Duration;

use auth::{Verifier, VerifierConfig};
use log::*;
use service::config::Config;

use crate::error::Error;

pub use auth::{AuthorizationDecision, Effect};

/// Builds the process-wide credential verifier from configuration.
pub fn verifier(config: &Config) -> Result<Verifier, Error> {
    let cache_ttl = match config.jwks_cache_ttl_secs {
        0 => None,
        secs => Some(Duration::from_secs(secs)),
    };

    info!(
        "Verifying credentials against {} (key set cache: {:?})",
        config.auth_jwks_url(),
        cache_ttl
    );

    Ok(Verifier::new(VerifierConfig {
        jwks_url: config.auth_jwks_url().to_string(),
        issuer: config.auth_issuer(),
        audience: config.auth_audience(),
        cache_ttl,
    })?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn verifier_uses_configured_jwks_url() {
        let config = Config::parse_from([
            "todo_platform_rs",
            "--auth-jwks-url",
            "https://tenant.example.com/.well-known/jwks.json",
        ]);

        let verifier = verifier(&config).unwrap();

        assert_eq!(
            verifier.jwks_url(),
            "https://tenant.example.com/.well-known/jwks.json"
        );
    }
}
