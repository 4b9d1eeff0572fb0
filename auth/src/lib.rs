//! # auth
//!
//! Request authorization for the todo platform. Incoming requests carry an
//! identity token issued by a third-party provider as
//! `Authorization: Bearer <jwt>`. The [`Verifier`]:
//!
//! 1. extracts the token from the header,
//! 2. reads the token header without verifying it to learn the `kid`,
//! 3. fetches the provider's JSON Web Key Set,
//! 4. picks the key with the matching `kid`,
//! 5. rebuilds that key's `x5c` certificate as PEM,
//! 6. verifies the RS256 signature and time claims,
//!
//! and reports an [`AuthorizationDecision`] whose principal is the token's
//! `sub` on success.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use auth::{Verifier, VerifierConfig};
//!
//! # async fn example() -> Result<(), auth::Error> {
//! let verifier = Verifier::new(VerifierConfig {
//!     jwks_url: "https://tenant.auth0.com/.well-known/jwks.json".to_string(),
//!     ..Default::default()
//! })?;
//!
//! let decision = verifier.authorize(Some("Bearer eyJhbGciOi...")).await;
//! if decision.is_allowed() {
//!     println!("caller is {}", decision.principal_id());
//! }
//! # Ok(())
//! # }
//! ```

pub mod bearer;
pub mod certificate;
pub mod claims;
pub mod decision;
pub mod error;
mod http;
pub mod jwks;
pub mod verifier;

// Re-export commonly used types
pub use bearer::extract_bearer_token;
pub use certificate::certificate_to_pem;
pub use claims::Claims;
pub use decision::{AuthorizationDecision, Effect};
pub use error::{Error, ErrorKind};
pub use verifier::{Verifier, VerifierConfig};
