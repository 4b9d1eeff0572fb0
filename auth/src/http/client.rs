//! Plain HTTP client for key set fetches.
//!
//! Key set fetches are never retried: a transient failure surfaces
//! immediately as a deny decision, so no retry middleware is installed.

fn user_agent() -> String {
    format!("todo-platform-auth/{}", env!("CARGO_PKG_VERSION"))
}

/// Builds the rustls `reqwest::Client` used to reach the key set endpoint.
pub(crate) fn build_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .use_rustls_tls()
        .user_agent(user_agent())
        .build()
}
