//! HTTP client building for calls to the identity provider.

mod client;

pub(crate) use client::build_client;
