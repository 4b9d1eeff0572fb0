//! JSON Web Key Set retrieval.
//!
//! The key set is fetched from the identity provider on every verification
//! unless a cache TTL is configured. A cached key set is never served once it
//! is older than the TTL, so a key rotated out at the provider stops verifying
//! tokens within that bound.

use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use log::*;
use serde::{Deserialize, Serialize};

use crate::error::{auth_error, Error, ErrorKind};

/// A single published signing key. Members this service does not use are ignored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Jwk {
    #[serde(default)]
    pub kid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alg: Option<String>,
    #[serde(rename = "use", default, skip_serializing_if = "Option::is_none")]
    pub key_use: Option<String>,
    /// X.509 certificate chain, base64 DER, leaf first.
    #[serde(default)]
    pub x5c: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct KeySet {
    #[serde(default)]
    pub keys: Vec<Jwk>,
}

impl KeySet {
    /// First key whose `kid` equals `kid`.
    pub fn find(&self, kid: &str) -> Option<&Jwk> {
        self.keys.iter().find(|key| key.kid.as_deref() == Some(kid))
    }
}

struct CachedKeySet {
    key_set: Arc<KeySet>,
    fetched_at: Instant,
}

/// Time-bounded key set cache keyed by JWKS URL.
pub struct KeySetCache {
    ttl: Duration,
    entries: DashMap<String, CachedKeySet>,
}

impl KeySetCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: DashMap::new(),
        }
    }

    pub fn get(&self, url: &str) -> Option<Arc<KeySet>> {
        let fresh = self.entries.get(url).and_then(|entry| {
            (entry.fetched_at.elapsed() < self.ttl).then(|| Arc::clone(&entry.key_set))
        });

        if fresh.is_none() {
            self.entries
                .remove_if(url, |_, entry| entry.fetched_at.elapsed() >= self.ttl);
        }
        fresh
    }

    pub fn insert(&self, url: &str, key_set: Arc<KeySet>) {
        self.entries.insert(
            url.to_string(),
            CachedKeySet {
                key_set,
                fetched_at: Instant::now(),
            },
        );
    }
}

/// Fetches the key set published at a JWKS URL.
pub struct KeySetClient {
    client: reqwest::Client,
    url: String,
    cache: Option<KeySetCache>,
}

impl KeySetClient {
    /// A zero or absent `cache_ttl` disables caching.
    pub fn new(client: reqwest::Client, url: String, cache_ttl: Option<Duration>) -> Self {
        let cache = cache_ttl
            .filter(|ttl| !ttl.is_zero())
            .map(KeySetCache::new);

        Self { client, url, cache }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn fetch(&self) -> Result<Arc<KeySet>, Error> {
        if let Some(key_set) = self.cache.as_ref().and_then(|cache| cache.get(&self.url)) {
            trace!("Using cached key set for {}", self.url);
            return Ok(key_set);
        }

        debug!("Fetching key set from {}", self.url);
        let key_set: KeySet = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if key_set.keys.is_empty() {
            return Err(auth_error(
                ErrorKind::KeySetUnavailable,
                "The JWKS endpoint did not contain any keys",
            ));
        }

        let key_set = Arc::new(key_set);
        if let Some(cache) = &self.cache {
            cache.insert(&self.url, Arc::clone(&key_set));
        }
        Ok(key_set)
    }
}
