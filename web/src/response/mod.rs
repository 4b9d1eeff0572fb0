//! JSON envelopes returned by the todo endpoints.

use serde::Serialize;

/// `{"items": [...]}`
#[derive(Debug, Serialize)]
pub struct Items<T: Serialize> {
    pub items: Vec<T>,
}

/// `{"item": ...}`
#[derive(Debug, Serialize)]
pub struct Item<T: Serialize> {
    pub item: T,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadUrl {
    pub upload_url: String,
}

/// `{}`
#[derive(Debug, Default, Serialize)]
pub struct Empty {}
