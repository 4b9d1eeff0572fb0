//! This module holds typed parameters for various endpoint inputs.
//!
//! Request bodies are deserialized into these types before any domain call,
//! so malformed JSON is rejected by axum's `Json` extractor.

pub(crate) mod todo;
