//! Opaque identity assigned by the document store.
//!
//! The store owns identity; the rest of the system only carries it around as
//! text. Sample products served from the in-process fallback have no identity.

use serde::{Deserialize, Serialize};

/// Store-assigned document identity.
///
/// Serialized transparently as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    /// Wrap an identity string assigned by the store.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Wrap a raw identity read back from a document.
    ///
    /// Returns `None` for an empty string, which the store never assigns.
    #[must_use]
    pub fn from_raw(id: &str) -> Option<Self> {
        if id.is_empty() {
            None
        } else {
            Some(Self(id.to_string()))
        }
    }

    /// Get the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ::core::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<DocumentId> for String {
    fn from(id: DocumentId) -> Self {
        id.0
    }
}
