//! Shared types for uploaded-photo references.
//!
//! A [`PhotoRef`] is what the upload transport hands back for each
//! successfully uploaded file: an opaque public identifier issued by the
//! hosting service plus a direct display URL. The collage builder consumes
//! only the identifier; the display URL exists so callers (UI, CLI preview)
//! can show the photo without building a collage first.

use serde::{Deserialize, Serialize};

/// Reference to one uploaded photo, as issued by the hosting service.
///
/// Immutable once issued. Identifiers may contain `/` (the service allows
/// folder-style ids); the wire format escapes those at serialization time,
/// never here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoRef {
    /// Opaque public identifier, e.g. `uploads/abc123`.
    pub public_id: String,
    /// Direct delivery URL for displaying the untransformed photo.
    pub display_url: String,
}

impl PhotoRef {
    pub fn new(public_id: impl Into<String>, display_url: impl Into<String>) -> Self {
        Self {
            public_id: public_id.into(),
            display_url: display_url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn photo_ref_keeps_id_verbatim() {
        let p = PhotoRef::new("uploads/a/b", "https://example.test/a-b.jpg");
        assert_eq!(p.public_id, "uploads/a/b");
        assert_eq!(p.display_url, "https://example.test/a-b.jpg");
    }
}
