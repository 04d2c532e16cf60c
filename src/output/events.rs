//! Events reported while merging.

use serde::{Deserialize, Serialize};

/// A merge event, serialized with a `type` tag:
///
/// ```text
/// {"type":"progress","value":50}
/// {"type":"success","path":"merged.pdf"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MergeEvent {
    /// One more input has been appended. `value` is a percentage, 0 to 100.
    Progress {
        /// Percentage of inputs processed.
        value: u8,
    },
    /// The merged document has been written to `path`.
    Success {
        /// Output path as given on the command line.
        path: String,
    },
}

impl MergeEvent {
    /// Create a progress event.
    pub fn progress(value: u8) -> Self {
        Self::Progress { value }
    }

    /// Create a success event.
    pub fn success(path: impl Into<String>) -> Self {
        Self::Success { path: path.into() }
    }
}
