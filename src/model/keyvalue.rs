//! Key-value change structures for tag and parameter diffs.

use serde::{Deserialize, Serialize};

/// One added, removed or modified key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct KeyValueChange {
    pub key: String,
    /// New value (or the removed value for removals)
    pub value: String,
    /// Previous value; present only for modifications
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_value: Option<String>,
}

impl KeyValueChange {
    pub fn added(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            old_value: None,
        }
    }

    pub fn removed(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            old_value: None,
        }
    }

    pub fn modified(
        key: impl Into<String>,
        value: impl Into<String>,
        old_value: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            old_value: Some(old_value.into()),
        }
    }
}

/// A set-diff over two flat string-keyed maps.
///
/// Ordering within each list follows the iteration order of the "next"
/// map (insertion order).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValueChanges {
    pub added: Vec<KeyValueChange>,
    pub removed: Vec<KeyValueChange>,
    pub modified: Vec<KeyValueChange>,
}

impl KeyValueChanges {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.modified.is_empty()
    }
}
