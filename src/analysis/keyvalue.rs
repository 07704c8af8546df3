//! Generic set-diff over two flat string-keyed maps.
//!
//! Used for both stack tags and template parameters.

use indexmap::IndexMap;

use crate::model::{KeyValueChange, KeyValueChanges};

/// Split the difference between two maps into added, removed and modified
/// keys.
///
/// Membership is decided by key presence, so an explicit empty-string
/// value is a real value and distinguishable from an absent key. Added
/// and modified entries follow the iteration order of `next`; removed
/// entries follow the iteration order of `prev`.
pub fn diff_key_values(
    prev: &IndexMap<String, String>,
    next: &IndexMap<String, String>,
) -> KeyValueChanges {
    let mut changes = KeyValueChanges::default();

    for (key, value) in next {
        match prev.get(key) {
            None => changes.added.push(KeyValueChange::added(key, value)),
            Some(old) if old != value => {
                changes
                    .modified
                    .push(KeyValueChange::modified(key, value, old));
            }
            Some(_) => {}
        }
    }

    for (key, value) in prev {
        if !next.contains_key(key) {
            changes.removed.push(KeyValueChange::removed(key, value));
        }
    }

    changes
}
