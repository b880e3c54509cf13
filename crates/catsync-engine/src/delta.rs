//! Set-difference between the source collection and the destination
//! identity set.

use catsync_core::{IdentityKey, IdentitySet};

/// Keep the source records whose identity is absent downstream.
///
/// Source order is preserved. Records whose identifier derives no key
/// (null/absent) can never match a destination identity and are always
/// kept — unmatched identifiers are always synced.
pub fn delta<T, F>(source: Vec<T>, existing: &IdentitySet, key: F) -> Vec<T>
where
    F: Fn(&T) -> Option<IdentityKey>,
{
    source
        .into_iter()
        .filter(|record| match key(record) {
            Some(k) => !existing.contains(&k),
            None => true,
        })
        .collect()
}
