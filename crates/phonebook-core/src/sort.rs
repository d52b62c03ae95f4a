// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Sorter — order phonebook entries by name or by extension.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::types::{Directory, Entry};

/// Ordering applied to the phonebook before rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    /// Case-insensitive lexicographic on the name.
    ByName,
    /// Numeric ascending on the extension.
    ByExtension,
}

impl SortKey {
    /// Resolve a user-supplied selector. Returns `None` for anything unknown.
    pub fn parse(selector: &str) -> Option<Self> {
        match selector.trim().to_ascii_lowercase().as_str() {
            "name" | "by-name" => Some(Self::ByName),
            "extension" | "by-extension" => Some(Self::ByExtension),
            _ => None,
        }
    }

    pub fn comparator(self) -> fn(&Entry, &Entry) -> Ordering {
        match self {
            Self::ByName => compare_by_name,
            Self::ByExtension => compare_by_extension,
        }
    }

    /// Stable in-place sort: equal keys keep their load order.
    pub fn sort(self, entries: &mut [Entry]) {
        entries.sort_by(self.comparator());
    }
}

pub fn compare_by_name(a: &Entry, b: &Entry) -> Ordering {
    a.name
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.name.chars().flat_map(char::to_lowercase))
}

pub fn compare_by_extension(a: &Entry, b: &Entry) -> Ordering {
    a.extension.cmp(&b.extension)
}

/// Sort `directory` by the key named in `selector`.
///
/// An unrecognised selector is reported as a warning and leaves the entries in
/// load order.
pub fn sort_directory(directory: &mut Directory, selector: &str) -> Option<SortKey> {
    match SortKey::parse(selector) {
        Some(key) => {
            key.sort(&mut directory.entries);
            info!(key = ?key, entries = directory.len(), "Phonebook sorted");
            Some(key)
        }
        None => {
            warn!(
                sort = selector,
                "unsupported sort option, keeping original order (expected 'name' or 'extension')"
            );
            None
        }
    }
}
