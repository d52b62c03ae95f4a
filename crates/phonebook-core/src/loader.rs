// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Loader — parse a phonebook XML file into a `Directory`.
//
// Expected shape:
//
//   <phonebook>
//     <event>Event X</event>
//     <entries>
//       <entry><name>Bob</name><extension>5</extension></entry>
//     </entries>
//   </phonebook>
//
// The root element name is not checked and unknown elements are ignored, also
// between `<entry>` items. Several `<entries>` blocks are concatenated in
// document order. Absent fields fall back to empty / zero.

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info, instrument};

use crate::error::{PhonebookError, Result};
use crate::types::{Directory, Entry};

#[derive(Debug, Deserialize)]
struct RawPhonebook {
    #[serde(default)]
    event: Option<String>,
    #[serde(default, rename = "entries")]
    blocks: Vec<RawEntries>,
}

#[derive(Debug, Deserialize)]
struct RawEntries {
    #[serde(default, rename = "entry")]
    entries: Vec<RawEntry>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    extension: Option<String>,
}

impl RawEntry {
    fn into_entry(self, index: usize) -> Result<Entry> {
        let name = self.name.map(|n| n.trim().to_string()).unwrap_or_default();
        let extension = match self.extension.as_deref().map(str::trim) {
            None | Some("") => 0,
            Some(text) => text.parse::<i64>().map_err(|_| {
                PhonebookError::Parse(format!(
                    "entry {}: extension '{}' is not a number",
                    index + 1,
                    text
                ))
            })?,
        };
        Ok(Entry { name, extension })
    }
}

/// Read and parse the phonebook at `path`.
///
/// I/O failures surface as [`PhonebookError::Read`]; structural problems as
/// [`PhonebookError::Parse`].
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_directory(path: impl AsRef<Path>) -> Result<Directory> {
    let path = path.as_ref();
    let body = std::fs::read_to_string(path).map_err(|source| PhonebookError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let directory = parse_directory(&body)?;
    info!(
        label = %directory.label,
        entries = directory.len(),
        "Phonebook loaded"
    );
    Ok(directory)
}

/// Parse phonebook XML held in memory.
pub fn parse_directory(xml: &str) -> Result<Directory> {
    let raw: RawPhonebook = quick_xml::de::from_str(xml)?;

    let entries = raw
        .blocks
        .into_iter()
        .flat_map(|block| block.entries)
        .enumerate()
        .map(|(index, raw)| raw.into_entry(index))
        .collect::<Result<Vec<_>>>()?;

    debug!(count = entries.len(), "Parsed phonebook entries");

    Ok(Directory {
        label: raw.event.map(|e| e.trim().to_string()).unwrap_or_default(),
        entries,
    })
}
