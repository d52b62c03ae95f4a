// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the phonebook printer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PhonebookError;

/// One phonebook line: a participant name and their numeric extension.
///
/// No uniqueness is enforced; duplicate entries are kept as loaded.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub extension: i64,
}

impl Entry {
    pub fn new(name: impl Into<String>, extension: i64) -> Self {
        Self {
            name: name.into(),
            extension,
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.extension)
    }
}

/// The loaded phonebook: a label (usually the event name) and its entries.
///
/// Built once by the loader, re-ordered in place by the sorter and read-only
/// for the rest of the run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Directory {
    pub label: String,
    pub entries: Vec<Entry>,
}

impl Directory {
    pub fn new(label: impl Into<String>, entries: Vec<Entry>) -> Self {
        Self {
            label: label.into(),
            entries,
        }
    }

    /// Replace the label when an override is present.
    pub fn apply_label_override(&mut self, label: Option<&str>) {
        if let Some(label) = label.filter(|l| !l.is_empty()) {
            self.label = label.to_string();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Which artefact a run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Paginated PDF with cover page and banded rows.
    #[default]
    Pdf,
    /// Fixed-width plain-text table.
    Text,
}

impl OutputFormat {
    /// Resolve the format from the output-as-text toggle.
    pub fn from_text_flag(text: bool) -> Self {
        if text { Self::Text } else { Self::Pdf }
    }
}

/// Standard paper sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaperSize {
    #[default]
    A4,
    A5,
    Letter,
    Legal,
    Custom { width_mm: u32, height_mm: u32 },
}

impl PaperSize {
    /// Dimensions in millimetres (width, height).
    pub fn dimensions_mm(&self) -> (u32, u32) {
        match self {
            Self::A4 => (210, 297),
            Self::A5 => (148, 210),
            Self::Letter => (216, 279),
            Self::Legal => (216, 356),
            Self::Custom {
                width_mm,
                height_mm,
            } => (*width_mm, *height_mm),
        }
    }
}

impl FromStr for PaperSize {
    type Err = PhonebookError;

    /// Accepts `a4`, `a5`, `letter`, `legal` or `<width>x<height>` in mm.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a4" => Ok(Self::A4),
            "a5" => Ok(Self::A5),
            "letter" => Ok(Self::Letter),
            "legal" => Ok(Self::Legal),
            other => {
                let invalid = || PhonebookError::InvalidOption(format!("unknown paper size '{s}'"));
                let (w, h) = other.split_once('x').ok_or_else(invalid)?;
                let width_mm: u32 = w.trim().parse().map_err(|_| invalid())?;
                let height_mm: u32 = h.trim().parse().map_err(|_| invalid())?;
                if width_mm == 0 || height_mm == 0 {
                    return Err(invalid());
                }
                Ok(Self::Custom {
                    width_mm,
                    height_mm,
                })
            }
        }
    }
}
