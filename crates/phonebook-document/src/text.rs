// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Text writer — the phonebook as a fixed-width, UTF-8 plain-text table.

use std::path::Path;

use phonebook_core::error::{PhonebookError, Result};
use phonebook_core::{Directory, PhonebookConfig};
use tracing::{debug, info, instrument};

use crate::layout::TextTable;

/// Renders a [`Directory`] as an aligned two-column text table.
pub struct TextRenderer {
    table: TextTable,
}

impl TextRenderer {
    pub fn new(width: usize) -> Self {
        Self {
            table: TextTable::new(width),
        }
    }

    pub fn from_config(config: &PhonebookConfig) -> Self {
        Self::new(config.text_width)
    }

    /// Header, divider, then one line per entry, each newline-terminated.
    pub fn render(&self, directory: &Directory) -> String {
        let mut out = String::new();
        out.push_str(&self.table.header_line());
        out.push('\n');
        out.push_str(&self.table.divider());
        out.push('\n');
        for (index, entry) in directory.entries.iter().enumerate() {
            debug!(index, entry = %entry, "Rendering entry");
            out.push_str(&self.table.row_line(entry));
            out.push('\n');
        }
        out
    }

    /// Render and write to `path`, overwriting any existing file.
    #[instrument(skip(self, directory), fields(entries = directory.len()))]
    pub fn write_to_file(&self, directory: &Directory, path: &Path) -> Result<()> {
        let text = self.render(directory);
        std::fs::write(path, text.as_bytes()).map_err(|err| {
            PhonebookError::Render(format!("failed to write {}: {}", path.display(), err))
        })?;
        info!(bytes = text.len(), "Wrote phonebook text to {}", path.display());
        Ok(())
    }
}
