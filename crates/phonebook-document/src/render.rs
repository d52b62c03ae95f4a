// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Output strategy selection. The variant is chosen once from the configured
// output format; both variants honour the same directory-in, file-out contract.

use std::path::PathBuf;

use phonebook_core::error::Result;
use phonebook_core::{Directory, OutputFormat, PhonebookConfig};
use tracing::info;

use crate::pdf::PdfRenderer;
use crate::text::TextRenderer;

pub enum Renderer {
    Pdf(PdfRenderer),
    Text(TextRenderer),
}

impl Renderer {
    pub fn from_config(config: &PhonebookConfig) -> Self {
        match config.output_format {
            OutputFormat::Pdf => Self::Pdf(PdfRenderer::from_config(config)),
            OutputFormat::Text => Self::Text(TextRenderer::from_config(config)),
        }
    }

    /// Write `directory` to the configured output path and return that path.
    ///
    /// Entries are emitted in the order they are held; nothing is re-sorted or
    /// filtered here.
    pub fn render(&self, directory: &Directory, config: &PhonebookConfig) -> Result<PathBuf> {
        let path = config.output_path();
        info!(format = ?config.output_format, path = %path.display(), "Rendering phonebook");
        match self {
            Self::Pdf(pdf) => pdf.write_to_file(directory, &path)?,
            Self::Text(text) => text.write_to_file(directory, &path)?,
        }
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phonebook_core::Entry;

    #[test]
    fn format_selects_variant() {
        let mut config = PhonebookConfig::default();
        assert!(matches!(Renderer::from_config(&config), Renderer::Pdf(_)));
        config.output_format = OutputFormat::Text;
        assert!(matches!(Renderer::from_config(&config), Renderer::Text(_)));
    }

    #[test]
    fn text_output_lands_in_output_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let config = PhonebookConfig {
            output_format: OutputFormat::Text,
            output_dir: tmp.path().to_path_buf(),
            ..PhonebookConfig::default()
        };
        let dir = Directory::new("Event X", vec![Entry::new("Amy", 12)]);
        let path = Renderer::from_config(&config).render(&dir, &config).unwrap();
        assert_eq!(path, tmp.path().join("phonebook.txt"));
        assert!(path.exists());
        assert!(!tmp.path().join("phonebook.pdf").exists());
    }

    #[test]
    fn pdf_output_without_cover() {
        let tmp = tempfile::tempdir().unwrap();
        let config = PhonebookConfig {
            cover_page: false,
            output_dir: tmp.path().to_path_buf(),
            ..PhonebookConfig::default()
        };
        let dir = Directory::new("Event X", vec![Entry::new("Amy", 12)]);
        let path = Renderer::from_config(&config).render(&dir, &config).unwrap();
        assert_eq!(path, tmp.path().join("phonebook.pdf"));
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
