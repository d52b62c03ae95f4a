// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Run configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::types::{OutputFormat, PaperSize};

/// File name of the PDF artefact, written into [`PhonebookConfig::output_dir`].
pub const PDF_OUTPUT_FILE: &str = "phonebook.pdf";
/// File name of the text artefact, written into [`PhonebookConfig::output_dir`].
pub const TEXT_OUTPUT_FILE: &str = "phonebook.txt";

/// Settings for a single run, built once at startup and shared read-only with
/// every stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhonebookConfig {
    /// Logo shown on the cover page.
    pub logo: PathBuf,
    /// Whether the cover page is emitted.
    pub cover_page: bool,
    /// Replaces the label read from the input file.
    pub label_override: Option<String>,
    /// Font family name (`Arial`, `Helvetica`, `Times`, `Courier`).
    pub font_family: String,
    /// Sort selector as given by the user; resolved by the sorter.
    pub sort_by: String,
    /// Cover page title.
    pub title: String,
    /// PDF or plain text.
    pub output_format: OutputFormat,
    /// Paper size for PDF output.
    pub paper_size: PaperSize,
    /// Total line width of the text table, in characters.
    pub text_width: usize,
    /// Directory the artefact is written into.
    pub output_dir: PathBuf,
}

impl PhonebookConfig {
    /// Full path of the artefact this configuration produces.
    pub fn output_path(&self) -> PathBuf {
        let file = match self.output_format {
            OutputFormat::Pdf => PDF_OUTPUT_FILE,
            OutputFormat::Text => TEXT_OUTPUT_FILE,
        };
        self.output_dir.join(file)
    }
}

impl Default for PhonebookConfig {
    fn default() -> Self {
        Self {
            logo: PathBuf::from("chaosvermittlung.png"),
            cover_page: true,
            label_override: None,
            font_family: "Arial".into(),
            sort_by: "name".into(),
            title: "Telefonbuch / Phonebook".into(),
            output_format: OutputFormat::Pdf,
            paper_size: PaperSize::A4,
            text_width: 80,
            output_dir: PathBuf::from("."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_follows_format() {
        let mut config = PhonebookConfig {
            output_dir: PathBuf::from("out"),
            ..PhonebookConfig::default()
        };
        assert_eq!(config.output_path(), PathBuf::from("out").join("phonebook.pdf"));
        config.output_format = OutputFormat::Text;
        assert_eq!(config.output_path(), PathBuf::from("out").join("phonebook.txt"));
    }
}
