// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use phonebook_core::error::{PhonebookError, Result};
use phonebook_core::{OutputFormat, PaperSize, PhonebookConfig};

#[derive(Debug, Parser)]
#[command(
    name = "phonebook",
    version,
    about = "Render an event phonebook from XML into a printable PDF or a text table"
)]
pub struct Cli {
    /// Phonebook XML file
    pub file: Option<PathBuf>,

    /// Logo to appear on the front page
    #[arg(long, default_value = "chaosvermittlung.png")]
    pub logo: PathBuf,

    /// Remove the front page from the PDF
    #[arg(long = "nofrontpage")]
    pub no_front_page: bool,

    /// Override the event string from the phonebook XML
    #[arg(long)]
    pub event: Option<String>,

    /// Font to use in the phonebook (Arial, Helvetica, Times, Courier)
    #[arg(long, default_value = "Arial")]
    pub font: String,

    /// Which data to sort the phonebook by: name, extension
    #[arg(long, default_value = "name")]
    pub sort: String,

    /// Title of the front page
    #[arg(long, default_value = "Telefonbuch / Phonebook")]
    pub title: String,

    /// Write a plain-text table instead of a PDF
    #[arg(long)]
    pub text: bool,

    /// Paper size for the PDF: a4, a5, letter, legal or <width>x<height> in mm
    #[arg(long, default_value = "a4")]
    pub paper: PaperSize,

    /// Line width of the text table, in characters
    #[arg(long, default_value_t = 80)]
    pub width: usize,
}

impl Cli {
    /// Input path and the run configuration. Output always goes to the
    /// current directory.
    pub fn into_config(self) -> Result<(PathBuf, PhonebookConfig)> {
        let file = self.file.ok_or(PhonebookError::MissingInput)?;
        let config = PhonebookConfig {
            logo: self.logo,
            cover_page: !self.no_front_page,
            label_override: self.event,
            font_family: self.font,
            sort_by: self.sort,
            title: self.title,
            output_format: OutputFormat::from_text_flag(self.text),
            paper_size: self.paper,
            text_width: self.width,
            output_dir: PathBuf::from("."),
        };
        Ok((file, config))
    }
}
