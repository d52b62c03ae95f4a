// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// phonebook-document — Layout and rendering for the phonebook printer.
//
// Provides the layout engine (pagination, cover placement, text column
// padding), logo loading, and the two output strategies: a paginated PDF with
// cover page and banded rows, and a fixed-width plain-text table.

pub mod font;
pub mod image;
pub mod layout;
pub mod pdf;
pub mod render;
pub mod text;

// Re-export the primary structs so callers can use `phonebook_document::Renderer` etc.
pub use font::FontFamily;
pub use crate::image::Logo;
pub use layout::{PageGeometry, TextTable};
pub use pdf::PdfRenderer;
pub use render::Renderer;
pub use text::TextRenderer;
