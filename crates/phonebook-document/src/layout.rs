// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Layout engine — page breaks, row positions and cover placement for the PDF
// renderer, and column padding for the text renderer.
//
// All PDF geometry is in millimetres measured down from the top-left corner of
// the page; the PDF writer flips it into printpdf's bottom-left point space.
// Names are never wrapped or truncated: a name longer than its column simply
// runs past it.

use phonebook_core::{Entry, PaperSize};

use crate::font::FontFamily;

/// Fixed page geometry for content pages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width_mm: f32,
    pub height_mm: f32,
    pub margin_left_mm: f32,
    pub margin_right_mm: f32,
    /// Offset of the header row from the top edge.
    pub top_margin_mm: f32,
    pub bottom_margin_mm: f32,
    pub header_height_mm: f32,
    pub row_height_mm: f32,
    pub name_column_mm: f32,
    /// Font size for the header and table rows.
    pub body_font_pt: f32,
}

impl PageGeometry {
    pub fn from_paper(paper: PaperSize) -> Self {
        let (w, h) = paper.dimensions_mm();
        Self {
            width_mm: w as f32,
            height_mm: h as f32,
            margin_left_mm: 10.0,
            margin_right_mm: 10.0,
            top_margin_mm: 15.0,
            bottom_margin_mm: 20.0,
            header_height_mm: 15.0,
            row_height_mm: 10.0,
            name_column_mm: 105.0,
            body_font_pt: 15.0,
        }
    }

    /// Page height minus the top and bottom margins.
    pub fn usable_height_mm(&self) -> f32 {
        self.height_mm - self.top_margin_mm - self.bottom_margin_mm
    }

    pub fn content_width_mm(&self) -> f32 {
        self.width_mm - self.margin_left_mm - self.margin_right_mm
    }

    /// Right edge of the extension column.
    pub fn right_edge_mm(&self) -> f32 {
        self.width_mm - self.margin_right_mm
    }

    /// Top of the first data row, directly below the header.
    pub fn first_row_top_mm(&self) -> f32 {
        self.top_margin_mm + self.header_height_mm
    }

    /// Rows that fit below the header before the cursor crosses the bottom
    /// margin. Always at least one so tiny pages still make progress.
    pub fn rows_per_page(&self) -> usize {
        let fit = (self.usable_height_mm() - self.header_height_mm) / self.row_height_mm;
        // Tolerate float noise when the rows fill the page exactly.
        (fit + 1e-4).floor().max(1.0) as usize
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::from_paper(PaperSize::A4)
    }
}

/// One table row on a content page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowSlot {
    /// Index into the directory's entries.
    pub entry_index: usize,
    pub top_mm: f32,
    /// Whether the row gets a background fill.
    pub banded: bool,
}

/// A content page: header at the top offset followed by its rows.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentPage {
    pub header_top_mm: f32,
    pub rows: Vec<RowSlot>,
}

/// Split `entry_count` rows over content pages.
///
/// The row cursor starts below the header, advances one row height per entry
/// and resets on a fresh page when the next row would cross the bottom margin.
/// At least one page is always produced.
pub fn paginate(geometry: &PageGeometry, entry_count: usize) -> Vec<ContentPage> {
    let per_page = geometry.rows_per_page();
    let mut pages = Vec::with_capacity(entry_count.div_ceil(per_page).max(1));

    let mut current = ContentPage {
        header_top_mm: geometry.top_margin_mm,
        rows: Vec::with_capacity(per_page.min(entry_count)),
    };
    for entry_index in 0..entry_count {
        if current.rows.len() == per_page {
            pages.push(std::mem::replace(
                &mut current,
                ContentPage {
                    header_top_mm: geometry.top_margin_mm,
                    rows: Vec::with_capacity(per_page),
                },
            ));
        }
        let slot = current.rows.len();
        current.rows.push(RowSlot {
            entry_index,
            top_mm: geometry.first_row_top_mm() + slot as f32 * geometry.row_height_mm,
            banded: slot % 2 == 1,
        });
    }
    pages.push(current);
    pages
}

/// Vertical text baseline for a single line centred in a cell.
pub fn baseline_in_cell(top_mm: f32, height_mm: f32, size_pt: f32) -> f32 {
    // Cap height of the standard fonts is roughly 0.7 em.
    top_mm + height_mm / 2.0 + 0.35 * size_pt * crate::font::PT_TO_MM
}

/// A rectangle in page millimetres (top-left origin).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x_mm: f32,
    pub y_mm: f32,
    pub width_mm: f32,
    pub height_mm: f32,
}

/// A single line of text placed on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPlacement {
    pub text: String,
    pub x_mm: f32,
    pub baseline_mm: f32,
    pub size_pt: f32,
    pub bold: bool,
}

/// Cover page placement: logo, title and subtitle, all horizontally centred.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverLayout {
    pub logo: Rect,
    pub title: TextPlacement,
    pub subtitle: TextPlacement,
}

pub const COVER_LOGO_WIDTH_MM: f32 = 105.0;
const COVER_OFFSET_MM: f32 = 30.0;
const COVER_TITLE_PT: f32 = 30.0;
const COVER_SUBTITLE_PT: f32 = 20.0;

/// Place the cover elements for a logo of `logo_px` native pixels.
///
/// The logo keeps its aspect ratio at a fixed width; the title sits 30 mm
/// below the logo and the subtitle 20 mm below the title.
pub fn layout_cover(
    geometry: &PageGeometry,
    font: FontFamily,
    logo_px: (u32, u32),
    title: &str,
    subtitle: &str,
) -> CoverLayout {
    let (px_w, px_h) = logo_px;
    let logo_height_mm = if px_w == 0 {
        0.0
    } else {
        COVER_LOGO_WIDTH_MM / px_w as f32 * px_h as f32
    };
    let logo = Rect {
        x_mm: (geometry.width_mm - COVER_LOGO_WIDTH_MM) / 2.0,
        y_mm: COVER_OFFSET_MM + 10.0,
        width_mm: COVER_LOGO_WIDTH_MM,
        height_mm: logo_height_mm,
    };

    let title_baseline = COVER_OFFSET_MM + logo_height_mm + 30.0;
    let centred = |text: &str, size_pt: f32, bold: bool, baseline_mm: f32| TextPlacement {
        text: text.to_string(),
        x_mm: (geometry.width_mm - font.text_width_mm(text, size_pt, bold)) / 2.0,
        baseline_mm,
        size_pt,
        bold,
    };

    CoverLayout {
        logo,
        title: centred(title, COVER_TITLE_PT, true, title_baseline),
        subtitle: centred(subtitle, COVER_SUBTITLE_PT, false, title_baseline + 20.0),
    }
}

// -- Text table -----------------------------------------------------------------

/// Fixed-width two-column table for the plain-text renderer.
///
/// Widths are counted in `char`s, not bytes, so multi-byte names line up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextTable {
    pub width: usize,
}

impl TextTable {
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    pub fn header_line(&self) -> String {
        self.pad_columns("Name", "Extension")
    }

    pub fn divider(&self) -> String {
        "-".repeat(self.width)
    }

    pub fn row_line(&self, entry: &Entry) -> String {
        self.pad_columns(&entry.name, &entry.extension.to_string())
    }

    /// `left` flush left, `right` flush right, spaces between.
    ///
    /// When both do not fit, a single space separates them and the line
    /// exceeds the table width.
    pub fn pad_columns(&self, left: &str, right: &str) -> String {
        let used = left.chars().count() + right.chars().count();
        let gap = self.width.saturating_sub(used).max(1);
        let mut line = String::with_capacity(left.len() + gap + right.len());
        line.push_str(left);
        line.extend(std::iter::repeat_n(' ', gap));
        line.push_str(right);
        line
    }
}

impl Default for TextTable {
    fn default() -> Self {
        Self::new(80)
    }
}
