// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF writer — render the phonebook with `printpdf` 0.8.
//
// printpdf 0.8 uses a data-oriented API: documents are built by constructing
// `PdfPage` structs containing `Vec<Op>` operation lists, then serialised via
// `PdfDocument::save()`. Layout decisions (page breaks, row tops, cover
// placement) come from `crate::layout`; this module only turns them into ops.

use std::path::{Path, PathBuf};

use phonebook_core::error::{PhonebookError, Result};
use phonebook_core::{Directory, PhonebookConfig};
use printpdf::{
    Color, Line, LinePoint, Mm, Op, PaintMode, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg,
    Point, Polygon, PolygonRing, Pt, Rgb, TextItem, WindingOrder, XObjectId, XObjectTransform,
};
use tracing::{debug, info, instrument};

use crate::font::{FontFamily, transliterate};
use crate::image::Logo;
use crate::layout::{
    self, ContentPage, CoverLayout, PageGeometry, TextPlacement, baseline_in_cell, layout_cover,
};

/// Grey used behind every second table row.
const BAND_GREY: f32 = 0.9;
/// Resolution the logo's pixel size is interpreted at before scaling.
const LOGO_DPI: f32 = 150.0;

/// Renders a [`Directory`] as a paginated PDF.
pub struct PdfRenderer {
    geometry: PageGeometry,
    font: FontFamily,
    /// Cover title, also embedded as document title metadata.
    title: String,
    /// Logo for the cover page; `None` suppresses the cover.
    logo_path: Option<PathBuf>,
}

impl PdfRenderer {
    /// Build a renderer from the run configuration. Resolves the font family
    /// once so an unknown name warns a single time.
    pub fn from_config(config: &PhonebookConfig) -> Self {
        Self {
            geometry: PageGeometry::from_paper(config.paper_size),
            font: FontFamily::resolve(&config.font_family),
            title: config.title.clone(),
            logo_path: config.cover_page.then(|| config.logo.clone()),
        }
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// Build the PDF and write it to `path`, overwriting any existing file.
    ///
    /// The logo is decoded before anything touches the disk, so a bad logo
    /// leaves no output behind.
    #[instrument(skip(self, directory), fields(entries = directory.len()))]
    pub fn write_to_file(&self, directory: &Directory, path: &Path) -> Result<()> {
        let logo = self.logo_path.as_ref().map(Logo::open).transpose()?;
        let bytes = self.render(directory, logo.as_ref())?;
        std::fs::write(path, &bytes).map_err(|err| {
            PhonebookError::Render(format!("failed to write {}: {}", path.display(), err))
        })?;
        info!(bytes = bytes.len(), "Wrote phonebook PDF to {}", path.display());
        Ok(())
    }

    /// Render to PDF bytes. A cover page is emitted when `logo` is given.
    pub fn render(&self, directory: &Directory, logo: Option<&Logo>) -> Result<Vec<u8>> {
        let (page_w, page_h) = (Mm(self.geometry.width_mm), Mm(self.geometry.height_mm));
        let mut doc = PdfDocument::new(&self.title);
        let mut pages: Vec<PdfPage> = Vec::new();

        if let Some(logo) = logo {
            let cover = layout_cover(
                &self.geometry,
                self.font,
                logo.dimensions(),
                &self.title,
                &directory.label,
            );
            let xobject_id = doc.add_image(&logo.to_raw_image());
            let mut ops = vec![self.logo_op(xobject_id, logo.dimensions().0, &cover)];
            self.push_text(&mut ops, &cover.title);
            self.push_text(&mut ops, &cover.subtitle);
            pages.push(PdfPage::new(page_w, page_h, ops));
        }

        let content = layout::paginate(&self.geometry, directory.len());
        for page in &content {
            pages.push(PdfPage::new(page_w, page_h, self.content_ops(directory, page)));
        }

        doc.with_pages(pages);

        debug!(
            cover = logo.is_some(),
            content_pages = content.len(),
            pages = doc.pages.len(),
            "Phonebook layout complete"
        );

        let mut warnings: Vec<PdfWarnMsg> = Vec::new();
        let output = doc.save(&PdfSaveOptions::default(), &mut warnings);
        if !warnings.is_empty() {
            debug!(count = warnings.len(), "printpdf reported warnings");
        }
        if output.is_empty() {
            return Err(PhonebookError::Render("PDF serialisation produced no data".into()));
        }

        Ok(output)
    }

    // -- Page content ---------------------------------------------------------

    fn content_ops(&self, directory: &Directory, page: &ContentPage) -> Vec<Op> {
        let g = &self.geometry;
        let size = g.body_font_pt;
        let mut ops = Vec::new();

        // Header row with a rule underneath.
        let header_baseline = baseline_in_cell(page.header_top_mm, g.header_height_mm, size);
        self.push_cell_text(&mut ops, "Name", g.margin_left_mm, header_baseline);
        self.push_right_aligned(&mut ops, "Extension", header_baseline);
        self.push_rule(&mut ops, page.header_top_mm + g.header_height_mm);

        for row in &page.rows {
            let entry = &directory.entries[row.entry_index];
            debug!(index = row.entry_index, entry = %entry, "Rendering entry");

            if row.banded {
                self.push_band(&mut ops, row.top_mm);
            }
            let baseline = baseline_in_cell(row.top_mm, g.row_height_mm, size);
            self.push_cell_text(&mut ops, &entry.name, g.margin_left_mm, baseline);
            self.push_right_aligned(&mut ops, &entry.extension.to_string(), baseline);
        }

        ops
    }

    /// Place the logo XObject so its native width scales to the cover width.
    fn logo_op(&self, id: XObjectId, px_width: u32, cover: &CoverLayout) -> Op {
        let native_w_pt = px_width.max(1) as f32 / LOGO_DPI * 72.0;
        let scale = Mm(cover.logo.width_mm).into_pt().0 / native_w_pt;
        Op::UseXobject {
            id,
            transform: XObjectTransform {
                translate_x: Some(Mm(cover.logo.x_mm).into_pt()),
                translate_y: Some(self.y_pt(cover.logo.y_mm + cover.logo.height_mm)),
                scale_x: Some(scale),
                scale_y: Some(scale),
                dpi: Some(LOGO_DPI),
                rotate: None,
            },
        }
    }

    // -- Op helpers -----------------------------------------------------------

    /// Convert a top-down millimetre offset into printpdf's bottom-up points.
    fn y_pt(&self, y_mm: f32) -> Pt {
        Mm(self.geometry.height_mm - y_mm).into_pt()
    }

    fn point(&self, x_mm: f32, y_mm: f32) -> LinePoint {
        LinePoint {
            p: Point {
                x: Mm(x_mm).into_pt(),
                y: self.y_pt(y_mm),
            },
            bezier: false,
        }
    }

    fn push_text(&self, ops: &mut Vec<Op>, placement: &TextPlacement) {
        let font = self.font.builtin(placement.bold);
        ops.push(Op::StartTextSection);
        ops.push(Op::SetTextCursor {
            pos: Point {
                x: Mm(placement.x_mm).into_pt(),
                y: self.y_pt(placement.baseline_mm),
            },
        });
        ops.push(Op::SetFontSizeBuiltinFont {
            size: Pt(placement.size_pt),
            font,
        });
        ops.push(Op::WriteTextBuiltinFont {
            items: vec![TextItem::Text(transliterate(&placement.text))],
            font,
        });
        ops.push(Op::EndTextSection);
    }

    fn push_cell_text(&self, ops: &mut Vec<Op>, text: &str, x_mm: f32, baseline_mm: f32) {
        self.push_text(
            ops,
            &TextPlacement {
                text: text.to_string(),
                x_mm,
                baseline_mm,
                size_pt: self.geometry.body_font_pt,
                bold: false,
            },
        );
    }

    fn push_right_aligned(&self, ops: &mut Vec<Op>, text: &str, baseline_mm: f32) {
        let width = self
            .font
            .text_width_mm(&transliterate(text), self.geometry.body_font_pt, false);
        let x_mm = self.geometry.right_edge_mm() - width;
        self.push_cell_text(ops, text, x_mm, baseline_mm);
    }

    fn push_rule(&self, ops: &mut Vec<Op>, y_mm: f32) {
        let g = &self.geometry;
        ops.push(Op::SaveGraphicsState);
        ops.push(Op::SetOutlineColor { col: grey(0.0) });
        ops.push(Op::SetOutlineThickness { pt: Pt(0.6) });
        ops.push(Op::DrawLine {
            line: Line {
                points: vec![self.point(g.margin_left_mm, y_mm), self.point(g.right_edge_mm(), y_mm)],
                is_closed: false,
            },
        });
        ops.push(Op::RestoreGraphicsState);
    }

    fn push_band(&self, ops: &mut Vec<Op>, top_mm: f32) {
        let g = &self.geometry;
        let (left, right) = (g.margin_left_mm, g.right_edge_mm());
        let bottom = top_mm + g.row_height_mm;
        ops.push(Op::SaveGraphicsState);
        ops.push(Op::SetFillColor {
            col: grey(BAND_GREY),
        });
        ops.push(Op::DrawPolygon {
            polygon: Polygon {
                rings: vec![PolygonRing {
                    points: vec![
                        self.point(left, top_mm),
                        self.point(right, top_mm),
                        self.point(right, bottom),
                        self.point(left, bottom),
                    ],
                }],
                mode: PaintMode::Fill,
                winding_order: WindingOrder::NonZero,
            },
        });
        ops.push(Op::RestoreGraphicsState);
    }
}

fn grey(level: f32) -> Color {
    Color::Rgb(Rgb {
        r: level,
        g: level,
        b: level,
        icc_profile: None,
    })
}
