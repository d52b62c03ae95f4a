// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Built-in PDF font families, approximate metrics, and WinAnsi transliteration.
//
// The standard 14 fonts carry no embedded metrics in printpdf's data model, so
// widths are estimated from typical per-glyph advances (in em). Good enough to
// centre a title or right-align a number.

use printpdf::BuiltinFont;
use tracing::warn;

/// Font families available without embedding a font file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontFamily {
    #[default]
    Helvetica,
    Times,
    Courier,
}

impl FontFamily {
    /// Map a user-supplied family name onto a built-in font.
    ///
    /// Unknown names fall back to Helvetica with a warning.
    pub fn resolve(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "arial" | "helvetica" | "sans" | "sans-serif" => Self::Helvetica,
            "times" | "times new roman" | "times-roman" | "serif" => Self::Times,
            "courier" | "courier new" | "mono" | "monospace" => Self::Courier,
            _ => {
                warn!(font = name, "unknown font family, falling back to Helvetica");
                Self::Helvetica
            }
        }
    }

    pub fn builtin(self, bold: bool) -> BuiltinFont {
        match (self, bold) {
            (Self::Helvetica, false) => BuiltinFont::Helvetica,
            (Self::Helvetica, true) => BuiltinFont::HelveticaBold,
            (Self::Times, false) => BuiltinFont::TimesRoman,
            (Self::Times, true) => BuiltinFont::TimesBold,
            (Self::Courier, false) => BuiltinFont::Courier,
            (Self::Courier, true) => BuiltinFont::CourierBold,
        }
    }

    /// Approximate advance of `c` in em.
    fn advance_em(self, c: char) -> f32 {
        if self == Self::Courier {
            return 0.6;
        }
        match c {
            ' ' => 0.278,
            '0'..='9' => {
                if self == Self::Times {
                    0.5
                } else {
                    0.556
                }
            }
            'i' | 'j' | 'l' | '.' | ',' | ':' | ';' | '\'' | '|' | '!' => 0.25,
            'm' | 'w' | 'M' | 'W' => 0.85,
            c if c.is_uppercase() => 0.68,
            _ => 0.5,
        }
    }

    /// Estimated rendered width of `text` in millimetres at `size_pt`.
    pub fn text_width_mm(self, text: &str, size_pt: f32, bold: bool) -> f32 {
        let em: f32 = text.chars().map(|c| self.advance_em(c)).sum();
        let weight = if bold { 1.05 } else { 1.0 };
        em * weight * size_pt * PT_TO_MM
    }
}

/// Millimetres per typographic point.
pub const PT_TO_MM: f32 = 0.352_778;

/// Reduce `text` to the WinAnsi repertoire of the built-in fonts.
///
/// Latin-1 passes through, common typographic punctuation is folded to ASCII,
/// everything else becomes `?`.
pub fn transliterate(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' | '\u{201A}' => '\'',
            '\u{201C}' | '\u{201D}' | '\u{201E}' => '"',
            '\u{2013}' | '\u{2014}' | '\u{2212}' => '-',
            '\u{2026}' => '.',
            '\u{00A0}' | '\u{2009}' | '\u{202F}' => ' ',
            c if (c as u32) < 0x20 => ' ',
            // C1 controls occupy the WinAnsi slots of unrelated glyphs.
            '\u{80}'..='\u{9F}' => '?',
            c if (c as u32) <= 0xFF => c,
            _ => '?',
        })
        .collect()
}
