// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Cover-page logo — decode with the `image` crate and hand printpdf raw pixels.

use std::path::Path;

use image::DynamicImage;
use phonebook_core::error::PhonebookError;
use printpdf::{RawImage, RawImageData, RawImageFormat};
use tracing::{info, instrument};

/// A decoded logo ready to be embedded in the PDF.
pub struct Logo {
    image: DynamicImage,
}

impl Logo {
    /// Load a logo from a file path (PNG, JPEG, ...).
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self, PhonebookError> {
        let image = image::open(path.as_ref()).map_err(|err| {
            PhonebookError::Image(format!(
                "failed to open logo {}: {}",
                path.as_ref().display(),
                err
            ))
        })?;
        info!(width = image.width(), height = image.height(), "Logo loaded");
        Ok(Self { image })
    }

    /// Wrap an already-decoded `DynamicImage`.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self { image }
    }

    /// Native size in pixels (width, height).
    pub fn dimensions(&self) -> (u32, u32) {
        (self.image.width(), self.image.height())
    }

    /// Pixel data in the layout printpdf expects. Alpha is kept when present.
    pub fn to_raw_image(&self) -> RawImage {
        let (width, height) = self.dimensions();
        let (pixels, data_format) = if self.image.color().has_alpha() {
            (self.image.to_rgba8().into_raw(), RawImageFormat::RGBA8)
        } else {
            (self.image.to_rgb8().into_raw(), RawImageFormat::RGB8)
        };
        RawImage {
            pixels: RawImageData::U8(pixels),
            width: width as usize,
            height: height as usize,
            data_format,
            tag: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};

    #[test]
    fn opens_png_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logo.png");
        RgbImage::from_pixel(40, 20, Rgb([200, 10, 10]))
            .save(&path)
            .unwrap();

        let logo = Logo::open(&path).unwrap();
        assert_eq!(logo.dimensions(), (40, 20));
    }

    #[test]
    fn missing_logo_is_image_error() {
        let err = Logo::open("/definitely/not/here.png").err().unwrap();
        assert!(matches!(err, PhonebookError::Image(_)));
    }

    #[test]
    fn raw_image_keeps_alpha() {
        let rgba = Logo::from_dynamic(DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            3,
            2,
            Rgba([0, 0, 0, 128]),
        )));
        let raw = rgba.to_raw_image();
        assert!(matches!(raw.data_format, RawImageFormat::RGBA8));
        assert!(matches!(raw.pixels, RawImageData::U8(ref p) if p.len() == 3 * 2 * 4));

        let rgb = Logo::from_dynamic(DynamicImage::ImageRgb8(RgbImage::new(3, 2)));
        assert!(matches!(rgb.to_raw_image().data_format, RawImageFormat::RGB8));
    }
}
