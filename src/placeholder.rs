/*
 *     chart2png, a command-line tool converting chart PDFs into PNG figures
 *     Copyright (C) 2025-2026  Chianti GALLY
 *
 *     This program is free software: you can redistribute it and/or modify
 *     it under the terms of the GNU General Public License as published by
 *     the Free Software Foundation, either version 3 of the License, or
 *     (at your option) any later version.
 *
 *     This program is distributed in the hope that it will be useful,
 *     but WITHOUT ANY WARRANTY; without even the implied warranty of
 *     MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *     GNU General Public License for more details.
 *
 *     You should have received a copy of the GNU General Public License
 *     along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */
//! Text-only stand-in image for charts that could not be rasterized.

use std::path::Path;

use ab_glyph::{ FontArc, PxScale };
use image::imageops::crop_imm;
use image::{ ImageBuffer, Rgb, RgbImage };
use imageproc::drawing::{ draw_text_mut, text_size };

use crate::error::Result;
use crate::output::write_png;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Canvas size in inches.
pub const CANVAS_INCHES: (f32, f32) = (10.0, 6.0);
pub const FONT_POINTS: f32 = 14.0;
/// Margin kept around the text when cropping, in inches.
pub const PAD_INCHES: f32 = 0.1;
const LINE_SPACING: f32 = 1.2;

pub struct PlaceholderRenderer {
    font: FontArc,
    dpi: f32,
}

impl PlaceholderRenderer {
    pub fn new(font: FontArc, dpi: f32) -> Self {
        Self { font, dpi }
    }

    pub fn lines(label: &str) -> [String; 2] {
        [format!("Chart: {}", label), "(View PDF for full quality)".to_string()]
    }

    /// Draws the label centered on a white canvas, then crops to the text plus padding.
    pub fn render(&self, label: &str) -> RgbImage {
        let w = (CANVAS_INCHES.0 * self.dpi).round() as u32;
        let h = (CANVAS_INCHES.1 * self.dpi).round() as u32;
        let mut canvas: RgbImage = ImageBuffer::from_pixel(w, h, WHITE);
        let font = &self.font;

        let px = (FONT_POINTS * self.dpi) / 72.0;
        let scale = PxScale { x: px, y: px };
        let line_h = px * LINE_SPACING;
        let lines = Self::lines(label);
        let block_h = line_h * (lines.len() as f32);
        let mut y = ((h as f32) - block_h) / 2.0;

        for line in &lines {
            let (tw, _) = text_size(scale, font, line);
            let x = ((w as i64) - (tw as i64)) / 2;
            draw_text_mut(&mut canvas, BLACK, x.max(0) as i32, y as i32, scale, font, line);
            y += line_h;
        }

        let pad = (PAD_INCHES * self.dpi).round() as u32;
        tight_crop(&canvas, pad)
    }

    pub fn render_to(&self, label: &str, output_path: &Path) -> Result<()> {
        let img = self.render(label);
        write_png(output_path, &img)
    }
}

/// Crops `img` to its non-white content grown by `pad` pixels; a blank image is returned whole.
pub fn tight_crop(img: &RgbImage, pad: u32) -> RgbImage {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for (x, y, p) in img.enumerate_pixels() {
        if *p == WHITE {
            continue;
        }
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        });
    }

    let Some((x0, y0, x1, y1)) = bounds else {
        return img.clone();
    };

    let left = x0.saturating_sub(pad);
    let top = y0.saturating_sub(pad);
    let right = (x1 + pad).min(img.width() - 1);
    let bottom = (y1 + pad).min(img.height() - 1);
    crop_imm(img, left, top, right - left + 1, bottom - top + 1).to_image()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::embedded_font;

    #[test]
    fn crop_keeps_padding_around_ink() {
        let mut img: RgbImage = ImageBuffer::from_pixel(100, 80, WHITE);
        img.put_pixel(40, 30, BLACK);
        img.put_pixel(60, 35, BLACK);

        let cropped = tight_crop(&img, 5);

        assert_eq!((cropped.width(), cropped.height()), (31, 16));
        assert_eq!(*cropped.get_pixel(5, 5), BLACK);
        assert_eq!(*cropped.get_pixel(0, 0), WHITE);
    }

    #[test]
    fn crop_clamps_to_image_edges() {
        let mut img: RgbImage = ImageBuffer::from_pixel(20, 20, WHITE);
        img.put_pixel(0, 19, BLACK);

        let cropped = tight_crop(&img, 5);

        assert_eq!((cropped.width(), cropped.height()), (6, 6));
    }

    #[test]
    fn crop_of_blank_image_is_identity() {
        let img: RgbImage = ImageBuffer::from_pixel(7, 9, WHITE);
        assert_eq!(tight_crop(&img, 3), img);
    }

    #[test]
    fn label_lines() {
        let [first, second] = PlaceholderRenderer::lines("11_correlation_matrix");
        assert_eq!(first, "Chart: 11_correlation_matrix");
        assert_eq!(second, "(View PDF for full quality)");
    }

    #[test]
    fn render_draws_centered_text_and_crops() {
        let r = PlaceholderRenderer::new(embedded_font().unwrap(), 150.0);
        let img = r.render("02_principal_components");

        assert!(img.width() < 1500 && img.height() < 900);
        assert!(img.pixels().any(|p| *p != WHITE));
        assert_eq!(*img.get_pixel(0, 0), WHITE);
        // two lines of ~29 px text plus 15 px padding on each side
        assert!(img.height() > 50 && img.height() < 150, "height {}", img.height());
    }

    #[test]
    fn longer_label_gives_wider_image() {
        let r = PlaceholderRenderer::new(embedded_font().unwrap(), 150.0);
        let short = r.render("x");
        let long = r.render("06_inflation_sentiment_combined_with_a_long_suffix");
        assert!(long.width() > short.width());
    }
}
