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
use std::io::Write;
use std::path::Path;

use log::{ debug, warn };

use crate::pdf::{ rasterize_first_page, RASTERIZER_AVAILABLE };
use crate::placeholder::PlaceholderRenderer;

pub const OUTPUT_DPI: f32 = 150.0;

/// Which path a conversion starts on. Picked once per run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Rasterize the PDF, falling back to a placeholder on failure.
    Rasterize,
    /// Placeholder only.
    Placeholder,
}

impl Strategy {
    pub fn detect(force_placeholder: bool) -> Self {
        if RASTERIZER_AVAILABLE && !force_placeholder {
            Strategy::Rasterize
        } else {
            Strategy::Placeholder
        }
    }

    pub fn rasterizes(self) -> bool {
        matches!(self, Strategy::Rasterize)
    }
}

pub struct ChartConverter {
    strategy: Strategy,
    placeholder: PlaceholderRenderer,
    dpi: f32,
}

impl ChartConverter {
    pub fn new(strategy: Strategy, placeholder: PlaceholderRenderer) -> Self {
        Self {
            strategy,
            placeholder,
            dpi: OUTPUT_DPI,
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Produces `dest_png` from `source_pdf`. Returns whether a PNG ended up on disk.
    ///
    /// Failures are reported on `out` and never propagated. Diagnostic lines are best
    /// effort: an error writing them does not change the outcome.
    pub fn convert<W: Write>(&self, source_pdf: &Path, dest_png: &Path, out: &mut W) -> bool {
        if self.strategy.rasterizes() {
            match rasterize_first_page(source_pdf, dest_png, self.dpi) {
                Ok(()) => {
                    return true;
                }
                Err(e) => {
                    warn!("rasterizing {} failed: {}", source_pdf.display(), e);
                    let _ = writeln!(out, "  rasterizer failed: {}", e);
                }
            }
        }

        let label = dest_png
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("chart");
        debug!("rendering placeholder for {}", label);

        match self.placeholder.render_to(label, dest_png) {
            Ok(()) => true,
            Err(e) => {
                warn!("placeholder for {} failed: {}", label, e);
                let _ = writeln!(out, "  fallback failed: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::fonts::embedded_font;

    fn renderer() -> PlaceholderRenderer {
        PlaceholderRenderer::new(embedded_font().unwrap(), OUTPUT_DPI)
    }

    fn placeholder_only() -> ChartConverter {
        ChartConverter::new(Strategy::Placeholder, renderer())
    }

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn forced_placeholder_wins() {
        assert_eq!(Strategy::detect(true), Strategy::Placeholder);
    }

    #[test]
    fn detect_follows_build() {
        assert_eq!(Strategy::detect(false).rasterizes(), RASTERIZER_AVAILABLE);
    }

    #[test]
    fn placeholder_written_for_any_source() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("05_speech_count_distribution.png");
        let mut out = Vec::new();

        assert!(placeholder_only().convert(&dir.path().join("chart.pdf"), &dest, &mut out));
        assert!(dest.exists());
        assert!(out.is_empty());
    }

    #[test]
    fn broken_pdf_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("chart.pdf");
        let dest = dir.path().join("11_correlation_matrix.png");
        std::fs::write(&src, b"%PDF-1.4 truncated").unwrap();
        let conv = ChartConverter::new(Strategy::Rasterize, renderer());
        let mut out = Vec::new();

        assert!(conv.convert(&src, &dest, &mut out));
        assert!(dest.exists());
        let log = String::from_utf8(out).unwrap();
        assert!(log.starts_with("  rasterizer failed: "));
    }

    #[test]
    fn unwritable_destination_fails() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("missing").join("a.png");
        let mut out = Vec::new();

        assert!(!placeholder_only().convert(&dir.path().join("chart.pdf"), &dest, &mut out));
        assert!(String::from_utf8(out).unwrap().contains("fallback failed"));
    }

    #[test]
    fn unwritable_report_does_not_change_outcome() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("chart.pdf");
        let dest = dir.path().join("09_rolling_betas_inflation.png");
        std::fs::write(&src, b"not a pdf").unwrap();
        let conv = ChartConverter::new(Strategy::Rasterize, renderer());

        assert!(conv.convert(&src, &dest, &mut BrokenSink));
        assert!(dest.exists());
    }
}
