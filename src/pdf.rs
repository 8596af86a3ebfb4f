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
use std::path::Path;

use crate::error::Result;

/// PDF user space is 72 units per inch.
pub const PDF_POINTS_PER_INCH: f32 = 72.0;

/// Whether the PDF rasterizer was compiled into this binary.
pub const RASTERIZER_AVAILABLE: bool = cfg!(feature = "pdf-render");

/// Renders the first page of `pdf_path` at `dpi` and writes it as PNG to `output_path`.
#[cfg(feature = "pdf-render")]
pub fn rasterize_first_page(pdf_path: &Path, output_path: &Path, dpi: f32) -> Result<()> {
    use std::sync::Arc;

    use hayro::{ render, InterpreterSettings, Pdf, RenderSettings };

    use crate::error::ConvertError;
    use crate::output::write_png_bytes;

    let file = std::fs::read(pdf_path)?;

    let data = Arc::new(file);
    let pdf = Pdf::new(data).map_err(|e| ConvertError::PdfLoad {
        path: pdf_path.to_path_buf(),
        reason: format!("{:?}", e),
    })?;

    let pages = pdf.pages();
    let page = pages.first().ok_or_else(|| ConvertError::EmptyPdf(pdf_path.to_path_buf()))?;

    let interpreter_settings = InterpreterSettings::default();

    let scale = dpi / PDF_POINTS_PER_INCH;
    let render_settings = RenderSettings {
        x_scale: scale,
        y_scale: scale,
        ..Default::default()
    };

    let pixmap = render(page, &interpreter_settings, &render_settings);
    log::debug!("rasterized first page of {} at {} dpi", pdf_path.display(), dpi);

    write_png_bytes(output_path, &pixmap.take_png())
}

#[cfg(not(feature = "pdf-render"))]
pub fn rasterize_first_page(_pdf_path: &Path, _output_path: &Path, _dpi: f32) -> Result<()> {
    Err(crate::error::ConvertError::RasterizerUnavailable)
}
