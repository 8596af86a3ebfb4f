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
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while turning one chart into a PNG.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("could not load PDF {path}: {reason}")]
    PdfLoad { path: PathBuf, reason: String },

    #[error("PDF {0} has no pages")]
    EmptyPdf(PathBuf),

    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("invalid font data in {0}")]
    InvalidFont(PathBuf),

    #[error("rasterizer not compiled in")]
    RasterizerUnavailable,
}

pub type Result<T> = std::result::Result<T, ConvertError>;
