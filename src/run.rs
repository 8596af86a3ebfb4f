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
use std::fs;
use std::io::{ self, Write };

use colored::Colorize;
use log::info;

use crate::charts::{ ChartLayout, RunSummary, CHART_FOLDERS };
use crate::convert::ChartConverter;

const RULE_WIDTH: usize = 60;

/// Converts every known chart, reporting progress on `out`.
///
/// Only failing to create the output directory (or to write the report) is an error;
/// per-chart problems are counted and the loop moves on.
pub fn run<W: Write>(
    layout: &ChartLayout,
    converter: &ChartConverter,
    out: &mut W
) -> io::Result<RunSummary> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "{}", rule)?;
    writeln!(out, "CONVERTING CHART PDFs TO PNGs")?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "Using rasterizer: {}", converter.strategy().rasterizes())?;

    fs::create_dir_all(&layout.output_dir)?;

    let mut summary = RunSummary {
        output_dir: layout.output_dir.clone(),
        ..Default::default()
    };

    for folder in CHART_FOLDERS {
        let pdf_path = layout.source_pdf(folder);
        let png_path = layout.output_png(folder);

        if !pdf_path.is_file() {
            writeln!(out, "{} {}: PDF not found", "[SKIP]".yellow(), folder)?;
            summary.failed += 1;
            continue;
        }

        writeln!(out, "{} {}...", "[CONV]".blue(), folder)?;
        if converter.convert(&pdf_path, &png_path, out) {
            let name = png_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            writeln!(out, "       -> {}", name)?;
            summary.converted += 1;
        } else {
            summary.failed += 1;
        }
    }

    writeln!(out, "{}", rule)?;
    writeln!(out, "Converted: {} | Failed: {}", summary.converted, summary.failed)?;
    writeln!(out, "Output: {}", summary.output_dir.display())?;
    info!("{} converted, {} failed", summary.converted, summary.failed);

    Ok(summary)
}
