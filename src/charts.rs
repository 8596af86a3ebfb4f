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
use std::path::{ Path, PathBuf };

/// Chart folders, in processing order.
pub const CHART_FOLDERS: [&str; 12] = [
    "01_scaled_macro_timeseries",
    "02_principal_components",
    "03_macro_strength_breakpoints",
    "04_inflation_index_breakpoints",
    "05_speech_count_distribution",
    "06_inflation_sentiment_combined",
    "07_rolling_betas_macro",
    "08_rolling_r2_macro",
    "09_rolling_betas_inflation",
    "10_rolling_r2_inflation",
    "11_correlation_matrix",
    "12_pca_loadings_heatmap",
];

pub const SOURCE_FILE_NAME: &str = "chart.pdf";

/// Where charts are read from and figures written to, relative to a repository root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartLayout {
    pub charts_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl ChartLayout {
    pub fn from_root(root: &Path) -> Self {
        Self {
            charts_dir: root.join("charts"),
            output_dir: root.join("docs").join("figures"),
        }
    }

    pub fn source_pdf(&self, folder: &str) -> PathBuf {
        self.charts_dir.join(folder).join(SOURCE_FILE_NAME)
    }

    pub fn output_png(&self, folder: &str) -> PathBuf {
        self.output_dir.join(format!("{}.png", folder))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub converted: usize,
    pub failed: usize,
    pub output_dir: PathBuf,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.converted + self.failed
    }
}
