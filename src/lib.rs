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
pub mod charts;
pub mod cli;
pub mod convert;
pub mod error;
pub mod fonts;
pub mod output;
pub mod pdf;
pub mod placeholder;
pub mod run;

pub use charts::{ ChartLayout, RunSummary, CHART_FOLDERS };
pub use convert::{ ChartConverter, Strategy, OUTPUT_DPI };
pub use error::ConvertError;
pub use placeholder::PlaceholderRenderer;
pub use run::run;
