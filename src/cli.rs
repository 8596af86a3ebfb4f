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
use clap::Parser;
use std::path::PathBuf;

const LONG_ABOUT: &str =
    "\
Convert the project's chart PDFs (charts/<chart>/chart.pdf) into PNG figures (docs/figures/<chart>.png).
The first page of each PDF is rasterized at 150 DPI. When that is not possible, a placeholder
image naming the chart is written instead.


Copyright (C) 2025-2026 Chianti GALLY

This program is free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with this program.  If not, see <https://www.gnu.org/licenses/>.
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Convert the project's chart PDFs into PNG figures for web display.",
    long_about = LONG_ABOUT
)]
pub struct Cli {
    /// Repository root containing charts/ and docs/figures/
    #[arg(short = 'r', long, default_value = ".", value_hint = clap::ValueHint::DirPath)]
    pub root: PathBuf,

    /// Font used for placeholder images instead of the bundled DejaVu Sans
    #[arg(short = 'f', long, value_hint = clap::ValueHint::FilePath)]
    pub font: Option<PathBuf>,

    /// Look for a sans-serif font in the system font directories instead of the bundled one
    #[arg(long, action, conflicts_with = "font")]
    pub system_font: bool,

    /// Always write placeholders, even when PDF rendering is available
    #[arg(long, action)]
    pub no_rasterize: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_uses_current_directory() {
        let cli = Cli::try_parse_from(["chart2png"]).unwrap();
        assert_eq!(cli.root, PathBuf::from("."));
        assert!(cli.font.is_none());
        assert!(!cli.system_font);
        assert!(!cli.no_rasterize);
    }

    #[test]
    fn flags_parse() {
        let cli = Cli::try_parse_from([
            "chart2png",
            "-r",
            "/tmp/repo",
            "--font",
            "a.ttf",
            "--no-rasterize",
        ]).unwrap();
        assert_eq!(cli.root, PathBuf::from("/tmp/repo"));
        assert_eq!(cli.font, Some(PathBuf::from("a.ttf")));
        assert!(cli.no_rasterize);
    }

    #[test]
    fn font_and_system_font_conflict() {
        assert!(Cli::try_parse_from(["chart2png", "--font", "a.ttf", "--system-font"]).is_err());
        assert!(Cli::try_parse_from(["chart2png", "--system-font"]).unwrap().system_font);
    }
}
