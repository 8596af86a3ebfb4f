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
use std::path::{ Path, PathBuf };

use ab_glyph::FontArc;
use log::{ debug, warn };
use walkdir::WalkDir;

use crate::error::{ ConvertError, Result };

/// DejaVu Sans, Bitstream Vera license (see assets/DejaVuSans-LICENSE.txt).
static EMBEDDED_FONT: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

/// Sans-serif faces tried in order by the system font search.
const PREFERRED_FONTS: &[&str] = &[
    "DejaVuSans.ttf",
    "LiberationSans-Regular.ttf",
    "OpenSans-Regular.ttf",
    "NotoSans-Regular.ttf",
    "FreeSans.ttf",
    "Arial.ttf",
    "arial.ttf",
    "Helvetica.ttc",
];

fn font_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![
        PathBuf::from("/usr/share/fonts"),
        PathBuf::from("/usr/local/share/fonts"),
        PathBuf::from("/System/Library/Fonts"),
        PathBuf::from("/Library/Fonts"),
        PathBuf::from("C:\\Windows\\Fonts"),
    ];
    if let Some(home) = std::env::var_os("HOME") {
        let home = PathBuf::from(home);
        dirs.push(home.join(".fonts"));
        dirs.push(home.join(".local/share/fonts"));
    }
    dirs
}

/// Walks `dirs` and returns the best-ranked font file found, if any.
pub fn find_font_in(dirs: &[PathBuf]) -> Option<PathBuf> {
    let mut best: Option<(usize, PathBuf)> = None;
    for dir in dirs.iter().filter(|d| d.is_dir()) {
        for entry in WalkDir::new(dir).follow_links(true).into_iter().flatten() {
            let Some(name) = entry.file_name().to_str() else {
                continue;
            };
            let Some(rank) = PREFERRED_FONTS.iter().position(|f| *f == name) else {
                continue;
            };
            if best.as_ref().map_or(true, |(r, _)| rank < *r) {
                best = Some((rank, entry.into_path()));
                if rank == 0 {
                    return best.map(|(_, p)| p);
                }
            }
        }
    }
    best.map(|(_, p)| p)
}

pub fn embedded_font() -> Result<FontArc> {
    FontArc::try_from_slice(EMBEDDED_FONT).map_err(|_|
        ConvertError::InvalidFont(PathBuf::from("assets/DejaVuSans.ttf"))
    )
}

pub fn load_font(path: &Path) -> Result<FontArc> {
    let data = fs::read(path)?;
    FontArc::try_from_vec(data).map_err(|_| ConvertError::InvalidFont(path.to_path_buf()))
}

/// Picks the placeholder font: `explicit`, then the system search when asked for,
/// then the embedded face. Overrides that cannot be loaded only cost a warning.
pub fn resolve_font(explicit: Option<&Path>, search_system: bool) -> Result<FontArc> {
    let candidate = match explicit {
        Some(p) => Some(p.to_path_buf()),
        None if search_system => {
            let found = find_font_in(&font_dirs());
            if found.is_none() {
                warn!("no system font found, using the embedded one");
            }
            found
        }
        None => None,
    };

    if let Some(path) = candidate {
        match load_font(&path) {
            Ok(font) => {
                debug!("placeholder font: {}", path.display());
                return Ok(font);
            }
            Err(e) => warn!("{}, using the embedded font", e),
        }
    }
    embedded_font()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ab_glyph::Font;

    #[test]
    fn embedded_font_has_latin_glyphs() {
        let font = embedded_font().unwrap();
        for c in "Chart: (View PDF for full quality)_0123456789".chars() {
            assert_ne!(font.glyph_id(c).0, 0, "missing glyph for {:?}", c);
        }
    }

    #[test]
    fn prefers_higher_ranked_font() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("truetype").join("dejavu");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("FreeSans.ttf"), b"x").unwrap();
        fs::write(nested.join("DejaVuSans.ttf"), b"x").unwrap();

        let found = find_font_in(&[dir.path().to_path_buf()]).unwrap();
        assert_eq!(found.file_name().unwrap(), "DejaVuSans.ttf");
    }

    #[test]
    fn no_match_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Comic.ttf"), b"x").unwrap();
        assert!(find_font_in(&[dir.path().to_path_buf(), dir.path().join("absent")]).is_none());
    }

    #[test]
    fn garbage_override_falls_back_to_embedded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("DejaVuSans.ttf");
        fs::write(&path, b"not a font").unwrap();

        assert!(matches!(load_font(&path), Err(ConvertError::InvalidFont(_))));
        let font = resolve_font(Some(&path), false).unwrap();
        assert_ne!(font.glyph_id('C').0, 0);
    }

    #[test]
    fn missing_override_falls_back_to_embedded() {
        let dir = tempfile::tempdir().unwrap();
        assert!(resolve_font(Some(&dir.path().join("absent.ttf")), true).is_ok());
    }
}
