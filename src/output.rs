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
use std::fs::{ self, File, OpenOptions };
use std::io::{ BufWriter, Write };
use std::path::{ Path, PathBuf };

use image::codecs::png::PngEncoder;
use image::{ ExtendedColorType, ImageEncoder, RgbImage };

use crate::error::Result;

/// Sibling path the PNG is staged at before the final rename.
pub fn part_path(output_path: &Path) -> PathBuf {
    output_path.with_extension(
        output_path
            .extension()
            .and_then(|s| s.to_str())
            .map(|e| format!("{}.part", e))
            .unwrap_or_else(|| "part".into())
    )
}

struct TempGuard {
    path: PathBuf,
    keep: bool,
}

impl Drop for TempGuard {
    fn drop(&mut self) {
        if !self.keep {
            let _ = fs::remove_file(&self.path);
        }
    }
}

// Atomic writer: write to .part then rename
pub fn write_atomic<F>(output_path: &Path, encode: F) -> Result<()>
    where F: FnOnce(&mut BufWriter<File>) -> Result<()>
{
    let tmp_path = part_path(output_path);
    let mut guard = TempGuard {
        path: tmp_path.clone(),
        keep: false,
    };

    let f = OpenOptions::new().create(true).write(true).truncate(true).open(&tmp_path)?;
    let mut writer = BufWriter::new(f);

    encode(&mut writer)?;

    writer.flush()?;
    writer.get_ref().sync_all()?;
    drop(writer);

    fs::rename(&tmp_path, output_path)?;
    guard.keep = true;
    Ok(())
}

/// Writes already-encoded PNG bytes.
pub fn write_png_bytes(output_path: &Path, png: &[u8]) -> Result<()> {
    write_atomic(output_path, |w| {
        w.write_all(png)?;
        Ok(())
    })
}

pub fn write_png(output_path: &Path, img: &RgbImage) -> Result<()> {
    write_atomic(output_path, |w| {
        let enc = PngEncoder::new(w);
        enc.write_image(img, img.width(), img.height(), ExtendedColorType::Rgb8)?;
        Ok(())
    })
}
