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
use chart2png::cli::Cli;
use chart2png::fonts::resolve_font;
use chart2png::{ run, ChartConverter, ChartLayout, PlaceholderRenderer, Strategy, OUTPUT_DPI };

use clap::Parser;
use colored::Colorize;
use std::io;
use std::time::Instant;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let start_time = Instant::now();

    let strategy = Strategy::detect(cli.no_rasterize);
    let font = match resolve_font(cli.font.as_deref(), cli.system_font) {
        Ok(font) => font,
        Err(e) => {
            eprintln!("{}", format!("Error: {}", e).red());
            std::process::exit(1);
        }
    };
    let placeholder = PlaceholderRenderer::new(font, OUTPUT_DPI);
    let converter = ChartConverter::new(strategy, placeholder);
    let layout = ChartLayout::from_root(&cli.root);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = run(&layout, &converter, &mut out) {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }

    log::info!("finished in {:.2} seconds", start_time.elapsed().as_secs_f32());
}
