//! Render a sample page content stream.
//!
//! Draws a small bordered table with mixed BMP/emoji text and a rotated
//! side label, then prints the writer statistics as JSON.
//!
//! Usage:
//!   cargo run --bin render_sample
//!   cargo run --bin render_sample -- --output page.content --config writer.json

use pdf_content_writer::fonts::Font;
use pdf_content_writer::layout::Color;
use pdf_content_writer::writer::{LineCap, PageContentStream, StatefulContentWriter};
use pdf_content_writer::{Error, Result, WriterConfig};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

struct SampleConfig {
    output: Option<PathBuf>,
    writer_config: Option<PathBuf>,
}

impl SampleConfig {
    fn from_args() -> Self {
        let args: Vec<String> = std::env::args().collect();
        let mut output = None;
        let mut writer_config = None;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--output" | "-o" => {
                    i += 1;
                    if i < args.len() {
                        output = Some(PathBuf::from(&args[i]));
                    }
                },
                "--config" => {
                    i += 1;
                    if i < args.len() {
                        writer_config = Some(PathBuf::from(&args[i]));
                    }
                },
                _ => {},
            }
            i += 1;
        }

        Self {
            output,
            writer_config,
        }
    }
}

const ROWS: [(&str, &str); 3] = [("Apples", "12"), ("Pears 🍐", "7"), ("Total", "19 ✅")];

fn render<W: Write>(sink: W, config: WriterConfig) -> Result<()> {
    let mut stream = PageContentStream::new(sink);
    let mut writer = StatefulContentWriter::with_config(&mut stream, config)?;
    writer.set_fonts(&[Font::new("Helvetica", "F1"), Font::new("NotoEmoji", "F2")], 10.0);

    let (left, top, width, row_height) = (72.0, 720.0, 300.0, 18.0);
    for (i, (label, value)) in ROWS.iter().enumerate() {
        let y = top - (i as f32 + 1.0) * row_height;

        writer.set_stroking_color(Color::from_rgb8(80, 80, 80))?;
        writer.set_line_width(0.5)?;
        writer.set_line_cap_style(LineCap::Butt)?;
        writer.set_line_dash_pattern(&[], 0.0)?;
        writer.add_rect(left, y, width, row_height)?;
        writer.stroke()?;

        writer.set_non_stroking_color(Color::black())?;
        writer.new_line_at(left + 4.0, y + 5.0)?;
        writer.show_text(label)?;
        writer.new_line_at(left + width / 2.0 + 4.0, y + 5.0)?;
        writer.show_text(value)?;
    }

    writer.set_rotated(true)?;
    writer.new_line_at(left - 8.0, top - 3.0 * row_height)?;
    writer.show_text("Inventory")?;
    writer.set_rotated(false)?;

    let stats = writer.close()?;
    let json = serde_json::to_string_pretty(&stats).unwrap_or_default();
    eprintln!("{}", json);
    Ok(())
}

fn main() {
    env_logger::init();

    let args = SampleConfig::from_args();

    let config = match &args.writer_config {
        Some(path) => match fs::read_to_string(path)
            .map_err(Error::from)
            .and_then(|json| WriterConfig::from_json(&json))
        {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load {}: {}", path.display(), e);
                std::process::exit(1);
            },
        },
        None => WriterConfig::default(),
    };

    let result = match &args.output {
        Some(path) => match File::create(path) {
            Ok(file) => render(BufWriter::new(file), config),
            Err(e) => {
                eprintln!("Failed to create {}: {}", path.display(), e);
                std::process::exit(1);
            },
        },
        None => render(io::stdout().lock(), config),
    };

    if let Err(e) = result {
        eprintln!("Render failed: {}", e);
        std::process::exit(1);
    }
}
