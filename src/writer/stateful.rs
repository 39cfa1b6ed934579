//! Stateful content stream writer.
//!
//! Wraps a [`ContentStreamWriter`] and forwards a call only when it changes
//! the stream's state. Text objects are opened and closed on demand: every
//! operation declares the [`Mode`] it needs and the writer inserts the `BT`
//! or `ET` that gets the stream there.
//!
//! Text is split into same-font runs so that characters outside the primary
//! font's range (by default, outside the BMP) are drawn with the fallback
//! font.
//!
//! # Example
//!
//! ```
//! use pdf_content_writer::fonts::Font;
//! use pdf_content_writer::writer::{ContentStreamBuilder, StatefulContentWriter};
//!
//! # fn main() -> pdf_content_writer::Result<()> {
//! let mut builder = ContentStreamBuilder::new();
//! let mut writer = StatefulContentWriter::new(&mut builder);
//! writer.set_fonts(&[Font::new("Helvetica", "F1"), Font::new("NotoEmoji", "F2")], 12.0);
//! writer.new_line_at(72.0, 720.0)?;
//! writer.show_text("Hello 😀")?;
//! writer.add_rect(72.0, 700.0, 100.0, 1.0)?;
//! writer.fill()?;
//! writer.close()?;
//!
//! assert!(builder.is_closed());
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use super::content_stream::{ContentStreamWriter, LineCap};
use super::font_runs::FontRuns;
use super::image_handler::ImageXObject;
use super::state::{DashPattern, Mode, TextObject, WriterState};
use crate::config::WriterConfig;
use crate::error::{Error, Result};
use crate::fonts::{Font, FontSet};
use crate::layout::Color;

/// Text matrix for a 90° counter-clockwise rotation.
const ROTATION: [f32; 6] = [0.0, 1.0, -1.0, 0.0, 0.0, 0.0];

/// Counts of calls forwarded to and dropped before the underlying stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriterStats {
    /// Primitive calls forwarded
    pub forwarded: u64,
    /// Redundant calls dropped
    pub suppressed: u64,
}

/// Content stream writer that drops redundant state changes.
///
/// Borrows the underlying stream for its whole lifetime; [`close`](Self::close)
/// consumes the writer and closes the stream.
pub struct StatefulContentWriter<'a, S: ContentStreamWriter + ?Sized> {
    stream: &'a mut S,
    state: WriterState,
    config: WriterConfig,
    stats: WriterStats,
}

impl<'a, S: ContentStreamWriter + ?Sized> StatefulContentWriter<'a, S> {
    /// Wrap a stream with the default configuration.
    pub fn new(stream: &'a mut S) -> Self {
        Self {
            stream,
            state: WriterState::new(),
            config: WriterConfig::default(),
            stats: WriterStats::default(),
        }
    }

    /// Wrap a stream with a custom configuration.
    pub fn with_config(stream: &'a mut S, config: WriterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            stream,
            state: WriterState::new(),
            config,
            stats: WriterStats::default(),
        })
    }

    /// Cached state.
    pub fn state(&self) -> &WriterState {
        &self.state
    }

    /// Active configuration.
    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Forwarded/suppressed counters so far.
    pub fn stats(&self) -> WriterStats {
        self.stats
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &S {
        &*self.stream
    }

    fn suppressed(&mut self, what: &str) {
        self.stats.suppressed += 1;
        log::trace!("Suppressed redundant {}", what);
    }

    /// Move the stream into `mode`.
    fn enter(&mut self, mode: Mode) -> Result<()> {
        match mode {
            Mode::Text => self.open_text(),
            Mode::Graphics => self.close_text(),
            Mode::Any => Ok(()),
        }
    }

    fn open_text(&mut self) -> Result<()> {
        if self.state.text.is_open() {
            return Ok(());
        }
        self.stream.begin_text()?;
        self.stats.forwarded += 1;
        if self.state.rotated {
            self.stream.set_text_matrix(ROTATION)?;
            self.stats.forwarded += 1;
        }
        self.state.text = TextObject::ORIGIN;
        Ok(())
    }

    fn close_text(&mut self) -> Result<()> {
        if !self.state.text.is_open() {
            return Ok(());
        }
        self.stream.end_text()?;
        self.stats.forwarded += 1;
        self.state.text = TextObject::Closed;
        Ok(())
    }

    /// Switch rotated text output on or off.
    ///
    /// Turning rotation on inside a text object re-issues the rotated text
    /// matrix and moves the line cursor back to the origin. Turning it off
    /// closes the text object; the next text call starts a fresh one.
    pub fn set_rotated(&mut self, rotated: bool) -> Result<()> {
        if self.state.rotated == rotated {
            self.suppressed("rotation change");
            return Ok(());
        }
        if rotated {
            if self.state.text.is_open() {
                self.stream.set_text_matrix(ROTATION)?;
                self.stats.forwarded += 1;
                self.state.text = TextObject::ORIGIN;
            }
        } else {
            self.close_text()?;
        }
        self.state.rotated = rotated;
        Ok(())
    }

    /// Begin a text object unless one is already open.
    pub fn begin_text(&mut self) -> Result<()> {
        if self.state.text.is_open() {
            self.suppressed("BT");
            return Ok(());
        }
        self.open_text()
    }

    /// End the text object if one is open.
    pub fn end_text(&mut self) -> Result<()> {
        if !self.state.text.is_open() {
            self.suppressed("ET");
            return Ok(());
        }
        self.close_text()
    }

    /// Set the fonts and size used by later [`show_text`](Self::show_text) calls.
    ///
    /// `fonts` is `[primary]` or `[primary, fallback]`. Nothing is written to
    /// the stream; `Tf` is emitted per run when text is shown.
    pub fn set_fonts(&mut self, fonts: &[Font], size: f32) {
        self.state.fonts = FontSet::from_slice(fonts);
        self.state.font_size = size;
    }

    /// Same as [`set_fonts`](Self::set_fonts) with a prebuilt set.
    pub fn set_font_set(&mut self, fonts: FontSet, size: f32) {
        self.state.fonts = Some(fonts);
        self.state.font_size = size;
    }

    /// Show text, switching to the fallback font for characters above the
    /// configured threshold.
    ///
    /// Emits one `Tf` + `Tj` pair per maximal same-font run, in order.
    pub fn show_text(&mut self, text: &str) -> Result<()> {
        self.enter(Mode::Text)?;
        if text.is_empty() {
            return Ok(());
        }
        let Some(fonts) = self.state.fonts.as_ref() else {
            log::warn!("show_text called before set_fonts; {} bytes dropped", text.len());
            return Err(Error::NoFontSelected);
        };

        let size = self.state.font_size;
        for (font, run) in FontRuns::new(text, fonts, self.config.fallback_threshold) {
            log::trace!("Run of {} bytes in {}", run.len(), font.name());
            if !self.config.deduplicate_fonts || self.state.stream_font_differs(font, size) {
                self.stream.set_font(font, size)?;
                self.stats.forwarded += 1;
                self.state.stream_font = Some((font.clone(), size));
            } else {
                self.stats.suppressed += 1;
                log::trace!("Suppressed redundant Tf {}", font.resource_name());
            }
            self.stream.show_text(run)?;
            self.stats.forwarded += 1;
        }
        Ok(())
    }

    /// Start a new text line at the absolute position `(tx, ty)`.
    ///
    /// Coordinates are in unrotated page space. When rotated, the relative
    /// offset is mapped into the rotated text space before it is written.
    pub fn new_line_at(&mut self, tx: f32, ty: f32) -> Result<()> {
        self.enter(Mode::Text)?;
        let (cx, cy) = self.state.text.cursor().unwrap_or_default();
        let (dx, dy) = (tx - cx, ty - cy);
        if self.state.rotated {
            self.stream.new_line_at_offset(dy, -dx)?;
        } else {
            self.stream.new_line_at_offset(dx, dy)?;
        }
        self.stats.forwarded += 1;
        self.state.text = TextObject::Open { cursor: (tx, ty) };
        Ok(())
    }

    /// Draw an image into the given rectangle.
    pub fn draw_image(
        &mut self,
        image: &ImageXObject,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> Result<()> {
        self.enter(Mode::Graphics)?;
        self.stream.draw_image(image, x, y, width, height)?;
        self.stats.forwarded += 1;
        Ok(())
    }

    /// Set the stroke color if it differs from the current one.
    pub fn set_stroking_color(&mut self, color: Color) -> Result<()> {
        if !self.state.stroke_color_differs(color) {
            self.suppressed("RG");
            return Ok(());
        }
        self.enter(Mode::Any)?;
        self.stream.set_stroking_color(color)?;
        self.stats.forwarded += 1;
        self.state.stroke_color = Some(color);
        Ok(())
    }

    /// Set the fill color if it differs from the current one.
    pub fn set_non_stroking_color(&mut self, color: Color) -> Result<()> {
        if !self.state.fill_color_differs(color) {
            self.suppressed("rg");
            return Ok(());
        }
        self.enter(Mode::Any)?;
        self.stream.set_non_stroking_color(color)?;
        self.stats.forwarded += 1;
        self.state.fill_color = Some(color);
        Ok(())
    }

    /// Append a rectangle subpath.
    pub fn add_rect(&mut self, x: f32, y: f32, width: f32, height: f32) -> Result<()> {
        self.enter(Mode::Graphics)?;
        self.stream.add_rect(x, y, width, height)?;
        self.stats.forwarded += 1;
        Ok(())
    }

    /// Begin a new subpath at `(x, y)`.
    pub fn move_to(&mut self, x: f32, y: f32) -> Result<()> {
        self.enter(Mode::Graphics)?;
        self.stream.move_to(x, y)?;
        self.stats.forwarded += 1;
        Ok(())
    }

    /// Append a line segment to `(x, y)`.
    pub fn line_to(&mut self, x: f32, y: f32) -> Result<()> {
        self.enter(Mode::Graphics)?;
        self.stream.line_to(x, y)?;
        self.stats.forwarded += 1;
        Ok(())
    }

    /// Stroke the current path.
    pub fn stroke(&mut self) -> Result<()> {
        self.enter(Mode::Graphics)?;
        self.stream.stroke()?;
        self.stats.forwarded += 1;
        Ok(())
    }

    /// Fill the current path.
    pub fn fill(&mut self) -> Result<()> {
        self.enter(Mode::Graphics)?;
        self.stream.fill()?;
        self.stats.forwarded += 1;
        Ok(())
    }

    /// Set the line width if it changed.
    pub fn set_line_width(&mut self, width: f32) -> Result<()> {
        if !self.state.line_width_differs(width) {
            self.suppressed("w");
            return Ok(());
        }
        self.enter(Mode::Graphics)?;
        self.stream.set_line_width(width)?;
        self.stats.forwarded += 1;
        self.state.line_width = Some(width);
        Ok(())
    }

    /// Set the line cap style if it changed.
    pub fn set_line_cap_style(&mut self, cap: LineCap) -> Result<()> {
        if !self.state.line_cap_differs(cap) {
            self.suppressed("J");
            return Ok(());
        }
        self.enter(Mode::Graphics)?;
        self.stream.set_line_cap_style(cap)?;
        self.stats.forwarded += 1;
        self.state.line_cap = Some(cap);
        Ok(())
    }

    /// Set the dash pattern if the pattern values or phase changed.
    pub fn set_line_dash_pattern(&mut self, pattern: &[f32], phase: f32) -> Result<()> {
        if !self.state.dash_differs(pattern, phase) {
            self.suppressed("d");
            return Ok(());
        }
        self.enter(Mode::Graphics)?;
        self.stream.set_line_dash_pattern(pattern, phase)?;
        self.stats.forwarded += 1;
        self.state.dash = Some(DashPattern {
            array: pattern.to_vec(),
            phase,
        });
        Ok(())
    }

    /// End any open text object and close the underlying stream.
    pub fn close(mut self) -> Result<WriterStats> {
        self.enter(Mode::Graphics)?;
        self.stream.close()?;
        self.stats.forwarded += 1;
        log::debug!(
            "Content writer closed: {} forwarded, {} suppressed",
            self.stats.forwarded,
            self.stats.suppressed
        );
        Ok(self.stats)
    }
}
