//! PDF content stream operators and the primitive writer interface.
//!
//! [`ContentStreamWriter`] is the low-level API the stateful writer drives.
//! It forwards every call unchanged; deciding *whether* a call is needed is
//! the job of [`StatefulContentWriter`](super::StatefulContentWriter).
//!
//! Operators follow ISO 32000-1:2008 Section 8-9.

use crate::error::{Error, Result};
use crate::fonts::Font;
use crate::layout::Color;
use std::io::Write;

use super::image_handler::ImageXObject;

/// Operations that can be added to a content stream.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentStreamOp {
    /// Save graphics state (q)
    SaveState,
    /// Restore graphics state (Q)
    RestoreState,
    /// Set transformation matrix (cm)
    Transform(f32, f32, f32, f32, f32, f32),
    /// Begin text object (BT)
    BeginText,
    /// End text object (ET)
    EndText,
    /// Set font resource and size (Tf)
    SetFont(String, f32),
    /// Move text position (Td)
    MoveText(f32, f32),
    /// Set text matrix (Tm)
    SetTextMatrix(f32, f32, f32, f32, f32, f32),
    /// Show text (Tj) - literal string
    ShowText(String),
    /// Set fill color RGB (rg)
    SetFillColorRGB(f32, f32, f32),
    /// Set stroke color RGB (RG)
    SetStrokeColorRGB(f32, f32, f32),
    /// Set line width (w)
    SetLineWidth(f32),
    /// Set line cap style (J)
    SetLineCap(LineCap),
    /// Set dash pattern (d)
    SetDashPattern(Vec<f32>, f32),
    /// Move to (m)
    MoveTo(f32, f32),
    /// Line to (l)
    LineTo(f32, f32),
    /// Rectangle (re)
    Rectangle(f32, f32, f32, f32),
    /// Stroke (S)
    Stroke,
    /// Fill (f)
    Fill,
    /// Paint XObject (Do)
    PaintXObject(String),
}

impl ContentStreamOp {
    /// Whether this operator is only valid inside a `BT`/`ET` pair.
    pub fn is_text_operator(&self) -> bool {
        matches!(
            self,
            ContentStreamOp::MoveText(..)
                | ContentStreamOp::SetTextMatrix(..)
                | ContentStreamOp::ShowText(_)
        )
    }
}

/// Line cap styles for path stroking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineCap {
    /// Square butt cap (default)
    #[default]
    Butt = 0,
    /// Round cap
    Round = 1,
    /// Projecting square cap
    Square = 2,
}

/// The primitive content stream API.
///
/// Implementors only provide [`write_op`](Self::write_op) and
/// [`close`](Self::close); the named operators are thin wrappers that build
/// one [`ContentStreamOp`] each (`draw_image` builds the `q cm Do Q` group).
pub trait ContentStreamWriter {
    /// Append one operator to the stream.
    fn write_op(&mut self, op: ContentStreamOp) -> Result<()>;

    /// Finish the stream. Operators written afterwards fail.
    fn close(&mut self) -> Result<()>;

    /// Begin a text object.
    fn begin_text(&mut self) -> Result<()> {
        self.write_op(ContentStreamOp::BeginText)
    }

    /// End a text object.
    fn end_text(&mut self) -> Result<()> {
        self.write_op(ContentStreamOp::EndText)
    }

    /// Replace the text matrix and text line matrix.
    fn set_text_matrix(&mut self, m: [f32; 6]) -> Result<()> {
        self.write_op(ContentStreamOp::SetTextMatrix(m[0], m[1], m[2], m[3], m[4], m[5]))
    }

    /// Start a new line offset from the start of the current line.
    fn new_line_at_offset(&mut self, tx: f32, ty: f32) -> Result<()> {
        self.write_op(ContentStreamOp::MoveText(tx, ty))
    }

    /// Select a font and size.
    fn set_font(&mut self, font: &Font, size: f32) -> Result<()> {
        self.write_op(ContentStreamOp::SetFont(font.resource_name().to_string(), size))
    }

    /// Show text with the current font.
    fn show_text(&mut self, text: &str) -> Result<()> {
        self.write_op(ContentStreamOp::ShowText(text.to_string()))
    }

    /// Paint an image XObject into the given rectangle.
    fn draw_image(
        &mut self,
        image: &ImageXObject,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> Result<()> {
        self.write_op(ContentStreamOp::SaveState)?;
        self.write_op(ContentStreamOp::Transform(width, 0.0, 0.0, height, x, y))?;
        self.write_op(ContentStreamOp::PaintXObject(image.resource_name().to_string()))?;
        self.write_op(ContentStreamOp::RestoreState)
    }

    /// Set stroke color.
    fn set_stroking_color(&mut self, color: Color) -> Result<()> {
        self.write_op(ContentStreamOp::SetStrokeColorRGB(color.r, color.g, color.b))
    }

    /// Set fill color.
    fn set_non_stroking_color(&mut self, color: Color) -> Result<()> {
        self.write_op(ContentStreamOp::SetFillColorRGB(color.r, color.g, color.b))
    }

    /// Append a rectangle subpath.
    fn add_rect(&mut self, x: f32, y: f32, width: f32, height: f32) -> Result<()> {
        self.write_op(ContentStreamOp::Rectangle(x, y, width, height))
    }

    /// Move to a point (start a new subpath).
    fn move_to(&mut self, x: f32, y: f32) -> Result<()> {
        self.write_op(ContentStreamOp::MoveTo(x, y))
    }

    /// Draw a line to a point.
    fn line_to(&mut self, x: f32, y: f32) -> Result<()> {
        self.write_op(ContentStreamOp::LineTo(x, y))
    }

    /// Stroke the current path.
    fn stroke(&mut self) -> Result<()> {
        self.write_op(ContentStreamOp::Stroke)
    }

    /// Fill the current path.
    fn fill(&mut self) -> Result<()> {
        self.write_op(ContentStreamOp::Fill)
    }

    /// Set line width.
    fn set_line_width(&mut self, width: f32) -> Result<()> {
        self.write_op(ContentStreamOp::SetLineWidth(width))
    }

    /// Set line cap style.
    fn set_line_cap_style(&mut self, cap: LineCap) -> Result<()> {
        self.write_op(ContentStreamOp::SetLineCap(cap))
    }

    /// Set dash pattern.
    ///
    /// # Arguments
    /// * `pattern` - Array of dash lengths (e.g., [3.0, 2.0] for 3pt dash, 2pt gap)
    /// * `phase` - Starting offset into the pattern
    fn set_line_dash_pattern(&mut self, pattern: &[f32], phase: f32) -> Result<()> {
        self.write_op(ContentStreamOp::SetDashPattern(pattern.to_vec(), phase))
    }
}

/// In-memory content stream that records operators.
///
/// Creates the byte sequence for a PDF content stream from the recorded
/// operations with [`build`](Self::build).
#[derive(Debug, Default)]
pub struct ContentStreamBuilder {
    /// Operations in the stream
    operations: Vec<ContentStreamOp>,
    /// Set once `close` has been called
    closed: bool,
}

impl ContentStreamBuilder {
    /// Create a new content stream builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded operations, in stream order.
    pub fn operations(&self) -> &[ContentStreamOp] {
        &self.operations
    }

    /// Whether `close` has been called.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Build the content stream to bytes.
    pub fn build(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();

        for op in &self.operations {
            write_op(&mut buf, op)?;
            writeln!(buf)?;
        }

        Ok(buf)
    }
}

impl ContentStreamWriter for ContentStreamBuilder {
    fn write_op(&mut self, op: ContentStreamOp) -> Result<()> {
        if self.closed {
            return Err(Error::StreamClosed);
        }
        self.operations.push(op);
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if self.closed {
            return Err(Error::StreamClosed);
        }
        self.closed = true;
        Ok(())
    }
}

/// Write a single operation to the buffer.
pub(crate) fn write_op<W: Write>(w: &mut W, op: &ContentStreamOp) -> std::io::Result<()> {
    match op {
        ContentStreamOp::SaveState => write!(w, "q"),
        ContentStreamOp::RestoreState => write!(w, "Q"),
        ContentStreamOp::Transform(a, b, c, d, e, f) => {
            write!(w, "{} {} {} {} {} {} cm", a, b, c, d, e, f)
        },
        ContentStreamOp::BeginText => write!(w, "BT"),
        ContentStreamOp::EndText => write!(w, "ET"),
        ContentStreamOp::SetFont(name, size) => write!(w, "/{} {} Tf", name, size),
        ContentStreamOp::MoveText(tx, ty) => write!(w, "{} {} Td", tx, ty),
        ContentStreamOp::SetTextMatrix(a, b, c, d, e, f) => {
            write!(w, "{} {} {} {} {} {} Tm", a, b, c, d, e, f)
        },
        ContentStreamOp::ShowText(text) => {
            write!(w, "(")?;
            write_escaped_string(w, text)?;
            write!(w, ") Tj")
        },
        ContentStreamOp::SetFillColorRGB(r, g, b) => write!(w, "{} {} {} rg", r, g, b),
        ContentStreamOp::SetStrokeColorRGB(r, g, b) => write!(w, "{} {} {} RG", r, g, b),
        ContentStreamOp::SetLineWidth(width) => write!(w, "{} w", width),
        ContentStreamOp::SetLineCap(cap) => write!(w, "{} J", *cap as u8),
        ContentStreamOp::SetDashPattern(pattern, phase) => {
            write!(w, "[")?;
            for (i, p) in pattern.iter().enumerate() {
                if i > 0 {
                    write!(w, " ")?;
                }
                write!(w, "{}", p)?;
            }
            write!(w, "] {} d", phase)
        },
        ContentStreamOp::MoveTo(x, y) => write!(w, "{} {} m", x, y),
        ContentStreamOp::LineTo(x, y) => write!(w, "{} {} l", x, y),
        ContentStreamOp::Rectangle(x, y, w_val, h) => {
            write!(w, "{} {} {} {} re", x, y, w_val, h)
        },
        ContentStreamOp::Stroke => write!(w, "S"),
        ContentStreamOp::Fill => write!(w, "f"),
        ContentStreamOp::PaintXObject(name) => write!(w, "/{} Do", name),
    }
}

/// Write an escaped PDF string.
fn write_escaped_string<W: Write>(w: &mut W, text: &str) -> std::io::Result<()> {
    for byte in text.bytes() {
        match byte {
            b'(' => write!(w, "\\(")?,
            b')' => write!(w, "\\)")?,
            b'\\' => write!(w, "\\\\")?,
            b'\n' => write!(w, "\\n")?,
            b'\r' => write!(w, "\\r")?,
            b'\t' => write!(w, "\\t")?,
            _ => w.write_all(&[byte])?,
        }
    }
    Ok(())
}
