//! Cached view of the content stream's graphics and text state.
//!
//! Tracks what has already been sent to the underlying stream so that
//! redundant operators can be dropped. Every comparison is by value.

use super::content_stream::LineCap;
use crate::fonts::{Font, FontSet};
use crate::layout::Color;

/// Text object state: closed, or open with the last absolute line position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TextObject {
    /// No `BT` is pending.
    #[default]
    Closed,
    /// Inside `BT` ... `ET`.
    Open {
        /// Last absolute position passed to `new_line_at`, in unrotated space.
        cursor: (f32, f32),
    },
}

impl TextObject {
    /// A freshly opened text object, cursor at the origin.
    pub(crate) const ORIGIN: TextObject = TextObject::Open { cursor: (0.0, 0.0) };

    /// Whether a text object is open.
    pub fn is_open(&self) -> bool {
        matches!(self, TextObject::Open { .. })
    }

    /// The line cursor, when open.
    pub fn cursor(&self) -> Option<(f32, f32)> {
        match self {
            TextObject::Open { cursor } => Some(*cursor),
            TextObject::Closed => None,
        }
    }
}

/// The stream mode an operation needs before it can be forwarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Inside a text object (text positioning and showing).
    Text,
    /// Outside any text object (paths, painting, images, line style).
    Graphics,
    /// Valid in both (color).
    Any,
}

/// A dash pattern with its phase.
#[derive(Debug, Clone, PartialEq)]
pub struct DashPattern {
    /// Dash and gap lengths
    pub array: Vec<f32>,
    /// Starting offset into the pattern
    pub phase: f32,
}

impl DashPattern {
    /// Whether this pattern equals `array` and `phase` element-wise.
    pub fn matches(&self, array: &[f32], phase: f32) -> bool {
        self.phase == phase && self.array.as_slice() == array
    }
}

/// Last state forwarded to the underlying stream.
#[derive(Debug, Clone, Default)]
pub struct WriterState {
    pub(crate) text: TextObject,
    pub(crate) rotated: bool,
    pub(crate) fonts: Option<FontSet>,
    pub(crate) font_size: f32,
    /// Font and size of the last `Tf` actually forwarded.
    pub(crate) stream_font: Option<(Font, f32)>,
    pub(crate) stroke_color: Option<Color>,
    pub(crate) fill_color: Option<Color>,
    pub(crate) line_width: Option<f32>,
    pub(crate) line_cap: Option<LineCap>,
    pub(crate) dash: Option<DashPattern>,
}

impl WriterState {
    /// Fresh state: nothing forwarded yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text object.
    pub fn text(&self) -> TextObject {
        self.text
    }

    /// Whether text output uses the 90° rotated text matrix.
    pub fn is_rotated(&self) -> bool {
        self.rotated
    }

    /// Configured font set.
    pub fn fonts(&self) -> Option<&FontSet> {
        self.fonts.as_ref()
    }

    /// Configured font size.
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Last stroke color forwarded.
    pub fn stroke_color(&self) -> Option<Color> {
        self.stroke_color
    }

    /// Last fill color forwarded.
    pub fn fill_color(&self) -> Option<Color> {
        self.fill_color
    }

    /// Last line width forwarded.
    pub fn line_width(&self) -> Option<f32> {
        self.line_width
    }

    /// Last line cap forwarded.
    pub fn line_cap(&self) -> Option<LineCap> {
        self.line_cap
    }

    /// Last dash pattern forwarded.
    pub fn dash(&self) -> Option<&DashPattern> {
        self.dash.as_ref()
    }

    pub(crate) fn stroke_color_differs(&self, color: Color) -> bool {
        self.stroke_color != Some(color)
    }

    pub(crate) fn fill_color_differs(&self, color: Color) -> bool {
        self.fill_color != Some(color)
    }

    pub(crate) fn line_width_differs(&self, width: f32) -> bool {
        self.line_width != Some(width)
    }

    pub(crate) fn line_cap_differs(&self, cap: LineCap) -> bool {
        self.line_cap != Some(cap)
    }

    pub(crate) fn dash_differs(&self, array: &[f32], phase: f32) -> bool {
        !self.dash.as_ref().is_some_and(|d| d.matches(array, phase))
    }

    pub(crate) fn stream_font_differs(&self, font: &Font, size: f32) -> bool {
        match &self.stream_font {
            Some((f, s)) => f != font || *s != size,
            None => true,
        }
    }
}
