//! Font handles and fallback font sets.
//!
//! Fonts are resources owned by the page; the writer only needs their base
//! font name (for run splitting) and the resource name they are registered
//! under (for the `Tf` operator).

mod font_set;

pub use font_set::{Font, FontSet};

/// Last codepoint of the Basic Multilingual Plane.
pub const LAST_BMP: u32 = 0xFFFF;
