//! Paint values shared by the writer API.

mod color;

pub use color::Color;
