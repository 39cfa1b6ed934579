//! RGB colors used for stroking and filling.

/// RGB color representation.
///
/// Colors compare by value: two separately built colors with the same
/// channels are the same paint as far as the content stream is concerned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel (0.0 - 1.0)
    pub r: f32,
    /// Green channel (0.0 - 1.0)
    pub g: f32,
    /// Blue channel (0.0 - 1.0)
    pub b: f32,
}

impl Color {
    /// Create a new color.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_content_writer::layout::Color;
    ///
    /// let black = Color::new(0.0, 0.0, 0.0);
    /// assert_eq!(black, Color::black());
    /// ```
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Create a black color.
    pub fn black() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Create a white color.
    pub fn white() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_equality() {
        let a = Color::new(0.2, 0.4, 0.6);
        let b = Color::new(0.2, 0.4, 0.6);
        assert_eq!(a, b);
        assert_ne!(a, Color::black());
    }

    #[test]
    fn test_from_rgb8() {
        assert_eq!(Color::from_rgb8(255, 255, 255), Color::white());
        assert_eq!(Color::from_rgb8(0, 0, 0), Color::black());
    }
}
