//! Splitting text into same-font runs.
//!
//! A run is a maximal slice of the input whose characters all map to the
//! same font (compared by base font name). Runs are yielded left to right
//! and always end on a `char` boundary.

use crate::fonts::{Font, FontSet};

/// Iterator over `(font, run)` pairs of a string.
#[derive(Debug, Clone)]
pub struct FontRuns<'t, 'f> {
    text: &'t str,
    fonts: &'f FontSet,
    threshold: u32,
    /// Byte offset of the next unconsumed character
    pos: usize,
}

impl<'t, 'f> FontRuns<'t, 'f> {
    /// Split `text` using `fonts`; codepoints above `threshold` use the fallback font.
    pub fn new(text: &'t str, fonts: &'f FontSet, threshold: u32) -> Self {
        Self {
            text,
            fonts,
            threshold,
            pos: 0,
        }
    }
}

impl<'t, 'f> Iterator for FontRuns<'t, 'f> {
    type Item = (&'f Font, &'t str);

    fn next(&mut self) -> Option<Self::Item> {
        let (text, fonts, threshold) = (self.text, self.fonts, self.threshold);
        let rest = &text[self.pos..];
        let mut chars = rest.char_indices();
        let (_, first) = chars.next()?;
        let font = fonts.select(first, threshold);

        let end = chars
            .find(|&(_, ch)| fonts.select(ch, threshold).name() != font.name())
            .map_or(rest.len(), |(i, _)| i);

        self.pos += end;
        Some((font, &rest[..end]))
    }
}
