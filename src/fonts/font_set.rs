/// A font resource registered on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Font {
    /// Base font name (e.g. "Helvetica", "NotoEmoji-Regular")
    name: String,
    /// Resource name used by the `Tf` operator (e.g. "F1")
    resource_name: String,
}

impl Font {
    /// Create a font handle.
    pub fn new(name: impl Into<String>, resource_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resource_name: resource_name.into(),
        }
    }

    /// Base font name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resource name under the page's /Font dictionary.
    pub fn resource_name(&self) -> &str {
        &self.resource_name
    }
}

/// Primary font with an optional fallback for codepoints above the threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSet {
    primary: Font,
    fallback: Option<Font>,
}

impl FontSet {
    /// Create a set from a primary font only.
    pub fn new(primary: Font) -> Self {
        Self {
            primary,
            fallback: None,
        }
    }

    /// Create a set with a fallback font.
    pub fn with_fallback(primary: Font, fallback: Font) -> Self {
        Self {
            primary,
            fallback: Some(fallback),
        }
    }

    /// Build a set from an ordered slice: `[primary]` or `[primary, fallback]`.
    ///
    /// Returns `None` for an empty slice. Entries past the second are ignored.
    pub fn from_slice(fonts: &[Font]) -> Option<Self> {
        let primary = fonts.first()?.clone();
        if fonts.len() > 2 {
            log::debug!("Ignoring {} fonts past the fallback slot", fonts.len() - 2);
        }
        Some(Self {
            primary,
            fallback: fonts.get(1).cloned(),
        })
    }

    /// The primary font.
    pub fn primary(&self) -> &Font {
        &self.primary
    }

    /// The fallback font, or the primary when none is configured.
    pub fn fallback(&self) -> &Font {
        self.fallback.as_ref().unwrap_or(&self.primary)
    }

    /// Pick the font that draws `ch`.
    #[inline]
    pub fn select(&self, ch: char, threshold: u32) -> &Font {
        if ch as u32 > threshold {
            self.fallback()
        } else {
            &self.primary
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::LAST_BMP;

    fn helvetica() -> Font {
        Font::new("Helvetica", "F1")
    }

    fn emoji() -> Font {
        Font::new("NotoEmoji", "F2")
    }

    #[test]
    fn test_from_slice() {
        assert!(FontSet::from_slice(&[]).is_none());

        let single = FontSet::from_slice(&[helvetica()]).unwrap();
        assert_eq!(single.primary().name(), "Helvetica");
        assert_eq!(single.fallback().name(), "Helvetica");

        let pair = FontSet::from_slice(&[helvetica(), emoji(), Font::new("Extra", "F3")]).unwrap();
        assert_eq!(pair.fallback().name(), "NotoEmoji");
    }

    #[test]
    fn test_select_by_plane() {
        let set = FontSet::with_fallback(helvetica(), emoji());
        assert_eq!(set.select('a', LAST_BMP).name(), "Helvetica");
        assert_eq!(set.select('\u{FFFF}', LAST_BMP).name(), "Helvetica");
        assert_eq!(set.select('\u{1F600}', LAST_BMP).name(), "NotoEmoji");
    }

    #[test]
    fn test_select_without_fallback() {
        let set = FontSet::new(helvetica());
        assert_eq!(set.select('\u{1F600}', LAST_BMP).resource_name(), "F1");
    }
}
