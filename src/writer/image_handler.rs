//! Image XObject handles.
//!
//! Per PDF spec Section 8.9, images are painted with the `Do` operator by
//! resource name. Decoding and embedding the pixel data is done elsewhere;
//! the writer only needs the name it is registered under.

/// An image registered in the page's /XObject resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageXObject {
    /// Resource name (e.g. "Im1")
    resource_name: String,
    /// Image width in pixels
    width: u32,
    /// Image height in pixels
    height: u32,
}

impl ImageXObject {
    /// Create an image handle.
    pub fn new(resource_name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            resource_name: resource_name.into(),
            width,
            height,
        }
    }

    /// Resource name used by the `Do` operator.
    pub fn resource_name(&self) -> &str {
        &self.resource_name
    }

    /// Pixel width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Pixel height.
    pub fn height(&self) -> u32 {
        self.height
    }
}
