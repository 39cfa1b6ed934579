// Allow some clippy lints that are too pedantic for this project
#![allow(clippy::float_cmp)]

//! # PDF Content Writer
//!
//! A state-caching writer for PDF page content streams.
//!
//! ## Core Features
//!
//! - **Redundant State Suppression**: colors, line width, line cap and dash
//!   pattern are only written when they change
//! - **Automatic Text Objects**: `BT`/`ET` are inserted where the operator
//!   sequence requires them (ISO 32000-1:2008 Section 9.4)
//! - **Rotated Text**: 90° text blocks positioned in unrotated page coordinates
//! - **Font Fallback**: text is split into same-font runs so characters outside
//!   the BMP are drawn with a fallback font
//!
//! ## Quick Start
//!
//! ```
//! use pdf_content_writer::fonts::Font;
//! use pdf_content_writer::layout::Color;
//! use pdf_content_writer::writer::{ContentStreamBuilder, StatefulContentWriter};
//!
//! # fn main() -> pdf_content_writer::Result<()> {
//! let mut builder = ContentStreamBuilder::new();
//! let mut writer = StatefulContentWriter::new(&mut builder);
//!
//! writer.set_fonts(&[Font::new("Helvetica", "F1")], 12.0);
//! writer.set_non_stroking_color(Color::black())?;
//! writer.new_line_at(72.0, 720.0)?;
//! writer.show_text("Hello, World!")?;
//! writer.close()?;
//!
//! let bytes = builder.build()?;
//! assert!(String::from_utf8_lossy(&bytes).contains("(Hello, World!) Tj"));
//! # Ok(())
//! # }
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Font handles and fallback sets
pub mod fonts;

// Paint values
pub mod layout;

// Content stream writing
pub mod writer;

// Re-exports
pub use config::WriterConfig;
pub use error::{Error, Result};
pub use writer::{StatefulContentWriter, WriterStats};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(VERSION.starts_with("0."));
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "pdf_content_writer");
    }
}
