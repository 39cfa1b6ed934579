//! Page content stream writing.
//!
//! ## Architecture
//!
//! ```text
//! layout / table code
//!     ↓
//! [StatefulContentWriter] (drops redundant state, manages BT/ET, font runs)
//!     ↓
//! [ContentStreamWriter] (primitive operators, 1:1)
//!     ↓
//! [ContentStreamBuilder] (in memory) or [PageContentStream] (io::Write)
//! ```
//!
//! ## Example
//!
//! ```
//! use pdf_content_writer::layout::Color;
//! use pdf_content_writer::writer::{PageContentStream, StatefulContentWriter};
//!
//! # fn main() -> pdf_content_writer::Result<()> {
//! let mut stream = PageContentStream::new(Vec::new());
//! let mut writer = StatefulContentWriter::new(&mut stream);
//! writer.set_stroking_color(Color::black())?;
//! writer.set_stroking_color(Color::black())?;
//! writer.move_to(0.0, 0.0)?;
//! writer.line_to(100.0, 0.0)?;
//! writer.stroke()?;
//! writer.close()?;
//!
//! assert_eq!(stream.into_inner(), b"0 0 0 RG\n0 0 m\n100 0 l\nS\n");
//! # Ok(())
//! # }
//! ```

mod content_stream;
mod font_runs;
mod image_handler;
mod page_stream;
mod state;
mod stateful;

pub use content_stream::{ContentStreamBuilder, ContentStreamOp, ContentStreamWriter, LineCap};
pub use font_runs::FontRuns;
pub use image_handler::ImageXObject;
pub use page_stream::PageContentStream;
pub use state::{DashPattern, Mode, TextObject, WriterState};
pub use stateful::{StatefulContentWriter, WriterStats};
