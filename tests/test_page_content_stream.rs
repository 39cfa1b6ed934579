//! Integration tests for writing serialized content streams through the
//! stateful writer.

use std::fs::File;
use std::io::{BufWriter, Read, Write};

use pdf_content_writer::fonts::Font;
use pdf_content_writer::layout::Color;
use pdf_content_writer::writer::{ImageXObject, LineCap, PageContentStream, StatefulContentWriter};
use pdf_content_writer::Error;

/// Sink that fails every write after `limit` bytes.
struct FullDisk {
    written: usize,
    limit: usize,
}

impl Write for FullDisk {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        if self.written + buf.len() > self.limit {
            return Err(std::io::Error::other("no space left on device"));
        }
        self.written += buf.len();
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Test a small table cell rendered end to end.
#[test]
fn test_table_cell_bytes() {
    let mut stream = PageContentStream::new(Vec::new());
    let mut writer = StatefulContentWriter::new(&mut stream);
    writer.set_stroking_color(Color::black()).unwrap();
    writer.set_line_width(1.0).unwrap();
    writer.set_line_cap_style(LineCap::Square).unwrap();
    writer.add_rect(50.0, 700.0, 200.0, 20.0).unwrap();
    writer.stroke().unwrap();
    writer.set_fonts(&[Font::new("Helvetica", "F1"), Font::new("NotoEmoji", "F2")], 10.0);
    writer.set_non_stroking_color(Color::black()).unwrap();
    writer.new_line_at(55.0, 706.0).unwrap();
    writer.show_text("Total 😀").unwrap();
    writer.set_line_width(1.0).unwrap();
    writer.close().unwrap();

    let content = String::from_utf8(stream.into_inner()).unwrap();
    assert_eq!(
        content,
        "0 0 0 RG\n\
         1 w\n\
         2 J\n\
         50 700 200 20 re\n\
         S\n\
         0 0 0 rg\n\
         BT\n\
         55 706 Td\n\
         /F1 10 Tf\n\
         (Total ) Tj\n\
         /F2 10 Tf\n\
         (😀) Tj\n\
         ET\n"
    );
}

/// Rotated text writes the rotation matrix right after BT.
#[test]
fn test_rotated_text_bytes() {
    let mut stream = PageContentStream::new(Vec::new());
    let mut writer = StatefulContentWriter::new(&mut stream);
    writer.set_rotated(true).unwrap();
    writer.set_fonts(&[Font::new("Helvetica", "F1")], 8.0);
    writer.new_line_at(20.0, 40.0).unwrap();
    writer.show_text("side").unwrap();
    writer.close().unwrap();

    let content = String::from_utf8(stream.into_inner()).unwrap();
    assert!(content.starts_with("BT\n0 1 -1 0 0 0 Tm\n40 -20 Td\n"));
    assert!(content.ends_with("(side) Tj\nET\n"));
}

/// An I/O failure in the sink reaches the caller as Error::Io.
#[test]
fn test_sink_failure_reaches_caller() {
    let mut stream = PageContentStream::new(FullDisk {
        written: 0,
        limit: 16,
    });
    let mut writer = StatefulContentWriter::new(&mut stream);
    let image = ImageXObject::new("Im1", 100, 100);
    writer.set_line_width(3.0).unwrap();
    let result = writer.draw_image(&image, 0.0, 0.0, 100.0, 100.0);

    assert!(matches!(result, Err(Error::Io(_))));
}

/// Test writing the stream to a file.
#[test]
fn test_file_backed_stream() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("page1.content");

    {
        let file = File::create(&path).unwrap();
        let mut stream = PageContentStream::new(BufWriter::new(file));
        let mut writer = StatefulContentWriter::new(&mut stream);
        writer.set_fonts(&[Font::new("Courier", "F3")], 12.0);
        writer.new_line_at(72.0, 720.0).unwrap();
        writer.show_text("(escaped)").unwrap();
        let stats = writer.close().unwrap();
        assert_eq!(stats.forwarded, 6);
    }

    let mut content = String::new();
    File::open(&path).unwrap().read_to_string(&mut content).unwrap();
    assert_eq!(content, "BT\n72 720 Td\n/F3 12 Tf\n(\\(escaped\\)) Tj\nET\n");
}
