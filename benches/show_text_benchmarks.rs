//! Benchmarks for font-run splitting and redundant-state suppression.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pdf_content_writer::fonts::{Font, FontSet, LAST_BMP};
use pdf_content_writer::layout::Color;
use pdf_content_writer::writer::{ContentStreamBuilder, FontRuns, StatefulContentWriter};

const SAMPLES: [(&str, &str); 3] = [
    ("ascii", "The quick brown fox jumps over the lazy dog. "),
    ("cjk", "東京都の天気は晴れです。明日は雨が降るでしょう。"),
    ("emoji_mixed", "Status 😀 ok, build ✅ passed 🚀 deploy 🎉 done. "),
];

fn fonts() -> FontSet {
    FontSet::with_fallback(Font::new("Helvetica", "F1"), Font::new("NotoEmoji", "F2"))
}

fn bench_font_runs(c: &mut Criterion) {
    let set = fonts();
    let mut group = c.benchmark_group("font_runs");
    for (name, sample) in SAMPLES {
        let text = sample.repeat(64);
        group.bench_with_input(BenchmarkId::from_parameter(name), &text, |b, text| {
            b.iter(|| black_box(FontRuns::new(text, &set, LAST_BMP).count()));
        });
    }
    group.finish();
}

fn bench_table_page(c: &mut Criterion) {
    c.bench_function("table_page_200_rows", |b| {
        b.iter(|| {
            let mut builder = ContentStreamBuilder::new();
            let mut writer = StatefulContentWriter::new(&mut builder);
            writer.set_fonts(&[Font::new("Helvetica", "F1"), Font::new("NotoEmoji", "F2")], 9.0);
            for row in 0..200 {
                let y = 780.0 - row as f32 * 3.5;
                writer.set_stroking_color(Color::black()).unwrap();
                writer.set_line_width(0.25).unwrap();
                writer.add_rect(40.0, y, 520.0, 3.5).unwrap();
                writer.stroke().unwrap();
                writer.new_line_at(42.0, y + 0.5).unwrap();
                writer.show_text("row 😀 value").unwrap();
            }
            let stats = writer.close().unwrap();
            black_box((stats, builder.operations().len()))
        });
    });
}

criterion_group!(benches, bench_font_runs, bench_table_page);
criterion_main!(benches);
