//! Canvas benchmark: Measure drawing shapes onto the in-memory grid.
//!
//! Target: a full-screen border plus fill well under one 60 fps frame

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vexes::render::{Border, CustomQuad, Draw, Text};
use vexes::{Canvas, IntRect, Panel, Vec2i};

fn fill_quad(c: &mut Criterion) {
    let mut canvas = Canvas::new(200, 50);
    let quad = CustomQuad::new('#', IntRect::new(0, 0, 200, 50));

    c.bench_function("quad_fill_200x50", |b| {
        b.iter(|| black_box(&quad).draw(&mut canvas, None));
    });
}

fn draw_border(c: &mut Criterion) {
    let mut canvas = Canvas::new(200, 50);
    let border = Border::new(IntRect::new(0, 0, 199, 49));

    c.bench_function("border_200x50", |b| {
        b.iter(|| black_box(&border).draw(&mut canvas, None));
    });
}

fn draw_text(c: &mut Criterion) {
    let mut canvas = Canvas::new(200, 50);
    let ascii = Text::new("The quick brown fox jumps over the lazy dog", Vec2i::new(100, 25))
        .with_centered(true);
    let cjk = Text::new("日本語のテキストを描画する", Vec2i::new(0, 10));

    c.bench_function("text_ascii", |b| {
        b.iter(|| black_box(&ascii).draw(&mut canvas, None));
    });

    c.bench_function("text_cjk", |b| {
        b.iter(|| black_box(&cjk).draw(&mut canvas, None));
    });
}

fn draw_panel(c: &mut Criterion) {
    let mut canvas = Canvas::new(200, 50);
    let panel = Panel::new(&mut canvas, IntRect::new(10, 5, 120, 30), "Benchmark");

    c.bench_function("panel_120x30", |b| {
        b.iter(|| black_box(&panel).draw(&mut canvas));
    });
}

criterion_group!(benches, fill_quad, draw_border, draw_text, draw_panel);
criterion_main!(benches);
