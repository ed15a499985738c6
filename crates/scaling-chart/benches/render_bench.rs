use scaling_chart::{Chart, RenderOptions, Result, Series};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_chart(n: usize) -> Chart {
    let xs: Vec<f64> = (1..=n).map(|i| i as f64).collect();
    let ys: Vec<f64> = xs.iter().map(|t| 20.0 / t + 2.0).collect();
    let mut ch = Chart::new().with_title("bench");
    ch.add_series(Series::from_columns(&xs, &ys).expect("valid columns"));
    ch.autoscale();
    ch
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[4usize, 64usize, 1024usize] {
        group.bench_function(format!("threads_{n}"), |b| {
            let ch = build_chart(n);
            let mut opts = RenderOptions::default();
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let bytes = ch.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

fn bench_rgba(c: &mut Criterion) {
    let ch = build_chart(4);
    let opts = RenderOptions::default();
    c.bench_function("render_rgba8_labels", |b| {
        b.iter(|| black_box(ch.render_to_rgba8(&opts).map(|f| f.pixels.len())))
    });
}

criterion_group!(benches, bench_render, bench_rgba);
criterion_main!(benches);
