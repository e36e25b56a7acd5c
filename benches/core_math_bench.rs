use chart_minimap::api::{InputEvent, LinkedCharts, LinkedChartsConfig, ViewTarget};
use chart_minimap::core::{
    DataPoint, Dataset, Domain, LinearScale, PlotBounds, ScalePair, Series, project_dataset,
};
use chart_minimap::render::NullRenderer;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn sine_dataset(series: usize, points: usize) -> Dataset {
    Dataset::new(
        (0..series)
            .map(|s| {
                Series::new(
                    (0..points)
                        .map(|i| {
                            let t = i as f64;
                            DataPoint::new(t * 1_000.0, 50.0 + 40.0 * (t / 50.0 + s as f64).sin())
                        })
                        .collect(),
                )
            })
            .collect(),
    )
}

fn bench_linear_scale_round_trip(c: &mut Criterion) {
    let domain = Domain::new(0.0, 10_000.0).expect("valid domain");
    let scale = LinearScale::new(domain, 0.0, 1_920.0).expect("valid scale");

    c.bench_function("linear_scale_round_trip", |b| {
        b.iter(|| {
            let px = scale.to_pixel(black_box(4_321.123));
            let _ = scale.to_value(px);
        })
    });
}

fn bench_line_projection_10k(c: &mut Criterion) {
    let dataset = sine_dataset(4, 10_000);
    let bounds = PlotBounds {
        x_min: 30.0,
        x_max: 1_890.0,
        y_min: 1_030.0,
        y_max: 30.0,
    };
    let scales = ScalePair::for_plot(
        Domain::new(0.0, 10_000_000.0).expect("x domain"),
        Domain::new(0.0, 100.0).expect("y domain"),
        bounds,
    )
    .expect("valid scales");

    c.bench_function("line_projection_4x10k", |b| {
        b.iter(|| {
            let _ = project_dataset(black_box(&dataset), black_box(&scales));
        })
    });
}

fn bench_linked_wheel_zoom_2k(c: &mut Criterion) {
    let mut linked = LinkedCharts::new(
        sine_dataset(2, 2_000),
        LinkedChartsConfig::default(),
        NullRenderer::default(),
        NullRenderer::default(),
    )
    .expect("linked init");

    let mut delta = -10.0;
    c.bench_function("linked_wheel_zoom_2k", |b| {
        b.iter(|| {
            delta = -delta;
            linked
                .handle(black_box(InputEvent::Wheel {
                    target: ViewTarget::Chart,
                    x: 450.0,
                    y: 520.0,
                    delta_y: delta,
                }))
                .expect("wheel");
        })
    });
}

criterion_group!(
    benches,
    bench_linear_scale_round_trip,
    bench_line_projection_10k,
    bench_linked_wheel_zoom_2k
);
criterion_main!(benches);
