use criterion::{Criterion, black_box, criterion_group, criterion_main};
use fractal_mosaic::{
    DisplaySurface, MemorySurface, NeverCancel, RenderConfig, WrappingPalette, partition_tiles,
    render_mosaic_tiles,
};

fn bench_composite(c: &mut Criterion) {
    let config = RenderConfig::default();
    let grid = partition_tiles(config.worker_count, config.screen).unwrap();
    let tiles = render_mosaic_tiles(
        &grid,
        &config.initial_view,
        &WrappingPalette::default(),
        &NeverCancel,
    )
    .unwrap();
    let mut surface = MemorySurface::new(config.screen).unwrap();

    c.bench_function("composite_24_tiles_1800x1000", |b| {
        b.iter(|| {
            for (assignment, tile) in grid.tiles().iter().zip(&tiles) {
                surface.blit(black_box(assignment.origin()), black_box(tile));
            }
        })
    });
}

criterion_group!(benches, bench_composite);
criterion_main!(benches);
