use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use waypoint_input::{
    entities_under, Input, NativeEventType, NativePointerEvent, Rect,
};

const ENTITY_SAMPLES: &[usize] = &[64, 1024, 16384];
const MOVE_BURST: usize = 256;

/// A grid of 32x32 boxes, one per entity id.
fn grid_bounds(id: &usize) -> Option<Rect> {
    let column = (*id % 128) as f32;
    let row = (*id / 128) as f32;
    Some(Rect::new(column * 40.0, row * 40.0, 32.0, 32.0))
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit_test_per_frame");
    for &count in ENTITY_SAMPLES {
        let mut input = Input::new();
        input.dispatch(&NativePointerEvent::mouse(
            NativeEventType::Move,
            None,
            1210.0,
            410.0,
        ));
        let entities: Vec<usize> = (0..count).collect();

        group.bench_with_input(BenchmarkId::from_parameter(count), &entities, |b, entities| {
            b.iter(|| {
                let hits = entities_under(input.primary(), &grid_bounds, entities.iter());
                black_box(hits.len())
            });
        });
    }
    group.finish();
}

fn bench_move_burst(c: &mut Criterion) {
    let events: Vec<NativePointerEvent> = (0..MOVE_BURST)
        .map(|step| {
            NativePointerEvent::mouse(NativeEventType::Move, None, step as f64, step as f64)
        })
        .collect();

    c.bench_function("dispatch_move_burst", |b| {
        let mut input = Input::new();
        for _ in 0..4 {
            input.primary().on(waypoint_input::PointerEventKind::Move, |event| {
                black_box(event.page_pos);
            });
        }
        b.iter(|| {
            for native in &events {
                black_box(input.dispatch(native));
            }
        });
    });
}

criterion_group!(benches, bench_hit_test, bench_move_burst);
criterion_main!(benches);
