use std::hint::black_box;
use std::time::Instant;

use quatcam_camera::{MoveDirection, OrientedCamera};

fn bench_look(iterations: usize, constrain_pitch: bool) {
    let mut camera = OrientedCamera::default();

    let start = Instant::now();
    for i in 0..iterations {
        let dx = ((i % 11) as f32 - 5.0) * 1.3;
        let dy = ((i % 7) as f32 - 3.0) * 2.1;
        camera.apply_look_delta(black_box(dx), black_box(dy), constrain_pitch);
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!(
        "  look (constrain={constrain_pitch}, {iterations} events): {per_iter:?}/event, total {elapsed:?}"
    );
    black_box(camera.orientation());
}

fn bench_clamp_at_limit(iterations: usize) {
    let mut camera = OrientedCamera::default();

    let start = Instant::now();
    for _ in 0..iterations {
        // Every event pushes past the limit and forces a basis rebuild.
        camera.apply_look_delta(black_box(0.5), black_box(-2000.0), true);
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!("  look at pitch limit ({iterations} events): {per_iter:?}/event, total {elapsed:?}");
    black_box(camera.orientation());
}

fn bench_frame(iterations: usize) {
    let mut camera = OrientedCamera::default();

    let start = Instant::now();
    for i in 0..iterations {
        camera.apply_look_delta(black_box(0.7), black_box(-0.3), true);
        camera.apply_move_delta(MoveDirection::Forward, black_box(1.0 / 60.0));
        camera.apply_move_delta(MoveDirection::Right, black_box(1.0 / 60.0));
        camera.apply_zoom_delta(black_box(if i % 2 == 0 { 0.5 } else { -0.5 }));
        black_box(camera.view_matrix());
        black_box(camera.projection_matrix(800.0 / 600.0));
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!("  full frame ({iterations} frames): {per_iter:?}/frame, total {elapsed:?}");
}

fn main() {
    println!("OrientedCamera benchmarks");
    bench_look(100_000, true);
    bench_look(100_000, false);
    bench_clamp_at_limit(100_000);
    bench_frame(100_000);
}
