//! Generation and redraw timings for the serial and parallel steppers

use std::time::Instant;
use life_backdrop::{
    Algorithm, DisplayList, LifeConfig, Presenter, SeedPattern, Viewport,
    LifeEngine,
};

const CELL_SIZE: u32 = 4;

fn engine_for(algorithm: Algorithm, size: usize) -> LifeEngine {
    let config = LifeConfig {
        cell_size: CELL_SIZE,
        seed_pattern: SeedPattern::Random,
        algorithm,
        ..LifeConfig::backdrop()
    };
    let mut engine = LifeEngine::new(&config);
    let px = (size as u32 * CELL_SIZE) as f32;
    engine.resize(px, px);
    engine
}

/// Average milliseconds per `step`
fn benchmark_step(algorithm: Algorithm, size: usize, iterations: u32) -> f64 {
    let mut engine = engine_for(algorithm, size);

    let start = Instant::now();
    for _ in 0..iterations {
        engine.step();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

/// Average milliseconds to record one full frame into a display list
fn benchmark_render(size: usize, iterations: u32) -> (f64, usize) {
    let config = LifeConfig {
        cell_size: CELL_SIZE,
        seed_pattern: SeedPattern::Random,
        ..LifeConfig::backdrop()
    };
    let px = (size as u32 * CELL_SIZE) as f32;
    let mut presenter = Presenter::new(&config);
    let mut surface = DisplayList::new();
    presenter.handle_resize(Viewport::new(px, px), &mut surface);

    let start = Instant::now();
    for _ in 0..iterations {
        presenter.render(&mut surface);
    }
    let ms = start.elapsed().as_secs_f64() * 1000.0 / iterations as f64;
    (ms, surface.commands().len())
}

fn main() {
    println!("=== Game of Life Step Benchmark ===\n");

    let sizes = [100, 250, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10} {:>12} {:>10}",
        "Size", "Serial", "Parallel", "Speedup", "Render", "Commands");
    println!("{:-<72}", "");

    for size in sizes {
        let serial_ms = benchmark_step(Algorithm::Serial, size, iterations);
        let parallel_ms = benchmark_step(Algorithm::Parallel, size, iterations);
        let (render_ms, commands) = benchmark_render(size, iterations.min(5));

        println!(
            "{:>10} {:>12.2} {:>12.2} {:>9.1}x {:>12.2} {:>10}",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms.max(f64::EPSILON),
            render_ms,
            commands
        );
    }

    for algorithm in Algorithm::all() {
        println!("\n{}: {}", algorithm.name(), algorithm.description());
    }
}
