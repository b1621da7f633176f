//! Throughput benchmark for the grid engine

use std::time::Instant;

use gol::Grid;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Average milliseconds per generation over `iterations` steps of a
/// randomized size x size grid.
fn benchmark_steps(size: usize, iterations: u32) -> gol::Result<f64> {
    let mut grid = Grid::new(size, size)?;
    grid.randomize(&mut StdRng::seed_from_u64(0xC0FFEE));

    let start = Instant::now();
    for _ in 0..iterations {
        grid.step();
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn main() -> gol::Result<()> {
    println!("=== Game of Life Grid Benchmark ===\n");

    let sizes = [128, 256, 512, 1024, 2048];
    let iterations = 20;

    println!("{:>12} {:>12} {:>16}", "Size", "ms/gen", "cells/sec");
    println!("{:-<42}", "");

    for size in sizes {
        let ms = benchmark_steps(size, iterations)?;
        let cells = (size * size) as f64;
        let throughput = cells / (ms / 1000.0) / 1_000_000.0;

        println!(
            "{:>12} {:>12.2} {:>15.1}M",
            format!("{}x{}", size, size),
            ms,
            throughput
        );
    }

    Ok(())
}
