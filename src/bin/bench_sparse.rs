use rand::RngCore;
use rand::SeedableRng;
use sparse_life::{Coord, SparseLife, SparseLifeConfig};
use std::time::Instant;

fn random_soup(size: i64, density: f64) -> Vec<Coord> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(0x5EED_1234_ABCD_EF01);
    let threshold = (u64::MAX as f64 * density) as u64;

    let mut cells = Vec::new();
    for y in 0..size {
        for x in 0..size {
            if rng.next_u64() <= threshold {
                cells.push(Coord::new(x, y));
            }
        }
    }
    cells
}

fn bench(cells: &[Coord], config: SparseLifeConfig, iterations: u64) -> (f64, usize) {
    let mut engine = SparseLife::with_config(cells.iter().copied(), config)
        .unwrap_or_else(|err| panic!("failed to build engine: {err}"));

    let start = Instant::now();
    engine.advance_n(iterations);
    let duration = start.elapsed();

    (duration.as_secs_f64() * 1000.0, engine.population())
}

fn main() {
    let scales: &[(i64, u64)] = &[
        (64, 200),  // below the sharding threshold
        (128, 100), // around the threshold
        (256, 50),
        (512, 20),
        (1024, 10),
    ];

    println!(
        "{:<10} {:>10} {:>8} {:>14} {:>14} {:>10}",
        "Grid", "Pop", "Iters", "Serial(ms)", "Sharded(ms)", "Speedup"
    );
    println!("{}", "-".repeat(72));

    for &(size, iters) in scales {
        let cells = random_soup(size, 0.35);
        let (serial_ms, serial_pop) =
            bench(&cells, SparseLifeConfig::default().thread_count(1), iters);
        let (sharded_ms, sharded_pop) = bench(&cells, SparseLifeConfig::default(), iters);
        assert_eq!(serial_pop, sharded_pop, "sharded run diverged at {size}x{size}");

        println!(
            "{:<10} {:>10} {:>8} {:>14.1} {:>14.1} {:>9.2}x",
            format!("{}x{}", size, size),
            serial_pop,
            iters,
            serial_ms,
            sharded_ms,
            serial_ms / sharded_ms
        );
    }
}
