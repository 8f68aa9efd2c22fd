use std::time::{Duration, Instant};

use histogram::{Area, Height};
use rand::{rngs::StdRng, Rng, SeedableRng};

const SEED: u64 = 31415;
const SIZES: [usize; 4] = [1_000, 10_000, 100_000, 1_000_000];
/// The quadratic solution is only timed up to this size.
const NAIVE_MAX: usize = 10_000;
const WINDOW: usize = 100;

fn time<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let out = f();
    (out, start.elapsed())
}

fn examples() -> Result<(), Box<dyn std::error::Error>> {
    let heights = [2, 1, 5, 6, 2, 3];
    println!(
        "largest_rectangle({heights:?}) = {}",
        histogram::largest_rectangle(&heights)
    );

    let nums = [1, 3, -1, -3, 5, 3, 6, 7];
    println!(
        "sliding_window_max({nums:?}, 3) = {:?}",
        window::sliding_window_max(&nums, 3)?
    );

    let grid = ["10100", "10111", "11111", "10010"];
    println!(
        "maximal_rectangle({grid:?}) = {}",
        histogram::maximal_rectangle(&grid)?
    );
    Ok(())
}

fn bench(rng: &mut StdRng) {
    let solutions: [(&str, fn(&[Height]) -> Area); 4] = [
        ("naive", histogram::largest_rectangle_naive),
        ("boundaries", histogram::largest_rectangle),
        ("one_pass", histogram::largest_rectangle_one_pass),
        ("rmq", histogram::largest_rectangle_rmq),
    ];
    for n in SIZES {
        let heights = (0..n).map(|_| rng.gen_range(0..1000)).collect::<Vec<Height>>();
        eprintln!("n = {n}");
        let mut areas = vec![];
        for (name, f) in solutions {
            if name == "naive" && n > NAIVE_MAX {
                continue;
            }
            let (area, t) = time(|| f(&heights));
            eprintln!("{name:>12}: {t:>12?}  area {area}");
            areas.push(area);
        }
        assert!(areas.windows(2).all(|w| w[0] == w[1]), "{areas:?}");

        let (max, t) = time(|| window::sliding_window_max(&heights, WINDOW));
        eprintln!("{:>12}: {t:>12?}  k {WINDOW}", "window_max");
        if n <= NAIVE_MAX {
            assert_eq!(max, window::sliding_window_max_naive(&heights, WINDOW));
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    examples()?;
    eprintln!("Timing on random input with seed {SEED}...");
    bench(&mut StdRng::seed_from_u64(SEED));
    Ok(())
}
