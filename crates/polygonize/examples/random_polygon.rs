//! Turn a few random point sets into simple polygons and print the runs.
//!
//! Usage:
//!   cargo run -p polygonize --example random_polygon -- [policy]
//!
//! `policy` is any selector accepted by `Policy::from_selector` (default
//! `best-first`).

use polygonize::construct::ConstructionMethod;
use polygonize::improve::Policy;
use polygonize::sample::{draw_points, BoxCfg, ReplayToken};
use polygonize::session::Session;

fn main() {
    let selector = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "best-first".to_string());
    let policy = match Policy::from_selector(&selector, 200) {
        Ok(p) => p,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };
    let cfg = BoxCfg {
        count: 12,
        bound: 20,
    };
    let mut session = Session::seeded(2025);
    for index in 0..5 {
        let pts = draw_points(cfg, ReplayToken { seed: 2025, index }).unwrap();
        let start = session
            .construct(&pts, ConstructionMethod::RandomPermutation)
            .unwrap();
        println!(
            "sample {index}: start {start} perimeter={} crossings={}",
            start.perimeter(),
            start.intersection_count()
        );
        let run = session.improve(start, policy, Some(1_000));
        match run.error {
            None => println!("  -> {} perimeter={}", run.tour, run.tour.perimeter()),
            Some(err) => println!("  -> {err} (stopped at {})", run.tour),
        }
    }
}
