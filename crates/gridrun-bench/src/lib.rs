//! Benchmark profiles and utilities for the gridrun simulator.
//!
//! Provides seeded [`ScenarioConfig`] profiles for benchmarks:
//!
//! - [`reference_profile`]: 100x100 field with 64 cars and 100-command programs
//! - [`stress_profile`]: 316x316 field with 1024 cars and 500-command programs
//! - [`random_fleet`]: the generator both are built on

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::HashSet;

use gridrun_core::{CommandKind, Coordinate, Heading};
use gridrun_engine::{ScenarioConfig, VehicleSpec};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// 100x100 field, 64 cars, 100 commands each.
pub fn reference_profile(seed: u64) -> ScenarioConfig {
    random_fleet(100, 100, 64, 100, seed)
}

/// 316x316 field (~100K cells), 1024 cars, 500 commands each.
pub fn stress_profile(seed: u64) -> ScenarioConfig {
    random_fleet(316, 316, 1024, 500, seed)
}

/// Generate a deterministic fleet of `n` cars on a `width x height` field.
///
/// Starting cells are distinct. Programs are `program_len` commands,
/// weighted two forwards to each rotation so cars actually travel.
/// `n` is capped at the number of cells.
pub fn random_fleet(
    width: i32,
    height: i32,
    n: usize,
    program_len: usize,
    seed: u64,
) -> ScenarioConfig {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut config = ScenarioConfig::new(width, height);
    let cells = (width.max(0) as usize) * (height.max(0) as usize);
    let n = n.min(cells);

    let mut taken = HashSet::with_capacity(n);
    while config.vehicles.len() < n {
        let position = Coordinate::new(rng.gen_range(0..width), rng.gen_range(0..height));
        if !taken.insert(position) {
            continue;
        }
        let heading = Heading::ALL[rng.gen_range(0..4usize)];
        let program: String = (0..program_len)
            .map(|_| match rng.gen_range(0..4u8) {
                0 => CommandKind::RotateLeft,
                1 => CommandKind::RotateRight,
                _ => CommandKind::Forward,
            })
            .map(CommandKind::as_char)
            .collect();
        let name = format!("car{}", config.vehicles.len());
        config
            .vehicles
            .push(VehicleSpec::new(name, position, heading, program));
    }
    config
}
