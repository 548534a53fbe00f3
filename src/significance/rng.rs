// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Random number generation for permutation tests.
//!
//! Any [`RngCore`] can drive a permutation test. Passing the same generator
//! state reproduces the same sequence of shuffles. Without an injected
//! generator the process-wide default is used. It is seeded from OS entropy
//! on first use and then reused, never reseeded, for the lifetime of the process.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};
use std::sync::{Mutex, OnceLock, PoisonError};

static DEFAULT_RNG: OnceLock<Mutex<StdRng>> = OnceLock::new();

/// A reproducible generator for audit and debugging runs.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draw a uniformly distributed value in `[0, 1)`.
pub fn unit_uniform<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    rng.r#gen::<f64>()
}

/// Uniformly permute `series` in place (Fisher-Yates).
pub fn shuffle_in_place<R: RngCore + ?Sized>(series: &mut [i32], rng: &mut R) {
    series.shuffle(rng);
}

/// Run `f` with the process-wide default generator.
///
/// The generator is locked for the duration of `f`, so concurrent callers
/// relying on the default draw from it one after another.
pub fn with_default_rng<T>(f: impl FnOnce(&mut StdRng) -> T) -> T {
    let cell = DEFAULT_RNG.get_or_init(|| {
        log::debug!("seeding process-wide default generator from OS entropy");
        Mutex::new(StdRng::from_entropy())
    });
    let mut guard = cell.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut *guard)
}

/// Run `f` with the injected generator, falling back to the process-wide default.
pub fn with_rng<'a, T>(
    rng: Option<&mut (dyn RngCore + 'a)>,
    f: impl FnOnce(&mut (dyn RngCore + 'a)) -> T,
) -> T {
    match rng {
        Some(rng) => f(rng),
        None => with_default_rng(|default| f(default)),
    }
}
