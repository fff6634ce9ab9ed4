// Host-side tests for the pure particle placement sampling.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod particles {
    include!("../src/core/particles.rs");
}

use constants::*;
use particles::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn sample_returns_requested_count() {
    let mut rng = StdRng::seed_from_u64(42);
    let field = sample(&mut rng, PARTICLE_COUNT, PARTICLE_DELAY_MAX_SEC);
    assert_eq!(field.len(), PARTICLE_COUNT);
}

#[test]
fn placements_stay_inside_viewport_and_delay_window() {
    let mut rng = StdRng::seed_from_u64(7);
    // Draw well past the production count to exercise the ranges
    for p in sample(&mut rng, 5000, PARTICLE_DELAY_MAX_SEC) {
        assert!((0.0..100.0).contains(&p.left_vw));
        assert!((0.0..100.0).contains(&p.top_vh));
        assert!((0.0..PARTICLE_DELAY_MAX_SEC).contains(&p.delay_sec));
    }
}

#[test]
fn placements_are_not_all_identical() {
    let mut rng = StdRng::seed_from_u64(1);
    let field = sample(&mut rng, 50, PARTICLE_DELAY_MAX_SEC);
    assert!(field.iter().any(|p| *p != field[0]));
}

#[test]
fn style_css_renders_viewport_units() {
    let p = Placement {
        left_vw: 12.5,
        top_vh: 40.0,
        delay_sec: 3.25,
    };
    assert_eq!(p.style_css(), "left:12.5vw;top:40vh;animation-delay:3.25s");
}

#[test]
fn sample_is_deterministic_for_a_fixed_seed() {
    let mut a = StdRng::seed_from_u64(9);
    let mut b = StdRng::seed_from_u64(9);
    assert_eq!(
        sample(&mut a, 10, PARTICLE_DELAY_MAX_SEC),
        sample(&mut b, 10, PARTICLE_DELAY_MAX_SEC)
    );
}
