#![allow(dead_code)]

use libtupper::{Preset, Seed, SLICES, SLICE_BITS};
use num_bigint::BigUint;

pub const CLASSIC_FIXTURE: &str = include_str!("../fixtures/classic.txt");
pub const SICK_FIXTURE: &str = include_str!("../fixtures/sick.txt");
pub const DEV_FIXTURE: &str = include_str!("../fixtures/dev.txt");

pub fn fixture(preset: Preset) -> &'static str {
    match preset {
        Preset::Classic => CLASSIC_FIXTURE,
        Preset::Sick => SICK_FIXTURE,
        Preset::Dev => DEV_FIXTURE,
    }
}

/// Deterministic seeds that `encode` can produce: multiples of 17 below `17 * 2^1802`
pub fn aligned_seeds(count: usize) -> Vec<Seed> {
    let bits = SLICES * SLICE_BITS;
    let limit = BigUint::from(1u32) << bits;
    let mut state = 0x9E37_79B9_7F4A_7C15u64;
    let mut seeds = vec![
        Seed::default(),
        Seed::from(17),
        Seed::new((&limit - 1u32) * SLICE_BITS),
    ];
    for _ in 0..count {
        let bytes: Vec<u8> = (0..bits / 8 + 1)
            .map(|_| {
                // xorshift64
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                state.to_le_bytes()[0]
            })
            .collect();
        let packed = BigUint::from_bytes_le(&bytes) % &limit;
        seeds.push(Seed::new(packed * SLICE_BITS));
    }
    seeds
}
