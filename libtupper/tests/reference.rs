use libtupper::{
    decode, encode, evaluate, evaluate_shifted, Error, Evaluator, Grid, Precision, Preset, Shift,
};
use strum::IntoEnumIterator;

mod common;
use common::{aligned_seeds, fixture, CLASSIC_FIXTURE};

#[test]
fn classic_draws_the_formula() -> anyhow::Result<()> {
    let grid = evaluate(&Preset::Classic.seed());
    assert_eq!(grid.to_string(), CLASSIC_FIXTURE.trim_end());
    assert_eq!(grid, CLASSIC_FIXTURE.parse::<Grid>()?);
    Ok(())
}

#[test]
fn presets_draw_their_fixtures() {
    for preset in Preset::iter() {
        let grid = evaluate(&preset.seed());
        assert_eq!(grid.to_string(), fixture(preset).trim_end(), "{preset}");
    }
}

#[test]
fn presets_round_trip() {
    for preset in Preset::iter() {
        let seed = preset.seed();
        assert_eq!(encode(&decode(&seed)), seed, "{preset}");
    }
}

#[test]
fn shifting_classic_reaches_other_presets() -> Result<(), Error> {
    let classic = Preset::Classic.seed();
    for preset in [Preset::Sick, Preset::Dev] {
        let target = preset.seed();
        // the classic-to-target distance, applied backwards
        let k_diff = Shift::between(&target, &classic);
        let grid = evaluate_shifted(&classic, &-k_diff)?;
        assert_eq!(grid, evaluate(&target), "{preset}");
        assert_eq!(encode(&grid), target, "{preset}");
    }
    Ok(())
}

#[test]
fn shift_is_translation() -> Result<(), Error> {
    let classic = Preset::Classic.seed();
    for i in [-1000i64, -17, -1, 0, 1, 17, 1000] {
        let shift = Shift::from_integer(i);
        assert_eq!(
            evaluate_shifted(&classic, &shift)?,
            evaluate(&classic.shifted(&shift)?)
        );
    }
    Ok(())
}

#[test]
fn seventeenth_shift_moves_the_picture_one_row() -> Result<(), Error> {
    let classic = Preset::Classic.seed();
    let original = evaluate(&classic);
    let moved = evaluate_shifted(&classic, &"1/17".parse()?)?;
    for row in 0..Grid::HEIGHT - 1 {
        assert_eq!(moved.row(row), original.row(row + 1));
    }
    Ok(())
}

#[test]
fn round_trip_law() {
    for seed in aligned_seeds(64) {
        assert_eq!(encode(&evaluate(&seed)), seed);
    }
}

#[test]
fn evaluation_is_deterministic() -> Result<(), Error> {
    let shift: Shift = "-3/2".parse()?;
    let seed = Preset::Sick.seed();
    let first = evaluate_shifted(&seed, &shift)?;
    for _ in 0..4 {
        assert_eq!(evaluate_shifted(&seed, &shift)?, first);
    }
    assert_eq!(first.pixels().len(), Grid::WIDTH * Grid::HEIGHT);
    Ok(())
}

#[test]
fn low_precision_loses_bits() -> Result<(), Error> {
    let seed = Preset::Classic.seed();
    let exact = evaluate(&seed);
    for digits in [20, 200, 540] {
        let lossy = Evaluator::builder()
            .precision(Precision::Digits(digits))
            .build()
            .evaluate(&seed)?;
        assert_ne!(lossy, exact, "{digits} digits");
    }
    let enough = Evaluator::builder()
        .precision(Precision::Digits(seed.digits()))
        .strict(true)
        .build();
    assert_eq!(enough.evaluate(&seed)?, exact);
    Ok(())
}
