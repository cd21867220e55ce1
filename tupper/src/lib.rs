use std::path::Path;

use anyhow::{Context, Result};
use libtupper::{encode, evaluate_shifted, GridStore, ImageStore, Preset, Seed, Shift};
use num_bigint::BigInt;
use tracing::{debug, info, instrument};

/// Presets rendered by [`gallery`], in order
pub const GALLERY: [Preset; 3] = [Preset::Classic, Preset::Sick, Preset::Dev];

/// Reads a preset name (`classic`, `sick`, `dev`) or a decimal seed
pub fn resolve_seed(arg: &str) -> Result<Seed> {
    if let Ok(preset) = arg.parse::<Preset>() {
        debug!("Using preset {preset}");
        return Ok(preset.seed());
    }
    arg.parse::<Seed>()
        .with_context(|| format!("{arg:?} is neither a preset nor a seed"))
}

#[instrument(skip(seed))]
pub fn seed_to_image(seed: &Seed, shift: &Shift, output_name: &Path, scale: u32) -> Result<()> {
    let grid = evaluate_shifted(seed, shift)?;
    debug!("Rasterized {} ink pixels", grid.ink());

    ImageStore::builder()
        .scale(scale)
        .build()
        .save_grid(&grid, output_name)?;
    info!("Successfully wrote grid image to {}", output_name.display());
    Ok(())
}

pub fn seed_to_text(seed: &Seed, shift: &Shift) -> Result<String> {
    Ok(evaluate_shifted(seed, shift)?.to_string())
}

#[instrument]
pub fn image_to_seed(image_file: &Path) -> Result<Seed> {
    let grid = ImageStore::default().load_grid(image_file)?;
    debug!("Read {} ink pixels from image", grid.ink());
    Ok(encode(&grid))
}

/// Renders the [`GALLERY`] presets into `out_dir`, each one reached by shifting the
/// classic seed, then encodes the dev image back and returns `seed - dev`
#[instrument]
pub fn gallery(out_dir: &Path, scale: u32) -> Result<BigInt> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Create {}", out_dir.display()))?;
    let classic = Preset::Classic.seed();
    for preset in GALLERY {
        let shift = Shift::between(&classic, &preset.seed());
        debug!("{preset}: shift {shift}");
        seed_to_image(&classic, &shift, &out_dir.join(preset.file_name()), scale)?;
    }

    // now from the dev image and back to the number
    let dev = image_to_seed(&out_dir.join(Preset::Dev.file_name()))?;
    let err = BigInt::from(dev) - BigInt::from(Preset::Dev.seed());
    info!("Round trip error: {err}");
    Ok(err)
}
