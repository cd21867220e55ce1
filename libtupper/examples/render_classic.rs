/// Demonstrates how to render Tupper's constant to a png file
///
use libtupper::{evaluate, GridStore, ImageStore, Preset};

fn main() -> anyhow::Result<()> {
    let grid = evaluate(&Preset::Classic.seed());
    println!("{grid}");

    let store = ImageStore::builder().scale(8).build();
    store.save_grid(&grid, "tupper_classic_example.png".as_ref())?;
    Ok(())
}
