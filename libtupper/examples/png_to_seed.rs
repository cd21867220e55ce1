/// Demonstrates how to draw a picture of your own and turn it into a seed,
/// using the [`image`] crate to paint it
///
use image::{GrayImage, Luma};
use libtupper::{evaluate, Grid, GridStore, ImageStore};

fn main() -> anyhow::Result<()> {
    // a framed box, four times the grid resolution
    let scale = 4;
    let (width, height) = (Grid::WIDTH as u32 * scale, Grid::HEIGHT as u32 * scale);
    let img = GrayImage::from_fn(width, height, |x, y| {
        let edge = x < scale || y < scale || x >= width - scale || y >= height - scale;
        Luma([if edge { 0 } else { 255 }])
    });

    let store = ImageStore::builder().scale(scale).build();
    let grid = store.grid_from_image(&img);
    let seed = libtupper::encode(&grid);
    println!("{seed}");

    assert_eq!(evaluate(&seed), grid);
    store.save_grid(&grid, "png_to_seed_example.png".as_ref())?;
    Ok(())
}
