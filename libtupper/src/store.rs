use std::{fs::File, io::BufWriter, path::Path};

use anyhow::{bail, ensure, Context, Result};
use bon::Builder;
use image::{codecs::png::PngEncoder, GrayImage, ImageEncoder, ImageReader, Luma};
use tracing::{debug, info, instrument};

use crate::grid::Grid;

/// Luma below which an image pixel counts as ink
pub const DEFAULT_THRESHOLD: u8 = 100;

/// Upper bound on the number of pixels a saved image may have
pub const MAX_IMAGE_PIXELS: u64 = 1 << 28;

const INK: u8 = 0x00;
const PAPER: u8 = 0xFF;

/// Moves [`Grid`]s in and out of files
pub trait GridStore {
    /// Reads a [`Grid`] from `path`
    ///
    /// # Errors
    ///
    /// Implementation defined, typically i/o or decoding errors
    fn load_grid(&self, path: &Path) -> Result<Grid>;

    /// Writes `grid` to `path`
    ///
    /// # Errors
    ///
    /// Implementation defined, typically i/o or encoding errors
    fn save_grid(&self, grid: &Grid, path: &Path) -> Result<()>;
}

/// [`GridStore`] backed by image files
///
/// Loading accepts any format the [`image`] crate can decode: the picture is
/// converted to grayscale, resampled to exactly [`Grid::WIDTH`] x [`Grid::HEIGHT`]
/// with nearest neighbour sampling and thresholded. Saving writes a black on
/// white PNG where every grid pixel covers `scale` x `scale` image pixels.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Builder)]
pub struct ImageStore {
    /// Side length, in image pixels, of one grid pixel when saving
    #[builder(default = 1)]
    scale: u32,
    /// Pixels with a luma below this are ink when loading
    #[builder(default = DEFAULT_THRESHOLD)]
    threshold: u8,
}

impl Default for ImageStore {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ImageStore {
    /// Thresholds an in-memory grayscale image into a [`Grid`]
    ///
    /// Every grid pixel samples the image pixel under its centre, so images
    /// saved at any scale load back unchanged.
    #[must_use]
    pub fn grid_from_image(&self, img: &GrayImage) -> Grid {
        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            return Grid::empty();
        }
        let nearest = |i: usize, steps: usize, extent: u32| {
            let centre = (2 * i as u64 + 1) * u64::from(extent) / (2 * steps as u64);
            u32::try_from(centre).unwrap_or(extent - 1).min(extent - 1)
        };
        Grid::from_fn(|row, column| {
            let x = nearest(column, Grid::WIDTH, width);
            let y = nearest(row, Grid::HEIGHT, height);
            img.get_pixel(x, y)[0] < self.threshold
        })
    }

    /// Renders a [`Grid`] into an in-memory grayscale image
    ///
    /// # Errors
    ///
    /// Returns an error if the scale is zero or the scaled image would exceed
    /// [`MAX_IMAGE_PIXELS`]
    pub fn image_from_grid(&self, grid: &Grid) -> Result<GrayImage> {
        let scale = self.scale;
        ensure!(scale > 0, "Image scale must be at least 1");
        let dimensions = (Grid::WIDTH as u32)
            .checked_mul(scale)
            .zip((Grid::HEIGHT as u32).checked_mul(scale))
            .filter(|&(w, h)| u64::from(w) * u64::from(h) <= MAX_IMAGE_PIXELS);
        let Some((width, height)) = dimensions else {
            bail!("Image scale {scale} is too large, at most {MAX_IMAGE_PIXELS} pixels are rendered");
        };
        debug!("Rendering {width}x{height} image");
        Ok(GrayImage::from_fn(width, height, |x, y| {
            let ink = grid
                .get((y / scale) as usize, (x / scale) as usize)
                .unwrap_or_default();
            Luma([if ink { INK } else { PAPER }])
        }))
    }
}

impl GridStore for ImageStore {
    #[instrument]
    fn load_grid(&self, path: &Path) -> Result<Grid> {
        // format is sniffed from content, not the extension
        let img = ImageReader::open(path)
            .and_then(ImageReader::with_guessed_format)
            .with_context(|| format!("Open image {}", path.display()))?
            .decode()
            .with_context(|| format!("Decode image {}", path.display()))?;
        debug!("Read {}x{} image", img.width(), img.height());
        let grid = self.grid_from_image(&img.to_luma8());
        debug!("Thresholded {} ink pixels", grid.ink());
        Ok(grid)
    }

    #[instrument(skip(grid))]
    fn save_grid(&self, grid: &Grid, path: &Path) -> Result<()> {
        let img = self
            .image_from_grid(grid)
            .with_context(|| format!("Render {}", path.display()))?;

        let output = File::options()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
            .with_context(|| format!("Create {}", path.display()))?;

        info!("Writing grid image to {}", path.display());
        let encoder = PngEncoder::new(BufWriter::new(output));
        encoder.write_image(
            img.as_raw(),
            img.width(),
            img.height(),
            image::ExtendedColorType::L8,
        )?;
        info!("Successfully wrote grid image to {}", path.display());
        Ok(())
    }
}
