use std::{fmt::Display, str::FromStr};

use itertools::Itertools;

use crate::Error;

/// Number of bits in one slice of the seed.
///
/// Each slice becomes one column of the rendered [`Grid`], so this is also the grid height.
pub const SLICE_BITS: usize = 17;

/// Number of slices rasterized from one seed, i.e. the grid width
pub const SLICES: usize = 106;

const INK: char = '#';
const PAPER: char = '.';

/// Two-tone raster produced by the formula
///
/// Pixels are stored row-major with the origin in the top-left corner, the way
/// image files lay them out. `true` is ink.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    pixels: Vec<bool>,
}

impl Grid {
    /// Number of pixel columns
    pub const WIDTH: usize = SLICES;
    /// Number of pixel rows
    pub const HEIGHT: usize = SLICE_BITS;

    /// Creates a [`Grid`] without any ink
    #[must_use]
    pub fn empty() -> Self {
        Self {
            pixels: vec![false; Self::WIDTH * Self::HEIGHT],
        }
    }

    /// Creates a [`Grid`] by calling `f(row, column)` for every pixel
    #[must_use]
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let pixels = (0..Self::HEIGHT)
            .cartesian_product(0..Self::WIDTH)
            .map(|(row, column)| f(row, column))
            .collect();
        Self { pixels }
    }

    /// Creates a [`Grid`] from a slice of rows
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] unless there are exactly [`Self::HEIGHT`]
    /// rows, each exactly [`Self::WIDTH`] pixels long
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self, Error> {
        let expected = (Self::HEIGHT, Self::WIDTH);
        if rows.len() != Self::HEIGHT {
            let columns = rows.first().map_or(0, |row| row.as_ref().len());
            return Err(Error::InvalidDimensions {
                expected,
                found: (rows.len(), columns),
            });
        }
        if let Some(row) = rows.iter().find(|row| row.as_ref().len() != Self::WIDTH) {
            return Err(Error::InvalidDimensions {
                expected,
                found: (rows.len(), row.as_ref().len()),
            });
        }
        let pixels = rows
            .iter()
            .flat_map(|row| row.as_ref().iter().copied())
            .collect();
        Ok(Self { pixels })
    }

    /// Returns the pixel at `(row, column)`, or [`None`] when out of bounds
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<bool> {
        (row < Self::HEIGHT && column < Self::WIDTH).then(|| self.pixels[row * Self::WIDTH + column])
    }

    /// Sets the pixel at `(row, column)`. Out of bounds writes are ignored
    pub fn set(&mut self, row: usize, column: usize, value: bool) {
        if row < Self::HEIGHT && column < Self::WIDTH {
            self.pixels[row * Self::WIDTH + column] = value;
        }
    }

    /// get an entire row of the grid
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[bool]> {
        if row < Self::HEIGHT {
            let start_index = row * Self::WIDTH;
            Some(&self.pixels[start_index..start_index + Self::WIDTH])
        } else {
            None
        }
    }

    /// Iterates over the rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.pixels.chunks_exact(Self::WIDTH)
    }

    /// Returns every pixel, row-major
    #[must_use]
    pub fn pixels(&self) -> &[bool] {
        &self.pixels
    }

    /// Number of ink pixels
    #[must_use]
    pub fn ink(&self) -> usize {
        self.pixels.iter().filter(|&&p| p).count()
    }

    /// Copies the grid into owned rows
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.rows().map(<[bool]>::to_vec).collect()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

/// Renders the grid as text: `#` for ink, `.` for paper, one line per row
impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = self
            .rows()
            .map(|row| {
                row.iter()
                    .map(|&p| if p { INK } else { PAPER })
                    .collect::<String>()
            })
            .join("\n");
        write!(f, "{text}")
    }
}

/// Parses the text produced by [`Display`]. Surrounding blank lines are ignored
impl FromStr for Grid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .trim()
            .lines()
            .map(|line| {
                line.trim_end()
                    .chars()
                    .map(|c| match c {
                        INK => Ok(true),
                        PAPER => Ok(false),
                        _ => Err(Error::Parse {
                            kind: "grid",
                            input: line.to_owned(),
                        }),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(&rows)
    }
}
