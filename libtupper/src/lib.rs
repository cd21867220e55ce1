//! # libtupper
//!
//!
//! This library encodes and decodes bitmaps with [Tupper's self-referential formula](https://en.wikipedia.org/wiki/Tupper%27s_self-referential_formula),
//! the inequality
//!
//! ```text
//! 1/2 < floor(mod(floor(y/17) * 2^(-17*floor(x) - mod(floor(y), 17)), 2))
//! ```
//!
//! which, plotted over `0 <= x < 106` and `k <= y < k + 17` for one particular 543 digit
//! constant `k`, draws itself.
//!
//! It provides the two directions of the mapping between such a constant (a [`Seed`]) and a
//! 106 x 17 two-tone [`Grid`]:
//! - [`evaluate`] rasterizes a seed through the inequality
//! - [`encode`] derives the seed that rasterizes to a given grid
//!
//! Both operate on exact integers. The formula is, in the end, a bit read on a very large
//! number, and any floating point or fixed precision evaluation of it silently loses the low
//! order bits once the seed outgrows the precision. [`Evaluator`] can emulate a limited
//! [`Precision`] to demonstrate (or detect) exactly that.
//!
//! ### Usage
//!
//! #### Rendering a seed
//!
//! ```rust
//! use libtupper::{encode, evaluate, Preset};
//!
//! let seed = Preset::Classic.seed();
//! let grid = evaluate(&seed);
//! println!("{grid}");
//! assert_eq!(encode(&grid), seed);
//! ```
//!
//! #### Moving between images
//!
//! Seeds that differ by a multiple of 17 draw vertically translated slices of one infinite
//! plot. A [`Shift`] expresses such a translation; [`Shift::between`] finds the one that
//! takes one seed to another.
//!
//! ```rust
//! use libtupper::{encode, evaluate_shifted, Preset, Shift};
//!
//! let classic = Preset::Classic.seed();
//! let dev = Preset::Dev.seed();
//! let grid = evaluate_shifted(&classic, &Shift::between(&classic, &dev))?;
//! assert_eq!(encode(&grid), dev);
//! # Ok::<(), libtupper::Error>(())
//! ```
//!
//! #### Images
//!
//! Reading and writing image files is kept behind the [`GridStore`] trait. [`ImageStore`]
//! implements it with the [`image`](https://docs.rs/image) crate.
//!
//! ```rust
//! use libtupper::{encode, evaluate, GridStore, ImageStore, Preset};
//! use std::path::Path;
//!
//! fn main() -> anyhow::Result<()> {
//!     let store = ImageStore::builder().scale(4).build();
//!     let path = Path::new("tupper_doc_example.png");
//!     store.save_grid(&evaluate(&Preset::Dev.seed()), path)?;
//!     let seed = encode(&store.load_grid(path)?);
//! #   std::fs::remove_file(path)?;
//!     assert_eq!(seed, Preset::Dev.seed());
//!     Ok(())
//! }
//! ```
//!

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    missing_docs
)]

/// Grid to seed conversion
pub mod codec;
mod constants;
mod error;
pub mod evaluate;
mod grid;
mod parse;
mod seed;
/// Grid persistence
pub mod store;

pub use codec::{decode, encode, encode_rows};
pub use constants::Preset;
pub use error::Error;
pub use evaluate::{evaluate, evaluate_shifted, Evaluator, Precision};
pub use grid::{Grid, SLICES, SLICE_BITS};
pub use seed::{Seed, Shift};
pub use store::{GridStore, ImageStore};
