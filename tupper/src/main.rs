use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use libtupper::Shift;
use tracing::{info, Level};
use tupper::{gallery, image_to_seed, resolve_seed, seed_to_image, seed_to_text};

#[cfg(not(debug_assertions))]
const DEFAULT_DEBUG_LEVEL: u8 = 1;
#[cfg(debug_assertions)]
const DEFAULT_DEBUG_LEVEL: u8 = 99;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Turn debugging information on
    #[arg(short, long, default_value_t = DEFAULT_DEBUG_LEVEL, action = clap::ArgAction::Count)]
    verbosity: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// renders a seed (a decimal integer or one of classic, sick, dev)
    Decode {
        /// The seed
        seed: String,

        /// Shift in units of 17, e.g. `-3` or `1/17`
        #[arg(short, long, allow_hyphen_values = true, conflicts_with = "target")]
        shift: Option<Shift>,

        /// Shift the seed until it renders like this seed or preset
        #[arg(short = 'a', long = "as")]
        target: Option<String>,

        /// The output image. Prints the grid as text when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Side length in image pixels of one grid pixel
        #[arg(long, default_value_t = 1)]
        scale: u32,
    },

    /// prints the seed of an image
    Encode {
        /// The image
        img_file: PathBuf,
    },

    /// renders the classic, sick and dev images and checks the dev image round trip
    Gallery {
        /// The output directory
        #[arg(short, long, default_value = "images")]
        out_dir: PathBuf,

        /// Side length in image pixels of one grid pixel
        #[arg(long, default_value_t = 4)]
        scale: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = match cli.verbosity {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Decode {
            seed,
            shift,
            target,
            output,
            scale,
        } => {
            if scale == 0 {
                bail!("Scale must be at least 1");
            }
            let seed = resolve_seed(&seed)?;
            let shift = match (shift, target) {
                (Some(shift), _) => shift,
                (None, Some(target)) => Shift::between(&seed, &resolve_seed(&target)?),
                (None, None) => Shift::zero(),
            };
            info!("shift: {shift}");
            match output {
                Some(output) => seed_to_image(&seed, &shift, &output, scale)?,
                None => println!("{}", seed_to_text(&seed, &shift)?),
            }
        }
        Commands::Encode { img_file } => {
            if !img_file.is_file() {
                bail!("Invalid img file");
            }
            println!("{}", image_to_seed(&img_file)?);
        }
        Commands::Gallery { out_dir, scale } => {
            if scale == 0 {
                bail!("Scale must be at least 1");
            }
            let err = gallery(&out_dir, scale)?;
            info!("images written to {}", out_dir.display());
            println!("{err}");
        }
    }
    Ok(())
}
