//! Command-line argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "terraforge")]
#[command(about = "Seeded noise terrain and water mesh generator", long_about = None)]
pub struct Args {
    /// TOML file with [terrain], [water] and [storage] tables
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a terrain mesh
    Terrain {
        /// Override the configured seed
        #[arg(long, allow_negative_numbers = true)]
        seed: Option<i32>,

        /// Use Simplex noise instead of Perlin
        #[arg(long)]
        simplex: bool,

        /// Write a shaded color preview PNG
        #[arg(long, value_name = "PNG")]
        preview: Option<PathBuf>,

        /// Store the height field in MongoDB under this name
        #[arg(long, value_name = "NAME")]
        save: Option<String>,
    },

    /// Build the water plane and run its wave clock
    Water {
        /// Simulated duration in seconds
        #[arg(long, default_value = "5")]
        seconds: f32,

        /// Time step in seconds
        #[arg(long, default_value = "0.5")]
        step: f32,
    },

    /// Print a single noise sample
    Sample {
        #[arg(value_enum)]
        kind: SampleKind,

        #[arg(allow_negative_numbers = true)]
        x: f64,

        #[arg(allow_negative_numbers = true)]
        y: f64,

        /// Third coordinate, perlin3 only
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        z: f64,

        #[arg(long, default_value = "1")]
        scale: f64,

        #[arg(long, default_value = "4")]
        octaves: u32,

        #[arg(long, default_value = "0.5")]
        persistence: f64,

        #[arg(long, default_value = "2")]
        lacunarity: f64,

        /// Reseed the table; the reference permutation is used otherwise
        #[arg(long, allow_negative_numbers = true)]
        seed: Option<i32>,
    },

    /// Load a stored terrain from MongoDB and write its preview
    Load {
        name: String,

        #[arg(long, value_name = "PNG", default_value = "terrain.png")]
        preview: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SampleKind {
    Perlin2,
    Perlin3,
    Simplex2,
}
