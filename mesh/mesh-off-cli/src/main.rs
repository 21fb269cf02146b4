//! `offmesh`: inspect and convert OFF mesh files.
//!
//! # Commands
//!
//! - `offmesh inspect <file>` - Print variant, counts, skipped lines and bounds
//! - `offmesh convert <in> <out>` - Re-encode a file, optionally remapping axes
//!
//! Logging goes to stderr. `RUST_LOG` takes precedence over `-v`.

mod convert;
mod inspect;

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use mesh_off::{Axis, ImportParams};
use tracing_subscriber::EnvFilter;

/// Inspect and convert OFF / NOFF / COFF / NCOFF mesh files
#[derive(Parser)]
#[command(name = "offmesh")]
#[command(about = "Inspect and convert OFF mesh files", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a summary of an OFF file
    Inspect {
        /// The file to inspect
        #[arg(name = "FILE")]
        path: PathBuf,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        import: ImportArgs,
    },

    /// Re-encode an OFF file
    Convert {
        /// Source file
        #[arg(name = "INPUT")]
        input: PathBuf,

        /// Destination file
        #[arg(name = "OUTPUT")]
        output: PathBuf,

        /// Write per-vertex normals (computed if the source has none)
        #[arg(long)]
        normals: bool,

        /// Write per-vertex colors (white if the source has none)
        #[arg(long)]
        colors: bool,

        /// Forward axis of the source file, e.g. -Z
        #[arg(long, allow_hyphen_values = true)]
        forward: Option<Axis>,

        /// Up axis of the source file, e.g. Y
        #[arg(long, allow_hyphen_values = true)]
        up: Option<Axis>,

        #[command(flatten)]
        import: ImportArgs,
    },
}

/// Decoder options shared by every command.
#[derive(Args)]
struct ImportArgs {
    /// Read `3 a b c` records as triangles instead of edges
    #[arg(long)]
    triangles_as_faces: bool,
}

impl ImportArgs {
    fn params(&self) -> ImportParams {
        if self.triangles_as_faces {
            ImportParams::triangles_as_faces()
        } else {
            ImportParams::default()
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Inspect { path, json, import } => inspect::run(&path, &import.params(), json),
        Commands::Convert {
            input,
            output,
            normals,
            colors,
            forward,
            up,
            import,
        } => convert::run(&convert::Options {
            input,
            output,
            normals,
            colors,
            forward,
            up,
            import: import.params(),
        }),
    }
}
