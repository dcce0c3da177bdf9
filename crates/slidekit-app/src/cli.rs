//! Command-line arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "slidekit",
    author,
    version,
    about = "Export and edit SlideKit presentations",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Export a presentation as a static HTML bundle
    Export(ExportArgs),
    /// Print a summary of a presentation file
    Inspect {
        /// Presentation JSON file
        presentation: PathBuf,
    },
    /// Open the sidebar editor for one slide
    Edit(EditArgs),
}

#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    /// Presentation JSON file
    pub presentation: PathBuf,

    /// Output directory for the bundle
    #[arg(short, long)]
    pub out: PathBuf,

    /// Strip indentation and comments from generated files
    #[arg(long)]
    pub minify: bool,

    /// Directory relative audio sources resolve against (defaults to the presentation's
    /// directory). http(s) sources are downloaded.
    #[arg(long)]
    pub assets: Option<PathBuf>,

    /// Export options JSON file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Leave narration audio out of the bundle
    #[arg(long)]
    pub no_audio: bool,

    /// Document title override
    #[arg(long)]
    pub title: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct EditArgs {
    /// Presentation JSON file
    pub presentation: PathBuf,

    /// Zero-based index of the slide to edit
    #[arg(long, default_value_t = 0)]
    pub slide: usize,

    /// Where to save (defaults to the input file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
