//! CLI argument structure using clap

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "stencil")]
#[command(version, about = "Render a text template against a JSON values document")]
#[command(long_about = None)]
pub struct Cli {
    /// Template file to render
    pub template: PathBuf,

    /// JSON values file
    pub values: PathBuf,

    /// Where to write the rendered text
    #[arg(short, long, default_value = "out.txt")]
    pub output: PathBuf,

    /// Base directory for relative includes (defaults to the template's directory)
    #[arg(long)]
    pub base_dir: Option<PathBuf>,

    /// Fail on malformed directive arguments instead of rendering them empty
    #[arg(long, env = "STENCIL_STRICT")]
    pub strict: bool,

    /// Print scan and timing details
    #[arg(short, long)]
    pub verbose: bool,
}
