mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::render::run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
