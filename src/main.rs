// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use clap::Parser;

use pictogram::cli::args::{Cli, Commands};
use pictogram::cli::render::run_render;

fn main() {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Render(args) => run_render(args),
    }
}
