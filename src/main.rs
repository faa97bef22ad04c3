// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use clap::Parser;

use ultralytics_aigym::cli::args::{Cli, Commands};
use ultralytics_aigym::cli::count::run_count;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Count(args) => run_count(&args),
    }
}
