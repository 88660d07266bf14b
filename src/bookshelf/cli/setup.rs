use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bookshelf", bin_name = "bookshelf", version)]
#[command(about = "Keep track of the books on your shelf", long_about = None)]
pub struct Cli {
    /// Catalog file (defaults to the configured file, then ./library.json)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
