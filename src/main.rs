//! usamap CLI
//!
//! Renders the USA map (or a custom region dataset) to SVG.
//!
//! Usage:
//!   usamap [OPTIONS]
//!
//! Options:
//!   -s, --style <FILE>    Fill policy file (TOML format)
//!   -d, --dataset <FILE>  Custom region dataset (TOML format)
//!   -o, --output <FILE>   Write SVG to a file instead of stdout

use std::fs;
use std::path::PathBuf;

use clap::Parser;

use usamap::{render_map, FillPolicy, MapConfig, RegionTable};

#[derive(Parser)]
#[command(name = "usamap")]
#[command(about = "Render an SVG map of the United States")]
struct Cli {
    /// Fill policy file (TOML format)
    #[arg(short, long)]
    style: Option<PathBuf>,

    /// Custom region dataset (TOML format)
    #[arg(short, long)]
    dataset: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Map title
    #[arg(short, long)]
    title: Option<String>,

    /// Rendered canvas width
    #[arg(long)]
    width: Option<u32>,

    /// Rendered canvas height
    #[arg(long)]
    height: Option<u32>,

    /// Default fill color for regions without an override
    #[arg(short, long)]
    fill: Option<String>,

    /// Emit compact single-line SVG
    #[arg(short, long)]
    compact: bool,

    /// List region identifiers and names instead of rendering
    #[arg(short, long)]
    list_regions: bool,
}

fn main() {
    let cli = Cli::parse();

    // Load dataset
    let table = match &cli.dataset {
        Some(path) => match RegionTable::from_file(path) {
            Ok(t) => t,
            Err(e) => {
                eprintln!("Error loading dataset '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => RegionTable::builtin(),
    };

    if cli.list_regions {
        for region in &table {
            println!("{}  {}", region.id, region.name);
        }
        return;
    }

    // Load fill policy
    let mut policy = match &cli.style {
        Some(path) => match FillPolicy::from_file(path) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Error loading style '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => FillPolicy::default(),
    };
    if let Some(fill) = cli.fill {
        policy.default_fill = fill;
    }

    let mut config = MapConfig::new().with_pretty_print(!cli.compact);
    if let Some(title) = cli.title {
        config = config.with_title(title);
    }
    if let Some(width) = cli.width {
        config = config.with_width(width);
    }
    if let Some(height) = cli.height {
        config = config.with_height(height);
    }

    let svg = render_map(&table, &policy, &config);

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, svg) {
                eprintln!("Error writing '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => println!("{}", svg),
    }
}
