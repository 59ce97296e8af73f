use clap::Parser;
use env_logger::Env;
use log::{error, info};
use std::process::ExitCode;

use tile_dataset::cli::Args;
use tile_dataset::{dataset, io, Result, TileClass};

fn run(args: &Args) -> Result<()> {
    let config = args.tiling_config()?;

    let img_orig = io::load_original(&args.image)?;
    let img_labels = io::load_label(&args.label)?;

    info!("Original shape: {:?}", img_orig.dim());
    info!("Label shape: {:?}", img_labels.dim());

    info!("Writing tiles under: {}", args.output.display());
    let summary = dataset::generate_dataset(&args.output, &img_orig, &img_labels, &config)?;

    for class in TileClass::ALL {
        info!("{}: {} tiles", class, summary.count(class));
    }
    info!("Wrote {} tiles", summary.total);
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logger
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    info!("=== Tile Dataset Generator ===");

    match run(&args) {
        Ok(()) => {
            info!("=== Done! ===");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
