// Copyright (c) Chris Gunn.
// Licensed under the MIT license.

mod download_fix;
mod patch;
mod process_template;

use std::path::Path;

use anyhow::Error;
use clap::Parser;
use log::info;

use download_fix::{download_fix, INPUT_TEMPLATE, OUTPUT_TEMPLATE};
use process_template::process_template_file;

/// Replaces the fragile S3 download command in mumbai-template-v2.yaml with a
/// retrying curl/wget block and writes mumbai-template-v2-fixed.yaml.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Log each step to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let level = if verbose { log::LevelFilter::Debug } else { log::LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<(), Error> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let patch = download_fix()?;
    let replacements = process_template_file(Path::new(INPUT_TEMPLATE), Path::new(OUTPUT_TEMPLATE), &patch)?;
    info!("{} download command(s) replaced", replacements);

    println!("Fixed template created: {}", OUTPUT_TEMPLATE);
    Ok(())
}
