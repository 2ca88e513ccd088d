// src/cli.rs
use anyhow::Result;
use clap::Parser;

use crate::core::analyze;
use crate::fixture::ICON_SVG;
use crate::report::render;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Emit the analysis as pretty-printed JSON instead of the text report
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &Args) -> Result<()> {
    let report = analyze(ICON_SVG);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render(&report));
    }

    Ok(())
}
