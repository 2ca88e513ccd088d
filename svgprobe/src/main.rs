// src/main.rs
use anyhow::Result;
use clap::Parser;
use svgprobe::Args;
use svgprobe::cli;

fn main() -> Result<()> {
    let args = Args::parse();
    cli::run(&args)
}
