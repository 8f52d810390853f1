// SPDX-License-Identifier: MIT OR Apache-2.0
//! growplot binary - log-log growth-rate plots from XML benchmark results

use std::path::PathBuf;

use clap::Parser;
use growplot_cli::pipeline;

#[derive(Parser)]
#[command(name = "growplot")]
#[command(version, about, long_about = None)]
struct Args {
    /// Benchmark result XML files; the first one names the output PNG.
    ///
    /// Files are normalized in place before parsing (escaped `<` and
    /// doubled-brace brackets are rewritten), which mutates the inputs.
    #[arg(value_name = "FILE", required = true, num_args = 1..)]
    files: Vec<PathBuf>,
}

fn main() {
    // Missing-label notes are emitted at info level and belong on the
    // console; RUST_LOG still overrides.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    if let Err(e) = pipeline::run(&args.files) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
