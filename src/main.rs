use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Result};

use credit_prep::pipeline::{self, PrepConfig};

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("credit-prep: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let mut args = std::env::args_os().skip(1);
    let (input, output) = match (args.next(), args.next(), args.next()) {
        (Some(input), Some(output), None) => (PathBuf::from(input), PathBuf::from(output)),
        _ => bail!("usage: credit-prep <input.csv> <output.parquet>"),
    };
    pipeline::run(&input, &output, &PrepConfig::default())
}
