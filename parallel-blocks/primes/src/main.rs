// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use clap::Parser;
use parallel_blocks_core::{process_worker, telemetry, Result};
use parallel_blocks_primes::{benchmark, Cli, Config, PrimeCounter};
use std::io;
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    let cli = Cli::parse();
    telemetry::init(cli.verbose);

    let result = if cli.worker {
        process_worker::serve_stdio::<PrimeCounter>()
    } else {
        execute(&cli)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "primes failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: &Cli) -> Result<()> {
    let config = Config::resolve(cli)?;
    let mut stdout = io::stdout().lock();
    benchmark::run(&config, &mut stdout)?;
    Ok(())
}
