// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use clap::Parser;
use parallel_blocks_core::{process_worker, telemetry, Result};
use parallel_blocks_love_hate::corpus::prepare_corpus;
use parallel_blocks_love_hate::{app, Cli, Command, Config, LoveHateCounter};
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    let cli = Cli::parse();
    telemetry::init(cli.verbose);

    let result = if cli.worker {
        process_worker::serve_stdio::<LoveHateCounter>()
    } else {
        execute(&cli)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "love-hate failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: &Cli) -> Result<()> {
    match &cli.command {
        Some(Command::Prepare {
            source,
            output,
            repeat,
            keep_case,
        }) => {
            let written = prepare_corpus(source, output, *repeat, *keep_case)?;
            println!("Wrote {} bytes to {}", written, output.display());
        }
        None => {
            let config = Config::resolve(cli)?;
            println!("--BEGIN--");
            let report = app::run(&config)?;
            println!("{report}");
            println!("--END--");
        }
    }
    Ok(())
}
