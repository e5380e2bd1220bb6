// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use log::error;

use rampart::RandomTools;
use rampart_rand::SystemEntropySource;
use rampart_server::{Cli, Server, ServerError, init_logging};

fn run(cli: &Cli) -> Result<(), ServerError> {
    let config = cli.generator_config()?;
    let server = Server::new(RandomTools::new(config, SystemEntropySource {}));

    server.serve(io::stdin().lock(), io::stdout().lock())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
