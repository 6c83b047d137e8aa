// File: main.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use clap::Parser;
use smugprobe::app;
use smugprobe::cli::Cli;
use smugprobe::logging;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let level = logging::effective_level(cli.log_level, cli.verbose);
    if let Err(e) = logging::init(level) {
        eprintln!("{:#}", e);
        std::process::exit(app::EXIT_FAILURE);
    }

    let code = app::run(&cli).await;
    std::process::exit(code);
}
