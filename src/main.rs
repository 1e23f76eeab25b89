//
//  app-directory
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use app_directory::cli::{Cli, Commands};
use app_directory::exit_codes;
use app_directory::output::OutputWriter;

fn main() {
    // Initialize logging
    init_logging();

    // Parse CLI arguments
    let cli = Cli::parse();
    let writer = OutputWriter::for_flag(cli.global.json);

    // Handle result and exit
    match run(cli) {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            writer.write_error(&format!("{e:#}"));
            std::process::exit(exit_code(&e));
        }
    }
}

/// Initialize logging based on environment
fn init_logging() {
    let filter = EnvFilter::try_from_env("AD_DEBUG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn exit_code(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<app_directory::Error>())
        .map(exit_codes::for_error)
        .unwrap_or(exit_codes::ERROR)
}

/// Main command dispatcher
fn run(cli: Cli) -> Result<()> {
    let global = &cli.global;
    match cli.command {
        Commands::Health => {
            let health = global.client()?.health()?;
            global.writer().write_value(&health)
        }
        Commands::Apps(cmd) => cmd.run(global),
        Commands::Moderate(cmd) => cmd.run(global),
        Commands::Reviews(cmd) => cmd.run(global),
        Commands::Categories => {
            let categories = global.client()?.categories()?;
            global.writer().write_value(&categories)
        }
        Commands::Stats(cmd) => cmd.run(global),
        Commands::Checks(cmd) => cmd.run(global),
        Commands::Webhooks(cmd) => cmd.run(global),
        Commands::Keys(cmd) => cmd.run(global),
        Commands::Docs(cmd) => cmd.run(global),
        Commands::Api(cmd) => cmd.run(global),
        Commands::Config(cmd) => cmd.run(global),
    }
}
