// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use salesdash::{catalog, cli, commands, config};

fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config::log_filter(verbosity)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    init_logging(matches.get_count("verbose"));
    let settings = config::Settings::from_matches(&matches)?;

    match matches.subcommand() {
        Some(("doctor", _)) => {
            let products = catalog::load_unchecked(&settings)?;
            commands::doctor::handle(&products)?;
        }
        Some((name, sub)) => {
            let products = catalog::load(&settings)?;
            match name {
                "overview" => commands::overview::handle(&products, &settings, sub)?,
                "products" => commands::products::handle(&products, &settings, sub)?,
                "dashboard" => commands::dashboard::handle(&products, &settings, sub)?,
                "export" => commands::exporter::handle(&products, sub)?,
                "interactive" => commands::interactive::handle(&products, &settings, sub)?,
                _ => {
                    cli::build_cli().print_help()?;
                    println!();
                }
            }
        }
        None => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
