// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};
use std::path::PathBuf;

fn search_arg() -> Arg {
    Arg::new("search")
        .long("search")
        .short('s')
        .value_name("TEXT")
        .help("Filter by product name (case-insensitive) or barcode")
}

fn range_arg() -> Arg {
    Arg::new("range")
        .long("range")
        .short('r')
        .value_name("RANGE")
        .value_parser(["daily", "monthly", "annual"])
        .default_value("monthly")
        .help("Time range used for every metric")
}

fn json_args() -> [Arg; 2] {
    [
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print pretty JSON instead of tables"),
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    ]
}

pub fn build_cli() -> Command {
    Command::new("salesdash")
        .version(clap::crate_version!())
        .about("Sales dashboard for Algida and UNICA product lines")
        .arg(
            Arg::new("lang")
                .long("lang")
                .global(true)
                .env("SALESDASH_LANG")
                .value_parser(["en", "az"])
                .help("Display language"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .global(true)
                .env("SALESDASH_SEED")
                .value_parser(value_parser!(u64))
                .help("Seed for the generated mock catalog"),
        )
        .arg(
            Arg::new("catalog")
                .long("catalog")
                .global(true)
                .env("SALESDASH_CATALOG")
                .value_parser(value_parser!(PathBuf))
                .help("Load products from a JSON file instead of generating them"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::Count)
                .help("Increase log verbosity (-v info, -vv debug)"),
        )
        .subcommand(
            Command::new("overview")
                .about("Totals, category chart and income distribution")
                .arg(search_arg())
                .arg(range_arg())
                .args(json_args()),
        )
        .subcommand(
            Command::new("products")
                .about("Product tables per category")
                .arg(search_arg())
                .arg(range_arg())
                .arg(
                    Arg::new("collapse")
                        .long("collapse")
                        .value_name("CATEGORY")
                        .value_parser(["algida", "unica"])
                        .action(ArgAction::Append)
                        .help("Collapse a category section (repeatable)"),
                )
                .args(json_args()),
        )
        .subcommand(
            Command::new("dashboard")
                .about("Full dashboard: header, overview and product tables")
                .arg(search_arg())
                .arg(range_arg()),
        )
        .subcommand(
            Command::new("export")
                .about("Export filtered products")
                .subcommand(
                    Command::new("products")
                        .arg(search_arg())
                        .arg(range_arg())
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .short('f')
                                .default_value("csv")
                                .help("csv|json"),
                        )
                        .arg(Arg::new("out").long("out").short('o').required(true)),
                ),
        )
        .subcommand(Command::new("doctor").about("Check catalog invariants"))
        .subcommand(
            Command::new("interactive")
                .about("Line-driven dashboard session on stdin")
                .arg(range_arg()),
        )
}
