// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

fn json_args() -> [Arg; 2] {
    [
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print pretty JSON"),
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    ]
}

fn period_args() -> [Arg; 5] {
    [
        Arg::new("period")
            .long("period")
            .short('p')
            .help("dia | semana | mes | ano | custom (defaults to settings)"),
        Arg::new("from")
            .long("from")
            .help("Explicit range start YYYY-MM-DD; wins over --period together with --to"),
        Arg::new("to")
            .long("to")
            .help("Explicit range end YYYY-MM-DD"),
        Arg::new("ref")
            .long("ref")
            .help("Reference date YYYY-MM-DD the period is built around"),
        Arg::new("today")
            .long("today")
            .help("Pin 'today' (YYYY-MM-DD) for status derivation"),
    ]
}

fn filter_args() -> Vec<Arg> {
    let mut args = vec![Arg::new("data")
        .long("data")
        .short('d')
        .help("Snapshot file (.json or .csv); defaults to $CAIXA_DATA or settings")];
    args.extend(period_args());
    args.push(
        Arg::new("status")
            .long("status")
            .short('s')
            .help("all | Realizado | Pendente | Agendado | Atrasado"),
    );
    args.push(
        Arg::new("search")
            .long("search")
            .short('q')
            .help("Accent-insensitive text search"),
    );
    args
}

pub fn build_cli() -> Command {
    Command::new("caixa")
        .about("Period resolution and aggregation for a personal finance dashboard")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand(
            Command::new("dashboard")
                .about("Totals, status cards, breakdowns and history for a period")
                .args(filter_args())
                .args(json_args()),
        )
        .subcommand(
            Command::new("tx")
                .about("Transactions")
                .subcommand(
                    Command::new("list")
                        .about("List filtered transactions with their derived status")
                        .args(filter_args())
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        )
                        .args(json_args()),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Reports over the filtered transactions")
                .subcommand(
                    Command::new("totals")
                        .about("Income, expense, investment and balance for a period")
                        .args(filter_args())
                        .args(json_args()),
                )
                .subcommand(
                    Command::new("history")
                        .about("Gap-free income/expense series (daily for mes, monthly otherwise)")
                        .args(filter_args())
                        .args(json_args()),
                )
                .subcommand(
                    Command::new("breakdown")
                        .about("Sum one transaction type by a dimension")
                        .args(filter_args())
                        .arg(
                            Arg::new("by")
                                .long("by")
                                .required(true)
                                .help("category | subcategory | classification | payee | payer | wallet"),
                        )
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .default_value("expense")
                                .help("revenue | expense | investment"),
                        )
                        .args(json_args()),
                ),
        )
        .subcommand(
            Command::new("period")
                .about("Show the interval a period selector resolves to")
                .args(period_args())
                .arg(
                    Arg::new("shift")
                        .long("shift")
                        .allow_hyphen_values(true)
                        .value_parser(value_parser!(i32))
                        .help("Move the reference by N periods (negative for past)"),
                )
                .args(json_args()),
        )
        .subcommand(
            Command::new("export")
                .about("Write the filtered transactions to a file")
                .args(filter_args())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .required(true)
                        .help("csv | json"),
                )
                .arg(Arg::new("out").long("out").required(true)),
        )
        .subcommand(
            Command::new("config")
                .about("Show or change settings")
                .subcommand(Command::new("show"))
                .subcommand(Command::new("path"))
                .subcommand(
                    Command::new("set")
                        .arg(Arg::new("key").long("key").required(true))
                        .arg(Arg::new("value").long("value").required(true)),
                ),
        )
}
