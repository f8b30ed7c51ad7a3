// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON document per line"),
    )
}

fn kind_arg(required: bool) -> Arg {
    Arg::new("kind")
        .long("kind")
        .required(required)
        .help("income | expense")
}

fn search_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("query")
            .long("query")
            .short('q')
            .help("Case-insensitive text to find in description or category"),
    )
    .arg(kind_arg(false))
    .arg(Arg::new("from").long("from").help("YYYY-MM-DD, inclusive"))
    .arg(Arg::new("to").long("to").help("YYYY-MM-DD, inclusive"))
    .arg(
        Arg::new("limit")
            .long("limit")
            .value_parser(value_parser!(usize)),
    )
}

pub fn build_cli() -> Command {
    Command::new("cashflow")
        .version(clap::crate_version!())
        .about("Track income and expenses, budget per category, see where the money goes")
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .env("CASHFLOW_DB")
                .help("Path to the SQLite database (defaults to the platform data dir)"),
        )
        .subcommand(Command::new("init").about("Create the database and default categories"))
        .subcommand(
            Command::new("category")
                .about("Manage categories")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(kind_arg(true))
                        .arg(Arg::new("icon").long("icon")),
                )
                .subcommand(
                    Command::new("edit")
                        .about("Rename or re-icon a category; references follow a rename")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(kind_arg(true))
                        .arg(Arg::new("new_name").long("new-name"))
                        .arg(Arg::new("icon").long("icon")),
                )
                .subcommand(json_args(Command::new("list").arg(kind_arg(false))))
                .subcommand(
                    Command::new("rm")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(kind_arg(true)),
                ),
        )
        .subcommand(
            Command::new("tx")
                .about("Record and browse transactions")
                .subcommand(
                    Command::new("add")
                        .arg(kind_arg(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("description").long("description").required(true))
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .help("YYYY-MM-DD, defaults to today"),
                        ),
                )
                .subcommand(
                    Command::new("edit")
                        .arg(
                            Arg::new("id")
                                .long("id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(kind_arg(false))
                        .arg(Arg::new("amount").long("amount"))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("description").long("description"))
                        .arg(Arg::new("date").long("date")),
                )
                .subcommand(
                    Command::new("rm").arg(
                        Arg::new("id")
                            .long("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                )
                .subcommand(json_args(search_args(Command::new("list"))))
                .subcommand(search_args(
                    Command::new("history").about("Transactions grouped by day"),
                )),
        )
        .subcommand(
            Command::new("budget")
                .about("Per-category spending limits")
                .subcommand(
                    Command::new("set")
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("limit").long("limit").required(true)),
                )
                .subcommand(json_args(Command::new("list")))
                .subcommand(
                    Command::new("rm").arg(Arg::new("category").long("category").required(true)),
                )
                .subcommand(
                    Command::new("available").about("Expense categories without a budget"),
                ),
        )
        .subcommand(json_args(
            Command::new("dashboard")
                .about("Balance, totals, spending by category, budgets, recent activity")
                .arg(
                    Arg::new("recent")
                        .long("recent")
                        .value_parser(value_parser!(usize))
                        .default_value("5"),
                )
                .arg(
                    Arg::new("month")
                        .long("month")
                        .help("YYYY-MM for the category distribution, defaults to this month"),
                )
                .arg(
                    Arg::new("all")
                        .long("all")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("month")
                        .help("Category distribution over the full history"),
                ),
        ))
        .subcommand(
            Command::new("export")
                .about("Export data")
                .subcommand(
                    Command::new("transactions")
                        .arg(Arg::new("format").long("format").required(true))
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Settings")
                .subcommand(
                    Command::new("set-currency").arg(Arg::new("label").required(true)),
                )
                .subcommand(Command::new("show")),
        )
        .subcommand(Command::new("doctor").about("Report inconsistent references"))
}
