// Copyright (c) Ledgerlite.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON instead of a table"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

fn filter_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("account")
            .long("account")
            .help("Restrict to one account, by name"),
    )
    .arg(
        Arg::new("type")
            .long("type")
            .value_parser(["income", "expense"])
            .help("Restrict to income or expense"),
    )
    .arg(
        Arg::new("category")
            .long("category")
            .help("Restrict to one category, by name"),
    )
    .arg(
        Arg::new("from")
            .long("from")
            .help("Inclusive lower date bound (YYYY-MM-DD)"),
    )
    .arg(
        Arg::new("to")
            .long("to")
            .help("Inclusive upper date bound (YYYY-MM-DD)"),
    )
    .arg(
        Arg::new("limit")
            .long("limit")
            .value_parser(value_parser!(usize))
            .help("Cap the number of results"),
    )
}

pub fn build_cli() -> Command {
    Command::new("ledgerlite")
        .about("Personal income & expense tracking with monthly summaries and filtered views")
        .version(clap::crate_version!())
        .subcommand(Command::new("init").about("Create the database if needed and print its path"))
        .subcommand(
            Command::new("account")
                .about("Manage accounts")
                .subcommand(
                    Command::new("add")
                        .about("Add an account")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .help("Account kind, e.g. bank, cash, card"),
                        )
                        .arg(Arg::new("bank").long("bank").help("Bank name"))
                        .arg(Arg::new("number").long("number").help("Account number"))
                        .arg(
                            Arg::new("balance")
                                .long("balance")
                                .help("Opening balance, defaults to 0"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list").about("List active accounts").arg(
                        Arg::new("all")
                            .long("all")
                            .action(ArgAction::SetTrue)
                            .help("Include closed accounts"),
                    ),
                ))
                .subcommand(
                    Command::new("set-balance")
                        .about("Record an account's current balance")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("balance").long("balance").required(true)),
                )
                .subcommand(
                    Command::new("close")
                        .about("Mark an account inactive")
                        .arg(Arg::new("name").long("name").required(true)),
                ),
        )
        .subcommand(
            Command::new("category")
                .about("Manage income/expense categories")
                .subcommand(
                    Command::new("add")
                        .about("Add a category")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .value_parser(["income", "expense"]),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list").about("List categories").arg(
                        Arg::new("type")
                            .long("type")
                            .value_parser(["income", "expense"]),
                    ),
                )),
        )
        .subcommand(
            Command::new("subcategory")
                .about("Manage subcategories")
                .subcommand(
                    Command::new("add")
                        .about("Add a subcategory under a category")
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_parser(["income", "expense"])
                                .help("Disambiguates the parent category"),
                        )
                        .arg(Arg::new("name").long("name").required(true)),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List subcategories")
                        .arg(Arg::new("category").long("category"))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_parser(["income", "expense"]),
                        ),
                )),
        )
        .subcommand(
            Command::new("tx")
                .about("Record and inspect transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .help("YYYY-MM-DD, defaults to today"),
                        )
                        .arg(Arg::new("account").long("account").required(true))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .value_parser(["income", "expense"]),
                        )
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("subcategory").long("subcategory"))
                        .arg(Arg::new("description").long("description")),
                )
                .subcommand(json_flags(filter_args(
                    Command::new("list").about("List transactions, newest first"),
                )))
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction")
                        .arg(
                            Arg::new("id")
                                .long("id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        ),
                ),
        )
        .subcommand(json_flags(
            Command::new("dashboard")
                .about("Balance, monthly totals, recent activity and top spending categories")
                .arg(
                    Arg::new("month")
                        .long("month")
                        .help("YYYY-MM, defaults to the current month"),
                ),
        ))
        .subcommand(json_flags(
            filter_args(
                Command::new("view")
                    .about("Filtered, paginated transaction view with a running summary"),
            )
            .arg(
                Arg::new("page")
                    .long("page")
                    .value_parser(value_parser!(usize))
                    .help("Page number, 20 rows per page"),
            ),
        ))
        .subcommand(
            Command::new("report")
                .about("Aggregated reports")
                .subcommand(json_flags(
                    Command::new("cashflow")
                        .about("Per-month income and expense totals")
                        .arg(
                            Arg::new("months")
                                .long("months")
                                .value_parser(value_parser!(usize))
                                .help("How many recent months to show, defaults to 12"),
                        ),
                ))
                .subcommand(json_flags(
                    Command::new("breakdown")
                        .about("Ranked per-category totals for one month")
                        .arg(Arg::new("month").long("month").required(true))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_parser(["income", "expense"])
                                .help("Defaults to expense"),
                        ),
                )),
        )
        .subcommand(
            Command::new("export").about("Export data").subcommand(filter_args(
                Command::new("transactions")
                    .about("Export transactions to CSV or JSON")
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .required(true)
                            .help("csv or json"),
                    )
                    .arg(Arg::new("out").long("out").required(true)),
            )),
        )
        .subcommand(Command::new("doctor").about("Check the ledger for inconsistencies"))
        .subcommand(
            Command::new("config")
                .about("Settings")
                .subcommand(
                    Command::new("currency")
                        .about("Set the display currency code")
                        .arg(Arg::new("code").required(true)),
                )
                .subcommand(Command::new("show").about("Print current settings")),
        )
}
