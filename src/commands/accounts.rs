// Copyright (c) 2025 Ledgerlite.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::{self, NewAccount};
use crate::utils::{fmt_money, get_currency, id_for_account, maybe_print_json, parse_decimal, pretty_table};
use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("set-balance", sub)) => set_balance(conn, sub)?,
        Some(("close", sub)) => close(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap().trim();
    let typ = sub.get_one::<String>("type").unwrap().trim();
    let bank = sub.get_one::<String>("bank").map(|s| s.trim());
    let number = sub.get_one::<String>("number").map(|s| s.trim());
    let balance = match sub.get_one::<String>("balance") {
        Some(s) => parse_decimal(s.trim())?,
        None => Decimal::ZERO,
    };
    store::add_account(
        conn,
        &NewAccount {
            name,
            r#type: typ,
            bank_name: bank,
            account_number: number,
            balance,
        },
    )?;
    println!("Added account '{}' ({})", name, typ);
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let accounts = if sub.get_flag("all") {
        store::fetch_all_accounts(conn)?
    } else {
        store::fetch_accounts(conn)?
    };
    if !maybe_print_json(json_flag, jsonl_flag, &accounts)? {
        let ccy = get_currency(conn)?;
        let rows = accounts
            .iter()
            .map(|a| {
                vec![
                    a.name.clone(),
                    a.r#type.clone(),
                    a.bank_name.clone().unwrap_or_default(),
                    fmt_money(&a.balance, &ccy),
                    if a.is_active { "yes".into() } else { "no".into() },
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Name", "Type", "Bank", "Balance", "Active"], rows)
        );
    }
    Ok(())
}

fn set_balance(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap().trim();
    let balance = parse_decimal(sub.get_one::<String>("balance").unwrap().trim())?;
    let id = id_for_account(conn, name)?;
    store::update_account_balance(conn, id, balance)?;
    println!("Balance of '{}' set to {}", name, balance);
    Ok(())
}

fn close(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap().trim();
    let id = id_for_account(conn, name)?;
    store::close_account(conn, id)?;
    println!("Closed account '{}'", name);
    Ok(())
}
