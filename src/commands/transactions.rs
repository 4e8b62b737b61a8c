// Copyright (c) 2025 Ledgerlite.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Transaction, TxFilter, TxType};
use crate::store::{self, NewTransaction};
use crate::utils::{
    id_for_account, id_for_category, id_for_subcategory, maybe_print_json, parse_amount,
    parse_date, pretty_table,
};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("rm", sub)) => rm(conn, sub)?,
        _ => {}
    }
    Ok(())
}

/// Translate the shared filter flag set (account/type/category/from/to/
/// limit) into a TxFilter, resolving names to ids. Used by `tx list`,
/// `view` and `export transactions` alike.
pub fn filter_from_matches(conn: &Connection, sub: &clap::ArgMatches) -> Result<TxFilter> {
    let mut filter = TxFilter::default();
    if let Some(t) = sub.get_one::<String>("type") {
        filter.r#type = Some(t.parse::<TxType>()?);
    }
    if let Some(name) = sub.get_one::<String>("account") {
        filter.account_id = Some(id_for_account(conn, name.trim())?);
    }
    if let Some(name) = sub.get_one::<String>("category") {
        filter.category_id = Some(id_for_category(conn, name.trim(), filter.r#type)?);
    }
    if let Some(d) = sub.get_one::<String>("from") {
        filter.date_from = Some(parse_date(d.trim())?);
    }
    if let Some(d) = sub.get_one::<String>("to") {
        filter.date_to = Some(parse_date(d.trim())?);
    }
    filter.limit = sub.get_one::<usize>("limit").copied();
    Ok(filter)
}

/// Table rows for a transaction listing; income renders as +, expense as -.
pub fn table_rows(transactions: &[Transaction], ccy: &str) -> Vec<Vec<String>> {
    transactions
        .iter()
        .map(|t| {
            let sign = match t.r#type {
                TxType::Income => "+",
                TxType::Expense => "-",
            };
            vec![
                t.date.to_string(),
                t.description.clone().unwrap_or_else(|| "-".into()),
                t.category_label().to_string(),
                t.subcategory.clone().unwrap_or_else(|| "-".into()),
                t.account_label().to_string(),
                t.r#type.to_string(),
                format!("{}{} {:.2}", sign, ccy, t.amount.round_dp(2)),
            ]
        })
        .collect()
}

pub const TX_HEADERS: [&str; 7] = [
    "Date",
    "Description",
    "Category",
    "Subcategory",
    "Account",
    "Type",
    "Amount",
];

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s.trim())?,
        None => chrono::Utc::now().date_naive(),
    };
    let account_name = sub.get_one::<String>("account").unwrap().trim();
    let typ: TxType = sub.get_one::<String>("type").unwrap().parse()?;
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap().trim())?;
    let description = sub.get_one::<String>("description").map(|s| s.trim());

    let account_id = id_for_account(conn, account_name)?;
    let category_id = match sub.get_one::<String>("category") {
        Some(name) => Some(id_for_category(conn, name.trim(), Some(typ))?),
        None => None,
    };
    let subcategory_id = match (category_id, sub.get_one::<String>("subcategory")) {
        (Some(cat_id), Some(name)) => Some(id_for_subcategory(conn, cat_id, name.trim())?),
        (None, Some(_)) => anyhow::bail!("--subcategory requires --category"),
        _ => None,
    };

    store::add_transaction(
        conn,
        &NewTransaction {
            date,
            account_id,
            r#type: typ,
            amount,
            category_id,
            subcategory_id,
            description,
        },
    )?;
    println!(
        "Recorded {} {} on {} (acct: {})",
        typ, amount, date, account_name
    );
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let filter = filter_from_matches(conn, sub)?;
    let data = store::fetch_transactions(conn, &filter)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let ccy = crate::utils::get_currency(conn)?;
        println!("{}", pretty_table(&TX_HEADERS, table_rows(&data, &ccy)));
    }
    Ok(())
}

fn rm(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    if store::delete_transaction(conn, id)? {
        println!("Deleted transaction {}", id);
        Ok(())
    } else {
        anyhow::bail!("Transaction {} not found", id)
    }
}
