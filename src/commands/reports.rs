// Copyright (c) Ledgerlite.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{TxFilter, TxType};
use crate::store;
use crate::utils::{fmt_money, get_currency, maybe_print_json, month_bounds, parse_month, pretty_table};
use crate::views;
use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("cashflow", sub)) => cashflow(conn, sub)?,
        Some(("breakdown", sub)) => breakdown(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn cashflow(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let months: usize = sub.get_one::<usize>("months").copied().unwrap_or(12);

    let transactions = store::fetch_transactions(conn, &TxFilter::default())?;
    let mut map: BTreeMap<String, (Decimal, Decimal)> = BTreeMap::new();
    for t in &transactions {
        let entry = map
            .entry(t.date.format("%Y-%m").to_string())
            .or_insert((Decimal::ZERO, Decimal::ZERO));
        match t.r#type {
            TxType::Income => entry.0 += t.amount,
            TxType::Expense => entry.1 += t.amount,
        }
    }

    let mut data = Vec::new();
    for (month, (income, expense)) in map.iter().rev().take(months) {
        data.push(vec![
            month.clone(),
            format!("{:.2}", income),
            format!("{:.2}", expense),
        ]);
    }
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!("{}", pretty_table(&["Month", "Income", "Expense"], data));
    }
    Ok(())
}

fn breakdown(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let (year, month) = parse_month(sub.get_one::<String>("month").unwrap().trim())?;
    let typ = match sub.get_one::<String>("type") {
        Some(s) => s.parse::<TxType>()?,
        None => TxType::Expense,
    };

    let (first, last) = month_bounds(year, month)?;
    let transactions = store::fetch_transactions(
        conn,
        &TxFilter {
            r#type: Some(typ),
            date_from: Some(first),
            date_to: Some(last),
            ..TxFilter::default()
        },
    )?;
    let shares = views::category_breakdown(&transactions);

    if !maybe_print_json(json_flag, jsonl_flag, &shares)? {
        let ccy = get_currency(conn)?;
        let header = match typ {
            TxType::Income => "Earned",
            TxType::Expense => "Spent",
        };
        let rows = shares
            .iter()
            .map(|s| vec![s.name.clone(), fmt_money(&s.amount, &ccy)])
            .collect();
        println!("{}", pretty_table(&["Category", header], rows));
    }
    Ok(())
}
