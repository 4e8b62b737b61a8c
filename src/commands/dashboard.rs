// Copyright (c) 2025 Ledgerlite.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::transactions::{table_rows, TX_HEADERS};
use crate::models::{TxFilter, TxType};
use crate::store;
use crate::utils::{fmt_money, get_currency, maybe_print_json, month_bounds, parse_month, pretty_table};
use crate::views;
use anyhow::Result;
use chrono::Datelike;
use rusqlite::Connection;
use serde_json::json;

const RECENT_LIMIT: usize = 5;
const BREAKDOWN_LIMIT: usize = 8;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let (year, month) = match m.get_one::<String>("month") {
        Some(s) => parse_month(s.trim())?,
        None => {
            let today = chrono::Utc::now().date_naive();
            (today.year(), today.month())
        }
    };

    // The dashboard's five reads are independent of one another; order is
    // dictated only by the shared connection.
    let total_balance = store::total_balance(conn)?;
    let totals = views::monthly_totals(&store::fetch_month(conn, year, month)?);
    let accounts = store::fetch_accounts(conn)?;
    let recent = store::fetch_transactions(
        conn,
        &TxFilter {
            limit: Some(RECENT_LIMIT),
            ..TxFilter::default()
        },
    )?;
    let (first, last) = month_bounds(year, month)?;
    let month_expenses = store::fetch_transactions(
        conn,
        &TxFilter {
            r#type: Some(TxType::Expense),
            date_from: Some(first),
            date_to: Some(last),
            ..TxFilter::default()
        },
    )?;
    let mut breakdown = views::category_breakdown(&month_expenses);
    breakdown.truncate(BREAKDOWN_LIMIT);

    if maybe_print_json(
        json_flag,
        jsonl_flag,
        &json!({
            "month": format!("{}-{:02}", year, month),
            "total_balance": total_balance,
            "totals": totals,
            "accounts": accounts,
            "recent": recent,
            "breakdown": breakdown,
        }),
    )? {
        return Ok(());
    }

    let ccy = get_currency(conn)?;
    println!("Total balance: {}", fmt_money(&total_balance, &ccy));
    println!();
    println!(
        "{}",
        pretty_table(
            &["Month", "Income", "Expense"],
            vec![vec![
                format!("{}-{:02}", year, month),
                fmt_money(&totals.income, &ccy),
                fmt_money(&totals.expense, &ccy),
            ]],
        )
    );

    let account_rows = accounts
        .iter()
        .map(|a| {
            vec![
                a.name.clone(),
                a.r#type.clone(),
                a.bank_name.clone().unwrap_or_default(),
                fmt_money(&a.balance, &ccy),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Account", "Type", "Bank", "Balance"], account_rows)
    );

    println!("Recent transactions:");
    println!("{}", pretty_table(&TX_HEADERS, table_rows(&recent, &ccy)));

    if !breakdown.is_empty() {
        let breakdown_rows = breakdown
            .iter()
            .map(|share| vec![share.name.clone(), fmt_money(&share.amount, &ccy)])
            .collect();
        println!("Top spending categories:");
        println!("{}", pretty_table(&["Category", "Spent"], breakdown_rows));
    }
    Ok(())
}
