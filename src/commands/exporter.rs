// Copyright (c) Ledgerlite.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::transactions::filter_from_matches;
use crate::store;
use anyhow::Result;
use rusqlite::Connection;
use serde_json::json;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(conn, sub),
        _ => Ok(()),
    }
}

fn export_transactions(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    let filter = filter_from_matches(conn, sub)?;
    let transactions = store::fetch_transactions(conn, &filter)?;

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "date",
                "description",
                "category",
                "subcategory",
                "account",
                "type",
                "amount",
            ])?;
            for t in &transactions {
                wtr.write_record([
                    t.date.to_string(),
                    t.description.clone().unwrap_or_default(),
                    t.category_label().to_string(),
                    t.subcategory.clone().unwrap_or_default(),
                    t.account_label().to_string(),
                    t.r#type.to_string(),
                    t.amount.to_string(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let mut items = Vec::new();
            for t in &transactions {
                items.push(json!({
                    "date": t.date,
                    "description": t.description,
                    "category": t.category,
                    "subcategory": t.subcategory,
                    "account": t.account,
                    "type": t.r#type,
                    "amount": t.amount,
                }));
            }
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => anyhow::bail!("Unknown format: {} (use csv|json)", fmt),
    }
    println!("Exported {} transactions to {}", transactions.len(), out);
    Ok(())
}
