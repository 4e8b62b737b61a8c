// Copyright (c) 2025 Ledgerlite.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::transactions::{filter_from_matches, table_rows, TX_HEADERS};
use crate::store;
use crate::utils::{fmt_money, get_currency, maybe_print_json, pretty_table};
use crate::views::FilteredView;
use anyhow::Result;
use rusqlite::Connection;
use serde_json::json;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let page = m.get_one::<usize>("page").copied().unwrap_or(1);

    let mut view = FilteredView::new();
    let token = view.apply_filters(filter_from_matches(conn, m)?);
    view.set_transactions(token, store::fetch_transactions(conn, view.filter())?);
    view.go_to_page(page);

    let summary = view.summary();
    let items = view.current_items();

    if maybe_print_json(
        json_flag,
        jsonl_flag,
        &json!({
            "summary": summary,
            "page": view.current_page(),
            "pages": view.page_count(),
            "transactions": items,
        }),
    )? {
        return Ok(());
    }

    let ccy = get_currency(conn)?;
    println!(
        "{}",
        pretty_table(
            &["Income", "Expense", "Net", "Count"],
            vec![vec![
                fmt_money(&summary.income, &ccy),
                fmt_money(&summary.expense, &ccy),
                fmt_money(&summary.net, &ccy),
                summary.count.to_string(),
            ]],
        )
    );
    if items.is_empty() {
        println!("No transactions found matching your criteria.");
    } else {
        println!("{}", pretty_table(&TX_HEADERS, table_rows(items, &ccy)));
    }
    if view.page_count() > 1 {
        println!("Page {} of {}", view.current_page(), view.page_count());
    }
    Ok(())
}
