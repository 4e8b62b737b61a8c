// Copyright (c) Ledgerlite.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::TxType;
use crate::store;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap().trim();
            let typ: TxType = sub.get_one::<String>("type").unwrap().parse()?;
            store::add_category(conn, name, typ)?;
            println!("Added {} category '{}'", typ, name);
        }
        Some(("list", sub)) => {
            let json_flag = sub.get_flag("json");
            let jsonl_flag = sub.get_flag("jsonl");
            let typ = sub
                .get_one::<String>("type")
                .map(|s| s.parse::<TxType>())
                .transpose()?;
            let categories = store::fetch_categories(conn, typ)?;
            if !maybe_print_json(json_flag, jsonl_flag, &categories)? {
                let rows = categories
                    .iter()
                    .map(|c| vec![c.name.clone(), c.r#type.to_string()])
                    .collect();
                println!("{}", pretty_table(&["Category", "Type"], rows));
            }
        }
        _ => {}
    }
    Ok(())
}
