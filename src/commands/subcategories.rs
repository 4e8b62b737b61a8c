// Copyright (c) Ledgerlite.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::TxType;
use crate::store;
use crate::utils::{id_for_category, maybe_print_json, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let category = sub.get_one::<String>("category").unwrap().trim();
            let typ = sub
                .get_one::<String>("type")
                .map(|s| s.parse::<TxType>())
                .transpose()?;
            let name = sub.get_one::<String>("name").unwrap().trim();
            let category_id = id_for_category(conn, category, typ)?;
            store::add_subcategory(conn, category_id, name)?;
            println!("Added subcategory '{}' under '{}'", name, category);
        }
        Some(("list", sub)) => {
            let json_flag = sub.get_flag("json");
            let jsonl_flag = sub.get_flag("jsonl");
            let category_id = match sub.get_one::<String>("category") {
                Some(name) => {
                    let typ = sub
                        .get_one::<String>("type")
                        .map(|s| s.parse::<TxType>())
                        .transpose()?;
                    Some(id_for_category(conn, name.trim(), typ)?)
                }
                None => None,
            };
            let subcategories = store::fetch_subcategories(conn, category_id)?;
            if !maybe_print_json(json_flag, jsonl_flag, &subcategories)? {
                let rows = subcategories
                    .iter()
                    .map(|s| vec![s.id.to_string(), s.category_id.to_string(), s.name.clone()])
                    .collect();
                println!("{}", pretty_table(&["Id", "Category Id", "Name"], rows));
            }
        }
        _ => {}
    }
    Ok(())
}
