// Copyright (c) Ledgerlite.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::pretty_table;
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection) -> Result<()> {
    let mut rows = Vec::new();

    // 1) Transactions whose category disagrees with their own direction
    let mut stmt = conn.prepare(
        "SELECT t.id, t.type, c.type FROM transactions t \
         JOIN categories c ON t.category_id=c.id WHERE t.type != c.type",
    )?;
    let mut cur = stmt.query([])?;
    while let Some(r) = cur.next()? {
        let id: i64 = r.get(0)?;
        let tx_type: String = r.get(1)?;
        let cat_type: String = r.get(2)?;
        rows.push(vec![
            "category_type_mismatch".into(),
            format!("tx {}: {} vs {}", id, tx_type, cat_type),
        ]);
    }

    // 2) Non-positive amounts
    let mut stmt2 =
        conn.prepare("SELECT id, amount FROM transactions WHERE CAST(amount AS REAL) <= 0")?;
    let mut cur2 = stmt2.query([])?;
    while let Some(r) = cur2.next()? {
        let id: i64 = r.get(0)?;
        let amount: String = r.get(1)?;
        rows.push(vec![
            "non_positive_amount".into(),
            format!("tx {}: {}", id, amount),
        ]);
    }

    // 3) Subcategory whose parent is not the transaction's category
    let mut stmt3 = conn.prepare(
        "SELECT t.id FROM transactions t \
         JOIN subcategories s ON t.subcategory_id=s.id \
         WHERE t.category_id IS NULL OR s.category_id != t.category_id",
    )?;
    let mut cur3 = stmt3.query([])?;
    while let Some(r) = cur3.next()? {
        let id: i64 = r.get(0)?;
        rows.push(vec![
            "subcategory_parent_mismatch".into(),
            format!("tx {}", id),
        ]);
    }

    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
