// Copyright (c) 2025 Ledgerlite.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Account, Category, Subcategory, Transaction, TxFilter, TxType};
use crate::utils::month_bounds;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};
use rust_decimal::Decimal;

/// Query the transaction list with account/category/subcategory names
/// joined in, newest first. Each present filter dimension appends one
/// AND clause; date bounds are inclusive.
pub fn fetch_transactions(conn: &Connection, filter: &TxFilter) -> Result<Vec<Transaction>> {
    let mut sql = String::from(
        "SELECT t.id, t.date, t.account_id, t.type, t.amount, t.category_id, t.subcategory_id, t.description, \
                a.name, c.name, s.name \
         FROM transactions t \
         LEFT JOIN accounts a ON t.account_id=a.id \
         LEFT JOIN categories c ON t.category_id=c.id \
         LEFT JOIN subcategories s ON t.subcategory_id=s.id \
         WHERE 1=1",
    );
    let mut params_vec: Vec<String> = Vec::new();

    if let Some(id) = filter.account_id {
        sql.push_str(" AND t.account_id=?");
        params_vec.push(id.to_string());
    }
    if let Some(t) = filter.r#type {
        sql.push_str(" AND t.type=?");
        params_vec.push(t.as_str().to_string());
    }
    if let Some(id) = filter.category_id {
        sql.push_str(" AND t.category_id=?");
        params_vec.push(id.to_string());
    }
    if let Some(d) = filter.date_from {
        sql.push_str(" AND t.date>=?");
        params_vec.push(d.to_string());
    }
    if let Some(d) = filter.date_to {
        sql.push_str(" AND t.date<=?");
        params_vec.push(d.to_string());
    }
    sql.push_str(" ORDER BY t.date DESC, t.id DESC");
    if let Some(limit) = filter.limit {
        sql.push_str(" LIMIT ?");
        params_vec.push(limit.to_string());
    }

    let mut stmt = conn.prepare(&sql)?;
    let mut rows = if params_vec.is_empty() {
        stmt.query([])?
    } else {
        let params: Vec<&dyn rusqlite::ToSql> = params_vec
            .iter()
            .map(|s| s as &dyn rusqlite::ToSql)
            .collect();
        stmt.query(rusqlite::params_from_iter(params))?
    };

    let mut data = Vec::new();
    while let Some(r) = rows.next()? {
        data.push(transaction_from_row(r)?);
    }
    Ok(data)
}

/// Transactions dated inside [first day, last day] of the given month.
pub fn fetch_month(conn: &Connection, year: i32, month: u32) -> Result<Vec<Transaction>> {
    let (first, last) = month_bounds(year, month)?;
    fetch_transactions(
        conn,
        &TxFilter {
            date_from: Some(first),
            date_to: Some(last),
            ..TxFilter::default()
        },
    )
}

fn transaction_from_row(r: &Row<'_>) -> Result<Transaction> {
    let id: i64 = r.get(0)?;
    let date: String = r.get(1)?;
    let account_id: i64 = r.get(2)?;
    let r#type: String = r.get(3)?;
    let amount: String = r.get(4)?;
    let category_id: Option<i64> = r.get(5)?;
    let subcategory_id: Option<i64> = r.get(6)?;
    let description: Option<String> = r.get(7)?;
    let account: Option<String> = r.get(8)?;
    let category: Option<String> = r.get(9)?;
    let subcategory: Option<String> = r.get(10)?;

    // The one and only amount parse; everything downstream works on Decimal.
    Ok(Transaction {
        id,
        date: NaiveDate::parse_from_str(&date, "%Y-%m-%d")
            .with_context(|| format!("Invalid date '{}' for transaction {}", date, id))?,
        account_id,
        r#type: r#type
            .parse::<TxType>()
            .with_context(|| format!("Transaction {}", id))?,
        amount: amount
            .parse::<Decimal>()
            .with_context(|| format!("Invalid amount '{}' for transaction {}", amount, id))?,
        category_id,
        subcategory_id,
        description,
        account,
        category,
        subcategory,
    })
}

/// Active accounts only, ordered by name.
pub fn fetch_accounts(conn: &Connection) -> Result<Vec<Account>> {
    fetch_accounts_inner(conn, false)
}

pub fn fetch_all_accounts(conn: &Connection) -> Result<Vec<Account>> {
    fetch_accounts_inner(conn, true)
}

fn fetch_accounts_inner(conn: &Connection, include_closed: bool) -> Result<Vec<Account>> {
    let sql = if include_closed {
        "SELECT id, name, type, bank_name, account_number, balance, is_active \
         FROM accounts ORDER BY name"
    } else {
        "SELECT id, name, type, bank_name, account_number, balance, is_active \
         FROM accounts WHERE is_active=1 ORDER BY name"
    };
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query([])?;
    let mut data = Vec::new();
    while let Some(r) = rows.next()? {
        let balance: String = r.get(5)?;
        let name: String = r.get(1)?;
        data.push(Account {
            id: r.get(0)?,
            balance: balance
                .parse::<Decimal>()
                .with_context(|| format!("Invalid balance '{}' for account {}", balance, name))?,
            name,
            r#type: r.get(2)?,
            bank_name: r.get(3)?,
            account_number: r.get(4)?,
            is_active: r.get::<_, i64>(6)? != 0,
        });
    }
    Ok(data)
}

pub fn fetch_categories(conn: &Connection, r#type: Option<TxType>) -> Result<Vec<Category>> {
    let mut sql = String::from("SELECT id, name, type FROM categories");
    if r#type.is_some() {
        sql.push_str(" WHERE type=?1");
    }
    sql.push_str(" ORDER BY name");
    let mut stmt = conn.prepare(&sql)?;
    let mut rows = match r#type {
        Some(t) => stmt.query(params![t.as_str()])?,
        None => stmt.query([])?,
    };
    let mut data = Vec::new();
    while let Some(r) = rows.next()? {
        let type_s: String = r.get(2)?;
        data.push(Category {
            id: r.get(0)?,
            name: r.get(1)?,
            r#type: type_s.parse::<TxType>()?,
        });
    }
    Ok(data)
}

pub fn fetch_subcategories(conn: &Connection, category_id: Option<i64>) -> Result<Vec<Subcategory>> {
    let mut sql = String::from("SELECT id, category_id, name FROM subcategories");
    if category_id.is_some() {
        sql.push_str(" WHERE category_id=?1");
    }
    sql.push_str(" ORDER BY name");
    let mut stmt = conn.prepare(&sql)?;
    let mut rows = match category_id {
        Some(id) => stmt.query(params![id])?,
        None => stmt.query([])?,
    };
    let mut data = Vec::new();
    while let Some(r) = rows.next()? {
        data.push(Subcategory {
            id: r.get(0)?,
            category_id: r.get(1)?,
            name: r.get(2)?,
        });
    }
    Ok(data)
}

pub struct NewAccount<'a> {
    pub name: &'a str,
    pub r#type: &'a str,
    pub bank_name: Option<&'a str>,
    pub account_number: Option<&'a str>,
    pub balance: Decimal,
}

pub fn add_account(conn: &Connection, account: &NewAccount<'_>) -> Result<i64> {
    conn.execute(
        "INSERT INTO accounts(name, type, bank_name, account_number, balance, is_active) \
         VALUES (?1, ?2, ?3, ?4, ?5, 1)",
        params![
            account.name,
            account.r#type,
            account.bank_name,
            account.account_number,
            account.balance.to_string()
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn add_category(conn: &Connection, name: &str, r#type: TxType) -> Result<i64> {
    conn.execute(
        "INSERT INTO categories(name, type) VALUES (?1, ?2)",
        params![name, r#type.as_str()],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn add_subcategory(conn: &Connection, category_id: i64, name: &str) -> Result<i64> {
    conn.execute(
        "INSERT INTO subcategories(category_id, name) VALUES (?1, ?2)",
        params![category_id, name],
    )?;
    Ok(conn.last_insert_rowid())
}

pub struct NewTransaction<'a> {
    pub date: NaiveDate,
    pub account_id: i64,
    pub r#type: TxType,
    pub amount: Decimal,
    pub category_id: Option<i64>,
    pub subcategory_id: Option<i64>,
    pub description: Option<&'a str>,
}

pub fn add_transaction(conn: &Connection, tx: &NewTransaction<'_>) -> Result<i64> {
    if tx.amount <= Decimal::ZERO {
        anyhow::bail!("Amount '{}' must be greater than zero", tx.amount);
    }
    conn.execute(
        "INSERT INTO transactions(date, account_id, type, amount, category_id, subcategory_id, description) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            tx.date.to_string(),
            tx.account_id,
            tx.r#type.as_str(),
            tx.amount.to_string(),
            tx.category_id,
            tx.subcategory_id,
            tx.description
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Returns false when no transaction carried the id.
pub fn delete_transaction(conn: &Connection, id: i64) -> Result<bool> {
    let n = conn.execute("DELETE FROM transactions WHERE id=?1", params![id])?;
    Ok(n > 0)
}

pub fn update_account_balance(conn: &Connection, account_id: i64, balance: Decimal) -> Result<()> {
    conn.execute(
        "UPDATE accounts SET balance=?1 WHERE id=?2",
        params![balance.to_string(), account_id],
    )?;
    Ok(())
}

pub fn close_account(conn: &Connection, account_id: i64) -> Result<()> {
    conn.execute(
        "UPDATE accounts SET is_active=0 WHERE id=?1",
        params![account_id],
    )?;
    Ok(())
}

/// Sum of recorded balances across active accounts.
pub fn total_balance(conn: &Connection) -> Result<Decimal> {
    let mut stmt = conn.prepare("SELECT name, balance FROM accounts WHERE is_active=1")?;
    let mut rows = stmt.query([])?;
    let mut total = Decimal::ZERO;
    while let Some(r) = rows.next()? {
        let name: String = r.get(0)?;
        let balance: String = r.get(1)?;
        total += balance
            .parse::<Decimal>()
            .with_context(|| format!("Invalid balance '{}' for account {}", balance, name))?;
    }
    Ok(total)
}
