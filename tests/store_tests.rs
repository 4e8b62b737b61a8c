// Copyright (c) Ledgerlite.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use ledgerlite::models::TxType;
use ledgerlite::{db, store};
use rusqlite::Connection;
use rust_decimal::Decimal;

fn setup() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    db::init_schema(&mut conn).unwrap();
    conn
}

#[test]
fn fetch_month_covers_leap_february() {
    let conn = setup();
    conn.execute(
        "INSERT INTO accounts(name, type, balance) VALUES ('Cash','cash','0')",
        [],
    )
    .unwrap();
    for date in ["2024-02-01", "2024-02-29", "2024-03-01"] {
        conn.execute(
            "INSERT INTO transactions(date, account_id, type, amount) VALUES (?1, 1, 'expense', '5')",
            [date],
        )
        .unwrap();
    }
    let rows = store::fetch_month(&conn, 2024, 2).unwrap();
    let dates: Vec<String> = rows.iter().map(|t| t.date.to_string()).collect();
    assert_eq!(dates, ["2024-02-29", "2024-02-01"]);
}

#[test]
fn accounts_are_active_only_and_name_ordered() {
    let conn = setup();
    conn.execute_batch(
        r#"
        INSERT INTO accounts(name, type, balance, is_active) VALUES ('Wallet','cash','49.50',1);
        INSERT INTO accounts(name, type, balance, is_active) VALUES ('Checking','bank','100.50',1);
        INSERT INTO accounts(name, type, balance, is_active) VALUES ('Old Card','card','1000',0);
        "#,
    )
    .unwrap();

    let active = store::fetch_accounts(&conn).unwrap();
    let names: Vec<&str> = active.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["Checking", "Wallet"]);

    let all = store::fetch_all_accounts(&conn).unwrap();
    assert_eq!(all.len(), 3);

    let total = store::total_balance(&conn).unwrap();
    assert_eq!(total, Decimal::from_str_exact("150.00").unwrap());
}

#[test]
fn categories_filter_by_type() {
    let conn = setup();
    conn.execute_batch(
        r#"
        INSERT INTO categories(name, type) VALUES ('Salary','income');
        INSERT INTO categories(name, type) VALUES ('Food','expense');
        INSERT INTO categories(name, type) VALUES ('Travel','expense');
        "#,
    )
    .unwrap();

    let all = store::fetch_categories(&conn, None).unwrap();
    assert_eq!(all.len(), 3);

    let expense = store::fetch_categories(&conn, Some(TxType::Expense)).unwrap();
    let names: Vec<&str> = expense.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Food", "Travel"]);
}

#[test]
fn subcategories_scope_to_parent() {
    let conn = setup();
    conn.execute_batch(
        r#"
        INSERT INTO categories(name, type) VALUES ('Food','expense');
        INSERT INTO categories(name, type) VALUES ('Travel','expense');
        INSERT INTO subcategories(category_id, name) VALUES (1,'Restaurants');
        INSERT INTO subcategories(category_id, name) VALUES (1,'Groceries');
        INSERT INTO subcategories(category_id, name) VALUES (2,'Flights');
        "#,
    )
    .unwrap();

    let food = store::fetch_subcategories(&conn, Some(1)).unwrap();
    let names: Vec<&str> = food.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Groceries", "Restaurants"]);

    let all = store::fetch_subcategories(&conn, None).unwrap();
    assert_eq!(all.len(), 3);
}

#[test]
fn missing_joins_fall_back_to_labels() {
    let conn = setup();
    conn.execute(
        "INSERT INTO accounts(name, type, balance) VALUES ('Cash','cash','0')",
        [],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO transactions(date, account_id, type, amount) VALUES ('2025-03-01', 1, 'expense', '42')",
        [],
    )
    .unwrap();

    let rows = store::fetch_transactions(&conn, &Default::default()).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].category, None);
    assert_eq!(rows[0].category_label(), "Uncategorized");
    assert_eq!(rows[0].account_label(), "Cash");
    assert_eq!(rows[0].amount, Decimal::from(42u32));
}

#[test]
fn close_account_hides_it_from_active_fetch() {
    let conn = setup();
    conn.execute(
        "INSERT INTO accounts(name, type, balance) VALUES ('Cash','cash','10')",
        [],
    )
    .unwrap();
    store::close_account(&conn, 1).unwrap();
    assert!(store::fetch_accounts(&conn).unwrap().is_empty());
    assert!(store::total_balance(&conn).unwrap().is_zero());
}

#[test]
fn update_account_balance_round_trips() {
    let conn = setup();
    conn.execute(
        "INSERT INTO accounts(name, type, balance) VALUES ('Cash','cash','10')",
        [],
    )
    .unwrap();
    store::update_account_balance(&conn, 1, Decimal::from_str_exact("250.75").unwrap()).unwrap();
    let accounts = store::fetch_accounts(&conn).unwrap();
    assert_eq!(accounts[0].balance, Decimal::from_str_exact("250.75").unwrap());
}
