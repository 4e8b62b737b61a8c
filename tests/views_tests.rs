// Copyright (c) 2025 Ledgerlite.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use ledgerlite::models::{Transaction, TxFilter, TxType};
use ledgerlite::views::{self, FilteredView, PAGE_SIZE};
use rust_decimal::Decimal;

fn tx(id: i64, date: &str, r#type: TxType, amount: u32, category: Option<&str>) -> Transaction {
    Transaction {
        id,
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        account_id: 1,
        r#type,
        amount: Decimal::from(amount),
        category_id: None,
        subcategory_id: None,
        description: None,
        account: Some("Checking".into()),
        category: category.map(|s| s.to_string()),
        subcategory: None,
    }
}

#[test]
fn monthly_totals_partitions_by_type() {
    let txns = vec![
        tx(1, "2024-03-05", TxType::Income, 50000, None),
        tx(2, "2024-03-10", TxType::Expense, 1200, Some("Food")),
        tx(3, "2024-03-15", TxType::Expense, 800, Some("Food")),
        tx(4, "2024-03-20", TxType::Expense, 300, None),
    ];
    let totals = views::monthly_totals(&txns);
    assert_eq!(totals.income, Decimal::from(50000u32));
    assert_eq!(totals.expense, Decimal::from(2300u32));
}

#[test]
fn breakdown_groups_sums_and_ranks() {
    let txns = vec![
        tx(2, "2024-03-10", TxType::Expense, 1200, Some("Food")),
        tx(3, "2024-03-15", TxType::Expense, 800, Some("Food")),
        tx(4, "2024-03-20", TxType::Expense, 300, None),
    ];
    let shares = views::category_breakdown(&txns);
    assert_eq!(shares.len(), 2);
    assert_eq!(shares[0].name, "Food");
    assert_eq!(shares[0].amount, Decimal::from(2000u32));
    assert_eq!(shares[1].name, "Uncategorized");
    assert_eq!(shares[1].amount, Decimal::from(300u32));
}

#[test]
fn breakdown_sums_match_type_total() {
    let txns = vec![
        tx(1, "2024-03-01", TxType::Expense, 120, Some("Food")),
        tx(2, "2024-03-02", TxType::Expense, 75, Some("Travel")),
        tx(3, "2024-03-03", TxType::Expense, 75, Some("Rent")),
        tx(4, "2024-03-04", TxType::Expense, 30, None),
    ];
    let shares = views::category_breakdown(&txns);
    let total: Decimal = shares.iter().map(|s| s.amount).sum();
    assert_eq!(total, views::monthly_totals(&txns).expense);
    // every transaction lands in exactly one group
    assert_eq!(shares.len(), 4);
    // non-increasing amounts
    for pair in shares.windows(2) {
        assert!(pair[0].amount >= pair[1].amount);
    }
}

#[test]
fn breakdown_ties_keep_first_encounter_order() {
    let txns = vec![
        tx(1, "2024-03-01", TxType::Expense, 75, Some("Travel")),
        tx(2, "2024-03-02", TxType::Expense, 75, Some("Rent")),
    ];
    let shares = views::category_breakdown(&txns);
    assert_eq!(shares[0].name, "Travel");
    assert_eq!(shares[1].name, "Rent");
}

#[test]
fn aggregators_handle_empty_input() {
    let totals = views::monthly_totals(&[]);
    assert!(totals.income.is_zero());
    assert!(totals.expense.is_zero());
    assert!(views::category_breakdown(&[]).is_empty());

    let view = FilteredView::new();
    assert_eq!(view.page_count(), 0);
    assert!(view.page(1).is_empty());
    let summary = view.summary();
    assert!(summary.net.is_zero());
    assert_eq!(summary.count, 0);
}

#[test]
fn pagination_round_trip() {
    let txns: Vec<Transaction> = (1..=45)
        .map(|i| tx(i, "2024-03-10", TxType::Expense, 10, Some("Food")))
        .collect();
    let mut view = FilteredView::new();
    assert!(view.set_transactions(0, txns.clone()));

    assert_eq!(view.page_count(), 3);
    assert_eq!(view.page(1).len(), PAGE_SIZE);
    assert_eq!(view.page(2).len(), PAGE_SIZE);
    assert_eq!(view.page(3).len(), 5);
    assert!(view.page(4).is_empty());

    let mut seen: Vec<i64> = Vec::new();
    for n in 1..=view.page_count() {
        seen.extend(view.page(n).iter().map(|t| t.id));
    }
    let expected: Vec<i64> = txns.iter().map(|t| t.id).collect();
    assert_eq!(seen, expected);
}

#[test]
fn summary_net_and_count() {
    let mut view = FilteredView::new();
    view.set_transactions(
        0,
        vec![
            tx(1, "2024-03-05", TxType::Income, 50000, None),
            tx(2, "2024-03-10", TxType::Expense, 1200, Some("Food")),
            tx(3, "2024-03-15", TxType::Expense, 800, Some("Food")),
        ],
    );
    let summary = view.summary();
    assert_eq!(summary.income, Decimal::from(50000u32));
    assert_eq!(summary.expense, Decimal::from(2000u32));
    assert_eq!(summary.net, summary.income - summary.expense);
    assert_eq!(summary.net, Decimal::from(48000u32));
    assert_eq!(summary.count, 3);
}

#[test]
fn apply_filters_resets_page_and_keeps_list_until_refetch() {
    let mut view = FilteredView::new();
    view.set_transactions(
        0,
        (1..=30)
            .map(|i| tx(i, "2024-03-10", TxType::Expense, 10, None))
            .collect(),
    );
    view.go_to_page(2);
    assert_eq!(view.current_page(), 2);

    let token = view.apply_filters(TxFilter {
        r#type: Some(TxType::Income),
        ..TxFilter::default()
    });
    // page reset, previous list still visible until the fetch lands
    assert_eq!(view.current_page(), 1);
    assert_eq!(view.transactions().len(), 30);

    assert!(view.set_transactions(token, vec![tx(99, "2024-04-01", TxType::Income, 5, None)]));
    assert_eq!(view.transactions().len(), 1);
}

#[test]
fn stale_fetch_results_are_discarded() {
    let mut view = FilteredView::new();
    let first = view.apply_filters(TxFilter::default());
    let second = view.apply_filters(TxFilter {
        r#type: Some(TxType::Expense),
        ..TxFilter::default()
    });

    // the slow first fetch arrives after the second request superseded it
    assert!(!view.set_transactions(first, vec![tx(1, "2024-03-01", TxType::Income, 1, None)]));
    assert!(view.transactions().is_empty());

    assert!(view.set_transactions(second, vec![tx(2, "2024-03-02", TxType::Expense, 2, None)]));
    assert_eq!(view.transactions().len(), 1);
    assert_eq!(view.transactions()[0].id, 2);
}
