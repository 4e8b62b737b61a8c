// Copyright (c) Ledgerlite.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Storage-agnostic aggregation over already-fetched transaction lists:
//! monthly income/expense totals, ranked per-category breakdowns, and the
//! paginated filtered view with its running summary. Nothing here touches
//! the store; callers fetch, these functions reduce.

use crate::models::{Transaction, TxFilter, TxType};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

/// Fixed page size of the filtered view.
pub const PAGE_SIZE: usize = 20;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MonthlyTotals {
    pub income: Decimal,
    pub expense: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub name: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterSummary {
    pub income: Decimal,
    pub expense: Decimal,
    pub net: Decimal,
    pub count: usize,
}

/// Two-way reduction of a transaction list by type. The input is assumed
/// pre-filtered to the month window by the upstream query; no date
/// filtering happens here.
pub fn monthly_totals(transactions: &[Transaction]) -> MonthlyTotals {
    let mut totals = MonthlyTotals::default();
    for t in transactions {
        match t.r#type {
            TxType::Income => totals.income += t.amount,
            TxType::Expense => totals.expense += t.amount,
        }
    }
    totals
}

/// Group transactions by category display name (missing join groups under
/// "Uncategorized"), sum amounts, and rank descending. Equal sums keep
/// first-encounter order; the sort is stable over insertion-ordered groups.
pub fn category_breakdown(transactions: &[Transaction]) -> Vec<CategoryShare> {
    let mut shares: Vec<CategoryShare> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for t in transactions {
        let name = t.category_label();
        match index.get(name) {
            Some(&i) => shares[i].amount += t.amount,
            None => {
                index.insert(name.to_string(), shares.len());
                shares.push(CategoryShare {
                    name: name.to_string(),
                    amount: t.amount,
                });
            }
        }
    }
    shares.sort_by(|a, b| b.amount.cmp(&a.amount));
    shares
}

/// Single-session filtered view state: the current filter criteria, the
/// loaded (unpaginated) transaction list, and the current page. The list
/// arrives via [`FilteredView::set_transactions`] after the caller runs
/// the fetch; a fetch failure simply never delivers, leaving the last
/// loaded list and filters visible.
#[derive(Debug)]
pub struct FilteredView {
    filter: TxFilter,
    transactions: Vec<Transaction>,
    page: usize,
    generation: u64,
}

impl Default for FilteredView {
    fn default() -> Self {
        FilteredView {
            filter: TxFilter::default(),
            transactions: Vec::new(),
            page: 1,
            generation: 0,
        }
    }
}

impl FilteredView {
    pub fn new() -> Self {
        FilteredView::default()
    }

    pub fn filter(&self) -> &TxFilter {
        &self.filter
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Replace the filter criteria and reset to page 1. Returns the fetch
    /// token the matching [`FilteredView::set_transactions`] call must
    /// present; the currently loaded list stays in place until then.
    pub fn apply_filters(&mut self, filter: TxFilter) -> u64 {
        self.filter = filter;
        self.page = 1;
        self.generation += 1;
        self.generation
    }

    /// Install a freshly fetched list. A delivery whose token has been
    /// superseded by a later `apply_filters` is discarded (last request
    /// wins) and returns false.
    pub fn set_transactions(&mut self, token: u64, transactions: Vec<Transaction>) -> bool {
        if token != self.generation {
            return false;
        }
        self.transactions = transactions;
        true
    }

    /// Number of pages; 0 when the list is empty. Callers render no
    /// pagination control when this is 1 or less.
    pub fn page_count(&self) -> usize {
        self.transactions.len().div_ceil(PAGE_SIZE)
    }

    pub fn current_page(&self) -> usize {
        self.page
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// The 1-based page slice. Out-of-range pages yield an empty slice,
    /// never an error.
    pub fn page(&self, page: usize) -> &[Transaction] {
        if page == 0 {
            return &[];
        }
        let start = (page - 1) * PAGE_SIZE;
        if start >= self.transactions.len() {
            return &[];
        }
        let end = (start + PAGE_SIZE).min(self.transactions.len());
        &self.transactions[start..end]
    }

    pub fn current_items(&self) -> &[Transaction] {
        self.page(self.page)
    }

    /// Income, expense, net and count over the full filtered list,
    /// pre-pagination, in a single pass.
    pub fn summary(&self) -> FilterSummary {
        let mut summary = FilterSummary::default();
        for t in &self.transactions {
            match t.r#type {
                TxType::Income => summary.income += t.amount,
                TxType::Expense => summary.expense += t.amount,
            }
        }
        summary.net = summary.income - summary.expense;
        summary.count = self.transactions.len();
        summary
    }
}
