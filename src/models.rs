// Copyright (c) 2025 Ledgerlite.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display label for a transaction whose category join is absent.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Display label for a transaction whose account join is absent.
pub const UNKNOWN_ACCOUNT: &str = "Unknown";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub name: String,
    pub r#type: String,
    pub bank_name: Option<String>,
    pub account_number: Option<String>,
    pub balance: Decimal,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub r#type: TxType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subcategory {
    pub id: i64,
    pub category_id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub date: NaiveDate,
    pub account_id: i64,
    pub r#type: TxType,
    pub amount: Decimal,
    pub category_id: Option<i64>,
    pub subcategory_id: Option<i64>,
    pub description: Option<String>,
    // Denormalized join results supplied by the store.
    pub account: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
}

impl Transaction {
    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or(UNCATEGORIZED)
    }

    pub fn account_label(&self) -> &str {
        self.account.as_deref().unwrap_or(UNKNOWN_ACCOUNT)
    }
}

/// The two transaction directions. Income and expense amounts are both
/// stored positive; the type carries the sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxType {
    Income,
    Expense,
}

impl TxType {
    pub fn as_str(self) -> &'static str {
        match self {
            TxType::Income => "income",
            TxType::Expense => "expense",
        }
    }
}

impl fmt::Display for TxType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Invalid transaction type '{0}', expected income|expense")]
pub struct ParseTxTypeError(String);

impl FromStr for TxType {
    type Err = ParseTxTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(TxType::Income),
            "expense" => Ok(TxType::Expense),
            _ => Err(ParseTxTypeError(s.to_string())),
        }
    }
}

/// Optional constraints narrowing which transactions a query returns.
/// Absent fields place no restriction on that dimension; present fields
/// compose as a logical AND.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TxFilter {
    pub account_id: Option<i64>,
    pub r#type: Option<TxType>,
    pub category_id: Option<i64>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub limit: Option<usize>,
}
