// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::cmp::Reverse;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::engine::status::DisplayStatus;
use crate::models::{Transaction, TransactionType};

/// A transaction as the list view shows it, with its derived status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: Option<NaiveDate>,
    pub competence: Option<NaiveDate>,
    pub description: String,
    pub r#type: TransactionType,
    pub amount: Decimal,
    pub category: String,
    pub counterparty: String,
    pub wallet: String,
    pub status: DisplayStatus,
}

impl TransactionRow {
    pub fn from_transaction(t: &Transaction, today: NaiveDate) -> Self {
        Self {
            id: t.id.clone(),
            date: t.date,
            competence: t.competence,
            description: t.description.clone(),
            r#type: t.r#type,
            amount: t.amount,
            category: t.category.as_ref().map(|c| c.name.clone()).unwrap_or_default(),
            counterparty: t.counterparty().map(|c| c.name.clone()).unwrap_or_default(),
            wallet: t.wallet.as_ref().map(|w| w.name.clone()).unwrap_or_default(),
            status: t.display_status(today),
        }
    }
}

/// Newest first by competence (or realized date); undated rows go last and
/// ties keep their input order.
pub fn transaction_rows<'a, I>(transactions: I, today: NaiveDate) -> Vec<TransactionRow>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut sorted: Vec<&Transaction> = transactions.into_iter().collect();
    sorted.sort_by_key(|t| (t.key_date().is_none(), Reverse(t.key_date())));
    sorted
        .into_iter()
        .map(|t| TransactionRow::from_transaction(t, today))
        .collect()
}
