// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::engine::status::DisplayStatus;
use crate::models::{Transaction, TransactionType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Totals {
    pub income: Decimal,
    pub expense: Decimal,
    pub investment: Decimal,
    pub balance: Decimal,
}

pub fn totals<'a, I>(transactions: I) -> Totals
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut out = Totals::default();
    for t in transactions {
        match t.r#type {
            TransactionType::Revenue => out.income += t.amount,
            TransactionType::Expense => out.expense += t.amount,
            TransactionType::Investment => out.investment += t.amount,
        }
    }
    out.balance = out.income - out.expense - out.investment;
    out
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBucket {
    pub status: DisplayStatus,
    pub count: usize,
    pub amount: Decimal,
}

/// Count and amount per display status, one entry per status in
/// [`DisplayStatus::ALL`] order.
pub fn status_breakdown<'a, I>(transactions: I, today: NaiveDate) -> Vec<StatusBucket>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut buckets: Vec<StatusBucket> = DisplayStatus::ALL
        .iter()
        .map(|&status| StatusBucket {
            status,
            count: 0,
            amount: Decimal::ZERO,
        })
        .collect();
    for t in transactions {
        let status = t.display_status(today);
        if let Some(b) = buckets.iter_mut().find(|b| b.status == status) {
            b.count += 1;
            b.amount += t.amount;
        }
    }
    buckets
}
