// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Dashboard view model.
//!
//! One filtered dataset feeds the totals, the status cards and every
//! breakdown so the numbers on screen always agree with each other.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::engine::aggregate::{
    group_by, history, history_granularity, Dimension, Granularity, HistoryPoint, Slice,
};
use crate::engine::filter::{filter_transactions, FilterParams, StatusFilter};
use crate::engine::period::{reference_date, resolve, DateInterval, DateRange, PeriodMode};
use crate::engine::totals::{status_breakdown, totals, StatusBucket, Totals};
use crate::models::{Transaction, TransactionType};

#[derive(Debug, Clone, Default)]
pub struct DashboardQuery {
    pub mode: PeriodMode,
    pub explicit: DateRange,
    /// Overrides the reference otherwise derived from `explicit.from` or today.
    pub reference: Option<NaiveDate>,
    pub search: String,
    pub status: StatusFilter,
}

impl DashboardQuery {
    pub fn reference(&self, today: NaiveDate) -> NaiveDate {
        self.reference
            .unwrap_or_else(|| reference_date(&self.explicit, today))
    }

    pub fn interval(&self, today: NaiveDate) -> DateInterval {
        resolve(self.mode, &self.explicit, self.reference(today))
    }

    pub fn filter_params(&self, today: NaiveDate) -> FilterParams {
        FilterParams {
            search: self.search.clone(),
            status: self.status,
            interval: Some(self.interval(today)),
        }
    }

    /// Same filters without the date interval; the history series picks its
    /// own span.
    fn undated_params(&self) -> FilterParams {
        FilterParams {
            search: self.search.clone(),
            status: self.status,
            interval: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub mode: PeriodMode,
    pub label: String,
    pub interval: DateInterval,
    pub transaction_count: usize,
    pub totals: Totals,
    pub status: Vec<StatusBucket>,
    pub expense_by_category: Vec<Slice>,
    pub expense_by_subcategory: Vec<Slice>,
    pub expense_by_classification: Vec<Slice>,
    pub expense_by_wallet: Vec<Slice>,
    pub top_payees: Vec<Slice>,
    pub revenue_by_category: Vec<Slice>,
    pub top_payers: Vec<Slice>,
    pub granularity: Granularity,
    pub history: Vec<HistoryPoint>,
}

impl Dashboard {
    pub fn build(transactions: &[Transaction], query: &DashboardQuery, today: NaiveDate) -> Self {
        let interval = query.interval(today);
        let filtered = filter_transactions(transactions, &query.filter_params(today), today);
        let of_type = |kind: TransactionType| {
            filtered
                .iter()
                .copied()
                .filter(move |t| t.r#type == kind)
        };
        let expenses: Vec<&Transaction> = of_type(TransactionType::Expense).collect();
        let revenues: Vec<&Transaction> = of_type(TransactionType::Revenue).collect();
        debug!(
            total = transactions.len(),
            filtered = filtered.len(),
            expenses = expenses.len(),
            revenues = revenues.len(),
            "building dashboard"
        );

        let undated = filter_transactions(transactions, &query.undated_params(), today);

        Self {
            mode: query.mode,
            label: interval.label(query.mode),
            interval,
            transaction_count: filtered.len(),
            totals: totals(filtered.iter().copied()),
            status: status_breakdown(filtered.iter().copied(), today),
            expense_by_category: group_by(expenses.iter().copied(), Dimension::Category),
            expense_by_subcategory: group_by(expenses.iter().copied(), Dimension::Subcategory),
            expense_by_classification: group_by(
                expenses.iter().copied(),
                Dimension::Classification,
            ),
            expense_by_wallet: group_by(expenses.iter().copied(), Dimension::Wallet),
            top_payees: group_by(expenses.iter().copied(), Dimension::Payee),
            revenue_by_category: group_by(revenues.iter().copied(), Dimension::Category),
            top_payers: group_by(revenues.iter().copied(), Dimension::Payer),
            granularity: history_granularity(query.mode),
            history: history(undated.iter().copied(), query.mode, &interval),
        }
    }
}
