// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::engine::period::DateInterval;
use crate::engine::status::DisplayStatus;
use crate::error::Error;
use crate::models::Transaction;
use crate::utils::{fold_text, format_br_date};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Only(DisplayStatus),
}

impl StatusFilter {
    fn accepts(self, status: DisplayStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(s) => write!(f, "{}", s),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "all" | "todos" => Ok(Self::All),
            other => other.parse().map(Self::Only),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FilterParams {
    pub search: String,
    pub status: StatusFilter,
    pub interval: Option<DateInterval>,
}

/// Applies status, interval and text search in that order. The result keeps
/// the input order and borrows from it.
pub fn filter_transactions<'a>(
    transactions: &'a [Transaction],
    params: &FilterParams,
    today: NaiveDate,
) -> Vec<&'a Transaction> {
    let query = fold_text(params.search.trim());
    transactions
        .iter()
        .filter(|t| params.status.accepts(t.display_status(today)))
        .filter(|t| match params.interval {
            Some(interval) => t.key_date().is_some_and(|d| interval.contains(d)),
            None => true,
        })
        .filter(|t| query.is_empty() || matches_search(t, &query))
        .collect()
}

/// `query` must already be folded with [`fold_text`].
pub fn matches_search(t: &Transaction, query: &str) -> bool {
    search_haystack(t)
        .iter()
        .any(|field| fold_text(field).contains(query))
}

fn search_haystack(t: &Transaction) -> Vec<String> {
    let mut fields = vec![t.description.clone()];
    fields.extend(t.payee.as_ref().map(|c| c.name.clone()));
    fields.extend(t.payer.as_ref().map(|c| c.name.clone()));
    fields.extend(t.category.as_ref().map(|c| c.name.clone()));
    let amount = format!("{:.2}", t.amount);
    fields.push(amount.replace('.', ","));
    fields.push(amount);
    fields.extend(t.date.map(format_br_date));
    fields
}
