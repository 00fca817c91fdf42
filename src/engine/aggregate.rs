// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Reducers that fold a filtered transaction list into chart-ready series.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::engine::palette;
use crate::engine::period::{DateInterval, PeriodMode};
use crate::error::Error;
use crate::models::{Tag, Transaction, TransactionType};

/// One labeled bar or pie slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slice {
    pub label: String,
    pub amount: Decimal,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Category,
    Subcategory,
    Classification,
    Payee,
    Payer,
    Wallet,
}

impl Dimension {
    pub fn fallback_label(self) -> &'static str {
        match self {
            Self::Category => "Sem Categoria",
            Self::Subcategory => "Sem Subcategoria",
            Self::Classification => "Sem Classificação",
            Self::Payee => "Sem Beneficiário",
            Self::Payer => "Sem Pagador",
            Self::Wallet => "Sem Carteira",
        }
    }

    pub fn limit(self) -> Option<usize> {
        match self {
            Self::Payee | Self::Payer => Some(5),
            Self::Subcategory => Some(10),
            Self::Category | Self::Classification | Self::Wallet => None,
        }
    }

    /// Label and palette key of the entity this dimension groups by.
    pub fn select(self, t: &Transaction) -> Option<(&str, Option<&str>)> {
        match self {
            Self::Category => tag_ref(&t.category),
            Self::Subcategory => tag_ref(&t.subcategory),
            Self::Classification => tag_ref(&t.classification),
            Self::Wallet => tag_ref(&t.wallet),
            Self::Payee => t.payee.as_ref().map(|c| (c.name.as_str(), None)),
            Self::Payer => t.counterparty().map(|c| (c.name.as_str(), None)),
        }
    }
}

fn tag_ref(tag: &Option<Tag>) -> Option<(&str, Option<&str>)> {
    tag.as_ref().map(|g| (g.name.as_str(), g.color.as_deref()))
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Category => "category",
            Self::Subcategory => "subcategory",
            Self::Classification => "classification",
            Self::Payee => "payee",
            Self::Payer => "payer",
            Self::Wallet => "wallet",
        };
        f.write_str(s)
    }
}

impl FromStr for Dimension {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "category" | "categoria" => Ok(Self::Category),
            "subcategory" | "subcategoria" => Ok(Self::Subcategory),
            "classification" | "classificacao" | "classificação" => Ok(Self::Classification),
            "payee" | "beneficiario" | "beneficiário" => Ok(Self::Payee),
            "payer" | "pagador" => Ok(Self::Payer),
            "wallet" | "carteira" => Ok(Self::Wallet),
            other => Err(Error::InvalidInput(format!(
                "unknown dimension '{}' (use category|subcategory|classification|payee|payer|wallet)",
                other
            ))),
        }
    }
}

pub fn group_by<'a, I>(transactions: I, dimension: Dimension) -> Vec<Slice>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    group_by_with(
        transactions,
        |t| dimension.select(t),
        dimension.fallback_label(),
        dimension.limit(),
    )
}

/// Sums amounts per label, sorted descending by amount. Ties keep first
/// appearance order. The color of a label is taken from its first
/// occurrence; blank names count as missing.
pub fn group_by_with<'a, I, F>(
    transactions: I,
    selector: F,
    fallback: &str,
    limit: Option<usize>,
) -> Vec<Slice>
where
    I: IntoIterator<Item = &'a Transaction>,
    F: Fn(&'a Transaction) -> Option<(&'a str, Option<&'a str>)>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut slices: Vec<Slice> = Vec::new();

    for t in transactions {
        let (label, color_key) = match selector(t) {
            Some((name, color)) if !name.trim().is_empty() => (name.trim(), color),
            _ => (fallback, None),
        };
        match index.get(label) {
            Some(&i) => slices[i].amount += t.amount,
            None => {
                index.insert(label.to_string(), slices.len());
                slices.push(Slice {
                    label: label.to_string(),
                    amount: t.amount,
                    color: palette::hex_for(color_key),
                });
            }
        }
    }

    slices.sort_by(|a, b| b.amount.cmp(&a.amount));
    if let Some(n) = limit {
        slices.truncate(n);
    }
    slices
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Day,
    Month,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryPoint {
    /// `YYYY-MM-DD` for daily buckets, `YYYY-MM` for monthly ones.
    pub bucket: String,
    pub income: Decimal,
    pub expense: Decimal,
}

/// The month view is bucketed per day over the interval; every other mode
/// is bucketed per month over each calendar year the interval touches.
pub fn history_granularity(mode: PeriodMode) -> Granularity {
    match mode {
        PeriodMode::Mes => Granularity::Day,
        _ => Granularity::Month,
    }
}

pub fn history<'a, I>(transactions: I, mode: PeriodMode, interval: &DateInterval) -> Vec<HistoryPoint>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let granularity = history_granularity(mode);
    let span = match granularity {
        Granularity::Day => *interval,
        Granularity::Month => {
            let first_year = interval.start_date().year();
            let last_year = interval.end_date().year().max(first_year);
            match (
                NaiveDate::from_ymd_opt(first_year, 1, 1),
                NaiveDate::from_ymd_opt(last_year, 12, 31),
            ) {
                (Some(start), Some(end)) => DateInterval::from_days(start, end),
                _ => *interval,
            }
        }
    };

    let mut buckets: BTreeMap<String, (Decimal, Decimal)> = BTreeMap::new();
    for day in span.days() {
        buckets
            .entry(bucket_key(day, granularity))
            .or_insert((Decimal::ZERO, Decimal::ZERO));
    }

    for t in transactions {
        let Some(day) = t.key_date().filter(|d| span.contains(*d)) else {
            continue;
        };
        let entry = buckets
            .entry(bucket_key(day, granularity))
            .or_insert((Decimal::ZERO, Decimal::ZERO));
        match t.r#type {
            TransactionType::Revenue => entry.0 += t.amount,
            TransactionType::Expense => entry.1 += t.amount,
            TransactionType::Investment => {}
        }
    }

    buckets
        .into_iter()
        .map(|(bucket, (income, expense))| HistoryPoint {
            bucket,
            income,
            expense,
        })
        .collect()
}

fn bucket_key(day: NaiveDate, granularity: Granularity) -> String {
    match granularity {
        Granularity::Day => day.format("%Y-%m-%d").to_string(),
        Granularity::Month => day.format("%Y-%m").to_string(),
    }
}
