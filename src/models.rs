// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};
use tracing::warn;

use crate::engine::status::{derive_status, DisplayStatus};
use crate::error::Error;
use crate::utils::{parse_amount_lenient, parse_date_lenient};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    #[serde(alias = "receita", alias = "income")]
    Revenue,
    #[serde(alias = "despesa")]
    Expense,
    #[serde(alias = "investimento")]
    Investment,
}

impl TransactionType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Revenue => "revenue",
            Self::Expense => "expense",
            Self::Investment => "investment",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "revenue" | "receita" | "income" => Ok(Self::Revenue),
            "expense" | "despesa" => Ok(Self::Expense),
            "investment" | "investimento" => Ok(Self::Investment),
            other => Err(Error::InvalidInput(format!(
                "unknown transaction type '{}' (use revenue|expense|investment)",
                other
            ))),
        }
    }
}

/// Embedded category, subcategory, classification or wallet reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(default)]
    pub name: String,
    /// Symbolic palette key such as `"emerald"`.
    #[serde(default)]
    pub color: Option<String>,
}

impl Tag {
    pub fn new(name: impl Into<String>, color: Option<&str>) -> Self {
        Self {
            name: name.into(),
            color: color.map(str::to_string),
        }
    }
}

/// Embedded payee or payer reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub name: String,
}

impl Contact {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default)]
    pub description: String,
    /// Always non-negative; the direction lives in `r#type`.
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amount: Decimal,
    pub r#type: TransactionType,
    #[serde(default, deserialize_with = "lenient_date")]
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_competence")]
    pub competence: Option<NaiveDate>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub category: Option<Tag>,
    #[serde(default)]
    pub subcategory: Option<Tag>,
    #[serde(default)]
    pub classification: Option<Tag>,
    #[serde(default)]
    pub payee: Option<Contact>,
    #[serde(default)]
    pub payer: Option<Contact>,
    #[serde(default)]
    pub wallet: Option<Tag>,
}

impl Transaction {
    pub fn new(id: impl Into<String>, r#type: TransactionType, amount: Decimal) -> Self {
        Self {
            id: id.into(),
            description: String::new(),
            amount: amount.abs(),
            r#type,
            date: None,
            competence: None,
            status: "Pendente".to_string(),
            category: None,
            subcategory: None,
            classification: None,
            payee: None,
            payer: None,
            wallet: None,
        }
    }

    /// Date used for period membership: competence first, realized date second.
    pub fn key_date(&self) -> Option<NaiveDate> {
        self.competence.or(self.date)
    }

    /// Counterparty of the transaction, preferring the payee over the payer.
    pub fn counterparty(&self) -> Option<&Contact> {
        self.payee.as_ref().or(self.payer.as_ref())
    }

    pub fn display_status(&self, today: NaiveDate) -> DisplayStatus {
        derive_status(&self.status, self.date, today)
    }
}

/// Competence is month-granular; the day is pinned to the 1st.
pub fn normalize_competence(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn lenient_id<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

fn lenient_amount<'de, D>(d: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::Number(n)) => number_amount(&n),
        Some(Value::String(s)) => parse_amount_lenient(&s),
        _ => Decimal::ZERO,
    })
}

/// JSON numbers may come in exponent form (`1e21`, `2.5e-3`), which the
/// string cleanup would mangle.
fn number_amount(n: &Number) -> Decimal {
    let raw = n.to_string();
    let parsed = if raw.contains(['e', 'E']) {
        Decimal::from_scientific(&raw)
    } else {
        raw.parse::<Decimal>()
    };
    match parsed {
        Ok(amount) => amount.abs(),
        Err(err) => {
            warn!(amount = %raw, %err, "unreadable amount, using 0");
            Decimal::ZERO
        }
    }
}

fn lenient_date<'de, D>(d: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::String(s)) => parse_date_lenient(&s),
        _ => None,
    })
}

fn lenient_competence<'de, D>(d: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_date(d)?.map(normalize_competence))
}
