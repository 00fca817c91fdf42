// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Transaction snapshots exported from the hosted backend.
//!
//! JSON snapshots are the backend's nested row shape (either a bare array or
//! `{"transactions": [...]}`); CSV snapshots use the flat [`CsvRow`] layout.
//! Rows that cannot be understood are skipped with a warning rather than
//! failing the whole load.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::models::{normalize_competence, Contact, Tag, Transaction};
use crate::utils::{parse_amount_lenient, parse_date_lenient};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Csv,
}

impl SnapshotFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_lowercase();
        Self::from_name(&ext)
    }

    pub fn from_name(name: &str) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(Error::UnsupportedFormat(other.to_string())),
        }
    }
}

pub fn load_snapshot(path: &Path) -> Result<Vec<Transaction>> {
    let txns = match SnapshotFormat::from_path(path)? {
        SnapshotFormat::Json => {
            let raw = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
            parse_json(&raw)?
        }
        SnapshotFormat::Csv => {
            let rdr = csv::ReaderBuilder::new()
                .has_headers(true)
                .trim(csv::Trim::All)
                .flexible(true)
                .from_path(path)?;
            parse_csv(rdr)?
        }
    };
    info!(path = %path.display(), count = txns.len(), "loaded snapshot");
    Ok(txns)
}

pub fn parse_json(raw: &str) -> Result<Vec<Transaction>> {
    let items = match serde_json::from_str::<Value>(raw)? {
        Value::Array(items) => items,
        Value::Object(mut obj) => match obj.remove("transactions") {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(Error::InvalidInput(
                    "JSON snapshot object has no 'transactions' array".into(),
                ));
            }
        },
        _ => {
            return Err(Error::InvalidInput(
                "JSON snapshot must be an array of transactions".into(),
            ));
        }
    };

    let mut out = Vec::with_capacity(items.len());
    for (idx, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<Transaction>(item) {
            Ok(t) => out.push(t),
            Err(err) => warn!(row = idx, %err, "skipping unreadable transaction"),
        }
    }
    Ok(out)
}

/// Flat CSV layout of a transaction; relation colors sit next to their names.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvRow {
    pub id: String,
    pub description: String,
    pub amount: String,
    pub r#type: String,
    pub date: String,
    pub competence: String,
    pub status: String,
    pub category: String,
    pub category_color: String,
    pub subcategory: String,
    pub subcategory_color: String,
    pub classification: String,
    pub classification_color: String,
    pub payee: String,
    pub payer: String,
    pub wallet: String,
    pub wallet_color: String,
}

impl CsvRow {
    pub fn into_transaction(self) -> Result<Transaction> {
        let mut t = Transaction::new(self.id, self.r#type.parse()?, parse_amount_lenient(&self.amount));
        t.description = self.description;
        t.date = parse_date_lenient(&self.date);
        t.competence = parse_date_lenient(&self.competence).map(normalize_competence);
        t.status = self.status;
        t.category = tag(self.category, self.category_color);
        t.subcategory = tag(self.subcategory, self.subcategory_color);
        t.classification = tag(self.classification, self.classification_color);
        t.payee = contact(self.payee);
        t.payer = contact(self.payer);
        t.wallet = tag(self.wallet, self.wallet_color);
        Ok(t)
    }

    pub fn from_transaction(t: &Transaction) -> Self {
        let (category, category_color) = split_tag(&t.category);
        let (subcategory, subcategory_color) = split_tag(&t.subcategory);
        let (classification, classification_color) = split_tag(&t.classification);
        let (wallet, wallet_color) = split_tag(&t.wallet);
        Self {
            id: t.id.clone(),
            description: t.description.clone(),
            amount: format!("{:.2}", t.amount),
            r#type: t.r#type.to_string(),
            date: t.date.map(|d| d.to_string()).unwrap_or_default(),
            competence: t.competence.map(|d| d.to_string()).unwrap_or_default(),
            status: t.status.clone(),
            category,
            category_color,
            subcategory,
            subcategory_color,
            classification,
            classification_color,
            payee: t.payee.as_ref().map(|c| c.name.clone()).unwrap_or_default(),
            payer: t.payer.as_ref().map(|c| c.name.clone()).unwrap_or_default(),
            wallet,
            wallet_color,
        }
    }
}

pub fn parse_csv<R: std::io::Read>(mut rdr: csv::Reader<R>) -> Result<Vec<Transaction>> {
    let mut out = Vec::new();
    for (idx, result) in rdr.deserialize::<CsvRow>().enumerate() {
        match result.map_err(Error::from).and_then(CsvRow::into_transaction) {
            Ok(t) => out.push(t),
            Err(err) => warn!(row = idx + 1, %err, "skipping unreadable transaction"),
        }
    }
    Ok(out)
}

pub fn write_csv<'a, I>(path: &Path, transactions: I) -> Result<()>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut wtr = csv::Writer::from_path(path)?;
    for t in transactions {
        wtr.serialize(CsvRow::from_transaction(t))?;
    }
    wtr.flush().map_err(|e| Error::io(path, e))?;
    Ok(())
}

pub fn write_json<'a, I>(path: &Path, transactions: I) -> Result<()>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let items: Vec<&Transaction> = transactions.into_iter().collect();
    fs::write(path, serde_json::to_string_pretty(&items)?).map_err(|e| Error::io(path, e))
}

fn tag(name: String, color: String) -> Option<Tag> {
    if name.is_empty() {
        return None;
    }
    let color = Some(color).filter(|c| !c.is_empty());
    Some(Tag { name, color })
}

fn contact(name: String) -> Option<Contact> {
    Some(name).filter(|n| !n.is_empty()).map(Contact::new)
}

fn split_tag(tag: &Option<Tag>) -> (String, String) {
    match tag {
        Some(t) => (t.name.clone(), t.color.clone().unwrap_or_default()),
        None => (String::new(), String::new()),
    }
}
