// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Table};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

static NON_NUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9,.\-]").unwrap());

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

/// Accepts `YYYY-MM-DD` or any ISO timestamp starting with one. Blank or
/// malformed input yields `None`.
pub fn parse_date_lenient(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    let head = s.get(..10)?;
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

/// Parses a monetary amount the way the backend hands it over: plain
/// numbers, `"1234.56"`, `"1.234,56"` or `"R$ 12,50"`. Unparseable input is
/// zero and the sign is dropped.
pub fn parse_amount_lenient(s: &str) -> Decimal {
    let cleaned = NON_NUMERIC.replace_all(s.trim(), "");
    let last_comma = cleaned.rfind(',');
    let last_dot = cleaned.rfind('.');
    let normalized = match (last_comma, last_dot) {
        (Some(c), Some(d)) if c > d => cleaned.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => cleaned.replace(',', ""),
        (Some(_), None) => cleaned.replace(',', "."),
        _ => cleaned.into_owned(),
    };
    normalized
        .parse::<Decimal>()
        .map(|d| d.abs())
        .unwrap_or(Decimal::ZERO)
}

/// Lowercases and strips diacritics so Portuguese text compares loosely
/// (`"Café"` and `"cafe"` fold to the same string). Text is decomposed
/// first, so precomposed and combining-mark accents fold alike.
pub fn fold_text(s: &str) -> String {
    s.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// `DD/MM/YYYY`, the format dates are shown (and searched) in.
pub fn format_br_date(d: NaiveDate) -> String {
    d.format("%d/%m/%Y").to_string()
}

pub fn fmt_money(d: &Decimal) -> String {
    format!("{:.2}", d.round_dp(2))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

/// Like [`pretty_table`] but right-aligns the trailing `numeric` columns.
pub fn money_table(headers: &[&str], rows: Vec<Vec<String>>, numeric: usize) -> Table {
    let mut t = pretty_table(headers, rows);
    let first_numeric = headers.len().saturating_sub(numeric);
    for idx in first_numeric..headers.len() {
        if let Some(col) = t.column_mut(idx) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
