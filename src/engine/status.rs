// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Display status of a transaction.
//!
//! Only `Realizado` and `Pendente` are ever persisted. `Agendado` and
//! `Atrasado` are recomputed from the realized date against "today", which
//! callers pass in explicitly.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DisplayStatus {
    Realizado,
    Pendente,
    Agendado,
    Atrasado,
}

impl DisplayStatus {
    pub const ALL: [DisplayStatus; 4] = [
        DisplayStatus::Realizado,
        DisplayStatus::Pendente,
        DisplayStatus::Agendado,
        DisplayStatus::Atrasado,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Realizado => "Realizado",
            Self::Pendente => "Pendente",
            Self::Agendado => "Agendado",
            Self::Atrasado => "Atrasado",
        }
    }
}

impl fmt::Display for DisplayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "realizado" | "paid" => Ok(Self::Realizado),
            "pendente" | "pending" => Ok(Self::Pendente),
            "agendado" | "scheduled" => Ok(Self::Agendado),
            "atrasado" | "overdue" => Ok(Self::Atrasado),
            other => Err(Error::InvalidInput(format!(
                "unknown status '{}' (use Realizado|Pendente|Agendado|Atrasado)",
                other
            ))),
        }
    }
}

/// Maps a persisted status onto its base value. Legacy `paid`/`pending`
/// are accepted; anything else, including the derived labels, is pending.
pub fn normalize_persisted(raw: &str) -> DisplayStatus {
    match raw.trim().to_lowercase().as_str() {
        "realizado" | "paid" => DisplayStatus::Realizado,
        _ => DisplayStatus::Pendente,
    }
}

pub fn derive_status(raw: &str, date: Option<NaiveDate>, today: NaiveDate) -> DisplayStatus {
    if normalize_persisted(raw) == DisplayStatus::Realizado {
        return DisplayStatus::Realizado;
    }
    match date.map(|d| d.cmp(&today)) {
        Some(Ordering::Greater) => DisplayStatus::Agendado,
        Some(Ordering::Less) => DisplayStatus::Atrasado,
        Some(Ordering::Equal) | None => DisplayStatus::Pendente,
    }
}
