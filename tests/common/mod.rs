// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

#![allow(dead_code)]

use std::str::FromStr;

use caixa::models::{Contact, Tag, Transaction, TransactionType};
use chrono::NaiveDate;
use rust_decimal::Decimal;

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

pub struct TxBuilder(Transaction);

impl TxBuilder {
    pub fn date(mut self, s: &str) -> Self {
        self.0.date = Some(d(s));
        self
    }
    pub fn competence(mut self, s: &str) -> Self {
        self.0.competence = Some(d(s));
        self
    }
    pub fn status(mut self, s: &str) -> Self {
        self.0.status = s.to_string();
        self
    }
    pub fn description(mut self, s: &str) -> Self {
        self.0.description = s.to_string();
        self
    }
    pub fn category(mut self, name: &str, color: &str) -> Self {
        self.0.category = Some(Tag::new(name, Some(color)));
        self
    }
    pub fn subcategory(mut self, name: &str) -> Self {
        self.0.subcategory = Some(Tag::new(name, None));
        self
    }
    pub fn classification(mut self, name: &str, color: &str) -> Self {
        self.0.classification = Some(Tag::new(name, Some(color)));
        self
    }
    pub fn payee(mut self, name: &str) -> Self {
        self.0.payee = Some(Contact::new(name));
        self
    }
    pub fn payer(mut self, name: &str) -> Self {
        self.0.payer = Some(Contact::new(name));
        self
    }
    pub fn wallet(mut self, name: &str, color: &str) -> Self {
        self.0.wallet = Some(Tag::new(name, Some(color)));
        self
    }
    pub fn build(self) -> Transaction {
        self.0
    }
}

pub fn tx(id: &str, kind: TransactionType, amount: &str) -> TxBuilder {
    TxBuilder(Transaction::new(id, kind, dec(amount)))
}

pub fn expense(id: &str, amount: &str) -> TxBuilder {
    tx(id, TransactionType::Expense, amount)
}

pub fn revenue(id: &str, amount: &str) -> TxBuilder {
    tx(id, TransactionType::Revenue, amount)
}

pub fn investment(id: &str, amount: &str) -> TxBuilder {
    tx(id, TransactionType::Investment, amount)
}
