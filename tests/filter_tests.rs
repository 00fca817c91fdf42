// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use caixa::engine::filter::{filter_transactions, FilterParams, StatusFilter};
use caixa::engine::period::{resolve, DateInterval, DateRange, PeriodMode};
use caixa::engine::status::DisplayStatus;
use caixa::models::Transaction;
use common::{d, expense, revenue};

fn ids(list: &[&Transaction]) -> Vec<String> {
    list.iter().map(|t| t.id.clone()).collect()
}

fn search(q: &str) -> FilterParams {
    FilterParams {
        search: q.to_string(),
        ..Default::default()
    }
}

#[test]
fn empty_params_keep_everything_in_order() {
    let txns = vec![
        expense("b", "1").build(),
        expense("a", "2").build(),
        revenue("c", "3").build(),
    ];
    let out = filter_transactions(&txns, &FilterParams::default(), d("2026-10-18"));
    assert_eq!(ids(&out), vec!["b", "a", "c"]);
}

#[test]
fn search_ignores_case_and_accents() {
    let txns = vec![
        expense("1", "18.90").description("Café Starbucks").build(),
        expense("2", "40").description("Padaria").build(),
    ];
    let out = filter_transactions(&txns, &search("cafe"), d("2026-10-18"));
    assert_eq!(ids(&out), vec!["1"]);
    let out = filter_transactions(&txns, &search("CAFÉ"), d("2026-10-18"));
    assert_eq!(ids(&out), vec!["1"]);
}

#[test]
fn search_folds_decomposed_accents() {
    let txns = vec![
        expense("nfc", "18.90").description("Caf\u{e9} Starbucks").build(),
        expense("nfd", "18.90").description("Cafe\u{301} Starbucks").build(),
        expense("other", "3").description("Cafeteira").build(),
        expense("acai", "9").description("A\u{e7}a\u{ed} da praia").build(),
    ];
    let today = d("2026-10-18");
    assert_eq!(
        ids(&filter_transactions(&txns, &search("cafe starbucks"), today)),
        vec!["nfc", "nfd"]
    );
    assert_eq!(
        ids(&filter_transactions(&txns, &search("CAFE\u{301} S"), today)),
        vec!["nfc", "nfd"]
    );
    assert_eq!(
        ids(&filter_transactions(&txns, &search("ac\u{327}ai"), today)),
        vec!["acai"]
    );
}

#[test]
fn search_looks_at_contacts_category_amount_and_date() {
    let txns = vec![
        expense("payee", "10").payee("João Açougue").build(),
        revenue("payer", "10").payer("Cliente Ltda").build(),
        expense("cat", "10").category("Alimentação", "emerald").build(),
        expense("amount", "1234.5").build(),
        expense("date", "10").date("2026-03-05").build(),
    ];
    let today = d("2026-10-18");
    assert_eq!(ids(&filter_transactions(&txns, &search("acougue"), today)), vec!["payee"]);
    assert_eq!(ids(&filter_transactions(&txns, &search("cliente"), today)), vec!["payer"]);
    assert_eq!(ids(&filter_transactions(&txns, &search("alimentacao"), today)), vec!["cat"]);
    assert_eq!(ids(&filter_transactions(&txns, &search("1234.50"), today)), vec!["amount"]);
    assert_eq!(ids(&filter_transactions(&txns, &search("1234,5"), today)), vec!["amount"]);
    assert_eq!(ids(&filter_transactions(&txns, &search("05/03/2026"), today)), vec!["date"]);
}

#[test]
fn blank_search_matches_all() {
    let txns = vec![expense("1", "1").build(), expense("2", "2").build()];
    let out = filter_transactions(&txns, &search("   "), d("2026-10-18"));
    assert_eq!(out.len(), 2);
}

#[test]
fn status_filter_uses_derived_status() {
    let today = d("2026-10-18");
    let txns = vec![
        expense("done", "1").status("Realizado").date("2026-10-01").build(),
        expense("late", "1").status("Pendente").date("2026-10-01").build(),
        expense("soon", "1").status("Pendente").date("2026-11-01").build(),
        expense("open", "1").status("pending").build(),
    ];
    let by = |s: DisplayStatus| FilterParams {
        status: StatusFilter::Only(s),
        ..Default::default()
    };
    assert_eq!(ids(&filter_transactions(&txns, &by(DisplayStatus::Realizado), today)), vec!["done"]);
    assert_eq!(ids(&filter_transactions(&txns, &by(DisplayStatus::Atrasado), today)), vec!["late"]);
    assert_eq!(ids(&filter_transactions(&txns, &by(DisplayStatus::Agendado), today)), vec!["soon"]);
    assert_eq!(ids(&filter_transactions(&txns, &by(DisplayStatus::Pendente), today)), vec!["open"]);
}

#[test]
fn interval_prefers_competence_over_date() {
    let march = resolve(PeriodMode::Mes, &DateRange::default(), d("2026-03-15"));
    let txns = vec![
        // Paid in April for March.
        expense("comp", "1").competence("2026-03-01").date("2026-04-05").build(),
        // Paid in March for February.
        expense("other", "1").competence("2026-02-01").date("2026-03-05").build(),
        // No competence, falls back to the date.
        expense("dated", "1").date("2026-03-31").build(),
        // Neither date.
        expense("none", "1").build(),
    ];
    let params = FilterParams {
        interval: Some(march),
        ..Default::default()
    };
    let out = filter_transactions(&txns, &params, d("2026-10-18"));
    assert_eq!(ids(&out), vec!["comp", "dated"]);
}

#[test]
fn interval_bounds_are_inclusive_dates() {
    let interval = DateInterval::from_days(d("2026-03-01"), d("2026-03-31"));
    let txns = vec![
        expense("first", "1").date("2026-03-01").build(),
        expense("last", "1").date("2026-03-31").build(),
        expense("after", "1").date("2026-04-01").build(),
    ];
    let params = FilterParams {
        interval: Some(interval),
        ..Default::default()
    };
    let out = filter_transactions(&txns, &params, d("2026-10-18"));
    assert_eq!(ids(&out), vec!["first", "last"]);
}

#[test]
fn filters_compose_conjunctively() {
    let today = d("2026-10-18");
    let txns = vec![
        expense("1", "1").description("Mercado").status("Realizado").date("2026-10-02").build(),
        expense("2", "1").description("Mercado").status("Pendente").date("2026-10-02").build(),
        expense("3", "1").description("Farmácia").status("Realizado").date("2026-10-02").build(),
        expense("4", "1").description("Mercado").status("Realizado").date("2026-09-02").build(),
    ];
    let params = FilterParams {
        search: "mercado".into(),
        status: StatusFilter::Only(DisplayStatus::Realizado),
        interval: Some(resolve(PeriodMode::Mes, &DateRange::default(), today)),
    };
    assert_eq!(ids(&filter_transactions(&txns, &params, today)), vec!["1"]);
}

#[test]
fn status_filter_parses_all_and_labels() {
    assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
    assert_eq!("todos".parse::<StatusFilter>().unwrap(), StatusFilter::All);
    assert_eq!(
        "atrasado".parse::<StatusFilter>().unwrap(),
        StatusFilter::Only(DisplayStatus::Atrasado)
    );
    assert!("whatever".parse::<StatusFilter>().is_err());
}
