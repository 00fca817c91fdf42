// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use clap::ArgMatches;

use crate::commands::args;
use crate::config::Settings;
use crate::engine::aggregate::{group_by, history, Dimension, HistoryPoint, Slice};
use crate::engine::{filter_transactions, totals, FilterParams, Totals};
use crate::models::TransactionType;
use crate::utils::{fmt_money, maybe_print_json, money_table};

pub fn handle(settings: &Settings, m: &ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("totals", sub)) => print_totals(settings, sub)?,
        Some(("history", sub)) => print_history(settings, sub)?,
        Some(("breakdown", sub)) => print_breakdown(settings, sub)?,
        _ => {}
    }
    Ok(())
}

pub fn compute_totals(settings: &Settings, sub: &ArgMatches) -> Result<Totals> {
    let txns = args::load(settings, sub)?;
    let query = args::query(settings, sub)?;
    let today = args::today(sub)?;
    let filtered = filter_transactions(&txns, &query.filter_params(today), today);
    Ok(totals(filtered))
}

pub fn compute_history(settings: &Settings, sub: &ArgMatches) -> Result<Vec<HistoryPoint>> {
    let txns = args::load(settings, sub)?;
    let query = args::query(settings, sub)?;
    let today = args::today(sub)?;
    let params = FilterParams {
        interval: None,
        ..query.filter_params(today)
    };
    let filtered = filter_transactions(&txns, &params, today);
    Ok(history(filtered, query.mode, &query.interval(today)))
}

pub fn compute_breakdown(settings: &Settings, sub: &ArgMatches) -> Result<Vec<Slice>> {
    let dimension: Dimension = sub
        .get_one::<String>("by")
        .map(String::as_str)
        .unwrap_or("category")
        .parse()?;
    let kind: TransactionType = sub
        .get_one::<String>("type")
        .map(String::as_str)
        .unwrap_or("expense")
        .parse()?;
    let txns = args::load(settings, sub)?;
    let query = args::query(settings, sub)?;
    let today = args::today(sub)?;
    let filtered = filter_transactions(&txns, &query.filter_params(today), today);
    Ok(group_by(
        filtered.into_iter().filter(|t| t.r#type == kind),
        dimension,
    ))
}

fn print_totals(settings: &Settings, sub: &ArgMatches) -> Result<()> {
    let t = compute_totals(settings, sub)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &t)? {
        println!("{}", totals_table(&t));
    }
    Ok(())
}

fn print_history(settings: &Settings, sub: &ArgMatches) -> Result<()> {
    let points = compute_history(settings, sub)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &points)? {
        println!("{}", history_table(&points));
    }
    Ok(())
}

fn print_breakdown(settings: &Settings, sub: &ArgMatches) -> Result<()> {
    let slices = compute_breakdown(settings, sub)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &slices)? {
        let header = sub.get_one::<String>("by").map(String::as_str).unwrap_or("category");
        println!("{}", slices_table(header, &slices));
    }
    Ok(())
}

pub fn totals_table(t: &Totals) -> comfy_table::Table {
    money_table(
        &["Receitas", "Despesas", "Investimentos", "Saldo"],
        vec![vec![
            fmt_money(&t.income),
            fmt_money(&t.expense),
            fmt_money(&t.investment),
            fmt_money(&t.balance),
        ]],
        4,
    )
}

pub fn history_table(points: &[HistoryPoint]) -> comfy_table::Table {
    let rows = points
        .iter()
        .map(|p| {
            vec![
                p.bucket.clone(),
                fmt_money(&p.income),
                fmt_money(&p.expense),
                fmt_money(&(p.income - p.expense)),
            ]
        })
        .collect();
    money_table(&["Período", "Receitas", "Despesas", "Resultado"], rows, 3)
}

pub fn slices_table(header: &str, slices: &[Slice]) -> comfy_table::Table {
    let rows = slices
        .iter()
        .map(|s| vec![s.label.clone(), s.color.to_string(), fmt_money(&s.amount)])
        .collect();
    money_table(&[header, "Cor", "Valor"], rows, 1)
}
