// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use clap::ArgMatches;

use crate::commands::args;
use crate::commands::reports::{history_table, slices_table, totals_table};
use crate::config::Settings;
use crate::engine::Dashboard;
use crate::utils::{fmt_money, format_br_date, maybe_print_json, money_table};

pub fn build(settings: &Settings, sub: &ArgMatches) -> Result<Dashboard> {
    let txns = args::load(settings, sub)?;
    let query = args::query(settings, sub)?;
    let today = args::today(sub)?;
    Ok(Dashboard::build(&txns, &query, today))
}

pub fn handle(settings: &Settings, sub: &ArgMatches) -> Result<()> {
    let dash = build(settings, sub)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &dash)? {
        return Ok(());
    }

    println!(
        "{} ({} a {}) · {} lançamentos",
        dash.label,
        format_br_date(dash.interval.start_date()),
        format_br_date(dash.interval.end_date()),
        dash.transaction_count
    );
    println!("{}", totals_table(&dash.totals));

    let status_rows = dash
        .status
        .iter()
        .map(|b| vec![b.status.to_string(), b.count.to_string(), fmt_money(&b.amount)])
        .collect();
    println!("{}", money_table(&["Status", "Qtd", "Valor"], status_rows, 2));

    let sections = [
        ("Despesas por categoria", &dash.expense_by_category),
        ("Despesas por subcategoria", &dash.expense_by_subcategory),
        ("Despesas por classificação", &dash.expense_by_classification),
        ("Despesas por carteira", &dash.expense_by_wallet),
        ("Principais beneficiários", &dash.top_payees),
        ("Receitas por categoria", &dash.revenue_by_category),
        ("Principais pagadores", &dash.top_payers),
    ];
    for (title, slices) in sections {
        if !slices.is_empty() {
            println!("{}", slices_table(title, slices));
        }
    }
    println!("{}", history_table(&dash.history));
    Ok(())
}
