// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use clap::ArgMatches;

use crate::commands::args;
use crate::config::Settings;
use crate::engine::filter_transactions;
use crate::engine::listing::{transaction_rows, TransactionRow};
use crate::utils::{fmt_money, format_br_date, maybe_print_json, money_table};

pub fn handle(settings: &Settings, m: &ArgMatches) -> Result<()> {
    if let Some(("list", sub)) = m.subcommand() {
        list(settings, sub)?;
    }
    Ok(())
}

fn list(settings: &Settings, sub: &ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(settings, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.date.map(format_br_date).unwrap_or_default(),
                    r.competence
                        .map(|c| c.format("%m/%Y").to_string())
                        .unwrap_or_default(),
                    r.description.clone(),
                    r.r#type.to_string(),
                    r.category.clone(),
                    r.counterparty.clone(),
                    r.wallet.clone(),
                    r.status.to_string(),
                    fmt_money(&r.amount),
                ]
            })
            .collect();
        println!(
            "{}",
            money_table(
                &[
                    "Data",
                    "Competência",
                    "Descrição",
                    "Tipo",
                    "Categoria",
                    "Contato",
                    "Carteira",
                    "Status",
                    "Valor",
                ],
                rows,
                1,
            )
        );
    }
    Ok(())
}

pub fn query_rows(settings: &Settings, sub: &ArgMatches) -> Result<Vec<TransactionRow>> {
    let txns = args::load(settings, sub)?;
    let query = args::query(settings, sub)?;
    let today = args::today(sub)?;
    let filtered = filter_transactions(&txns, &query.filter_params(today), today);
    let mut rows = transaction_rows(filtered, today);
    if let Some(limit) = sub.get_one::<usize>("limit") {
        rows.truncate(*limit);
    }
    Ok(rows)
}
