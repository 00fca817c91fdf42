// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use clap::ArgMatches;
use serde::Serialize;

use crate::commands::args;
use crate::config::Settings;
use crate::engine::period::{reference_date, resolve, shift, DateInterval, PeriodMode};
use crate::error::Error;
use crate::utils::{maybe_print_json, pretty_table};

#[derive(Debug, Serialize)]
pub struct ResolvedPeriod {
    pub mode: PeriodMode,
    pub label: String,
    pub interval: DateInterval,
}

pub fn resolve_from_args(settings: &Settings, sub: &ArgMatches) -> Result<ResolvedPeriod> {
    let mode = args::mode(settings, sub);
    let explicit = args::explicit_range(sub)?;
    let today = args::today(sub)?;
    let mut reference = args::reference(sub)?.unwrap_or_else(|| reference_date(&explicit, today));
    if let Some(steps) = sub.get_one::<i32>("shift") {
        reference = shift(mode, reference, *steps).ok_or_else(|| {
            Error::InvalidInput(format!(
                "--shift {} moves {} out of the supported date range",
                steps, reference
            ))
        })?;
    }
    let interval = resolve(mode, &explicit, reference);
    Ok(ResolvedPeriod {
        mode,
        label: interval.label(mode),
        interval,
    })
}

pub fn handle(settings: &Settings, sub: &ArgMatches) -> Result<()> {
    let resolved = resolve_from_args(settings, sub)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &resolved)? {
        let row = vec![
            resolved.mode.to_string(),
            resolved.label.clone(),
            resolved.interval.start.to_string(),
            resolved.interval.end.to_string(),
        ];
        println!("{}", pretty_table(&["Modo", "Período", "Início", "Fim"], vec![row]));
    }
    Ok(())
}
