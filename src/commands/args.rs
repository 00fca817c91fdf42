// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Turns the shared filter flags into engine inputs.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::ArgMatches;
use tracing::warn;

use crate::config::Settings;
use crate::engine::{DashboardQuery, DateRange, PeriodMode, StatusFilter};
use crate::models::Transaction;
use crate::store::load_snapshot;
use crate::utils::parse_date;

fn opt_date(sub: &ArgMatches, id: &str) -> Result<Option<NaiveDate>> {
    sub.get_one::<String>(id)
        .map(|s| parse_date(s).with_context(|| format!("--{}", id)))
        .transpose()
}

pub fn today(sub: &ArgMatches) -> Result<NaiveDate> {
    Ok(opt_date(sub, "today")?.unwrap_or_else(|| Local::now().date_naive()))
}

pub fn mode(settings: &Settings, sub: &ArgMatches) -> PeriodMode {
    match sub.get_one::<String>("period") {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            warn!(period = %raw, "unknown period, using mes");
            PeriodMode::Mes
        }),
        None => settings.period(),
    }
}

pub fn explicit_range(sub: &ArgMatches) -> Result<DateRange> {
    Ok(DateRange::new(opt_date(sub, "from")?, opt_date(sub, "to")?))
}

pub fn reference(sub: &ArgMatches) -> Result<Option<NaiveDate>> {
    opt_date(sub, "ref")
}

pub fn query(settings: &Settings, sub: &ArgMatches) -> Result<DashboardQuery> {
    let status = match sub.get_one::<String>("status") {
        Some(raw) => raw.parse::<StatusFilter>()?,
        None => settings.status()?,
    };
    Ok(DashboardQuery {
        mode: mode(settings, sub),
        explicit: explicit_range(sub)?,
        reference: reference(sub)?,
        search: sub.get_one::<String>("search").cloned().unwrap_or_default(),
        status,
    })
}

pub fn load(settings: &Settings, sub: &ArgMatches) -> Result<Vec<Transaction>> {
    let path = settings.data_path(sub.get_one::<String>("data").map(String::as_str))?;
    load_snapshot(&path).with_context(|| format!("Load snapshot {}", path.display()))
}
