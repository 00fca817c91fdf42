// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use tracing::info;

use crate::commands::args;
use crate::config::Settings;
use crate::engine::filter_transactions;
use crate::store::{write_csv, write_json, SnapshotFormat};

pub fn handle(settings: &Settings, sub: &ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").map(String::as_str).unwrap_or_default();
    let out = sub.get_one::<String>("out").map(|s| s.trim()).unwrap_or_default();
    // Validate before touching the filesystem.
    let format = SnapshotFormat::from_name(fmt)?;

    let txns = args::load(settings, sub)?;
    let query = args::query(settings, sub)?;
    let today = args::today(sub)?;
    let filtered = filter_transactions(&txns, &query.filter_params(today), today);

    let path = Path::new(out);
    let written = match format {
        SnapshotFormat::Csv => write_csv(path, filtered.iter().copied()),
        SnapshotFormat::Json => write_json(path, filtered.iter().copied()),
    };
    written.with_context(|| format!("Export to {}", out))?;
    info!(count = filtered.len(), path = out, "exported transactions");
    println!("Exported {} transactions to {}", filtered.len(), out);
    Ok(())
}
