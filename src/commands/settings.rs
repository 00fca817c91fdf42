// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;

use anyhow::Result;
use clap::ArgMatches;

use crate::config::{load_from, save_to};
use crate::utils::pretty_table;

pub fn handle(path: &Path, m: &ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", _)) => {
            let s = load_from(path)?;
            let rows = vec![
                vec![
                    "data_file".to_string(),
                    s.data_file
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_default(),
                ],
                vec!["default_period".to_string(), s.default_period.clone()],
                vec!["default_status".to_string(), s.default_status.clone()],
            ];
            println!("{}", pretty_table(&["Key", "Value"], rows));
        }
        Some(("path", _)) => println!("{}", path.display()),
        Some(("set", sub)) => {
            let key = sub.get_one::<String>("key").map(String::as_str).unwrap_or_default();
            let value = sub.get_one::<String>("value").map(String::as_str).unwrap_or_default();
            let mut s = load_from(path)?;
            s.set(key, value)?;
            save_to(path, &s)?;
            println!("Set {} = {}", key.trim(), value.trim());
        }
        _ => {}
    }
    Ok(())
}
