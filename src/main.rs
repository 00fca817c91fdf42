// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use caixa::{cli, commands, config, logging};

fn main() -> Result<()> {
    logging::init();
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let config_path = config::config_path()?;
    let settings = config::load_from(&config_path)?;

    match matches.subcommand() {
        Some(("dashboard", sub)) => commands::dashboard::handle(&settings, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&settings, sub)?,
        Some(("report", sub)) => commands::reports::handle(&settings, sub)?,
        Some(("period", sub)) => commands::period::handle(&settings, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&settings, sub)?,
        Some(("config", sub)) => commands::settings::handle(&config_path, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
