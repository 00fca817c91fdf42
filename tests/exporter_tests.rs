// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fs;

use caixa::config::Settings;
use caixa::store::load_snapshot;
use caixa::{cli, commands::exporter};
use serde_json::{json, Value};
use tempfile::tempdir;

fn seed(dir: &std::path::Path) -> String {
    let path = dir.join("snapshot.json");
    let rows = json!([
        {"id": "1", "description": "Padaria", "amount": "12.34", "type": "expense",
         "date": "2025-01-02", "status": "Realizado",
         "category": {"name": "Alimentação", "color": "orange"}},
        {"id": "2", "description": "Cinema", "amount": "40", "type": "expense",
         "date": "2025-01-20", "status": "Pendente"},
        {"id": "3", "description": "Dezembro", "amount": "99", "type": "expense",
         "date": "2024-12-31", "status": "Pendente"}
    ]);
    fs::write(&path, serde_json::to_string(&rows).unwrap()).unwrap();
    path.to_string_lossy().to_string()
}

#[test]
fn export_json_writes_filtered_rows() {
    let dir = tempdir().unwrap();
    let data = seed(dir.path());
    let out_path = dir.path().join("export.json");
    let out_str = out_path.to_string_lossy().to_string();

    let matches = cli::build_cli().get_matches_from([
        "caixa", "export", "--data", &data, "--ref", "2025-01-10", "--today", "2025-01-10",
        "--status", "Realizado", "--format", "json", "--out", &out_str,
    ]);
    if let Some(("export", sub)) = matches.subcommand() {
        exporter::handle(&Settings::default(), sub).unwrap();
    } else {
        panic!("no export subcommand");
    }

    let written: Value = serde_json::from_str(&fs::read_to_string(&out_path).unwrap()).unwrap();
    let rows = written.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["description"], "Padaria");
    assert_eq!(rows[0]["amount"], "12.34");
    assert_eq!(rows[0]["category"]["color"], "orange");
}

#[test]
fn export_csv_can_be_loaded_again() {
    let dir = tempdir().unwrap();
    let data = seed(dir.path());
    let out_path = dir.path().join("export.csv");
    let out_str = out_path.to_string_lossy().to_string();

    let matches = cli::build_cli().get_matches_from([
        "caixa", "export", "--data", &data, "--period", "ano", "--ref", "2025-06-01",
        "--format", "csv", "--out", &out_str,
    ]);
    let (_, sub) = matches.subcommand().unwrap();
    exporter::handle(&Settings::default(), sub).unwrap();

    let loaded = load_snapshot(&out_path).unwrap();
    let ids: Vec<_> = loaded.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);
    assert_eq!(loaded[0].category.as_ref().unwrap().name, "Alimentação");
}

#[test]
fn unknown_format_fails_before_writing() {
    let dir = tempdir().unwrap();
    let data = seed(dir.path());
    let out_path = dir.path().join("export.xml");
    let out_str = out_path.to_string_lossy().to_string();

    let matches = cli::build_cli().get_matches_from([
        "caixa", "export", "--data", &data, "--format", "xml", "--out", &out_str,
    ]);
    let (_, sub) = matches.subcommand().unwrap();
    let err = exporter::handle(&Settings::default(), sub).unwrap_err();
    assert!(err.to_string().contains("xml"));
    assert!(!out_path.exists());
}
