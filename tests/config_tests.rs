// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

use caixa::cli;
use caixa::commands::{period, settings};
use caixa::config::{load_from, save_to, Settings};
use caixa::engine::{PeriodMode, StatusFilter};
use chrono::NaiveDate;
use tempfile::tempdir;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn missing_settings_file_gives_defaults() {
    let dir = tempdir().unwrap();
    let s = load_from(&dir.path().join("nope.json")).unwrap();
    assert_eq!(s, Settings::default());
    assert_eq!(s.period(), PeriodMode::Mes);
    assert_eq!(s.status().unwrap(), StatusFilter::All);
}

#[test]
fn set_validates_and_normalizes() {
    let mut s = Settings::default();
    s.set("default_period", " Year ").unwrap();
    assert_eq!(s.default_period, "ano");
    s.set("default_status", "overdue").unwrap();
    assert_eq!(s.default_status, "Atrasado");
    assert!(s.set("default_period", "quinzena").is_err());
    assert!(s.set("default_status", "cancelado").is_err());
    assert!(s.set("colour", "blue").is_err());
    s.set("data_file", "").unwrap();
    assert!(s.data_file.is_none());
}

#[test]
fn settings_round_trip_through_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");
    let mut s = Settings::default();
    s.set("data_file", "/tmp/caixa.json").unwrap();
    s.set("default_period", "semana").unwrap();
    save_to(&path, &s).unwrap();
    assert_eq!(load_from(&path).unwrap(), s);
}

#[test]
fn flag_wins_over_settings_for_data_path() {
    let s = Settings {
        data_file: Some(PathBuf::from("from-settings.json")),
        ..Default::default()
    };
    assert_eq!(
        s.data_path(Some(" flag.csv ")).unwrap(),
        PathBuf::from("flag.csv")
    );
}

#[test]
fn config_set_command_persists() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let matches = cli::build_cli().get_matches_from([
        "caixa", "config", "set", "--key", "default_status", "--value", "pendente",
    ]);
    let (_, m) = matches.subcommand().unwrap();
    settings::handle(&path, m).unwrap();
    assert_eq!(load_from(&path).unwrap().default_status, "Pendente");
}

#[test]
fn period_command_resolves_and_shifts() {
    let matches = cli::build_cli().get_matches_from([
        "caixa", "period", "--period", "mes", "--ref", "2026-03-31", "--shift", "-1",
    ]);
    let (_, sub) = matches.subcommand().unwrap();
    let resolved = period::resolve_from_args(&Settings::default(), sub).unwrap();
    assert_eq!(resolved.mode, PeriodMode::Mes);
    assert_eq!(resolved.label, "fevereiro de 2026");
    assert_eq!(resolved.interval.start_date(), d("2026-02-01"));
    assert_eq!(resolved.interval.end_date(), d("2026-02-28"));
}

#[test]
fn period_command_rejects_huge_shift() {
    let matches = cli::build_cli().get_matches_from([
        "caixa", "period", "--period", "dia", "--ref", "2026-01-01", "--shift", "2147483647",
    ]);
    let (_, sub) = matches.subcommand().unwrap();
    let err = period::resolve_from_args(&Settings::default(), sub).unwrap_err();
    assert!(err.to_string().contains("--shift 2147483647"));
}

#[test]
fn period_command_uses_settings_default() {
    let settings = Settings {
        default_period: "ano".into(),
        ..Default::default()
    };
    let matches =
        cli::build_cli().get_matches_from(["caixa", "period", "--today", "2025-07-04"]);
    let (_, sub) = matches.subcommand().unwrap();
    let resolved = period::resolve_from_args(&settings, sub).unwrap();
    assert_eq!(resolved.label, "2025");
    assert_eq!(resolved.interval.start_date(), d("2025-01-01"));
    assert_eq!(resolved.interval.end_date(), d("2025-12-31"));
}
