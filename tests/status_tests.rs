// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use caixa::engine::status::{derive_status, normalize_persisted, DisplayStatus};
use common::{d, expense};

#[test]
fn pending_in_future_is_scheduled() {
    let today = d("2026-10-18");
    assert_eq!(
        derive_status("Pendente", Some(d("2026-10-19")), today),
        DisplayStatus::Agendado
    );
}

#[test]
fn pending_in_past_is_overdue() {
    let today = d("2026-10-18");
    assert_eq!(
        derive_status("Pendente", Some(d("2026-10-17")), today),
        DisplayStatus::Atrasado
    );
}

#[test]
fn pending_today_stays_pending() {
    let today = d("2026-10-18");
    assert_eq!(
        derive_status("Pendente", Some(today), today),
        DisplayStatus::Pendente
    );
}

#[test]
fn pending_without_date_stays_pending() {
    assert_eq!(
        derive_status("Pendente", None, d("2026-10-18")),
        DisplayStatus::Pendente
    );
}

#[test]
fn realized_ignores_date() {
    let today = d("2026-10-18");
    for date in [None, Some(d("2020-01-01")), Some(today), Some(d("2030-01-01"))] {
        assert_eq!(derive_status("Realizado", date, today), DisplayStatus::Realizado);
    }
}

#[test]
fn legacy_values_are_normalized() {
    assert_eq!(normalize_persisted("paid"), DisplayStatus::Realizado);
    assert_eq!(normalize_persisted(" PAID "), DisplayStatus::Realizado);
    assert_eq!(normalize_persisted("pending"), DisplayStatus::Pendente);
    assert_eq!(
        derive_status("paid", Some(d("2030-01-01")), d("2026-10-18")),
        DisplayStatus::Realizado
    );
    assert_eq!(
        derive_status("pending", Some(d("2026-01-01")), d("2026-10-18")),
        DisplayStatus::Atrasado
    );
}

#[test]
fn unknown_and_derived_values_are_pending_base() {
    assert_eq!(normalize_persisted("cancelado"), DisplayStatus::Pendente);
    assert_eq!(normalize_persisted(""), DisplayStatus::Pendente);
    assert_eq!(normalize_persisted("Atrasado"), DisplayStatus::Pendente);
    // A stale "Atrasado" with a future date is recomputed as scheduled.
    assert_eq!(
        derive_status("Atrasado", Some(d("2026-12-01")), d("2026-10-18")),
        DisplayStatus::Agendado
    );
}

#[test]
fn transaction_uses_the_same_derivation() {
    let t = expense("1", "10").status("pending").date("2026-10-10").build();
    assert_eq!(t.display_status(d("2026-10-18")), DisplayStatus::Atrasado);
    assert_eq!(t.display_status(d("2026-10-10")), DisplayStatus::Pendente);
    assert_eq!(t.display_status(d("2026-10-01")), DisplayStatus::Agendado);
}

#[test]
fn status_labels_round_trip_through_display() {
    for s in DisplayStatus::ALL {
        assert_eq!(s.to_string().parse::<DisplayStatus>().unwrap(), s);
    }
}
