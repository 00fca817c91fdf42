// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Period selector resolution.
//!
//! A period is a mode (`dia`, `semana`, `mes`, `ano`, `custom`), an optional
//! explicit `from`/`to` pair and a reference date. [`resolve`] turns that
//! into a concrete inclusive [`DateInterval`]. Weeks start on Sunday.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::utils::format_br_date;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodMode {
    Dia,
    Semana,
    #[default]
    Mes,
    Ano,
    Custom,
}

impl PeriodMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dia => "dia",
            Self::Semana => "semana",
            Self::Mes => "mes",
            Self::Ano => "ano",
            Self::Custom => "custom",
        }
    }

    /// Unrecognized modes fall back to the month view.
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or(Self::Mes)
    }
}

impl fmt::Display for PeriodMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PeriodMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dia" | "day" => Ok(Self::Dia),
            "semana" | "week" => Ok(Self::Semana),
            "mes" | "mês" | "month" => Ok(Self::Mes),
            "ano" | "year" => Ok(Self::Ano),
            "custom" | "personalizado" => Ok(Self::Custom),
            other => Err(Error::InvalidInput(format!(
                "unknown period '{}' (use dia|semana|mes|ano|custom)",
                other
            ))),
        }
    }
}

/// Explicit range override, typically carried in URL state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    pub fn between(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    fn complete(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.from.zip(self.to)
    }
}

/// Inclusive interval from the first to the last second of its end day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateInterval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateInterval {
    pub fn from_days(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: start_of_day(start),
            end: end_of_day(end),
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end.date()
    }

    /// Date-only membership; time of day never excludes a date.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date() && date <= self.end_date()
    }

    /// Every calendar day of the interval, ascending.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start_date()
            .iter_days()
            .take_while(move |d| *d <= self.end_date())
    }

    pub fn label(&self, mode: PeriodMode) -> String {
        let start = self.start_date();
        match mode {
            PeriodMode::Dia => format_br_date(start),
            PeriodMode::Mes => format!("{} de {}", month_name(start.month()), start.year()),
            PeriodMode::Ano => start.year().to_string(),
            PeriodMode::Semana | PeriodMode::Custom => format!(
                "{} – {}",
                format_br_date(start),
                format_br_date(self.end_date())
            ),
        }
    }
}

/// The explicit `from` anchors the reference date so that switching modes
/// after a custom filter stays in the filtered period.
pub fn reference_date(explicit: &DateRange, today: NaiveDate) -> NaiveDate {
    explicit.from.unwrap_or(today)
}

pub fn resolve(mode: PeriodMode, explicit: &DateRange, reference: NaiveDate) -> DateInterval {
    if let Some((from, to)) = explicit.complete() {
        return DateInterval::from_days(from, to);
    }
    let (start, end) = match mode {
        PeriodMode::Dia => (reference, reference),
        PeriodMode::Semana => {
            let start = reference - Duration::days(reference.weekday().num_days_from_sunday() as i64);
            (start, start + Duration::days(6))
        }
        PeriodMode::Ano => (
            NaiveDate::from_ymd_opt(reference.year(), 1, 1).unwrap_or(reference),
            NaiveDate::from_ymd_opt(reference.year(), 12, 31).unwrap_or(reference),
        ),
        PeriodMode::Mes | PeriodMode::Custom => (first_of_month(reference), last_of_month(reference)),
    };
    DateInterval::from_days(start, end)
}

/// Moves `reference` by whole periods. Month and year steps clamp the day
/// to the end of the target month. `None` when the result falls outside
/// the representable calendar.
pub fn shift(mode: PeriodMode, reference: NaiveDate, steps: i32) -> Option<NaiveDate> {
    let steps = i64::from(steps);
    match mode {
        PeriodMode::Dia => shift_days(reference, steps),
        PeriodMode::Semana => shift_days(reference, steps * 7),
        PeriodMode::Ano => shift_months(reference, steps * 12),
        PeriodMode::Mes | PeriodMode::Custom => shift_months(reference, steps),
    }
}

fn shift_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    let delta = Days::new(days.unsigned_abs());
    if days >= 0 {
        date.checked_add_days(delta)
    } else {
        date.checked_sub_days(delta)
    }
}

fn shift_months(date: NaiveDate, months: i64) -> Option<NaiveDate> {
    let delta = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        date.checked_add_months(delta)
    } else {
        date.checked_sub_months(delta)
    }
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|d| d.pred_opt())
        .unwrap_or(date)
}

fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(23, 59, 59)
        .unwrap_or_else(|| start_of_day(date))
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "janeiro",
        2 => "fevereiro",
        3 => "março",
        4 => "abril",
        5 => "maio",
        6 => "junho",
        7 => "julho",
        8 => "agosto",
        9 => "setembro",
        10 => "outubro",
        11 => "novembro",
        _ => "dezembro",
    }
}
