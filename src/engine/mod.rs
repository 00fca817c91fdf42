// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure period and aggregation engine. Nothing in here performs I/O.

pub mod aggregate;
pub mod dashboard;
pub mod filter;
pub mod listing;
pub mod palette;
pub mod period;
pub mod status;
pub mod totals;

pub use aggregate::{group_by, group_by_with, history, Dimension, HistoryPoint, Slice};
pub use dashboard::{Dashboard, DashboardQuery};
pub use filter::{filter_transactions, FilterParams, StatusFilter};
pub use period::{resolve, DateInterval, DateRange, PeriodMode};
pub use status::{derive_status, DisplayStatus};
pub use totals::{totals, Totals};
