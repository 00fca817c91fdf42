// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;

use once_cell::sync::Lazy;

pub const DEFAULT_KEY: &str = "zinc";
pub const DEFAULT_HEX: &str = "#71717a";

// 500 shade of each palette key.
static PALETTE: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("slate", "#64748b"),
        ("gray", "#6b7280"),
        ("zinc", DEFAULT_HEX),
        ("neutral", "#737373"),
        ("stone", "#78716c"),
        ("red", "#ef4444"),
        ("orange", "#f97316"),
        ("amber", "#f59e0b"),
        ("yellow", "#eab308"),
        ("lime", "#84cc16"),
        ("green", "#22c55e"),
        ("emerald", "#10b981"),
        ("teal", "#14b8a6"),
        ("cyan", "#06b6d4"),
        ("sky", "#0ea5e9"),
        ("blue", "#3b82f6"),
        ("indigo", "#6366f1"),
        ("violet", "#8b5cf6"),
        ("purple", "#a855f7"),
        ("fuchsia", "#d946ef"),
        ("pink", "#ec4899"),
        ("rose", "#f43f5e"),
    ])
});

/// Resolves a palette key to its hex color. Missing or unknown keys fall
/// back to zinc.
pub fn hex_for(key: Option<&str>) -> &'static str {
    let key = key.map(str::trim).unwrap_or(DEFAULT_KEY).to_lowercase();
    PALETTE.get(key.as_str()).copied().unwrap_or(DEFAULT_HEX)
}
