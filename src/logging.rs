// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

pub const LOG_ENV: &str = "CAIXA_LOG";

static TRACING_INIT: Once = Once::new();

/// Installs the global subscriber once. Logs go to stderr so stdout only
/// carries tables and JSON.
pub fn init() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new("caixa=warn"));
        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}
