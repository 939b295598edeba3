// Copyright 2024 the Piet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use icon_batch::{exit_status, launch, startup_failure_report, Config, PROBE_SVG};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stdout)
        .with_target(false)
        .without_time()
        .init();

    let result = launch(&Config::default(), PROBE_SVG);
    if let Err(e) = &result {
        for line in startup_failure_report(e) {
            error!("{}", line);
        }
    }

    ExitCode::from(exit_status(&result))
}
