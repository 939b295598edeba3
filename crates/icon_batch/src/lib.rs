// Copyright 2024 the Piet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Converts the `icon-<N>x<N>.svg` files of a directory into optimized RGBA
//! PNGs, one fixed size at a time.

#![forbid(unsafe_code)]

pub mod capability;
pub mod config;
pub mod error;
pub mod job;
pub mod optimize;
pub mod rasterize;
pub mod summary;

pub use capability::{Capabilities, PROBE_SVG};
pub use config::{Config, DPI, SIZES};
pub use error::{chain, CapabilityError, ConvertError};
pub use job::Job;
pub use summary::{Outcome, RunSummary};

use tracing::{error, info, warn};

/// Verifies the toolchain against `probe`, then converts every job in `config`.
///
/// Nothing is written when verification fails.
pub fn launch(config: &Config, probe: &[u8]) -> Result<RunSummary, CapabilityError> {
    let caps = Capabilities::load_with_probe(probe)?;
    Ok(run(config, &caps))
}

/// Process exit status for a finished [`launch`].
///
/// Failed icons are reported in the log, so only a failed self-check is
/// non-zero.
pub fn exit_status(result: &Result<RunSummary, CapabilityError>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

/// The error, each of its causes and the install hint, one line each.
pub fn startup_failure_report(err: &CapabilityError) -> Vec<String> {
    let mut messages = chain(err).into_iter();
    let mut lines: Vec<String> = messages.next().into_iter().collect();
    lines.extend(messages.map(|cause| format!("  caused by: {}", cause)));
    lines.extend(err.hint().lines().map(str::to_owned));

    lines
}

pub fn run(config: &Config, caps: &Capabilities) -> RunSummary {
    info!("Converting SVG icons to high quality PNG...");

    let mut summary = RunSummary::new(config.icons_dir.clone());
    for job in config.jobs() {
        let outcome = convert_job(&job, config.dpi, caps);
        match &outcome {
            Outcome::Converted { .. } => info!("{}", outcome),
            Outcome::Skipped { .. } => warn!("{}", outcome),
            Outcome::Failed { .. } => error!("{}", outcome),
        }
        summary.push(outcome);
    }

    info!(
        "Conversion complete: {} converted, {} skipped, {} failed",
        summary.converted(),
        summary.skipped(),
        summary.failed()
    );
    info!("The icons are in: {}", summary.icons_dir().display());

    summary
}

/// Converts a single job. A missing source is a skip, never an error.
pub fn convert_job(job: &Job, dpi: f32, caps: &Capabilities) -> Outcome {
    if !job.source.exists() {
        return Outcome::Skipped {
            source: job.source.clone(),
        };
    }

    match convert(job, dpi, caps) {
        Ok(()) => Outcome::Converted {
            destination: job.destination.clone(),
            size: job.size,
        },
        Err(error) => Outcome::Failed {
            source: job.source.clone(),
            error,
        },
    }
}

fn convert(job: &Job, dpi: f32, caps: &Capabilities) -> Result<(), ConvertError> {
    let opt = caps.svg_options(job.source.parent(), dpi);
    rasterize::rasterize(job, &opt)?;
    optimize::optimize_file(&job.destination, caps.png_options())
}
