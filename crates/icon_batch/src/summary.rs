// Copyright 2024 the Piet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::error::{chain, ConvertError};
use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum Outcome {
    Converted { destination: PathBuf, size: u32 },
    Skipped { source: PathBuf },
    Failed { source: PathBuf, error: ConvertError },
}

impl Outcome {
    pub fn is_converted(&self) -> bool {
        matches!(self, Outcome::Converted { .. })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Outcome::Skipped { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Converted { destination, size } => {
                write!(f, "{} ({}x{}px)", file_name(destination), size, size)
            }
            Outcome::Skipped { source } => {
                write!(f, "{} not found, skipping...", file_name(source))
            }
            Outcome::Failed { source, error } => {
                write!(
                    f,
                    "Error with {}: {}",
                    file_name(source),
                    chain(error).join(": ")
                )
            }
        }
    }
}

fn file_name(path: &Path) -> Cow<'_, str> {
    match path.file_name() {
        Some(name) => name.to_string_lossy(),
        None => path.to_string_lossy(),
    }
}

/// Everything one pass over the icons directory produced, in size order.
#[derive(Debug)]
pub struct RunSummary {
    icons_dir: PathBuf,
    outcomes: Vec<Outcome>,
}

impl RunSummary {
    pub fn new(icons_dir: PathBuf) -> Self {
        Self {
            icons_dir,
            outcomes: vec![],
        }
    }

    pub fn push(&mut self, outcome: Outcome) {
        self.outcomes.push(outcome);
    }

    pub fn icons_dir(&self) -> &Path {
        &self.icons_dir
    }

    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    pub fn converted(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_converted()).count()
    }

    pub fn skipped(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_skipped()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_failed()).count()
    }
}
