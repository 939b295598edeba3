// Copyright 2024 the Piet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::{Path, PathBuf};

/// One source SVG and the PNG it is rendered into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Job {
    pub size: u32,
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl Job {
    pub fn new(icons_dir: &Path, size: u32) -> Self {
        let stem = format!("icon-{}x{}", size, size);

        Self {
            size,
            source: icons_dir.join(&stem).with_extension("svg"),
            destination: icons_dir.join(stem).with_extension("png"),
        }
    }
}
