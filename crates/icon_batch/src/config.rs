// Copyright 2024 the Piet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::job::Job;
use std::path::PathBuf;

/// Square edge lengths, in pixels, in the order they are converted.
pub const SIZES: [u32; 8] = [72, 96, 128, 144, 152, 192, 384, 512];

/// Resolution passed to the SVG parser for absolute units.
pub const DPI: f32 = 300.0;

/// `public/icons` at the workspace root.
pub fn default_icons_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("public")
        .join("icons")
}

#[derive(Clone, Debug)]
pub struct Config {
    pub icons_dir: PathBuf,
    pub sizes: Vec<u32>,
    pub dpi: f32,
}

impl Config {
    pub fn with_icons_dir(icons_dir: impl Into<PathBuf>) -> Self {
        Self {
            icons_dir: icons_dir.into(),
            ..Self::default()
        }
    }

    pub fn jobs(&self) -> impl Iterator<Item = Job> + '_ {
        self.sizes
            .iter()
            .map(|size| Job::new(&self.icons_dir, *size))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            icons_dir: default_icons_dir(),
            sizes: SIZES.to_vec(),
            dpi: DPI,
        }
    }
}
