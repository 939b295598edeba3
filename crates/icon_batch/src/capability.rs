// Copyright 2024 the Piet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::error::CapabilityError;
use crate::optimize::{decode_rgba, optimize_rgba, png_options};
use crate::rasterize::render_svg;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;
use usvg::fontdb;

/// Rendered in memory at startup to prove the toolchain works.
pub const PROBE_SVG: &[u8] = br##"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 16 16">
    <rect width="16" height="16" rx="3" fill="#2563eb"/>
    <circle cx="8" cy="8" r="4" fill="#ffffff"/>
</svg>"##;

const PROBE_SIZE: u32 = 24;

/// A verified rasterizer and PNG optimizer.
pub struct Capabilities {
    fontdb: Arc<fontdb::Database>,
    png: oxipng::Options,
}

impl Capabilities {
    pub fn load() -> Result<Self, CapabilityError> {
        Self::load_with_probe(PROBE_SVG)
    }

    /// Like [`Capabilities::load`], but checks against a caller supplied SVG.
    pub fn load_with_probe(probe: &[u8]) -> Result<Self, CapabilityError> {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        debug!(faces = db.len(), "loaded system fonts");

        let caps = Self {
            fontdb: Arc::new(db),
            png: png_options(),
        };
        caps.verify(probe)?;

        Ok(caps)
    }

    /// Renders, encodes, optimizes and decodes `probe` without touching disk.
    pub fn verify(&self, probe: &[u8]) -> Result<(), CapabilityError> {
        let pixmap = render_svg(probe, PROBE_SIZE, &self.svg_options(None, crate::DPI))
            .map_err(CapabilityError::Rasterizer)?;
        let rendered = pixmap
            .encode_png()
            .map_err(|e| CapabilityError::Rasterizer(e.into()))?;

        let image = decode_rgba(&rendered).map_err(CapabilityError::ImageProcessor)?;
        let optimized = optimize_rgba(&image, &self.png).map_err(CapabilityError::ImageProcessor)?;
        let roundtrip = decode_rgba(&optimized).map_err(CapabilityError::ImageProcessor)?;

        if roundtrip.dimensions() != (PROBE_SIZE, PROBE_SIZE) {
            return Err(CapabilityError::Mismatch {
                expected: PROBE_SIZE,
                width: roundtrip.width(),
                height: roundtrip.height(),
            });
        }

        Ok(())
    }

    pub fn svg_options(&self, resources_dir: Option<&Path>, dpi: f32) -> usvg::Options<'static> {
        usvg::Options {
            resources_dir: resources_dir.map(Path::to_path_buf),
            dpi,
            fontdb: self.fontdb.clone(),
            ..usvg::Options::default()
        }
    }

    pub fn png_options(&self) -> &oxipng::Options {
        &self.png
    }
}
