// Copyright 2024 the Piet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic sample icons for exercising the icon converter.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::{Path, PathBuf};
use svg::node::element::{Circle, Rectangle};
use svg::Document;

/// The sizes the converter ships icons for.
pub const ICON_SIZES: [u32; 8] = [72, 96, 128, 144, 152, 192, 384, 512];

#[derive(Copy, Clone, Debug)]
pub struct IconParams {
    /// Edge length of the `viewBox` and of the `width`/`height` attributes.
    pub size: u32,
    pub seed: u64,
}

impl IconParams {
    pub fn new(size: u32) -> Self {
        Self { size, seed: 0 }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

pub fn icon_document(params: IconParams) -> Document {
    let mut rng = StdRng::seed_from_u64(params.seed);
    let size = params.size as f64;

    let background = Rectangle::new()
        .set("x", 0)
        .set("y", 0)
        .set("width", size)
        .set("height", size)
        .set("rx", size / 8.0)
        .set("fill", gen_color(&mut rng));

    let circle = Circle::new()
        .set("cx", size / 2.0)
        .set("cy", size / 2.0)
        .set("r", size * 0.35)
        .set("fill", gen_color(&mut rng))
        .set("fill-opacity", 0.8);

    let inset = size * 0.375;
    let mark = Rectangle::new()
        .set("x", inset)
        .set("y", inset)
        .set("width", size - 2.0 * inset)
        .set("height", size - 2.0 * inset)
        .set("fill", gen_color(&mut rng));

    Document::new()
        .set("viewBox", (0, 0, params.size, params.size))
        .set("width", params.size)
        .set("height", params.size)
        .add(background)
        .add(circle)
        .add(mark)
}

pub fn file_name(size: u32) -> String {
    format!("icon-{}x{}.svg", size, size)
}

/// Saves the icon for `params` into `dir` and returns its path.
pub fn write_icon(dir: &Path, params: IconParams) -> std::io::Result<PathBuf> {
    let path = dir.join(file_name(params.size));
    save_icon(&path, params)?;

    Ok(path)
}

/// Saves the icon under an arbitrary name, e.g. to place a mis-sized source.
pub fn save_icon(path: &Path, params: IconParams) -> std::io::Result<()> {
    svg::save(path, &icon_document(params))
}

pub fn write_all(dir: &Path, sizes: &[u32]) -> std::io::Result<Vec<PathBuf>> {
    sizes
        .iter()
        .map(|size| write_icon(dir, IconParams::new(*size)))
        .collect()
}

fn gen_color(rng: &mut StdRng) -> String {
    let r: u8 = rng.gen_range(0..=255);
    let g: u8 = rng.gen_range(0..=255);
    let b: u8 = rng.gen_range(0..=255);

    format!("rgb({},{},{})", r, g, b)
}
