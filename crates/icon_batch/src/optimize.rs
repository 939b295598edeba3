// Copyright 2024 the Piet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::error::ConvertError;
use image::RgbaImage;
use std::path::Path;
use tracing::debug;

/// Lossless optimization that keeps 8-bit RGBA output.
pub fn png_options() -> oxipng::Options {
    let mut options = oxipng::Options::from_preset(2);
    options.bit_depth_reduction = false;
    options.color_type_reduction = false;
    options.palette_reduction = false;
    options.grayscale_reduction = false;

    options
}

pub fn decode_rgba(data: &[u8]) -> Result<RgbaImage, ConvertError> {
    Ok(image::load_from_memory(data)?.into_rgba8())
}

pub fn encode_rgba(image: &RgbaImage) -> Result<Vec<u8>, ConvertError> {
    let mut out = vec![];
    let mut encoder = png::Encoder::new(&mut out, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(image.as_raw())?;
    writer.finish()?;

    Ok(out)
}

/// Encodes `image` as RGBA and runs it through oxipng.
pub fn optimize_rgba(image: &RgbaImage, options: &oxipng::Options) -> Result<Vec<u8>, ConvertError> {
    let encoded = encode_rgba(image)?;
    let optimized = oxipng::optimize_from_memory(&encoded, options)?;
    debug!(
        before = encoded.len(),
        after = optimized.len(),
        "optimized {}x{} image",
        image.width(),
        image.height()
    );

    Ok(optimized)
}

/// Re-opens the PNG at `path`, forces RGBA and overwrites it optimized.
pub fn optimize_file(path: &Path, options: &oxipng::Options) -> Result<(), ConvertError> {
    let data = std::fs::read(path).map_err(|source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let image = decode_rgba(&data)?;
    let optimized = optimize_rgba(&image, options)?;

    std::fs::write(path, optimized).map_err(|source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    })
}
