// Copyright 2024 the Piet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::error::Error as StdError;
use std::path::PathBuf;
use thiserror::Error;

/// Why a single icon could not be converted.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid SVG")]
    Parse(#[from] usvg::Error),
    #[error("could not allocate a {size}x{size} pixmap")]
    Pixmap { size: u32 },
    #[error("PNG encoding failed")]
    Encode(#[from] png::EncodingError),
    #[error("could not decode the rendered PNG")]
    Decode(#[from] image::ImageError),
    #[error("PNG optimization failed")]
    Optimize(#[from] oxipng::PngError),
    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The rasterizer or the image processor failed the startup self-check.
#[derive(Debug, Error)]
pub enum CapabilityError {
    #[error("SVG rasterizer is unavailable")]
    Rasterizer(#[source] ConvertError),
    #[error("PNG processor is unavailable")]
    ImageProcessor(#[source] ConvertError),
    #[error("probe rendered at {width}x{height}, expected {expected}x{expected}")]
    Mismatch { expected: u32, width: u32, height: u32 },
}

impl CapabilityError {
    /// What to tell the user before giving up.
    pub fn hint(&self) -> &'static str {
        "Install the dependencies first: rebuild with the default features of \
         resvg, tiny-skia, image and oxipng enabled\n   cargo build --release -p icon_batch"
    }
}

/// `err` followed by each of its sources, outermost first.
pub fn chain(err: &dyn StdError) -> Vec<String> {
    let mut messages = vec![err.to_string()];
    let mut source = err.source();
    while let Some(cause) = source {
        messages.push(cause.to_string());
        source = cause.source();
    }

    messages
}
