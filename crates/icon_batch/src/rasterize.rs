// Copyright 2024 the Piet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::error::ConvertError;
use crate::job::Job;
use tiny_skia::{Pixmap, Transform};

/// Parses `data` and renders it onto a `size` x `size` pixmap.
///
/// The aspect ratio is kept: the drawing is scaled to fit and centered, with
/// transparent margins on the short axis.
pub fn render_svg(data: &[u8], size: u32, opt: &usvg::Options) -> Result<Pixmap, ConvertError> {
    let tree = usvg::Tree::from_data(data, opt)?;
    let mut pixmap = Pixmap::new(size, size).ok_or(ConvertError::Pixmap { size })?;

    resvg::render(&tree, fit_transform(tree.size(), size), &mut pixmap.as_mut());

    Ok(pixmap)
}

fn fit_transform(svg_size: usvg::Size, size: u32) -> Transform {
    let target = size as f32;
    let (width, height) = (svg_size.width(), svg_size.height());
    let scale = (target / width).min(target / height);

    Transform::from_scale(scale, scale).post_translate(
        (target - width * scale) / 2.0,
        (target - height * scale) / 2.0,
    )
}

/// Renders the job's source and writes the PNG straight to its destination.
pub fn rasterize(job: &Job, opt: &usvg::Options) -> Result<(), ConvertError> {
    let data = std::fs::read(&job.source).map_err(|source| ConvertError::Read {
        path: job.source.clone(),
        source,
    })?;

    let pixmap = render_svg(&data, job.size, opt)?;
    pixmap.save_png(&job.destination)?;

    Ok(())
}
