#![allow(dead_code)]

use icon_batch::{Capabilities, Config, Job, RunSummary};
use icon_fixtures::{write_icon, IconParams};
use image::RgbaImage;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tempfile::TempDir;

pub static CAPS: LazyLock<Capabilities> =
    LazyLock::new(|| Capabilities::load().expect("toolchain self-check failed"));

/// A temporary icons directory holding fixture SVGs for `sizes`.
pub fn icons_dir(sizes: &[u32]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for size in sizes {
        write_icon(dir.path(), IconParams::new(*size).with_seed(*size as u64)).unwrap();
    }

    dir
}

pub fn run_in(dir: &Path) -> RunSummary {
    icon_batch::run(&Config::with_icons_dir(dir), &CAPS)
}

pub fn png_path(dir: &Path, size: u32) -> PathBuf {
    Job::new(dir, size).destination
}

pub fn svg_path(dir: &Path, size: u32) -> PathBuf {
    Job::new(dir, size).source
}

pub fn load_png(path: &Path) -> RgbaImage {
    let image = image::open(path).unwrap();
    assert_eq!(image.color(), image::ColorType::Rgba8, "{} is not RGBA", path.display());

    image.into_rgba8()
}

pub fn pngs_in(dir: &Path) -> Vec<PathBuf> {
    let mut found: Vec<PathBuf> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "png"))
        .collect();
    found.sort();

    found
}
