// Copyright 2024 the Piet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use icon_fixtures::{write_all, ICON_SIZES};
use std::path::PathBuf;

fn main() {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("public")
        .join("icons");

    if let Err(e) = std::fs::create_dir_all(&dir).and_then(|_| write_all(&dir, &ICON_SIZES)) {
        eprintln!("failed to write sample icons to {}: {}", dir.display(), e);
        std::process::exit(1);
    }

    println!("wrote {} sample icons to {}", ICON_SIZES.len(), dir.display());
}
