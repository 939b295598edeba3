mod util;

use icon_batch::{Outcome, SIZES};
use icon_fixtures::{save_icon, IconParams};
use util::{icons_dir, load_png, png_path, pngs_in, run_in, svg_path};

#[test]
fn converts_every_size() {
    let dir = icons_dir(&SIZES);
    let summary = run_in(dir.path());

    assert_eq!(summary.converted(), SIZES.len());
    assert_eq!(summary.failed(), 0);

    for size in SIZES {
        let image = load_png(&png_path(dir.path(), size));
        assert_eq!(image.dimensions(), (size, size));
        // The fixture's center mark is opaque.
        assert_eq!(image.get_pixel(size / 2, size / 2).0[3], 255);
    }
}

#[test]
fn only_smallest_and_largest() {
    let dir = icons_dir(&[72, 512]);
    let summary = run_in(dir.path());

    assert_eq!(summary.converted(), 2);
    assert_eq!(summary.skipped(), 6);
    assert_eq!(
        pngs_in(dir.path()),
        vec![png_path(dir.path(), 512), png_path(dir.path(), 72)]
    );
    assert_eq!(load_png(&png_path(dir.path(), 72)).dimensions(), (72, 72));
    assert_eq!(load_png(&png_path(dir.path(), 512)).dimensions(), (512, 512));

    let skipped: Vec<String> = summary
        .outcomes()
        .iter()
        .filter(|o| o.is_skipped())
        .map(|o| o.to_string())
        .collect();
    assert_eq!(skipped.len(), 6);
    for (message, size) in skipped.iter().zip([96, 128, 144, 152, 192, 384]) {
        assert_eq!(
            message,
            &format!("icon-{}x{}.svg not found, skipping...", size, size)
        );
    }
}

#[test]
fn skipped_size_keeps_existing_png() {
    let dir = icons_dir(&[72]);
    let hand_made = png_path(dir.path(), 96);
    std::fs::write(&hand_made, b"hand edited").unwrap();

    let summary = run_in(dir.path());

    assert!(summary.outcomes()[1].is_skipped());
    assert_eq!(std::fs::read(&hand_made).unwrap(), b"hand edited");
}

#[test]
fn broken_source_does_not_abort() {
    let dir = icons_dir(&SIZES);
    std::fs::write(svg_path(dir.path(), 128), "<svg><unclosed").unwrap();

    let summary = run_in(dir.path());

    assert_eq!(summary.failed(), 1);
    assert_eq!(summary.converted(), SIZES.len() - 1);

    let failed = &summary.outcomes()[2];
    assert!(failed.is_failed());
    assert!(failed.to_string().starts_with("Error with icon-128x128.svg: "));

    for size in SIZES.into_iter().filter(|size| *size != 128) {
        assert_eq!(load_png(&png_path(dir.path(), size)).dimensions(), (size, size));
    }
}

#[test]
fn rerun_is_byte_identical() {
    let dir = icons_dir(&SIZES);

    run_in(dir.path());
    let first: Vec<Vec<u8>> = SIZES
        .iter()
        .map(|size| std::fs::read(png_path(dir.path(), *size)).unwrap())
        .collect();

    run_in(dir.path());
    let second: Vec<Vec<u8>> = SIZES
        .iter()
        .map(|size| std::fs::read(png_path(dir.path(), *size)).unwrap())
        .collect();

    assert_eq!(first, second);
}

#[test]
fn smaller_source_is_scaled_up() {
    let dir = icons_dir(&[]);
    save_icon(&svg_path(dir.path(), 384), IconParams::new(100)).unwrap();

    let summary = run_in(dir.path());

    assert_eq!(summary.converted(), 1);
    assert_eq!(load_png(&png_path(dir.path(), 384)).dimensions(), (384, 384));
}

#[test]
fn tall_source_keeps_proportions() {
    let dir = icons_dir(&[]);
    std::fs::write(
        svg_path(dir.path(), 384),
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="50" height="100" viewBox="0 0 50 100">
            <rect width="50" height="100" fill="#16a34a"/>
        </svg>"##,
    )
    .unwrap();

    let summary = run_in(dir.path());
    assert_eq!(summary.converted(), 1);

    // 50x100 fitted into 384 is 192 wide, centered at x = 96..288.
    let image = load_png(&png_path(dir.path(), 384));
    assert_eq!(image.dimensions(), (384, 384));
    assert_eq!(image.get_pixel(0, 192).0[3], 0);
    assert_eq!(image.get_pixel(94, 192).0[3], 0);
    assert_eq!(image.get_pixel(97, 192).0[3], 255);
    assert_eq!(image.get_pixel(286, 192).0[3], 255);
    assert_eq!(image.get_pixel(289, 192).0[3], 0);
    assert_eq!(image.get_pixel(383, 192).0[3], 0);
    assert_eq!(image.get_pixel(192, 0).0[3], 255);
    assert_eq!(image.get_pixel(192, 383).0[3], 255);
}

#[test]
fn missing_directory_skips_everything() {
    let dir = icons_dir(&[]);
    let summary = run_in(&dir.path().join("nope"));

    assert_eq!(summary.skipped(), SIZES.len());
    assert!(summary
        .outcomes()
        .iter()
        .all(|o| matches!(o, Outcome::Skipped { .. })));
}
