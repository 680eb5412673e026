// End-to-end tests for the fixed conversion table
use std::fs;
use std::path::Path;

use icon_inverter::error::AppError;
use icon_inverter::inverter::{BatchReport, CONVERSION_TABLE, InvertError};
use image::{GenericImageView, Rgba, RgbaImage};

fn write_ico(path: &Path, sizes: &[u32]) {
    let mut icon_dir = ico::IconDir::new(ico::ResourceType::Icon);
    for &size in sizes {
        let rgba = RgbaImage::from_pixel(size, size, Rgba([200, 100, 50, 180]));
        let image = ico::IconImage::from_rgba_data(size, size, rgba.into_raw());
        icon_dir.add_entry(ico::IconDirEntry::encode(&image).expect("encode frame failed"));
    }
    icon_dir
        .write(fs::File::create(path).expect("create ico failed"))
        .expect("write ico failed");
}

#[test]
fn icon_png_pixel_is_inverted() {
    let dir = tempfile::tempdir().expect("tempdir failed");
    let mut source = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 0]));
    source.put_pixel(0, 0, Rgba([10, 20, 30, 255]));
    source.save(dir.path().join("icon.png")).expect("save failed");

    let report = icon_inverter::run(dir.path()).expect("run should succeed");
    assert_eq!(report, BatchReport { inverted: 1, skipped: 7 });

    let output = image::open(dir.path().join("icon_inverted.png"))
        .expect("output should exist")
        .to_rgba8();
    assert_eq!(output.get_pixel(0, 0).0, [245, 235, 225, 255]);
    // 透明像素的 Alpha 保持不变
    assert_eq!(output.get_pixel(1, 1).0, [255, 255, 255, 0]);
}

#[test]
fn full_table_with_nested_directories() {
    let dir = tempfile::tempdir().expect("tempdir failed");
    fs::create_dir_all(dir.path().join("main")).expect("mkdir failed");
    fs::create_dir_all(dir.path().join("platform/windows")).expect("mkdir failed");

    for entry in CONVERSION_TABLE.iter().filter(|e| e.source.ends_with(".png")) {
        RgbaImage::from_pixel(8, 8, Rgba([1, 2, 3, 255]))
            .save(dir.path().join(entry.source))
            .expect("save failed");
    }
    write_ico(&dir.path().join("platform/windows/godot.ico"), &[16, 32, 256]);
    write_ico(&dir.path().join("platform/windows/godot_console.ico"), &[48]);

    let report = icon_inverter::run(dir.path()).expect("run should succeed");
    assert_eq!(report, BatchReport { inverted: 8, skipped: 0 });

    for entry in CONVERSION_TABLE {
        assert!(
            dir.path().join(entry.destination).exists(),
            "missing output {}",
            entry.destination
        );
    }

    let splash = image::open(dir.path().join("main/splash_inverted.png")).expect("open failed");
    assert_eq!(splash.dimensions(), (8, 8));
    assert_eq!(splash.to_rgba8().get_pixel(3, 3).0, [254, 253, 252, 255]);

    for name in ["godot_inverted.ico", "godot_console_inverted.ico"] {
        let file = fs::File::open(dir.path().join("platform/windows").join(name)).expect("open failed");
        let icon_dir = ico::IconDir::read(file).expect("valid ico");
        let sizes: Vec<(u32, u32)> = icon_dir
            .entries()
            .iter()
            .map(|entry| (entry.width(), entry.height()))
            .collect();
        assert_eq!(
            sizes,
            vec![(16, 16), (32, 32), (48, 48), (64, 64), (128, 128), (256, 256)]
        );
    }
}

#[test]
fn empty_directory_skips_everything() {
    let dir = tempfile::tempdir().expect("tempdir failed");

    let report = icon_inverter::run(dir.path()).expect("run should succeed");

    assert_eq!(report, BatchReport { inverted: 0, skipped: 8 });
}

#[test]
fn corrupt_entry_stops_the_batch() {
    let dir = tempfile::tempdir().expect("tempdir failed");
    fs::write(dir.path().join("icon_outlined.png"), b"\x89PNG\r\n\x1a\nnope").expect("write failed");
    RgbaImage::new(2, 2).save(dir.path().join("logo.png")).expect("save failed");

    let result = icon_inverter::run(dir.path());

    assert!(matches!(result, Err(AppError::Invert(InvertError::Decode(_)))));
    assert!(!dir.path().join("logo_inverted.png").exists());
}
