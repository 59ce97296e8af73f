use image::{GrayImage, Luma, Rgb, RgbImage};
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use tile_dataset::{
    generate_dataset, load_label, load_original, ErrorKind, TileClass, TilingConfig,
};

fn prepare_output(root: &Path) {
    for class in TileClass::ALL {
        fs::create_dir(root.join(class.dir_name())).unwrap();
    }
}

fn count_files(dir: &Path) -> usize {
    fs::read_dir(dir).unwrap().count()
}

#[test]
fn test_all_water_pair_from_png_files() {
    let tmp = TempDir::new().unwrap();
    let image_path = tmp.path().join("orig.png");
    let label_path = tmp.path().join("label.png");
    let out = tmp.path().join("dataset");
    fs::create_dir(&out).unwrap();
    prepare_output(&out);

    RgbImage::from_fn(120, 120, |x, y| Rgb([x as u8, y as u8, 64]))
        .save(&image_path)
        .unwrap();
    GrayImage::from_pixel(120, 120, Luma([0])).save(&label_path).unwrap();

    let original = load_original(&image_path).unwrap();
    let label = load_label(&label_path).unwrap();
    let summary = generate_dataset(&out, &original, &label, &TilingConfig::default()).unwrap();

    assert_eq!(summary.water, 9);
    assert_eq!(count_files(&out.join("water")), 9);
    assert_eq!(count_files(&out.join("edge")), 0);
    assert_eq!(count_files(&out.join("green")), 0);

    // Fourth tile overall carries index 3
    let fourth = image::open(out.join("water").join("img_orig_3.jpg")).unwrap();
    assert_eq!((fourth.width(), fourth.height()), (50, 50));
}

#[test]
fn test_mismatched_pair_from_png_files() {
    let tmp = TempDir::new().unwrap();
    let image_path = tmp.path().join("orig.png");
    let label_path = tmp.path().join("label.png");
    prepare_output(tmp.path());

    RgbImage::new(100, 100).save(&image_path).unwrap();
    // 100 rows by 90 columns
    GrayImage::new(90, 100).save(&label_path).unwrap();

    let original = load_original(&image_path).unwrap();
    let label = load_label(&label_path).unwrap();
    let err = generate_dataset(tmp.path(), &original, &label, &TilingConfig::default())
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::DimensionMismatch);
    for class in TileClass::ALL {
        assert_eq!(count_files(&tmp.path().join(class.dir_name())), 0);
    }
}
