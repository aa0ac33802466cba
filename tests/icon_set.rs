use std::fs;
use std::path::Path;

use shield_icon::*;

fn generate(set: &IconSet) -> (Result<Vec<std::path::PathBuf>>, String) {
    let mut out = Vec::new();
    let result = set.generate(&IconRenderer::default(), &mut out);
    (result, String::from_utf8(out).unwrap())
}

fn dir_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

fn in_dir(dir: &Path) -> IconSet {
    IconSet {
        out_dir: dir.to_path_buf(),
        ..IconSet::default()
    }
}

#[test]
fn writes_four_files() {
    let dir = tempfile::tempdir().unwrap();
    let (result, _) = generate(&in_dir(dir.path()));

    let written = result.unwrap();
    assert_eq!(written.len(), 4);
    assert_eq!(
        dir_entries(dir.path()),
        ["bookmark-16.png", "bookmark-32.png", "bookmark-48.png", "bookmark-96.png"]
    );
}

#[test]
fn console_output() {
    let dir = tempfile::tempdir().unwrap();
    let (result, text) = generate(&in_dir(dir.path()));
    result.unwrap();

    assert_eq!(
        text,
        "Generated bookmark-16.png\n\
         Generated bookmark-32.png\n\
         Generated bookmark-48.png\n\
         Generated bookmark-96.png\n\
         \n\
         Icons created: bookmark-16.png, bookmark-32.png, bookmark-48.png, bookmark-96.png\n"
    );

    let lines = text.lines().filter(|l| !l.is_empty()).count();
    assert_eq!(lines, 5);
}

#[test]
fn files_are_valid_pngs() {
    let dir = tempfile::tempdir().unwrap();
    let (result, _) = generate(&in_dir(dir.path()));

    for (path, &size) in result.unwrap().iter().zip(DEFAULT_SIZES) {
        let decoder = png::Decoder::new(fs::File::open(path).unwrap());
        let reader = decoder.read_info().unwrap();
        let info = reader.info();
        assert_eq!(info.width, size);
        assert_eq!(info.height, size);
        assert_eq!(info.color_type, png::ColorType::Rgba);
        assert_eq!(info.bit_depth, png::BitDepth::Eight);

        let pixmap = Pixmap::load_png(path).unwrap();
        assert_eq!(pixmap.pixel(0, 0).unwrap(), ColorU8::from_rgba(26, 26, 26, 255).premultiply());
    }
}

#[test]
fn saved_matches_rendered() {
    let dir = tempfile::tempdir().unwrap();
    let (result, _) = generate(&in_dir(dir.path()));

    let path = &result.unwrap()[2];
    let saved = Pixmap::load_png(path).unwrap();
    let rendered = IconRenderer::default().render(48).unwrap();
    assert_eq!(saved.width(), rendered.width());

    // Translucent pixels are stored demultiplied, so only opaque ones are bit-exact.
    for (a, b) in saved.pixels().iter().zip(rendered.pixels()) {
        assert_eq!(a.alpha(), b.alpha());
        if b.alpha() == 255 {
            assert_eq!(a, b);
        }
    }
}

#[test]
fn second_run_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let set = in_dir(dir.path());

    let (first, _) = generate(&set);
    let (second, _) = generate(&set);
    assert_eq!(first.unwrap(), second.unwrap());
    assert_eq!(dir_entries(dir.path()).len(), 4);
}

#[test]
fn missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let set = in_dir(&dir.path().join("missing"));

    let (result, text) = generate(&set);
    match result {
        Err(Error::Encode { path, .. }) => assert!(path.ends_with("bookmark-16.png")),
        other => panic!("unexpected result: {:?}", other),
    }
    assert!(text.is_empty());
}

#[test]
fn stops_at_first_failure() {
    let dir = tempfile::tempdir().unwrap();
    let set = IconSet {
        sizes: vec![16, 0, 32],
        ..in_dir(dir.path())
    };

    let (result, text) = generate(&set);
    assert!(matches!(result, Err(Error::InvalidSize(0))));
    assert_eq!(text, "Generated bookmark-16.png\n");
    assert_eq!(dir_entries(dir.path()), ["bookmark-16.png"]);
}

#[test]
fn custom_prefix_and_sizes() {
    let dir = tempfile::tempdir().unwrap();
    let set = IconSet {
        sizes: vec![128],
        prefix: "shield".to_string(),
        ..in_dir(dir.path())
    };

    let (result, text) = generate(&set);
    result.unwrap();
    assert_eq!(dir_entries(dir.path()), ["shield-128.png"]);
    assert!(text.ends_with("Icons created: shield-128.png\n"));
}
