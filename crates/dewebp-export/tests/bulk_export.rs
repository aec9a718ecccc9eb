//! Integration test: convert WebP files through a session and bundle the results.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::io::{Cursor, Read};

use dewebp_convert::{
    ConversionResult, InputFile, Materialize, OutputFormat, ResultList, Session,
};
use dewebp_export::{ExportError, bundle};
use futures::executor::block_on;
use image::codecs::webp::WebPEncoder;
use image::{ExtendedColorType, ImageEncoder, Rgba, RgbaImage};

fn webp(name: &str, shade: u8) -> InputFile {
    let img = RgbaImage::from_fn(4, 4, |_, _| Rgba([shade, shade, shade, 255]));
    let mut buf = Vec::new();
    WebPEncoder::new_lossless(&mut buf)
        .write_image(img.as_raw(), 4, 4, ExtendedColorType::Rgba8)
        .expect("lossless WebP encoding should succeed");
    InputFile::new(name, Some("image/webp"), buf)
}

/// Read every file entry back as `(path, bytes)`.
fn entries(zip_bytes: &[u8]) -> Vec<(String, Vec<u8>)> {
    let mut archive = zip::ZipArchive::new(Cursor::new(zip_bytes)).unwrap();
    (0..archive.len())
        .map(|i| {
            let mut file = archive.by_index(i).unwrap();
            let mut data = Vec::new();
            file.read_to_end(&mut data).unwrap();
            (file.name().to_owned(), data)
        })
        .collect()
}

#[test]
fn empty_list_is_a_no_op() {
    let results = ResultList::<dewebp_convert::EncodedImage>::new();
    let archive = block_on(bundle(&results, OutputFormat::Jpeg)).unwrap();
    assert!(archive.is_none());
}

#[test]
fn archive_holds_every_result_under_format_folder() {
    let mut session = Session::default();
    session.select_format(OutputFormat::Png);
    session
        .convert_batch(vec![
            webp("a.webp", 10),
            webp("b.webp", 20),
            webp("c.webp", 30),
        ])
        .unwrap();

    let archive = block_on(bundle(session.results(), session.format()))
        .unwrap()
        .expect("non-empty list should produce an archive");

    assert_eq!(archive.name, "imagenes_convertidas_png.zip");
    let files = entries(&archive.bytes);
    assert_eq!(files.len(), 3);
    let names: Vec<_> = files.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, ["pngs/a.png", "pngs/b.png", "pngs/c.png"]);
    for ((_, data), result) in files.iter().zip(session.results()) {
        assert_eq!(data.as_slice(), result.image().bytes());
    }
}

#[test]
fn bundling_twice_is_identical() {
    let mut session = Session::default();
    session
        .convert_batch(vec![webp("x.webp", 1), webp("y.webp", 2)])
        .unwrap();

    let first = block_on(bundle(session.results(), session.format())).unwrap();
    let second = block_on(bundle(session.results(), session.format())).unwrap();
    assert_eq!(first, second);
}

#[test]
fn format_change_renames_folder_but_not_entries() {
    let mut session = Session::default();
    session
        .convert_batch(vec![webp("one.webp", 5), webp("two.webp", 6)])
        .unwrap();
    session.select_format(OutputFormat::Bmp);

    let archive = block_on(bundle(session.results(), session.format()))
        .unwrap()
        .unwrap();
    assert_eq!(archive.name, "imagenes_convertidas_bmp.zip");

    let files = entries(&archive.bytes);
    let names: Vec<_> = files.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, ["bmps/one.jpeg", "bmps/two.jpeg"]);
    for (_, data) in &files {
        assert_eq!(image::guess_format(data).unwrap(), image::ImageFormat::Jpeg);
    }
}

#[test]
fn duplicate_names_are_all_kept() {
    let mut session = Session::default();
    session
        .convert_batch(vec![webp("dup.webp", 1), webp("dup.webp", 2)])
        .unwrap();

    let archive = block_on(bundle(session.results(), session.format()))
        .unwrap()
        .unwrap();
    let files = entries(&archive.bytes);
    let names: Vec<_> = files.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, ["jpegs/dup.jpeg", "jpegs/dup (1).jpeg"]);
}

/// An in-test reference that either reads back fixed bytes or fails.
enum Stored {
    Readable(&'static [u8]),
    Revoked,
}

impl Materialize for Stored {
    type Error = &'static str;

    async fn materialize(&self) -> Result<Vec<u8>, Self::Error> {
        match self {
            Self::Readable(bytes) => Ok(bytes.to_vec()),
            Self::Revoked => Err("blob revoked"),
        }
    }
}

#[test]
fn any_unreadable_entry_fails_the_whole_export() {
    let mut results = ResultList::new();
    results.push(ConversionResult::new("ok.png".into(), Stored::Readable(b"data")));
    results.push(ConversionResult::new("gone.png".into(), Stored::Revoked));
    results.push(ConversionResult::new("also-ok.png".into(), Stored::Readable(b"more")));

    let outcome = block_on(bundle(&results, OutputFormat::Png));
    match outcome {
        Err(ExportError::Materialize { name, message }) => {
            assert_eq!(name, "gone.png");
            assert_eq!(message, "blob revoked");
        }
        other => panic!("expected materialize failure, got {other:?}"),
    }
    assert_eq!(results.len(), 3, "results stay intact for a retry");
}

#[test]
fn readable_custom_references_are_bundled() {
    let mut results = ResultList::new();
    results.push(ConversionResult::new("a.bmp".into(), Stored::Readable(b"first")));
    results.push(ConversionResult::new("b.bmp".into(), Stored::Readable(b"second")));

    let archive = block_on(bundle(&results, OutputFormat::Bmp)).unwrap().unwrap();
    let files = entries(&archive.bytes);
    assert_eq!(
        files,
        [
            ("bmps/a.bmp".to_owned(), b"first".to_vec()),
            ("bmps/b.bmp".to_owned(), b"second".to_vec()),
        ]
    );
}
