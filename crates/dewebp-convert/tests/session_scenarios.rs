//! Integration test: drive a session through mixed batches and format changes.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use dewebp_convert::{InputFile, IntakeError, OutputFormat, Session};
use image::codecs::webp::WebPEncoder;
use image::{ExtendedColorType, ImageEncoder, Rgba, RgbaImage};

fn webp_bytes() -> Vec<u8> {
    let img = RgbaImage::from_fn(8, 8, |x, y| {
        if (x + y) % 2 == 0 {
            Rgba([255, 0, 0, 255])
        } else {
            Rgba([0, 0, 255, 128])
        }
    });
    let mut buf = Vec::new();
    WebPEncoder::new_lossless(&mut buf)
        .write_image(img.as_raw(), 8, 8, ExtendedColorType::Rgba8)
        .expect("lossless WebP encoding should succeed");
    buf
}

fn webp(name: &str) -> InputFile {
    InputFile::new(name, Some("image/webp"), webp_bytes())
}

#[test]
fn mixed_batch_keeps_only_webp() {
    let mut session = Session::default();
    session.select_format(OutputFormat::Png);

    let files = vec![
        webp("a.webp"),
        InputFile::new("b.png", Some("image/png"), vec![0x89, b'P', b'N', b'G']),
    ];
    let report = session.convert_batch(files).unwrap();

    assert!(report.failed.is_empty());
    assert_eq!(report.converted, ["a.png"]);
    assert_eq!(session.results().names().collect::<Vec<_>>(), ["a.png"]);
}

#[test]
fn empty_batch_is_rejected_once_without_state_change() {
    let mut session = Session::default();
    let err = session.convert_batch(Vec::new()).unwrap_err();
    assert_eq!(err, IntakeError::NoWebpFiles { rejected: 0 });
    assert!(session.results().is_empty());
}

#[test]
fn format_change_does_not_touch_existing_results() {
    let mut session = Session::default();
    session
        .convert_batch(vec![webp("one.webp"), webp("two.WEBP")])
        .unwrap();
    let before: Vec<_> = session.results().iter().cloned().collect();

    session.select_format(OutputFormat::Bmp);
    session.convert_batch(vec![webp("three.webp")]).unwrap();

    let names: Vec<_> = session.results().names().collect();
    assert_eq!(names, ["one.jpeg", "two.jpeg", "three.bmp"]);
    for (old, now) in before.iter().zip(session.results()) {
        assert_eq!(old, now);
        assert_eq!(now.image().format(), OutputFormat::Jpeg);
    }
}

#[test]
fn decode_failure_is_isolated_per_file() {
    let mut session = Session::default();
    let files = vec![
        webp("good-1.webp"),
        InputFile::new("bad.webp", Some("image/webp"), b"not an image".to_vec()),
        webp("good-2.webp"),
    ];
    let report = session.convert_batch(files).unwrap();

    assert_eq!(report.converted, ["good-1.jpeg", "good-2.jpeg"]);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, "bad.webp");
    assert_eq!(session.results().len(), 2);
}

#[test]
fn remove_and_clear_through_session() {
    let mut session = Session::default();
    session
        .convert_batch(vec![webp("a.webp"), webp("b.webp"), webp("c.webp")])
        .unwrap();

    assert!(session.remove_at(7).is_none());
    assert_eq!(session.results().len(), 3);

    session.remove_at(0);
    assert_eq!(
        session.results().names().collect::<Vec<_>>(),
        ["b.jpeg", "c.jpeg"]
    );

    session.clear();
    assert!(session.results().is_empty());
}

#[test]
fn earlier_failures_remain_after_next_batch() {
    let mut session = Session::default();
    session
        .convert_batch(vec![InputFile::new(
            "bad.webp",
            Some("image/webp"),
            b"not an image".to_vec(),
        )])
        .unwrap();
    session.convert_batch(vec![webp("good.webp")]).unwrap();

    assert_eq!(session.failures().len(), 1);
    assert_eq!(session.failures()[0].file, "bad.webp");
    assert_eq!(session.results().names().collect::<Vec<_>>(), ["good.jpeg"]);

    session.clear();
    assert!(session.failures().is_empty());
    assert!(session.results().is_empty());
}
