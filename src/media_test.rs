use super::*;

// =============================================================
// classify
// =============================================================

#[test]
fn classify_every_image_extension() {
    for name in ["a.jpg", "a.jpeg", "a.png", "a.gif", "a.webp", "a.bmp"] {
        assert_eq!(MediaKind::classify(name), MediaKind::Image, "{name}");
    }
}

#[test]
fn classify_every_video_extension() {
    for name in ["a.mp4", "a.webm", "a.ogg", "a.mov"] {
        assert_eq!(MediaKind::classify(name), MediaKind::Video, "{name}");
    }
}

#[test]
fn classify_ignores_extension_case() {
    assert_eq!(MediaKind::classify("HOLIDAY.JPG"), MediaKind::Image);
    assert_eq!(MediaKind::classify("clip.MoV"), MediaKind::Video);
}

#[test]
fn classify_unknown_extension_is_unsupported() {
    assert_eq!(MediaKind::classify("c.xyz"), MediaKind::Unsupported);
    assert_eq!(MediaKind::classify("report.pdf"), MediaKind::Unsupported);
}

#[test]
fn classify_without_dot_is_unsupported() {
    assert_eq!(MediaKind::classify("README"), MediaKind::Unsupported);
    assert_eq!(MediaKind::classify(""), MediaKind::Unsupported);
}

#[test]
fn classify_uses_last_extension_only() {
    assert_eq!(MediaKind::classify("archive.png.zip"), MediaKind::Unsupported);
    assert_eq!(MediaKind::classify("movie.final.mp4"), MediaKind::Video);
}

#[test]
fn classify_trailing_dot_is_unsupported() {
    assert_eq!(MediaKind::classify("photo."), MediaKind::Unsupported);
}

// =============================================================
// URLs and slides
// =============================================================

#[test]
fn media_url_concatenates_prefix_and_name() {
    assert_eq!(media_url("/uploads/", "a.jpg"), "/uploads/a.jpg");
}

#[test]
fn slide_carries_kind_url_and_name() {
    let slide = Slide::new("/uploads/", "b.mp4");
    assert_eq!(slide.kind, MediaKind::Video);
    assert_eq!(slide.url, "/uploads/b.mp4");
    assert_eq!(slide.file_name, "b.mp4");
}
