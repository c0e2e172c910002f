use super::*;

/// A plausible PNG payload: real magic-byte prefix padded well past the
/// bare-payload length floor.
fn png_payload() -> String {
    format!("iVBORw0KGgo{}", "A".repeat(80))
}

fn jpeg_payload() -> String {
    format!("/9j/4AAQSkZJRg{}", "A".repeat(80))
}

// ---------------------------------------------------------------------------
// Absence: null, blank, sentinels, quoting
// ---------------------------------------------------------------------------

#[test]
fn resolve_none_is_absent() {
    assert_eq!(resolve_media_ref(None), ImageReference::Absent);
}

#[test]
fn resolve_empty_string_is_absent() {
    assert_eq!(resolve_media_ref(Some("")), ImageReference::Absent);
}

#[test]
fn resolve_whitespace_only_is_absent() {
    assert_eq!(resolve_media_ref(Some("   ")), ImageReference::Absent);
}

#[test]
fn resolve_sentinel_words_are_absent() {
    for sentinel in ["null", "undefined", "none", "n/a"] {
        assert_eq!(
            resolve_media_ref(Some(sentinel)),
            ImageReference::Absent,
            "sentinel {sentinel:?} should resolve to Absent"
        );
    }
}

#[test]
fn resolve_sentinel_is_case_insensitive() {
    assert_eq!(resolve_media_ref(Some("NULL")), ImageReference::Absent);
    assert_eq!(resolve_media_ref(Some("N/A")), ImageReference::Absent);
    assert_eq!(resolve_media_ref(Some("None")), ImageReference::Absent);
}

#[test]
fn resolve_quoted_sentinel_with_whitespace_is_absent() {
    assert_eq!(resolve_media_ref(Some("  \"null\"  ")), ImageReference::Absent);
    assert_eq!(resolve_media_ref(Some("'undefined'")), ImageReference::Absent);
}

#[test]
fn resolve_quoted_empty_is_absent() {
    assert_eq!(resolve_media_ref(Some("''")), ImageReference::Absent);
    assert_eq!(resolve_media_ref(Some("\"  \"")), ImageReference::Absent);
}

#[test]
fn resolve_unwraps_one_quote_layer_around_url() {
    assert_eq!(
        resolve_media_ref(Some("'https://cdn.example.com/dish.jpg'")),
        ImageReference::Remote("https://cdn.example.com/dish.jpg".to_owned())
    );
}

#[test]
fn resolve_mismatched_quotes_are_not_stripped() {
    // First and last characters differ, so the quotes are part of the value.
    let got = resolve_media_ref(Some("'menu.jpg\""));
    assert_eq!(got, ImageReference::Remote("'menu.jpg\"".to_owned()));
}

// ---------------------------------------------------------------------------
// Remote URLs
// ---------------------------------------------------------------------------

#[test]
fn resolve_https_url_passes_through_unchanged() {
    let url = "https://cdn.example.com/hero.webp?v=3";
    assert_eq!(
        resolve_media_ref(Some(url)),
        ImageReference::Remote(url.to_owned())
    );
}

#[test]
fn resolve_http_url_passes_through_unchanged() {
    let url = "http://img.example.com/a.png";
    assert_eq!(
        resolve_media_ref(Some(url)),
        ImageReference::Remote(url.to_owned())
    );
}

// ---------------------------------------------------------------------------
// Data URIs
// ---------------------------------------------------------------------------

#[test]
fn resolve_data_uri_strips_line_wrapped_payload() {
    let payload = png_payload();
    let (head, tail) = payload.split_at(20);
    let wrapped = format!("data:image/png;base64,{head}\n {tail}\r\n");
    let got = resolve_media_ref(Some(&wrapped));
    assert_eq!(
        got,
        ImageReference::Inline {
            mime: ImageMime::Png,
            payload,
        }
    );
}

#[test]
fn resolve_data_uri_uppercase_base64_marker_is_repaired() {
    let payload = png_payload();
    let wrapped = format!("data:image/png;BASE64,{payload}\nAAA");
    assert_eq!(
        resolve_media_ref(Some(&wrapped)),
        ImageReference::Inline {
            mime: ImageMime::Png,
            payload: format!("{payload}AAA"),
        }
    );
}

#[test]
fn resolve_data_uri_mime_comes_from_header_not_payload() {
    // GIF header over a PNG-prefixed payload: the header wins.
    let value = format!("data:image/gif;base64,{}", png_payload());
    match resolve_media_ref(Some(&value)) {
        ImageReference::Inline { mime, .. } => assert_eq!(mime, ImageMime::Gif),
        other => panic!("expected Inline, got: {other:?}"),
    }
}

#[test]
fn resolve_data_uri_unrecognized_mime_defaults_to_jpeg() {
    let value = format!("data:image/tiff;base64,{}", "B".repeat(60));
    match resolve_media_ref(Some(&value)) {
        ImageReference::Inline { mime, .. } => assert_eq!(mime, ImageMime::Jpeg),
        other => panic!("expected Inline, got: {other:?}"),
    }
}

#[test]
fn resolve_non_base64_data_uri_passes_through() {
    let value = "data:text/plain,hello%20world";
    assert_eq!(
        resolve_media_ref(Some(value)),
        ImageReference::Remote(value.to_owned())
    );
}

#[test]
fn resolve_data_uri_without_comma_passes_through() {
    let value = "data:image/png;base64";
    assert_eq!(
        resolve_media_ref(Some(value)),
        ImageReference::Remote(value.to_owned())
    );
}

#[test]
fn resolve_data_uri_with_empty_payload_passes_through() {
    let value = "data:image/png;base64,";
    assert_eq!(
        resolve_media_ref(Some(value)),
        ImageReference::Remote(value.to_owned())
    );
}

#[test]
fn resolve_is_idempotent_for_base64_data_uris() {
    let wrapped = format!("data:image/png;base64,{}\n", png_payload());
    let first = resolve_media_ref(Some(&wrapped));
    let rendered = first.to_src().expect("Inline renders to a src");
    let second = resolve_media_ref(Some(&rendered));
    assert_eq!(first, second);
}

// ---------------------------------------------------------------------------
// Bare base64 payloads
// ---------------------------------------------------------------------------

#[test]
fn resolve_bare_png_payload_round_trips() {
    let payload = png_payload();
    let spaced = format!("  {}\n{}  ", &payload[..10], &payload[10..]);
    assert_eq!(
        resolve_media_ref(Some(&spaced)),
        ImageReference::Inline {
            mime: ImageMime::Png,
            payload,
        }
    );
}

#[test]
fn resolve_bare_jpeg_payload_sniffed() {
    let payload = jpeg_payload();
    match resolve_media_ref(Some(&payload)) {
        ImageReference::Inline { mime, .. } => assert_eq!(mime, ImageMime::Jpeg),
        other => panic!("expected Inline, got: {other:?}"),
    }
}

#[test]
fn resolve_bare_payload_sniffs_gif_webp_bmp() {
    let cases = [
        ("R0lGOD", ImageMime::Gif),
        ("UklGR", ImageMime::Webp),
        ("Qk", ImageMime::Bmp),
    ];
    for (prefix, expected) in cases {
        let payload = format!("{prefix}{}", "C".repeat(70));
        match resolve_media_ref(Some(&payload)) {
            ImageReference::Inline { mime, .. } => {
                assert_eq!(mime, expected, "prefix {prefix:?}");
            }
            other => panic!("expected Inline for prefix {prefix:?}, got: {other:?}"),
        }
    }
}

#[test]
fn resolve_bare_payload_unknown_magic_defaults_to_jpeg() {
    let payload = "A".repeat(80);
    match resolve_media_ref(Some(&payload)) {
        ImageReference::Inline { mime, .. } => assert_eq!(mime, ImageMime::Jpeg),
        other => panic!("expected Inline, got: {other:?}"),
    }
}

#[test]
fn resolve_short_base64_string_passes_through() {
    // Base64 alphabet but at/below the length floor: do not trust as image data.
    let value = "A".repeat(50);
    assert_eq!(
        resolve_media_ref(Some(&value)),
        ImageReference::Remote(value.clone())
    );
}

#[test]
fn resolve_non_base64_alphabet_passes_through() {
    let value = format!("menu-photo_{}.jpg", "x".repeat(60));
    assert_eq!(
        resolve_media_ref(Some(&value)),
        ImageReference::Remote(value.clone())
    );
}

#[test]
fn resolve_plain_filename_passes_through_trimmed_and_unquoted() {
    assert_eq!(
        resolve_media_ref(Some("  'pad-thai.jpg'  ")),
        ImageReference::Remote("pad-thai.jpg".to_owned())
    );
}

// ---------------------------------------------------------------------------
// Rendering seam
// ---------------------------------------------------------------------------

#[test]
fn to_src_absent_is_none() {
    assert!(ImageReference::Absent.to_src().is_none());
}

#[test]
fn to_src_remote_is_the_url() {
    let r = ImageReference::Remote("https://cdn.example.com/a.png".to_owned());
    assert_eq!(r.to_src().as_deref(), Some("https://cdn.example.com/a.png"));
}

#[test]
fn to_src_inline_builds_a_data_uri() {
    let r = ImageReference::Inline {
        mime: ImageMime::Png,
        payload: "iVBORw0KGgo".to_owned(),
    };
    assert_eq!(
        r.to_src().as_deref(),
        Some("data:image/png;base64,iVBORw0KGgo")
    );
}
