//! Heuristic resolution of raw image reference strings.
//!
//! Content editors paste whatever they have into the image column: CDN URLs,
//! full data URIs (sometimes line-wrapped by a spreadsheet export), bare
//! base64 payloads with the `data:` header lost, or placeholder text like
//! `"null"`. [`resolve_media_ref`] turns any such string into a canonical
//! [`ImageReference`] without ever failing.
//!
//! The heuristics are an explicit ordered rule table; the first rule whose
//! predicate matches wins, so the tie-break order is visible in one place and
//! each handler is testable on its own.

/// Placeholder strings some store rows use to mean "no image".
const ABSENCE_SENTINELS: [&str; 4] = ["null", "undefined", "none", "n/a"];

/// Minimum length (exclusive) for a whitespace-stripped string to be trusted
/// as a bare base64 image payload. Shorter base64-alphabet strings are far
/// more likely to be slugs, filenames, or truncated values, and are passed
/// through unchanged instead.
const MIN_BARE_PAYLOAD_LEN: usize = 50;

/// Recognized inline image formats, identified by base64-encoded magic bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageMime {
    Png,
    Jpeg,
    Gif,
    Webp,
    Bmp,
}

impl ImageMime {
    /// The `image/*` mime string for this format.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Gif => "image/gif",
            Self::Webp => "image/webp",
            Self::Bmp => "image/bmp",
        }
    }

    /// Parses the mime out of a data-URI header like `data:image/png;base64`.
    ///
    /// Returns `None` for mimes outside the recognized set; callers default
    /// to [`ImageMime::Jpeg`] in that case.
    fn from_data_uri_header(header: &str) -> Option<Self> {
        let mime = header.strip_prefix("data:")?.split(';').next()?;
        [Self::Png, Self::Jpeg, Self::Gif, Self::Webp, Self::Bmp]
            .into_iter()
            .find(|m| mime.eq_ignore_ascii_case(m.as_str()))
    }

    /// Infers the format of a base64 payload from its leading characters.
    ///
    /// Base64 encodes the file's magic bytes into fixed prefixes: `iVBOR` is
    /// PNG's `\x89PNG`, `/9j/` is the JPEG SOI marker, `R0lGOD` is `GIF8`,
    /// `UklGR` is RIFF (WebP container), `Qk` is `BM`. Unrecognized payloads
    /// default to JPEG, the most common format in the store.
    fn sniff(payload: &str) -> Self {
        if payload.starts_with("iVBOR") {
            Self::Png
        } else if payload.starts_with("/9j/") {
            Self::Jpeg
        } else if payload.starts_with("R0lGOD") {
            Self::Gif
        } else if payload.starts_with("UklGR") {
            Self::Webp
        } else if payload.starts_with("Qk") {
            Self::Bmp
        } else {
            Self::Jpeg
        }
    }
}

/// A canonical, renderable image source.
///
/// `Remote` is the direct-source variant: an http(s) URL in the common case,
/// but also the passthrough carrier for present-but-unrecognized values (a
/// present value is more useful to a renderer than nothing). `Inline` always
/// holds a non-empty, whitespace-free base64 payload.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageReference {
    Absent,
    Remote(String),
    Inline { mime: ImageMime, payload: String },
}

impl ImageReference {
    /// The string a renderer should set as the image source, or `None` for
    /// [`ImageReference::Absent`] (render a placeholder instead).
    #[must_use]
    pub fn to_src(&self) -> Option<String> {
        match self {
            Self::Absent => None,
            Self::Remote(url) => Some(url.clone()),
            Self::Inline { mime, payload } => {
                Some(format!("data:{};base64,{payload}", mime.as_str()))
            }
        }
    }
}

/// One step of the resolution chain: a predicate plus the handler that runs
/// when the predicate is the first to match.
struct Rule {
    applies: fn(&str) -> bool,
    resolve: fn(&str) -> ImageReference,
}

/// The ordered heuristic chain. Order matters: a string that is both a valid
/// data URI and base64-alphabet-clean must be handled as a data URI, never
/// re-parsed as a bare payload, so the data-URI rule comes first and the
/// bare-payload rule is the catch-all.
const RULES: [Rule; 3] = [
    Rule {
        applies: is_data_uri,
        resolve: resolve_data_uri,
    },
    Rule {
        applies: is_http_url,
        resolve: resolve_remote_url,
    },
    Rule {
        applies: |_| true,
        resolve: resolve_bare_payload,
    },
];

/// Resolves a possibly-absent raw image reference into an [`ImageReference`].
///
/// Pure and total: never panics and never errors, whatever the input. Absence
/// handling (null, blank, quoted placeholders, sentinel words) happens before
/// the rule chain; everything else flows through the rule table in order.
#[must_use]
pub fn resolve_media_ref(raw: Option<&str>) -> ImageReference {
    let Some(raw) = raw else {
        return ImageReference::Absent;
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ImageReference::Absent;
    }

    // One layer of wrapping quotes: values double-serialized by the store UI
    // arrive as `"'https://...'"` or `"\"null\""`.
    let value = strip_matched_quotes(trimmed).trim();
    if value.is_empty() || is_absence_sentinel(value) {
        return ImageReference::Absent;
    }

    for rule in &RULES {
        if (rule.applies)(value) {
            return (rule.resolve)(value);
        }
    }
    // The last rule is a catch-all, but keep passthrough as the fallback so
    // the function stays total if the table ever changes.
    ImageReference::Remote(value.to_owned())
}

fn is_data_uri(value: &str) -> bool {
    value.starts_with("data:")
}

fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// Repairs and re-tags a data URI.
///
/// Base64 data URIs corrupted by line-wrapping (newlines inside the payload)
/// are repaired by stripping all whitespace from the payload segment; the
/// header is preserved by re-encoding the parsed mime. Non-base64 data URIs
/// are already canonical and pass through untouched.
fn resolve_data_uri(value: &str) -> ImageReference {
    let Some((header, payload)) = value.split_once(',') else {
        // No payload separator at all; nothing to repair, hand it through.
        return ImageReference::Remote(value.to_owned());
    };
    if !has_base64_marker(header) {
        return ImageReference::Remote(value.to_owned());
    }

    let payload: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
    if payload.is_empty() {
        // An Inline value must carry a non-empty payload; a header with no
        // data is handed through for the renderer to deal with.
        return ImageReference::Remote(value.to_owned());
    }

    let mime = ImageMime::from_data_uri_header(header).unwrap_or(ImageMime::Jpeg);
    ImageReference::Inline { mime, payload }
}

fn resolve_remote_url(value: &str) -> ImageReference {
    ImageReference::Remote(value.to_owned())
}

/// True when the data-URI header ends in a `;base64` marker. The marker is
/// matched case-insensitively; editors paste headers in whatever case their
/// tooling produced.
fn has_base64_marker(header: &str) -> bool {
    header
        .len()
        .checked_sub(";base64".len())
        .and_then(|start| header.get(start..))
        .is_some_and(|suffix| suffix.eq_ignore_ascii_case(";base64"))
}

/// Catch-all: decide whether a header-less string is an image payload.
///
/// The whitespace-stripped value must exceed the length floor and use only
/// the base64 alphabet to be trusted as image data; anything else passes
/// through unchanged so the caller can still attempt to render it.
fn resolve_bare_payload(value: &str) -> ImageReference {
    let stripped: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    if stripped.len() <= MIN_BARE_PAYLOAD_LEN || !stripped.bytes().all(is_base64_byte) {
        return ImageReference::Remote(value.to_owned());
    }
    ImageReference::Inline {
        mime: ImageMime::sniff(&stripped),
        payload: stripped,
    }
}

const fn is_base64_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'+' | b'/' | b'=')
}

fn is_absence_sentinel(value: &str) -> bool {
    ABSENCE_SENTINELS
        .iter()
        .any(|s| value.eq_ignore_ascii_case(s))
}

/// Strips a single layer of wrapping quotes when the first and last character
/// are the same quote character. Unbalanced or single-character strings are
/// returned as-is.
fn strip_matched_quotes(s: &str) -> &str {
    let bytes = s.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && matches!(first, b'\'' | b'"') {
            return &s[1..s.len() - 1];
        }
    }
    s
}

#[cfg(test)]
#[path = "media_test.rs"]
mod tests;
