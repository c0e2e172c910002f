//! Decoded contact-record shapes consumed by the site footer.

use serde_json::Value;

use crate::fields::{decode_structured_field, FieldMap};

/// Platform keys the footer knows how to render.
pub const SOCIAL_PLATFORMS: [&str; 3] = ["facebook", "google", "tripadvisor"];

/// Hours-of-operation mapping: day name → display value.
///
/// Entries are kept permissively (the store does not enforce value types);
/// [`BusinessHours::entries`] renders non-string values through their JSON
/// form rather than dropping them.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct BusinessHours(FieldMap);

impl BusinessHours {
    /// Decodes the raw store field (object, JSON string, or null/absent).
    #[must_use]
    pub fn decode(raw: Option<&Value>) -> Self {
        Self(decode_structured_field(raw))
    }

    /// True when no hours are available; callers render a placeholder.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Day/display pairs in stored order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, String)> {
        self.0.iter().map(|(day, value)| {
            let display = value
                .as_str()
                .map_or_else(|| value.to_string(), str::to_owned);
            (day.as_str(), display)
        })
    }
}

/// Social-link mapping: platform key → URL.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct SocialLinks(FieldMap);

impl SocialLinks {
    /// Decodes the raw store field (object, JSON string, or null/absent).
    #[must_use]
    pub fn decode(raw: Option<&Value>) -> Self {
        Self(decode_structured_field(raw))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Link for an arbitrary platform key. Non-string entries read as absent.
    #[must_use]
    pub fn url(&self, platform: &str) -> Option<&str> {
        self.0.get(platform).and_then(Value::as_str)
    }

    #[must_use]
    pub fn facebook(&self) -> Option<&str> {
        self.url("facebook")
    }

    #[must_use]
    pub fn google(&self) -> Option<&str> {
        self.url("google")
    }

    #[must_use]
    pub fn tripadvisor(&self) -> Option<&str> {
        self.url("tripadvisor")
    }
}

/// The singleton contact record after structured-field decoding.
///
/// Scalar fields pass through from the store row untouched; absence of the
/// whole record is a distinct state (see `fare-content`'s loader) from a
/// present record whose fields are all null.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct ContactRecord {
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub business_hours: BusinessHours,
    pub social_links: SocialLinks,
    pub maps_link: Option<String>,
}

impl ContactRecord {
    /// Address split on embedded line breaks for multi-line display.
    /// Empty when no address is present.
    pub fn address_lines(&self) -> impl Iterator<Item = &str> {
        self.address.as_deref().unwrap_or_default().lines()
    }
}
