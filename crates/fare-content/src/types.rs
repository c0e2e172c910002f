//! Raw content-store row shapes.
//!
//! Every column is `#[serde(default)]`: the store's tables have drifted over
//! time and rows routinely miss columns, carry nulls, or hold JSON-encoded
//! strings where objects are expected. Missing data must degrade, never fail
//! deserialization. The structured columns stay as raw [`Value`]s here; the
//! loader collapses them through `fare-core`'s field decoder.

use serde::Deserialize;
use serde_json::Value;

/// The singleton `contact_info` row as stored.
#[derive(Debug, Deserialize)]
pub struct ContactRow {
    #[serde(default)]
    pub id: Option<String>,

    /// May contain embedded line breaks for multi-line display.
    #[serde(default)]
    pub address: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    /// Object, JSON-encoded string, or null; decoded by the loader.
    #[serde(default)]
    pub business_hours: Option<Value>,

    /// Object, JSON-encoded string, or null; decoded by the loader.
    #[serde(default)]
    pub social_links: Option<Value>,

    #[serde(default)]
    pub maps_link: Option<String>,
}

/// A row of the `features` table ("Why Choose Us" cards).
#[derive(Debug, Deserialize)]
pub struct FeatureRow {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub icon_name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub display_order: Option<i64>,
    /// Rows missing the flag are treated as active.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

/// A row of the `stats` table (headline numbers).
#[derive(Debug, Deserialize)]
pub struct StatRow {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub icon_name: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub display_order: Option<i64>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

/// A row of the `testimonials` table (guest quotes).
#[derive(Debug, Deserialize)]
pub struct TestimonialRow {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// Star count out of five.
    #[serde(default)]
    pub rating: Option<i64>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

/// Default for `is_active` when the column is absent. Serde's `default`
/// attribute needs a function path, not a const.
fn default_active() -> bool {
    true
}
