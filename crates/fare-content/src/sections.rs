//! Feature, stat, and testimonial page sections.
//!
//! The `features`, `stats`, and `testimonials` tables are optional: when
//! they are missing,
//! empty, or unreadable, the page renders built-in defaults instead of an
//! error. Section failures are data-quality degradation, not availability
//! failures, so they log a warning and never emit a notification.

use serde_json::Value;

use crate::client::ContentClient;
use crate::types::{FeatureRow, StatRow, TestimonialRow};

pub const FEATURES_TABLE: &str = "features";
pub const STATS_TABLE: &str = "stats";
pub const TESTIMONIALS_TABLE: &str = "testimonials";

/// A "Why Choose Us" card. `icon_name` is a key into the presentation
/// layer's icon table, carried as an opaque string here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    pub icon_name: String,
    pub title: String,
    pub description: String,
}

/// A headline number ("25+ Years Experience").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub icon_name: String,
    pub value: String,
    pub label: String,
}

/// A guest quote. Unlike features and stats, testimonials carry no display
/// order; they render in stored order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Testimonial {
    pub name: String,
    pub rating: i64,
    pub text: String,
}

/// The cards shown when the store has nothing usable.
#[must_use]
pub fn default_features() -> Vec<Feature> {
    [
        (
            "Utensils",
            "Authentic Recipes",
            "Traditional Thai dishes passed down through generations",
        ),
        (
            "Heart",
            "Fresh Ingredients",
            "Daily sourced premium ingredients for the perfect taste",
        ),
        (
            "Globe",
            "Thai Culture",
            "Experience the warmth of Thai hospitality and tradition",
        ),
    ]
    .into_iter()
    .map(|(icon_name, title, description)| Feature {
        icon_name: icon_name.to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
    })
    .collect()
}

/// The numbers shown when the store has nothing usable.
#[must_use]
pub fn default_stats() -> Vec<Stat> {
    [
        ("Star", "4.9", "Rating"),
        ("Clock", "25+", "Years Experience"),
        ("Users", "10K+", "Happy Customers"),
        ("Award", "15+", "Awards Won"),
    ]
    .into_iter()
    .map(|(icon_name, value, label)| Stat {
        icon_name: icon_name.to_owned(),
        value: value.to_owned(),
        label: label.to_owned(),
    })
    .collect()
}

/// The quotes shown when the store has nothing usable. All five stars, as
/// marketing copy tends to be.
#[must_use]
pub fn default_testimonials() -> Vec<Testimonial> {
    [
        (
            "Sarah Johnson",
            "The best Thai food I've ever had! The pad thai is absolutely incredible.",
        ),
        (
            "Michael Chen",
            "Authentic flavors and amazing service. This place feels like Thailand!",
        ),
        (
            "Emma Davis",
            "Every dish is a masterpiece. The atmosphere is so warm and welcoming.",
        ),
    ]
    .into_iter()
    .map(|(name, text)| Testimonial {
        name: name.to_owned(),
        rating: 5,
        text: text.to_owned(),
    })
    .collect()
}

/// Loads the feature cards, falling back to [`default_features`] when the
/// table errors, is empty, or decodes to nothing usable.
pub async fn load_features(client: &ContentClient) -> Vec<Feature> {
    match client.fetch_rows(FEATURES_TABLE).await {
        Ok(rows) => {
            let decoded = decode_features(rows);
            if decoded.is_empty() {
                default_features()
            } else {
                decoded
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "falling back to default features");
            default_features()
        }
    }
}

/// Loads the headline stats, falling back to [`default_stats`] when the
/// table errors, is empty, or decodes to nothing usable.
pub async fn load_stats(client: &ContentClient) -> Vec<Stat> {
    match client.fetch_rows(STATS_TABLE).await {
        Ok(rows) => {
            let decoded = decode_stats(rows);
            if decoded.is_empty() {
                default_stats()
            } else {
                decoded
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "falling back to default stats");
            default_stats()
        }
    }
}

/// Loads the guest quotes, falling back to [`default_testimonials`] when the
/// table errors, is empty, or decodes to nothing usable.
pub async fn load_testimonials(client: &ContentClient) -> Vec<Testimonial> {
    match client.fetch_rows(TESTIMONIALS_TABLE).await {
        Ok(rows) => {
            let decoded = decode_testimonials(rows);
            if decoded.is_empty() {
                default_testimonials()
            } else {
                decoded
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "falling back to default testimonials");
            default_testimonials()
        }
    }
}

/// Decodes feature rows permissively: unreadable rows are skipped, inactive
/// rows filtered out, remaining rows sorted by display order (rows with no
/// order sort last). A row without a title carries nothing renderable and is
/// dropped.
fn decode_features(rows: Vec<Value>) -> Vec<Feature> {
    let mut parsed: Vec<FeatureRow> = rows
        .into_iter()
        .filter_map(|row| serde_json::from_value(row).ok())
        .filter(|row: &FeatureRow| row.is_active)
        .collect();
    parsed.sort_by_key(|row| row.display_order.unwrap_or(i64::MAX));

    parsed
        .into_iter()
        .filter_map(|row| {
            Some(Feature {
                icon_name: row.icon_name.unwrap_or_else(|| "Utensils".to_owned()),
                title: row.title?,
                description: row.description.unwrap_or_default(),
            })
        })
        .collect()
}

/// Decodes stat rows with the same skip/filter/sort policy as
/// [`decode_features`]. A row without a value is dropped.
fn decode_stats(rows: Vec<Value>) -> Vec<Stat> {
    let mut parsed: Vec<StatRow> = rows
        .into_iter()
        .filter_map(|row| serde_json::from_value(row).ok())
        .filter(|row: &StatRow| row.is_active)
        .collect();
    parsed.sort_by_key(|row| row.display_order.unwrap_or(i64::MAX));

    parsed
        .into_iter()
        .filter_map(|row| {
            Some(Stat {
                icon_name: row.icon_name.unwrap_or_else(|| "Star".to_owned()),
                value: row.value?,
                label: row.label.unwrap_or_default(),
            })
        })
        .collect()
}

/// Decodes testimonial rows: skip unreadable, filter inactive, no sorting
/// (the table has no display order). A row without its quote text carries
/// nothing renderable and is dropped; a missing rating reads as five stars,
/// matching the built-in entries.
fn decode_testimonials(rows: Vec<Value>) -> Vec<Testimonial> {
    rows.into_iter()
        .filter_map(|row| serde_json::from_value::<TestimonialRow>(row).ok())
        .filter(|row| row.is_active)
        .filter_map(|row| {
            Some(Testimonial {
                name: row.name.unwrap_or_default(),
                rating: row.rating.unwrap_or(5),
                text: row.text?,
            })
        })
        .collect()
}
