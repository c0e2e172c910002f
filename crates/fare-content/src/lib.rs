//! Content-store access for the fare site: the HTTP client, the contact-info
//! loader with its notification seam, and the page-section loaders.

pub mod client;
pub mod error;
pub mod loader;
pub mod notify;
pub mod sections;
pub mod types;

pub use client::{ContentClient, CONTACT_TABLE};
pub use error::ContentError;
pub use loader::{
    load_contact_info, ContactLoad, CONTACT_UNAVAILABLE_BODY, CONTACT_UNAVAILABLE_TITLE,
};
pub use notify::{Notice, Notifier, Severity, TracingNotifier};
pub use sections::{load_features, load_stats, load_testimonials, Feature, Stat, Testimonial};
pub use types::{ContactRow, FeatureRow, StatRow, TestimonialRow};
