//! Domain types and pure transformations for the fare content pipeline.
//!
//! Everything in this crate is synchronous and side-effect-free: the media
//! reference resolver, the structured-field decoder, the contact record
//! shapes they feed, and application configuration. Network access lives in
//! `fare-content`.

pub mod config;
pub mod contact;
pub mod fields;
pub mod media;

mod app_config;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use contact::{BusinessHours, ContactRecord, SocialLinks};
pub use fields::{decode_structured_field, FieldMap, RawField};
pub use media::{resolve_media_ref, ImageMime, ImageReference};
