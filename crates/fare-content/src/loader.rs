//! One-shot contact-info loading.
//!
//! [`load_contact_info`] performs exactly one store request, decodes the two
//! structured columns through `fare-core`'s field decoder, and reports
//! absence with exactly one notification. Every failure mode collapses to
//! [`ContactLoad::Absent`]; no error reaches the caller. Each call is an
//! independent attempt with no retry, caching, or deduplication, so a
//! second call after a failure emits its own notification.

use fare_core::{BusinessHours, ContactRecord, SocialLinks};

use crate::client::ContentClient;
use crate::notify::{Notice, Notifier, Severity};
use crate::types::ContactRow;

pub const CONTACT_UNAVAILABLE_TITLE: &str = "Contact Info Unavailable";
pub const CONTACT_UNAVAILABLE_BODY: &str =
    "Unable to load contact or business hours information from the database.";

/// Outcome of one load attempt. The tri-state's "loading" leg is the
/// not-yet-awaited future; once resolved the record is either absent or
/// present (possibly with all-null fields, which is a distinct state).
#[derive(Debug, Clone, PartialEq)]
pub enum ContactLoad {
    Absent,
    Present(ContactRecord),
}

impl ContactLoad {
    #[must_use]
    pub fn record(&self) -> Option<&ContactRecord> {
        match self {
            Self::Absent => None,
            Self::Present(record) => Some(record),
        }
    }
}

/// Fetches and decodes the singleton contact record.
///
/// On transport/store failure or when no row exists, emits one error-severity
/// notification through `notifier` and returns [`ContactLoad::Absent`].
/// Malformed structured fields are a data-quality issue, not an availability
/// one: they degrade silently to empty mappings inside the decoder.
pub async fn load_contact_info(
    client: &ContentClient,
    notifier: &dyn Notifier,
) -> ContactLoad {
    match client.fetch_contact_row().await {
        Ok(Some(row)) => ContactLoad::Present(record_from_row(row)),
        Ok(None) => {
            tracing::warn!("contact_info table returned no rows");
            report_unavailable(notifier);
            ContactLoad::Absent
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to fetch contact info");
            report_unavailable(notifier);
            ContactLoad::Absent
        }
    }
}

fn report_unavailable(notifier: &dyn Notifier) {
    notifier.notify(Notice {
        title: CONTACT_UNAVAILABLE_TITLE.to_owned(),
        body: CONTACT_UNAVAILABLE_BODY.to_owned(),
        severity: Severity::Error,
    });
}

/// Decodes a raw store row into a [`ContactRecord`]: the two structured
/// columns go through the field decoder, scalar columns pass through
/// untouched. The hours and links fields are independent; decode order does
/// not matter.
#[must_use]
pub fn record_from_row(row: ContactRow) -> ContactRecord {
    ContactRecord {
        address: row.address,
        phone: row.phone,
        email: row.email,
        business_hours: BusinessHours::decode(row.business_hours.as_ref()),
        social_links: SocialLinks::decode(row.social_links.as_ref()),
        maps_link: row.maps_link,
    }
}
