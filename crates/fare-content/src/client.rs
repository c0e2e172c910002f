use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use fare_core::AppConfig;

use crate::error::ContentError;
use crate::types::ContactRow;

/// Table holding the singleton contact record.
pub const CONTACT_TABLE: &str = "contact_info";

/// HTTP client for the content store's REST query API.
///
/// The store exposes a generic query-by-table surface
/// (`GET {base}/rest/v1/{table}?select=*`) authenticated with an anonymous
/// API key. Only reads are needed; there is no filtering, pagination, or
/// write path.
pub struct ContentClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ContentClient {
    /// Creates a `ContentClient` with configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(
        base_url: &str,
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ContentError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            api_key: api_key.to_owned(),
        })
    }

    /// Creates a `ContentClient` from loaded application configuration.
    ///
    /// # Errors
    ///
    /// Same as [`ContentClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, ContentError> {
        Self::new(
            &config.content_store_url,
            &config.content_api_key,
            config.http_timeout_secs,
            &config.user_agent,
        )
    }

    /// Fetches all rows of `table` as raw JSON values.
    ///
    /// Rows come back untyped so each caller can decode as permissively as
    /// its table requires.
    ///
    /// # Errors
    ///
    /// - [`ContentError::TableNotFound`] — HTTP 404.
    /// - [`ContentError::UnexpectedStatus`] — any other non-2xx status.
    /// - [`ContentError::Http`] — network or TLS failure.
    /// - [`ContentError::Deserialize`] — body is not a JSON array.
    pub async fn fetch_rows(&self, table: &str) -> Result<Vec<Value>, ContentError> {
        let url = format!("{}/rest/v1/{table}?select=*", self.base_url);
        let response = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ContentError::TableNotFound {
                table: table.to_owned(),
            });
        }
        if !status.is_success() {
            return Err(ContentError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<Vec<Value>>(&body).map_err(|e| ContentError::Deserialize {
            context: format!("rows from table {table}"),
            source: e,
        })
    }

    /// Fetches the singleton contact record with maybe-single semantics:
    /// zero rows is `None`, otherwise the first row is the record.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`ContentClient::fetch_rows`], plus
    /// [`ContentError::Deserialize`] if the row is not an object.
    pub async fn fetch_contact_row(&self) -> Result<Option<ContactRow>, ContentError> {
        let rows = self.fetch_rows(CONTACT_TABLE).await?;
        let Some(first) = rows.into_iter().next() else {
            return Ok(None);
        };
        let row =
            serde_json::from_value::<ContactRow>(first).map_err(|e| ContentError::Deserialize {
                context: format!("{CONTACT_TABLE} row"),
                source: e,
            })?;
        Ok(Some(row))
    }
}
