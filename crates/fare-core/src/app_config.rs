#[derive(Clone)]
pub struct AppConfig {
    pub content_store_url: String,
    pub content_api_key: String,
    pub log_level: String,
    pub http_timeout_secs: u64,
    pub user_agent: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("content_store_url", &self.content_store_url)
            .field("content_api_key", &"[redacted]")
            .field("log_level", &self.log_level)
            .field("http_timeout_secs", &self.http_timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
