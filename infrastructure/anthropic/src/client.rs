use reqwest::Client;

/// Shared Anthropic HTTP client configuration.
///
/// No timeout is configured: the scan flow suspends on the single outbound
/// call until the API responds or the transport gives up.
pub struct AnthropicClient {
    pub client: Client,
    pub api_key: String,
    pub base_url: String,
}

impl AnthropicClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: "https://api.anthropic.com/v1".to_string(),
        }
    }

    /// Returns the Messages API endpoint URL.
    pub fn messages_url(&self) -> String {
        format!("{}/messages", self.base_url)
    }

    /// API version pinned for the Messages API wire format.
    pub fn api_version(&self) -> &'static str {
        "2023-06-01"
    }
}
