/// Configuration for Anthropic API access.
pub struct AnthropicConfig {
    pub api_key: String,
}

impl AnthropicConfig {
    /// Reads `ANTHROPIC_API_KEY` from the environment.
    ///
    /// A missing key is not rejected at startup: the first scan request
    /// surfaces it as an upstream authentication failure.
    pub fn from_env() -> Self {
        let api_key = std::env::var("ANTHROPIC_API_KEY").unwrap_or_default();
        Self { api_key }
    }
}
