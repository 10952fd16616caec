use std::sync::Arc;

use logger::TracingLogger;

use anthropic::card_scanner::CardScannerClaude;
use anthropic::client::AnthropicClient;

use business::application::card::scan::ScanCardUseCaseImpl;
use business::domain::card::use_cases::scan::ScanCardUseCase;

use crate::config::anthropic_config::AnthropicConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub scan_use_case: Arc<dyn ScanCardUseCase>,
}

impl DependencyContainer {
    pub fn new() -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let anthropic_config = AnthropicConfig::from_env();
        let anthropic_client = AnthropicClient::new(anthropic_config.api_key);
        let card_scanner = Arc::new(CardScannerClaude::new(anthropic_client));

        let scan_use_case = Arc::new(ScanCardUseCaseImpl {
            scanner: card_scanner,
            logger,
        });

        Self {
            health_api,
            scan_use_case,
        }
    }
}
