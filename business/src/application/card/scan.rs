use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::card::errors::CardError;
use crate::domain::card::model::CardRecord;
use crate::domain::card::services::CardScannerService;
use crate::domain::card::use_cases::scan::{ScanCardParams, ScanCardUseCase};
use crate::domain::logger::Logger;

pub struct ScanCardUseCaseImpl {
    pub scanner: Arc<dyn CardScannerService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ScanCardUseCase for ScanCardUseCaseImpl {
    async fn execute(&self, params: ScanCardParams) -> Result<CardRecord, CardError> {
        // Presence is the only validation: no size limit, no mime allow-list.
        if params.image.is_empty() || params.mime_type.is_empty() {
            return Err(CardError::MissingInput);
        }

        self.logger.info("Scanning card image");

        let record = self.scanner.scan(&params.image, &params.mime_type).await?;

        self.logger
            .info(&format!("Card data extracted: {}", record.label_summary()));

        Ok(record)
    }
}
