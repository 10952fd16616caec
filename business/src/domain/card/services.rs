use async_trait::async_trait;

use super::errors::CardError;
use super::model::CardRecord;

/// Service port for extracting card attributes from a graded card photo.
///
/// `image_base64` is the raw base64 payload and `mime_type` its declared
/// media type; neither is inspected before being handed to the provider.
#[async_trait]
pub trait CardScannerService: Send + Sync {
    async fn scan(&self, image_base64: &str, mime_type: &str) -> Result<CardRecord, CardError>;
}
