use async_trait::async_trait;

use crate::domain::card::errors::CardError;
use crate::domain::card::model::CardRecord;

pub struct ScanCardParams {
    pub image: String,
    pub mime_type: String,
}

#[async_trait]
pub trait ScanCardUseCase: Send + Sync {
    async fn execute(&self, params: ScanCardParams) -> Result<CardRecord, CardError>;
}
