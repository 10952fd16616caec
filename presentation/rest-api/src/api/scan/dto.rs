use serde::{Deserialize, Serialize};

use business::domain::card::model::CardRecord;

/// Body of `POST /scan-card`.
///
/// Fields are optional at the wire level so presence can be validated with
/// the contract's own error message instead of a decoder error.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanCardRequest {
    /// Base64-encoded image bytes
    #[serde(default)]
    pub image: Option<String>,
    /// Declared media type of the image (e.g. "image/jpeg")
    #[serde(default, rename = "mimeType")]
    pub mime_type: Option<String>,
}

/// Success envelope: the extracted record, verbatim, under `data`.
#[derive(Debug, Serialize)]
pub struct ScanCardResponse {
    pub success: bool,
    pub data: CardRecord,
}
