use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value, json};

use business::domain::card::errors::CardError;
use business::domain::card::model::CardRecord;
use business::domain::card::services::CardScannerService;

use crate::client::AnthropicClient;

const MODEL: &str = "claude-sonnet-4-20250514";
const MAX_TOKENS: u32 = 1000;

const EXTRACTION_PROMPT: &str = r#"Analyze this graded sports card image and extract the following information. Respond ONLY with a JSON object, no other text or markdown:

{
  "year": "YYYY",
  "manufacturer": "company name (e.g., PANINI, TOPPS, UPPER DECK)",
  "set": "set name (e.g., SELECT, PRIZM, CHROME, MUSEUM COLLECTION)",
  "playerFirstName": "player's first name",
  "playerLastName": "player's last name",
  "variant": "card variant/parallel (e.g., TIE-DYE, SILVER PRIZM, BASE, RELIC-GOLD)",
  "cardNumber": "card number from the label (e.g., #SS-MR, #123)",
  "grade": "numeric grade only (e.g., 9, 10, 9.5)",
  "gradingCompany": "PSA, BGS, CGC, or SGC",
  "certNumber": "certification number",
  "isRookie": true or false,
  "isAutograph": true or false,
  "sport": "Basketball, Soccer, Baseball, Football, or Hockey"
}

Look carefully at the grading label at the top of the card for: year, manufacturer, set name, player name, variant, card number, grade, and certification number.
If any field cannot be determined, use null."#;

/// Reply envelope of the Messages API: a list of typed content blocks.
#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

pub struct CardScannerClaude {
    client: AnthropicClient,
}

impl CardScannerClaude {
    pub fn new(client: AnthropicClient) -> Self {
        Self { client }
    }

    /// Removes markdown code-fence markers the model sometimes wraps its
    /// JSON in (```json or bare ```, each with an optional trailing
    /// newline), then trims surrounding whitespace. Idempotent.
    fn strip_code_fences(text: &str) -> String {
        let stripped = regex::Regex::new(r"```(?:json)?\n?")
            .map(|re| re.replace_all(text, "").into_owned())
            .unwrap_or_else(|_| text.to_string());
        stripped.trim().to_string()
    }

    /// First textual content block of a Messages API reply, if any.
    fn text_content(response: &MessagesResponse) -> Option<&str> {
        response
            .content
            .iter()
            .find(|block| block.kind == "text")
            .and_then(|block| block.text.as_deref())
    }

    fn parse_record(text: &str) -> Result<CardRecord, CardError> {
        let clean = Self::strip_code_fences(text);

        match serde_json::from_str::<Map<String, Value>>(&clean) {
            Ok(fields) => Ok(CardRecord(fields)),
            Err(_) => {
                tracing::error!("Failed to parse card JSON: {}", clean);
                Err(CardError::UnparsableResponse)
            }
        }
    }
}

#[async_trait]
impl CardScannerService for CardScannerClaude {
    async fn scan(&self, image_base64: &str, mime_type: &str) -> Result<CardRecord, CardError> {
        let body = json!({
            "model": MODEL,
            "max_tokens": MAX_TOKENS,
            "messages": [{
                "role": "user",
                "content": [
                    {
                        "type": "image",
                        "source": {
                            "type": "base64",
                            "media_type": mime_type,
                            "data": image_base64,
                        },
                    },
                    {
                        "type": "text",
                        "text": EXTRACTION_PROMPT,
                    },
                ],
            }],
        });

        let response = self
            .client
            .client
            .post(self.client.messages_url())
            .header("Content-Type", "application/json")
            .header("x-api-key", &self.client.api_key)
            .header("anthropic-version", self.client.api_version())
            .json(&body)
            .send()
            .await
            .map_err(|err| CardError::unexpected(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Claude API error: {}", error_text);
            return Err(CardError::UpstreamStatus(status.as_u16()));
        }

        let data: MessagesResponse = response
            .json()
            .await
            .map_err(|err| CardError::unexpected(err.to_string()))?;

        let text = Self::text_content(&data).ok_or(CardError::EmptyResponse)?;

        Self::parse_record(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_strip_json_fence() {
        let clean = CardScannerClaude::strip_code_fences("```json\n{\"grade\": \"10\"}\n```");

        assert_eq!(clean, "{\"grade\": \"10\"}");
    }

    #[test]
    fn should_strip_bare_fence() {
        let clean = CardScannerClaude::strip_code_fences("```\n{\"grade\": \"10\"}\n```");

        assert_eq!(clean, "{\"grade\": \"10\"}");
    }

    #[test]
    fn should_leave_unfenced_text_alone() {
        let clean = CardScannerClaude::strip_code_fences("  {\"grade\": \"10\"}  ");

        assert_eq!(clean, "{\"grade\": \"10\"}");
    }

    #[test]
    fn should_strip_fences_idempotently() {
        let once = CardScannerClaude::strip_code_fences("```json\n{\"a\":1}\n```");
        let twice = CardScannerClaude::strip_code_fences(&once);

        assert_eq!(once, twice);
    }

    #[test]
    fn should_parse_same_object_from_all_fence_styles() {
        let fenced_json = CardScannerClaude::parse_record("```json\n{\"year\":\"2020\"}\n```");
        let fenced = CardScannerClaude::parse_record("```\n{\"year\":\"2020\"}\n```");
        let bare = CardScannerClaude::parse_record("{\"year\":\"2020\"}");

        let expected = bare.unwrap();
        assert_eq!(fenced_json.unwrap(), expected);
        assert_eq!(fenced.unwrap(), expected);
    }

    #[test]
    fn should_reject_non_json_text() {
        let result = CardScannerClaude::parse_record("sorry, I cannot read this");

        assert!(matches!(
            result.unwrap_err(),
            CardError::UnparsableResponse
        ));
    }

    #[test]
    fn should_reject_non_object_json() {
        let result = CardScannerClaude::parse_record("[\"2020\", \"PANINI\"]");

        assert!(matches!(
            result.unwrap_err(),
            CardError::UnparsableResponse
        ));
    }

    fn messages_response(value: Value) -> MessagesResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn should_take_first_text_block() {
        let data = messages_response(json!({
            "content": [
                { "type": "image", "source": {} },
                { "type": "text", "text": "{}" },
                { "type": "text", "text": "ignored" },
            ]
        }));

        assert_eq!(CardScannerClaude::text_content(&data), Some("{}"));
    }

    #[test]
    fn should_report_missing_text_block() {
        let data = messages_response(json!({
            "content": [
                { "type": "image", "source": {} },
            ]
        }));

        assert_eq!(CardScannerClaude::text_content(&data), None);
    }
}
