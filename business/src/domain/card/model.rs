use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Attributes extracted from a graded card's slab label.
///
/// The extraction prompt asks the model for 13 fixed fields (year,
/// manufacturer, set, player names, variant, card number, grade, grading
/// company, cert number, rookie/autograph flags, sport), any of which may
/// be null. The model's output is not validated against that schema: the
/// record is an open map returned to the client verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardRecord(pub Map<String, Value>);

impl CardRecord {
    /// Returns a field as a string, when present and non-null.
    pub fn field_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Short human-readable label for log lines, built from whichever of
    /// the grading fields the model managed to read.
    pub fn label_summary(&self) -> String {
        let parts: Vec<&str> = ["gradingCompany", "grade", "year", "playerLastName"]
            .iter()
            .filter_map(|key| self.field_str(key))
            .collect();

        if parts.is_empty() {
            "unidentified card".to_string()
        } else {
            parts.join(" ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> CardRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn should_summarize_from_grading_fields() {
        let card = record(json!({
            "gradingCompany": "PSA",
            "grade": "10",
            "year": "2020",
            "playerLastName": "DONCIC",
            "isRookie": true,
        }));

        assert_eq!(card.label_summary(), "PSA 10 2020 DONCIC");
    }

    #[test]
    fn should_skip_null_and_missing_fields_in_summary() {
        let card = record(json!({
            "gradingCompany": null,
            "grade": "9.5",
        }));

        assert_eq!(card.label_summary(), "9.5");
    }

    #[test]
    fn should_fall_back_when_nothing_readable() {
        let card = record(json!({ "isAutograph": false }));

        assert_eq!(card.label_summary(), "unidentified card");
    }

    #[test]
    fn should_serialize_transparently() {
        let value = json!({ "year": "2020", "certNumber": "84927163" });
        let card = record(value.clone());

        assert_eq!(serde_json::to_value(&card).unwrap(), value);
    }
}
