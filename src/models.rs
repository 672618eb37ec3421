//! Frontend Models
//!
//! Data structures matching the confession endpoints' wire format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single confession record as stored by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Confession {
    pub id: String,
    pub title: String,
    pub confession: String,
    pub timestamp: DateTime<Utc>,
}

/// Request payload for the write endpoint
#[derive(Debug, Serialize)]
pub struct NewConfession<'a> {
    pub title: &'a str,
    pub confession: &'a str,
}

/// Read endpoint response: `{ "body": { "Items": [...] } }`
#[derive(Debug, Deserialize)]
pub struct ListEnvelope {
    pub body: ListBody,
}

#[derive(Debug, Deserialize)]
pub struct ListBody {
    #[serde(rename = "Items")]
    pub items: Vec<Confession>,
}

/// Write endpoint response: `body` is itself a JSON-encoded string holding
/// the created record, so decoding takes a second parse step. The inner
/// parse must stay separate to match the endpoint's framing.
#[derive(Debug, Deserialize)]
pub struct SubmitEnvelope {
    pub body: String,
}

impl SubmitEnvelope {
    pub fn into_confession(self) -> Result<Confession, String> {
        serde_json::from_str(&self.body).map_err(|e| e.to_string())
    }
}

/// Per-field validation messages shown under the form inputs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    pub title: String,
    pub confession: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_envelope_decode() {
        let raw = r#"{
            "body": {
                "Items": [
                    {
                        "id": "a1",
                        "title": "First",
                        "confession": "Something",
                        "timestamp": "2024-05-01T09:00:00Z"
                    }
                ]
            }
        }"#;

        let envelope: ListEnvelope = serde_json::from_str(raw).unwrap();
        assert_eq!(envelope.body.items.len(), 1);
        assert_eq!(envelope.body.items[0].id, "a1");
        assert_eq!(envelope.body.items[0].title, "First");
    }

    #[test]
    fn test_submit_envelope_two_stage_decode() {
        // The outer body field carries the record as an encoded string
        let raw = r#"{"body":"{\"id\":\"x5\",\"title\":\"T\",\"confession\":\"C\",\"timestamp\":\"2024-05-01T10:30:00Z\"}"}"#;

        let envelope: SubmitEnvelope = serde_json::from_str(raw).unwrap();
        let created = envelope.into_confession().unwrap();
        assert_eq!(created.id, "x5");
        assert_eq!(created.title, "T");
        assert_eq!(created.confession, "C");
    }

    #[test]
    fn test_submit_envelope_rejects_non_json_body() {
        let envelope: SubmitEnvelope =
            serde_json::from_str(r#"{"body":"not json"}"#).unwrap();
        assert!(envelope.into_confession().is_err());
    }

    #[test]
    fn test_new_confession_payload_shape() {
        let payload = serde_json::to_string(&NewConfession {
            title: "T",
            confession: "C",
        })
        .unwrap();
        assert_eq!(payload, r#"{"title":"T","confession":"C"}"#);
    }
}
