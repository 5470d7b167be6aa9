use serde::{Deserialize, Serialize};

/// Represents a single phonebook entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Store-assigned identifier (hyphenated UUID)
    pub id: String,
    pub name: String,
    pub number: String,
}

/// Request body for creating or updating a person.
///
/// Both fields are optional on the wire so that a missing field reaches
/// validation instead of being rejected by the JSON extractor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
}

impl PersonPayload {
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            number: Some(number.into()),
        }
    }
}

/// JSON error body returned for client errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_missing_fields_deserialize_as_none() {
        let payload: PersonPayload = serde_json::from_str(r#"{"name": "Arto Hellas"}"#).unwrap();
        assert_eq!(payload.name.as_deref(), Some("Arto Hellas"));
        assert!(payload.number.is_none());

        let empty: PersonPayload = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, PersonPayload::default());
    }

    #[test]
    fn test_payload_null_field_is_none() {
        let payload: PersonPayload =
            serde_json::from_str(r#"{"name": null, "number": "040-123456"}"#).unwrap();
        assert!(payload.name.is_none());
        assert_eq!(payload.number.as_deref(), Some("040-123456"));
    }

    #[test]
    fn test_person_wire_shape() {
        let person = Person {
            id: "5c3e1c2a-0000-4000-8000-000000000001".to_string(),
            name: "Ada Lovelace".to_string(),
            number: "39-44-5323523".to_string(),
        };
        let json = serde_json::to_value(&person).unwrap();
        assert_eq!(json["id"], "5c3e1c2a-0000-4000-8000-000000000001");
        assert_eq!(json["name"], "Ada Lovelace");
        assert_eq!(json["number"], "39-44-5323523");
    }
}
