use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A typed extra value attached to an activation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Extra {
    String(String),
    /// Styled or structured short text; readable as a char sequence but not as a plain string
    CharSequence(String),
    Bool(bool),
    Int(i64),
    Null,
}

/// Label assigned to an activation by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    ProcessText,
    Send,
    Other,
}

/// Platform-delivered activation: an action identifier plus named extras
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationEvent {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub extras: BTreeMap<String, Extra>,
}

impl ActivationEvent {
    pub fn new(action: Option<&str>) -> Self {
        Self {
            action: action.map(str::to_string),
            extras: BTreeMap::new(),
        }
    }

    pub fn with_extra(mut self, key: &str, value: Extra) -> Self {
        self.extras.insert(key.to_string(), value);
        self
    }

    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// Read an extra as a char sequence. Plain strings qualify too.
    pub fn char_sequence_extra(&self, key: &str) -> Option<&str> {
        match self.extras.get(key)? {
            Extra::String(s) | Extra::CharSequence(s) => Some(s),
            Extra::Bool(_) | Extra::Int(_) | Extra::Null => None,
        }
    }

    /// Read an extra as a plain string. Only `Extra::String` qualifies.
    pub fn string_extra(&self, key: &str) -> Option<&str> {
        match self.extras.get(key)? {
            Extra::String(s) => Some(s),
            Extra::CharSequence(_) | Extra::Bool(_) | Extra::Int(_) | Extra::Null => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_sequence_extra_accepts_both_text_kinds() {
        let event = ActivationEvent::new(Some("x"))
            .with_extra("a", Extra::String("plain".into()))
            .with_extra("b", Extra::CharSequence("styled".into()))
            .with_extra("c", Extra::Null);

        assert_eq!(event.char_sequence_extra("a"), Some("plain"));
        assert_eq!(event.char_sequence_extra("b"), Some("styled"));
        assert_eq!(event.char_sequence_extra("c"), None);
        assert_eq!(event.char_sequence_extra("missing"), None);
    }

    #[test]
    fn test_string_extra_rejects_char_sequence() {
        let event = ActivationEvent::new(Some("x"))
            .with_extra("a", Extra::String("plain".into()))
            .with_extra("b", Extra::CharSequence("styled".into()))
            .with_extra("c", Extra::Int(3));

        assert_eq!(event.string_extra("a"), Some("plain"));
        assert_eq!(event.string_extra("b"), None);
        assert_eq!(event.string_extra("c"), None);
    }

    #[test]
    fn test_event_deserializes_without_extras() {
        let event: ActivationEvent = serde_json::from_str(r#"{"action":"SEND"}"#).unwrap();
        assert_eq!(event.action(), Some("SEND"));
        assert!(event.extras.is_empty());
    }

    #[test]
    fn test_extra_json_shape() {
        let json = serde_json::to_value(Extra::CharSequence("hi".into())).unwrap();
        assert_eq!(json, serde_json::json!({"type": "char_sequence", "value": "hi"}));

        let null: Extra = serde_json::from_str(r#"{"type":"null"}"#).unwrap();
        assert_eq!(null, Extra::Null);
    }
}
