//! The request/response channel between the native entry point and the
//! application runtime.
//!
//! One operation is recognized, `getIntentText`. Everything else answers
//! `NotImplemented`, which callers can tell apart from a successful `null`.

pub mod codec;

use crate::constants::{CHANNEL_SUFFIX, METHOD_GET_INTENT_TEXT};
use crate::state::ActivationState;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A call issued by the application runtime
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    pub channel: String,
    pub method: String,
    #[serde(default)]
    pub arguments: Value,
}

impl MethodCall {
    pub fn new(channel: &str, method: &str) -> Self {
        Self {
            channel: channel.to_string(),
            method: method.to_string(),
            arguments: Value::Null,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MethodResponse {
    Success { result: Value },
    NotImplemented,
    Error { code: String, message: String },
}

impl MethodResponse {
    pub fn error(code: &str, message: impl Into<String>) -> Self {
        MethodResponse::Error {
            code: code.to_string(),
            message: message.into(),
        }
    }
}

pub struct BridgeChannel {
    name: String,
}

impl BridgeChannel {
    pub fn new(namespace: &str) -> Self {
        Self {
            name: format!("{namespace}/{CHANNEL_SUFFIX}"),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Answer a call from the current state. Never mutates it.
    pub fn handle(&self, call: &MethodCall, state: &ActivationState) -> MethodResponse {
        if call.channel != self.name {
            debug!("No handler for channel '{}'", call.channel);
            return MethodResponse::NotImplemented;
        }

        match call.method.as_str() {
            METHOD_GET_INTENT_TEXT => {
                debug!("{METHOD_GET_INTENT_TEXT} called, returning: {:?}", state.text());
                MethodResponse::Success {
                    result: Value::from(state.text()),
                }
            }
            other => {
                debug!("Method '{other}' not implemented on {}", self.name);
                MethodResponse::NotImplemented
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_NAMESPACE;
    use serde_json::json;

    fn channel() -> BridgeChannel {
        BridgeChannel::new(DEFAULT_NAMESPACE)
    }

    fn get_text_call() -> MethodCall {
        MethodCall::new("com.textfixer.android/intent", METHOD_GET_INTENT_TEXT)
    }

    #[test]
    fn test_channel_name() {
        assert_eq!(channel().name(), "com.textfixer.android/intent");
        assert_eq!(BridgeChannel::new("org.example").name(), "org.example/intent");
    }

    #[test]
    fn test_get_intent_text_with_text() {
        let mut state = ActivationState::new();
        state.replace(Some("hello".into()));

        let response = channel().handle(&get_text_call(), &state);
        assert_eq!(response, MethodResponse::Success { result: json!("hello") });
    }

    #[test]
    fn test_get_intent_text_without_text_is_null_success() {
        let response = channel().handle(&get_text_call(), &ActivationState::new());
        assert_eq!(response, MethodResponse::Success { result: Value::Null });
    }

    #[test]
    fn test_repeated_reads_return_same_value() {
        let mut state = ActivationState::new();
        state.replace(Some("twice".into()));
        let channel = channel();

        let first = channel.handle(&get_text_call(), &state);
        let second = channel.handle(&get_text_call(), &state);
        assert_eq!(first, second);
        assert_eq!(state.text(), Some("twice"));
    }

    #[test]
    fn test_unknown_method_is_not_implemented() {
        let call = MethodCall::new("com.textfixer.android/intent", "doSomethingElse");
        let response = channel().handle(&call, &ActivationState::new());

        assert_eq!(response, MethodResponse::NotImplemented);
        assert_ne!(response, MethodResponse::Success { result: Value::Null });
    }

    #[test]
    fn test_other_channel_is_not_implemented() {
        let call = MethodCall::new("com.other.app/intent", METHOD_GET_INTENT_TEXT);
        assert_eq!(channel().handle(&call, &ActivationState::new()), MethodResponse::NotImplemented);
    }

    #[test]
    fn test_response_wire_shape() {
        let success = serde_json::to_value(MethodResponse::Success { result: Value::Null }).unwrap();
        assert_eq!(success, json!({"status": "success", "result": null}));

        let missing = serde_json::to_value(MethodResponse::NotImplemented).unwrap();
        assert_eq!(missing, json!({"status": "not_implemented"}));
    }

    #[test]
    fn test_call_arguments_default_to_null() {
        let call: MethodCall =
            serde_json::from_str(r#"{"channel":"a/intent","method":"getIntentText"}"#).unwrap();
        assert_eq!(call.arguments, Value::Null);
    }
}
