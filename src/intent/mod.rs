//! Classification and text extraction for inbound activations.
//!
//! Both functions are pure: they never fail and never touch state. The caller
//! stores the extracted text.

use crate::constants::{ACTION_PROCESS_TEXT, ACTION_SEND, EXTRA_PROCESS_TEXT, EXTRA_TEXT};
use crate::models::{ActionKind, ActivationEvent};

impl ActionKind {
    /// Map an action identifier to its kind. Short aliases are accepted.
    pub fn from_action(action: &str) -> Self {
        match action {
            ACTION_PROCESS_TEXT | "PROCESS_TEXT" => ActionKind::ProcessText,
            ACTION_SEND | "SEND" => ActionKind::Send,
            _ => ActionKind::Other,
        }
    }

    /// True for the kinds that carry text to process
    pub fn is_text_action(self) -> bool {
        matches!(self, ActionKind::ProcessText | ActionKind::Send)
    }
}

/// Label an activation. A missing event or action is `Other`.
pub fn classify(event: Option<&ActivationEvent>) -> ActionKind {
    event
        .and_then(ActivationEvent::action)
        .map_or(ActionKind::Other, ActionKind::from_action)
}

/// Pull the text payload for `kind` out of the event, trimmed.
pub fn extract(event: Option<&ActivationEvent>, kind: ActionKind) -> Option<String> {
    let event = event?;
    let raw = match kind {
        ActionKind::ProcessText => event.char_sequence_extra(EXTRA_PROCESS_TEXT),
        ActionKind::Send => event.string_extra(EXTRA_TEXT),
        ActionKind::Other => None,
    };
    raw.map(|text| text.trim().to_string())
}
