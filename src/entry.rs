//! The native entry point: sequences activation handling and routes bridge calls.

use crate::bridge::{BridgeChannel, MethodCall, MethodResponse};
use crate::config::Config;
use crate::intent::{classify, extract};
use crate::models::ActivationEvent;
use crate::presentation::{apply_presentation, select, PassthroughStyle, PresentationMode, PresentationTarget, WindowSettings};
use crate::state::ActivationState;
use log::debug;

/// Handle one activation against `state`.
///
/// Presentation is applied before the text is stored, so the window is
/// configured before the runtime can ask for anything.
pub fn handle_activation(
    event: Option<&ActivationEvent>,
    target: Option<&dyn PresentationTarget>,
    style: PassthroughStyle,
    state: &mut ActivationState,
) -> PresentationMode {
    let kind = classify(event);
    debug!(
        "Handling activation with action: {:?} ({kind:?})",
        event.and_then(ActivationEvent::action)
    );

    let mode = select(kind);
    apply_presentation(target, &WindowSettings::for_mode(mode, style));

    let text = extract(event, kind);
    debug!("Extracted text: {text:?}");
    state.replace(text);

    mode
}

pub struct EntryPoint {
    state: ActivationState,
    mode: Option<PresentationMode>,
    style: PassthroughStyle,
    channel: BridgeChannel,
}

impl EntryPoint {
    pub fn new(config: &Config) -> Self {
        Self {
            state: ActivationState::new(),
            mode: None,
            style: config.presentation.passthrough_style,
            channel: BridgeChannel::new(&config.general.namespace),
        }
    }

    /// Cold start
    pub fn on_create(
        &mut self,
        event: Option<&ActivationEvent>,
        target: Option<&dyn PresentationTarget>,
    ) -> PresentationMode {
        debug!("Entry point created");
        self.activate(event, target)
    }

    /// Warm re-activation of a running instance. Replaces whatever the last one left.
    pub fn on_new_activation(
        &mut self,
        event: Option<&ActivationEvent>,
        target: Option<&dyn PresentationTarget>,
    ) -> PresentationMode {
        debug!("Entry point re-activated");
        self.activate(event, target)
    }

    fn activate(
        &mut self,
        event: Option<&ActivationEvent>,
        target: Option<&dyn PresentationTarget>,
    ) -> PresentationMode {
        let mode = handle_activation(event, target, self.style, &mut self.state);
        self.mode = Some(mode);
        mode
    }

    pub fn handle_call(&self, call: &MethodCall) -> MethodResponse {
        self.channel.handle(call, &self.state)
    }

    pub fn state(&self) -> &ActivationState {
        &self.state
    }

    /// Mode of the latest activation; `None` before the first one
    pub fn mode(&self) -> Option<PresentationMode> {
        self.mode
    }

    pub fn channel(&self) -> &BridgeChannel {
        &self.channel
    }
}
