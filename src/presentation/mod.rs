//! Window presentation for an activation.
//!
//! Text activations run in passthrough mode so the shell does not cover the
//! app the user came from before the runtime draws its own UI.

use crate::constants::MAIN_WINDOW_SIZE;
use crate::models::ActionKind;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::cell::Cell;

#[cfg(feature = "tauri")]
mod webview;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresentationMode {
    /// Opaque, focusable window
    Interactive,
    /// Transparent window that stays out of the way
    Passthrough,
}

/// How passthrough mode is rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassthroughStyle {
    /// Transparent and never takes focus
    #[default]
    TransparentUnfocusable,
    /// Transparent and lets pointer input fall through
    TransparentNonTouchable,
    /// Transparent, unfocusable and collapsed to zero size
    ZeroSize,
}

/// Concrete configuration written to the native window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSettings {
    pub transparent: bool,
    pub focusable: bool,
    pub accepts_pointer_input: bool,
    pub zero_size: bool,
}

impl WindowSettings {
    pub fn for_mode(mode: PresentationMode, style: PassthroughStyle) -> Self {
        match (mode, style) {
            (PresentationMode::Interactive, _) => Self {
                transparent: false,
                focusable: true,
                accepts_pointer_input: true,
                zero_size: false,
            },
            (PresentationMode::Passthrough, PassthroughStyle::TransparentUnfocusable) => Self {
                transparent: true,
                focusable: false,
                accepts_pointer_input: true,
                zero_size: false,
            },
            (PresentationMode::Passthrough, PassthroughStyle::TransparentNonTouchable) => Self {
                transparent: true,
                focusable: true,
                accepts_pointer_input: false,
                zero_size: false,
            },
            (PresentationMode::Passthrough, PassthroughStyle::ZeroSize) => Self {
                transparent: true,
                focusable: false,
                accepts_pointer_input: false,
                zero_size: true,
            },
        }
    }

    /// Logical (width, height) the window should have under these settings
    pub fn logical_size(self) -> (f64, f64) {
        if self.zero_size {
            (0.0, 0.0)
        } else {
            MAIN_WINDOW_SIZE
        }
    }
}

/// Text activations pass through; everything else gets the normal window.
pub fn select(kind: ActionKind) -> PresentationMode {
    match kind {
        ActionKind::ProcessText | ActionKind::Send => PresentationMode::Passthrough,
        ActionKind::Other => PresentationMode::Interactive,
    }
}

/// A native window that can take presentation settings
pub trait PresentationTarget {
    fn apply(&self, settings: &WindowSettings) -> Result<(), Box<dyn std::error::Error>>;
}

/// Write `settings` to the window, if there is one.
///
/// Never fails: a missing handle is a no-op and target errors are logged.
pub fn apply_presentation(target: Option<&dyn PresentationTarget>, settings: &WindowSettings) {
    let Some(target) = target else {
        debug!("No window handle available, skipping presentation");
        return;
    };

    if let Err(e) = target.apply(settings) {
        warn!("Failed to apply window presentation: {e}");
    }
}

/// Target for processes without a window of their own (the stdio host).
///
/// Records the last settings so callers and tests can observe them.
#[derive(Debug, Default)]
pub struct HeadlessTarget {
    applied: Cell<Option<WindowSettings>>,
}

impl HeadlessTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn applied(&self) -> Option<WindowSettings> {
        self.applied.get()
    }
}

impl PresentationTarget for HeadlessTarget {
    fn apply(&self, settings: &WindowSettings) -> Result<(), Box<dyn std::error::Error>> {
        debug!("Headless presentation: {settings:?}");
        self.applied.set(Some(*settings));
        Ok(())
    }
}
