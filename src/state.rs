use log::warn;
use std::sync::{Arc, Mutex, MutexGuard};

/// Most recently extracted activation text.
///
/// Written once per activation, read by the bridge channel. Reads never clear it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ActivationState {
    text: Option<String>,
}

impl ActivationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Overwrite with the text of the latest activation, absent included.
    pub fn replace(&mut self, text: Option<String>) {
        self.text = text;
    }
}

/// State shared across threads by hosts that dispatch off the main thread
pub type SharedState = Arc<Mutex<ActivationState>>;

/// Lock a mutex, recovering from poisoning if necessary
pub fn safe_lock<'a, T>(mutex: &'a Mutex<T>, context: &str) -> MutexGuard<'a, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            warn!("{context} mutex was poisoned, recovering");
            poisoned.into_inner()
        }
    }
}
