//! Command-line launch arguments shared by the stdio host and the desktop shell.
//!
//! The platform (a share target, a context-menu action, a shim script) starts
//! the process with the activation encoded as flags.

use crate::config::{Config, ConfigSource};
use crate::constants::{EXTRA_PROCESS_TEXT, EXTRA_TEXT};
use crate::models::{ActionKind, ActivationEvent, Extra};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Default, Parser)]
#[command(name = "textfixer")]
#[command(author, version, about, long_about = None)]
pub struct LaunchArgs {
    /// Action identifier of the activation (e.g. android.intent.action.SEND)
    #[arg(long)]
    pub action: Option<String>,

    /// Text payload carried by the activation
    #[arg(long)]
    pub text: Option<String>,

    /// Path to config file (defaults to the platform config dir)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the bridge channel namespace
    #[arg(long)]
    pub namespace: Option<String>,

    /// Override the log level
    #[arg(long)]
    pub log_level: Option<String>,
}

impl LaunchArgs {
    /// The activation the process was started with. `None` when neither flag was given.
    pub fn event(&self) -> Option<ActivationEvent> {
        if self.action.is_none() && self.text.is_none() {
            return None;
        }

        let mut event = ActivationEvent::new(self.action.as_deref());
        if let Some(text) = &self.text {
            // Place the payload where the platform would for this action
            let (key, value) = match ActionKind::from_action(self.action.as_deref().unwrap_or_default()) {
                ActionKind::ProcessText => (EXTRA_PROCESS_TEXT, Extra::CharSequence(text.clone())),
                ActionKind::Send | ActionKind::Other => (EXTRA_TEXT, Extra::String(text.clone())),
            };
            event = event.with_extra(key, value);
        }
        Some(event)
    }

    /// Parse `argv`, falling back to no flags at all when it does not parse.
    ///
    /// The parse error is handed back so it can be logged once logging is up.
    pub fn parse_lenient<I, T>(argv: I) -> (Self, Option<clap::Error>)
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(argv) {
            Ok(args) => (args, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Load config from `--config` or the default path, then apply overrides.
    ///
    /// The returned source is for logging after `init_logging`.
    pub fn config(&self) -> (Config, ConfigSource) {
        let (mut config, source) = Config::resolve(self.config.as_deref());
        if let Some(namespace) = &self.namespace {
            config.general.namespace.clone_from(namespace);
        }
        if let Some(level) = &self.log_level {
            config.general.log_level.clone_from(level);
        }
        (config, source)
    }
}
