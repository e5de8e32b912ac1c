pub mod bridge;
pub mod config;
pub mod constants;
pub mod entry;
pub mod error;
pub mod intent;
pub mod launch;
pub mod models;
pub mod native_host;
pub mod presentation;
#[cfg(feature = "tauri")]
mod shell;
pub mod state;
#[cfg(test)]
mod test_utils;

#[cfg(feature = "tauri")]
pub use shell::run;

use env_logger::{Env, Target};

/// Log to stderr at `level` unless `RUST_LOG` says otherwise.
///
/// Stdout is reserved for bridge frames in the stdio host.
pub fn init_logging(level: &str) {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .target(Target::Stderr)
        .try_init();
}
