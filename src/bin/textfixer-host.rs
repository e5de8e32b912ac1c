//! Stdio host for the TextFixer bridge
//!
//! Started by the platform with the activation encoded as flags. Answers
//! `getIntentText` calls and takes re-activations from stdin using
//! native-messaging framing until the connection is closed.

use clap::Parser;
use log::{error, info};
use textfixer_lib::{
    entry::EntryPoint, init_logging, launch::LaunchArgs, native_host::NativeHost,
    presentation::HeadlessTarget,
};

fn main() {
    let args = LaunchArgs::parse();
    let (config, source) = args.config();
    init_logging(&config.general.log_level);
    source.log();

    let target = HeadlessTarget::new();
    let mut entry = EntryPoint::new(&config);
    let mode = entry.on_create(args.event().as_ref(), Some(&target));
    info!("Serving {} in {mode:?} mode", entry.channel().name());

    let mut host = NativeHost::new(entry, Some(&target));

    // Run the native host event loop
    // This will read from stdin and write to stdout until the connection is closed
    if let Err(e) = host.run() {
        // EOF mid-frame just means the runtime went away
        if !e.is_disconnect() {
            error!("Native host error: {e}");
            std::process::exit(1);
        }
    }
}
