//! Tauri shell: runs the activation on the launch arguments, configures the
//! main window before it is shown, and exposes the bridge as commands.
//!
//! On desktop a second launch is forwarded to the running instance, which
//! re-runs the activation and emits [`INTENT_ACTIVATED`] to the page.

use crate::bridge::{BridgeChannel, MethodCall, MethodResponse};
use crate::constants::MAIN_WINDOW_SIZE;
use crate::entry::handle_activation;
use crate::intent::classify;
use crate::launch::LaunchArgs;
use crate::presentation::{select, PassthroughStyle, WindowSettings};
use crate::state::{safe_lock, ActivationState, SharedState};
use log::{error, info, warn};
use std::sync::{Arc, Mutex};
use tauri::{App, Manager, State, WebviewUrl, WebviewWindow, WebviewWindowBuilder};

/// Event emitted to the page after the text has been replaced by a re-activation
pub const INTENT_ACTIVATED: &str = "intent-activated";

const MAIN_WINDOW: &str = "main";

#[tauri::command]
fn intent_channel(
    call: MethodCall,
    channel: State<'_, BridgeChannel>,
    state: State<'_, SharedState>,
) -> MethodResponse {
    let state = safe_lock(&state, "Activation state");
    channel.handle(&call, &state)
}

/// Name the page must address `intent_channel` calls to
#[tauri::command]
fn intent_channel_name(channel: State<'_, BridgeChannel>) -> String {
    channel.name().to_string()
}

/// Build the main window hidden, with transparency fixed up front
fn build_main_window(app: &App, settings: &WindowSettings) -> tauri::Result<WebviewWindow> {
    let builder = WebviewWindowBuilder::new(app, MAIN_WINDOW, WebviewUrl::default());

    #[cfg(desktop)]
    let builder = {
        let (width, height) = MAIN_WINDOW_SIZE;
        builder
            .title("TextFixer")
            .inner_size(width, height)
            .center()
            .visible(false)
            .decorations(!settings.transparent)
    };

    #[cfg(all(desktop, not(target_os = "macos")))]
    let builder = builder.transparent(settings.transparent);

    #[cfg(mobile)]
    let _ = (settings, MAIN_WINDOW_SIZE);

    builder.build()
}

fn setup(app: &mut App, args: &LaunchArgs, style: PassthroughStyle) -> Result<(), Box<dyn std::error::Error>> {
    let event = args.event();
    let mode = select(classify(event.as_ref()));
    let window = build_main_window(app, &WindowSettings::for_mode(mode, style))?;

    let mut state = ActivationState::new();
    handle_activation(event.as_ref(), Some(&window), style, &mut state);
    info!("Activated in {mode:?} mode");

    app.manage::<SharedState>(Arc::new(Mutex::new(state)));

    #[cfg(desktop)]
    window.show()?;

    Ok(())
}

/// Run a forwarded launch against the live window and state
#[cfg(desktop)]
fn reactivate(app: &tauri::AppHandle, argv: &[String]) {
    use crate::presentation::PresentationMode;
    use tauri::Emitter;

    let (args, arg_error) = LaunchArgs::parse_lenient(argv);
    if let Some(e) = arg_error {
        warn!("Ignoring forwarded launch arguments: {e}");
    }

    let (Some(shared), Some(window)) = (app.try_state::<SharedState>(), app.get_webview_window(MAIN_WINDOW)) else {
        warn!("Re-activation arrived before setup finished; dropping it");
        return;
    };
    let style = app
        .try_state::<PassthroughStyle>()
        .map(|style| *style)
        .unwrap_or_default();

    let event = args.event();
    let mode = {
        let mut state = safe_lock(&shared, "Activation state");
        handle_activation(event.as_ref(), Some(&window), style, &mut state)
    };
    info!("Re-activated in {mode:?} mode");

    if mode == PresentationMode::Interactive {
        if let Err(e) = window.set_focus() {
            warn!("Failed to focus main window: {e}");
        }
    }
    if let Err(e) = app.emit(INTENT_ACTIVATED, ()) {
        warn!("Failed to notify page of re-activation: {e}");
    }
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let (args, arg_error) = LaunchArgs::parse_lenient(std::env::args_os());
    let (config, source) = args.config();
    crate::init_logging(&config.general.log_level);
    if let Some(e) = arg_error {
        warn!("Ignoring launch arguments: {e}");
    }
    source.log();

    let channel = BridgeChannel::new(&config.general.namespace);
    let style = config.presentation.passthrough_style;
    info!("Serving {}", channel.name());

    let builder = tauri::Builder::default();

    // Must be the first plugin so a second launch exits before doing any work
    #[cfg(desktop)]
    let builder = builder.plugin(tauri_plugin_single_instance::init(|app, argv, _cwd| {
        reactivate(app, &argv);
    }));

    let result = builder
        .manage(channel)
        .manage(style)
        .setup(move |app| setup(app, &args, style))
        .invoke_handler(tauri::generate_handler![intent_channel, intent_channel_name])
        .run(tauri::generate_context!());

    if let Err(e) = result {
        error!("Error while running tauri application: {e}");
    }
}
