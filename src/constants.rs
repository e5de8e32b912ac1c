// src/constants.rs

/// Action identifier for "process selected text" activations
pub const ACTION_PROCESS_TEXT: &str = "android.intent.action.PROCESS_TEXT";

/// Action identifier for "share text" activations
pub const ACTION_SEND: &str = "android.intent.action.SEND";

/// Extra carrying the selected text of a PROCESS_TEXT activation
pub const EXTRA_PROCESS_TEXT: &str = "android.intent.extra.PROCESS_TEXT";

/// Extra carrying the shared text of a SEND activation
pub const EXTRA_TEXT: &str = "android.intent.extra.TEXT";

/// Namespace prefixed to the bridge channel name
pub const DEFAULT_NAMESPACE: &str = "com.textfixer.android";

/// Suffix of the bridge channel name (`<namespace>/intent`)
pub const CHANNEL_SUFFIX: &str = "intent";

/// The one operation the bridge channel answers
pub const METHOD_GET_INTENT_TEXT: &str = "getIntentText";

/// Maximum frame body accepted by the native host (1 MiB, the native-messaging limit)
pub const MAX_FRAME_SIZE: usize = 1024 * 1024;

/// Logical size of the main window when it is not collapsed (width, height)
pub const MAIN_WINDOW_SIZE: (f64, f64) = (420.0, 600.0);
