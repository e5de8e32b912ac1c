pub mod activation;

pub use activation::{ActionKind, ActivationEvent, Extra};
