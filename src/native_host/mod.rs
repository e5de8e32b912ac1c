use crate::bridge::{codec, MethodCall, MethodResponse};
use crate::entry::EntryPoint;
use crate::error::AppError;
use crate::models::ActivationEvent;
use crate::presentation::PresentationTarget;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::io::{self, Read, Write};

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IncomingMessage {
    /// Delivered by the platform shim when the running instance is re-activated
    Activation(ActivationEvent),
    /// Issued by the application runtime; always answered
    MethodCall(MethodCall),
}

/// Serves the bridge over stdio, one frame at a time
pub struct NativeHost<'a> {
    entry: EntryPoint,
    target: Option<&'a dyn PresentationTarget>,
}

impl<'a> NativeHost<'a> {
    pub fn new(entry: EntryPoint, target: Option<&'a dyn PresentationTarget>) -> Self {
        Self { entry, target }
    }

    pub fn run(&mut self) -> Result<(), AppError> {
        let mut reader = io::stdin().lock();
        let mut writer = io::stdout().lock();
        self.serve(&mut reader, &mut writer)
    }

    /// Handle frames until the peer closes the stream
    pub fn serve<R: Read, W: Write>(&mut self, reader: &mut R, writer: &mut W) -> Result<(), AppError> {
        while let Some(body) = codec::read_frame(reader)? {
            debug!("Received {} bytes", body.len());
            if let Some(response) = self.handle_frame(&body) {
                codec::write_message(writer, &response)?;
            }
        }

        info!("Connection closed");
        Ok(())
    }

    fn handle_frame(&mut self, body: &[u8]) -> Option<MethodResponse> {
        match codec::decode::<IncomingMessage>(body) {
            Ok(message) => self.handle_message(message),
            Err(e) => {
                warn!("Dropping frame: {e}");
                Some(MethodResponse::error("bad_message", e.to_string()))
            }
        }
    }

    fn handle_message(&mut self, message: IncomingMessage) -> Option<MethodResponse> {
        match message {
            IncomingMessage::Activation(event) => {
                self.entry.on_new_activation(Some(&event), self.target);
                None
            }
            IncomingMessage::MethodCall(call) => Some(self.entry.handle_call(&call)),
        }
    }

    pub fn entry(&self) -> &EntryPoint {
        &self.entry
    }
}
