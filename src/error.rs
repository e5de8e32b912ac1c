use thiserror::Error;

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Frame too large: {len} bytes (max: {max} bytes)")]
    FrameTooLarge { len: usize, max: usize },

    #[error("Malformed message: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Could not determine project directories")]
    NoProjectDirs,
}

impl AppError {
    /// True when the peer closed the stream mid-frame
    pub fn is_disconnect(&self) -> bool {
        matches!(self, AppError::Io(e) if e.kind() == std::io::ErrorKind::UnexpectedEof)
    }
}

// For Tauri command returns - converts AppError to String
impl From<AppError> for String {
    fn from(e: AppError) -> Self {
        e.to_string()
    }
}
