//! Error type shared by the environment adapters and config loading.
//!
//! None of these reach the user: the controller logs them and falls back
//! to the light theme or skips the failed write.

/// Failure reported by a storage/document adapter or by config parsing.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// `window` or `window.localStorage` is not reachable (SSR, sandboxed iframe).
    #[error("local storage unavailable")]
    StorageUnavailable,
    /// A storage call threw (quota exceeded, access denied).
    #[error("local storage error: {0}")]
    Storage(String),
    /// `window.document` or its root element is not reachable.
    #[error("document unavailable")]
    DocumentUnavailable,
    /// A DOM call threw.
    #[error("dom error: {0}")]
    Dom(String),
    /// A theme name other than `light` or `dark`.
    #[error("invalid theme: {0:?}")]
    InvalidTheme(String),
    /// Malformed JSON configuration.
    #[error("invalid theme config: {0}")]
    Config(#[from] serde_json::Error),
}
