//! Error type shared by the sandbox, its configuration layer and the window facade.

use thiserror::Error;

/// Everything that can go wrong while configuring or driving the sandbox.
#[derive(Error, Debug)]
pub enum SandboxError {
    /// A named color was requested that is not in the configured color table.
    #[error("unknown color name: {0}")]
    UnknownColor(String),

    /// A random color was requested but the color table is empty.
    #[error("color table is empty")]
    EmptyColorTable,

    /// A random draw was requested from an inverted range.
    #[error("cannot sample from empty range [{lo}, {hi}]")]
    EmptyRange { lo: i32, hi: i32 },

    #[error("invalid settings document: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("could not read settings file: {0}")]
    Io(#[from] std::io::Error),

    /// Window creation or the event loop failed.
    #[error("window error: {0}")]
    Window(#[from] ggez::GameError),
}

pub type SandboxResult<T> = std::result::Result<T, SandboxError>;

impl From<SandboxError> for ggez::GameError {
    fn from(err: SandboxError) -> Self {
        match err {
            SandboxError::Window(inner) => inner,
            other => ggez::GameError::CustomError(other.to_string()),
        }
    }
}
