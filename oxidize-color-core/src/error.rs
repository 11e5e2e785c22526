use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("Hex color must start with '#'")]
    MissingHash,

    #[error("Invalid hex color length: expected 7 characters, got {0}")]
    InvalidLength(usize),

    #[error("Invalid hex digit '{found}' at position {position}")]
    InvalidHexDigit { position: usize, found: char },

    #[error("Unknown color format: {0}")]
    UnknownFormat(String),
}

pub type Result<T> = std::result::Result<T, ColorError>;
