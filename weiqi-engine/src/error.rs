use std::fmt;

/// Why a stone could not be placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoError {
    GameOver,
    Overwrite,
    Suicide,
    NotOnBoard,
    KoViolation,
}

impl fmt::Display for GoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoError::GameOver => write!(f, "game over"),
            GoError::Overwrite => write!(f, "overwrite"),
            GoError::Suicide => write!(f, "suicide"),
            GoError::NotOnBoard => write!(f, "not on board"),
            GoError::KoViolation => write!(f, "ko violation"),
        }
    }
}

impl std::error::Error for GoError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    SizeOutOfRange { size: u8, min: u8, max: u8 },
    Malformed(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::SizeOutOfRange { size, min, max } => {
                write!(f, "board size {size} is outside {min}..={max}")
            }
            ConfigError::Malformed(reason) => write!(f, "malformed config: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Malformed(e.to_string())
    }
}
