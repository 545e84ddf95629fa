use std::{fmt, str::FromStr};
use thiserror::Error;

/// The kind of request offered by the maps web services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Geocode,
    /// Recognized but not implemented.
    Directions,
}

impl Operation {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Geocode => "geocode",
            Self::Directions => "directions",
        }
    }

    pub const fn is_supported(self) -> bool {
        matches!(self, Self::Geocode)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("Unknown operation '{0}' (expected directions/geocode)")]
pub struct ParseOperationError(String);

impl FromStr for Operation {
    type Err = ParseOperationError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "geocode" => Ok(Self::Geocode),
            "directions" => Ok(Self::Directions),
            _ => Err(ParseOperationError(s.to_string())),
        }
    }
}
