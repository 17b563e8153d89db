//! Relocation mode and source naming convention definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a screenshot is put into its game folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelocationMode {
    /// Move the file, removing it from the source (default).
    #[default]
    Move,
    /// Copy the file and leave the source untouched.
    Copy,
}

impl fmt::Display for RelocationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelocationMode::Move => write!(f, "move"),
            RelocationMode::Copy => write!(f, "copy"),
        }
    }
}

impl FromStr for RelocationMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "move" => Ok(RelocationMode::Move),
            "copy" => Ok(RelocationMode::Copy),
            _ => Err(format!("Unknown relocation mode: {}", s)),
        }
    }
}

/// Filename convention used by the files in a source directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamingConvention {
    /// `<game name> <M_D_YYYY>...` as written by the capture tool.
    Capture,
    /// `<app id>_<rest>` as written by the platform client.
    Platform,
}

impl fmt::Display for NamingConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamingConvention::Capture => write!(f, "capture"),
            NamingConvention::Platform => write!(f, "platform"),
        }
    }
}

impl FromStr for NamingConvention {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "capture" => Ok(NamingConvention::Capture),
            "platform" | "steam" => Ok(NamingConvention::Platform),
            _ => Err(format!("Unknown naming convention: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_modes() {
        assert_eq!("Move".parse::<RelocationMode>().unwrap(), RelocationMode::Move);
        assert_eq!("copy".parse::<RelocationMode>().unwrap(), RelocationMode::Copy);
        assert!("delete".parse::<RelocationMode>().is_err());
    }

    #[test]
    fn test_parse_conventions() {
        assert_eq!(
            "capture".parse::<NamingConvention>().unwrap(),
            NamingConvention::Capture
        );
        assert_eq!(
            "steam".parse::<NamingConvention>().unwrap(),
            NamingConvention::Platform
        );
        assert!("xbox".parse::<NamingConvention>().is_err());
    }
}
