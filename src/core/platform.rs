//! Supported target platforms.

use serde::{Deserialize, Serialize};

use crate::resolver::errors::ConfigError;

/// Target platform selector.
///
/// The set is closed: anything else is rejected at parse time with
/// [`ConfigError::UnsupportedPlatform`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformId {
    /// macOS with a GNU-style compiler driver
    #[serde(alias = "macos", alias = "osx")]
    Darwin,
    /// Linux with GCC
    Linux,
    /// Windows with MinGW
    #[serde(alias = "win32", alias = "mingw")]
    Windows,
}

impl PlatformId {
    /// Every supported platform, in a stable order.
    pub const ALL: [PlatformId; 3] = [PlatformId::Darwin, PlatformId::Linux, PlatformId::Windows];

    /// Get the platform name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformId::Darwin => "darwin",
            PlatformId::Linux => "linux",
            PlatformId::Windows => "windows",
        }
    }

    /// Detect the platform the process is running on.
    ///
    /// Returns `None` on hosts that have no profile.
    pub fn host() -> Option<Self> {
        match std::env::consts::OS {
            "macos" => Some(PlatformId::Darwin),
            "linux" => Some(PlatformId::Linux),
            "windows" => Some(PlatformId::Windows),
            _ => None,
        }
    }
}

impl std::str::FromStr for PlatformId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "darwin" | "macos" | "osx" => Ok(PlatformId::Darwin),
            "linux" => Ok(PlatformId::Linux),
            "windows" | "win32" | "mingw" => Ok(PlatformId::Windows),
            _ => Err(ConfigError::UnsupportedPlatform {
                name: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for PlatformId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_platform_names() {
        assert_eq!("darwin".parse::<PlatformId>().unwrap(), PlatformId::Darwin);
        assert_eq!("macOS".parse::<PlatformId>().unwrap(), PlatformId::Darwin);
        assert_eq!("linux".parse::<PlatformId>().unwrap(), PlatformId::Linux);
        assert_eq!("mingw".parse::<PlatformId>().unwrap(), PlatformId::Windows);
    }

    #[test]
    fn test_parse_unsupported_platform() {
        let err = "Solaris".parse::<PlatformId>().unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnsupportedPlatform {
                name: "Solaris".to_string()
            }
        );
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for platform in PlatformId::ALL {
            assert_eq!(platform.to_string().parse::<PlatformId>().unwrap(), platform);
        }
    }
}
