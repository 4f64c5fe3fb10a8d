//! Build modes.

use serde::{Deserialize, Serialize};

use crate::resolver::errors::ConfigError;

/// Build variant selecting which flag overlay applies.
///
/// Debug stacks on Normal and Profile stacks on Debug. Release is applied
/// instead of Debug/Profile, never on top of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    #[default]
    Normal,
    Debug,
    Profile,
    Release,
}

impl BuildMode {
    /// Every build mode, in a stable order.
    pub const ALL: [BuildMode; 4] = [
        BuildMode::Normal,
        BuildMode::Debug,
        BuildMode::Profile,
        BuildMode::Release,
    ];

    /// Get the mode name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildMode::Normal => "normal",
            BuildMode::Debug => "debug",
            BuildMode::Profile => "profile",
            BuildMode::Release => "release",
        }
    }
}

impl std::str::FromStr for BuildMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "normal" => Ok(BuildMode::Normal),
            "debug" => Ok(BuildMode::Debug),
            "profile" => Ok(BuildMode::Profile),
            "release" => Ok(BuildMode::Release),
            _ => Err(ConfigError::UnknownMode {
                name: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for BuildMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
