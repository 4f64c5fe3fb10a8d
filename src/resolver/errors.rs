//! Configuration resolution errors.

use thiserror::Error;

use crate::core::mode::BuildMode;
use crate::core::platform::PlatformId;

/// Error raised while selecting or rendering a platform configuration.
///
/// All variants are local validation failures. None of them are transient,
/// so callers should report them rather than retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unsupported platform `{name}`")]
    UnsupportedPlatform { name: String },

    #[error("unknown build mode `{name}`")]
    UnknownMode { name: String },

    #[error("template `{template}` is not available for platform `{platform}`")]
    TemplateUnavailable {
        template: &'static str,
        platform: PlatformId,
    },

    #[error("placeholder `{placeholder}` was not substituted")]
    UnboundPlaceholder { placeholder: String },

    #[error("unknown placeholder `{token}`")]
    UnknownPlaceholder { token: String },
}

impl ConfigError {
    /// A one-line hint to print after the error, if there is one.
    pub fn help(&self) -> Option<String> {
        match self {
            ConfigError::UnsupportedPlatform { .. } => Some(format!(
                "supported platforms: {}",
                PlatformId::ALL
                    .iter()
                    .map(|p| p.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
            ConfigError::UnknownMode { .. } => Some(format!(
                "build modes: {}",
                BuildMode::ALL
                    .iter()
                    .map(|m| m.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
            ConfigError::TemplateUnavailable { .. } => {
                Some("only the windows profile defines a resource compiler".to_string())
            }
            ConfigError::UnboundPlaceholder { placeholder } => Some(format!(
                "bind it with `--set {}=<value>`",
                placeholder.trim_matches('$')
            )),
            ConfigError::UnknownPlaceholder { .. } => None,
        }
    }
}
