//! Credential store error types.

use std::path::PathBuf;

/// Errors reading, writing or prompting for credentials.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No home directory to keep the config file in
    #[error("could not determine home directory")]
    NoHomeDir,

    /// Config file could not be read, written or removed
    #[error("{action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file exists but is not valid credentials JSON
    #[error("corrupt config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Credentials could not be serialized
    #[error("failed to serialize credentials: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Reading from the console failed or was cancelled
    #[error("failed to read credentials: {0}")]
    Prompt(#[source] std::io::Error),
}

impl ConfigError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ConfigError::io(
            "failed to read",
            "/home/user/.config/rtt-cli/config.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied"),
        );
        assert_eq!(
            err.to_string(),
            "failed to read /home/user/.config/rtt-cli/config.json: permission denied"
        );

        assert_eq!(
            ConfigError::NoHomeDir.to_string(),
            "could not determine home directory"
        );
    }
}
