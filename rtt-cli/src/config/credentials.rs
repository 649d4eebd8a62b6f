//! Credential storage.
//!
//! Credentials live in a single JSON file, `~/.config/rtt-cli/config.json`.
//! A missing file is not an error: it means the tool has not been set up.

use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::error::ConfigError;

/// Directory under the home directory holding the config file and log.
const APP_DIR: &str = "rtt-cli";

/// Config file name.
const CONFIG_FILE: &str = "config.json";

/// Environment variable overriding the stored username.
pub const USERNAME_VAR: &str = "RTT_USERNAME";

/// Environment variable overriding the stored password.
pub const PASSWORD_VAR: &str = "RTT_PASSWORD";

/// RTT API username and password.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Credentials from `RTT_USERNAME` / `RTT_PASSWORD`, if both are set.
    pub fn from_env() -> Option<Self> {
        Self::from_vars(
            std::env::var(USERNAME_VAR).ok(),
            std::env::var(PASSWORD_VAR).ok(),
        )
    }

    fn from_vars(username: Option<String>, password: Option<String>) -> Option<Self> {
        match (username, password) {
            (Some(username), Some(password)) if !username.is_empty() => {
                Some(Self::new(username, password))
            }
            _ => None,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// `~/.config/rtt-cli`, holding the config file and the log file.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(home.join(".config").join(APP_DIR))
}

/// The credentials file.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    /// A store backed by the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The store at `~/.config/rtt-cli/config.json`.
    pub fn default_location() -> Result<Self, ConfigError> {
        Ok(Self::new(config_dir()?.join(CONFIG_FILE)))
    }

    /// Get the config file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load stored credentials.
    ///
    /// Returns `None` if the file doesn't exist. An unreadable or corrupt
    /// file is an error.
    pub fn load(&self) -> Result<Option<Credentials>, ConfigError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No stored credentials");
                return Ok(None);
            }
            Err(e) => return Err(ConfigError::io("failed to read", &self.path, e)),
        };

        let credentials = serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })?;

        Ok(Some(credentials))
    }

    /// Save credentials, creating the directory if needed.
    ///
    /// On unix the directory is created 0700 and the file written 0600.
    pub fn save(&self, credentials: &Credentials) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            create_private_dir(parent)
                .map_err(|e| ConfigError::io("failed to create directory", parent, e))?;
        }

        let json = serde_json::to_string_pretty(credentials).map_err(ConfigError::Serialize)?;

        write_private_file(&self.path, json.as_bytes())
            .map_err(|e| ConfigError::io("failed to write", &self.path, e))?;

        info!(path = %self.path.display(), "Saved credentials");
        Ok(())
    }

    /// Delete stored credentials.
    ///
    /// Returns whether a file was removed; a missing file is not an error.
    pub fn reset(&self) -> Result<bool, ConfigError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                info!(path = %self.path.display(), "Removed credentials");
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(ConfigError::io("failed to remove", &self.path, e)),
        }
    }
}

#[cfg(unix)]
fn create_private_dir(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    std::fs::DirBuilder::new()
        .recursive(true)
        .mode(0o700)
        .create(path)
}

#[cfg(not(unix))]
fn create_private_dir(path: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(path)
}

#[cfg(unix)]
fn write_private_file(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::OpenOptionsExt;
    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    file.write_all(contents)
}

#[cfg(not(unix))]
fn write_private_file(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    std::fs::write(path, contents)
}
