//! Credential configuration.
//!
//! Loads RTT API credentials from the environment or the per-user config
//! file, prompting for them on first run.

mod credentials;
mod error;
mod prompt;

pub use credentials::{CredentialStore, Credentials, PASSWORD_VAR, USERNAME_VAR, config_dir};
pub use error::ConfigError;
pub use prompt::prompt_for_credentials;

/// Credentials from the environment, the store, or a first-run prompt.
///
/// Environment credentials are never written to disk, and with them set
/// the store location is never resolved.
pub fn load_or_prompt() -> Result<Credentials, ConfigError> {
    resolve(Credentials::from_env(), CredentialStore::default_location)
}

fn resolve(
    from_env: Option<Credentials>,
    store: impl FnOnce() -> Result<CredentialStore, ConfigError>,
) -> Result<Credentials, ConfigError> {
    if let Some(credentials) = from_env {
        tracing::debug!("Using credentials from environment");
        return Ok(credentials);
    }

    let store = store()?;
    match store.load()? {
        Some(credentials) => Ok(credentials),
        None => prompt_for_credentials(&store),
    }
}
