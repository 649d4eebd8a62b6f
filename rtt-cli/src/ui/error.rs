//! Terminal UI errors.

/// Errors setting up or drawing to the terminal.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
