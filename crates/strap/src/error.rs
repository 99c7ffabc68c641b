//! CLI error types.

use strap_config::ConfigError;
use strap_html::HelperError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Helper(#[from] HelperError),

    #[error("Invalid page script: {0}")]
    Page(String),
}
