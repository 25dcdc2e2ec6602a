use linkstack_config::ConfigError;
use linkstack_core::StackError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Stack error: {0}")]
    Stack(#[from] StackError),

    #[error("Metrics error: {0}")]
    Metrics(#[from] prometheus::Error),

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Element size {0} cannot hold a character (use 1 for bytes or 4 for chars)")]
    UnsupportedElementSize(usize),
}
