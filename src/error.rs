use thiserror::Error;

use crate::action::Action;

/// Everything that can stop a dispatch after the arguments were accepted.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("unknown action `{0}`")]
    UnknownAction(String),
    /// Listed in the usage text but the server has no payload shape for it.
    #[error("action `{0}` has no payload template")]
    MissingTemplate(Action),
    #[error("failed to encode payload")]
    Encode(#[from] serde_json::Error),
    #[error("request failed")]
    Network(#[from] reqwest::Error),
    #[error("failed to write output")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DispatchError>;
