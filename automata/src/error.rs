//! Errors raised while decoding a model file.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading a [`ControlSystem`](crate::ControlSystem)
/// from a model file.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Unable to read model file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed model file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Automaton '{automaton}' uses event '{event}' that is not in the event list")]
    UnknownEvent { automaton: String, event: String },
}
