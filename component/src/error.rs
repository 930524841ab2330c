//! Host error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    #[error("failed to create <{tag}>: {message}")]
    CreateElement { tag: String, message: String },

    #[error("failed to append child: {0}")]
    Append(String),

    #[error("hierarchy request: <{child}> is an ancestor of <{parent}>")]
    Hierarchy { parent: String, child: String },

    #[error("no document available")]
    NoDocument,
}
