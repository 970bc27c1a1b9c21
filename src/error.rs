//! Error types.

use thiserror::Error;

use crate::pipeline::NodeKind;

#[derive(Debug, Error)]
pub enum Error {
    #[error("translation pipeline has no middleware")]
    EmptyPipeline,

    #[error("no middleware handled {kind} node (class: {})", .class.as_deref().unwrap_or("none"))]
    UnhandledNode {
        kind: NodeKind,
        class: Option<String>,
    },

    #[error("render error: {0}")]
    Render(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
