//! Error types for the planning session.

use er_core::{BlockId, CoreError};
use er_route::RouteError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("{0} point has not been set")]
    MissingEndpoint(&'static str),

    #[error("no active route")]
    NoActiveRoute,

    #[error("no live blocked point with id {0}")]
    UnknownBlock(BlockId),

    #[error("block ids exhausted after {0}")]
    IdsExhausted(BlockId),

    #[error("dispatch configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("routing failed: {0}")]
    Route(#[from] RouteError),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
