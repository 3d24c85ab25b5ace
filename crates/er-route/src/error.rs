//! Routing error type.

use thiserror::Error;

use er_core::GeoPoint;

/// Errors produced by route providers and response decoding.
///
/// The detector and synthesizer are total and never produce these.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("no route from {from} to {to}")]
    NoRoute { from: GeoPoint, to: GeoPoint },

    #[error("could not decode routing response: {0}")]
    Decode(String),
}

pub type RouteResult<T> = Result<T, RouteError>;
