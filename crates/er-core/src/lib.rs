//! `er-core`: foundational types for emergency route planning.
//!
//! This crate is a dependency of every other `er-*` crate.  It intentionally
//! has no `er-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `BlockId`                                             |
//! | [`geo`]         | `GeoPoint`, haversine distance, degree-space helpers  |
//! | [`priority`]    | `PriorityClass` enum                                  |
//! | [`rng`]         | `DetourRng`                                           |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod priority;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::GeoPoint;
pub use ids::BlockId;
pub use priority::PriorityClass;
pub use rng::DetourRng;
