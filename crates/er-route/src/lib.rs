//! `er-route`: blocked-route detection and detour synthesis.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`blockage`] | `BlockedPoint`, `is_blocked`, `first_blocking`             |
//! | [`detour`]   | `base_curve`, `synthesize_detour`                          |
//! | [`provider`] | `RouteProvider` trait, `Route`, `StraightLineProvider`     |
//! | [`osrm`]     | OSRM response decoding (feature = `"osrm"` only)           |
//! | [`error`]    | `RouteError`, `RouteResult<T>`                             |
//!
//! The detector and synthesizer are pure functions.  The only source of
//! non-determinism is the `rand::Rng` passed into [`synthesize_detour`].
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `osrm`  | Enables OSRM JSON decoding via `serde_json`.                 |
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod blockage;
pub mod detour;
pub mod error;
pub mod provider;

#[cfg(feature = "osrm")]
pub mod osrm;


pub use blockage::{BlockedPoint, DEFAULT_THRESHOLD_DEG, first_blocking, is_blocked};
pub use detour::{DETOUR_STEPS, base_curve, synthesize_detour};
pub use error::{RouteError, RouteResult};
pub use provider::{Route, RouteProvider, StraightLineProvider};
