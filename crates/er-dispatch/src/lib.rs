//! `er-dispatch`: the route-planning session that drives `er-route`.
//!
//! # Planning flow
//!
//! ```text
//! calculate_route:
//!   ① Endpoints  : both start and end must be set.
//!   ② Provider   : ask the RouteProvider for a real driving route.
//!   ③ Detector   : does that path pass near any blocked point?
//!   ④ Choose     : no:  keep the real route, ETA from its duration.
//!                  yes: synthesize a detour, ETA from straight-line
//!                       distance × detour factor at the detour speed.
//!   ⑤ Scale      : multiply the ETA by the priority's factor.
//! ```
//!
//! `simulate_traffic` then sprinkles delay markers along the active path and
//! inflates the ETA by a few random minutes.
//!
//! # Cargo features
//!
//! | Feature | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on config and plan types.|
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use er_core::{DetourRng, PriorityClass};
//! use er_dispatch::SessionBuilder;
//! use er_route::StraightLineProvider;
//!
//! let mut session = SessionBuilder::new(StraightLineProvider::default())
//!     .priority(PriorityClass::High)
//!     .build()?;
//! session.set_start(26.85, 80.95)?;
//! session.set_end(26.90, 81.00)?;
//! session.add_block(26.875, 80.975)?;
//! let plan = session.calculate_route(&mut DetourRng::new(42))?;
//! println!("{}", plan.eta_label());
//! ```

pub mod blocked;
pub mod builder;
pub mod config;
pub mod error;
pub mod observer;
pub mod plan;
pub mod session;


pub use blocked::BlockedRoads;
pub use builder::SessionBuilder;
pub use config::DispatchConfig;
pub use error::{DispatchError, DispatchResult};
pub use observer::{NoopObserver, SessionObserver};
pub use plan::{Algorithm, RoutePlan, TRAFFIC_MARKER_TTL, TrafficReport};
pub use session::Session;
