//! Session observer trait for UI updates and logging hooks.

use er_core::BlockId;

use crate::{RoutePlan, TrafficReport};

/// Callbacks invoked by [`Session`][crate::Session] when visible state
/// changes.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: ETA printer
///
/// ```rust,ignore
/// struct EtaPrinter;
///
/// impl SessionObserver for EtaPrinter {
///     fn on_route_planned(&mut self, plan: &RoutePlan) {
///         println!("{}", plan.eta_label());
///     }
/// }
/// ```
pub trait SessionObserver {
    /// Called after a route has been planned and stored.
    fn on_route_planned(&mut self, _plan: &RoutePlan) {}

    /// Called after traffic has been simulated on the active route.
    fn on_traffic(&mut self, _report: &TrafficReport) {}

    /// Called when the blocked-point set changes.  `live` is the new count.
    fn on_blocks_changed(&mut self, _added: Option<BlockId>, _live: usize) {}

    /// Called when the session is reset with `clear()`.
    fn on_cleared(&mut self) {}
}

/// A [`SessionObserver`] that does nothing.
pub struct NoopObserver;

impl SessionObserver for NoopObserver {}
