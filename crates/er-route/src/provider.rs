//! Route provider trait and an offline straight-line implementation.
//!
//! # Pluggability
//!
//! `er-dispatch` asks for real routes via the [`RouteProvider`] trait, so a
//! deployment can plug in an HTTP client for a public routing service while
//! tests and offline demos use [`StraightLineProvider`].  No HTTP client is
//! shipped in this crate; see [`crate::osrm`] (feature `osrm`) for decoding
//! OSRM responses fetched by the caller.
//!
//! # Units
//!
//! `Route` stores metres and seconds, matching what routing services return.
//! `distance_km()` and `duration_min()` convert for display and ETA maths.

use er_core::GeoPoint;

use crate::RouteResult;

// ── Route ─────────────────────────────────────────────────────────────────────

/// A routed path: ordered points from origin to destination plus totals.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Points to traverse in order, origin first.
    pub path: Vec<GeoPoint>,
    /// Total driving distance in metres.
    pub distance_m: f64,
    /// Total driving time in seconds.
    pub duration_s: f64,
}

impl Route {
    pub fn distance_km(&self) -> f64 {
        self.distance_m / 1000.0
    }

    pub fn duration_min(&self) -> f64 {
        self.duration_s / 60.0
    }
}

// ── RouteProvider trait ───────────────────────────────────────────────────────

/// Source of real driving routes.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one provider can serve several
/// sessions.
pub trait RouteProvider: Send + Sync {
    /// Display name of the routing source, e.g. `"OSRM"`.
    fn name(&self) -> &str {
        "Route service"
    }

    /// Compute a driving route from `from` to `to`.
    ///
    /// Returns [`RouteError::NoRoute`](crate::RouteError::NoRoute) if the
    /// service finds no path.
    fn route(&self, from: GeoPoint, to: GeoPoint) -> RouteResult<Route>;
}

impl<P: RouteProvider + ?Sized> RouteProvider for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn route(&self, from: GeoPoint, to: GeoPoint) -> RouteResult<Route> {
        (**self).route(from, to)
    }
}

// ── StraightLineProvider ──────────────────────────────────────────────────────

/// Default assumed driving speed for straight-line estimates, km/h.
const DEFAULT_SPEED_KMH: f64 = 50.0;

/// Two-point "route" along the great circle at a fixed speed.
///
/// Ignores roads entirely.  Useful offline and as a deterministic provider in
/// tests.
#[derive(Debug, Clone)]
pub struct StraightLineProvider {
    pub speed_kmh: f64,
}

impl Default for StraightLineProvider {
    fn default() -> Self {
        Self { speed_kmh: DEFAULT_SPEED_KMH }
    }
}

impl StraightLineProvider {
    pub fn new(speed_kmh: f64) -> Self {
        Self { speed_kmh }
    }
}

impl RouteProvider for StraightLineProvider {
    fn name(&self) -> &str {
        "Straight line"
    }

    fn route(&self, from: GeoPoint, to: GeoPoint) -> RouteResult<Route> {
        let km = from.distance_km(to);
        Ok(Route {
            path:       vec![from, to],
            distance_m: km * 1000.0,
            duration_s: km / self.speed_kmh * 3600.0,
        })
    }
}
