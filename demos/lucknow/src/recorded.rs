//! Offline OSRM provider that replays a stored response.
//!
//! The demo never touches the network: `data/osrm_route.json` is a sample
//! `route/v1/driving` response for the default Lucknow start/end pair and is
//! decoded with `er_route::osrm` exactly as a live response would be.

use er_core::GeoPoint;
use er_route::osrm::{OSRM_PUBLIC_URL, decode_route, route_url};
use er_route::{Route, RouteProvider, RouteResult};

const RECORDED_ROUTE: &str = include_str!("../data/osrm_route.json");

pub struct RecordedOsrm {
    body: String,
}

impl RecordedOsrm {
    pub fn new() -> Self {
        Self { body: RECORDED_ROUTE.to_owned() }
    }

    /// Replay a different response body.
    pub fn from_body(body: String) -> Self {
        Self { body }
    }
}

impl RouteProvider for RecordedOsrm {
    fn name(&self) -> &str {
        "OSRM"
    }

    fn route(&self, from: GeoPoint, to: GeoPoint) -> RouteResult<Route> {
        log::debug!("replaying {}", route_url(OSRM_PUBLIC_URL, from, to));
        decode_route(&self.body, from, to)
    }
}
