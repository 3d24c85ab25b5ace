//! OSRM route-service response decoding.
//!
//! Only available with the `osrm` feature.  Fetching is left to the caller
//! (any HTTP client); this module builds the request URL and turns the JSON
//! body into a [`Route`].
//!
//! # Wire format
//!
//! ```text
//! GET {base}/route/v1/driving/{lng},{lat};{lng},{lat}?overview=full&geometries=geojson
//!
//! { "code": "Ok",
//!   "routes": [ { "distance": 1234.5, "duration": 321.0,
//!                 "geometry": { "type": "LineString",
//!                               "coordinates": [[lng, lat], ...] } } ] }
//! ```
//!
//! GeoJSON orders coordinates `[lng, lat]`; they are swapped on decode.

use serde::Deserialize;

use er_core::GeoPoint;

use crate::{Route, RouteError, RouteResult};

/// Public OSRM demo server.
pub const OSRM_PUBLIC_URL: &str = "https://router.project-osrm.org";

#[derive(Debug, Deserialize)]
struct OsrmResponse {
    code:    String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    routes:  Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    distance: f64,
    duration: f64,
    geometry: OsrmGeometry,
}

#[derive(Debug, Deserialize)]
struct OsrmGeometry {
    coordinates: Vec<[f64; 2]>,
}

/// Driving-route request URL for `from` → `to` against `base`.
pub fn route_url(base: &str, from: GeoPoint, to: GeoPoint) -> String {
    format!(
        "{}/route/v1/driving/{},{};{},{}?overview=full&geometries=geojson",
        base.trim_end_matches('/'),
        from.lng,
        from.lat,
        to.lng,
        to.lat,
    )
}

/// Decode an OSRM route response body for the request `from` → `to`.
///
/// The first route wins.  A non-`Ok` code or an empty route list is
/// [`RouteError::NoRoute`]; malformed JSON is [`RouteError::Decode`].
pub fn decode_route(body: &str, from: GeoPoint, to: GeoPoint) -> RouteResult<Route> {
    let resp: OsrmResponse =
        serde_json::from_str(body).map_err(|e| RouteError::Decode(e.to_string()))?;

    if resp.code != "Ok" {
        log::warn!(
            "OSRM returned code {}: {}",
            resp.code,
            resp.message.as_deref().unwrap_or("no message")
        );
        return Err(RouteError::NoRoute { from, to });
    }

    let Some(route) = resp.routes.into_iter().next() else {
        return Err(RouteError::NoRoute { from, to });
    };

    let path: Vec<GeoPoint> = route
        .geometry
        .coordinates
        .into_iter()
        .map(|[lng, lat]| GeoPoint::new(lat, lng))
        .collect();

    if path.is_empty() {
        return Err(RouteError::Decode("route geometry has no coordinates".into()));
    }

    Ok(Route {
        path,
        distance_m: route.distance,
        duration_s: route.duration,
    })
}
