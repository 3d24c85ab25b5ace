//! Geographic coordinate type and spatial utilities.
//!
//! `GeoPoint` uses `f64` latitude/longitude.  Detour offsets are applied in
//! steps of a thousandth of a degree and proximity is tested at 0.0005°, so
//! single precision would leave too little headroom after interpolation.
//!
//! Two notions of "near" live here and they are not interchangeable:
//!
//! - [`GeoPoint::distance_km`] is a true great-circle distance.
//! - [`GeoPoint::within_bbox`] and [`GeoPoint::degree_distance`] work on raw
//!   degrees.  A degree of longitude shrinks toward the poles, so these are
//!   approximations whose accuracy degrades with latitude.

use crate::{CoreError, CoreResult};

/// Mean Earth radius, kilometres.
const EARTH_RADIUS_KM: f64 = 6_371.0;

/// A WGS-84 geographic coordinate in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    /// Unchecked constructor.  Use [`GeoPoint::try_new`] for user input.
    #[inline]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validating constructor for coordinates entering the system.
    ///
    /// Rejects non-finite values and anything outside `[-90, 90]` latitude or
    /// `[-180, 180]` longitude.
    pub fn try_new(lat: f64, lng: f64) -> CoreResult<Self> {
        let lat_ok = lat.is_finite() && (-90.0..=90.0).contains(&lat);
        let lng_ok = lng.is_finite() && (-180.0..=180.0).contains(&lng);
        if lat_ok && lng_ok {
            Ok(Self { lat, lng })
        } else {
            Err(CoreError::InvalidCoordinate { lat, lng })
        }
    }

    /// Haversine great-circle distance in kilometres.
    pub fn distance_km(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lng = (other.lng - self.lng).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lng * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }

    /// Axis-aligned proximity test in degrees: both `|Δlat|` and `|Δlng|`
    /// must be at most `half_deg`.
    #[inline]
    pub fn within_bbox(self, center: GeoPoint, half_deg: f64) -> bool {
        (self.lat - center.lat).abs() <= half_deg
            && (self.lng - center.lng).abs() <= half_deg
    }

    /// Euclidean distance in degree space, `hypot(Δlat, Δlng)`.
    #[inline]
    pub fn degree_distance(self, other: GeoPoint) -> f64 {
        (self.lat - other.lat).hypot(self.lng - other.lng)
    }

    /// Linear interpolation `self + (other - self) * t` on both axes.
    #[inline]
    pub fn lerp(self, other: GeoPoint, t: f64) -> GeoPoint {
        GeoPoint {
            lat: self.lat + (other.lat - self.lat) * t,
            lng: self.lng + (other.lng - self.lng) * t,
        }
    }

    #[inline]
    pub fn midpoint(self, other: GeoPoint) -> GeoPoint {
        GeoPoint {
            lat: (self.lat + other.lat) / 2.0,
            lng: (self.lng + other.lng) / 2.0,
        }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}
