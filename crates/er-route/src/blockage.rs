//! Blockage detection: does a path pass near any blocked point?
//!
//! # Proximity model
//!
//! "Near" is an axis-aligned box in raw degrees, not a geodesic radius.  A
//! path point `p` is near a blocked point `b` when
//!
//! ```text
//! |p.lat - b.lat| <= threshold_deg  &&  |p.lng - b.lng| <= threshold_deg
//! ```
//!
//! At the default 0.0005° this is ~55 m at the equator on both axes, but the
//! longitude side shrinks with `cos(lat)`.  Callers calibrated against this
//! behaviour rely on it, so it is not replaced with haversine distance.

use er_core::{BlockId, GeoPoint};

/// Default proximity threshold, degrees (~55 m at the equator).
pub const DEFAULT_THRESHOLD_DEG: f64 = 0.0005;

/// A user-designated impassable coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockedPoint {
    pub id:  BlockId,
    pub pos: GeoPoint,
}

impl BlockedPoint {
    #[inline]
    pub fn new(id: BlockId, pos: GeoPoint) -> Self {
        Self { id, pos }
    }
}

/// `true` if any point of `path` lies within `threshold_deg` of any blocked
/// point on both axes.
///
/// Scans blocked points in order and, for each, every path point; stops at
/// the first qualifying pair.  O(|path| × |blocked|) worst case.
#[inline]
pub fn is_blocked(path: &[GeoPoint], blocked: &[BlockedPoint], threshold_deg: f64) -> bool {
    first_blocking(path, blocked, threshold_deg).is_some()
}

/// The first blocked point (in `blocked` order) that `path` passes near.
///
/// Which point is returned depends on evaluation order only; the existence of
/// a hit does not.
pub fn first_blocking<'a>(
    path:          &[GeoPoint],
    blocked:       &'a [BlockedPoint],
    threshold_deg: f64,
) -> Option<&'a BlockedPoint> {
    let hit = blocked
        .iter()
        .find(|b| path.iter().any(|p| p.within_bbox(b.pos, threshold_deg)));

    if let Some(b) = hit {
        log::debug!("path passes within {threshold_deg}° of {} at {}", b.id, b.pos);
    }
    hit
}
