//! Simulated detour synthesis.
//!
//! Produces a road-like looking substitute path between two points when the
//! real route runs into a blocked point.  The output is cosmetic: it is not
//! derived from any road network and must not be presented as such.
//!
//! # Shape
//!
//! ```text
//! i ∈ [0, STEPS],  t = i / STEPS
//! lat(i) = start.lat + (end.lat - start.lat) * t
//! lng(i) = start.lng + (end.lng - start.lng) * t
//!        + sin(t * π) * curvature * (1 + t)
//! ```
//!
//! The `sin` term bows the path sideways, peaking a little past the middle
//! because of the `(1 + t)` ramp.  `curvature` comes from
//! [`PriorityClass::curvature_deg`].
//!
//! # Avoidance
//!
//! For each blocked point the nearest curve sample (degree-space Euclidean,
//! lowest index on ties) and its existing neighbours are pushed north-east by
//! a random `[0.002, 0.003)` degrees per axis.  Endpoint samples only have one
//! neighbour, so a block near either end shifts two samples instead of three.
//! Shifts from different blocks stack.

use std::f64::consts::PI;
use std::ops::Range;

use rand::Rng;

use er_core::{GeoPoint, PriorityClass};

use crate::BlockedPoint;

/// Number of intervals in a synthesized detour; the path has `STEPS + 1` points.
pub const DETOUR_STEPS: usize = 30;

/// Range each avoidance shift is drawn from, degrees.
const SHIFT_RANGE_DEG: Range<f64> = 0.002..0.003;

/// The unperturbed detour curve from `start` to `end`.
pub fn base_curve(start: GeoPoint, end: GeoPoint, priority: PriorityClass) -> Vec<GeoPoint> {
    let curvature = priority.curvature_deg();
    (0..=DETOUR_STEPS)
        .map(|i| {
            let t = i as f64 / DETOUR_STEPS as f64;
            let straight = start.lerp(end, t);
            GeoPoint::new(straight.lat, straight.lng + (t * PI).sin() * curvature * (1.0 + t))
        })
        .collect()
}

/// Synthesize a detour from `start` to `end` that bends away from `blocked`.
///
/// Always returns `DETOUR_STEPS + 1` points.  With no blocked points the
/// result is exactly [`base_curve`].  `rng` is the only randomness source;
/// seed it for reproducible output.
pub fn synthesize_detour<R>(
    start:    GeoPoint,
    end:      GeoPoint,
    priority: PriorityClass,
    blocked:  &[BlockedPoint],
    rng:      &mut R,
) -> Vec<GeoPoint>
where
    R: Rng + ?Sized,
{
    let mut pts = base_curve(start, end, priority);

    for b in blocked {
        let idx = nearest_index(&pts, b.pos);
        let shift_lat = rng.gen_range(SHIFT_RANGE_DEG);
        let shift_lng = rng.gen_range(SHIFT_RANGE_DEG);

        let lo = idx.saturating_sub(1);
        let hi = (idx + 1).min(pts.len() - 1);
        for p in &mut pts[lo..=hi] {
            p.lat += shift_lat;
            p.lng += shift_lng;
        }

        log::debug!(
            "detour around {} shifts samples {lo}..={hi} by ({shift_lat:.5}, {shift_lng:.5})",
            b.id
        );
    }

    pts
}

/// Index of the sample closest to `target`; first one wins on ties.
fn nearest_index(pts: &[GeoPoint], target: GeoPoint) -> usize {
    let mut best = 0;
    let mut best_d = f64::INFINITY;
    for (i, p) in pts.iter().enumerate() {
        let d = p.degree_distance(target);
        if d < best_d {
            best_d = d;
            best = i;
        }
    }
    best
}
