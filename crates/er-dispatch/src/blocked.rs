//! Registry of user-placed blocked points.
//!
//! # Identifiers
//!
//! Ids are creation timestamps in Unix milliseconds, bumped when needed so
//! that they strictly increase:
//!
//!   id = max(created_ms, last_issued + 1)
//!
//! `last_issued` survives removals and `clear()`, so an id is never handed
//! out twice within a registry's lifetime, even if the wall clock steps back.
//! Once `u64::MAX` has been issued, further adds fail with
//! [`DispatchError::IdsExhausted`].

use std::time::{SystemTime, UNIX_EPOCH};

use er_core::{BlockId, GeoPoint};
use er_route::BlockedPoint;

use crate::{DispatchError, DispatchResult};

/// Ordered set of live blocked points, in insertion order.
#[derive(Debug, Default, Clone)]
pub struct BlockedRoads {
    points:      Vec<BlockedPoint>,
    last_issued: Option<BlockId>,
}

impl BlockedRoads {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a blocked point stamped with the current wall-clock time.
    pub fn add(&mut self, pos: GeoPoint) -> DispatchResult<BlockId> {
        let now_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        self.add_at(pos, now_ms)
    }

    /// Add a blocked point created at `created_ms`.
    pub fn add_at(&mut self, pos: GeoPoint, created_ms: u64) -> DispatchResult<BlockId> {
        let id = match self.last_issued {
            Some(last) => {
                let next = last.successor().ok_or(DispatchError::IdsExhausted(last))?;
                BlockId(created_ms).max(next)
            }
            None => BlockId(created_ms),
        };
        self.last_issued = Some(id);
        self.points.push(BlockedPoint::new(id, pos));
        log::debug!("blocked {id} at {pos}");
        Ok(id)
    }

    /// Move the point with `id` to `pos`, keeping its id and position in
    /// insertion order.  Returns `false` if it was not live.
    pub fn move_to(&mut self, id: BlockId, pos: GeoPoint) -> bool {
        match self.points.iter_mut().find(|b| b.id == id) {
            Some(b) => {
                log::debug!("moved {id} from {} to {pos}", b.pos);
                b.pos = pos;
                true
            }
            None => false,
        }
    }

    /// Remove the point with `id`.  Returns `false` if it was not live.
    pub fn remove(&mut self, id: BlockId) -> bool {
        match self.points.iter().position(|b| b.id == id) {
            Some(idx) => {
                self.points.remove(idx);
                log::debug!("unblocked {id}");
                true
            }
            None => false,
        }
    }

    /// Drop every live point.  Issued ids stay retired.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn get(&self, id: BlockId) -> Option<&BlockedPoint> {
        self.points.iter().find(|b| b.id == id)
    }

    pub fn as_slice(&self) -> &[BlockedPoint] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &BlockedPoint> + '_ {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
