//! Identifier for user-placed blocked points.
//!
//! A `BlockId` is the creation time of the block in Unix milliseconds.  The
//! type itself only carries the number; strict monotonicity (two blocks
//! placed in the same millisecond still get distinct ids, and a removed id is
//! never handed out again) is enforced by the registry that mints them.

use std::fmt;

/// Opaque, ordered identifier of a blocked point.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockId(pub u64);

impl BlockId {
    /// Creation timestamp in Unix milliseconds.
    #[inline(always)]
    pub fn created_ms(self) -> u64 {
        self.0
    }

    /// The smallest id strictly greater than `self`, or `None` at `u64::MAX`.
    #[inline]
    pub fn successor(self) -> Option<BlockId> {
        self.0.checked_add(1).map(BlockId)
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockId({})", self.0)
    }
}

impl From<BlockId> for u64 {
    #[inline(always)]
    fn from(id: BlockId) -> u64 {
        id.0
    }
}
