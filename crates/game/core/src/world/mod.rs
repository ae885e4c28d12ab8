//! Island world produced by the terrain generator.
//!
//! [`World`] bundles the immutable [`Grid`] with the objective and the
//! recommended spawn point. The session owns one `World` at a time and
//! replaces it wholesale on restart.
mod grid;
mod position;

pub use grid::{Dimensions, Grid, TileKind};
pub use position::{Direction, NEIGHBORS_8, Position};

/// Generated island: tiles, objective and recommended spawn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct World {
    pub grid: Grid,
    pub goal: Position,
    pub spawn: Position,
}

impl World {
    pub fn dimensions(&self) -> Dimensions {
        self.grid.dimensions()
    }

    pub fn tile(&self, position: Position) -> Option<TileKind> {
        self.grid.get(position)
    }

    pub fn is_walkable(&self, position: Position) -> bool {
        self.grid.is_walkable(position)
    }

    pub fn is_goal(&self, position: Position) -> bool {
        self.grid.is(position, TileKind::Goal)
    }

    /// SHA-256 digest over dimensions, tiles, goal and spawn.
    ///
    /// Two worlds generated from the same seed and parameters share a
    /// fingerprint, which makes reproducibility easy to report and assert.
    pub fn fingerprint(&self) -> [u8; 32] {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();
        let dims = self.grid.dimensions();
        hasher.update(dims.width.to_le_bytes());
        hasher.update(dims.height.to_le_bytes());
        for tile in self.grid.tiles() {
            hasher.update([*tile as u8]);
        }
        for p in [self.goal, self.spawn] {
            hasher.update(p.x.to_le_bytes());
            hasher.update(p.y.to_le_bytes());
        }
        hasher.finalize().into()
    }
}
