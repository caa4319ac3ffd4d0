//! Layer-based collision matrix.

use serde::{Deserialize, Serialize};
use strider_types::constants::MAX_LAYERS;
use strider_types::LayerId;

/// Symmetric 32×32 matrix of which layers collide with each other.
///
/// Bit `b` of row `a` is set when layer `a` collides with layer `b`.
/// Every pair collides by default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerMatrix {
    rows: Vec<u32>,
}

impl LayerMatrix {
    /// Matrix where every layer collides with every other layer.
    pub fn all_colliding() -> Self {
        Self {
            rows: vec![u32::MAX; MAX_LAYERS],
        }
    }

    /// Enables or disables collision between two layers (both directions).
    pub fn set_collision(&mut self, a: LayerId, b: LayerId, collide: bool) {
        let (ai, bi) = (a.index() % MAX_LAYERS, b.index() % MAX_LAYERS);
        if collide {
            self.rows[ai] |= 1 << bi;
            self.rows[bi] |= 1 << ai;
        } else {
            self.rows[ai] &= !(1 << bi);
            self.rows[bi] &= !(1 << ai);
        }
    }

    /// True if the two layers are configured to ignore each other.
    #[inline]
    pub fn ignores(&self, a: LayerId, b: LayerId) -> bool {
        let (ai, bi) = (a.index() % MAX_LAYERS, b.index() % MAX_LAYERS);
        self.rows[ai] & (1 << bi) == 0
    }
}

impl Default for LayerMatrix {
    fn default() -> Self {
        Self::all_colliding()
    }
}
