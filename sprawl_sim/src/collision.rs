// Coarse 2D collision against building footprints.
//
// Colliders are world-space axis-aligned boxes on the ground plane, tagged
// with the chunk that owns them so eviction removes them atomically with the
// chunk. The player proxy is a circle: a collider "contains" a position when
// the box inflated by the circle's radius does.
//
// Resolution is a minimum-translation push-out evaluated independently per
// collider in iteration order. It is NOT a global penetration solver:
// overlapping several colliders at once may not converge to the smallest
// total correction. That approximation is the prototype's accepted behavior
// and callers rely on its cheapness — do not replace it with a solver.
//
// A flat floor clamp keeps the vertical coordinate at or above
// `floor_height`; the streamed city has no terrain relief.

use crate::types::{ChunkCoord, Vec3};
use serde::{Deserialize, Serialize};

/// A world-space axis-aligned bounding box on the ground plane.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Collider {
    /// Owning chunk; removed together with it.
    pub chunk: ChunkCoord,
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl Collider {
    /// Whether the box inflated by `radius` contains the planar position.
    pub fn contains_inflated(&self, x: f32, z: f32, radius: f32) -> bool {
        x > self.min_x - radius
            && x < self.max_x + radius
            && z > self.min_z - radius
            && z < self.max_z + radius
    }
}

/// Push `pos` out of every collider whose inflated box contains it, along
/// the axis of minimal overlap, then clamp to the floor.
///
/// Mutates the caller's position in place — the character-movement layer
/// feeds its candidate position through this once per frame.
pub fn resolve_collisions(
    colliders: &[Collider],
    pos: &mut Vec3,
    radius: f32,
    floor_height: f32,
) {
    for c in colliders {
        if !c.contains_inflated(pos.x, pos.z, radius) {
            continue;
        }
        // Distances to the four inflated edges; push along the smallest.
        let to_west = pos.x - (c.min_x - radius);
        let to_east = (c.max_x + radius) - pos.x;
        let to_north = pos.z - (c.min_z - radius);
        let to_south = (c.max_z + radius) - pos.z;

        let min = to_west.min(to_east).min(to_north).min(to_south);
        if min == to_west {
            pos.x = c.min_x - radius;
        } else if min == to_east {
            pos.x = c.max_x + radius;
        } else if min == to_north {
            pos.z = c.min_z - radius;
        } else {
            pos.z = c.max_z + radius;
        }
    }
    pos.y = pos.y.max(floor_height);
}
