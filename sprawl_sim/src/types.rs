// Core types shared across the simulation.
//
// Spatial coordinates for the streamed world (chunk grid keys, world-space
// vectors), positions on the abstract war plane, strongly-typed entity ids,
// and the chunk/door/unit classification enums. Everything derives
// `Serialize`/`Deserialize` for save/load and for handing manifests to the
// presentation layer.
//
// Entity ids for war-simulation entities are small increasing integers, not
// UUIDs: bases and units churn constantly and their creation order is part
// of the deterministic record.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Spatial types
// ---------------------------------------------------------------------------

/// A world-space position (meters). `y` is up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// A position on the abstract 2D war plane. Not world units — the war
/// simulation runs on its own coarse coordinate system.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanePos {
    pub x: f32,
    pub y: f32,
}

impl PlanePos {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The origin — fallback target when a faction has no enemies left.
    pub const ORIGIN: PlanePos = PlanePos::new(0.0, 0.0);

    pub fn distance_sq(self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    pub fn distance(self, other: Self) -> f32 {
        self.distance_sq(other).sqrt()
    }

    /// Component-wise rounding — builder units found bases on the integer
    /// lattice of the war plane.
    pub fn rounded(self) -> Self {
        Self::new(self.x.round(), self.y.round())
    }
}

impl fmt::Display for PlanePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Grid key of a terrain chunk.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ChunkCoord {
    pub cx: i32,
    pub cz: i32,
}

impl ChunkCoord {
    pub const fn new(cx: i32, cz: i32) -> Self {
        Self { cx, cz }
    }

    /// The chunk containing a world-space position. Chunk `(0, 0)` spans
    /// `[0, chunk_size)` on both axes.
    pub fn containing(x: f32, z: f32, chunk_size: f32) -> Self {
        Self {
            cx: (x / chunk_size).floor() as i32,
            cz: (z / chunk_size).floor() as i32,
        }
    }
}

impl fmt::Display for ChunkCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.cx, self.cz)
    }
}

// ---------------------------------------------------------------------------
// Chunk classification
// ---------------------------------------------------------------------------

/// Terrain class of a chunk, chosen deterministically from its coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChunkKind {
    City,
    Suburb,
    Park,
    Highway,
    Wasteland,
}

// Cumulative roll thresholds. These exact boundaries decide the world's
// terrain mix; tests probe them to five decimal places.
const CITY_MAX: f64 = 0.45;
const SUBURB_MAX: f64 = 0.60;
const PARK_MAX: f64 = 0.72;
const HIGHWAY_MAX: f64 = 0.84;

impl ChunkKind {
    /// Bucket a hash draw in [0, 1) into a terrain class.
    pub fn from_roll(h: f64) -> Self {
        if h < CITY_MAX {
            Self::City
        } else if h < SUBURB_MAX {
            Self::Suburb
        } else if h < PARK_MAX {
            Self::Park
        } else if h < HIGHWAY_MAX {
            Self::Highway
        } else {
            Self::Wasteland
        }
    }
}

impl fmt::Display for ChunkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::City => "city",
            Self::Suburb => "suburb",
            Self::Park => "park",
            Self::Highway => "highway",
            Self::Wasteland => "wasteland",
        };
        f.write_str(s)
    }
}

/// What lies behind a door.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DoorKind {
    Shop,
    Office,
}

/// War-simulation unit classes.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum UnitKind {
    Infantry,
    Tank,
    Air,
    Builder,
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Infantry => "infantry",
            Self::Tank => "tank",
            Self::Air => "air",
            Self::Builder => "builder",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// Entity ids
// ---------------------------------------------------------------------------

/// One of the three permanent factions, by creation order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct FactionId(pub u8);

/// Unique increasing base id.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct BaseId(pub u32);

/// Unique increasing unit id.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct UnitId(pub u32);

/// Opaque handle the presentation layer maps to its scene content for one
/// chunk. Monotonic; the only chunk attribute not derived from coordinates.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct VisualId(pub u64);

/// Stable door identifier, derived from the owning chunk and the lot's grid
/// cell. Revisiting the same coordinates reproduces the same ids because
/// chunk generation is deterministic.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct DoorId {
    pub cx: i32,
    pub cz: i32,
    pub row: u32,
    pub col: u32,
}

impl fmt::Display for DoorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}:{}", self.cx, self.cz, self.row, self.col)
    }
}
