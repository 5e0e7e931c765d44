// Per-chunk content generation.
//
// Everything a chunk contains — buildings, roads, doors, trees, debris, the
// highway slab — is derived here from `(cx, cz, world_seed)` through
// `coord_hash`. Generation is all-or-nothing: one call produces the full
// manifest plus the chunk's colliders and doors, and repeating the call for
// the same coordinates reproduces it bit for bit. There is no partial
// regeneration.
//
// Draw decorrelation: every independent quantity adds its own constant
// offset to the seed (see the `*_EXTRA` constants). Per-lot draws hash the
// lot's global grid cell; per-index draws (trees, debris, shop names) shift
// the seed by `index * INDEX_STRIDE`, which exceeds every offset constant so
// indexed families never collide with each other.
//
// One deliberate coupling: the draw that decides whether a lot is empty is
// the SAME draw that classifies an occupied lot's door as shop or office.
// The prototype behaves this way and door identity tests depend on it, so
// the two must not be decorrelated.
//
// See also: `worldgen.rs` for the chunk lifecycle that calls `populate`,
// `collision.rs` for the collider type, `config.rs` for the lot profiles.

use crate::collision::Collider;
use crate::config::{LotProfile, WorldConfig};
use crate::types::{ChunkCoord, ChunkKind, DoorId, DoorKind};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use sprawl_names::{poi_name, Lexicon};
use sprawl_prng::coord_hash;

// Seed offsets, one per independently drawn quantity. Changing any of these
// reshapes every generated chunk.
const LOT_EXTRA: f64 = 31.0;
const WIDTH_EXTRA: f64 = 47.0;
const DEPTH_EXTRA: f64 = 59.0;
const HEIGHT_EXTRA: f64 = 71.0;
const TINT_EXTRA: f64 = 83.0;
const TREE_X_EXTRA: f64 = 97.0;
const TREE_Z_EXTRA: f64 = 113.0;
const TREE_H_EXTRA: f64 = 131.0;
const DEBRIS_X_EXTRA: f64 = 149.0;
const DEBRIS_Z_EXTRA: f64 = 167.0;
const DEBRIS_SIZE_EXTRA: f64 = 181.0;
/// Per-index seed stride for tree/debris placements.
const INDEX_STRIDE: f64 = 1000.0;

// ---------------------------------------------------------------------------
// Content manifest — what the presentation layer consumes
// ---------------------------------------------------------------------------

/// Ground plane descriptor for one chunk.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroundPlane {
    pub kind: ChunkKind,
    pub center_x: f32,
    pub center_z: f32,
    pub size: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoadAxis {
    EastWest,
    NorthSouth,
}

/// One straight road segment through the chunk.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoadSegment {
    pub axis: RoadAxis,
    pub center_x: f32,
    pub center_z: f32,
    pub length: f32,
    pub width: f32,
}

/// A placed building box: center, dimensions, facade color.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BuildingPlacement {
    pub x: f32,
    pub z: f32,
    pub width: f32,
    pub depth: f32,
    pub height: f32,
    pub color: [f32; 3],
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TreePlacement {
    pub x: f32,
    pub z: f32,
    pub trunk_height: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DebrisPlacement {
    pub x: f32,
    pub z: f32,
    pub size: f32,
}

/// The single elevated slab of a highway chunk.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HighwaySlab {
    pub center_x: f32,
    pub center_z: f32,
    pub length: f32,
    pub width: f32,
    pub elevation: f32,
}

/// Full render manifest for one chunk. Reproducible from
/// `(cx, cz, world_seed)` alone.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChunkContent {
    pub ground: GroundPlane,
    pub buildings: SmallVec<[BuildingPlacement; 16]>,
    pub roads: SmallVec<[RoadSegment; 2]>,
    pub trees: SmallVec<[TreePlacement; 10]>,
    pub debris: SmallVec<[DebrisPlacement; 8]>,
    pub slab: Option<HighwaySlab>,
}

/// An interaction point on a building, leading to a generated interior.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Door {
    pub id: DoorId,
    pub chunk: ChunkCoord,
    pub x: f32,
    pub z: f32,
    pub kind: DoorKind,
    pub name: String,
}

/// Everything `populate` produces for one chunk.
#[derive(Clone, Debug, PartialEq)]
pub struct ChunkBuild {
    pub content: ChunkContent,
    pub colliders: Vec<Collider>,
    pub doors: Vec<Door>,
}

// ---------------------------------------------------------------------------
// Population
// ---------------------------------------------------------------------------

/// Generate the full content of one chunk.
pub fn populate(
    kind: ChunkKind,
    coord: ChunkCoord,
    area_name: &str,
    cfg: &WorldConfig,
    lex: &Lexicon,
    seed: f64,
) -> ChunkBuild {
    let origin_x = coord.cx as f32 * cfg.chunk_size;
    let origin_z = coord.cz as f32 * cfg.chunk_size;

    let mut build = ChunkBuild {
        content: ChunkContent {
            ground: GroundPlane {
                kind,
                center_x: origin_x + cfg.chunk_size / 2.0,
                center_z: origin_z + cfg.chunk_size / 2.0,
                size: cfg.chunk_size,
            },
            buildings: SmallVec::new(),
            roads: SmallVec::new(),
            trees: SmallVec::new(),
            debris: SmallVec::new(),
            slab: None,
        },
        colliders: Vec::new(),
        doors: Vec::new(),
    };

    match kind {
        ChunkKind::City => {
            populate_lots(&mut build, coord, area_name, &cfg.city, cfg, lex, seed);
            add_road_cross(&mut build, cfg);
        }
        ChunkKind::Suburb => {
            populate_lots(&mut build, coord, area_name, &cfg.suburb, cfg, lex, seed);
            add_road_cross(&mut build, cfg);
        }
        ChunkKind::Park => populate_park(&mut build, coord, cfg, seed),
        ChunkKind::Highway => {
            build.content.slab = Some(HighwaySlab {
                center_x: build.content.ground.center_x,
                center_z: build.content.ground.center_z,
                length: cfg.chunk_size,
                width: cfg.highway_width,
                elevation: cfg.highway_elevation,
            });
        }
        ChunkKind::Wasteland => populate_wasteland(&mut build, coord, cfg, seed),
    }

    build
}

/// Lay out the building-lot grid of a city or suburb chunk.
fn populate_lots(
    build: &mut ChunkBuild,
    coord: ChunkCoord,
    area_name: &str,
    profile: &LotProfile,
    cfg: &WorldConfig,
    lex: &Lexicon,
    seed: f64,
) {
    let origin_x = coord.cx as f32 * cfg.chunk_size;
    let origin_z = coord.cz as f32 * cfg.chunk_size;
    let spacing = cfg.chunk_size / profile.grid as f32;

    for row in 0..profile.grid {
        for col in 0..profile.grid {
            // Global lot cell — unique per lot across all chunks, so every
            // lot draws independently.
            let lot_x = coord
                .cx
                .wrapping_mul(profile.grid as i32)
                .wrapping_add(col as i32);
            let lot_z = coord
                .cz
                .wrapping_mul(profile.grid as i32)
                .wrapping_add(row as i32);

            // One draw, two meanings: occupancy below `empty_lot_chance`,
            // and shop-vs-office for an occupied lot (deliberate coupling,
            // see module docs).
            let lot_draw = coord_hash(lot_x, lot_z, seed + LOT_EXTRA);
            if lot_draw < cfg.empty_lot_chance {
                continue;
            }

            let width = span(
                profile.footprint_min,
                profile.footprint_max,
                coord_hash(lot_x, lot_z, seed + WIDTH_EXTRA),
            );
            let depth = span(
                profile.footprint_min,
                profile.footprint_max,
                coord_hash(lot_x, lot_z, seed + DEPTH_EXTRA),
            );
            let height = span(
                profile.height_min,
                profile.height_max,
                coord_hash(lot_x, lot_z, seed + HEIGHT_EXTRA),
            );

            // Brightness perturbation keeps facades from looking cloned.
            let tint = 0.85 + coord_hash(lot_x, lot_z, seed + TINT_EXTRA) as f32 * 0.3;
            let color = [
                (profile.base_color[0] * tint).min(1.0),
                (profile.base_color[1] * tint).min(1.0),
                (profile.base_color[2] * tint).min(1.0),
            ];

            let x = origin_x + (col as f32 + 0.5) * spacing;
            let z = origin_z + (row as f32 + 0.5) * spacing;

            build.content.buildings.push(BuildingPlacement {
                x,
                z,
                width,
                depth,
                height,
                color,
            });

            build.colliders.push(Collider {
                chunk: coord,
                min_x: x - width / 2.0,
                max_x: x + width / 2.0,
                min_z: z - depth / 2.0,
                max_z: z + depth / 2.0,
            });

            let lot_index = row * profile.grid + col;
            let kind = if lot_draw < cfg.lot_shop_split {
                DoorKind::Shop
            } else {
                DoorKind::Office
            };
            let name = match kind {
                DoorKind::Shop => poi_name(lex, coord.cx, coord.cz, lot_index, seed),
                DoorKind::Office => format!("{area_name} Office {}", lot_index + 1),
            };
            build.doors.push(Door {
                id: DoorId {
                    cx: coord.cx,
                    cz: coord.cz,
                    row,
                    col,
                },
                chunk: coord,
                // Door marker sits just off the building's +z face.
                x,
                z: z + depth / 2.0 + cfg.door_offset,
                kind,
                name,
            });
        }
    }
}

/// Two road segments crossing at the chunk center.
fn add_road_cross(build: &mut ChunkBuild, cfg: &WorldConfig) {
    let center_x = build.content.ground.center_x;
    let center_z = build.content.ground.center_z;
    build.content.roads.push(RoadSegment {
        axis: RoadAxis::EastWest,
        center_x,
        center_z,
        length: cfg.chunk_size,
        width: cfg.road_width,
    });
    build.content.roads.push(RoadSegment {
        axis: RoadAxis::NorthSouth,
        center_x,
        center_z,
        length: cfg.chunk_size,
        width: cfg.road_width,
    });
}

fn populate_park(build: &mut ChunkBuild, coord: ChunkCoord, cfg: &WorldConfig, seed: f64) {
    let origin_x = coord.cx as f32 * cfg.chunk_size;
    let origin_z = coord.cz as f32 * cfg.chunk_size;
    for i in 0..cfg.park_tree_count {
        let stride = i as f64 * INDEX_STRIDE;
        let x = origin_x
            + coord_hash(coord.cx, coord.cz, seed + TREE_X_EXTRA + stride) as f32
                * cfg.chunk_size;
        let z = origin_z
            + coord_hash(coord.cx, coord.cz, seed + TREE_Z_EXTRA + stride) as f32
                * cfg.chunk_size;
        let trunk_height =
            2.0 + coord_hash(coord.cx, coord.cz, seed + TREE_H_EXTRA + stride) as f32 * 4.0;
        build.content.trees.push(TreePlacement { x, z, trunk_height });
    }
}

fn populate_wasteland(build: &mut ChunkBuild, coord: ChunkCoord, cfg: &WorldConfig, seed: f64) {
    let origin_x = coord.cx as f32 * cfg.chunk_size;
    let origin_z = coord.cz as f32 * cfg.chunk_size;
    for i in 0..cfg.wasteland_debris_count {
        let stride = i as f64 * INDEX_STRIDE;
        let x = origin_x
            + coord_hash(coord.cx, coord.cz, seed + DEBRIS_X_EXTRA + stride) as f32
                * cfg.chunk_size;
        let z = origin_z
            + coord_hash(coord.cx, coord.cz, seed + DEBRIS_Z_EXTRA + stride) as f32
                * cfg.chunk_size;
        let size =
            0.5 + coord_hash(coord.cx, coord.cz, seed + DEBRIS_SIZE_EXTRA + stride) as f32 * 2.5;
        build.content.debris.push(DebrisPlacement { x, z, size });
    }
}

/// Map a unit-interval draw onto `[min, max)`.
fn span(min: f32, max: f32, h: f64) -> f32 {
    min + h as f32 * (max - min)
}
