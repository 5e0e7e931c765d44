// Chunk lifecycle: the streamed window of the infinite city grid.
//
// `WorldGenerator` owns every loaded chunk plus the collider and door
// registries derived from them. Each frame the driver feeds it the player's
// position; `update` makes sure the 3x3 neighborhood (configurable radius)
// around the containing chunk exists and evicts anything that has drifted
// more than `active_radius + 1` chunks away on either axis. A chunk leaves
// with its colliders and doors in one step — nothing derived outlives its
// chunk.
//
// Generation is memoryless: a chunk's kind, name and content come from
// `coord_hash(cx, cz, world_seed)` (the kind roll uses the bare seed; every
// other draw adds an offset, see `content.rs`). Eviction therefore loses
// nothing — walking back reproduces the identical chunk, doors and all. Only
// the opaque `VisualId` differs, which is the point: it names the
// presentation layer's scene content for the chunk's current incarnation.
//
// External layers never mutate these collections; they read through the
// query methods and feed candidate positions through `resolve_collisions`.
// The driver must call `update` before querying each frame so reads never
// observe a half-moved window.
//
// **Critical constraint: determinism.** All content flows from the
// coordinate hash. `BTreeMap` keeps chunk iteration ordered; doors keep
// insertion order because the nearest-door tie-break is first-found-wins.

use crate::collision::{resolve_collisions, Collider};
use crate::config::WorldConfig;
use crate::content::{populate, ChunkContent, Door};
use crate::types::{ChunkCoord, ChunkKind, Vec3, VisualId};
use sprawl_names::{
    city_name, default_lexicon, highway_name, park_name, suburb_name, wasteland_name, Lexicon,
};
use sprawl_prng::coord_hash;
use std::collections::BTreeMap;

/// One loaded chunk of the world grid.
#[derive(Clone, Debug)]
pub struct Chunk {
    pub coord: ChunkCoord,
    pub kind: ChunkKind,
    /// Human-readable area name, e.g. `"Velden City, Block C14"`.
    pub name: String,
    /// Opaque handle for the presentation layer's scene content.
    pub visual: VisualId,
    pub content: ChunkContent,
}

/// Deterministic generator and keeper of the active chunk window.
#[derive(Debug)]
pub struct WorldGenerator {
    seed: f64,
    config: WorldConfig,
    lexicon: Lexicon,
    chunks: BTreeMap<ChunkCoord, Chunk>,
    colliders: Vec<Collider>,
    doors: Vec<Door>,
    next_visual: u64,
}

impl WorldGenerator {
    /// Create a generator with the default config and the given world seed.
    pub fn new(seed: f64) -> Self {
        Self::with_config(seed, WorldConfig::default())
    }

    pub fn with_config(seed: f64, config: WorldConfig) -> Self {
        Self {
            seed,
            config,
            lexicon: default_lexicon(),
            chunks: BTreeMap::new(),
            colliders: Vec::new(),
            doors: Vec::new(),
            next_visual: 0,
        }
    }

    /// Advance the active window to follow the reference position.
    ///
    /// Ensures every chunk within `active_radius` of the containing chunk
    /// exists, then evicts chunks beyond `active_radius + 1` on either axis.
    /// Idempotent: a repeated position performs no new work.
    pub fn update(&mut self, reference: Vec3) {
        let center =
            ChunkCoord::containing(reference.x, reference.z, self.config.chunk_size);
        let radius = self.config.active_radius;

        for dz in -radius..=radius {
            for dx in -radius..=radius {
                let coord = ChunkCoord::new(center.cx + dx, center.cz + dz);
                if !self.chunks.contains_key(&coord) {
                    self.generate_chunk(coord);
                }
            }
        }

        let keep = radius + 1;
        let stale: Vec<ChunkCoord> = self
            .chunks
            .keys()
            .filter(|c| (c.cx - center.cx).abs() > keep || (c.cz - center.cz).abs() > keep)
            .copied()
            .collect();
        for coord in stale {
            self.evict_chunk(coord);
        }
    }

    fn generate_chunk(&mut self, coord: ChunkCoord) {
        let kind = self.kind_at(coord);
        let name = self.name_for(kind, coord);
        let build = populate(kind, coord, &name, &self.config, &self.lexicon, self.seed);

        self.colliders.extend(build.colliders);
        self.doors.extend(build.doors);

        let visual = VisualId(self.next_visual);
        self.next_visual += 1;

        self.chunks.insert(
            coord,
            Chunk {
                coord,
                kind,
                name,
                visual,
                content: build.content,
            },
        );
    }

    /// Drop a chunk and everything derived from it, as a unit.
    fn evict_chunk(&mut self, coord: ChunkCoord) {
        self.chunks.remove(&coord);
        self.colliders.retain(|c| c.chunk != coord);
        self.doors.retain(|d| d.chunk != coord);
    }

    /// Terrain class of a chunk, loaded or not.
    pub fn kind_at(&self, coord: ChunkCoord) -> ChunkKind {
        ChunkKind::from_roll(coord_hash(coord.cx, coord.cz, self.seed))
    }

    fn name_for(&self, kind: ChunkKind, coord: ChunkCoord) -> String {
        let (lex, cx, cz, seed) = (&self.lexicon, coord.cx, coord.cz, self.seed);
        match kind {
            ChunkKind::City => city_name(lex, cx, cz, seed),
            ChunkKind::Suburb => suburb_name(lex, cx, cz, seed),
            ChunkKind::Park => park_name(lex, cx, cz, seed),
            ChunkKind::Highway => highway_name(cx, cz, seed),
            ChunkKind::Wasteland => wasteland_name(lex, cx, cz, seed),
        }
    }

    /// Area name for a world position.
    ///
    /// Returns the stored name when the containing chunk is loaded;
    /// otherwise computes kind and name on the fly without touching any
    /// loaded state. The fallback agrees exactly with what generation would
    /// produce for that chunk.
    pub fn area_name_for(&self, x: f32, z: f32) -> String {
        let coord = ChunkCoord::containing(x, z, self.config.chunk_size);
        match self.chunks.get(&coord) {
            Some(chunk) => chunk.name.clone(),
            None => self.name_for(self.kind_at(coord), coord),
        }
    }

    /// The closest door within `max_distance` of a position, by squared
    /// planar distance, or `None`. At equal distance the first door in
    /// insertion order wins (generation order — deterministic, but an
    /// assumption rather than a contract).
    pub fn nearby_door(&self, x: f32, z: f32, max_distance: f32) -> Option<&Door> {
        let max_sq = max_distance * max_distance;
        let mut best: Option<(&Door, f32)> = None;
        for door in &self.doors {
            let dx = door.x - x;
            let dz = door.z - z;
            let dist_sq = dx * dx + dz * dz;
            if dist_sq <= max_sq && best.is_none_or(|(_, b)| dist_sq < b) {
                best = Some((door, dist_sq));
            }
        }
        best.map(|(door, _)| door)
    }

    /// Push a caller-supplied position out of any collider it overlaps and
    /// clamp it to the floor. See `collision.rs` for the exact semantics.
    pub fn resolve_collisions(&self, pos: &mut Vec3, radius: f32) {
        resolve_collisions(&self.colliders, pos, radius, self.config.floor_height);
    }

    // -- read accessors -----------------------------------------------------

    pub fn chunk(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.chunks.get(&coord)
    }

    /// All loaded chunks, in coordinate order.
    pub fn chunks(&self) -> impl Iterator<Item = &Chunk> {
        self.chunks.values()
    }

    pub fn loaded_count(&self) -> usize {
        self.chunks.len()
    }

    pub fn colliders(&self) -> &[Collider] {
        &self.colliders
    }

    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: f64 = 1337.0;

    fn at_chunk(cx: i32, cz: i32) -> Vec3 {
        // Center of the chunk, at eye height.
        let size = WorldConfig::default().chunk_size;
        Vec3::new((cx as f32 + 0.5) * size, 1.7, (cz as f32 + 0.5) * size)
    }

    #[test]
    fn update_loads_the_active_window() {
        let mut world = WorldGenerator::new(SEED);
        world.update(at_chunk(0, 0));
        assert_eq!(world.loaded_count(), 9);
        for dz in -1..=1 {
            for dx in -1..=1 {
                assert!(world.chunk(ChunkCoord::new(dx, dz)).is_some());
            }
        }
    }

    #[test]
    fn update_is_idempotent() {
        let mut world = WorldGenerator::new(SEED);
        world.update(at_chunk(0, 0));
        let count = world.loaded_count();
        let colliders = world.colliders().len();
        let doors = world.doors().len();
        let visuals: Vec<VisualId> = world.chunks().map(|c| c.visual).collect();

        world.update(at_chunk(0, 0));
        assert_eq!(world.loaded_count(), count);
        assert_eq!(world.colliders().len(), colliders);
        assert_eq!(world.doors().len(), doors);
        // No chunk was regenerated.
        assert_eq!(visuals, world.chunks().map(|c| c.visual).collect::<Vec<_>>());
    }

    #[test]
    fn eviction_beyond_radius_plus_one() {
        let mut world = WorldGenerator::new(SEED);
        world.update(at_chunk(0, 0));
        // Move far east; the origin window is now out of range.
        world.update(at_chunk(10, 0));

        for chunk in world.chunks() {
            assert!(
                (chunk.coord.cx - 10).abs() <= 2 && chunk.coord.cz.abs() <= 2,
                "stale chunk {} survived eviction",
                chunk.coord
            );
        }
        // Derived state went with the chunks.
        for collider in world.colliders() {
            assert!((collider.chunk.cx - 10).abs() <= 2);
        }
        for door in world.doors() {
            assert!((door.chunk.cx - 10).abs() <= 2);
        }
    }

    #[test]
    fn neighbors_within_radius_plus_one_survive() {
        let mut world = WorldGenerator::new(SEED);
        world.update(at_chunk(0, 0));
        // One chunk east: the old west column is at distance 2 — kept.
        world.update(at_chunk(1, 0));
        assert!(world.chunk(ChunkCoord::new(-1, 0)).is_some());
        assert_eq!(world.loaded_count(), 12);
    }

    #[test]
    fn regeneration_reproduces_chunk_exactly() {
        let mut world = WorldGenerator::new(SEED);
        world.update(at_chunk(0, 0));
        let before = world.chunk(ChunkCoord::new(0, 0)).unwrap().clone();
        let doors_before: Vec<_> = world
            .doors()
            .iter()
            .filter(|d| d.chunk == ChunkCoord::new(0, 0))
            .cloned()
            .collect();

        // Walk away until (0,0) is evicted, then walk back.
        world.update(at_chunk(10, 10));
        assert!(world.chunk(ChunkCoord::new(0, 0)).is_none());
        world.update(at_chunk(0, 0));

        let after = world.chunk(ChunkCoord::new(0, 0)).unwrap();
        assert_eq!(after.kind, before.kind);
        assert_eq!(after.name, before.name);
        assert_eq!(after.content, before.content);
        let doors_after: Vec<_> = world
            .doors()
            .iter()
            .filter(|d| d.chunk == ChunkCoord::new(0, 0))
            .cloned()
            .collect();
        assert_eq!(doors_after, doors_before);
        // Only the opaque visual handle is new.
        assert_ne!(after.visual, before.visual);
    }

    #[test]
    fn chunk_kind_matches_independent_hash() {
        let world = WorldGenerator::new(SEED);
        for cx in -5..5 {
            for cz in -5..5 {
                let expected = ChunkKind::from_roll(coord_hash(cx, cz, SEED));
                assert_eq!(world.kind_at(ChunkCoord::new(cx, cz)), expected);
            }
        }
    }

    #[test]
    fn area_name_fallback_agrees_with_generation() {
        let mut world = WorldGenerator::new(SEED);
        let size = world.config().chunk_size;
        // Far-away chunk, never loaded: fallback path.
        let fallback = world.area_name_for(100.5 * size, -40.5 * size);
        // Load it and compare with the stored name.
        world.update(Vec3::new(100.5 * size, 1.7, -40.5 * size));
        let stored = world.area_name_for(100.5 * size, -40.5 * size);
        assert_eq!(fallback, stored);
    }

    #[test]
    fn nearby_door_finds_closest_and_respects_range() {
        let mut world = WorldGenerator::new(SEED);
        // Scan a few windows until some doors are loaded (city/suburb
        // chunks are ~60% of the world, so this terminates immediately in
        // practice).
        let mut probe = None;
        'outer: for cx in 0..20 {
            world.update(at_chunk(cx, 0));
            if let Some(door) = world.doors().first() {
                probe = Some((door.x, door.z, door.id));
                break 'outer;
            }
        }
        let (x, z, id) = probe.expect("no doors in 20 windows");

        let found = world.nearby_door(x, z, 1.0).expect("door under probe");
        assert_eq!(found.id, id);
        // An absurdly small radius finds nothing from far away.
        assert!(world.nearby_door(x + 500.0, z, 1.0).is_none());
    }

    #[test]
    fn nearby_door_is_none_without_doors() {
        let world = WorldGenerator::new(SEED);
        assert!(world.nearby_door(0.0, 0.0, 10.0).is_none());
    }
}
