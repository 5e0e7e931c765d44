// sprawl_sim — pure Rust simulation core for the Sprawl prototype.
//
// This crate is the "living world" behind a small 3D city-exploration game:
// a deterministic chunk-streaming world generator and an autonomous
// three-faction war simulation. It has zero rendering dependencies and runs
// headless; the presentation layer (renderer, input, UI, chat) lives outside
// and consumes this crate through read accessors.
//
// Module overview:
// - `worldgen.rs`:  WorldGenerator — chunk window lifecycle, area-name and
//                   nearest-door queries, collision entry point.
// - `content.rs`:   Per-chunk content generation (buildings, doors, roads,
//                   trees, debris) from the coordinate hash.
// - `collision.rs`: AABB colliders + per-collider push-out resolution.
// - `war.rs`:       WarSim — faction economy, unit movement, coarse combat.
// - `event.rs`:     Narrative war events + the bounded recent-history ring.
// - `config.rs`:    WorldConfig / WarConfig — all tunable parameters.
// - `types.rs`:     Coordinates, ids, classification enums.
// - `prng`:         Re-exported from `sprawl_prng` — coordinate hash and
//                   the sequential xoshiro128++ generator.
//
// The two components are independent: the world generator never reads war
// state and vice versa. An external frame loop composes them — player
// position into `WorldGenerator::update`, clamped frame time into
// `WarSim::update`, queries afterwards. Everything is single-threaded; each
// component exclusively owns its collections and mutates them only inside
// its own update path, so the driver must finish updating before it reads.
//
// **Critical constraint: determinism.** World content is a pure function of
// `(chunk coords, world seed)`; the war replays identically from a seed. No
// system time, no OS entropy, no HashMap iteration.

pub mod collision;
pub mod config;
pub mod content;
pub mod event;
pub use sprawl_prng as prng;
pub mod types;
pub mod war;
pub mod worldgen;
