// Data-driven simulation configuration.
//
// All tunable parameters live here, loaded from JSON or built from
// `Default`. The sim never uses magic numbers — it reads from the config.
// The `Default` values reproduce the prototype's balance exactly, so
// default-config behavior is the documented behavior; tests rely on that.
//
// Per-kind unit behavior (hit points, speed, damage, cost) is a data table
// keyed by `UnitKind`, so balance changes never touch simulation logic.
//
// See also: `worldgen.rs` and `content.rs` which read `WorldConfig`,
// `war.rs` which reads `WarConfig`.
//
// **Critical constraint: determinism.** Config values feed directly into
// simulation logic; replays require identical configs.

use crate::types::{PlanePos, UnitKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// World generation
// ---------------------------------------------------------------------------

/// Building-lot parameters for one built-up chunk kind (city or suburb).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LotProfile {
    /// Lots per side: the chunk carries a `grid` x `grid` lot layout.
    pub grid: u32,
    /// Building footprint range (width and depth drawn independently).
    pub footprint_min: f32,
    pub footprint_max: f32,
    /// Building height range.
    pub height_min: f32,
    pub height_max: f32,
    /// Base facade color, perturbed per building.
    pub base_color: [f32; 3],
}

/// World-generator tunables.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Side length of one square chunk, in world units.
    pub chunk_size: f32,
    /// Chunks kept loaded on each side of the reference chunk. 1 = a 3x3
    /// window. Eviction triggers beyond `active_radius + 1`.
    pub active_radius: i32,
    /// Minimum vertical coordinate enforced by collision resolution.
    pub floor_height: f32,
    pub city: LotProfile,
    pub suburb: LotProfile,
    /// Probability a lot stays empty. The same draw that decides occupancy
    /// classifies an occupied lot's door: shop below `lot_shop_split`,
    /// office above. With occupancy at 0.2 and the split at 0.6 the
    /// shop/office ratio is 50/50.
    pub empty_lot_chance: f64,
    pub lot_shop_split: f64,
    /// Gap between a building's +z face and its door marker.
    pub door_offset: f32,
    pub road_width: f32,
    pub park_tree_count: u32,
    pub wasteland_debris_count: u32,
    pub highway_width: f32,
    pub highway_elevation: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            chunk_size: 48.0,
            active_radius: 1,
            floor_height: 1.7,
            city: LotProfile {
                grid: 4,
                footprint_min: 6.0,
                footprint_max: 10.0,
                height_min: 10.0,
                height_max: 30.0,
                base_color: [0.55, 0.56, 0.60],
            },
            suburb: LotProfile {
                grid: 3,
                footprint_min: 5.0,
                footprint_max: 8.0,
                height_min: 4.0,
                height_max: 9.0,
                base_color: [0.74, 0.68, 0.58],
            },
            empty_lot_chance: 0.2,
            lot_shop_split: 0.6,
            door_offset: 0.4,
            road_width: 7.0,
            park_tree_count: 10,
            wasteland_debris_count: 8,
            highway_width: 12.0,
            highway_elevation: 6.0,
        }
    }
}

impl WorldConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// ---------------------------------------------------------------------------
// War simulation
// ---------------------------------------------------------------------------

/// Per-kind unit data.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UnitStats {
    pub hit_points: f32,
    /// Movement per tick on the war plane.
    pub speed: f32,
    /// Damage dealt to an enemy base on arrival. Zero for builders.
    pub damage: f32,
    /// Stockpile cost to spawn.
    pub cost: f32,
}

/// One of the three permanent factions.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FactionSpec {
    pub name: String,
    pub color: [f32; 3],
    /// Starting base position on the war plane.
    pub home: PlanePos,
}

/// War-simulation tunables.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WarConfig {
    /// Simulated seconds between ticks; `update` calls accumulating less
    /// than this are no-ops. 0.5 caps the tick rate at 2 Hz.
    pub tick_interval: f32,
    /// Resources gathered per base per tick: `gather_base + [0, gather_spread)`.
    pub gather_base: f32,
    pub gather_spread: f32,
    /// A base richer than this rolls for a unit spawn.
    pub spawn_threshold: f32,
    /// Spawn roll bands: above `tank_roll_over` spawns a tank, above
    /// `air_roll_over` an air unit, otherwise infantry.
    pub tank_roll_over: f32,
    pub air_roll_over: f32,
    /// A base richer than this may send a base-founding convoy...
    pub convoy_threshold: f32,
    /// ...when a draw exceeds this.
    pub convoy_roll_over: f32,
    /// Cardinal distance from the parent base at which a convoy founds.
    pub convoy_offset: f32,
    /// A builder founds only if no existing base is closer than this.
    pub founding_clearance: f32,
    /// Combat units strike every enemy base within this range on arrival.
    pub base_strike_range: f32,
    /// Cross-faction units closer than this skirmish.
    pub skirmish_range: f32,
    pub skirmish_damage: f32,
    /// A unit at most this far from its target counts as arrived.
    pub arrive_epsilon: f32,
    pub base_start_hit_points: f32,
    pub base_start_stockpile: f32,
    /// Bounded recent-event ring size.
    pub event_capacity: usize,
    pub units: BTreeMap<UnitKind, UnitStats>,
    pub factions: Vec<FactionSpec>,
}

impl Default for WarConfig {
    fn default() -> Self {
        let mut units = BTreeMap::new();
        units.insert(
            UnitKind::Infantry,
            UnitStats { hit_points: 20.0, speed: 0.5, damage: 10.0, cost: 25.0 },
        );
        units.insert(
            UnitKind::Tank,
            UnitStats { hit_points: 40.0, speed: 0.4, damage: 30.0, cost: 40.0 },
        );
        units.insert(
            UnitKind::Air,
            UnitStats { hit_points: 30.0, speed: 0.8, damage: 20.0, cost: 35.0 },
        );
        units.insert(
            UnitKind::Builder,
            UnitStats { hit_points: 20.0, speed: 0.4, damage: 0.0, cost: 80.0 },
        );

        Self {
            tick_interval: 0.5,
            gather_base: 5.0,
            gather_spread: 5.0,
            spawn_threshold: 80.0,
            tank_roll_over: 0.75,
            air_roll_over: 0.5,
            convoy_threshold: 120.0,
            convoy_roll_over: 0.7,
            convoy_offset: 3.0,
            founding_clearance: 1.0,
            base_strike_range: 1.0,
            skirmish_range: 0.7,
            skirmish_damage: 5.0,
            arrive_epsilon: 0.01,
            base_start_hit_points: 100.0,
            base_start_stockpile: 50.0,
            event_capacity: 10,
            units,
            factions: vec![
                FactionSpec {
                    name: "Ferrum Combine".to_string(),
                    color: [0.85, 0.20, 0.20],
                    home: PlanePos::new(0.0, 0.0),
                },
                FactionSpec {
                    name: "Cobalt Accord".to_string(),
                    color: [0.20, 0.40, 0.90],
                    home: PlanePos::new(6.0, -4.0),
                },
                FactionSpec {
                    name: "Mossback Union".to_string(),
                    color: [0.20, 0.70, 0.30],
                    home: PlanePos::new(-5.0, 5.0),
                },
            ],
        }
    }
}

impl WarConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Stats for a unit kind. The table always carries all four kinds.
    pub fn stats(&self, kind: UnitKind) -> &UnitStats {
        &self.units[&kind]
    }
}
