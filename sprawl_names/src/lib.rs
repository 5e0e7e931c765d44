// Deterministic place and point-of-interest naming for Sprawl.
//
// Area names (city blocks, suburbs, parks, highways, wasteland) and shop
// names are derived entirely from chunk grid coordinates through
// `sprawl_prng::coord_hash`, so the same coordinates always carry the same
// names — even when the chunk that owns them has been evicted and is being
// named on the fly.
//
// Each sub-component of a name (root pick, suffix pick, route number, shop
// goods) draws from the hash with its own constant offset added to the seed.
// Sharing one draw between two components would visibly correlate them
// (every "Velden City" becoming a "Velden Park" one chunk over), so the
// offsets below must stay distinct.
//
// The word pools live in `data/place_lexicon.json`, embedded at compile time
// and parsed with serde — JSON string in, typed struct out. Pool order is
// preserved (Vec, not a set) because names index into pools by position.
//
// **Critical constraint: determinism.** Same `(x, z[, index], seed)` in,
// same string out, on every platform. All randomness flows through
// `coord_hash`; there is no generator state here.

use serde::Deserialize;
use sprawl_prng::coord_hash;

// Seed offsets, one per independently drawn name component.
const ROOT_EXTRA: f64 = 101.0;
const SUFFIX_EXTRA: f64 = 211.0;
const ROUTE_EXTRA: f64 = 307.0;
const SHOP_ROOT_EXTRA: f64 = 401.0;
const SHOP_GOODS_EXTRA: f64 = 523.0;
// Per-index stride for POI draws; larger than any offset above so indexed
// draws never collide with the area-name draws.
const INDEX_STRIDE: f64 = 1000.0;

/// The top-level JSON structure of the lexicon file.
#[derive(Debug, Clone, Deserialize)]
pub struct Lexicon {
    /// Proper-noun roots shared by every name family.
    pub roots: Vec<String>,
    pub suburb_suffixes: Vec<String>,
    pub park_suffixes: Vec<String>,
    pub wasteland_suffixes: Vec<String>,
    /// Trailing word of a shop name ("Noodles", "Records", ...).
    pub shop_goods: Vec<String>,
}

impl Lexicon {
    /// Parse a lexicon from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Load the default lexicon embedded at compile time.
///
/// Panics if the embedded JSON is malformed (cannot happen in a released
/// build; the unit tests parse it).
pub fn default_lexicon() -> Lexicon {
    Lexicon::from_json(include_str!("../data/place_lexicon.json"))
        .expect("embedded place_lexicon.json is malformed")
}

/// Index into a pool with a hash draw in [0, 1).
fn pick<'a>(pool: &'a [String], h: f64) -> &'a str {
    debug_assert!(!pool.is_empty(), "lexicon pool must not be empty");
    let idx = ((h * pool.len() as f64) as usize).min(pool.len() - 1);
    &pool[idx]
}

/// Block code for a city chunk: column letter from |cx|, row number from
/// |cz|. `(2, -13)` becomes `"C14"`.
pub fn block_code(cx: i32, cz: i32) -> String {
    let letter = (b'A' + (cx.unsigned_abs() % 26) as u8) as char;
    let number = cz.unsigned_abs() % 99 + 1;
    format!("{letter}{number}")
}

/// Name for a city chunk: `"<Root> City, Block <Letter><Number>"`.
pub fn city_name(lex: &Lexicon, cx: i32, cz: i32, seed: f64) -> String {
    let root = pick(&lex.roots, coord_hash(cx, cz, seed + ROOT_EXTRA));
    format!("{root} City, Block {}", block_code(cx, cz))
}

/// Name for a suburb chunk: `"<Root> <Suffix>"`, e.g. `"Harlow Heights"`.
pub fn suburb_name(lex: &Lexicon, cx: i32, cz: i32, seed: f64) -> String {
    let root = pick(&lex.roots, coord_hash(cx, cz, seed + ROOT_EXTRA));
    let suffix = pick(&lex.suburb_suffixes, coord_hash(cx, cz, seed + SUFFIX_EXTRA));
    format!("{root} {suffix}")
}

/// Name for a park chunk: `"<Root> <Suffix>"`, e.g. `"Yarrow Green"`.
pub fn park_name(lex: &Lexicon, cx: i32, cz: i32, seed: f64) -> String {
    let root = pick(&lex.roots, coord_hash(cx, cz, seed + ROOT_EXTRA));
    let suffix = pick(&lex.park_suffixes, coord_hash(cx, cz, seed + SUFFIX_EXTRA));
    format!("{root} {suffix}")
}

/// Name for a highway chunk: `"Route <N>"` with N in 1..=99.
pub fn highway_name(cx: i32, cz: i32, seed: f64) -> String {
    let n = 1 + (coord_hash(cx, cz, seed + ROUTE_EXTRA) * 99.0) as u32;
    format!("Route {n}")
}

/// Name for a wasteland chunk: `"The <Root> <Suffix>"`.
pub fn wasteland_name(lex: &Lexicon, cx: i32, cz: i32, seed: f64) -> String {
    let root = pick(&lex.roots, coord_hash(cx, cz, seed + ROOT_EXTRA));
    let suffix = pick(
        &lex.wasteland_suffixes,
        coord_hash(cx, cz, seed + SUFFIX_EXTRA),
    );
    format!("The {root} {suffix}")
}

/// Name for a shop point of interest, e.g. `"Kestrel Records"`.
///
/// `index` is the lot index within the chunk; it shifts both draws by
/// `INDEX_STRIDE` so every shop in a chunk names independently.
pub fn poi_name(lex: &Lexicon, cx: i32, cz: i32, index: u32, seed: f64) -> String {
    let stride = index as f64 * INDEX_STRIDE;
    let root = pick(&lex.roots, coord_hash(cx, cz, seed + SHOP_ROOT_EXTRA + stride));
    let goods = pick(
        &lex.shop_goods,
        coord_hash(cx, cz, seed + SHOP_GOODS_EXTRA + stride),
    );
    format!("{root} {goods}")
}
