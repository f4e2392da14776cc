//! Plain-text tile maps.
//!
//! A map is one line per tile row. Every character is a tile:
//! * `1` is a platform
//! * `p` marks where the player starts
//! * `c`, `b` and `s` mark where a caterpillar, a bird or a spider starts
//! * anything else is empty space
//!
//! Tabs are stripped and trailing whitespace is ignored. Rows may have
//! different lengths, the map is as wide as its longest row.

mod map;

pub use map::*;
