//! Debug overlays for macroquad games: an on-screen sink for the `log`
//! facade and a per-frame value dump filled with [dump!].

mod debug;
mod screendump;
mod screentext;

pub use debug::*;
pub use screendump::*;
