//! Sprite animation data: what an entity is doing, which way it is facing,
//! which sprite sheet cells show that and when to flip to the next one.

mod animation;
mod clock;
mod sheet;

pub use animation::*;
pub use clock::*;
pub use sheet::*;
