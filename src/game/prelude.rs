pub use super::components::*;
pub use lib_anim::{Action, AnimationPackId, Facing, ImgRect};
pub use lib_col::{Aabb, hit_test};
pub use lib_game::*;
pub use macroquad::prelude::*;
pub use shipyard::{
    EntityId, Get, IntoIter, UniqueView, UniqueViewMut, View, ViewMut, World,
};

/// Draw layers, bottom to top.
pub mod layers {
    use lib_game::DrawLayer;

    pub const PLATFORMS: DrawLayer = DrawLayer(0);
    pub const PICKUPS: DrawLayer = DrawLayer(1);
    pub const PLAYER: DrawLayer = DrawLayer(2);
    pub const ENEMIES: DrawLayer = DrawLayer(3);
    pub const MISSILES: DrawLayer = DrawLayer(4);
}
