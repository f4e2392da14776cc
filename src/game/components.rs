use lib_game::sections;
use macroquad::prelude::*;
use shipyard::{Component, Unique};

#[derive(Debug, Clone, Copy, Component)]
pub struct PlatformTag;

#[derive(Debug, Clone, Copy, Component)]
pub struct PlayerTag;

#[derive(Debug, Clone, Copy, Component)]
pub struct MissileTag;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Alive,
    /// Playing the death animation
    Dying,
    /// The death animation has finished, the run is over
    Done,
}

#[derive(Debug, Clone, Copy, Component)]
pub struct PlayerData {
    pub run_speed: f32,
    pub jump_speed: f32,
    /// How long a jump can be held after leaving the ground
    pub jump_window: f32,
    pub jump_started: f32,
    pub state: PlayerState,
}

impl PlayerData {
    pub fn new(cfg: &sections::Player) -> Self {
        Self {
            run_speed: cfg.run_speed,
            jump_speed: cfg.jump_speed,
            jump_window: cfg.jump_window,
            jump_started: f32::NEG_INFINITY,
            state: PlayerState::Alive,
        }
    }
}

/// Player intents for the current tick.
#[derive(Debug, Clone, Copy, Default, Component)]
pub struct PlayerControls {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub shoot: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub enum Enemy {
    Caterpillar,
    Bird {
        /// Clock phase seen on the previous tick
        last_phase: f32,
    },
    Spider {
        climbing: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Component)]
pub enum Pickup {
    Points,
    Speedboost,
    Jumpboost,
}

impl Pickup {
    pub fn apply(self, player: &mut PlayerData, score: &mut PlayerScore, cfg: &sections::Pickups) {
        match self {
            Pickup::Points => score.0 += cfg.points,
            Pickup::Speedboost => player.run_speed *= cfg.speed_factor,
            Pickup::Jumpboost => player.jump_window *= cfg.jump_window_factor,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Unique)]
pub struct PlayerScore(pub u32);

/// Spider threads, from the spider to the player it climbs to.
/// Rebuilt every tick.
#[derive(Debug, Clone, Default, Unique)]
pub struct SpiderThreads(pub Vec<(Vec2, Vec2)>);

/// Sizes of the screen and of the map in pixels.
#[derive(Debug, Clone, Copy, Unique)]
pub struct LevelBounds {
    pub screen: Vec2,
    pub map: Vec2,
}
