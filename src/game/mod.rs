mod bird;
mod caterpillar;
mod components;
mod missile;
mod pickup;
mod platform;
mod player;
mod prelude;
mod render;
mod spider;

use lib_level::{MapDef, TileKind};
use macroquad::rand::ChooseRandom;
use prelude::*;

/// Midbottom of the tile at `col`, `row`. Actors stand on the tile below.
fn actor_pos(col: usize, row: usize, tile: f32) -> Vec2 {
    vec2((col as f32 + 0.5) * tile, (row as f32 + 1.0) * tile)
}

fn init_level(world: &mut World, level: &MapDef, resources: &Resources) {
    let cfg = &resources.cfg;
    let tile = cfg.screen.tile_size;
    let (map_w, map_h) = level.pixel_size(tile);

    world.add_unique(PlayerScore::default());
    world.add_unique(SpiderThreads::default());
    world.add_unique(LevelBounds {
        screen: cfg.screen_size(),
        map: vec2(map_w, map_h),
    });

    for (col, row, tile_kind) in level.iter_poses() {
        let pos = actor_pos(col, row, tile);
        match tile_kind {
            TileKind::Empty => (),
            TileKind::Platform => {
                platform::spawn(world, col, row, tile);
            }
            TileKind::PlayerStart => {
                player::spawn(world, pos, cfg);
            }
            TileKind::CaterpillarStart => {
                caterpillar::spawn(world, pos, cfg);
            }
            TileKind::BirdStart => {
                bird::spawn(world, pos, cfg);
            }
            TileKind::SpiderStart => {
                spider::spawn(world, pos, cfg);
            }
        }
    }

    let mut spots = level.pickup_spots();
    spots.shuffle();
    pickup::scatter(world, &spots, resources);
}

fn decide_next_state(world: &World) -> Option<AppState> {
    match player::state(world) {
        Some(PlayerState::Alive | PlayerState::Dying) => None,
        Some(PlayerState::Done) | None => Some(AppState::GameOver { new_best: false }),
    }
}

pub struct Project;

impl Game for Project {
    fn title(&self) -> &str {
        "Rainbow Ripoff!"
    }

    fn init(&mut self, resources: &Resources, world: &mut World) {
        match &resources.level {
            Some(level) => init_level(world, level, resources),
            None => warn!("No level loaded"),
        }
    }

    fn input_phase(
        &mut self,
        input: &InputModel,
        _time: &FrameTime,
        _resources: &Resources,
        world: &mut World,
    ) {
        world.run_with_data(player::controls, input);
    }

    fn update(
        &mut self,
        time: &FrameTime,
        resources: &Resources,
        world: &mut World,
    ) -> Option<AppState> {
        player::update(time, resources, world);
        caterpillar::update(world);
        bird::update(time, resources, world);
        spider::update(resources, world);
        missile::update(resources, world);

        decide_next_state(world)
    }

    fn camera_target(&self, world: &World) -> Option<Vec2> {
        player::center(world)
    }

    fn score(&self, world: &World) -> u32 {
        world
            .borrow::<UniqueView<PlayerScore>>()
            .map(|score| score.0)
            .unwrap_or_default()
    }

    fn render_export(
        &self,
        _state: &AppState,
        _resources: &Resources,
        world: &World,
        camera: &ScrollCamera,
        render: &mut Render,
    ) {
        render::spider_threads(render, world, camera);
        render::game_ui(render, world, camera);
    }
}
