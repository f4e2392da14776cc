mod animations;
mod assets;
mod camera;
mod components;
mod gamecfg;
mod highscore;
mod input;
mod render;

pub mod sys;

pub use animations::*;
pub use assets::*;
pub use camera::*;
pub use components::*;
pub use gamecfg::*;
pub use highscore::*;
pub use input::*;
pub use render::*;

use hashbrown::HashMap;
use lib_anim::AnimationPackId;
use lib_level::MapDef;
use macroquad::miniquad::window::set_window_size;
use macroquad::prelude::*;
use quad_dbg::{ScreenDump, dump};
use shipyard::{View, World};

pub const GAME_TICKRATE: f32 = 1.0 / 60.0;

/// Timing of the current tick. `elapsed` is the game clock every
/// animation and timer is driven by.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTime {
    pub dt: f32,
    pub elapsed: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppState {
    Start,
    Active { paused: bool },
    GameOver { new_best: bool },
}

impl AppState {
    /// Gives a hint whether the game world should be drawn
    pub fn is_presentable(&self) -> bool {
        matches!(self, AppState::Active { .. } | AppState::GameOver { .. })
    }
}

/// The trait containing all callbacks for the game,
/// that is run inside the App. It is usually best to
/// only keep configuration stuff inside this struct.
///
/// One tick of the application loop goes as follows:
/// 1. Game::input_phase
/// 2. Animation clock update
/// 3. Game::update
/// 4. The camera follows Game::camera_target
///
/// Game::render_export is called every frame, ticking or not.
pub trait Game: 'static {
    /// The title shown on the start screen.
    fn title(&self) -> &str;

    /// Put all the appropriate data into the ECS World.
    /// The ECS world should be the only place where the state
    /// is located. The world is always fresh.
    fn init(&mut self, resources: &Resources, world: &mut World);

    /// Handle the user input.
    fn input_phase(
        &mut self,
        input: &InputModel,
        time: &FrameTime,
        resources: &Resources,
        world: &mut World,
    );

    /// Main update routine. You can request the App to transition
    /// into a new state by returning [Option::Some].
    fn update(
        &mut self,
        time: &FrameTime,
        resources: &Resources,
        world: &mut World,
    ) -> Option<AppState>;

    /// The world point the camera should keep centered.
    fn camera_target(&self, world: &World) -> Option<Vec2>;

    /// The score of the current run.
    fn score(&self, world: &World) -> u32;

    /// Export the game world for rendering. Entities with a [DrawLayer]
    /// are already in the sprite buffer at this point.
    fn render_export(
        &self,
        state: &AppState,
        resources: &Resources,
        world: &World,
        camera: &ScrollCamera,
        render: &mut Render,
    );
}

/// The app run all the boilerplate code to make the game tick.
/// The following features are provided:
/// * State transitions and handling
/// * Consistent tickrate timing
/// * Camera follow
/// * High score keeping
/// * Integration with log-rs
/// * Drawing of the `dump!` macro
pub struct App {
    fullscreen: bool,
    old_size: (u32, u32),

    state: AppState,
    pub resources: Resources,
    accumulated_time: f32,
    elapsed: f32,
    last_score: u32,
    shoot_latched: bool,

    camera: ScrollCamera,
    pub render: Render,
    world: World,

    draw_debug: bool,
}

impl App {
    pub fn new(conf: &Conf, resources: Resources, render: Render) -> Self {
        let camera = ScrollCamera::new(resources.cfg.screen_size());

        Self {
            fullscreen: conf.fullscreen,
            old_size: (conf.window_width as u32, conf.window_height as u32),

            state: AppState::Start,
            resources,
            accumulated_time: 0.0,
            elapsed: 0.0,
            last_score: 0,
            shoot_latched: false,

            camera,
            render,
            world: World::new(),

            draw_debug: false,
        }
    }

    /// Just runs the game. This is what you call after loading all the resources.
    /// This method runs until the window is asked to close.
    pub async fn run<G: Game>(mut self, game: &mut G) {
        prevent_quit();
        sys::done_loading();

        info!("Done loading");
        info!("lib-game version: {}", env!("CARGO_PKG_VERSION"));

        loop {
            ScreenDump::new_frame();

            let input = InputModel::capture();
            let real_dt = get_frame_time();
            let do_tick = self.update_ticking(real_dt);
            self.fullscreen_toggles(&input);
            if input.debug_toggle_requested {
                self.draw_debug = !self.draw_debug;
            }

            if is_quit_requested() {
                info!("Quit requested");
                self.finish_run(game);
                break;
            }

            self.next_state(&input, game);
            self.shoot_latched |= input.shoot_pressed;

            dump!("game state: {:?}", self.state);
            if matches!(self.state, AppState::Active { paused: false }) && do_tick {
                if let Some(AppState::GameOver { .. }) = self.game_update(&input, game) {
                    self.finish_run(game);
                }
            }

            self.game_present(game);
            self.debug_info();
            next_frame().await
        }
    }

    fn start_run<G: Game>(&mut self, game: &mut G) {
        info!("Starting a run");

        self.world = World::new();
        self.shoot_latched = false;
        if let Some(level) = &self.resources.level {
            let (w, h) = level.pixel_size(self.resources.cfg.screen.tile_size);
            self.camera.set_map_size(vec2(w, h));
        }

        game.init(&self.resources, &mut self.world);
        if let Some(target) = game.camera_target(&self.world) {
            self.camera.update(target);
        }

        self.state = AppState::Active { paused: false };
    }

    /// Ends the current run and records its score. Does nothing when
    /// there is no run going.
    fn finish_run<G: Game>(&mut self, game: &G) {
        if !matches!(self.state, AppState::Active { .. }) {
            return;
        }

        let score = game.score(&self.world);
        let new_best = match self.resources.highscore.submit(score) {
            Ok(new_best) => new_best,
            Err(e) => {
                error!("Failed to save the high score: {e:#}");
                false
            }
        };
        info!("Game over. Score: {score}");

        self.last_score = score;
        self.state = AppState::GameOver { new_best };
    }

    fn game_update<G: Game>(&mut self, input: &InputModel, game: &mut G) -> Option<AppState> {
        self.elapsed += GAME_TICKRATE;
        let time = FrameTime {
            dt: GAME_TICKRATE,
            elapsed: self.elapsed,
        };
        let input = InputModel {
            shoot_pressed: std::mem::take(&mut self.shoot_latched),
            ..*input
        };

        game.input_phase(&input, &time, &self.resources, &mut self.world);
        update_anims(&time, &self.world, &self.resources);
        let new_state = game.update(&time, &self.resources, &mut self.world);

        if let Some(target) = game.camera_target(&self.world) {
            self.camera.update(target);
        }

        new_state
    }

    fn game_present<G: Game>(&mut self, game: &G) {
        self.render.new_frame();
        if self.state.is_presentable() {
            self.render.put_world_sprites(
                &self.world,
                &self.resources.animations,
                &self.camera,
            );
            game.render_export(
                &self.state,
                &self.resources,
                &self.world,
                &self.camera,
                &mut self.render,
            );
        }
        self.render.set_announcement(self.announcement(game));
        self.render.render();

        if self.draw_debug {
            quad_dbg::draw_log();
            ScreenDump::draw();
        }
    }

    fn announcement<G: Game>(&self, game: &G) -> Option<Announcement> {
        let best = self.resources.highscore.best();
        match self.state {
            AppState::Start => Some(Announcement {
                heading: game.title().to_owned(),
                body: format!(
                    "Arrows Left/Right to run, Space to jump, Ctrl to shoot\n\
                     Press Space to start\n\
                     High Score: {best}"
                ),
            }),
            AppState::Active { paused: true } => Some(Announcement {
                heading: "Paused".to_owned(),
                body: "Press Escape to continue\nPress Q to give up".to_owned(),
            }),
            AppState::Active { paused: false } => None,
            AppState::GameOver { new_best } => {
                let mut body = format!("Score: {}\n", self.last_score);
                if new_best {
                    body.push_str("NEW HIGH SCORE\n");
                } else {
                    body.push_str(&format!("High Score: {best}\n"));
                }
                body.push_str("Press Space to restart");

                Some(Announcement {
                    heading: "GAME OVER".to_owned(),
                    body,
                })
            }
        }
    }

    fn fullscreen_toggles(&mut self, input: &InputModel) {
        if !input.fullscreen_toggle_requested {
            return;
        }

        // NOTE: macroquad does not update window config when it goes fullscreen
        set_fullscreen(!self.fullscreen);

        if self.fullscreen {
            set_window_size(self.old_size.0, self.old_size.1);
        }

        self.fullscreen = !self.fullscreen;
    }

    fn update_ticking(&mut self, real_dt: f32) -> bool {
        self.accumulated_time += real_dt;
        if self.accumulated_time >= 2.0 * GAME_TICKRATE {
            warn!(
                "LAG by {:.2}ms",
                (self.accumulated_time - 2.0 * GAME_TICKRATE) * 1000.0
            );
            self.accumulated_time = 0.0;
            false
        } else if self.accumulated_time >= GAME_TICKRATE {
            self.accumulated_time -= GAME_TICKRATE;
            true
        } else {
            false
        }
    }

    fn debug_info(&mut self) {
        let body_count = self.world.run(|body: View<Body>| body.len());

        dump!("{}", self.accumulated_time);
        dump!("FPS: {:?}", get_fps());
        dump!("Bodies: {body_count}");
        dump!("Camera: {}", self.camera.offset());
    }

    fn next_state<G: Game>(&mut self, input: &InputModel, game: &mut G) {
        match self.state {
            AppState::Start | AppState::GameOver { .. } if input.confirmation_detected => {
                self.start_run(game);
            }
            AppState::Active { .. } if input.quit_requested => {
                info!("Giving up");
                self.finish_run(game);
            }
            AppState::Active { paused } if input.pause_requested => {
                self.state = AppState::Active { paused: !paused };
            }
            _ => (),
        }
    }
}

pub struct Resources {
    pub cfg: GameCfg,
    pub level: Option<MapDef>,
    pub animations: HashMap<AnimationPackId, SpriteSet>,
    pub pickups: PickupFrames,
    pub highscore: HighScore,
}

impl Resources {
    pub fn new(cfg: GameCfg, highscore: HighScore) -> Self {
        Resources {
            cfg,
            level: None,
            animations: HashMap::new(),
            pickups: PickupFrames::default(),
            highscore,
        }
    }
}
