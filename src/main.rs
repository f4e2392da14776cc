use lib_game::{App, GameCfg, Render, load_resources, sys};
use macroquad::prelude::*;

mod game;

const CONFIG_PATH: &str = "assets/config.ron";
const MANIFEST_PATH: &str = "assets/manifest.ron";
const HIGHSCORE_PATH: &str = "highscore.txt";

fn window_conf() -> Conf {
    Conf {
        window_title: "Rainbow Ripoff!".to_owned(),
        high_dpi: true,
        window_width: 1152,
        window_height: 648,
        fullscreen: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        sys::panic_screen(&format!("Driver panicked:\n{}", info));
        hook(info);
    }));

    if let Err(e) = run().await {
        error!("{e:?}");
        sys::panic_screen(&format!("Driver exitted with error:\n{:?}", e));
    }
}

async fn run() -> anyhow::Result<()> {
    quad_dbg::init_on_screen_log()?;
    macroquad::rand::srand(miniquad::date::now() as u64);
    set_default_filter_mode(FilterMode::Nearest);

    let cfg = GameCfg::load(CONFIG_PATH).await?;
    let mut render = Render::new(cfg.screen_size());
    let resources = load_resources(cfg, MANIFEST_PATH, HIGHSCORE_PATH, &mut render).await?;

    info!("Project version: {}", env!("CARGO_PKG_VERSION"));

    App::new(&window_conf(), resources, render)
        .run(&mut game::Project)
        .await;

    Ok(())
}
