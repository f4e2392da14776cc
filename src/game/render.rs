use super::prelude::*;

const HUD_FONT_SIZE: u16 = 30;
const HUD_MARGIN: f32 = 20.0;

pub fn spider_threads(render: &mut Render, world: &World, camera: &ScrollCamera) {
    let Ok(threads) = world.borrow::<UniqueView<SpiderThreads>>() else {
        return;
    };

    for &(from, to) in &threads.0 {
        render.put_line(LineDraw {
            from: camera.apply_point(from),
            to: camera.apply_point(to),
            color: WHITE,
        });
    }
}

pub fn game_ui(render: &mut Render, world: &World, camera: &ScrollCamera) {
    let screen = camera.screen_size();
    let score = world
        .borrow::<UniqueView<PlayerScore>>()
        .map(|score| score.0)
        .unwrap_or_default();

    render.put_text(TextDraw {
        text: score.to_string(),
        pos: vec2(screen.x / 2.0, HUD_MARGIN),
        font_size: HUD_FONT_SIZE,
        color: WHITE,
    });

    let action = world.run(|anim: View<AnimationPlay>, tag: View<PlayerTag>| {
        (&anim, &tag).iter().next().map(|(anim, _)| anim.action)
    });
    if let Some(action) = action {
        render.put_text(TextDraw {
            text: format!("{action:?}"),
            pos: vec2(screen.x - 4.0 * HUD_MARGIN, HUD_MARGIN),
            font_size: HUD_FONT_SIZE,
            color: RED,
        });
    }
}
