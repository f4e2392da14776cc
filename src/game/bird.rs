use super::prelude::*;

pub fn spawn(world: &mut World, pos: Vec2, cfg: &GameCfg) -> EntityId {
    let size = vec2(cfg.enemy.width, cfg.enemy.height) * cfg.screen.tile_size;

    world.add_entity((
        Body::fixed(pos, size, Anchor::MidBottom),
        Enemy::Bird { last_phase: 0.0 },
        AnimationPlay::new(AnimationPackId::Bird, Action::Fly),
        layers::ENEMIES,
    ))
}

/// Aims the bird at `target`. The course is only corrected when the
/// resample clock wraps, so the bird flies in straight segments.
fn chase(
    body: &mut Body,
    last_phase: &mut f32,
    target: Vec2,
    elapsed: f32,
    cfg: &sections::Bird,
) {
    let phase = elapsed.rem_euclid(cfg.resample_period);
    if phase < *last_phase {
        body.vel = (target - body.pos).normalize_or_zero() * cfg.speed;
    }
    *last_phase = phase;
}

pub fn update(time: &FrameTime, resources: &Resources, world: &mut World) {
    let cfg = &resources.cfg;
    let Some(target) = world.run(|body: View<Body>, tag: View<PlayerTag>| {
        (&body, &tag).iter().next().map(|(body, _)| body.pos)
    }) else {
        return;
    };
    let range = cfg.bird.chase_range * cfg.screen.height;

    world.run(
        |mut body: ViewMut<Body>, mut anim: ViewMut<AnimationPlay>, mut enemy: ViewMut<Enemy>| {
            for (body, anim, enemy) in (&mut body, &mut anim, &mut enemy).iter() {
                let Enemy::Bird { last_phase } = enemy else {
                    continue;
                };

                if (target.y - body.pos.y).abs() < range {
                    chase(body, last_phase, target, time.elapsed, &cfg.bird);
                } else {
                    body.vel = Vec2::ZERO;
                }

                anim.facing = Facing::from_velocity(body.vel.x, anim.facing);
                body.step();
            }
        },
    );
}
