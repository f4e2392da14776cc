use lib_col::find_ground;

use super::platform;
use super::prelude::*;

pub fn spawn(world: &mut World, pos: Vec2, cfg: &GameCfg) -> EntityId {
    let size = vec2(cfg.enemy.width, cfg.enemy.height) * cfg.screen.tile_size;

    world.add_entity((
        Body::moving(
            pos,
            vec2(cfg.caterpillar.speed, 0.0),
            size,
            Anchor::MidBottom,
        ),
        Enemy::Caterpillar,
        AnimationPlay::new(AnimationPackId::Caterpillar, Action::Walk),
        layers::ENEMIES,
    ))
}

/// Turns the body around when there is no platform one body width ahead.
pub fn patrol(body: &mut Body, platforms: &[Aabb]) {
    if body.vel.x == 0.0 {
        return;
    }

    let ahead = body
        .aabb()
        .translate(vec2(body.size.x * body.vel.x.signum(), 0.0));
    if find_ground(ahead, 0.0, platforms.iter().copied()).is_none() {
        body.vel.x = -body.vel.x;
    }
}

pub fn update(world: &mut World) {
    let platforms = platform::collect_boxes(world);

    world.run(
        |mut body: ViewMut<Body>, mut anim: ViewMut<AnimationPlay>, enemy: View<Enemy>| {
            for (body, anim, enemy) in (&mut body, &mut anim, &enemy).iter() {
                if *enemy != Enemy::Caterpillar {
                    continue;
                }

                patrol(body, &platforms);
                anim.facing = Facing::from_velocity(body.vel.x, anim.facing);
                body.step();
            }
        },
    );
}
