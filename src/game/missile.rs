use super::prelude::*;

pub fn spawn(world: &mut World, pos: Vec2, facing: Facing, cfg: &GameCfg) -> EntityId {
    world.add_entity((
        Body::moving(
            pos,
            vec2(facing.sign() * cfg.missile.speed, 0.0),
            Vec2::splat(cfg.missile.size),
            Anchor::Center,
        ),
        MissileTag,
        AnimationPlay::new(AnimationPackId::Missile, Action::Fly).with_facing(facing),
        layers::MISSILES,
    ))
}

pub fn update(resources: &Resources, world: &mut World) {
    let cfg = &resources.cfg;
    let enemies = world.run(|body: View<Body>, enemy: View<Enemy>| {
        (&body, &enemy)
            .iter()
            .with_id()
            .map(|(id, (body, _))| (id, body.aabb()))
            .collect::<Vec<_>>()
    });
    let mut doomed = Vec::new();

    world.run(
        |mut body: ViewMut<Body>, mut anim: ViewMut<AnimationPlay>, tag: View<MissileTag>| {
            for (id, (body, anim, _)) in (&mut body, &mut anim, &tag).iter().with_id() {
                body.step();

                match anim.action {
                    Action::Fly => {
                        let aabb = body.aabb();
                        let hit = enemies.iter().find(|(enemy, other)| {
                            !doomed.contains(enemy) && hit_test(aabb, *other, cfg.hits.enemy_ratio)
                        });
                        if let Some((enemy, _)) = hit {
                            doomed.push(*enemy);
                            body.vel = Vec2::ZERO;
                            anim.set_action(Action::Explode);
                        }
                    }
                    Action::Explode => {
                        body.vel = Vec2::ZERO;
                        if anim.cycle_finished() {
                            doomed.push(id);
                        }
                    }
                    _ => (),
                }

                if body.pos.x < 0.0 || body.pos.x > cfg.screen.width {
                    doomed.push(id);
                }
            }
        },
    );

    for id in doomed {
        world.delete_entity(id);
    }
}
