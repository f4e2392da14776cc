use quad_dbg::dump;

use super::prelude::*;
use super::{missile, platform};

pub fn spawn(world: &mut World, pos: Vec2, cfg: &GameCfg) -> EntityId {
    let tile = cfg.screen.tile_size;
    let size = vec2(cfg.player.width, cfg.player.height) * tile;

    world.add_entity((
        Body::fixed(pos, size, Anchor::MidBottom),
        PlayerTag,
        PlayerData::new(&cfg.player),
        PlayerControls::default(),
        AnimationPlay::new(AnimationPackId::Player, Action::Fall),
        layers::PLAYER,
    ))
}

pub fn controls(input: &InputModel, mut controls: ViewMut<PlayerControls>) {
    for controls in (&mut controls).iter() {
        *controls = PlayerControls {
            left: input.left_movement_down,
            right: input.right_movement_down,
            jump: input.jump_down,
            shoot: input.shoot_pressed,
        };
    }
}

pub fn center(world: &World) -> Option<Vec2> {
    world.run(|body: View<Body>, tag: View<PlayerTag>| {
        (&body, &tag).iter().next().map(|(body, _)| body.center())
    })
}

pub fn state(world: &World) -> Option<PlayerState> {
    world.run(|data: View<PlayerData>| (&data).iter().next().map(|data| data.state))
}

/// Starts a jump from the ground or keeps a jump going while the jump
/// window is open.
fn try_jump(body: &mut Body, data: &mut PlayerData, elapsed: f32) -> bool {
    if body.vel.y == 0.0 {
        data.jump_started = elapsed;
    } else if elapsed - data.jump_started >= data.jump_window {
        return false;
    }

    body.vel.y = -data.jump_speed;
    true
}

fn first_hit<'a>(
    body: &Body,
    others: impl IntoIterator<Item = &'a (EntityId, Aabb)>,
    ratio: f32,
) -> Option<EntityId> {
    let aabb = body.aabb();
    others
        .into_iter()
        .find(|(_, other)| hit_test(aabb, *other, ratio))
        .map(|(id, _)| *id)
}

fn enemy_boxes(world: &World) -> Vec<(EntityId, Aabb)> {
    world.run(|body: View<Body>, enemy: View<Enemy>| {
        (&body, &enemy)
            .iter()
            .with_id()
            .map(|(id, (body, _))| (id, body.aabb()))
            .collect()
    })
}

fn pickup_boxes(world: &World) -> Vec<(EntityId, Aabb)> {
    world.run(|body: View<Body>, pickup: View<Pickup>| {
        (&body, &pickup)
            .iter()
            .with_id()
            .map(|(id, (body, _))| (id, body.aabb()))
            .collect()
    })
}

pub fn update(time: &FrameTime, resources: &Resources, world: &mut World) {
    let cfg = &resources.cfg;
    let bounds = world.run(|bounds: UniqueView<LevelBounds>| *bounds);
    let platforms = platform::collect_boxes(world);

    let player = world.run(
        |body: View<Body>,
         data: View<PlayerData>,
         controls: View<PlayerControls>,
         anim: View<AnimationPlay>| {
            (&body, &data, &controls, &anim)
                .iter()
                .with_id()
                .next()
                .map(|(id, (body, data, controls, anim))| (id, *body, *data, *controls, *anim))
        },
    );
    let Some((id, mut body, mut data, controls, mut anim)) = player else {
        return;
    };

    let grounded = platform::land(&mut body, &platforms);
    let mut action = if grounded {
        body.vel = Vec2::ZERO;
        Action::Idle
    } else {
        body.vel = vec2(0.0, cfg.player.fall_speed);
        Action::Fall
    };

    if data.state == PlayerState::Alive {
        if controls.left {
            body.vel.x = -data.run_speed;
            anim.facing = Facing::Left;
        } else if controls.right {
            body.vel.x = data.run_speed;
            anim.facing = Facing::Right;
        }

        if controls.jump && try_jump(&mut body, &mut data, time.elapsed) {
            action = Action::Jump;
        }
        if body.vel.y == 0.0 && body.vel.x != 0.0 {
            action = Action::Walk;
        }

        if let Some(enemy) = first_hit(&body, &enemy_boxes(world), cfg.hits.enemy_ratio) {
            if body.vel.y > 0.0 {
                world.delete_entity(enemy);
            } else {
                info!("The player got hit");
                data.state = PlayerState::Dying;
            }
        }

        if let Some(pickup_id) = first_hit(&body, &pickup_boxes(world), cfg.hits.pickup_ratio) {
            collect(world, pickup_id, &mut data, &cfg.pickups);
        }

        if body.aabb().top() > bounds.map.y {
            info!("The player fell off the map");
            data.state = PlayerState::Dying;
        }

        if controls.shoot {
            missile::spawn(world, body.center(), anim.facing, cfg);
        }
    }

    if data.state != PlayerState::Alive {
        action = Action::Die;
        body.vel = if grounded {
            Vec2::ZERO
        } else {
            vec2(0.0, cfg.player.death_fall_speed)
        };
    }
    anim.set_action(action);
    dump!("Player: {:?} {:?}", anim.action, data.state);
    if data.state == PlayerState::Dying && anim.action == Action::Die && anim.cycle_finished() {
        data.state = PlayerState::Done;
    }

    if body.pos.x > bounds.screen.x {
        body.pos.x = 0.0;
    }
    if body.pos.x < 0.0 {
        body.pos.x = bounds.screen.x;
    }
    body.step();

    world.run(
        |mut bodies: ViewMut<Body>,
         mut datas: ViewMut<PlayerData>,
         mut anims: ViewMut<AnimationPlay>| {
            if let Ok(mut slot) = (&mut bodies).get(id) {
                *slot = body;
            }
            if let Ok(mut slot) = (&mut datas).get(id) {
                *slot = data;
            }
            if let Ok(mut slot) = (&mut anims).get(id) {
                *slot = anim;
            }
        },
    );
}

/// Applies the pickup to the player and removes it.
fn collect(world: &mut World, pickup_id: EntityId, data: &mut PlayerData, cfg: &sections::Pickups) {
    let pickup = world.run(|pickup: View<Pickup>| (&pickup).get(pickup_id).ok().copied());
    let Some(pickup) = pickup else {
        return;
    };

    world.run(|mut score: UniqueViewMut<PlayerScore>| pickup.apply(data, &mut score, cfg));
    world.delete_entity(pickup_id);
}
