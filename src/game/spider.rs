use super::platform;
use super::prelude::*;

pub fn spawn(world: &mut World, pos: Vec2, cfg: &GameCfg) -> EntityId {
    let size = vec2(cfg.enemy.width, cfg.enemy.height) * cfg.screen.tile_size;

    world.add_entity((
        Body::fixed(pos, size, Anchor::MidBottom),
        Enemy::Spider { climbing: false },
        AnimationPlay::new(AnimationPackId::Spider, Action::Walk),
        layers::ENEMIES,
    ))
}

/// Where the player is and whether it stands still enough to be climbed to.
#[derive(Debug, Clone, Copy)]
struct Prey {
    pos: Vec2,
    settled: bool,
}

impl Prey {
    /// The prey is right above the spider.
    fn is_above(&self, spider: Vec2) -> bool {
        self.settled && self.pos.x == spider.x && self.pos.y < spider.y
    }
}

fn find_prey(world: &World) -> Option<Prey> {
    world.run(
        |body: View<Body>, anim: View<AnimationPlay>, tag: View<PlayerTag>| {
            (&body, &anim, &tag).iter().next().map(|(body, anim, _)| Prey {
                pos: body.pos,
                settled: matches!(anim.action, Action::Idle | Action::Walk),
            })
        },
    )
}

/// One tick of spider movement. Returns the thread to draw, if the spider
/// is climbing.
fn hunt(
    body: &mut Body,
    climbing: &mut bool,
    prey: Option<Prey>,
    platforms: &[Aabb],
    cfg: &GameCfg,
) -> Option<(Vec2, Vec2)> {
    let spider = &cfg.spider;
    let range = spider.chase_range * cfg.screen.height;

    if *climbing {
        match prey {
            Some(prey) if prey.is_above(body.pos) => {
                body.vel = vec2(0.0, -spider.speed);
                return Some((body.pos, prey.pos));
            }
            _ => *climbing = false,
        }
    }

    body.vel = vec2(0.0, spider.fall_speed);
    if !platform::land(body, platforms) {
        return None;
    }
    body.vel.y = 0.0;

    let prey = prey.filter(|prey| (prey.pos.y - body.pos.y).abs() < range)?;
    let dx = prey.pos.x - body.pos.x;
    if dx.abs() <= spider.speed {
        body.pos.x = prey.pos.x;
    } else {
        body.vel.x = spider.speed * dx.signum();
    }

    if prey.is_above(body.pos) {
        *climbing = true;
        body.vel = vec2(0.0, -spider.speed);
        return Some((body.pos, prey.pos));
    }

    None
}

pub fn update(resources: &Resources, world: &mut World) {
    let cfg = &resources.cfg;
    let bounds = world.run(|bounds: UniqueView<LevelBounds>| *bounds);
    let prey = find_prey(world);
    let platforms = platform::collect_boxes(world);
    let mut threads = Vec::new();
    let mut gone = Vec::new();

    world.run(
        |mut body: ViewMut<Body>, mut anim: ViewMut<AnimationPlay>, mut enemy: ViewMut<Enemy>| {
            for (id, (body, anim, enemy)) in (&mut body, &mut anim, &mut enemy).iter().with_id() {
                let Enemy::Spider { climbing } = enemy else {
                    continue;
                };

                threads.extend(hunt(body, climbing, prey, &platforms, cfg));
                anim.set_action(if *climbing { Action::Climb } else { Action::Walk });
                anim.facing = Facing::from_velocity(body.vel.x, anim.facing);
                body.step();

                if body.aabb().top() > bounds.map.y {
                    gone.push(id);
                }
            }
        },
    );

    world.run(|mut spider_threads: UniqueViewMut<SpiderThreads>| {
        spider_threads.0 = threads;
    });
    for id in gone {
        world.delete_entity(id);
    }
}
