use super::prelude::*;

/// What the `n`-th scattered pickup is. Counting starts at 1.
pub fn kind_of(n: usize, cfg: &sections::Pickups) -> Pickup {
    if cfg.speedboost_every > 0 && n % cfg.speedboost_every == 0 {
        Pickup::Speedboost
    } else if cfg.jumpboost_every > 0 && n % cfg.jumpboost_every == 0 {
        Pickup::Jumpboost
    } else {
        Pickup::Points
    }
}

/// Puts pickups on top of the platform cells in `spots`. Points pickups
/// take one tile right above the platform, boosts are twice as large.
pub fn scatter(world: &mut World, spots: &[(usize, usize)], resources: &Resources) {
    let cfg = &resources.cfg;
    let frames = &resources.pickups;
    let tile = cfg.screen.tile_size;

    for (n, &(col, row)) in spots.iter().enumerate().skip(1).take(cfg.pickups.count) {
        let kind = kind_of(n, &cfg.pickups);
        let (lift, size, source) = match kind {
            Pickup::Points => {
                let source = if frames.points.is_empty() {
                    ImgRect::default()
                } else {
                    frames.points[n % frames.points.len()]
                };
                (1.0, tile, source)
            }
            Pickup::Speedboost => (2.0, 2.0 * tile, frames.speedboost),
            Pickup::Jumpboost => (2.0, 2.0 * tile, frames.jumpboost),
        };
        let top_left = vec2(col as f32 * tile, (row as f32 - lift) * tile);

        world.add_entity((
            Body::fixed(top_left, Vec2::splat(size), Anchor::TopLeft),
            kind,
            Sprite {
                texture: frames.texture,
                source: Some(source),
            },
            layers::PICKUPS,
        ));
    }
}
