use lib_col::find_ground;

use super::prelude::*;

pub fn spawn(world: &mut World, col: usize, row: usize, tile: f32) -> EntityId {
    world.add_entity((
        Body::fixed(
            vec2(col as f32 * tile, row as f32 * tile),
            Vec2::splat(tile),
            Anchor::TopLeft,
        ),
        PlatformTag,
        Sprite {
            texture: TextureId::Platform,
            source: None,
        },
        layers::PLATFORMS,
    ))
}

/// Boxes of all platforms in spawn order.
pub fn collect_boxes(world: &World) -> Vec<Aabb> {
    world.run(|body: View<Body>, tag: View<PlatformTag>| {
        (&body, &tag)
            .iter()
            .map(|(body, _)| body.aabb())
            .collect()
    })
}

/// Puts `body` on top of the platform it is falling onto.
/// Returns `true` if the body stands on a platform.
pub fn land(body: &mut Body, platforms: &[Aabb]) -> bool {
    match find_ground(body.aabb(), body.vel.y, platforms.iter().copied()) {
        Some(top) => {
            body.set_bottom(top);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TILE: f32 = 36.0;

    fn walker(x: f32, bottom: f32, vy: f32) -> Body {
        Body::moving(
            vec2(x, bottom),
            vec2(0.0, vy),
            vec2(TILE, 2.0 * TILE),
            Anchor::MidBottom,
        )
    }

    fn floor() -> Vec<Aabb> {
        (0..4)
            .map(|col| Aabb::from_top_left(vec2(col as f32 * TILE, 11.0 * TILE), Vec2::splat(TILE)))
            .collect()
    }

    #[test]
    fn landing_snaps_bottom_to_top() {
        let platforms = floor();

        for sink in [0.0, 0.5, 3.0, 7.0, 20.0, 35.5] {
            let mut body = walker(54.0, 11.0 * TILE + sink, 7.0);

            assert!(land(&mut body, &platforms), "sink {sink}");
            assert_eq!(body.aabb().bottom(), platforms[0].top(), "sink {sink}");
        }
    }

    #[test]
    fn hovering_body_is_airborne() {
        let platforms = floor();
        let mut body = walker(54.0, 11.0 * TILE - 2.0, 7.0);

        assert!(!land(&mut body, &platforms));
        assert_eq!(body.pos.y, 11.0 * TILE - 2.0);
    }

    #[test]
    fn rising_body_passes_through() {
        let platforms = floor();
        let mut body = walker(54.0, 11.0 * TILE + 10.0, -12.0);

        assert!(!land(&mut body, &platforms));
        assert_eq!(body.pos.y, 11.0 * TILE + 10.0);
    }

    #[test]
    fn body_below_platform_is_not_pulled_up() {
        let platforms = floor();
        let mut body = walker(54.0, 12.0 * TILE + 20.0, 7.0);

        assert!(!land(&mut body, &platforms));
    }

    #[test]
    fn collected_boxes_follow_spawn_order() {
        let mut world = World::new();
        spawn(&mut world, 3, 1, TILE);
        spawn(&mut world, 0, 2, TILE);

        let boxes = collect_boxes(&world);

        assert_eq!(boxes.len(), 2);
        assert_eq!(boxes[0].min, vec2(3.0 * TILE, TILE));
        assert_eq!(boxes[1].min, vec2(0.0, 2.0 * TILE));
    }
}
