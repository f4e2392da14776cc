use macroquad::prelude::*;

/// A side-scrolling camera. It keeps a target in the middle of the screen
/// unless that would show something past the map edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollCamera {
    offset: Vec2,
    screen: Vec2,
    map: Vec2,
}

impl ScrollCamera {
    pub fn new(screen: Vec2) -> Self {
        Self {
            offset: Vec2::ZERO,
            screen,
            map: screen,
        }
    }

    pub fn set_map_size(&mut self, map: Vec2) {
        self.map = map;
        self.offset = Vec2::ZERO;
    }

    pub fn screen_size(&self) -> Vec2 {
        self.screen
    }

    /// Translation from world to screen coordinates.
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn update(&mut self, target: Vec2) {
        let centered = self.screen / 2.0 - target;
        // On maps smaller than the screen the lower bound is 0 too
        let min = (self.screen - self.map).min(Vec2::ZERO);

        self.offset = centered.clamp(min, Vec2::ZERO);
    }

    pub fn apply(&self, rect: Rect) -> Rect {
        rect.offset(self.offset)
    }

    pub fn apply_point(&self, point: Vec2) -> Vec2 {
        point + self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Vec2 = vec2(1152.0, 648.0);
    const MAP: Vec2 = vec2(2304.0, 1296.0);

    fn camera() -> ScrollCamera {
        let mut camera = ScrollCamera::new(SCREEN);
        camera.set_map_size(MAP);
        camera
    }

    #[test]
    fn target_is_centered() {
        let mut camera = camera();
        camera.update(vec2(1000.0, 700.0));

        assert_eq!(camera.offset(), vec2(-424.0, -376.0));
        assert_eq!(camera.apply_point(vec2(1000.0, 700.0)), SCREEN / 2.0);
    }

    #[test]
    fn map_corners_clamp() {
        let mut camera = camera();

        camera.update(vec2(10.0, 10.0));
        assert_eq!(camera.offset(), Vec2::ZERO);

        camera.update(MAP - 10.0);
        assert_eq!(camera.offset(), SCREEN - MAP);
    }

    #[test]
    fn offset_stays_in_bounds() {
        let mut camera = camera();

        for ix in -10..=30 {
            for iy in -10..=30 {
                let target = vec2(ix as f32 * 100.0, iy as f32 * 60.0);
                camera.update(target);

                let offset = camera.offset();
                assert!(offset.x <= 0.0 && offset.y <= 0.0, "{target} -> {offset}");
                assert!(offset.x >= SCREEN.x - MAP.x, "{target} -> {offset}");
                assert!(offset.y >= SCREEN.y - MAP.y, "{target} -> {offset}");

                let far_corner = camera.apply_point(MAP);
                assert!(far_corner.x >= SCREEN.x && far_corner.y >= SCREEN.y);
            }
        }
    }

    #[test]
    fn small_map_is_pinned() {
        let mut camera = ScrollCamera::new(SCREEN);
        camera.set_map_size(vec2(360.0, 1296.0));

        camera.update(vec2(300.0, 900.0));

        assert_eq!(camera.offset().x, 0.0);
        assert_eq!(camera.offset().y, -576.0);
    }

    #[test]
    fn apply_moves_rect_only() {
        let mut camera = camera();
        camera.update(vec2(1000.0, 700.0));
        let rect = Rect::new(1000.0, 700.0, 36.0, 72.0);

        let moved = camera.apply(rect);

        assert_eq!(moved, Rect::new(576.0, 324.0, 36.0, 72.0));
        assert_eq!(rect.x, 1000.0);
    }
}
