use lib_anim::{Action, AnimationPackId, Facing, FrameCursor, ImgRect};
use lib_col::Aabb;
use macroquad::prelude::*;
use shipyard::Component;

use crate::TextureId;

/// Which point of the box [Body::pos] refers to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Anchor {
    #[default]
    TopLeft,
    MidBottom,
    Center,
}

/// Position, velocity and size in pixels. The bounding box is not stored,
/// it is derived from the position every time it is needed.
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub anchor: Anchor,
}

impl Body {
    pub fn fixed(pos: Vec2, size: Vec2, anchor: Anchor) -> Self {
        Self::moving(pos, Vec2::ZERO, size, anchor)
    }

    pub fn moving(pos: Vec2, vel: Vec2, size: Vec2, anchor: Anchor) -> Self {
        Self {
            pos,
            vel,
            size,
            anchor,
        }
    }

    pub fn aabb(&self) -> Aabb {
        let Vec2 { x, y } = self.pos;
        let half_w = self.size.x / 2.0;
        match self.anchor {
            Anchor::TopLeft => Aabb::from_top_left(self.pos, self.size),
            Anchor::MidBottom => Aabb {
                min: vec2(x - half_w, y - self.size.y),
                max: vec2(x + half_w, y),
            },
            Anchor::Center => Aabb::from_center(self.pos, self.size),
        }
    }

    pub fn rect(&self) -> Rect {
        let aabb = self.aabb();
        let size = aabb.size();
        Rect::new(aabb.min.x, aabb.min.y, size.x, size.y)
    }

    pub fn center(&self) -> Vec2 {
        self.aabb().center()
    }

    /// Moves the body vertically so its bottom edge is at `y`.
    pub fn set_bottom(&mut self, y: f32) {
        self.pos.y = match self.anchor {
            Anchor::TopLeft => y - self.size.y,
            Anchor::MidBottom => y,
            Anchor::Center => y - self.size.y / 2.0,
        };
    }

    pub fn step(&mut self) {
        self.pos += self.vel;
    }
}

/// Draw order of an entity. Higher layers are drawn on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Component)]
pub struct DrawLayer(pub u32);

/// A still picture. `source` picks a cell of the texture, `None` draws
/// the whole texture.
#[derive(Debug, Clone, Copy, Component)]
pub struct Sprite {
    pub texture: TextureId,
    pub source: Option<ImgRect>,
}

/// The clip an entity is playing and where inside of it the playback is.
#[derive(Debug, Clone, Copy, Component)]
pub struct AnimationPlay {
    pub pack: AnimationPackId,
    pub action: Action,
    pub facing: Facing,
    pub cursor: FrameCursor,
}

impl AnimationPlay {
    pub fn new(pack: AnimationPackId, action: Action) -> Self {
        Self {
            pack,
            action,
            facing: Facing::default(),
            cursor: FrameCursor::new(),
        }
    }

    pub fn with_facing(mut self, facing: Facing) -> Self {
        self.facing = facing;
        self
    }

    /// Starts playing `action` from its first frame. Does nothing if the
    /// action is already playing or the current one is terminal.
    pub fn set_action(&mut self, action: Action) -> bool {
        if self.action == action || self.action.is_terminal() {
            return false;
        }

        self.action = action;
        self.cursor.rewind();
        true
    }

    pub fn frame(&self) -> usize {
        self.cursor.frame()
    }

    pub fn cycle_finished(&self) -> bool {
        self.cursor.cycle_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_produce_same_box() {
        let size = vec2(36.0, 72.0);
        let bodies = [
            Body::fixed(vec2(72.0, 36.0), size, Anchor::TopLeft),
            Body::fixed(vec2(90.0, 108.0), size, Anchor::MidBottom),
            Body::fixed(vec2(90.0, 72.0), size, Anchor::Center),
        ];

        for body in bodies {
            assert_eq!(body.rect(), Rect::new(72.0, 36.0, 36.0, 72.0));
        }
    }

    #[test]
    fn set_bottom_is_exact() {
        for anchor in [Anchor::TopLeft, Anchor::MidBottom, Anchor::Center] {
            let mut body = Body::fixed(vec2(10.0, 10.0), vec2(36.0, 72.0), anchor);
            body.set_bottom(396.0);

            assert_eq!(body.aabb().bottom(), 396.0);
        }
    }

    #[test]
    fn terminal_action_sticks() {
        let mut play = AnimationPlay::new(AnimationPackId::Player, Action::Walk);

        assert!(!play.set_action(Action::Walk));
        assert!(play.set_action(Action::Die));
        assert!(!play.set_action(Action::Idle));
        assert_eq!(play.action, Action::Die);
    }

    #[test]
    fn action_change_rewinds() {
        let mut play = AnimationPlay::new(AnimationPackId::Player, Action::Walk);
        for tick in 1..=20 {
            play.cursor.advance(tick as f32 * 0.125, 0.25, 4);
        }
        assert_ne!(play.frame(), 0);

        play.set_action(Action::Jump);
        assert_eq!(play.frame(), 0);
    }
}
