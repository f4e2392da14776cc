use glam::{Vec2, vec2};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_top_left(top_left: Vec2, size: Vec2) -> Self {
        Aabb {
            min: top_left,
            max: top_left + size,
        }
    }

    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self::from_top_left(center - size / 2.0, size)
    }

    /// Strict overlap test. Boxes that only share an edge
    /// do not overlap.
    pub fn overlaps(self, other: Self) -> bool {
        (self.min.x < other.max.x && self.max.x > other.min.x)
            && (self.min.y < other.max.y && self.max.y > other.min.y)
    }

    pub fn contains(self, point: Vec2) -> bool {
        self.min.x <= point.x
            && self.min.y <= point.y
            && point.x <= self.max.x
            && point.y <= self.max.y
    }

    pub fn size(self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(self) -> Vec2 {
        (self.min + self.max) / 2.0
    }

    pub fn top(self) -> f32 {
        self.min.y
    }

    pub fn bottom(self) -> f32 {
        self.max.y
    }

    pub fn left(self) -> f32 {
        self.min.x
    }

    pub fn right(self) -> f32 {
        self.max.x
    }

    pub fn translate(self, delta: Vec2) -> Aabb {
        Aabb {
            min: self.min + delta,
            max: self.max + delta,
        }
    }

    pub fn expand(self, delta: Vec2) -> Aabb {
        Aabb {
            min: self.min - delta,
            max: self.max + delta,
        }
    }

    /// Resizes the box by `ratio` while keeping its center in place.
    pub fn scale(self, ratio: f32) -> Aabb {
        let size = self.size();
        self.expand(vec2(size.x * (ratio - 1.0), size.y * (ratio - 1.0)) / 2.0)
    }
}

/// A forgiving hit test. Both boxes get shrunk (or grown) by `ratio`
/// around their centers before checking for the overlap.
pub fn hit_test(a: Aabb, b: Aabb, ratio: f32) -> bool {
    a.scale(ratio).overlaps(b.scale(ratio))
}
