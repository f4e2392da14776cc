mod common;

use glam::{Vec2, vec2};
use lib_col::{Aabb, hit_test};

use crate::common::{FuzzableTestCase, TestCase, run_tests, run_tests_no_fuzz};

#[derive(Clone, Copy)]
struct RectOverlapTest {
    name: &'static str,
    rect1: Aabb,
    rect2: Aabb,
    expected: bool,
}

impl TestCase for RectOverlapTest {
    fn name(&self) -> &'static str {
        self.name
    }

    fn check(&self) -> bool {
        self.rect1.overlaps(self.rect2) == self.expected
            && self.rect2.overlaps(self.rect1) == self.expected
    }
}

impl FuzzableTestCase for RectOverlapTest {
    fn translate(self, offset: Vec2) -> Self {
        RectOverlapTest {
            rect1: self.rect1.translate(offset),
            rect2: self.rect2.translate(offset),
            ..self
        }
    }
}

fn tile(x: f32, y: f32) -> Aabb {
    Aabb::from_top_left(vec2(x, y), vec2(36.0, 36.0))
}

#[test]
fn basic_aabb() {
    run_tests([
        RectOverlapTest {
            name: "basic no-overlap",
            rect1: Aabb {
                min: vec2(0.0, 0.0),
                max: vec2(100.0, 100.0),
            },
            rect2: Aabb {
                min: vec2(101.0, 101.0),
                max: vec2(202.0, 202.0),
            },
            expected: false,
        },
        RectOverlapTest {
            name: "basic overlap",
            rect1: Aabb {
                min: vec2(0.0, 0.0),
                max: vec2(103.0, 103.0),
            },
            rect2: Aabb {
                min: vec2(101.0, 101.0),
                max: vec2(202.0, 202.0),
            },
            expected: true,
        },
        RectOverlapTest {
            name: "overlap by x only",
            rect1: tile(0.0, 0.0),
            rect2: tile(18.0, 72.0),
            expected: false,
        },
        RectOverlapTest {
            name: "overlap by y only",
            rect1: tile(0.0, 0.0),
            rect2: tile(72.0, 18.0),
            expected: false,
        },
        RectOverlapTest {
            name: "containment",
            rect1: Aabb::from_center(vec2(50.0, 50.0), vec2(100.0, 100.0)),
            rect2: Aabb::from_center(vec2(50.0, 50.0), vec2(10.0, 10.0)),
            expected: true,
        },
    ]);
}

#[test]
fn touching_edges_do_not_overlap() {
    run_tests([
        RectOverlapTest {
            name: "tiles side by side",
            rect1: tile(0.0, 0.0),
            rect2: tile(36.0, 0.0),
            expected: false,
        },
        RectOverlapTest {
            name: "tile stacked on tile",
            rect1: tile(0.0, 0.0),
            rect2: tile(0.0, 36.0),
            expected: false,
        },
        RectOverlapTest {
            name: "corner to corner",
            rect1: tile(0.0, 0.0),
            rect2: tile(36.0, 36.0),
            expected: false,
        },
        RectOverlapTest {
            name: "one pixel in",
            rect1: tile(0.0, 0.0),
            rect2: tile(35.0, 0.0),
            expected: true,
        },
    ]);
}

#[derive(Clone, Copy)]
struct HitTest {
    name: &'static str,
    rect1: Aabb,
    rect2: Aabb,
    ratio: f32,
    expected: bool,
}

impl TestCase for HitTest {
    fn name(&self) -> &'static str {
        self.name
    }

    fn check(&self) -> bool {
        hit_test(self.rect1, self.rect2, self.ratio) == self.expected
    }
}

#[test]
fn narrowed_hit_tests() {
    run_tests_no_fuzz([
        HitTest {
            name: "grazing boxes miss at 70%",
            rect1: Aabb::from_top_left(Vec2::ZERO, vec2(100.0, 100.0)),
            rect2: Aabb::from_top_left(vec2(90.0, 0.0), vec2(100.0, 100.0)),
            ratio: 0.7,
            expected: false,
        },
        HitTest {
            name: "grazing boxes hit at 100%",
            rect1: Aabb::from_top_left(Vec2::ZERO, vec2(100.0, 100.0)),
            rect2: Aabb::from_top_left(vec2(90.0, 0.0), vec2(100.0, 100.0)),
            ratio: 1.0,
            expected: true,
        },
        HitTest {
            name: "deep overlap hits at 50%",
            rect1: Aabb::from_top_left(Vec2::ZERO, vec2(100.0, 100.0)),
            rect2: Aabb::from_top_left(vec2(40.0, 40.0), vec2(100.0, 100.0)),
            ratio: 0.5,
            expected: true,
        },
        HitTest {
            name: "half overlap misses at 50%",
            rect1: Aabb::from_top_left(Vec2::ZERO, vec2(100.0, 100.0)),
            rect2: Aabb::from_top_left(vec2(50.0, 0.0), vec2(100.0, 100.0)),
            ratio: 0.5,
            expected: false,
        },
    ]);
}

#[test]
fn scale_keeps_center() {
    let rect = Aabb::from_top_left(vec2(10.0, 20.0), vec2(40.0, 80.0));
    let scaled = rect.scale(0.5);

    assert_eq!(scaled.center(), rect.center());
    assert_eq!(scaled.size(), vec2(20.0, 40.0));
}
