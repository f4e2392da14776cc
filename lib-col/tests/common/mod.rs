use glam::{Vec2, vec2};

/// Offsets every fuzzable test gets replayed with. Pixel-aligned so the
/// float math stays exact.
const SCENE_OFFSETS: [Vec2; 5] = [
    Vec2::ZERO,
    vec2(36.0, 0.0),
    vec2(0.0, -72.0),
    vec2(-1152.0, 648.0),
    vec2(4096.0, 2048.0),
];

/// An interface for a test case. All tests in this crate have one
/// thing in common. Their result must be the same if the scene gets
/// moved by some offset.
pub trait TestCase: Copy {
    /// The name of the test to use in the test report.
    fn name(&self) -> &'static str;

    /// Run the test and return success of failure.
    /// If you have a super helpful problem to report that
    /// the calling code can't see -- print it to stdout.
    fn check(&self) -> bool;
}

pub trait FuzzableTestCase: TestCase + Copy {
    /// Move the whole scene by `offset`.
    fn translate(self, offset: Vec2) -> Self;
}

#[allow(dead_code)]
pub fn run_tests_no_fuzz<T: TestCase>(tests: impl IntoIterator<Item = T>) {
    for case in tests.into_iter() {
        println!("Running {:?}", case.name());
        if !case.check() {
            panic!("Test {:?} failed", case.name());
        }
    }
}

#[allow(dead_code)]
pub fn run_tests<T: FuzzableTestCase>(tests: impl IntoIterator<Item = T>) {
    for case in tests.into_iter() {
        for offset in SCENE_OFFSETS {
            let moved = case.translate(offset);
            println!("Running {:?} at {offset}", case.name());
            if !moved.check() {
                panic!("Test {:?} failed with scene offset {offset}", case.name());
            }
        }
    }
}
