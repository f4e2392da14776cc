use glam::vec2;

use crate::Aabb;

/// How far below the body the ground probe reaches.
pub const GROUND_PROBE_DEPTH: f32 = 1.0;

/// Looks for a platform the body is standing on (or about to).
///
/// The body box is pushed down by [GROUND_PROBE_DEPTH] and tested against
/// `platforms` in iteration order. Only the first overlapping platform is
/// considered and it only counts when the body is not moving up and its bottom
/// is still above the platform's bottom. Bodies moving up pass through
/// platforms.
///
/// Returns the `y` of the platform's top edge.
pub fn find_ground<I>(body: Aabb, vertical_velocity: f32, platforms: I) -> Option<f32>
where
    I: IntoIterator<Item = Aabb>,
{
    if vertical_velocity < 0.0 {
        return None;
    }

    let probe = body.translate(vec2(0.0, GROUND_PROBE_DEPTH));
    platforms
        .into_iter()
        .find(|platform| probe.overlaps(*platform))
        .filter(|platform| body.bottom() < platform.bottom())
        .map(Aabb::top)
}
