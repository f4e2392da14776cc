use macroquad::prelude::*;
use shipyard::{IntoIter, ViewMut, World};

use crate::{AnimationPlay, FrameTime, Resources};

/// Moves every animation to the current global time.
pub fn update_anims(time: &FrameTime, world: &World, resources: &Resources) {
    world.run(|mut plays: ViewMut<AnimationPlay>| {
        for play in (&mut plays).iter() {
            let Some(clip) = resources
                .animations
                .get(&play.pack)
                .and_then(|set| set.anims.clip(play.action))
            else {
                debug!("{:?} has no clip for {:?}", play.pack, play.action);
                continue;
            };

            play.cursor
                .advance(time.elapsed, clip.frame_period(), clip.frame_count());
        }
    });
}
