use anyhow::bail;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// What an animated entity is currently doing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Action {
    Idle,
    Walk,
    Jump,
    Fall,
    Die,
    Fly,
    Climb,
    Explode,
}

impl Action {
    /// Terminal actions can't be switched away from.
    pub fn is_terminal(self) -> bool {
        matches!(self, Action::Die)
    }
}

#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// The facing that matches horizontal velocity `vx`. A standing
    /// entity keeps facing where it did.
    pub fn from_velocity(vx: f32, current: Facing) -> Facing {
        if vx > 0.0 {
            Facing::Right
        } else if vx < 0.0 {
            Facing::Left
        } else {
            current
        }
    }

    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AnimationPackId {
    Player,
    Caterpillar,
    Bird,
    Spider,
    Missile,
}

#[derive(Default, Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImgRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

/// A single picture of a clip: a sheet cell, possibly mirrored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame {
    pub rect: ImgRect,
    pub flip_x: bool,
}

/// Frames of one action in both directions. The sheets only carry
/// right-facing art, the left-facing frames mirror them.
#[derive(Clone, Debug)]
pub struct Clip {
    right: Vec<Frame>,
    left: Vec<Frame>,
    duration: f32,
}

impl Clip {
    pub fn new(cells: Vec<ImgRect>, duration: f32) -> anyhow::Result<Clip> {
        if cells.is_empty() {
            bail!("a clip needs at least one frame");
        }
        if !(duration > 0.0) {
            bail!("clip duration must be positive, got {duration}");
        }

        let right = cells
            .iter()
            .map(|&rect| Frame {
                rect,
                flip_x: false,
            })
            .collect::<Vec<_>>();
        let left = right
            .iter()
            .map(|frame| Frame {
                flip_x: true,
                ..*frame
            })
            .collect();

        Ok(Clip {
            right,
            left,
            duration,
        })
    }

    pub fn frames(&self, facing: Facing) -> &[Frame] {
        match facing {
            Facing::Left => &self.left,
            Facing::Right => &self.right,
        }
    }

    pub fn frame_count(&self) -> usize {
        self.right.len()
    }

    /// Time it takes to play every frame once.
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// How long a single frame stays on screen.
    pub fn frame_period(&self) -> f32 {
        self.duration / self.frame_count() as f32
    }

    /// Returns the frame at `idx`, clamping out of range indices to the last frame.
    pub fn frame(&self, facing: Facing, idx: usize) -> Frame {
        let frames = self.frames(facing);
        frames[idx.min(frames.len() - 1)]
    }
}

/// All clips of one character.
#[derive(Clone, Debug, Default)]
pub struct AnimationSet {
    clips: HashMap<Action, Clip>,
}

impl AnimationSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, action: Action, clip: Clip) {
        self.clips.insert(action, clip);
    }

    pub fn clip(&self, action: Action) -> Option<&Clip> {
        self.clips.get(&action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(n: u32) -> Vec<ImgRect> {
        (0..n)
            .map(|x| ImgRect {
                x: x * 32,
                y: 0,
                w: 32,
                h: 32,
            })
            .collect()
    }

    #[test]
    fn left_frames_mirror_right_frames() {
        let clip = Clip::new(cells(4), 0.25).unwrap();

        assert_eq!(clip.frames(Facing::Left).len(), 4);
        for (left, right) in clip
            .frames(Facing::Left)
            .iter()
            .zip(clip.frames(Facing::Right))
        {
            assert_eq!(left.rect, right.rect);
            assert!(left.flip_x);
            assert!(!right.flip_x);
        }
    }

    #[test]
    fn frame_period() {
        let clip = Clip::new(cells(4), 1.0).unwrap();

        assert_eq!(clip.frame_period(), 0.25);
    }

    #[test]
    fn bad_clips_are_rejected() {
        assert!(Clip::new(Vec::new(), 1.0).is_err());
        assert!(Clip::new(cells(2), 0.0).is_err());
        assert!(Clip::new(cells(2), f32::NAN).is_err());
    }

    #[test]
    fn facing_follows_velocity() {
        assert_eq!(Facing::from_velocity(2.0, Facing::Left), Facing::Right);
        assert_eq!(Facing::from_velocity(-2.0, Facing::Right), Facing::Left);
        assert_eq!(Facing::from_velocity(0.0, Facing::Left), Facing::Left);
    }
}
