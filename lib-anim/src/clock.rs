/// Playback position of an entity inside its current clip.
///
/// There is no per-entity timer. Every cursor is driven by the one global
/// elapsed time, so all animations stay in phase with the game clock.
/// A frame boundary is detected when `elapsed mod frame_period` becomes
/// smaller than it was on the previous tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameCursor {
    frame: usize,
    last_phase: f32,
    finished: bool,
}

impl FrameCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Whether the last [FrameCursor::advance] wrapped the clip around.
    pub fn cycle_finished(&self) -> bool {
        self.finished
    }

    /// Go back to the first frame. The phase is left alone as it
    /// belongs to the global clock.
    pub fn rewind(&mut self) {
        self.frame = 0;
        self.finished = false;
    }

    /// Moves the cursor to global time `elapsed` for a clip of
    /// `frame_count` frames, each shown for `period`.
    /// Returns `true` when the clip has just completed a cycle and
    /// wrapped back to its first frame.
    pub fn advance(&mut self, elapsed: f32, period: f32, frame_count: usize) -> bool {
        self.finished = false;
        if frame_count == 0 || !(period > 0.0) {
            return false;
        }

        let phase = elapsed.rem_euclid(period);
        if phase < self.last_phase {
            self.frame += 1;
        }
        self.last_phase = phase;

        if self.frame >= frame_count {
            self.frame = 0;
            self.finished = true;
        }

        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Steps and periods are powers of two so the phases stay exact.
    const STEP: f32 = 0.25;

    fn run(cursor: &mut FrameCursor, ticks: usize, start: f32, duration: f32, count: usize) -> Vec<(usize, bool)> {
        (1..=ticks)
            .map(|tick| {
                let period = duration / count as f32;
                let finished = cursor.advance(start + tick as f32 * STEP, period, count);
                (cursor.frame(), finished)
            })
            .collect()
    }

    #[test]
    fn frames_advance_on_phase_wrap() {
        let mut cursor = FrameCursor::new();
        // 3 frames of 1.0 each: a new frame every 4 ticks
        let trace = run(&mut cursor, 12, 0.0, 3.0, 3);

        let frames = trace.iter().map(|(frame, _)| *frame).collect::<Vec<_>>();
        assert_eq!(frames, [0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 2, 0]);
    }

    #[test]
    fn cycle_finishes_once_per_loop() {
        let mut cursor = FrameCursor::new();
        let trace = run(&mut cursor, 24, 0.0, 3.0, 3);

        let finish_ticks = trace
            .iter()
            .enumerate()
            .filter(|(_, (_, finished))| *finished)
            .map(|(tick, _)| tick + 1)
            .collect::<Vec<_>>();
        assert_eq!(finish_ticks, [12, 24]);
        assert!(!cursor.cycle_finished() || cursor.frame() == 0);
    }

    #[test]
    fn frame_stays_in_range() {
        let mut cursor = FrameCursor::new();
        for (idx, count) in [1usize, 2, 5, 10].into_iter().enumerate() {
            cursor.rewind();
            for (frame, _) in run(&mut cursor, 100, idx as f32 * 100.0, 1.0, count) {
                assert!(frame < count);
            }
        }
    }

    #[test]
    fn rewind_keeps_clock_phase() {
        let mut cursor = FrameCursor::new();
        run(&mut cursor, 5, 0.0, 3.0, 3);
        assert_eq!(cursor.frame(), 1);

        cursor.rewind();
        assert_eq!(cursor.frame(), 0);
        assert!(!cursor.cycle_finished());
        // Still at phase 0.25, so the next boundary comes at the usual time
        let trace = run(&mut cursor, 3, 5.0 * STEP, 3.0, 3);
        assert_eq!(trace.last().map(|(frame, _)| *frame), Some(1));
    }

    #[test]
    fn empty_clip_never_moves() {
        let mut cursor = FrameCursor::new();

        assert!(!cursor.advance(10.0, 1.0, 0));
        assert!(!cursor.advance(10.0, 0.0, 3));
        assert_eq!(cursor.frame(), 0);
    }
}
