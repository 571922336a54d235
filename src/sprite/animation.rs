//! Frame-sequencing state machine for sprite-sheet animation.
//!
//! An [`Animation`] owns one ordered run of sheet frame indices and a tick
//! counter. It knows nothing about textures or entities; each tick it reports
//! what the owner should do through an [`AnimationEvent`].

/// Most frames a single sequence can hold.
pub const MAX_ANIMATION_FRAMES: usize = 10;

/// What a call to [`Animation::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationEvent {
    /// Interval not elapsed (or the sequence is already finished).
    None,
    /// Moved to a new frame; the payload is the sheet frame index to show.
    Frame(usize),
    /// A non-looping sequence ran out; the owner should hide itself.
    Completed,
}

/// One named frame sequence. The current position stays inside the sequence
/// at all times; a non-looping sequence holds its last frame for one full
/// interval before reporting [`AnimationEvent::Completed`] and freezing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    frames: [usize; MAX_ANIMATION_FRAMES],
    len: usize,
    interval: u32,
    counter: u32,
    current: usize,
    looped: bool,
    at_end: bool,
    finished: bool,
}

impl Animation {
    /// `interval` is simulation ticks per frame advance. Panics if `frames`
    /// is empty or longer than [`MAX_ANIMATION_FRAMES`].
    pub fn new(frames: &[usize], interval: u32, looped: bool) -> Animation {
        assert!(!frames.is_empty(), "animation needs at least one frame");
        assert!(
            frames.len() <= MAX_ANIMATION_FRAMES,
            "animation has {} frames, max is {}",
            frames.len(),
            MAX_ANIMATION_FRAMES
        );
        let mut stored = [0; MAX_ANIMATION_FRAMES];
        stored[..frames.len()].copy_from_slice(frames);
        Animation {
            frames: stored,
            len: frames.len(),
            interval,
            counter: 0,
            current: 0,
            looped,
            at_end: false,
            finished: false,
        }
    }

    /// Advances the tick counter and possibly the frame position.
    pub fn tick(&mut self) -> AnimationEvent {
        if self.finished {
            return AnimationEvent::None;
        }
        self.counter += 1;
        if self.counter < self.interval {
            return AnimationEvent::None;
        }
        self.counter = 0;
        if self.current + 1 < self.len {
            self.current += 1;
            return AnimationEvent::Frame(self.frames[self.current]);
        }
        if self.looped {
            self.current = 0;
            return AnimationEvent::Frame(self.frames[0]);
        }
        if !self.at_end {
            // Last frame stays up for one more full interval.
            self.at_end = true;
            return AnimationEvent::None;
        }
        self.finished = true;
        AnimationEvent::Completed
    }

    /// Position within the sequence, always in `[0, len)`.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Sheet frame index at the current position.
    pub fn current_frame(&self) -> usize {
        self.frames[self.current]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True once a non-looping sequence has completed and frozen.
    pub fn finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advances_every_interval() {
        let mut animation = Animation::new(&[0, 1, 2], 5, true);
        for _ in 0..4 {
            assert_eq!(animation.tick(), AnimationEvent::None);
        }
        assert_eq!(animation.tick(), AnimationEvent::Frame(1));
        assert_eq!(animation.current_index(), 1);
    }

    #[test]
    fn test_loop_wraps_to_start() {
        let mut animation = Animation::new(&[0, 1, 2], 1, true);
        assert_eq!(animation.tick(), AnimationEvent::Frame(1));
        assert_eq!(animation.tick(), AnimationEvent::Frame(2));
        assert_eq!(animation.tick(), AnimationEvent::Frame(0));
        assert_eq!(animation.current_index(), 0);
        assert!(!animation.finished());
    }

    #[test]
    fn test_non_loop_holds_last_frame_then_completes() {
        let mut animation = Animation::new(&[0, 1, 2], 5, false);
        let mut events = Vec::new();
        for _ in 0..15 {
            events.push(animation.tick());
        }
        // Arrived on the last frame and held it; nothing hidden yet.
        assert_eq!(animation.current_index(), 2);
        assert!(!animation.finished());
        assert!(!events.contains(&AnimationEvent::Completed));

        for _ in 0..5 {
            events.push(animation.tick());
        }
        assert_eq!(events.last(), Some(&AnimationEvent::Completed));
        assert!(animation.finished());
        assert_eq!(animation.current_index(), 2);
    }

    #[test]
    fn test_finished_sequence_is_frozen() {
        let mut animation = Animation::new(&[3, 4], 1, false);
        for _ in 0..10 {
            animation.tick();
        }
        assert!(animation.finished());
        assert_eq!(animation.tick(), AnimationEvent::None);
        assert_eq!(animation.current_index(), 1);
        assert_eq!(animation.current_frame(), 4);
    }

    #[test]
    fn test_sparse_frame_values_are_reported() {
        let mut animation = Animation::new(&[7, 2, 9], 1, true);
        assert_eq!(animation.tick(), AnimationEvent::Frame(2));
        assert_eq!(animation.tick(), AnimationEvent::Frame(9));
        assert_eq!(animation.current_frame(), 9);
    }

    #[test]
    #[should_panic]
    fn test_too_many_frames_panics() {
        Animation::new(&[0; MAX_ANIMATION_FRAMES + 1], 1, true);
    }

    #[test]
    #[should_panic]
    fn test_empty_sequence_panics() {
        Animation::new(&[], 1, true);
    }
}
