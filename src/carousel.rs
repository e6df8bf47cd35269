//! Testimonial carousel state.
//!
//! Tracks which slide is showing and decides when auto-rotation may advance
//! it. Rotation stops while paused (pointer hovering), when the visitor
//! prefers reduced motion, or when there is nothing to rotate to.

use std::time::Duration;

/// Default delay between automatic advances.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
    paused: bool,
    auto_rotate: bool,
    reduced_motion: bool,
    interval: Duration,
}

impl Carousel {
    /// A carousel over `len` slides, starting at the first.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            paused: false,
            auto_rotate: true,
            reduced_motion: false,
            interval: DEFAULT_INTERVAL,
        }
    }

    pub fn with_auto_rotate(mut self, auto_rotate: bool) -> Self {
        self.auto_rotate = auto_rotate;
        self
    }

    pub fn with_reduced_motion(mut self, reduced_motion: bool) -> Self {
        self.reduced_motion = reduced_motion;
        self
    }

    /// Set the rotation delay. A zero delay is ignored.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        if !interval.is_zero() {
            self.interval = interval;
        }
        self
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Index of the visible slide, or `None` when there are no slides.
    pub fn current(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn previous(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jump to `index`. Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn should_auto_rotate(&self) -> bool {
        self.auto_rotate && !self.paused && !self.reduced_motion && self.len > 1
    }

    /// Advance one slide if auto-rotation is active. Returns whether it moved.
    pub fn tick(&mut self) -> bool {
        if !self.should_auto_rotate() {
            return false;
        }
        self.next();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps() {
        let mut c = Carousel::new(3);
        c.next();
        c.next();
        assert_eq!(c.current(), Some(2));
        c.next();
        assert_eq!(c.current(), Some(0));
    }

    #[test]
    fn test_previous_wraps() {
        let mut c = Carousel::new(3);
        c.previous();
        assert_eq!(c.current(), Some(2));
        c.previous();
        assert_eq!(c.current(), Some(1));
    }

    #[test]
    fn test_go_to_ignores_out_of_range() {
        let mut c = Carousel::new(4);
        c.go_to(2);
        assert_eq!(c.current(), Some(2));
        c.go_to(4);
        assert_eq!(c.current(), Some(2));
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let mut c = Carousel::new(0);
        c.next();
        c.previous();
        c.go_to(0);
        assert_eq!(c.current(), None);
        assert!(!c.tick());
    }

    #[test]
    fn test_tick_respects_pause() {
        let mut c = Carousel::new(2);
        assert!(c.tick());
        assert_eq!(c.current(), Some(1));

        c.pause();
        assert!(!c.tick());
        assert_eq!(c.current(), Some(1));

        c.resume();
        assert!(c.tick());
        assert_eq!(c.current(), Some(0));
    }

    #[test]
    fn test_no_rotation_with_reduced_motion_or_single_slide() {
        let mut c = Carousel::new(3).with_reduced_motion(true);
        assert!(!c.should_auto_rotate());
        assert!(!c.tick());
        // manual navigation still works
        c.next();
        assert_eq!(c.current(), Some(1));

        assert!(!Carousel::new(1).should_auto_rotate());
        assert!(!Carousel::new(3).with_auto_rotate(false).should_auto_rotate());
    }

    #[test]
    fn test_interval_default_and_override() {
        assert_eq!(Carousel::new(2).interval(), Duration::from_secs(5));
        let c = Carousel::new(2).with_interval(Duration::from_millis(250));
        assert_eq!(c.interval(), Duration::from_millis(250));
    }

    #[tokio::test]
    async fn test_zero_interval_keeps_default() {
        let c = Carousel::new(3).with_interval(Duration::ZERO);
        assert_eq!(c.interval(), DEFAULT_INTERVAL);
        // must not panic on a zero period
        let mut ticker = tokio::time::interval(c.interval());
        ticker.tick().await;
    }
}
