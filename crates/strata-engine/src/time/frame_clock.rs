use std::time::Instant;

/// Animation clock publishing elapsed milliseconds since its origin.
///
/// Backed by `Instant`, so the value is monotonic and independent of
/// wall-clock adjustments. The driver ticks the clock exactly once per render
/// cycle, before the pipeline runs; layers read the published value through
/// the render context.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
    current_ms: u32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            current_ms: 0,
        }
    }

    /// Resets the time origin to now.
    ///
    /// Callable any number of times, e.g. when resuming from suspension or
    /// entering a new level.
    pub fn restart(&mut self) {
        self.start = Instant::now();
        self.current_ms = 0;
    }

    /// Advances and publishes the elapsed time since the origin.
    pub fn tick(&mut self) -> u32 {
        self.current_ms = self.start.elapsed().as_millis() as u32;
        self.current_ms
    }

    /// Last value published by [`tick`](Self::tick).
    #[inline]
    pub fn current(&self) -> u32 {
        self.current_ms
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restart_then_tick_is_near_zero() {
        let mut clock = FrameClock::new();
        std::thread::sleep(std::time::Duration::from_millis(5));
        clock.restart();
        assert!(clock.tick() < 50);
    }

    #[test]
    fn tick_is_non_decreasing() {
        let mut clock = FrameClock::new();
        let a = clock.tick();
        let b = clock.tick();
        assert!(b >= a);
    }

    #[test]
    fn current_returns_last_published_value() {
        let mut clock = FrameClock::new();
        let published = clock.tick();
        assert_eq!(clock.current(), published);
    }
}
