//! Countdown/count-up clock
//!
//! The counter keeps millisecond resolution internally and reports whole
//! seconds. Time only advances while running, and only by the interval
//! measured between two samples, so polling may be arbitrarily slow or
//! irregular.

use crate::time::Instant;

/// Counting direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CountDirection {
    /// Count from the configured duration down to zero
    #[default]
    Down,
    /// Count from zero up to the configured duration
    Up,
}

/// Run status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerStatus {
    /// Not started, reset, or finished
    #[default]
    Stopped,
    /// Counting
    Running,
    /// Halted mid-count, resumable
    Paused,
}

/// Cycle timer
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleTimer {
    direction: CountDirection,
    /// Configured total duration (ms)
    target_ms: u32,
    /// Remaining time when counting down, elapsed time when counting up (ms)
    count_ms: u32,
    status: TimerStatus,
    /// Timestamp of the last sample taken while running
    last_sample: Instant,
    completed: bool,
}

impl Default for CycleTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl CycleTimer {
    /// Create a stopped timer with zero duration
    pub const fn new() -> Self {
        Self {
            direction: CountDirection::Down,
            target_ms: 0,
            count_ms: 0,
            status: TimerStatus::Stopped,
            last_sample: Instant::from_millis(0),
            completed: false,
        }
    }

    /// Reset the counter to a new direction and duration
    ///
    /// Leaves the timer stopped; call [`CycleTimer::start`] to begin.
    pub fn set_counter(&mut self, direction: CountDirection, duration_s: u32) {
        self.direction = direction;
        self.target_ms = duration_s.saturating_mul(1000);
        self.count_ms = match direction {
            CountDirection::Down => self.target_ms,
            CountDirection::Up => 0,
        };
        self.status = TimerStatus::Stopped;
        self.completed = false;
    }

    /// Start or resume counting from `now`
    ///
    /// Time spent stopped or paused is never counted. Has no effect on a
    /// completed counter.
    pub fn start(&mut self, now: Instant) {
        if self.completed {
            return;
        }
        self.status = TimerStatus::Running;
        self.last_sample = now;
    }

    /// Halt counting, keeping the current count
    pub fn pause(&mut self) {
        if self.status == TimerStatus::Running {
            self.status = TimerStatus::Paused;
        }
    }

    /// Stop counting, keeping the current count
    pub fn stop(&mut self) {
        self.status = TimerStatus::Stopped;
    }

    /// Advance the count by the time elapsed since the last sample
    ///
    /// Returns true once the counter has completed.
    pub fn run(&mut self, now: Instant) -> bool {
        if self.status != TimerStatus::Running {
            return self.completed;
        }

        let delta = now.millis_since(self.last_sample);
        self.last_sample = now;

        match self.direction {
            CountDirection::Down => {
                self.count_ms = self.count_ms.saturating_sub(delta);
                if self.count_ms == 0 {
                    self.finish();
                }
            }
            CountDirection::Up => {
                self.count_ms = self.count_ms.saturating_add(delta);
                if self.count_ms >= self.target_ms {
                    self.count_ms = self.target_ms;
                    self.finish();
                }
            }
        }

        self.completed
    }

    fn finish(&mut self) {
        self.completed = true;
        self.status = TimerStatus::Stopped;
    }

    /// Current count in whole seconds
    ///
    /// Remaining time (rounded up) when counting down, elapsed time
    /// (rounded down) when counting up.
    pub fn current_secs(&self) -> u32 {
        match self.direction {
            CountDirection::Down => self.count_ms.div_ceil(1000),
            CountDirection::Up => self.count_ms / 1000,
        }
    }

    /// Overwrite the current count
    ///
    /// When counting down this is the new remaining time; when counting up
    /// it is the new elapsed time.
    pub fn set_current_secs(&mut self, secs: u32) {
        self.count_ms = secs.saturating_mul(1000);
        if self.direction == CountDirection::Up && self.count_ms > self.target_ms {
            self.target_ms = self.count_ms;
        }
    }

    /// Configured duration in whole seconds
    pub fn duration_secs(&self) -> u32 {
        self.target_ms / 1000
    }

    /// Counting direction
    pub fn direction(&self) -> CountDirection {
        self.direction
    }

    /// Current run status
    pub fn status(&self) -> TimerStatus {
        self.status
    }

    /// Whether the timer is not currently counting (stopped or paused)
    pub fn is_stopped(&self) -> bool {
        self.status != TimerStatus::Running
    }

    /// Whether the counter reached its end
    pub fn is_completed(&self) -> bool {
        self.completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(ms: u32) -> Instant {
        Instant::from_millis(ms)
    }

    #[test]
    fn test_countdown_completes() {
        let mut timer = CycleTimer::new();
        timer.set_counter(CountDirection::Down, 3);
        timer.start(at(0));

        assert!(!timer.run(at(1_500)));
        assert_eq!(timer.current_secs(), 2);
        assert!(timer.run(at(3_000)));
        assert!(timer.is_completed());
        assert!(timer.is_stopped());
        assert_eq!(timer.current_secs(), 0);
    }

    #[test]
    fn test_count_up_completes() {
        let mut timer = CycleTimer::new();
        timer.set_counter(CountDirection::Up, 2);
        timer.start(at(100));

        assert!(!timer.run(at(1_100)));
        assert_eq!(timer.current_secs(), 1);
        assert!(timer.run(at(5_000)));
        assert_eq!(timer.current_secs(), 2);
    }

    #[test]
    fn test_pause_excludes_paused_time() {
        let mut timer = CycleTimer::new();
        timer.set_counter(CountDirection::Down, 10);
        timer.start(at(0));
        timer.run(at(2_000));

        timer.pause();
        assert!(timer.is_stopped());
        assert_eq!(timer.status(), TimerStatus::Paused);
        // Long pause is not counted
        assert!(!timer.run(at(60_000)));
        assert_eq!(timer.current_secs(), 8);

        timer.start(at(60_000));
        timer.run(at(61_000));
        assert_eq!(timer.current_secs(), 7);
    }

    #[test]
    fn test_single_late_sample_completes() {
        let mut timer = CycleTimer::new();
        timer.set_counter(CountDirection::Down, 60);
        timer.start(at(0));
        assert!(timer.run(at(3_600_000)));
    }

    #[test]
    fn test_set_current_secs() {
        let mut timer = CycleTimer::new();
        timer.set_counter(CountDirection::Down, 120);
        timer.set_current_secs(90);
        assert_eq!(timer.current_secs(), 90);
        assert_eq!(timer.duration_secs(), 120);
    }

    #[test]
    fn test_start_after_completion_is_ignored() {
        let mut timer = CycleTimer::new();
        timer.set_counter(CountDirection::Down, 1);
        timer.start(at(0));
        assert!(timer.run(at(1_000)));

        timer.start(at(2_000));
        assert_eq!(timer.status(), TimerStatus::Stopped);
    }
}
