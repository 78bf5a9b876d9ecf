//! Input edge detection
//!
//! Turns raw sensor and button levels, sampled once per poll, into an
//! [`EventBatch`]. Every input is debounced: a level counts only after it
//! stayed unchanged for [`DEBOUNCE_MS`].
//!
//! | Gesture     | Condition                                   |
//! |-------------|---------------------------------------------|
//! | Short press | Released after >= 50 ms, no long press sent |
//! | Long press  | Held >= 500 ms (sent while still held)      |

use crate::state::EventBatch;
use crate::time::Instant;

/// Time a level must stay stable before it is accepted (ms)
pub const DEBOUNCE_MS: u32 = 20;

/// Shortest hold accepted as a short press (ms)
pub const SHORT_PRESS_MIN_MS: u32 = 50;

/// Hold time that triggers a long press (ms)
pub const LONG_PRESS_MS: u32 = 500;

/// Raw input levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawInputs {
    pub cover_closed: bool,
    pub tank_inserted: bool,
    pub button_pressed: bool,
}

#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
struct Debounced {
    stable: bool,
    candidate: bool,
    since: Instant,
}

impl Debounced {
    const fn new(level: bool, now: Instant) -> Self {
        Self {
            stable: level,
            candidate: level,
            since: now,
        }
    }

    /// Feed a sample; returns the new stable level when it changes
    fn update(&mut self, level: bool, now: Instant) -> Option<bool> {
        if level != self.candidate {
            self.candidate = level;
            self.since = now;
            return None;
        }
        if level != self.stable && now.millis_since(self.since) >= DEBOUNCE_MS {
            self.stable = level;
            return Some(level);
        }
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum Button {
    Released,
    Held { since: Instant, long_sent: bool },
}

#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
struct Levels {
    cover: Debounced,
    tank: Debounced,
    button: Debounced,
}

/// Edge detector for the cover, tank and button inputs
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputSampler {
    /// `None` until the first sample sets the baseline
    levels: Option<Levels>,
    button: Button,
}

impl Default for InputSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSampler {
    pub const fn new() -> Self {
        Self {
            levels: None,
            button: Button::Released,
        }
    }

    /// Sample all inputs and report the edges since the last call
    ///
    /// The first sample only records the baseline and reports nothing.
    pub fn sample(&mut self, raw: RawInputs, now: Instant) -> EventBatch {
        let mut events = EventBatch::none();

        let Some(levels) = self.levels.as_mut() else {
            self.levels = Some(Levels {
                cover: Debounced::new(raw.cover_closed, now),
                tank: Debounced::new(raw.tank_inserted, now),
                button: Debounced::new(raw.button_pressed, now),
            });
            return events;
        };

        match levels.cover.update(raw.cover_closed, now) {
            Some(true) => events.cover_closed = true,
            Some(false) => events.cover_opened = true,
            None => {}
        }
        match levels.tank.update(raw.tank_inserted, now) {
            Some(true) => events.tank_inserted = true,
            Some(false) => events.tank_removed = true,
            None => {}
        }

        match (levels.button.update(raw.button_pressed, now), self.button) {
            (Some(true), _) => {
                self.button = Button::Held {
                    since: now,
                    long_sent: false,
                };
            }
            (Some(false), Button::Held { since, long_sent }) => {
                if !long_sent && now.millis_since(since) >= SHORT_PRESS_MIN_MS {
                    events.button_short_press = true;
                }
                self.button = Button::Released;
            }
            (None, Button::Held {
                since,
                long_sent: false,
            }) if now.millis_since(since) >= LONG_PRESS_MS => {
                events.button_long_press = true;
                self.button = Button::Held {
                    since,
                    long_sent: true,
                };
            }
            _ => {}
        }

        if !events.is_empty() {
            trace!("Input edges: {}", events);
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(ms: u32) -> Instant {
        Instant::from_millis(ms)
    }

    fn levels(cover_closed: bool, tank_inserted: bool, button_pressed: bool) -> RawInputs {
        RawInputs {
            cover_closed,
            tank_inserted,
            button_pressed,
        }
    }

    fn primed() -> InputSampler {
        let mut sampler = InputSampler::new();
        assert!(sampler.sample(levels(true, false, false), at(0)).is_empty());
        sampler
    }

    #[test]
    fn test_first_sample_is_baseline() {
        let mut sampler = InputSampler::new();
        assert_eq!(
            sampler.sample(levels(false, true, true), at(0)),
            EventBatch::none()
        );
        // Button held since boot is not a press
        assert!(sampler.sample(levels(false, true, false), at(100)).is_empty());
        assert!(sampler.sample(levels(false, true, false), at(200)).is_empty());
    }

    #[test]
    fn test_cover_edge_debounced() {
        let mut sampler = primed();
        assert!(sampler.sample(levels(false, false, false), at(100)).is_empty());
        assert!(sampler.sample(levels(false, false, false), at(110)).is_empty());
        let events = sampler.sample(levels(false, false, false), at(120));
        assert!(events.cover_opened);
        assert!(!events.cover_closed);

        // Stays reported once
        assert!(sampler.sample(levels(false, false, false), at(200)).is_empty());
    }

    #[test]
    fn test_bounce_restarts_debounce() {
        let mut sampler = primed();
        sampler.sample(levels(true, true, false), at(100));
        sampler.sample(levels(true, false, false), at(105));
        sampler.sample(levels(true, true, false), at(110));
        assert!(sampler.sample(levels(true, true, false), at(125)).is_empty());
        assert!(sampler.sample(levels(true, true, false), at(130)).tank_inserted);
    }

    #[test]
    fn test_short_press() {
        let mut sampler = primed();
        sampler.sample(levels(true, false, true), at(100));
        assert!(sampler.sample(levels(true, false, true), at(120)).is_empty());
        sampler.sample(levels(true, false, false), at(300));
        let events = sampler.sample(levels(true, false, false), at(320));
        assert!(events.button_short_press);
        assert!(!events.button_long_press);
    }

    #[test]
    fn test_blip_is_not_a_press() {
        let mut sampler = primed();
        sampler.sample(levels(true, false, true), at(100));
        sampler.sample(levels(true, false, true), at(120));
        sampler.sample(levels(true, false, false), at(130));
        assert!(sampler.sample(levels(true, false, false), at(150)).is_empty());
    }

    #[test]
    fn test_long_press_fires_while_held() {
        let mut sampler = primed();
        sampler.sample(levels(true, false, true), at(100));
        sampler.sample(levels(true, false, true), at(120));
        assert!(sampler.sample(levels(true, false, true), at(500)).is_empty());

        let events = sampler.sample(levels(true, false, true), at(620));
        assert!(events.button_long_press);
        assert!(!events.button_short_press);

        // Only once per hold, and no short press on release
        assert!(sampler.sample(levels(true, false, true), at(2_000)).is_empty());
        sampler.sample(levels(true, false, false), at(2_100));
        assert!(sampler.sample(levels(true, false, false), at(2_120)).is_empty());
    }
}
