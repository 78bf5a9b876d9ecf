//! Timed phases
//!
//! [`TimerPhase`] spins the platform while the shared timer counts.
//! [`CuringPhase`] adds the UV LEDs, [`HeatedPhase`] adds the heater and
//! [`WarmupPhase`] waits (counting up) for the chamber to reach its
//! target. Each variant wraps the one it extends and overrides the
//! [`Timed`] hooks it needs.

use crate::config::{RunTime, TargetTemp};
use crate::safety::{Interlock, PauseReason, SensorEdge};
use crate::state::{PhaseContext, PhaseId, PhaseView};
use crate::time::Instant;
use crate::timer::{CountDirection, CycleTimer};
use crate::traits::Hardware;

/// Time adjustment step (seconds)
pub const TIME_STEP_S: u32 = 30;

/// Ceiling for user time adjustments (seconds)
pub const MAX_ADJUSTED_TIME_S: u32 = 10 * 60;

/// Delay between resuming a curing phase and the LEDs coming back on (ms)
pub const LED_DELAY_MS: u32 = 1000;

/// Result of a time adjustment request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeAdjust {
    Decreased,
    Increased,
    /// Less than one step left, nothing changed
    AtMinimum,
    /// Ceiling reached, nothing changed
    AtMaximum,
    /// Phase has no adjustable time
    NotApplicable,
}

impl TimeAdjust {
    /// Short status token for the display
    pub const fn symbol(self) -> Option<&'static str> {
        match self {
            TimeAdjust::Decreased => Some("<<"),
            TimeAdjust::Increased => Some(">>"),
            TimeAdjust::AtMinimum => Some("MIN"),
            TimeAdjust::AtMaximum => Some("MAX"),
            TimeAdjust::NotApplicable => None,
        }
    }
}

/// Remove one step from the current count
pub fn decrease_time(timer: &mut CycleTimer) -> TimeAdjust {
    let secs = timer.current_secs();
    if secs < TIME_STEP_S {
        TimeAdjust::AtMinimum
    } else {
        timer.set_current_secs(secs - TIME_STEP_S);
        TimeAdjust::Decreased
    }
}

/// Add one step to the current count
pub fn increase_time(timer: &mut CycleTimer) -> TimeAdjust {
    let secs = timer.current_secs();
    if secs > MAX_ADJUSTED_TIME_S - TIME_STEP_S {
        TimeAdjust::AtMaximum
    } else {
        timer.set_current_secs(secs + TIME_STEP_S);
        TimeAdjust::Increased
    }
}

/// Behaviour shared by every timed phase
///
/// Implementors provide the actuation hooks; the provided methods are
/// the common pause/resume and event handling.
pub(crate) trait Timed {
    fn base(&self) -> &TimerPhase;

    /// Turntable speed profile used by this phase
    fn curing_mode(&self) -> bool {
        true
    }

    fn interlock(&self) -> Interlock {
        Interlock::ChamberSealed
    }

    fn start<H: Hardware>(&mut self, ctx: &mut PhaseContext<'_, H>);

    fn stop<H: Hardware>(&mut self, ctx: &mut PhaseContext<'_, H>);

    fn tick<H: Hardware>(&mut self, ctx: &mut PhaseContext<'_, H>) -> Option<PhaseId>;

    /// Halt actuation and the timer
    fn pause<H: Hardware>(&mut self, ctx: &mut PhaseContext<'_, H>);

    /// Restart actuation and the timer
    fn resume<H: Hardware>(&mut self, ctx: &mut PhaseContext<'_, H>);

    fn time_adjustable(&self) -> bool {
        true
    }

    fn pause_reason<H: Hardware>(&self, hw: &H) -> Option<PauseReason> {
        self.interlock().pause_reason(hw)
    }

    fn on_sensor_edge<H: Hardware>(&mut self, ctx: &mut PhaseContext<'_, H>, edge: SensorEdge) {
        if self.interlock().trips_on(edge) {
            info!("Interlock tripped: {}", edge);
            self.pause(ctx);
        }
    }

    fn on_long_press(&self) -> Option<PhaseId> {
        Some(self.base().continue_to)
    }

    fn pause_continue<H: Hardware>(&mut self, ctx: &mut PhaseContext<'_, H>) {
        if ctx.timer.is_stopped() {
            match self.pause_reason(&*ctx.hw) {
                Some(reason) => info!("Resume refused: {}", reason),
                None => {
                    info!("Resumed");
                    self.resume(ctx);
                }
            }
        } else {
            info!("Paused by user");
            self.pause(ctx);
        }
    }

    fn title<H: Hardware>(&self, title: &'static str, view: &PhaseView<'_, H>) -> &'static str {
        if view.timer.is_stopped() {
            self.pause_reason(view.hw)
                .map(PauseReason::label)
                .unwrap_or(super::PAUSED_LABEL)
        } else {
            title
        }
    }

    fn decrease_time(&self, timer: &mut CycleTimer) -> TimeAdjust {
        if self.time_adjustable() {
            decrease_time(timer)
        } else {
            TimeAdjust::NotApplicable
        }
    }

    fn increase_time(&self, timer: &mut CycleTimer) -> TimeAdjust {
        if self.time_adjustable() {
            increase_time(timer)
        } else {
            TimeAdjust::NotApplicable
        }
    }
}

/// Motorized phase driven by the shared timer
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerPhase {
    run_time: RunTime,
    continue_to: PhaseId,
    direction: CountDirection,
}

impl TimerPhase {
    /// Count `run_time` down, then continue to `continue_to`
    pub const fn new(run_time: RunTime, continue_to: PhaseId) -> Self {
        Self {
            run_time,
            continue_to,
            direction: CountDirection::Down,
        }
    }

    /// Count up to `run_time` instead
    pub const fn counting_up(mut self) -> Self {
        self.direction = CountDirection::Up;
        self
    }

    /// Phase activated on completion or long press
    pub fn continue_to(&self) -> PhaseId {
        self.continue_to
    }

    pub fn set_continue_to(&mut self, to: PhaseId) {
        self.continue_to = to;
    }

    pub fn run_time(&self) -> RunTime {
        self.run_time
    }

    pub fn direction(&self) -> CountDirection {
        self.direction
    }

    fn begin<H: Hardware>(&self, ctx: &mut PhaseContext<'_, H>, curing_mode: bool) {
        ctx.hw.apply_speed_configuration(curing_mode);
        ctx.hw.run_motor();
        ctx.timer
            .set_counter(self.direction, ctx.config.run_time_s(self.run_time));
        let now = ctx.hw.now();
        ctx.timer.start(now);
    }

    fn end<H: Hardware>(&self, ctx: &mut PhaseContext<'_, H>) {
        ctx.timer.stop();
        ctx.hw.stop_motor();
    }

    fn advance<H: Hardware>(&self, ctx: &mut PhaseContext<'_, H>) -> Option<PhaseId> {
        if ctx.hw.heater_error() {
            warn!("Heater fault, aborting phase");
            return Some(ctx.error_phase);
        }
        let now = ctx.hw.now();
        if ctx.timer.run(now) {
            debug!("Timer completed");
            Some(self.continue_to)
        } else {
            None
        }
    }

    fn halt<H: Hardware>(&self, ctx: &mut PhaseContext<'_, H>) {
        ctx.timer.pause();
        ctx.hw.stop_motor();
    }

    fn restart<H: Hardware>(&self, ctx: &mut PhaseContext<'_, H>, curing_mode: bool) {
        let now = ctx.hw.now();
        ctx.timer.start(now);
        ctx.hw.apply_speed_configuration(curing_mode);
        ctx.hw.run_motor();
    }
}

impl Timed for TimerPhase {
    fn base(&self) -> &TimerPhase {
        self
    }

    fn curing_mode(&self) -> bool {
        false
    }

    fn interlock(&self) -> Interlock {
        Interlock::TankRequired
    }

    fn start<H: Hardware>(&mut self, ctx: &mut PhaseContext<'_, H>) {
        self.begin(ctx, self.curing_mode());
    }

    fn stop<H: Hardware>(&mut self, ctx: &mut PhaseContext<'_, H>) {
        self.end(ctx);
    }

    fn tick<H: Hardware>(&mut self, ctx: &mut PhaseContext<'_, H>) -> Option<PhaseId> {
        self.advance(ctx)
    }

    fn pause<H: Hardware>(&mut self, ctx: &mut PhaseContext<'_, H>) {
        self.halt(ctx);
    }

    fn resume<H: Hardware>(&mut self, ctx: &mut PhaseContext<'_, H>) {
        self.restart(ctx, self.curing_mode());
    }
}

/// UV curing phase
///
/// After a resume the LEDs stay off for [`LED_DELAY_MS`] before being
/// switched back on by the tick.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CuringPhase {
    timer: TimerPhase,
    /// Resume timestamp, `None` when no LED restart is pending
    led_resume_at: Option<Instant>,
}

impl CuringPhase {
    pub const fn new(run_time: RunTime, continue_to: PhaseId) -> Self {
        Self {
            timer: TimerPhase::new(run_time, continue_to),
            led_resume_at: None,
        }
    }

    pub fn timer(&self) -> &TimerPhase {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut TimerPhase {
        &mut self.timer
    }

    /// Whether the LEDs are waiting to be switched back on
    pub fn led_pending(&self) -> bool {
        self.led_resume_at.is_some()
    }
}

impl Timed for CuringPhase {
    fn base(&self) -> &TimerPhase {
        &self.timer
    }

    fn start<H: Hardware>(&mut self, ctx: &mut PhaseContext<'_, H>) {
        self.led_resume_at = None;
        self.timer.begin(ctx, self.curing_mode());
        if !ctx.hw.cover_closed() {
            self.pause(ctx);
        } else {
            ctx.hw.run_led();
        }
    }

    fn stop<H: Hardware>(&mut self, ctx: &mut PhaseContext<'_, H>) {
        ctx.hw.stop_led();
        self.led_resume_at = None;
        self.timer.end(ctx);
    }

    fn tick<H: Hardware>(&mut self, ctx: &mut PhaseContext<'_, H>) -> Option<PhaseId> {
        if let Some(resumed) = self.led_resume_at {
            if ctx.hw.now().millis_since(resumed) > LED_DELAY_MS {
                ctx.hw.run_led();
                self.led_resume_at = None;
            }
        }
        self.timer.advance(ctx)
    }

    fn pause<H: Hardware>(&mut self, ctx: &mut PhaseContext<'_, H>) {
        ctx.hw.stop_led();
        self.led_resume_at = None;
        self.timer.halt(ctx);
    }

    fn resume<H: Hardware>(&mut self, ctx: &mut PhaseContext<'_, H>) {
        self.led_resume_at = Some(ctx.hw.now());
        self.timer.restart(ctx, self.curing_mode());
    }
}

/// Heated phase (drying, resin preheat)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HeatedPhase {
    timer: TimerPhase,
    /// Regulation target applied at start, heater keeps its current
    /// target when `None`
    target: Option<TargetTemp>,
}

impl HeatedPhase {
    pub const fn new(run_time: RunTime, continue_to: PhaseId, target: Option<TargetTemp>) -> Self {
        Self {
            timer: TimerPhase::new(run_time, continue_to),
            target,
        }
    }

    pub fn timer(&self) -> &TimerPhase {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut TimerPhase {
        &mut self.timer
    }

    pub fn target(&self) -> Option<TargetTemp> {
        self.target
    }
}

impl Timed for HeatedPhase {
    fn base(&self) -> &TimerPhase {
        &self.timer
    }

    fn start<H: Hardware>(&mut self, ctx: &mut PhaseContext<'_, H>) {
        self.timer.begin(ctx, self.curing_mode());
        if let Some(target) = self.target {
            ctx.hw
                .set_target_temperature(ctx.config.target_temp_c(target));
        }
        if !ctx.hw.cover_closed() {
            self.pause(ctx);
        } else {
            ctx.hw.run_heater();
        }
    }

    fn stop<H: Hardware>(&mut self, ctx: &mut PhaseContext<'_, H>) {
        ctx.hw.stop_heater();
        self.timer.end(ctx);
    }

    fn tick<H: Hardware>(&mut self, ctx: &mut PhaseContext<'_, H>) -> Option<PhaseId> {
        self.timer.advance(ctx)
    }

    fn pause<H: Hardware>(&mut self, ctx: &mut PhaseContext<'_, H>) {
        ctx.hw.stop_heater();
        self.timer.halt(ctx);
    }

    fn resume<H: Hardware>(&mut self, ctx: &mut PhaseContext<'_, H>) {
        ctx.hw.run_heater();
        self.timer.restart(ctx, self.curing_mode());
    }
}

/// Warm-up before a heated phase
///
/// Counts up to the warm-up cap while heating, and continues as soon as
/// the chamber reaches the target (or immediately when waiting for the
/// target is disabled).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WarmupPhase {
    heated: HeatedPhase,
    target: TargetTemp,
}

impl WarmupPhase {
    pub const fn new(run_time: RunTime, continue_to: PhaseId, target: TargetTemp) -> Self {
        Self {
            heated: HeatedPhase {
                timer: TimerPhase::new(run_time, continue_to).counting_up(),
                target: Some(target),
            },
            target,
        }
    }

    pub fn timer(&self) -> &TimerPhase {
        &self.heated.timer
    }

    pub fn timer_mut(&mut self) -> &mut TimerPhase {
        &mut self.heated.timer
    }

    pub fn target(&self) -> TargetTemp {
        self.target
    }
}

impl Timed for WarmupPhase {
    fn base(&self) -> &TimerPhase {
        &self.heated.timer
    }

    fn start<H: Hardware>(&mut self, ctx: &mut PhaseContext<'_, H>) {
        self.heated.start(ctx);
    }

    fn stop<H: Hardware>(&mut self, ctx: &mut PhaseContext<'_, H>) {
        self.heated.stop(ctx);
    }

    fn tick<H: Hardware>(&mut self, ctx: &mut PhaseContext<'_, H>) -> Option<PhaseId> {
        let target = f32::from(ctx.config.target_temp_c(self.target));
        if !ctx.config.heat_to_target || ctx.hw.chamber_temperature() >= target {
            debug!("Warm-up done");
            return Some(self.heated.timer.continue_to);
        }
        self.heated.tick(ctx)
    }

    fn pause<H: Hardware>(&mut self, ctx: &mut PhaseContext<'_, H>) {
        self.heated.pause(ctx);
    }

    fn resume<H: Hardware>(&mut self, ctx: &mut PhaseContext<'_, H>) {
        self.heated.resume(ctx);
    }

    fn time_adjustable(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decrease_below_one_step() {
        let mut timer = CycleTimer::new();
        timer.set_counter(CountDirection::Down, 29);
        assert_eq!(decrease_time(&mut timer), TimeAdjust::AtMinimum);
        assert_eq!(timer.current_secs(), 29);

        timer.set_counter(CountDirection::Down, 30);
        assert_eq!(decrease_time(&mut timer), TimeAdjust::Decreased);
        assert_eq!(timer.current_secs(), 0);
    }

    #[test]
    fn test_increase_ceiling() {
        let mut timer = CycleTimer::new();
        timer.set_counter(CountDirection::Down, 600);
        assert_eq!(increase_time(&mut timer), TimeAdjust::AtMaximum);
        assert_eq!(timer.current_secs(), 600);

        timer.set_counter(CountDirection::Down, 570);
        assert_eq!(increase_time(&mut timer), TimeAdjust::Increased);
        assert_eq!(timer.current_secs(), 600);

        timer.set_counter(CountDirection::Down, 571);
        assert_eq!(increase_time(&mut timer), TimeAdjust::AtMaximum);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(TimeAdjust::Decreased.symbol(), Some("<<"));
        assert_eq!(TimeAdjust::AtMaximum.symbol(), Some("MAX"));
        assert_eq!(TimeAdjust::NotApplicable.symbol(), None);
    }

    #[test]
    fn test_warmup_counts_up() {
        let warmup = WarmupPhase::new(RunTime::Warmup, PhaseId::new(3), TargetTemp::Chamber);
        assert_eq!(warmup.timer().direction(), CountDirection::Up);
        assert!(!warmup.time_adjustable());
    }
}
