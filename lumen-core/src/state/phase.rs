//! Phase variants and the shared lifecycle
//!
//! [`Phase`] dispatches each lifecycle hook, event and accessor to its
//! variant. Anything a variant does not handle falls through to the
//! do-nothing default arm.

use crate::config::FanProfile;
use crate::safety::{PauseReason, SensorEdge};
use crate::state::confirm::ConfirmPhase;
use crate::state::timed::{
    CuringPhase, HeatedPhase, TimeAdjust, Timed, TimerPhase, WarmupPhase,
};
use crate::state::{EventBatch, PhaseContext, PhaseId, PhaseView};
use crate::traits::Hardware;

/// Title shown while a timed phase is paused without a sensor reason
pub const PAUSED_LABEL: &str = "Paused";

/// Phase variant
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PhaseKind {
    /// Home screen, nothing running
    Idle,
    /// Motor and timer only (washing)
    Timer(TimerPhase),
    /// Motor, timer and UV LEDs
    Curing(CuringPhase),
    /// Motor, timer and heater
    Heated(HeatedPhase),
    /// Heating until the chamber reaches its target
    Warmup(WarmupPhase),
    /// Message awaiting acknowledgement
    Confirm(ConfirmPhase),
}

/// Applies `$body` to the timed variant bound as `$p`, or evaluates
/// `$default` for the others.
macro_rules! with_timed {
    ($kind:expr, $p:ident => $body:expr, _ => $default:expr) => {
        match $kind {
            PhaseKind::Timer($p) => $body,
            PhaseKind::Curing($p) => $body,
            PhaseKind::Heated($p) => $body,
            PhaseKind::Warmup($p) => $body,
            PhaseKind::Idle | PhaseKind::Confirm(_) => $default,
        }
    };
}

/// One state of the operating cycle
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Phase {
    title: &'static str,
    fans: FanProfile,
    kind: PhaseKind,
}

impl Phase {
    pub const fn new(title: &'static str, fans: FanProfile, kind: PhaseKind) -> Self {
        Self { title, fans, kind }
    }

    pub fn kind(&self) -> &PhaseKind {
        &self.kind
    }

    pub fn fans(&self) -> FanProfile {
        self.fans
    }

    /// Continuation target of a timed phase
    pub fn continue_to(&self) -> Option<PhaseId> {
        with_timed!(&self.kind, p => Some(p.base().continue_to()), _ => None)
    }

    /// Rewire the continuation target; returns false for untimed phases
    pub fn set_continue_to(&mut self, to: PhaseId) -> bool {
        let base = match &mut self.kind {
            PhaseKind::Timer(p) => p,
            PhaseKind::Curing(p) => p.timer_mut(),
            PhaseKind::Heated(p) => p.timer_mut(),
            PhaseKind::Warmup(p) => p.timer_mut(),
            PhaseKind::Idle | PhaseKind::Confirm(_) => return false,
        };
        base.set_continue_to(to);
        true
    }

    // Lifecycle

    /// Activate: apply the fan profile, then arm the variant
    pub fn start<H: Hardware>(&mut self, ctx: &mut PhaseContext<'_, H>) {
        ctx.hw.set_fan_duties(ctx.config.fan_duties(self.fans));
        match &mut self.kind {
            PhaseKind::Confirm(p) => p.start(ctx.config.finish_beep),
            kind => with_timed!(kind, p => p.start(ctx), _ => {}),
        }
    }

    /// Deactivate
    pub fn stop<H: Hardware>(&mut self, ctx: &mut PhaseContext<'_, H>) {
        match &mut self.kind {
            PhaseKind::Confirm(p) => p.stop(),
            kind => with_timed!(kind, p => p.stop(ctx), _ => {}),
        }
    }

    /// Periodic tick, called every poll
    pub fn tick<H: Hardware>(&mut self, ctx: &mut PhaseContext<'_, H>) -> Option<PhaseId> {
        match &mut self.kind {
            PhaseKind::Confirm(p) => {
                p.tick(ctx.hw);
                None
            }
            kind => with_timed!(kind, p => p.tick(ctx), _ => None),
        }
    }

    /// Dispatch one batch of events
    ///
    /// Sensor edges run first (cover opened, cover closed, tank
    /// inserted, tank removed), then the short press, then the long
    /// press. The first button hook that requests a transition wins.
    pub fn process_events<H: Hardware>(
        &mut self,
        ctx: &mut PhaseContext<'_, H>,
        events: &EventBatch,
    ) -> Option<PhaseId> {
        for edge in events.sensor_edges() {
            self.on_sensor_edge(ctx, edge);
        }
        if events.button_short_press {
            if let Some(next) = self.on_short_press() {
                return Some(next);
            }
        }
        if events.button_long_press {
            return self.on_long_press();
        }
        None
    }

    fn on_sensor_edge<H: Hardware>(&mut self, ctx: &mut PhaseContext<'_, H>, edge: SensorEdge) {
        with_timed!(&mut self.kind, p => p.on_sensor_edge(ctx, edge), _ => {})
    }

    fn on_short_press(&mut self) -> Option<PhaseId> {
        if let PhaseKind::Confirm(p) = &mut self.kind {
            p.acknowledge();
        }
        None
    }

    fn on_long_press(&mut self) -> Option<PhaseId> {
        with_timed!(&self.kind, p => p.on_long_press(), _ => None)
    }

    // Accessors

    pub fn title<H: Hardware>(&self, view: &PhaseView<'_, H>) -> &'static str {
        with_timed!(&self.kind, p => p.title(self.title, view), _ => self.title)
    }

    pub fn message(&self) -> Option<&'static str> {
        match &self.kind {
            PhaseKind::Confirm(p) => Some(p.message()),
            _ => None,
        }
    }

    /// Remaining (or elapsed, when counting up) seconds
    pub fn time<H: Hardware>(&self, view: &PhaseView<'_, H>) -> Option<u32> {
        with_timed!(&self.kind, _p => Some(view.timer.current_secs()), _ => None)
    }

    /// Live chamber temperature (°C) for heated and curing phases
    pub fn temperature<H: Hardware>(&self, view: &PhaseView<'_, H>) -> Option<f32> {
        match &self.kind {
            PhaseKind::Curing(_) | PhaseKind::Heated(_) | PhaseKind::Warmup(_) => {
                let celsius = view.hw.chamber_temperature();
                // NaN until the sensor produced a valid reading
                celsius.is_finite().then_some(celsius)
            }
            _ => None,
        }
    }

    /// Whether the menu may be opened while this phase runs
    pub fn supports_menu(&self) -> bool {
        with_timed!(&self.kind, _p => true, _ => false)
    }

    pub fn is_paused<H: Hardware>(&self, view: &PhaseView<'_, H>) -> bool {
        with_timed!(&self.kind, _p => view.timer.is_stopped(), _ => false)
    }

    pub fn is_finished(&self) -> bool {
        match &self.kind {
            PhaseKind::Confirm(p) => p.is_finished(),
            _ => false,
        }
    }

    /// Current interlock violation, if any
    pub fn pause_reason<H: Hardware>(&self, view: &PhaseView<'_, H>) -> Option<PauseReason> {
        with_timed!(&self.kind, p => p.pause_reason(view.hw), _ => None)
    }

    // Mutators

    pub fn decrease_time<H: Hardware>(&mut self, ctx: &mut PhaseContext<'_, H>) -> TimeAdjust {
        with_timed!(&self.kind, p => p.decrease_time(&mut ctx.timer), _ => TimeAdjust::NotApplicable)
    }

    pub fn increase_time<H: Hardware>(&mut self, ctx: &mut PhaseContext<'_, H>) -> TimeAdjust {
        with_timed!(&self.kind, p => p.increase_time(&mut ctx.timer), _ => TimeAdjust::NotApplicable)
    }

    /// Toggle pause; resuming is refused while a pause reason holds
    pub fn pause_continue<H: Hardware>(&mut self, ctx: &mut PhaseContext<'_, H>) {
        with_timed!(&mut self.kind, p => p.pause_continue(ctx), _ => {})
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BeepMode, CycleConfig, RunTime, TargetTemp};
    use crate::mock::{HwCall, MockHardware};
    use crate::state::{ConfirmPhase, LED_DELAY_MS, TIME_STEP_S};
    use crate::timer::{SharedTimer, TimerStatus};

    const ACTIVE: PhaseId = PhaseId::new(3);
    const NEXT: PhaseId = PhaseId::new(4);
    const ERROR: PhaseId = PhaseId::new(1);

    struct Rig {
        hw: MockHardware,
        timer: SharedTimer,
        config: CycleConfig,
    }

    impl Rig {
        fn new(hw: MockHardware) -> Self {
            Self {
                hw,
                timer: SharedTimer::new(),
                config: CycleConfig::default(),
            }
        }

        fn ctx(&mut self) -> PhaseContext<'_, MockHardware> {
            PhaseContext {
                hw: &mut self.hw,
                timer: self.timer.acquire(ACTIVE).unwrap(),
                config: &self.config,
                error_phase: ERROR,
            }
        }

        fn view(&self) -> PhaseView<'_, MockHardware> {
            PhaseView {
                hw: &self.hw,
                timer: self.timer.view(),
                config: &self.config,
            }
        }
    }

    fn washing() -> Phase {
        Phase::new(
            "Washing",
            FanProfile::Washing,
            PhaseKind::Timer(TimerPhase::new(RunTime::Washing, NEXT)),
        )
    }

    fn curing() -> Phase {
        Phase::new(
            "Curing",
            FanProfile::Curing,
            PhaseKind::Curing(CuringPhase::new(RunTime::Curing, NEXT)),
        )
    }

    fn drying() -> Phase {
        Phase::new(
            "Drying",
            FanProfile::Drying,
            PhaseKind::Heated(HeatedPhase::new(
                RunTime::Drying,
                NEXT,
                Some(TargetTemp::Chamber),
            )),
        )
    }

    fn warmup() -> Phase {
        Phase::new(
            "Warmup",
            FanProfile::Menu,
            PhaseKind::Warmup(WarmupPhase::new(RunTime::Warmup, NEXT, TargetTemp::Chamber)),
        )
    }

    fn started(phase: &mut Phase, rig: &mut Rig) {
        phase.start(&mut rig.ctx());
    }

    #[test]
    fn test_timer_start_arms_motor_and_timer() {
        let mut rig = Rig::new(MockHardware::new());
        let mut phase = washing();
        started(&mut phase, &mut rig);

        assert_eq!(
            rig.hw.calls[..3],
            [
                HwCall::Fans(rig.config.fans_washing),
                HwCall::Speed { curing_mode: false },
                HwCall::MotorOn,
            ]
        );
        assert_eq!(rig.timer.view().status(), TimerStatus::Running);
        assert_eq!(phase.time(&rig.view()), Some(240));
        assert_eq!(phase.title(&rig.view()), "Washing");
        assert!(phase.supports_menu());
    }

    #[test]
    fn test_timer_completes_to_continuation() {
        let mut rig = Rig::new(MockHardware::new());
        let mut phase = washing();
        started(&mut phase, &mut rig);

        rig.hw.advance(1_000);
        assert_eq!(phase.tick(&mut rig.ctx()), None);
        rig.hw.advance(240_000);
        assert_eq!(phase.tick(&mut rig.ctx()), Some(NEXT));
    }

    #[test]
    fn test_heater_error_beats_completion() {
        // The warm-up stays cold, so only its count-up cap completes
        for mut phase in [washing(), curing(), drying(), warmup()] {
            let mut rig = Rig::new(MockHardware::curing_ready());
            rig.hw.tank = matches!(phase.kind(), PhaseKind::Timer(_));
            started(&mut phase, &mut rig);

            rig.hw.advance(3_600_000);
            rig.hw.heater_fault = true;
            assert_eq!(phase.tick(&mut rig.ctx()), Some(ERROR));
        }
    }

    #[test]
    fn test_tank_removed_pauses_washing() {
        let mut rig = Rig::new(MockHardware::new());
        let mut phase = washing();
        started(&mut phase, &mut rig);

        rig.hw.tank = false;
        let next = phase.process_events(&mut rig.ctx(), &EventBatch::edge(SensorEdge::TankRemoved));
        assert_eq!(next, None);
        assert!(!rig.hw.motor_on);
        assert_eq!(rig.timer.view().status(), TimerStatus::Paused);
        assert!(phase.is_paused(&rig.view()));
        assert_eq!(phase.title(&rig.view()), "Insert tank");
    }

    #[test]
    fn test_tank_removed_ignored_by_sealed_phases() {
        for mut phase in [curing(), drying()] {
            let mut rig = Rig::new(MockHardware::curing_ready());
            started(&mut phase, &mut rig);
            let calls = rig.hw.calls.len();

            let next =
                phase.process_events(&mut rig.ctx(), &EventBatch::edge(SensorEdge::TankRemoved));
            assert_eq!(next, None);
            assert_eq!(rig.hw.calls.len(), calls);
            assert!(rig.hw.motor_on);
            assert!(!phase.is_paused(&rig.view()));
        }
    }

    #[test]
    fn test_tank_inserted_pauses_sealed_phases() {
        for mut phase in [curing(), drying()] {
            let mut rig = Rig::new(MockHardware::curing_ready());
            started(&mut phase, &mut rig);
            assert!(rig.hw.led_on || rig.hw.heater_on);

            rig.hw.tank = true;
            let next =
                phase.process_events(&mut rig.ctx(), &EventBatch::edge(SensorEdge::TankInserted));
            assert_eq!(next, None);
            assert!(!rig.hw.led_on);
            assert!(!rig.hw.heater_on);
            assert!(!rig.hw.motor_on);
            assert_eq!(rig.timer.view().status(), TimerStatus::Paused);
            assert_eq!(phase.title(&rig.view()), "Remove tank");
        }
    }

    #[test]
    fn test_sealed_phases_turn_at_curing_speed() {
        for mut phase in [curing(), drying(), warmup()] {
            let mut rig = Rig::new(MockHardware::curing_ready());
            started(&mut phase, &mut rig);
            assert!(rig.hw.calls.contains(&HwCall::Speed { curing_mode: true }));
            assert!(!rig.hw.calls.contains(&HwCall::Speed { curing_mode: false }));

            rig.hw.cover = false;
            phase.process_events(&mut rig.ctx(), &EventBatch::edge(SensorEdge::CoverOpened));
            rig.hw.cover = true;
            phase.pause_continue(&mut rig.ctx());
            let last_speed = rig
                .hw
                .calls
                .iter()
                .rev()
                .find(|c| matches!(c, HwCall::Speed { .. }));
            assert_eq!(last_speed, Some(&HwCall::Speed { curing_mode: true }));
        }
    }

    #[test]
    fn test_missing_reading_reports_no_temperature() {
        let mut rig = Rig::new(MockHardware::curing_ready());
        let mut phase = drying();
        started(&mut phase, &mut rig);
        assert_eq!(phase.temperature(&rig.view()), Some(22.0));

        rig.hw.temp_c = f32::NAN;
        assert_eq!(phase.temperature(&rig.view()), None);
        assert_eq!(washing().temperature(&rig.view()), None);
    }

    #[test]
    fn test_cover_opened_pauses_drying() {
        let mut rig = Rig::new(MockHardware::curing_ready());
        let mut phase = drying();
        started(&mut phase, &mut rig);
        assert!(rig.hw.heater_on);

        rig.hw.cover = false;
        phase.process_events(&mut rig.ctx(), &EventBatch::edge(SensorEdge::CoverOpened));
        assert!(!rig.hw.heater_on);
        assert!(!rig.hw.motor_on);
        assert_eq!(phase.title(&rig.view()), "Close cover");
    }

    #[test]
    fn test_tank_reason_reported_before_cover() {
        let mut rig = Rig::new(MockHardware::curing_ready());
        let mut phase = curing();
        started(&mut phase, &mut rig);

        rig.hw.tank = true;
        rig.hw.cover = false;
        let events = EventBatch {
            cover_opened: true,
            tank_inserted: true,
            ..EventBatch::none()
        };
        phase.process_events(&mut rig.ctx(), &events);
        assert_eq!(phase.pause_reason(&rig.view()), Some(PauseReason::RemoveTank));
        assert_eq!(phase.title(&rig.view()), "Remove tank");
    }

    #[test]
    fn test_sensor_hooks_run_before_long_press() {
        let mut rig = Rig::new(MockHardware::new());
        let mut phase = washing();
        started(&mut phase, &mut rig);

        rig.hw.tank = false;
        let events = EventBatch {
            tank_removed: true,
            button_long_press: true,
            ..EventBatch::none()
        };
        assert_eq!(phase.process_events(&mut rig.ctx(), &events), Some(NEXT));
        assert_eq!(rig.hw.calls.last(), Some(&HwCall::MotorOff));
    }

    #[test]
    fn test_long_press_skips_remaining_time() {
        for mut phase in [washing(), curing(), drying()] {
            let mut rig = Rig::new(MockHardware::curing_ready());
            rig.hw.tank = matches!(phase.kind(), PhaseKind::Timer(_));
            started(&mut phase, &mut rig);

            let next = phase.process_events(&mut rig.ctx(), &EventBatch::long_press());
            assert_eq!(next, Some(NEXT));
        }
    }

    #[test]
    fn test_short_press_does_not_transition_timed() {
        let mut rig = Rig::new(MockHardware::new());
        let mut phase = washing();
        started(&mut phase, &mut rig);

        let next = phase.process_events(&mut rig.ctx(), &EventBatch::short_press());
        assert_eq!(next, None);
        assert!(rig.hw.motor_on);
    }

    #[test]
    fn test_resume_refused_while_cover_open() {
        let mut rig = Rig::new(MockHardware::curing_ready());
        let mut phase = curing();
        started(&mut phase, &mut rig);

        rig.hw.cover = false;
        phase.process_events(&mut rig.ctx(), &EventBatch::edge(SensorEdge::CoverOpened));
        let calls = rig.hw.calls.len();

        phase.pause_continue(&mut rig.ctx());
        assert_eq!(rig.hw.calls.len(), calls);
        assert!(!rig.hw.motor_on);
        assert!(phase.is_paused(&rig.view()));

        rig.hw.cover = true;
        phase.pause_continue(&mut rig.ctx());
        assert!(rig.hw.motor_on);
        assert!(!phase.is_paused(&rig.view()));
    }

    #[test]
    fn test_led_returns_after_delay() {
        let mut rig = Rig::new(MockHardware::curing_ready());
        let mut phase = curing();
        started(&mut phase, &mut rig);

        phase.pause_continue(&mut rig.ctx());
        assert!(!rig.hw.led_on);
        phase.pause_continue(&mut rig.ctx());
        assert!(!rig.hw.led_on);

        rig.hw.advance(LED_DELAY_MS);
        phase.tick(&mut rig.ctx());
        assert!(!rig.hw.led_on);

        rig.hw.advance(1);
        phase.tick(&mut rig.ctx());
        assert!(rig.hw.led_on);

        rig.hw.advance(5_000);
        phase.tick(&mut rig.ctx());
        assert_eq!(rig.hw.count(HwCall::LedOn), 2);
    }

    #[test]
    fn test_pause_cancels_pending_led() {
        let mut rig = Rig::new(MockHardware::curing_ready());
        let mut phase = curing();
        started(&mut phase, &mut rig);

        phase.pause_continue(&mut rig.ctx());
        phase.pause_continue(&mut rig.ctx());
        phase.pause_continue(&mut rig.ctx());
        assert!(phase.is_paused(&rig.view()));

        rig.hw.advance(10_000);
        phase.tick(&mut rig.ctx());
        assert!(!rig.hw.led_on);
    }

    #[test]
    fn test_curing_starts_paused_with_cover_open() {
        let mut hw = MockHardware::curing_ready();
        hw.cover = false;
        let mut rig = Rig::new(hw);
        let mut phase = curing();
        started(&mut phase, &mut rig);

        assert!(!rig.hw.led_on);
        assert!(!rig.hw.motor_on);
        assert_eq!(phase.title(&rig.view()), "Close cover");
    }

    #[test]
    fn test_user_pause_without_reason() {
        let mut rig = Rig::new(MockHardware::new());
        let mut phase = washing();
        started(&mut phase, &mut rig);

        phase.pause_continue(&mut rig.ctx());
        assert_eq!(phase.title(&rig.view()), PAUSED_LABEL);
    }

    #[test]
    fn test_heated_applies_target_before_heater() {
        let mut rig = Rig::new(MockHardware::curing_ready());
        rig.config.target_temp_c = 42;
        let mut phase = drying();
        started(&mut phase, &mut rig);

        let target = rig.hw.calls.iter().position(|c| *c == HwCall::Target(42));
        let heater = rig.hw.calls.iter().position(|c| *c == HwCall::HeaterOn);
        assert!(target.unwrap() < heater.unwrap());
        assert_eq!(phase.temperature(&rig.view()), Some(22.0));
    }

    #[test]
    fn test_stop_tears_down_outputs() {
        let mut rig = Rig::new(MockHardware::curing_ready());
        let mut phase = drying();
        started(&mut phase, &mut rig);
        phase.stop(&mut rig.ctx());
        assert!(!rig.hw.heater_on);
        assert!(!rig.hw.motor_on);
        assert_eq!(rig.timer.view().status(), TimerStatus::Stopped);

        let mut phase = curing();
        started(&mut phase, &mut rig);
        phase.stop(&mut rig.ctx());
        assert!(!rig.hw.led_on);
        assert!(!rig.hw.motor_on);
    }

    #[test]
    fn test_time_adjust_through_phase() {
        let mut rig = Rig::new(MockHardware::new());
        rig.config.washing_run_time_min = 10;
        let mut phase = washing();
        started(&mut phase, &mut rig);

        assert_eq!(phase.increase_time(&mut rig.ctx()), TimeAdjust::AtMaximum);
        assert_eq!(phase.time(&rig.view()), Some(600));
        assert_eq!(phase.decrease_time(&mut rig.ctx()), TimeAdjust::Decreased);
        assert_eq!(phase.time(&rig.view()), Some(600 - TIME_STEP_S));
    }

    #[test]
    fn test_warmup_skips_when_not_heating_to_target() {
        let mut rig = Rig::new(MockHardware::curing_ready());
        rig.config.heat_to_target = false;
        let mut phase = warmup();
        started(&mut phase, &mut rig);

        assert_eq!(phase.tick(&mut rig.ctx()), Some(NEXT));
        assert_eq!(rig.timer.view().current_secs(), 0);
    }

    #[test]
    fn test_warmup_done_at_target() {
        let mut rig = Rig::new(MockHardware::curing_ready());
        rig.hw.temp_c = 20.0;
        let mut phase = warmup();
        started(&mut phase, &mut rig);

        rig.hw.advance(2_000);
        assert_eq!(phase.tick(&mut rig.ctx()), None);
        assert_eq!(phase.time(&rig.view()), Some(2));

        rig.hw.temp_c = f32::from(rig.config.target_temp_c);
        assert_eq!(phase.tick(&mut rig.ctx()), Some(NEXT));
    }

    #[test]
    fn test_warmup_time_not_adjustable() {
        let mut rig = Rig::new(MockHardware::curing_ready());
        let mut phase = warmup();
        started(&mut phase, &mut rig);

        assert_eq!(phase.decrease_time(&mut rig.ctx()), TimeAdjust::NotApplicable);
        assert_eq!(phase.increase_time(&mut rig.ctx()), TimeAdjust::NotApplicable);
    }

    #[test]
    fn test_confirm_acknowledged_by_short_press() {
        let mut rig = Rig::new(MockHardware::new());
        let mut phase = Phase::new(
            "Finished",
            FanProfile::Menu,
            PhaseKind::Confirm(ConfirmPhase::with_beep("Press to continue", BeepMode::Once)),
        );
        started(&mut phase, &mut rig);
        assert_eq!(phase.message(), Some("Press to continue"));
        assert_eq!(phase.tick(&mut rig.ctx()), None);

        let events = EventBatch {
            button_short_press: true,
            button_long_press: true,
            ..EventBatch::none()
        };
        assert_eq!(phase.process_events(&mut rig.ctx(), &events), None);
        assert!(phase.is_finished());
    }

    #[test]
    fn test_idle_defaults() {
        let mut rig = Rig::new(MockHardware::new());
        let mut phase = Phase::new("Ready", FanProfile::Menu, PhaseKind::Idle);
        started(&mut phase, &mut rig);

        assert_eq!(rig.hw.calls, [HwCall::Fans(rig.config.fans_menu)]);
        assert_eq!(phase.title(&rig.view()), "Ready");
        assert_eq!(phase.message(), None);
        assert_eq!(phase.time(&rig.view()), None);
        assert_eq!(phase.temperature(&rig.view()), None);
        assert!(!phase.supports_menu());
        assert!(!phase.is_paused(&rig.view()));
        assert!(!phase.is_finished());
        assert_eq!(phase.continue_to(), None);
        assert_eq!(phase.decrease_time(&mut rig.ctx()), TimeAdjust::NotApplicable);
        assert_eq!(phase.tick(&mut rig.ctx()), None);
        assert_eq!(
            phase.process_events(&mut rig.ctx(), &EventBatch::long_press()),
            None
        );
    }
}
