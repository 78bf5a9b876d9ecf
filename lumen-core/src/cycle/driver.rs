//! Cycle driver
//!
//! Owns the hardware façade, the configuration, the phase graph and the
//! shared timer. Each poll dispatches the event batch to the active
//! phase, ticks it, and performs any requested transition by stopping
//! the old phase and starting the new one. The timer is released by the
//! old phase before the new one acquires it, so at most one phase ever
//! holds it.

use super::{CycleError, PhaseGraph};
use crate::config::{CycleConfig, Program};
use crate::safety::PauseReason;
use crate::state::{EventBatch, Phase, PhaseContext, PhaseId, PhaseView, TimeAdjust};
use crate::timer::{CycleTimer, SharedTimer};
use crate::traits::Hardware;

/// Driver-level reaction to a short press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PressAction {
    /// Home phase started the configured program
    Began(PhaseId),
    /// Active phase was paused or resumed
    PauseContinue,
    /// Press already consumed by a transition, or nothing to do
    Ignored,
}

pub struct CycleDriver<H: Hardware> {
    hw: H,
    config: CycleConfig,
    graph: PhaseGraph,
    timer: SharedTimer,
    /// Always a valid id of `graph`
    active: PhaseId,
}

impl<H: Hardware> CycleDriver<H> {
    /// Validate the graph and enter its home phase
    pub fn new(hw: H, config: CycleConfig, graph: PhaseGraph) -> Result<Self, CycleError> {
        graph.validate()?;
        let home = graph.home();
        let mut driver = Self {
            hw,
            config,
            graph,
            timer: SharedTimer::new(),
            active: home,
        };
        driver.enter(home)?;
        info!("Cycle driver ready");
        Ok(driver)
    }

    /// Run one poll
    ///
    /// Returns the phase entered during this poll, if any.
    pub fn poll(&mut self, events: &EventBatch) -> Result<Option<PhaseId>, CycleError> {
        let mut entered = None;

        let next = {
            let (phase, mut ctx) = self.active_parts()?;
            phase.process_events(&mut ctx, events)
        };
        if let Some(next) = next {
            self.activate(next)?;
            entered = Some(next);
        }

        let next = {
            let (phase, mut ctx) = self.active_parts()?;
            phase.tick(&mut ctx)
        };
        if let Some(next) = next {
            self.activate(next)?;
            entered = Some(next);
        }

        if self.phase().is_finished() {
            let home = self.graph.home();
            self.activate(home)?;
            entered = Some(home);
        }

        Ok(entered)
    }

    /// Start the entry phase of `program`
    pub fn begin(&mut self, program: Program) -> Result<PhaseId, CycleError> {
        let entry = self.graph.entry(program).ok_or(CycleError::NoEntry(program))?;
        info!("Starting program {}", program);
        self.activate(entry)?;
        Ok(entry)
    }

    /// Stop the active phase and start `id`
    ///
    /// Re-activating the active phase restarts it.
    pub fn activate(&mut self, id: PhaseId) -> Result<(), CycleError> {
        if !self.graph.contains(id) {
            return Err(CycleError::UnknownPhase(id));
        }
        debug!("Phase {} -> {}", self.active, id);
        self.leave()?;
        self.enter(id)
    }

    /// Act on a short press the active phase did not handle itself
    ///
    /// `entered` is the result of the [`poll`](Self::poll) that carried
    /// the press. A press that caused a transition is not acted on
    /// again. At home the configured program starts; in a timed phase
    /// the press toggles pause, and a resume is still refused while an
    /// interlock holds.
    pub fn short_press(&mut self, entered: Option<PhaseId>) -> Result<PressAction, CycleError> {
        if entered.is_some() {
            return Ok(PressAction::Ignored);
        }
        if self.is_home() {
            let program = self.config.program;
            return self.begin(program).map(PressAction::Began);
        }
        if self.supports_menu() {
            self.pause_continue()?;
            return Ok(PressAction::PauseContinue);
        }
        Ok(PressAction::Ignored)
    }

    /// Abandon the active phase and return home
    pub fn go_home(&mut self) -> Result<(), CycleError> {
        let home = self.graph.home();
        self.activate(home)
    }

    fn enter(&mut self, id: PhaseId) -> Result<(), CycleError> {
        let error_phase = self.graph.error();
        let phase = self.graph.get_mut(id).ok_or(CycleError::UnknownPhase(id))?;
        let timer = self.timer.acquire(id)?;
        let mut ctx = PhaseContext {
            hw: &mut self.hw,
            timer,
            config: &self.config,
            error_phase,
        };
        phase.start(&mut ctx);
        self.active = id;
        Ok(())
    }

    fn leave(&mut self) -> Result<(), CycleError> {
        let id = self.active;
        {
            let (phase, mut ctx) = self.active_parts()?;
            phase.stop(&mut ctx);
        }
        self.timer.release(id)?;
        Ok(())
    }

    /// Active phase together with its context
    fn active_parts(&mut self) -> Result<(&mut Phase, PhaseContext<'_, H>), CycleError> {
        let id = self.active;
        let error_phase = self.graph.error();
        let phase = self.graph.get_mut(id).ok_or(CycleError::UnknownPhase(id))?;
        let timer = self.timer.lease(id)?;
        Ok((
            phase,
            PhaseContext {
                hw: &mut self.hw,
                timer,
                config: &self.config,
                error_phase,
            },
        ))
    }

    fn phase(&self) -> &Phase {
        &self.graph[self.active]
    }

    fn view(&self) -> PhaseView<'_, H> {
        PhaseView {
            hw: &self.hw,
            timer: self.timer.view(),
            config: &self.config,
        }
    }

    // Consumer interface

    pub fn active(&self) -> PhaseId {
        self.active
    }

    pub fn is_home(&self) -> bool {
        self.active == self.graph.home()
    }

    pub fn title(&self) -> &'static str {
        self.phase().title(&self.view())
    }

    pub fn message(&self) -> Option<&'static str> {
        self.phase().message()
    }

    pub fn time(&self) -> Option<u32> {
        self.phase().time(&self.view())
    }

    pub fn temperature(&self) -> Option<f32> {
        self.phase().temperature(&self.view())
    }

    pub fn supports_menu(&self) -> bool {
        self.phase().supports_menu()
    }

    pub fn is_paused(&self) -> bool {
        self.phase().is_paused(&self.view())
    }

    pub fn is_finished(&self) -> bool {
        self.phase().is_finished()
    }

    pub fn pause_reason(&self) -> Option<PauseReason> {
        self.phase().pause_reason(&self.view())
    }

    pub fn decrease_time(&mut self) -> Result<TimeAdjust, CycleError> {
        let (phase, mut ctx) = self.active_parts()?;
        Ok(phase.decrease_time(&mut ctx))
    }

    pub fn increase_time(&mut self) -> Result<TimeAdjust, CycleError> {
        let (phase, mut ctx) = self.active_parts()?;
        Ok(phase.increase_time(&mut ctx))
    }

    pub fn pause_continue(&mut self) -> Result<(), CycleError> {
        let (phase, mut ctx) = self.active_parts()?;
        phase.pause_continue(&mut ctx);
        Ok(())
    }

    // Owned resources

    pub fn config(&self) -> &CycleConfig {
        &self.config
    }

    /// Edits apply from the next phase activation
    pub fn config_mut(&mut self) -> &mut CycleConfig {
        &mut self.config
    }

    pub fn graph(&self) -> &PhaseGraph {
        &self.graph
    }

    pub fn timer(&self) -> &CycleTimer {
        self.timer.view()
    }

    pub fn timer_holder(&self) -> Option<PhaseId> {
        self.timer.holder()
    }

    pub fn hardware(&self) -> &H {
        &self.hw
    }

    pub fn hardware_mut(&mut self) -> &mut H {
        &mut self.hw
    }
}
