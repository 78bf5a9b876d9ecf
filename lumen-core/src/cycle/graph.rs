//! Phase graph
//!
//! Phases are built once and stay alive for the lifetime of the
//! appliance. Continuation targets are phase ids into the same table,
//! checked by [`PhaseGraph::validate`].

use core::ops::Index;

use heapless::Vec;

use super::CycleError;
use crate::config::{BeepMode, FanProfile, Program, RunTime, TargetTemp};
use crate::state::{
    ConfirmPhase, CuringPhase, HeatedPhase, Phase, PhaseId, PhaseKind, TimerPhase, WarmupPhase,
};

/// Maximum number of phases in a graph
pub const MAX_PHASES: usize = 16;

/// Statically wired table of phases
#[derive(Debug, Clone)]
pub struct PhaseGraph {
    phases: Vec<Phase, MAX_PHASES>,
    home: PhaseId,
    error: PhaseId,
    entries: [Option<PhaseId>; Program::COUNT],
}

impl PhaseGraph {
    /// Create a graph holding the home and heater-error phases
    pub fn new(home: Phase, error: Phase) -> Result<Self, CycleError> {
        let mut graph = Self {
            phases: Vec::new(),
            home: PhaseId::new(0),
            error: PhaseId::new(0),
            entries: [None; Program::COUNT],
        };
        graph.home = graph.add(home)?;
        graph.error = graph.add(error)?;
        Ok(graph)
    }

    /// Append a phase and return its id
    pub fn add(&mut self, phase: Phase) -> Result<PhaseId, CycleError> {
        let id = u8::try_from(self.phases.len()).map_err(|_| CycleError::GraphFull)?;
        self.phases.push(phase).map_err(|_| CycleError::GraphFull)?;
        Ok(PhaseId::new(id))
    }

    pub fn get(&self, id: PhaseId) -> Option<&Phase> {
        self.phases.get(id.index())
    }

    pub fn get_mut(&mut self, id: PhaseId) -> Option<&mut Phase> {
        self.phases.get_mut(id.index())
    }

    pub fn contains(&self, id: PhaseId) -> bool {
        id.index() < self.phases.len()
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    /// Idle phase, entered at power-on and after acknowledgement
    pub fn home(&self) -> PhaseId {
        self.home
    }

    /// Phase entered on a heater fault
    pub fn error(&self) -> PhaseId {
        self.error
    }

    /// Rewire a continuation target
    pub fn set_continue_to(&mut self, id: PhaseId, to: PhaseId) -> Result<(), CycleError> {
        if !self.contains(to) {
            return Err(CycleError::UnknownPhase(to));
        }
        let phase = self.get_mut(id).ok_or(CycleError::UnknownPhase(id))?;
        if phase.set_continue_to(to) {
            Ok(())
        } else {
            Err(CycleError::NotTimed(id))
        }
    }

    /// Make `id` the first phase of `program`
    pub fn set_entry(&mut self, program: Program, id: PhaseId) -> Result<(), CycleError> {
        if !self.contains(id) {
            return Err(CycleError::UnknownPhase(id));
        }
        self.entries[program.index()] = Some(id);
        Ok(())
    }

    /// First phase of `program`
    pub fn entry(&self, program: Program) -> Option<PhaseId> {
        self.entries[program.index()]
    }

    /// Check that every continuation target exists
    pub fn validate(&self) -> Result<(), CycleError> {
        for phase in &self.phases {
            if let Some(to) = phase.continue_to() {
                if !self.contains(to) {
                    return Err(CycleError::UnknownPhase(to));
                }
            }
        }
        Ok(())
    }

    /// Wiring of the wash & cure station
    ///
    /// ```text
    /// Washing       washing -------------------------------> finished
    /// Curing        curing --------------------------------> finished
    /// Drying        warm-up -> drying ---------------------> finished
    /// DryingCuring  warm-up -> drying -> curing -----------> finished
    /// ResinPreheat  warm-up -> resin preheat --------------> finished
    /// ```
    pub fn standard() -> Result<Self, CycleError> {
        let mut graph = Self::new(
            Phase::new("Ready", FanProfile::Menu, PhaseKind::Idle),
            Phase::new(
                "Error",
                FanProfile::Menu,
                PhaseKind::Confirm(ConfirmPhase::with_beep("Heater failure", BeepMode::Repeat)),
            ),
        )?;

        let finished = graph.add(Phase::new(
            "Finished",
            FanProfile::Menu,
            PhaseKind::Confirm(ConfirmPhase::new("Press to continue")),
        ))?;

        let washing = graph.add(Phase::new(
            "Washing",
            FanProfile::Washing,
            PhaseKind::Timer(TimerPhase::new(RunTime::Washing, finished)),
        ))?;
        let curing = graph.add(Phase::new(
            "Curing",
            FanProfile::Curing,
            PhaseKind::Curing(CuringPhase::new(RunTime::Curing, finished)),
        ))?;
        let drying = graph.add(Phase::new(
            "Drying",
            FanProfile::Drying,
            PhaseKind::Heated(HeatedPhase::new(
                RunTime::Drying,
                finished,
                Some(TargetTemp::Chamber),
            )),
        ))?;
        let drying_then_curing = graph.add(Phase::new(
            "Drying",
            FanProfile::Drying,
            PhaseKind::Heated(HeatedPhase::new(
                RunTime::Drying,
                curing,
                Some(TargetTemp::Chamber),
            )),
        ))?;
        let warmup_drying = graph.add(warmup(drying, TargetTemp::Chamber))?;
        let warmup_drying_curing = graph.add(warmup(drying_then_curing, TargetTemp::Chamber))?;
        let preheat = graph.add(Phase::new(
            "Preheating resin",
            FanProfile::Drying,
            PhaseKind::Heated(HeatedPhase::new(
                RunTime::ResinPreheat,
                finished,
                Some(TargetTemp::Resin),
            )),
        ))?;
        let warmup_preheat = graph.add(warmup(preheat, TargetTemp::Resin))?;

        graph.set_entry(Program::Washing, washing)?;
        graph.set_entry(Program::Curing, curing)?;
        graph.set_entry(Program::Drying, warmup_drying)?;
        graph.set_entry(Program::DryingCuring, warmup_drying_curing)?;
        graph.set_entry(Program::ResinPreheat, warmup_preheat)?;

        graph.validate()?;
        Ok(graph)
    }
}

fn warmup(then: PhaseId, target: TargetTemp) -> Phase {
    Phase::new(
        "Warming up",
        FanProfile::Menu,
        PhaseKind::Warmup(WarmupPhase::new(RunTime::Warmup, then, target)),
    )
}

impl Index<PhaseId> for PhaseGraph {
    type Output = Phase;

    fn index(&self, id: PhaseId) -> &Phase {
        &self.phases[id.index()]
    }
}
