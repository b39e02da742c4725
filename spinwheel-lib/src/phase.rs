//! Controller lifecycle states.

use std::fmt;

use crate::offset::SpinPlan;

/// Identifies one expansion request, echoed back by the surface when its
/// expand transition finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExpandTicket(pub(crate) u64);

impl ExpandTicket {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// The selected item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Winner {
    pub index: usize,
    pub label: String,
}

/// The single active lifecycle state, carrying the data only that state owns.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    /// Drifting slowly, waiting for a trigger.
    Idle,
    /// Waiting for the surface to finish expanding.
    Expanding { ticket: ExpandTicket },
    /// Following the plan's deceleration curve.
    Spinning { plan: SpinPlan },
    /// Stopped on the winner, inside the pause window.
    Landed { winner: Winner },
    /// Winner on display until dismissed.
    WinnerShown { winner: Winner },
}

impl Phase {
    pub fn kind(&self) -> PhaseKind {
        match self {
            Phase::Idle => PhaseKind::Idle,
            Phase::Expanding { .. } => PhaseKind::Expanding,
            Phase::Spinning { .. } => PhaseKind::Spinning,
            Phase::Landed { .. } => PhaseKind::Landed,
            Phase::WinnerShown { .. } => PhaseKind::WinnerShown,
        }
    }

    pub fn winner(&self) -> Option<&Winner> {
        match self {
            Phase::Landed { winner } | Phase::WinnerShown { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn plan(&self) -> Option<&SpinPlan> {
        match self {
            Phase::Spinning { plan } => Some(plan),
            _ => None,
        }
    }
}

/// Payload-free view of [`Phase`], used by the layout projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseKind {
    Idle,
    Expanding,
    Spinning,
    Landed,
    WinnerShown,
}

impl PhaseKind {
    /// Stopped on an item; the display offset is snapped.
    pub fn is_stopped(self) -> bool {
        matches!(self, PhaseKind::Landed | PhaseKind::WinnerShown)
    }

    /// A trigger is in flight; new triggers are ignored.
    pub fn is_busy(self) -> bool {
        matches!(self, PhaseKind::Expanding | PhaseKind::Spinning)
    }
}

impl fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PhaseKind::Idle => "idle",
            PhaseKind::Expanding => "expanding",
            PhaseKind::Spinning => "spinning",
            PhaseKind::Landed => "landed",
            PhaseKind::WinnerShown => "winner-shown",
        };
        f.write_str(name)
    }
}
