//! Signals produced for the presentation surface.

use crate::phase::ExpandTicket;

/// Something the surface should react to.
///
/// Queued by the controller and collected with
/// [`SpinController::drain_events`](crate::SpinController::drain_events).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WheelEvent {
    /// A spin was triggered. The surface expands and answers with
    /// `expand_complete(ticket)`, even if it is already expanded.
    SpinStarted { ticket: ExpandTicket },

    /// The wheel stopped on `index`.
    WinnerSelected { index: usize, label: String },

    /// The pause window ended and the winner is on display.
    WinnerShown,

    /// The winner display was dismissed.
    WinnerDismissed,

    /// The delayed contraction after a dismissal is due.
    Contract,

    /// A trigger was rejected because the item list is empty.
    PreconditionViolated,
}
