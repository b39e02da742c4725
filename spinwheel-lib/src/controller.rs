//! Phase state machine driving a spin from trigger to dismissal.

use std::time::Duration;

use log::{debug, info, trace, warn};
use rand::rngs::ThreadRng;

use crate::config::WheelConfig;
use crate::error::WheelError;
use crate::event::WheelEvent;
use crate::items::ItemList;
use crate::layout::{self, ItemAttributes};
use crate::offset::{OffsetEngine, SpinPlan};
use crate::phase::{ExpandTicket, Phase, PhaseKind, Winner};
use crate::random::{RandomSource, RngSource};
use crate::schedule::{Scheduler, TaskHandle};

/// Work the controller schedules for itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Task {
    IdleFrame,
    SpinFrame,
    Pause,
    Contract,
}

/// Owns the phase, the active spin plan and the winner, and drives the
/// offset engine from its scheduled frame ticks.
///
/// Single-threaded: the surface calls [`tick`](Self::tick) once per frame and
/// forwards triggers between ticks. At most one frame driver (idle drift or
/// spin) is outstanding at any time.
#[derive(Debug)]
pub struct SpinController<R = RngSource<ThreadRng>> {
    items: ItemList,
    config: WheelConfig,
    random: R,
    engine: OffsetEngine,
    phase: Phase,
    scheduler: Scheduler<Task>,
    /// Idle drift or spin frame, never both.
    frame: Option<TaskHandle>,
    pause_timer: Option<TaskHandle>,
    contract_timer: Option<TaskHandle>,
    next_ticket: u64,
    events: Vec<WheelEvent>,
}

impl SpinController {
    /// Controller drawing from the thread-local generator.
    pub fn with_thread_rng(items: ItemList, config: WheelConfig, now: Duration) -> Result<Self, WheelError> {
        Self::new(items, config, RngSource::thread(), now)
    }
}

impl<R: RandomSource> SpinController<R> {
    /// Create a controller in Idle with drift anchored at offset 0 and `now`.
    pub fn new(items: ItemList, config: WheelConfig, random: R, now: Duration) -> Result<Self, WheelError> {
        config.validate()?;
        info!("Wheel ready with {} items", items.len());

        let mut controller = Self {
            engine: OffsetEngine::new(0.0, config.idle_rate),
            items,
            config,
            random,
            phase: Phase::Idle,
            scheduler: Scheduler::new(),
            frame: None,
            pause_timer: None,
            contract_timer: None,
            next_ticket: 0,
            events: Vec::new(),
        };
        controller.resume_idle(now);
        Ok(controller)
    }

    // =========================================================================
    // Triggers
    // =========================================================================

    /// Trigger a spin.
    ///
    /// Returns `Ok(true)` when the controller entered Expanding and queued
    /// [`WheelEvent::SpinStarted`], `Ok(false)` when a spin is already in
    /// flight, and `Err(EmptyItemList)` with no state change when there is
    /// nothing to draw from.
    pub fn start_spin(&mut self, now: Duration) -> Result<bool, WheelError> {
        if self.phase.kind().is_busy() {
            debug!("Spin trigger ignored while {}", self.phase.kind());
            return Ok(false);
        }
        if self.items.is_empty() {
            warn!("Spin trigger rejected: item list is empty");
            self.events.push(WheelEvent::PreconditionViolated);
            return Err(WheelError::EmptyItemList);
        }

        // Catch the offset up to the trigger time before freezing it.
        self.engine.idle_drift(now);
        self.halt_idle();
        self.scheduler.cancel(&mut self.pause_timer);
        self.scheduler.cancel(&mut self.contract_timer);

        let ticket = ExpandTicket(self.next_ticket);
        self.next_ticket += 1;

        self.transition(Phase::Expanding { ticket });
        self.events.push(WheelEvent::SpinStarted { ticket });
        Ok(true)
    }

    /// Signal from the surface that the expansion for `ticket` finished.
    ///
    /// Resolves the pending expansion exactly once: unknown, stale and
    /// repeated tickets are ignored. Returns true if the spin started.
    pub fn expand_complete(&mut self, ticket: ExpandTicket, now: Duration) -> bool {
        let Phase::Expanding { ticket: pending } = &self.phase else {
            trace!("Expand signal {:?} ignored while {}", ticket, self.phase.kind());
            return false;
        };
        if *pending != ticket {
            trace!("Expand signal {:?} does not match pending {:?}", ticket, pending);
            return false;
        }

        let plan = match self
            .engine
            .plan_spin(&self.config, self.items.len(), &mut self.random, now)
        {
            Ok(plan) => plan,
            Err(err) => {
                warn!("Spin planning failed: {}", err);
                self.events.push(WheelEvent::PreconditionViolated);
                self.transition(Phase::Idle);
                self.resume_idle(now);
                return false;
            }
        };

        info!(
            "Spinning to item {} over {:?} ({} loops, distance {:.1})",
            plan.random_index, plan.duration, plan.extra_spins, plan.total_distance
        );

        self.scheduler.cancel(&mut self.frame);
        self.scheduler.cancel(&mut self.pause_timer);
        self.transition(Phase::Spinning { plan });
        self.frame = Some(self.scheduler.request_frame(Task::SpinFrame));
        true
    }

    /// Close the winner display and go back to idling.
    ///
    /// Only valid in WinnerShown; anywhere else this is a no-op returning
    /// false.
    pub fn dismiss_winner(&mut self, now: Duration) -> bool {
        if self.phase.kind() != PhaseKind::WinnerShown {
            trace!("Dismiss ignored while {}", self.phase.kind());
            return false;
        }

        self.transition(Phase::Idle);
        self.events.push(WheelEvent::WinnerDismissed);

        self.scheduler.cancel(&mut self.contract_timer);
        self.contract_timer = Some(
            self.scheduler
                .set_timeout(Task::Contract, self.config.contract_delay, now),
        );
        self.resume_idle(now);
        true
    }

    /// Cancel every outstanding tick and timer.
    ///
    /// A pending expansion is invalidated and an active plan discarded.
    pub fn teardown(&mut self) {
        let cancelled = self.scheduler.cancel_all();
        self.frame = None;
        self.pause_timer = None;
        self.contract_timer = None;
        self.engine.stop_idle();

        if self.phase.kind().is_busy() {
            self.transition(Phase::Idle);
        }
        debug!("Wheel torn down, {} scheduled tasks cancelled", cancelled);
    }

    // =========================================================================
    // Frame driver
    // =========================================================================

    /// Run every frame task and timer due at `now`.
    pub fn tick(&mut self, now: Duration) {
        for (handle, task) in self.scheduler.take_due(now) {
            // A task superseded earlier in this batch must not run.
            let slot = match task {
                Task::IdleFrame | Task::SpinFrame => &mut self.frame,
                Task::Pause => &mut self.pause_timer,
                Task::Contract => &mut self.contract_timer,
            };
            if *slot != Some(handle) {
                trace!("Skipping stale {:?}", task);
                continue;
            }
            *slot = None;

            match task {
                Task::IdleFrame => {
                    self.engine.idle_drift(now);
                    self.frame = Some(self.scheduler.request_frame(Task::IdleFrame));
                }
                Task::SpinFrame => self.advance_spin(now),
                Task::Pause => self.show_winner(),
                Task::Contract => {
                    debug!("Contraction due");
                    self.events.push(WheelEvent::Contract);
                }
            }
        }
    }

    fn advance_spin(&mut self, now: Duration) {
        let Phase::Spinning { plan } = &self.phase else {
            return;
        };
        let plan = *plan;

        if self.engine.spin_trajectory(&plan, now).is_complete() {
            self.land(&plan, now);
        } else {
            self.frame = Some(self.scheduler.request_frame(Task::SpinFrame));
        }
    }

    fn land(&mut self, plan: &SpinPlan, now: Duration) {
        self.scheduler.cancel(&mut self.frame);
        self.engine.pin(plan.final_offset());

        let index = plan.random_index;
        let label = self.items.label(index).unwrap_or_default().to_string();
        info!("Landed on item {}: {}", index, label);

        self.events.push(WheelEvent::WinnerSelected {
            index,
            label: label.clone(),
        });
        self.transition(Phase::Landed {
            winner: Winner { index, label },
        });
        self.pause_timer = Some(
            self.scheduler
                .set_timeout(Task::Pause, self.config.pause, now),
        );
    }

    fn show_winner(&mut self) {
        let Phase::Landed { winner } = &self.phase else {
            return;
        };
        let winner = winner.clone();
        self.transition(Phase::WinnerShown { winner });
        self.events.push(WheelEvent::WinnerShown);
    }

    fn resume_idle(&mut self, now: Duration) {
        self.scheduler.cancel(&mut self.frame);
        self.engine.start_idle(now);
        self.frame = Some(self.scheduler.request_frame(Task::IdleFrame));
    }

    fn halt_idle(&mut self) {
        self.scheduler.cancel(&mut self.frame);
        self.engine.stop_idle();
    }

    fn transition(&mut self, next: Phase) {
        debug!("Phase {} -> {}", self.phase.kind(), next.kind());
        self.phase = next;
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn phase_kind(&self) -> PhaseKind {
        self.phase.kind()
    }

    /// Raw offset as last written by the engine.
    pub fn offset(&self) -> f64 {
        self.engine.offset()
    }

    /// Offset after snapping, as the surface should render it.
    pub fn display_offset(&self) -> f64 {
        layout::display_offset(
            self.phase.kind(),
            self.engine.offset(),
            self.config.item_height,
            self.config.centering_offset,
        )
    }

    pub fn winner(&self) -> Option<&Winner> {
        self.phase.winner()
    }

    pub fn spin_plan(&self) -> Option<&SpinPlan> {
        self.phase.plan()
    }

    /// True while a trigger is in flight and the surface should disable it.
    pub fn is_busy(&self) -> bool {
        self.phase.kind().is_busy()
    }

    pub fn items(&self) -> &ItemList {
        &self.items
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    /// True while idle drift or a spin wants frame ticks.
    pub fn needs_frame(&self) -> bool {
        self.scheduler.has_frame_request()
    }

    /// Earliest pending timer, for surfaces that sleep between frames.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler.next_deadline()
    }

    /// Number of scheduled ticks and timers.
    pub fn pending_tasks(&self) -> usize {
        self.scheduler.pending()
    }

    /// Take every event queued since the last call.
    pub fn drain_events(&mut self) -> Vec<WheelEvent> {
        std::mem::take(&mut self.events)
    }

    /// Render attributes for one item, or `None` if out of range.
    pub fn item_attributes(&self, index: usize) -> Option<ItemAttributes> {
        (index < self.items.len()).then(|| {
            layout::project(
                index,
                self.items.len(),
                self.engine.offset(),
                self.phase.kind(),
                &self.config,
            )
        })
    }

    /// Render attributes for every item, in list order.
    pub fn frame(&self) -> Vec<ItemAttributes> {
        (0..self.items.len())
            .filter_map(|index| self.item_attributes(index))
            .collect()
    }
}
