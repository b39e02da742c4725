//! Application state: the wheel controller plus everything it signals to.

use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, info, warn};
use spinwheel_lib::{
    ExpandTicket, RandomSource, SessionClock, SpinController, WheelError, WheelEvent,
};

use crate::surface::Surface;

/// Whether the event loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub type Wheel = SpinController<Box<dyn RandomSource>>;

pub struct App {
    clock: SessionClock,
    wheel: Wheel,
    surface: Surface,
    /// Expansion the surface still owes the controller.
    pending_expand: Option<ExpandTicket>,
    /// Label shown in the winner modal.
    modal: Option<String>,
    status: Option<String>,
}

impl App {
    pub fn new(clock: SessionClock, wheel: Wheel) -> Self {
        Self {
            clock,
            wheel,
            surface: Surface::default(),
            pending_expand: None,
            modal: None,
            status: None,
        }
    }

    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    pub fn wheel(&self) -> &Wheel {
        &self.wheel
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn modal(&self) -> Option<&str> {
        self.modal.as_deref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Advance the wheel and the surface to `now`.
    pub fn update(&mut self, now: Duration) {
        self.wheel.tick(now);

        if self.surface.update(now)
            && let Some(ticket) = self.pending_expand.take()
        {
            debug!("Surface expanded for {:?}", ticket);
            self.wheel.expand_complete(ticket, now);
        }

        self.pump(now);
    }

    /// Apply controller events to the surface and the modal.
    fn pump(&mut self, now: Duration) {
        for event in self.wheel.drain_events() {
            debug!("Wheel event: {:?}", event);
            match event {
                WheelEvent::SpinStarted { ticket } => {
                    self.modal = None;
                    self.status = None;
                    if self.surface.expand(now) {
                        self.wheel.expand_complete(ticket, now);
                    } else {
                        self.pending_expand = Some(ticket);
                    }
                }
                WheelEvent::WinnerSelected { label, .. } => {
                    self.modal = Some(label);
                }
                WheelEvent::WinnerShown => {}
                WheelEvent::WinnerDismissed => {
                    self.modal = None;
                }
                WheelEvent::Contract => {
                    self.surface.contract(now);
                }
                WheelEvent::PreconditionViolated => {
                    self.status = Some("Nothing to draw: the item list is empty".to_string());
                }
            }
        }
    }

    pub fn handle_event(&mut self, event: Event) -> Flow {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            _ => Flow::Continue,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Flow {
        let now = self.now();
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Flow::Quit;
            }
            KeyCode::Char('q') => return Flow::Quit,
            KeyCode::Enter | KeyCode::Esc if self.modal.is_some() => {
                self.wheel.dismiss_winner(now);
            }
            KeyCode::Char(' ') | KeyCode::Enter if self.modal.is_none() => self.trigger(now),
            _ => {}
        }
        self.pump(now);
        Flow::Continue
    }

    fn trigger(&mut self, now: Duration) {
        match self.wheel.start_spin(now) {
            Ok(true) => info!("Draw started"),
            Ok(false) => debug!("Draw already running"),
            Err(WheelError::EmptyItemList) => warn!("Draw refused: no items"),
            Err(err) => warn!("Draw refused: {}", err),
        }
    }

    pub fn shutdown(&mut self) {
        self.wheel.teardown();
        self.pending_expand = None;
    }
}
