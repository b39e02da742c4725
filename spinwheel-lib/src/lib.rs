//! Animation and state engine for a randomized draw wheel.
//!
//! A [`SpinController`] idles with a slow drift, and on a trigger asks the
//! surface to expand, spins with a cubic ease-out onto a uniformly chosen
//! item, and holds the winner until dismissed. The surface queries
//! [`ItemAttributes`] per item per frame to draw the list as an endless loop.

pub mod clock;
pub mod config;
pub mod controller;
pub mod easing;
pub mod error;
pub mod event;
pub mod items;
pub mod layout;
pub mod offset;
pub mod phase;
pub mod random;
pub mod schedule;

pub use clock::SessionClock;
pub use config::WheelConfig;
pub use controller::SpinController;
pub use easing::{Easing, TransitionConfig};
pub use error::WheelError;
pub use event::WheelEvent;
pub use items::ItemList;
pub use layout::ItemAttributes;
pub use offset::{OffsetEngine, SpinPlan, SpinStep};
pub use phase::{ExpandTicket, Phase, PhaseKind, Winner};
pub use random::{FixedDraw, RandomSource, RngSource};
pub use schedule::{Scheduler, TaskHandle};
