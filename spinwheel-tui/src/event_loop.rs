//! Main event loop: terminal input and the frame clock.

use std::time::Duration;

use crossterm::event::EventStream;
use futures::StreamExt;
use log::{error, info, trace};
use tokio::time::{MissedTickBehavior, interval};

use crate::app::{App, Flow};
use crate::error::AppError;
use crate::render;
use crate::terminal::TerminalGuard;

/// Run until the user quits.
pub async fn run(mut app: App, fps: u16) -> Result<(), AppError> {
    let mut guard = TerminalGuard::new()?;
    let mut events = EventStream::new();

    let mut frames = interval(Duration::from_secs_f64(1.0 / f64::from(fps.max(1))));
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

    info!("Event loop started at {} fps", fps.max(1));

    loop {
        tokio::select! {
            Some(event_result) = events.next() => {
                match event_result {
                    Ok(event) => {
                        trace!("Crossterm event: {:?}", event);
                        if app.handle_event(event) == Flow::Quit {
                            break;
                        }
                    }
                    Err(e) => error!("Event stream error: {}", e),
                }
            }
            _ = frames.tick() => {}
        }

        let now = app.now();
        app.update(now);
        render::draw(guard.stdout(), &app, now)?;
    }

    app.shutdown();
    info!("Event loop finished");
    Ok(())
}
