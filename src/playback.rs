//! Timed, cancelable playback of a precomputed trace.
//!
//! The engine has no notion of time. A [`Player`] walks a finished
//! [`SimulationResult`] on a tokio task, waiting one interval before each
//! step, and emits one [`PlaybackEvent`] per step followed by a final
//! [`PlaybackEvent::Finished`].
//!
//! Starting a new playback cancels the one in flight. The old task is
//! aborted and its stream ends; its remaining steps are dropped, never
//! queued behind the new playback.

use crate::config::PlaybackConfig;
use crate::core::{DfaState, TraceStep};
use crate::engine::SimulationResult;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

/// Something the display layer should render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// Step `index` of the trace is now showing
    Step { index: usize, step: TraceStep },

    /// Every step has been shown
    Finished { final_state: DfaState, accepted: bool },
}

/// Receiving end of one playback.
///
/// Yields `None` once the playback has finished or was cancelled.
pub struct PlaybackStream {
    rx: mpsc::UnboundedReceiver<PlaybackEvent>,
}

impl PlaybackStream {
    pub async fn next(&mut self) -> Option<PlaybackEvent> {
        self.rx.recv().await
    }

    /// Drain the stream until it ends.
    pub async fn collect(mut self) -> Vec<PlaybackEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.next().await {
            events.push(event);
        }
        events
    }
}

/// Drives at most one playback at a time.
///
/// Must be used from within a tokio runtime.
pub struct Player {
    config: PlaybackConfig,
    current: Option<JoinHandle<()>>,
}

impl Player {
    pub fn new(config: PlaybackConfig) -> Self {
        Self {
            config,
            current: None,
        }
    }

    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    /// Start playing `result`, cancelling any playback in flight.
    pub fn play(&mut self, result: SimulationResult) -> PlaybackStream {
        self.cancel();

        let (tx, rx) = mpsc::unbounded_channel();
        let interval = self.config.interval();

        self.current = Some(tokio::spawn(async move {
            for step in result.trace.iter() {
                tokio::time::sleep(interval).await;
                trace!(index = step.index, character = %step.character, to = %step.to, "step");
                let event = PlaybackEvent::Step {
                    index: step.index,
                    step: *step,
                };
                if tx.send(event).is_err() {
                    return;
                }
            }
            let _ = tx.send(PlaybackEvent::Finished {
                final_state: result.final_state,
                accepted: result.accepted,
            });
        }));

        PlaybackStream { rx }
    }

    /// Abort the playback in flight, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.current.take() {
            if !handle.is_finished() {
                debug!("cancelling in-flight playback");
            }
            handle.abort();
        }
    }

    pub fn is_playing(&self) -> bool {
        self.current.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for Player {
    fn drop(&mut self) {
        self.cancel();
    }
}
