//! Outgoing feedback: the event log and the status line.

use rampart_core::enums::SoundCue;
use rampart_core::events::{GameEvent, StatusMessage};

/// Collects events until the next snapshot drains them, and owns the
/// current status message.
#[derive(Debug, Default)]
pub struct Feedback {
    events: Vec<GameEvent>,
    status: Option<StatusMessage>,
}

impl Feedback {
    /// Replace the status line.
    pub fn status(&mut self, text: impl Into<String>, duration_ticks: u32) {
        let text = text.into();
        self.events.push(GameEvent::Status {
            text: text.clone(),
            duration_ticks,
        });
        self.status = Some(StatusMessage {
            text,
            remaining_ticks: duration_ticks,
        });
    }

    pub fn sound(&mut self, cue: SoundCue) {
        self.events.push(GameEvent::Sound { cue });
    }

    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn current_status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Count the status timer down by one tick, dropping the message at zero.
    pub fn tick_status(&mut self) {
        if let Some(status) = &mut self.status {
            status.remaining_ticks = status.remaining_ticks.saturating_sub(1);
            if status.remaining_ticks == 0 {
                self.status = None;
            }
        }
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
