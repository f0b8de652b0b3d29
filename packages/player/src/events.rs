//! The player event stream: session milestones and playback lifecycle,
//! published on a broadcast channel for listeners outside the player
//! (progress displays, celebration effects, analytics hooks).

use chrono::{DateTime, Utc};
use phonics_core::{NarrationKind, SessionEvent};
use serde::Serialize;
use tokio::sync::broadcast;
use tracing::debug;

const CHANNEL_CAPACITY: usize = 256;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "payload")]
pub enum PlayerEvent {
    #[serde(rename = "SESSION")]
    Session(SessionEvent),

    #[serde(rename = "PLAYBACK_STARTED")]
    PlaybackStarted { kind: NarrationKind },

    #[serde(rename = "PLAYBACK_FINISHED")]
    PlaybackFinished { kind: NarrationKind },
}

impl PlayerEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            PlayerEvent::Session(event) => match event {
                SessionEvent::ItemShown { .. } => "ITEM_SHOWN",
                SessionEvent::PartCompleted { .. } => "PART_COMPLETED",
                SessionEvent::ItemCompleted { .. } => "ITEM_COMPLETED",
                SessionEvent::ItemReset { .. } => "ITEM_RESET",
                SessionEvent::RevealChanged { .. } => "REVEAL_CHANGED",
                SessionEvent::TrayCleared => "TRAY_CLEARED",
            },
            PlayerEvent::PlaybackStarted { .. } => "PLAYBACK_STARTED",
            PlayerEvent::PlaybackFinished { .. } => "PLAYBACK_FINISHED",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EventEnvelope {
    pub event: PlayerEvent,
    pub created_at: DateTime<Utc>,
}

impl EventEnvelope {
    fn new(event: PlayerEvent) -> Self {
        Self {
            event,
            created_at: Utc::now(),
        }
    }
}

/// A single broadcast stream per session.
#[derive(Debug, Clone)]
pub struct EventStream {
    sender: broadcast::Sender<EventEnvelope>,
}

impl EventStream {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    pub fn publish(&self, event: PlayerEvent) {
        let envelope = EventEnvelope::new(event);
        if self.sender.send(envelope.clone()).is_err() {
            debug!(event_type = envelope.event.event_type(), "no event listeners");
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<EventEnvelope> {
        self.sender.subscribe()
    }

    pub fn listener_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventStream {
    fn default() -> Self {
        Self::new()
    }
}
