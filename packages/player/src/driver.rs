//! The session driver: a single task that owns the state machine, the
//! playback controller and the timer bank, applies user inputs in
//! arrival order, and feeds timer fires and narration completions back
//! into the machine, discarding any delayed effect that no longer
//! belongs to the current generation.

use std::sync::Arc;

use phonics_core::input::session_input_for_key;
use phonics_core::{
    Action, Catalog, Direction, Key, Narration, NarrationKind, SessionEvent, SessionInput,
    SessionMachine, SwipeDirection,
};
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use crate::events::{EventEnvelope, EventStream, PlayerEvent};
use crate::playback::{PlaybackController, PlaybackOutcome, SpeechParams};
use crate::timers::{TimerBank, TimerFire};

enum Command {
    Input(SessionInput),
    SetQuiet(bool),
    Shutdown,
}

#[derive(Debug, Clone, Copy)]
struct NarrationDone {
    kind: NarrationKind,
    generation: u64,
}

/// Client side of a running session. Dropping the handle shuts the
/// driver down: all timers are cancelled and playback stops.
pub struct SessionHandle {
    commands: mpsc::UnboundedSender<Command>,
    events: EventStream,
    catalog: Arc<Catalog>,
    join: JoinHandle<()>,
}

impl SessionHandle {
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn subscribe(&self) -> broadcast::Receiver<EventEnvelope> {
        self.events.subscribe()
    }

    pub fn send(&self, input: SessionInput) {
        let _ = self.commands.send(Command::Input(input));
    }

    pub fn select(&self, index: usize) {
        self.send(SessionInput::Select(index));
    }

    pub fn tap_part(&self, part: usize) {
        self.send(SessionInput::TapPart(part));
    }

    pub fn next(&self) {
        self.send(SessionInput::Advance(Direction::Next));
    }

    pub fn previous(&self) {
        self.send(SessionInput::Advance(Direction::Previous));
    }

    pub fn shuffle(&self) {
        self.send(SessionInput::ShuffleAdvance);
    }

    pub fn flip(&self) {
        self.send(SessionInput::Flip);
    }

    /// Horizontal swipes navigate; vertical swipes are not bound.
    pub fn swipe(&self, direction: SwipeDirection) {
        match direction {
            SwipeDirection::Left => self.next(),
            SwipeDirection::Right => self.previous(),
            SwipeDirection::Up | SwipeDirection::Down => {}
        }
    }

    /// Resolve a key press against this session's catalog.
    pub fn key(&self, key: Key) {
        if let Some(input) = session_input_for_key(key, &self.catalog) {
            self.send(input);
        }
    }

    pub fn set_quiet(&self, quiet: bool) {
        let _ = self.commands.send(Command::SetQuiet(quiet));
    }

    /// Orderly shutdown; waits for teardown to finish.
    pub async fn close(self) {
        let _ = self.commands.send(Command::Shutdown);
        let _ = self.join.await;
    }
}

/// The driver task state. Constructed through [`SessionDriver::spawn`].
pub struct SessionDriver {
    machine: SessionMachine,
    controller: PlaybackController,
    params: SpeechParams,
    bank: TimerBank,
    events: EventStream,
    done_tx: mpsc::UnboundedSender<NarrationDone>,
    /// Bumped whenever timers are cancelled; fires armed under an older
    /// value are stale.
    generation: u64,
}

impl SessionDriver {
    /// Start the driver task. The machine's first item is selected
    /// immediately.
    pub fn spawn(
        machine: SessionMachine,
        controller: PlaybackController,
        mut params: SpeechParams,
    ) -> SessionHandle {
        if params.voice.is_none() {
            params.voice = controller.preferred_voice(&params.language);
        }
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (timer_tx, timer_rx) = mpsc::unbounded_channel();
        let (done_tx, done_rx) = mpsc::unbounded_channel();
        let events = EventStream::new();
        let catalog = Arc::new(machine.catalog().clone());

        let driver = SessionDriver {
            machine,
            controller,
            params,
            bank: TimerBank::new(timer_tx),
            events: events.clone(),
            done_tx,
            generation: 0,
        };

        let join = tokio::spawn(driver.run(cmd_rx, timer_rx, done_rx));

        SessionHandle {
            commands: cmd_tx,
            events,
            catalog,
            join,
        }
    }

    async fn run(
        mut self,
        mut cmd_rx: mpsc::UnboundedReceiver<Command>,
        mut timer_rx: mpsc::UnboundedReceiver<TimerFire>,
        mut done_rx: mpsc::UnboundedReceiver<NarrationDone>,
    ) {
        let actions = self.machine.start();
        self.perform(actions);

        loop {
            tokio::select! {
                cmd = cmd_rx.recv() => match cmd {
                    Some(Command::Input(input)) => self.apply(input),
                    Some(Command::SetQuiet(quiet)) => self.machine.set_quiet(quiet),
                    // An explicit shutdown or a dropped handle both end
                    // the session.
                    Some(Command::Shutdown) | None => break,
                },
                Some(fire) = timer_rx.recv() => {
                    if fire.generation == self.generation {
                        self.apply(SessionInput::TimerFired(fire.key));
                    } else {
                        trace!(key = ?fire.key, "stale timer discarded");
                    }
                },
                Some(done) = done_rx.recv() => {
                    if done.generation == self.controller.current_generation() {
                        self.events
                            .publish(PlayerEvent::PlaybackFinished { kind: done.kind });
                        self.apply(SessionInput::NarrationFinished(done.kind));
                    } else {
                        trace!(kind = ?done.kind, "stale narration completion discarded");
                    }
                },
            }
        }

        debug!("session driver stopping");
        self.bank.cancel_all();
        self.controller.stop();
    }

    fn apply(&mut self, input: SessionInput) {
        let actions = self.machine.handle(input);
        self.perform(actions);
    }

    fn perform(&mut self, actions: Vec<Action>) {
        for action in actions {
            match action {
                Action::CancelTimers => {
                    self.generation += 1;
                    self.bank.cancel_all();
                }
                Action::StopPlayback => self.controller.stop(),
                Action::Narrate(narration) => self.narrate(narration),
                Action::Schedule(key, delay) => {
                    self.bank.schedule(key, delay, self.generation);
                }
                Action::Emit(event) => self.emit(event),
            }
        }
    }

    fn narrate(&mut self, narration: Narration) {
        let kind = narration.kind;
        let handle = self.controller.play(narration, &self.params);
        let generation = handle.generation;
        self.events.publish(PlayerEvent::PlaybackStarted { kind });

        let done_tx = self.done_tx.clone();
        tokio::spawn(async move {
            if handle.finished().await == PlaybackOutcome::Completed {
                let _ = done_tx.send(NarrationDone { kind, generation });
            }
        });
    }

    fn emit(&self, event: SessionEvent) {
        self.events.publish(PlayerEvent::Session(event));
    }
}
