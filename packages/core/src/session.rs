//! The per-screen session state machine.
//!
//! The machine is a pure transition function: feed it a [`SessionInput`]
//! and it mutates its own state and returns the [`Action`]s the host must
//! perform (cancel timers, stop playback, start narration, arm a named
//! timer, publish an event). It never touches a clock, an audio device or
//! a task, so every flow, including the timing-sensitive ones, stays
//! deterministic under test. The async driver in the player crate
//! interprets the actions and feeds timer fires and narration completions
//! back in as inputs.

use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::{AssetRef, Catalog, Item, Part};
use crate::sequencer::ShuffleSequencer;

// ==================== Inputs and actions ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Next,
    Previous,
}

/// Names for the cancellable timers a session arms. Scheduling a key
/// that is already armed replaces the earlier timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerKey {
    /// Debounce before a pending next/previous/shuffle move applies.
    Advance,
    /// Delay before the current item narrates.
    Narrate,
    /// Delay between the last part tap and the completion narration.
    Completion,
    /// Auto-reset that clears completed parts on the same item.
    Reset,
    /// Auto-advance to the next item after completion.
    AutoAdvance,
    /// Delayed image reveal after narration.
    Reveal,
    /// Ends the image hold window.
    Hide,
    /// Clears the visited set once every item has been seen.
    TraySweep,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionInput {
    Select(usize),
    TapPart(usize),
    Advance(Direction),
    ShuffleAdvance,
    Flip,
    TimerFired(TimerKey),
    NarrationFinished(NarrationKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NarrationKind {
    /// The item's primary narration.
    Item,
    /// A single tapped part.
    Part,
    /// The spelled-out breakdown after all parts complete.
    Completion,
}

/// One playback request. The host tries the clip first and falls back to
/// speaking the text; either may be absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Narration {
    pub kind: NarrationKind,
    pub clip: Option<AssetRef>,
    pub text: Option<String>,
}

impl Narration {
    fn for_item(item: &Item) -> Self {
        Self {
            kind: NarrationKind::Item,
            clip: item.clip.clone(),
            text: Some(item.spoken_text().to_string()),
        }
    }

    fn for_part(part: &Part) -> Self {
        Self {
            kind: NarrationKind::Part,
            clip: part.clip.clone(),
            text: Some(part.tts.clone().unwrap_or_else(|| part.text.clone())),
        }
    }

    fn for_completion(item: &Item) -> Self {
        Self {
            kind: NarrationKind::Completion,
            clip: None,
            text: Some(
                item.completion_tts
                    .clone()
                    .unwrap_or_else(|| item.spoken_text().to_string()),
            ),
        }
    }
}

/// Observable session milestones, published for listeners outside the
/// player (progress display, celebration effects).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SessionEvent {
    ItemShown { index: usize },
    PartCompleted { index: usize, part: usize },
    ItemCompleted { index: usize },
    ItemReset { index: usize },
    RevealChanged { index: usize, revealed: bool },
    TrayCleared,
}

/// What the host must do after a transition, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Cancel every armed timer.
    CancelTimers,
    /// Stop any active playback.
    StopPlayback,
    /// Start a narration.
    Narrate(Narration),
    /// Arm (or re-arm) a named timer.
    Schedule(TimerKey, Duration),
    /// Publish a session event.
    Emit(SessionEvent),
}

// ==================== Profile ====================

/// How the revealed flag reacts to the item narration finishing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealBehavior {
    /// Nothing to reveal.
    None,
    /// Reveal after `delay` (zero applies immediately); when `hold` is
    /// set the reveal is hidden again after that long.
    AfterNarration {
        delay: Duration,
        hold: Option<Duration>,
    },
}

/// Per-screen tuning. All delays are calibration, not contract; the
/// distinction that matters is short UI debounce versus multi-second
/// reading pause.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionProfile {
    /// Narrate automatically when an item is selected.
    pub auto_narrate: bool,
    /// Delay before the auto-narration starts.
    pub select_narrate_delay: Duration,
    /// Debounce applied to next/previous/shuffle moves.
    pub advance_debounce: Duration,
    /// Delay between the last part tap and the completion narration.
    pub completion_narrate_delay: Duration,
    /// How long completed parts stay lit before the auto-reset.
    pub reset_delay: Duration,
    /// Move to the next item this long after completion.
    pub auto_advance: Option<Duration>,
    pub reveal: RevealBehavior,
    /// Delay before narration re-triggers on a flip.
    pub flip_narrate_delay: Duration,
    /// Track which items have been visited and sweep the set once all
    /// have (the letters tray).
    pub track_visited: bool,
    /// Delay before the visited set sweeps.
    pub tray_sweep_delay: Duration,
}

impl Default for SessionProfile {
    fn default() -> Self {
        Self {
            auto_narrate: true,
            select_narrate_delay: Duration::from_millis(100),
            advance_debounce: Duration::from_millis(150),
            completion_narrate_delay: Duration::from_millis(500),
            reset_delay: Duration::from_millis(2000),
            auto_advance: None,
            reveal: RevealBehavior::None,
            flip_narrate_delay: Duration::from_millis(300),
            track_visited: false,
            tray_sweep_delay: Duration::from_millis(1000),
        }
    }
}

impl SessionProfile {
    /// The alphabet screen: tap to hear, tray tracks coverage.
    pub fn letters() -> Self {
        Self {
            auto_narrate: false,
            track_visited: true,
            ..Self::default()
        }
    }

    /// A CVC word-family screen: the stem narrates on selection.
    pub fn cvc() -> Self {
        Self::default()
    }

    /// The vocabulary screen: word narrates, image shows, then hides.
    pub fn vocab() -> Self {
        Self {
            reveal: RevealBehavior::AfterNarration {
                delay: Duration::ZERO,
                hold: Some(Duration::from_millis(3000)),
            },
            ..Self::default()
        }
    }

    /// The counting screen.
    pub fn numbers() -> Self {
        Self {
            select_narrate_delay: Duration::ZERO,
            ..Self::default()
        }
    }

    /// The sentences screen: illustration appears a beat after the
    /// sentence is read and stays until the next item.
    pub fn sentences() -> Self {
        Self {
            select_narrate_delay: Duration::ZERO,
            reveal: RevealBehavior::AfterNarration {
                delay: Duration::from_millis(3000),
                hold: None,
            },
            ..Self::default()
        }
    }

    /// The animal breakdown screen: tap every sound chunk, hear the
    /// breakdown, auto-reset and move on.
    pub fn animals() -> Self {
        Self {
            auto_narrate: false,
            auto_advance: Some(Duration::from_millis(4000)),
            ..Self::default()
        }
    }
}

// ==================== State machine ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    /// No item selected yet.
    Idle,
    /// A part-less item is showing.
    ItemSelected,
    /// An item with parts is showing and waiting for taps.
    AwaitingParts,
    /// Every part is confirmed; the completion narration is pending.
    AllPartsComplete,
    /// Completion narrated; the auto-reset timer is running.
    Resetting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingMove {
    Step(Direction),
    Jump(usize),
}

/// The state machine for one learning screen.
pub struct SessionMachine {
    catalog: Catalog,
    profile: SessionProfile,
    /// Quiet mode suppresses auto-narration only.
    quiet: bool,
    phase: Phase,
    current: usize,
    /// Completed part indices of the current item, in tap order.
    completed_parts: Vec<usize>,
    revealed: bool,
    /// Visited item indices (letters tray).
    visited: Vec<usize>,
    /// The single debounced move in flight, if any.
    pending_move: Option<PendingMove>,
    sequencer: ShuffleSequencer,
    rng: ChaCha8Rng,
}

impl SessionMachine {
    pub fn new(catalog: Catalog, profile: SessionProfile) -> Self {
        let seed = rand::thread_rng().gen();
        Self::with_seed(catalog, profile, seed)
    }

    /// Deterministic shuffle order for tests.
    pub fn with_seed(catalog: Catalog, profile: SessionProfile, seed: u64) -> Self {
        let len = catalog.len();
        Self {
            catalog,
            profile,
            quiet: false,
            phase: Phase::Idle,
            current: 0,
            completed_parts: Vec::new(),
            revealed: false,
            visited: Vec::new(),
            pending_move: None,
            sequencer: ShuffleSequencer::new(len),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    // -------------------- Accessors --------------------

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_item(&self) -> &Item {
        &self.catalog.items()[self.current]
    }

    /// Completed part indices in tap order.
    pub fn completed_parts(&self) -> &[usize] {
        &self.completed_parts
    }

    pub fn is_part_completed(&self, part: usize) -> bool {
        self.completed_parts.contains(&part)
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn visited(&self) -> &[usize] {
        &self.visited
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn set_quiet(&mut self, quiet: bool) {
        self.quiet = quiet;
    }

    // -------------------- Transitions --------------------

    /// Select the first item. Call once after construction.
    pub fn start(&mut self) -> Vec<Action> {
        self.select(0)
    }

    pub fn handle(&mut self, input: SessionInput) -> Vec<Action> {
        match input {
            SessionInput::Select(index) => self.select(index),
            SessionInput::TapPart(part) => self.tap_part(part),
            SessionInput::Advance(direction) => self.advance(direction),
            SessionInput::ShuffleAdvance => self.shuffle_advance(),
            SessionInput::Flip => self.flip(),
            SessionInput::TimerFired(key) => self.timer_fired(key),
            SessionInput::NarrationFinished(kind) => self.narration_finished(kind),
        }
    }

    fn select(&mut self, index: usize) -> Vec<Action> {
        if index >= self.catalog.len() {
            return Vec::new();
        }
        let mut actions = vec![Action::CancelTimers, Action::StopPlayback];
        self.pending_move = None;
        self.completed_parts.clear();
        self.revealed = false;
        self.current = index;
        self.phase = if self.current_item().parts.is_empty() {
            Phase::ItemSelected
        } else {
            Phase::AwaitingParts
        };
        actions.push(Action::Emit(SessionEvent::ItemShown { index }));

        if self.profile.track_visited && !self.visited.contains(&index) {
            self.visited.push(index);
            if self.visited.len() == self.catalog.len() {
                actions.push(Action::Schedule(
                    TimerKey::TraySweep,
                    self.profile.tray_sweep_delay,
                ));
            }
        }

        if self.profile.auto_narrate && !self.quiet {
            actions.push(Action::Schedule(
                TimerKey::Narrate,
                self.profile.select_narrate_delay,
            ));
        }
        actions
    }

    fn tap_part(&mut self, part: usize) -> Vec<Action> {
        if matches!(self.phase, Phase::AllPartsComplete | Phase::Resetting) {
            return Vec::new();
        }
        let item = self.current_item();
        if part >= item.parts.len() || self.completed_parts.contains(&part) {
            return Vec::new();
        }

        self.completed_parts.push(part);
        let item = self.current_item();
        let mut actions = vec![
            Action::Narrate(Narration::for_part(&item.parts[part])),
            Action::Emit(SessionEvent::PartCompleted {
                index: self.current,
                part,
            }),
        ];
        if self.completed_parts.len() == item.parts.len() {
            self.phase = Phase::AllPartsComplete;
            self.revealed = true;
            actions.push(Action::Emit(SessionEvent::ItemCompleted {
                index: self.current,
            }));
            actions.push(Action::Emit(SessionEvent::RevealChanged {
                index: self.current,
                revealed: true,
            }));
            actions.push(Action::Schedule(
                TimerKey::Completion,
                self.profile.completion_narrate_delay,
            ));
        }
        actions
    }

    fn advance(&mut self, direction: Direction) -> Vec<Action> {
        self.pending_move = Some(PendingMove::Step(direction));
        vec![
            Action::CancelTimers,
            Action::StopPlayback,
            Action::Schedule(TimerKey::Advance, self.profile.advance_debounce),
        ]
    }

    fn shuffle_advance(&mut self) -> Vec<Action> {
        let target = self.next_shuffled();
        self.pending_move = Some(PendingMove::Jump(target));
        vec![
            Action::CancelTimers,
            Action::StopPlayback,
            Action::Schedule(TimerKey::Advance, self.profile.advance_debounce),
        ]
    }

    fn next_shuffled(&mut self) -> usize {
        if self.sequencer.is_exhausted() {
            self.sequencer.reshuffle(&mut self.rng, Some(self.current));
        }
        self.sequencer.next().unwrap_or(self.current)
    }

    fn flip(&mut self) -> Vec<Action> {
        if self.phase == Phase::Idle {
            return Vec::new();
        }
        self.revealed = !self.revealed;
        vec![
            Action::Emit(SessionEvent::RevealChanged {
                index: self.current,
                revealed: self.revealed,
            }),
            Action::Schedule(TimerKey::Narrate, self.profile.flip_narrate_delay),
        ]
    }

    fn timer_fired(&mut self, key: TimerKey) -> Vec<Action> {
        match key {
            TimerKey::Advance => {
                let target = match self.pending_move.take() {
                    Some(PendingMove::Step(Direction::Next)) => {
                        (self.current + 1) % self.catalog.len()
                    }
                    Some(PendingMove::Step(Direction::Previous)) => {
                        (self.current + self.catalog.len() - 1) % self.catalog.len()
                    }
                    Some(PendingMove::Jump(index)) => index,
                    None => return Vec::new(),
                };
                self.select(target)
            }
            TimerKey::Narrate => {
                vec![Action::Narrate(Narration::for_item(self.current_item()))]
            }
            TimerKey::Completion => {
                if self.phase != Phase::AllPartsComplete {
                    return Vec::new();
                }
                self.phase = Phase::Resetting;
                let mut actions = vec![
                    Action::Narrate(Narration::for_completion(self.current_item())),
                    Action::Schedule(TimerKey::Reset, self.profile.reset_delay),
                ];
                if let Some(delay) = self.profile.auto_advance {
                    actions.push(Action::Schedule(TimerKey::AutoAdvance, delay));
                }
                actions
            }
            TimerKey::Reset => {
                if self.phase != Phase::Resetting {
                    return Vec::new();
                }
                self.completed_parts.clear();
                self.revealed = false;
                self.phase = Phase::AwaitingParts;
                vec![
                    Action::Emit(SessionEvent::ItemReset {
                        index: self.current,
                    }),
                    Action::Emit(SessionEvent::RevealChanged {
                        index: self.current,
                        revealed: false,
                    }),
                ]
            }
            TimerKey::AutoAdvance => {
                let target = (self.current + 1) % self.catalog.len();
                self.select(target)
            }
            TimerKey::Reveal => self.apply_reveal(),
            TimerKey::Hide => {
                if !self.revealed {
                    return Vec::new();
                }
                self.revealed = false;
                vec![Action::Emit(SessionEvent::RevealChanged {
                    index: self.current,
                    revealed: false,
                })]
            }
            TimerKey::TraySweep => {
                self.visited.clear();
                vec![Action::Emit(SessionEvent::TrayCleared)]
            }
        }
    }

    fn narration_finished(&mut self, kind: NarrationKind) -> Vec<Action> {
        if kind != NarrationKind::Item {
            return Vec::new();
        }
        match self.profile.reveal {
            RevealBehavior::None => Vec::new(),
            RevealBehavior::AfterNarration { delay, .. } => {
                if delay.is_zero() {
                    self.apply_reveal()
                } else {
                    vec![Action::Schedule(TimerKey::Reveal, delay)]
                }
            }
        }
    }

    fn apply_reveal(&mut self) -> Vec<Action> {
        if self.revealed {
            return Vec::new();
        }
        self.revealed = true;
        let mut actions = vec![Action::Emit(SessionEvent::RevealChanged {
            index: self.current,
            revealed: true,
        })];
        if let RevealBehavior::AfterNarration {
            hold: Some(hold), ..
        } = self.profile.reveal
        {
            actions.push(Action::Schedule(TimerKey::Hide, hold));
        }
        actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::animals::animals_catalog;
    use crate::catalog::numbers::numbers_catalog;
    use crate::catalog::vocab::vocab_catalog;
    use crate::catalog::{Catalog, Item, Part};

    fn four_part_catalog() -> Catalog {
        let parts = vec![
            Part::new("D"),
            Part::new("U"),
            Part::new("CK"),
            Part::new("S"),
        ];
        Catalog::new(
            "test-parts",
            "Test",
            vec![
                Item::new("ducks", "Ducks")
                    .with_parts(parts)
                    .with_completion_tts("D... U... CK... S... Ducks!"),
                Item::new("cat", "Cat"),
            ],
        )
        .unwrap()
    }

    fn narrations(actions: &[Action]) -> Vec<&Narration> {
        actions
            .iter()
            .filter_map(|a| match a {
                Action::Narrate(n) => Some(n),
                _ => None,
            })
            .collect()
    }

    fn scheduled(actions: &[Action], key: TimerKey) -> bool {
        actions
            .iter()
            .any(|a| matches!(a, Action::Schedule(k, _) if *k == key))
    }

    #[test]
    fn select_cancels_clears_and_announces() {
        let mut machine =
            SessionMachine::with_seed(numbers_catalog(), SessionProfile::numbers(), 3);
        let actions = machine.start();
        assert_eq!(actions[0], Action::CancelTimers);
        assert_eq!(actions[1], Action::StopPlayback);
        assert!(scheduled(&actions, TimerKey::Narrate));
        assert_eq!(machine.phase(), Phase::ItemSelected);
        assert_eq!(machine.current_index(), 0);
    }

    #[test]
    fn quiet_mode_suppresses_auto_narration_only() {
        let mut machine =
            SessionMachine::with_seed(numbers_catalog(), SessionProfile::numbers(), 3);
        machine.set_quiet(true);
        let actions = machine.start();
        assert!(!scheduled(&actions, TimerKey::Narrate));
        assert!(actions
            .iter()
            .any(|a| matches!(a, Action::Emit(SessionEvent::ItemShown { index: 0 }))));
    }

    #[test]
    fn out_of_range_select_is_ignored() {
        let mut machine =
            SessionMachine::with_seed(numbers_catalog(), SessionProfile::numbers(), 3);
        machine.start();
        assert!(machine.handle(SessionInput::Select(99)).is_empty());
        assert_eq!(machine.current_index(), 0);
    }

    #[test]
    fn tap_part_is_idempotent() {
        let mut machine =
            SessionMachine::with_seed(four_part_catalog(), SessionProfile::animals(), 3);
        machine.start();
        let first = machine.handle(SessionInput::TapPart(1));
        assert_eq!(narrations(&first).len(), 1);
        let second = machine.handle(SessionInput::TapPart(1));
        assert!(second.is_empty());
        assert_eq!(machine.completed_parts(), &[1]);
    }

    #[test]
    fn part_narration_uses_the_fallback_chain() {
        let catalog = animals_catalog();
        let mut machine = SessionMachine::with_seed(catalog, SessionProfile::animals(), 3);
        machine.start();
        // Cat's consonant chunk carries a recorded clip.
        let actions = machine.handle(SessionInput::TapPart(0));
        let narration = narrations(&actions)[0];
        assert_eq!(narration.kind, NarrationKind::Part);
        assert!(narration.clip.is_some());
        assert_eq!(narration.text.as_deref(), Some("Cuh"));
    }

    /// The end-to-end ordering property: four parts tapped out of order
    /// register exactly once each, the breakdown narrates once, and the
    /// auto-reset clears parts without moving the item.
    #[test]
    fn out_of_order_taps_complete_once_and_reset() {
        let mut machine =
            SessionMachine::with_seed(four_part_catalog(), SessionProfile::animals(), 3);
        machine.start();

        for part in [2, 0, 1] {
            let actions = machine.handle(SessionInput::TapPart(part));
            assert!(!scheduled(&actions, TimerKey::Completion));
        }
        let actions = machine.handle(SessionInput::TapPart(3));
        assert!(scheduled(&actions, TimerKey::Completion));
        assert_eq!(machine.completed_parts(), &[2, 0, 1, 3]);
        assert_eq!(machine.phase(), Phase::AllPartsComplete);

        // Taps while complete are ignored.
        assert!(machine.handle(SessionInput::TapPart(0)).is_empty());

        // Completion timer: breakdown narrates once, reset is armed.
        let actions = machine.handle(SessionInput::TimerFired(TimerKey::Completion));
        let spoken = narrations(&actions);
        assert_eq!(spoken.len(), 1);
        assert_eq!(spoken[0].text.as_deref(), Some("D... U... CK... S... Ducks!"));
        assert!(scheduled(&actions, TimerKey::Reset));
        assert!(scheduled(&actions, TimerKey::AutoAdvance));

        // A second completion fire (stale) narrates nothing.
        assert!(machine
            .handle(SessionInput::TimerFired(TimerKey::Completion))
            .is_empty());

        // Reset clears parts, item unchanged.
        machine.handle(SessionInput::TimerFired(TimerKey::Reset));
        assert!(machine.completed_parts().is_empty());
        assert_eq!(machine.current_index(), 0);
        assert_eq!(machine.phase(), Phase::AwaitingParts);
    }

    #[test]
    fn rapid_advance_collapses_to_one_pending_move() {
        let mut machine =
            SessionMachine::with_seed(numbers_catalog(), SessionProfile::numbers(), 3);
        machine.start();
        for _ in 0..5 {
            let actions = machine.handle(SessionInput::Advance(Direction::Next));
            // Every call re-arms the same named timer; the host replaces
            // the earlier one.
            assert!(scheduled(&actions, TimerKey::Advance));
        }
        machine.handle(SessionInput::TimerFired(TimerKey::Advance));
        assert_eq!(machine.current_index(), 1);
        // No second move is pending.
        assert!(machine
            .handle(SessionInput::TimerFired(TimerKey::Advance))
            .is_empty());
    }

    #[test]
    fn previous_wraps_around() {
        let mut machine =
            SessionMachine::with_seed(numbers_catalog(), SessionProfile::numbers(), 3);
        machine.start();
        machine.handle(SessionInput::Advance(Direction::Previous));
        machine.handle(SessionInput::TimerFired(TimerKey::Advance));
        assert_eq!(machine.current_index(), 9);
    }

    #[test]
    fn shuffle_advance_never_repeats_across_boundary() {
        let catalog = numbers_catalog();
        let mut machine = SessionMachine::with_seed(catalog, SessionProfile::numbers(), 11);
        machine.start();
        let mut last = machine.current_index();
        for _ in 0..40 {
            machine.handle(SessionInput::ShuffleAdvance);
            machine.handle(SessionInput::TimerFired(TimerKey::Advance));
            let now = machine.current_index();
            assert!(now < 10);
            assert_ne!(now, last, "shuffle repeated an item back-to-back");
            last = now;
        }
    }

    #[test]
    fn single_item_catalog_shuffles_to_itself() {
        let catalog = Catalog::new("one", "One", vec![Item::new("only", "Only")]).unwrap();
        let mut machine = SessionMachine::with_seed(catalog, SessionProfile::vocab(), 3);
        machine.start();
        for _ in 0..3 {
            machine.handle(SessionInput::ShuffleAdvance);
            machine.handle(SessionInput::TimerFired(TimerKey::Advance));
            assert_eq!(machine.current_index(), 0);
        }
    }

    #[test]
    fn vocab_reveals_after_narration_and_hides_after_hold() {
        let mut machine =
            SessionMachine::with_seed(vocab_catalog(None), SessionProfile::vocab(), 3);
        machine.start();
        let actions = machine.handle(SessionInput::NarrationFinished(NarrationKind::Item));
        assert!(machine.is_revealed());
        assert!(scheduled(&actions, TimerKey::Hide));
        machine.handle(SessionInput::TimerFired(TimerKey::Hide));
        assert!(!machine.is_revealed());
    }

    #[test]
    fn sentences_delay_the_reveal() {
        let catalog = crate::catalog::sentences::sentences_catalog(None);
        let mut machine = SessionMachine::with_seed(catalog, SessionProfile::sentences(), 3);
        machine.start();
        let actions = machine.handle(SessionInput::NarrationFinished(NarrationKind::Item));
        assert!(!machine.is_revealed());
        assert!(scheduled(&actions, TimerKey::Reveal));
        machine.handle(SessionInput::TimerFired(TimerKey::Reveal));
        assert!(machine.is_revealed());
    }

    #[test]
    fn part_narration_completion_does_not_reveal() {
        let mut machine =
            SessionMachine::with_seed(vocab_catalog(None), SessionProfile::vocab(), 3);
        machine.start();
        let actions = machine.handle(SessionInput::NarrationFinished(NarrationKind::Part));
        assert!(actions.is_empty());
        assert!(!machine.is_revealed());
    }

    #[test]
    fn advance_cancels_reveal_state() {
        let mut machine =
            SessionMachine::with_seed(vocab_catalog(None), SessionProfile::vocab(), 3);
        machine.start();
        machine.handle(SessionInput::NarrationFinished(NarrationKind::Item));
        assert!(machine.is_revealed());
        machine.handle(SessionInput::Advance(Direction::Next));
        let actions = machine.handle(SessionInput::TimerFired(TimerKey::Advance));
        assert!(!machine.is_revealed());
        assert_eq!(actions[0], Action::CancelTimers);
        assert_eq!(actions[1], Action::StopPlayback);
    }

    #[test]
    fn flip_toggles_and_renarrates() {
        let mut machine =
            SessionMachine::with_seed(vocab_catalog(None), SessionProfile::vocab(), 3);
        machine.start();
        let actions = machine.handle(SessionInput::Flip);
        assert!(machine.is_revealed());
        assert!(scheduled(&actions, TimerKey::Narrate));
        machine.handle(SessionInput::Flip);
        assert!(!machine.is_revealed());
    }

    #[test]
    fn letters_tray_sweeps_after_full_coverage() {
        let catalog = Catalog::new(
            "mini",
            "Mini",
            vec![
                Item::new("a", "Aa"),
                Item::new("b", "Bb"),
                Item::new("c", "Cc"),
            ],
        )
        .unwrap();
        let mut machine = SessionMachine::with_seed(catalog, SessionProfile::letters(), 3);
        machine.start();
        assert_eq!(machine.visited(), &[0]);
        machine.handle(SessionInput::Select(1));
        let actions = machine.handle(SessionInput::Select(2));
        assert!(scheduled(&actions, TimerKey::TraySweep));
        machine.handle(SessionInput::TimerFired(TimerKey::TraySweep));
        assert!(machine.visited().is_empty());
        // The current item is untouched by the sweep.
        assert_eq!(machine.current_index(), 2);
    }

    #[test]
    fn completion_timer_ignored_if_parts_were_reset_by_reselect() {
        let mut machine =
            SessionMachine::with_seed(four_part_catalog(), SessionProfile::animals(), 3);
        machine.start();
        for part in 0..4 {
            machine.handle(SessionInput::TapPart(part));
        }
        // Re-selecting the item clears completion before the timer fires;
        // the (now stale) completion fire must narrate nothing.
        machine.handle(SessionInput::Select(0));
        assert!(machine
            .handle(SessionInput::TimerFired(TimerKey::Completion))
            .is_empty());
    }
}
