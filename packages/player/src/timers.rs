//! The interaction timer bank: named, cancellable delayed inputs.
//!
//! Arming a key that is already armed replaces the earlier timer, so a
//! repeated "reset" or "advance" schedule can never double-fire. Fires
//! are delivered as messages tagged with the session generation captured
//! at arm time; the driver discards fires whose generation is stale.
//! `cancel_all` runs on every state-changing interruption and on
//! teardown.

use std::collections::HashMap;
use std::time::Duration;

use phonics_core::TimerKey;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerFire {
    pub key: TimerKey,
    /// Session generation at arm time.
    pub generation: u64,
}

pub struct TimerBank {
    tx: mpsc::UnboundedSender<TimerFire>,
    armed: HashMap<TimerKey, JoinHandle<()>>,
}

impl TimerBank {
    pub fn new(tx: mpsc::UnboundedSender<TimerFire>) -> Self {
        Self {
            tx,
            armed: HashMap::new(),
        }
    }

    /// Arm `key` to fire after `delay`, replacing any earlier timer with
    /// the same key.
    pub fn schedule(&mut self, key: TimerKey, delay: Duration, generation: u64) {
        self.cancel(key);
        trace!(?key, ?delay, generation, "timer armed");
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(TimerFire { key, generation });
        });
        self.armed.insert(key, handle);
    }

    pub fn cancel(&mut self, key: TimerKey) {
        if let Some(handle) = self.armed.remove(&key) {
            handle.abort();
        }
    }

    pub fn cancel_all(&mut self) {
        for (_, handle) in self.armed.drain() {
            handle.abort();
        }
    }

    /// Number of keys currently armed (fired-but-unreaped handles count
    /// until the next schedule of the same key).
    pub fn armed_len(&self) -> usize {
        self.armed.len()
    }
}

impl Drop for TimerBank {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn fires_after_the_delay_with_its_generation() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut bank = TimerBank::new(tx);
        bank.schedule(TimerKey::Reset, Duration::from_millis(500), 7);
        let fire = rx.recv().await.unwrap();
        assert_eq!(fire.key, TimerKey::Reset);
        assert_eq!(fire.generation, 7);
    }

    #[tokio::test(start_paused = true)]
    async fn rescheduling_replaces_the_earlier_timer() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut bank = TimerBank::new(tx);
        bank.schedule(TimerKey::Advance, Duration::from_millis(150), 1);
        bank.schedule(TimerKey::Advance, Duration::from_millis(150), 2);
        let fire = rx.recv().await.unwrap();
        assert_eq!(fire.generation, 2);
        // The replaced timer never fires.
        tokio::time::sleep(Duration::from_millis(400)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_all_silences_every_key() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut bank = TimerBank::new(tx);
        bank.schedule(TimerKey::Reset, Duration::from_millis(100), 1);
        bank.schedule(TimerKey::Advance, Duration::from_millis(100), 1);
        bank.cancel_all();
        assert_eq!(bank.armed_len(), 0);
        tokio::time::sleep(Duration::from_millis(300)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn distinct_keys_fire_independently() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut bank = TimerBank::new(tx);
        bank.schedule(TimerKey::Completion, Duration::from_millis(100), 1);
        bank.schedule(TimerKey::Reset, Duration::from_millis(200), 1);
        assert_eq!(rx.recv().await.unwrap().key, TimerKey::Completion);
        assert_eq!(rx.recv().await.unwrap().key, TimerKey::Reset);
    }
}
