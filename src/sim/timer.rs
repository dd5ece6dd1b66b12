//! One-shot game-clock timers with cancel handles
//!
//! The scene polls [`Timers::take_due`] every tick. Timers due at the same
//! instant fire in the order they were scheduled.

use serde::{Deserialize, Serialize};

/// Game time in seconds
pub type GameTime = f64;

/// Handle returned by [`Timers::schedule`], used to cancel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerId(u64);

/// What a timer does when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerKind {
    /// Hide the entry detail overlay
    HideOverlay,
    /// Show the final summary
    ShowSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PendingTimer {
    id: TimerId,
    due: GameTime,
    kind: TimerKind,
}

/// Pending one-shot timers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timers {
    pending: Vec<PendingTimer>,
    next_id: u64,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `kind` to fire once at `due`
    pub fn schedule(&mut self, due: GameTime, kind: TimerKind) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(PendingTimer { id, due, kind });
        id
    }

    /// Cancel a pending timer. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|t| t.id != id);
        self.pending.len() != before
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|t| t.id == id)
    }

    /// Due time of a pending timer
    pub fn due_at(&self, id: TimerId) -> Option<GameTime> {
        self.pending.iter().find(|t| t.id == id).map(|t| t.due)
    }

    /// Remove and return every timer due at or before `now`, earliest first
    pub fn take_due(&mut self, now: GameTime) -> Vec<(TimerId, TimerKind)> {
        let mut fired: Vec<PendingTimer> = Vec::new();
        self.pending.retain(|t| {
            if t.due <= now {
                fired.push(t.clone());
                false
            } else {
                true
            }
        });
        // Ids increase with scheduling order, so they break ties
        fired.sort_by(|a, b| a.due.total_cmp(&b.due).then(a.id.0.cmp(&b.id.0)));
        fired.into_iter().map(|t| (t.id, t.kind)).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_when_due() {
        let mut timers = Timers::new();
        let id = timers.schedule(6.0, TimerKind::HideOverlay);
        assert!(timers.take_due(5.9).is_empty());
        assert_eq!(timers.take_due(6.0), vec![(id, TimerKind::HideOverlay)]);
        assert!(timers.take_due(100.0).is_empty());
        assert!(!timers.is_pending(id));
    }

    #[test]
    fn test_cancelled_timer_never_fires() {
        let mut timers = Timers::new();
        let id = timers.schedule(1.0, TimerKind::HideOverlay);
        assert!(timers.cancel(id));
        assert!(!timers.cancel(id));
        assert!(timers.take_due(10.0).is_empty());
    }

    #[test]
    fn test_fire_order() {
        let mut timers = Timers::new();
        let late = timers.schedule(7.0, TimerKind::ShowSummary);
        let early = timers.schedule(6.0, TimerKind::HideOverlay);
        let tie = timers.schedule(7.0, TimerKind::HideOverlay);
        let fired: Vec<TimerId> = timers.take_due(8.0).into_iter().map(|(id, _)| id).collect();
        assert_eq!(fired, vec![early, late, tie]);
        assert!(timers.is_empty());
    }

    #[test]
    fn test_due_at() {
        let mut timers = Timers::new();
        let id = timers.schedule(2.5, TimerKind::ShowSummary);
        assert_eq!(timers.due_at(id), Some(2.5));
        timers.cancel(id);
        assert_eq!(timers.due_at(id), None);
    }
}
