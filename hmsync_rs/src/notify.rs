//! Transient notifications ("toasts").
//!
//! The queue is a pure state machine: the caller supplies the clock through
//! [`ToastQueue::tick`], so the browser drives it from a timer and tests drive
//! it with plain [`Duration`]s.
//!
//! Only `max_visible` toasts are on screen at once. Anything pushed beyond
//! that waits in FIFO order and becomes visible as earlier toasts leave. A
//! visible toast auto-dismisses `duration` after it was first shown, so a
//! toast that waited still gets its full time on screen.

use std::collections::VecDeque;
use std::time::Duration;

use tracing::debug;

/// How long a toast stays on screen before auto-dismissing.
pub const TOAST_DURATION: Duration = Duration::from_secs(5);

/// How many toasts are shown at once. Later toasts wait their turn.
pub const TOAST_LIMIT: usize = 1;

/// Identifier handed out by [`Notifier::notify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// A single notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub title: String,
    pub description: String,
    shown_at: Option<Duration>,
}

impl Toast {
    /// Whether the toast is currently on screen (as opposed to waiting).
    pub fn is_visible(&self) -> bool {
        self.shown_at.is_some()
    }
}

/// Anything that can present a title/description pair to the visitor.
pub trait Notifier {
    fn notify(&mut self, title: &str, description: &str) -> ToastId;
}

/// FIFO toast queue with auto-dismiss.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    next_id: u64,
    now: Duration,
    duration: Duration,
    max_visible: usize,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl ToastQueue {
    /// Create an empty queue whose clock starts at `now`.
    pub fn new(now: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            next_id: 1,
            now,
            duration: TOAST_DURATION,
            max_visible: TOAST_LIMIT,
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// At least one toast is always allowed on screen.
    pub fn with_max_visible(mut self, max_visible: usize) -> Self {
        self.max_visible = max_visible.max(1);
        self.promote();
        self
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Toasts currently on screen, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().take_while(|t| t.is_visible())
    }

    /// Toasts waiting for a free slot, oldest first.
    pub fn waiting(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().skip_while(|t| t.is_visible())
    }

    /// Remove a toast, visible or waiting. Returns `false` for unknown ids.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let Some(pos) = self.toasts.iter().position(|t| t.id == id) else {
            return false;
        };
        self.toasts.remove(pos);
        debug!(toast = id.get(), "toast dismissed");
        self.promote();
        true
    }

    /// Advance the clock, expire due toasts and promote waiting ones.
    ///
    /// The clock never runs backwards; an earlier `now` is ignored.
    /// Returns the ids that expired during this tick.
    pub fn tick(&mut self, now: Duration) -> Vec<ToastId> {
        self.now = self.now.max(now);
        let mut expired = Vec::new();

        loop {
            let due = self
                .toasts
                .iter()
                .take_while(|t| t.is_visible())
                .position(|t| t.shown_at.is_some_and(|at| at + self.duration <= self.now));
            let Some(pos) = due else { break };
            if let Some(toast) = self.toasts.remove(pos) {
                debug!(toast = toast.id.get(), "toast expired");
                expired.push(toast.id);
            }
            self.promote();
        }

        expired
    }

    fn promote(&mut self) {
        let now = self.now;
        for toast in self.toasts.iter_mut().take(self.max_visible) {
            if toast.shown_at.is_none() {
                toast.shown_at = Some(now);
            }
        }
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, title: &str, description: &str) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.toasts.push_back(Toast {
            id,
            title: title.to_string(),
            description: description.to_string(),
            shown_at: None,
        });
        self.promote();
        debug!(toast = id.get(), queued = self.toasts.len(), "toast pushed");
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    #[test]
    fn first_toast_is_visible_immediately() {
        let mut queue = ToastQueue::default();
        let id = queue.notify("Saved", "All good");

        let visible: Vec<_> = queue.visible().collect();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, id);
        assert_eq!(visible[0].title, "Saved");
        assert_eq!(visible[0].description, "All good");
    }

    #[test]
    fn later_toasts_queue_instead_of_overwriting() {
        let mut queue = ToastQueue::default();
        let first = queue.notify("one", "");
        let second = queue.notify("two", "");

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.visible().map(|t| t.id).collect::<Vec<_>>(), vec![first]);
        assert_eq!(queue.waiting().map(|t| t.id).collect::<Vec<_>>(), vec![second]);
    }

    #[test]
    fn auto_dismisses_after_duration() {
        let mut queue = ToastQueue::new(secs(10)).with_duration(secs(5));
        let id = queue.notify("hello", "world");

        assert!(queue.tick(secs(14)).is_empty());
        assert_eq!(queue.len(), 1);

        assert_eq!(queue.tick(secs(15)), vec![id]);
        assert!(queue.is_empty());
    }

    #[test]
    fn waiting_toast_gets_full_duration_once_promoted() {
        let mut queue = ToastQueue::new(Duration::ZERO).with_duration(secs(5));
        let first = queue.notify("one", "");
        queue.tick(secs(3));
        let second = queue.notify("two", "");

        assert_eq!(queue.tick(secs(5)), vec![first]);
        assert_eq!(queue.visible().map(|t| t.id).collect::<Vec<_>>(), vec![second]);

        // promoted at t=5, so still on screen at t=9
        assert!(queue.tick(secs(9)).is_empty());
        assert_eq!(queue.tick(secs(10)), vec![second]);
    }

    #[test]
    fn each_promoted_toast_gets_its_own_duration() {
        let mut queue = ToastQueue::default().with_duration(secs(1));
        let ids: Vec<_> = (0..3).map(|i| queue.notify(&format!("t{i}"), "")).collect();

        // each promoted toast is shown at the tick time, so only the first expires
        assert_eq!(queue.tick(secs(60)), vec![ids[0]]);
        assert_eq!(queue.tick(secs(61)), vec![ids[1]]);
        assert_eq!(queue.tick(secs(62)), vec![ids[2]]);
        assert!(queue.is_empty());
    }

    #[test]
    fn explicit_dismiss_promotes_next() {
        let mut queue = ToastQueue::default();
        let first = queue.notify("one", "");
        let second = queue.notify("two", "");

        assert!(queue.dismiss(first));
        assert!(!queue.dismiss(first));
        assert_eq!(queue.visible().map(|t| t.id).collect::<Vec<_>>(), vec![second]);
    }

    #[test]
    fn dismissing_a_waiting_toast_removes_it() {
        let mut queue = ToastQueue::default();
        let first = queue.notify("one", "");
        let second = queue.notify("two", "");

        assert!(queue.dismiss(second));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.visible().next().map(|t| t.id), Some(first));
    }

    #[test]
    fn max_visible_shows_several_at_once() {
        let mut queue = ToastQueue::default().with_max_visible(2);
        queue.notify("one", "");
        queue.notify("two", "");
        queue.notify("three", "");

        assert_eq!(queue.visible().count(), 2);
        assert_eq!(queue.waiting().count(), 1);
    }

    #[test]
    fn zero_max_visible_is_clamped() {
        let mut queue = ToastQueue::default().with_max_visible(0);
        queue.notify("one", "");
        assert_eq!(queue.visible().count(), 1);
    }

    #[test]
    fn clock_does_not_run_backwards() {
        let mut queue = ToastQueue::new(secs(10)).with_duration(secs(2));
        let id = queue.notify("one", "");
        queue.tick(secs(1));
        assert_eq!(queue.tick(secs(12)), vec![id]);
    }

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut queue = ToastQueue::default();
        let a = queue.notify("a", "");
        let b = queue.notify("b", "");
        assert!(b > a);
    }
}
