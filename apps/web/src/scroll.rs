//! Header scroll state.
//!
//! The observer is fed every scroll offset the viewport reports and keeps a
//! single derived state: whether the page has moved past [`SCROLL_THRESHOLD`].

/// Offset above which the page counts as scrolled.
pub const SCROLL_THRESHOLD: f64 = 10.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollState {
    #[default]
    AtTop,
    Scrolled,
}

impl ScrollState {
    /// Non-finite offsets never count as past the threshold.
    pub fn from_offset(offset: f64, threshold: f64) -> Self {
        if offset.is_finite() && offset > threshold {
            ScrollState::Scrolled
        } else {
            ScrollState::AtTop
        }
    }

    pub fn is_scrolled(self) -> bool {
        matches!(self, ScrollState::Scrolled)
    }
}

type Subscriber = Box<dyn FnMut(ScrollState)>;

pub struct ScrollObserver {
    threshold: f64,
    state: ScrollState,
    subscribers: Vec<Subscriber>,
}

impl ScrollObserver {
    pub fn new() -> Self {
        Self::with_threshold(SCROLL_THRESHOLD)
    }

    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold,
            state: ScrollState::AtTop,
            subscribers: Vec::new(),
        }
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn is_scrolled(&self) -> bool {
        self.state.is_scrolled()
    }

    /// Registers a callback invoked on every state change. It is not called
    /// with the current state.
    pub fn subscribe(&mut self, subscriber: impl FnMut(ScrollState) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Recomputes the state for a new offset and notifies subscribers if it
    /// changed.
    pub fn observe(&mut self, offset: f64) -> ScrollState {
        let next = ScrollState::from_offset(offset, self.threshold);
        if next != self.state {
            log::trace!("scroll state {:?} -> {:?} at offset {}", self.state, next, offset);
            self.state = next;
            for subscriber in &mut self.subscribers {
                subscriber(next);
            }
        }
        self.state
    }
}

impl Default for ScrollObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ScrollObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollObserver")
            .field("threshold", &self.threshold)
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_initial_state_at_top() {
        let observer = ScrollObserver::new();
        assert_eq!(observer.state(), ScrollState::AtTop);
        assert!(!observer.is_scrolled());
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let mut observer = ScrollObserver::new();
        assert_eq!(observer.observe(10.0), ScrollState::AtTop);
        assert_eq!(observer.observe(10.5), ScrollState::Scrolled);
    }

    #[test]
    fn test_state_follows_most_recent_offset() {
        let mut observer = ScrollObserver::new();
        let offsets = [0.0, 3.0, 400.0, 11.0, 9.0, 10.0, 2500.0, 0.0, 12.0];
        for offset in offsets {
            let state = observer.observe(offset);
            assert_eq!(state.is_scrolled(), offset > 10.0, "offset {}", offset);
        }
    }

    #[test]
    fn test_zero_fifty_five_sequence() {
        let mut observer = ScrollObserver::new();
        let states: Vec<_> = [0.0, 50.0, 5.0].iter().map(|o| observer.observe(*o)).collect();
        assert_eq!(
            states,
            [ScrollState::AtTop, ScrollState::Scrolled, ScrollState::AtTop]
        );
    }

    #[test]
    fn test_subscribers_notified_only_on_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut observer = ScrollObserver::new();
        let sink = seen.clone();
        observer.subscribe(move |state| sink.borrow_mut().push(state));

        for offset in [0.0, 50.0, 60.0, 60.0, 5.0, 0.0, 30.0] {
            observer.observe(offset);
        }

        assert_eq!(
            *seen.borrow(),
            [ScrollState::Scrolled, ScrollState::AtTop, ScrollState::Scrolled]
        );
    }

    #[test]
    fn test_repeated_offsets_idempotent() {
        let mut observer = ScrollObserver::new();
        observer.observe(42.0);
        let before = observer.state();
        observer.observe(42.0);
        observer.observe(42.0);
        assert_eq!(observer.state(), before);
    }

    #[test]
    fn test_non_finite_offsets_count_as_top() {
        let mut observer = ScrollObserver::new();
        for offset in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            observer.observe(100.0);
            assert_eq!(observer.observe(offset), ScrollState::AtTop, "offset {}", offset);
        }
    }

    #[test]
    fn test_custom_threshold() {
        let mut observer = ScrollObserver::with_threshold(64.0);
        assert_eq!(observer.observe(50.0), ScrollState::AtTop);
        assert_eq!(observer.observe(65.0), ScrollState::Scrolled);
    }
}
