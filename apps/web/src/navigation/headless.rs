//! In-memory viewport with eased scroll animation.
//!
//! Animation advances one frame per [`HeadlessViewport::step`]; every change of
//! offset is delivered to the registered scroll listeners, the same way the
//! browser delivers `scroll` events.

use std::cell::{Cell, RefCell};

use super::viewport::{SectionHandle, Viewport};

/// Fraction of the remaining distance covered per frame.
const EASING: f64 = 0.35;
/// Remaining distance under which the animation snaps to its target.
const SNAP_DISTANCE: f64 = 0.5;
const MAX_FRAMES: usize = 600;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(f64)>;

pub struct HeadlessViewport {
    offset: Cell<f64>,
    target: Cell<Option<f64>>,
    max_offset: f64,
    listeners: RefCell<Vec<(ListenerId, Listener)>>,
    next_listener: Cell<u64>,
}

impl HeadlessViewport {
    /// `max_offset` is the furthest the page can scroll (document height minus
    /// viewport height).
    pub fn new(max_offset: f64) -> Self {
        Self {
            offset: Cell::new(0.0),
            target: Cell::new(None),
            max_offset: max_offset.max(0.0),
            listeners: RefCell::new(Vec::new()),
            next_listener: Cell::new(0),
        }
    }

    /// Listeners must not add or remove listeners from inside the callback.
    pub fn add_scroll_listener(&self, listener: impl FnMut(f64) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener.get());
        self.next_listener.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Box::new(listener)));
        id
    }

    pub fn remove_scroll_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    /// Jumps to `offset` without animation, cancelling any in-flight scroll.
    /// Models the user dragging the scrollbar or using the wheel.
    pub fn scroll_instantly(&self, offset: f64) {
        self.target.set(None);
        self.move_to(self.clamp(offset));
    }

    pub fn is_animating(&self) -> bool {
        self.target.get().is_some()
    }

    /// Advances the animation by one frame. Returns whether it is still
    /// running afterwards.
    pub fn step(&self) -> bool {
        let Some(target) = self.target.get() else {
            return false;
        };
        let remaining = target - self.offset.get();
        if remaining.abs() <= SNAP_DISTANCE {
            self.target.set(None);
            self.move_to(target);
        } else {
            self.move_to(self.offset.get() + remaining * EASING);
        }
        self.is_animating()
    }

    /// Runs the animation to completion and returns the number of frames used.
    pub fn settle(&self) -> usize {
        let mut frames = 0;
        while self.is_animating() && frames < MAX_FRAMES {
            self.step();
            frames += 1;
        }
        frames
    }

    fn clamp(&self, offset: f64) -> f64 {
        if offset.is_nan() {
            return self.offset.get();
        }
        offset.clamp(0.0, self.max_offset)
    }

    fn move_to(&self, offset: f64) {
        if offset == self.offset.get() {
            return;
        }
        self.offset.set(offset);
        for (_, listener) in self.listeners.borrow_mut().iter_mut() {
            listener(offset);
        }
    }
}

impl Viewport for HeadlessViewport {
    fn scroll_offset(&self) -> f64 {
        self.offset.get()
    }

    fn smooth_scroll_to(&self, offset: f64) {
        let target = self.clamp(offset);
        if target == self.offset.get() {
            self.target.set(None);
        } else {
            self.target.set(Some(target));
        }
    }
}

impl std::fmt::Debug for HeadlessViewport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeadlessViewport")
            .field("offset", &self.offset.get())
            .field("target", &self.target.get())
            .field("max_offset", &self.max_offset)
            .finish_non_exhaustive()
    }
}

/// A section laid out at a fixed document offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeadlessSection {
    top: Option<f64>,
}

impl HeadlessSection {
    pub fn mounted(top: f64) -> Self {
        Self { top: Some(top) }
    }

    pub fn unmounted() -> Self {
        Self { top: None }
    }
}

impl SectionHandle for HeadlessSection {
    fn document_top(&self) -> Option<f64> {
        self.top
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_smooth_scroll_is_not_instant() {
        let viewport = HeadlessViewport::new(5000.0);
        viewport.smooth_scroll_to(1200.0);
        assert_eq!(viewport.scroll_offset(), 0.0);
        viewport.step();
        let first = viewport.scroll_offset();
        assert!(first > 0.0 && first < 1200.0);
        assert!(viewport.settle() > 1);
        assert_eq!(viewport.scroll_offset(), 1200.0);
    }

    #[test]
    fn test_target_clamped_to_page() {
        let viewport = HeadlessViewport::new(800.0);
        viewport.smooth_scroll_to(5000.0);
        viewport.settle();
        assert_eq!(viewport.scroll_offset(), 800.0);

        viewport.smooth_scroll_to(-40.0);
        viewport.settle();
        assert_eq!(viewport.scroll_offset(), 0.0);
    }

    #[test]
    fn test_listeners_receive_every_frame() {
        let viewport = HeadlessViewport::new(5000.0);
        let frames = Rc::new(Cell::new(0));
        let counter = frames.clone();
        viewport.add_scroll_listener(move |_| counter.set(counter.get() + 1));
        viewport.smooth_scroll_to(300.0);
        let used = viewport.settle();
        assert_eq!(frames.get(), used);
    }

    #[test]
    fn test_removed_listener_not_called() {
        let viewport = HeadlessViewport::new(5000.0);
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let id = viewport.add_scroll_listener(move |_| counter.set(counter.get() + 1));
        viewport.scroll_instantly(20.0);
        assert!(viewport.remove_scroll_listener(id));
        assert!(!viewport.remove_scroll_listener(id));
        viewport.scroll_instantly(40.0);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_instant_scroll_cancels_animation() {
        let viewport = HeadlessViewport::new(5000.0);
        viewport.smooth_scroll_to(2000.0);
        viewport.step();
        viewport.scroll_instantly(100.0);
        assert!(!viewport.is_animating());
        assert_eq!(viewport.scroll_offset(), 100.0);
    }
}
