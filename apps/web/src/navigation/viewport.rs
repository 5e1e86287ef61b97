use web_sys::{ScrollBehavior, ScrollToOptions, Window};

/// The scrollable page area.
pub trait Viewport {
    /// Current vertical offset from the top of the document.
    fn scroll_offset(&self) -> f64;

    /// Starts an animated scroll towards `offset`. Calling this again before
    /// the animation ends redirects it.
    fn smooth_scroll_to(&self, offset: f64);
}

/// A mounted (or not yet mounted) page section.
pub trait SectionHandle {
    /// Top edge in document coordinates, `None` while the element is absent.
    fn document_top(&self) -> Option<f64>;
}

/// The browser window.
#[derive(Clone, Debug)]
pub struct BrowserViewport {
    window: Window,
}

impl BrowserViewport {
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    /// Only call from code that runs in the browser (event handlers, effects).
    pub fn current() -> Self {
        Self::new(leptos::prelude::window())
    }
}

impl Viewport for BrowserViewport {
    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or_default()
    }

    fn smooth_scroll_to(&self, offset: f64) {
        let options = ScrollToOptions::new();
        options.set_top(offset);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}
