//! In-page navigation: section anchors, the registry sections join on mount,
//! and the controller that scrolls the viewport to them.

mod anchor;
mod controller;
mod headless;
mod navigator;
mod registry;
mod viewport;

pub use anchor::{Anchor, UnknownAnchor, NAV_LINKS};
pub use controller::NavigationController;
pub use headless::{HeadlessSection, HeadlessViewport, ListenerId};
pub use navigator::{provide_navigator, use_navigator, Navigator, SectionRef};
pub use registry::AnchorRegistry;
pub use viewport::{BrowserViewport, SectionHandle, Viewport};
