use leptos::html;
use leptos::prelude::*;

use super::anchor::Anchor;
use super::controller::NavigationController;
use super::registry::AnchorRegistry;
use super::viewport::{BrowserViewport, SectionHandle};

pub type SectionRef = NodeRef<html::Section>;

impl SectionHandle for SectionRef {
    fn document_top(&self) -> Option<f64> {
        let element = self.get_untracked()?;
        let scroll_y = window().scroll_y().unwrap_or_default();
        Some(element.get_bounding_client_rect().top() + scroll_y)
    }
}

/// Page-wide handle to the section registry, shared through context.
#[derive(Clone, Copy)]
pub struct Navigator {
    registry: StoredValue<AnchorRegistry<SectionRef>>,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            registry: StoredValue::new(AnchorRegistry::new()),
        }
    }

    pub fn register(&self, anchor: Anchor, section: SectionRef) {
        self.registry.try_update_value(|registry| {
            registry.register(anchor.id(), section);
        });
    }

    pub fn unregister(&self, anchor: Anchor) {
        self.registry.try_update_value(|registry| {
            registry.unregister(anchor.id());
        });
    }

    pub fn registered_ids(&self) -> Vec<String> {
        self.registry
            .try_with_value(|registry| registry.ids().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Browser only: call from event handlers.
    pub fn scroll_to_section(&self, id: &str) {
        let viewport = BrowserViewport::current();
        self.registry.try_with_value(|registry| {
            NavigationController::new(&viewport, registry).scroll_to_section(id)
        });
    }

    pub fn scroll_to(&self, anchor: Anchor) {
        self.scroll_to_section(anchor.id())
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_navigator() -> Navigator {
    let navigator = Navigator::new();
    provide_context(navigator);
    navigator
}

pub fn use_navigator() -> Navigator {
    expect_context::<Navigator>()
}
