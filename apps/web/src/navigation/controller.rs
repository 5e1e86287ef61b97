use super::anchor::Anchor;
use super::registry::AnchorRegistry;
use super::viewport::{SectionHandle, Viewport};

/// Scrolls the viewport to registered sections.
pub struct NavigationController<'a, V: ?Sized, H> {
    viewport: &'a V,
    registry: &'a AnchorRegistry<H>,
}

impl<'a, V, H> NavigationController<'a, V, H>
where
    V: Viewport + ?Sized,
    H: SectionHandle,
{
    pub fn new(viewport: &'a V, registry: &'a AnchorRegistry<H>) -> Self {
        Self { viewport, registry }
    }

    /// Animates the viewport so the section's top edge meets the viewport top.
    /// Unknown or unmounted ids are ignored.
    pub fn scroll_to_section(&self, id: &str) {
        let Some(top) = self.registry.get(id).and_then(SectionHandle::document_top) else {
            log::debug!("no mounted section for anchor `{}`, ignoring", id);
            return;
        };
        log::debug!(
            "scrolling to `{}` ({} -> {})",
            id,
            self.viewport.scroll_offset(),
            top
        );
        self.viewport.smooth_scroll_to(top);
    }

    pub fn scroll_to(&self, anchor: Anchor) {
        self.scroll_to_section(anchor.id())
    }
}
