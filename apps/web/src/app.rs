use std::cell::RefCell;

use leptos::ev;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};

use crate::components::{Footer, Header};
use crate::content::ContentStore;
use crate::navigation::{provide_navigator, BrowserViewport, Viewport};
use crate::pages::HomePage;
use crate::scroll::ScrollObserver;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_navigator();

    let content = ContentStore::global();
    let profile = content.profile();
    let scrolled = track_scroll();

    view! {
        <Title text=format!("{} | {}", profile.name, profile.headline) />
        <Meta name="description" content=profile.tagline.as_str() />

        <div class="bg-white text-dark-charcoal">
            <Header scrolled=scrolled name=profile.name.as_str() />
            <HomePage content=content />
            <Footer name=profile.name.as_str() />
        </div>
    }
}

/// Feeds window scroll events into a [`ScrollObserver`] for as long as the
/// app is mounted and exposes its state as a signal.
fn track_scroll() -> ReadSignal<bool> {
    let (scrolled, set_scrolled) = signal(false);

    Effect::new(move |_| {
        let viewport = BrowserViewport::current();
        let mut observer = ScrollObserver::new();
        observer.subscribe(move |state| set_scrolled.set(state.is_scrolled()));
        observer.observe(viewport.scroll_offset());

        let observer = RefCell::new(observer);
        let handle = window_event_listener(ev::scroll, move |_| {
            observer.borrow_mut().observe(viewport.scroll_offset());
        });
        on_cleanup(move || handle.remove());
    });

    scrolled
}
