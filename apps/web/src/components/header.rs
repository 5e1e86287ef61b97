use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::navigation::{use_navigator, Anchor, NAV_LINKS};

const HEADER_BASE: &str = "sticky top-0 z-50 transition-all duration-300";

/// Header styling for the given scroll state.
pub fn header_class(scrolled: bool) -> String {
    if scrolled {
        format!("{} bg-white/80 backdrop-blur-md shadow-md", HEADER_BASE)
    } else {
        format!("{} bg-transparent", HEADER_BASE)
    }
}

#[component]
pub fn Header(
    /// Whether the page has scrolled past the header threshold
    #[prop(into)]
    scrolled: Signal<bool>,
    name: &'static str,
) -> impl IntoView {
    let navigator = use_navigator();

    view! {
        <header class=move || header_class(scrolled.get())>
            <nav class="container mx-auto px-6 py-4 flex justify-between items-center">
                // Brand returns to the hero
                <a
                    href="#"
                    on:click=move |ev: MouseEvent| {
                        ev.prevent_default();
                        navigator.scroll_to(Anchor::Hero);
                    }
                    class="text-2xl font-bold font-serif text-whitworth-red hover:opacity-80 transition-opacity"
                >
                    {name}
                </a>

                <div class="hidden md:flex items-center space-x-8">
                    {NAV_LINKS
                        .into_iter()
                        .map(|anchor| view! { <NavLink anchor=anchor /> })
                        .collect_view()}
                </div>
            </nav>
        </header>
    }
}

#[component]
fn NavLink(anchor: Anchor) -> impl IntoView {
    let navigator = use_navigator();

    view! {
        <a
            href=anchor.href()
            on:click=move |ev: MouseEvent| {
                ev.prevent_default();
                navigator.scroll_to(anchor);
            }
            class="text-dark-charcoal font-semibold hover:text-whitworth-red transition-colors"
        >
            {anchor.label()}
        </a>
    }
}
