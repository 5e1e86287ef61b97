use leptos::prelude::*;

use crate::navigation::{use_navigator, Anchor, SectionRef};

/// A `<section>` carrying an anchor id and registered for navigation while
/// mounted.
#[component]
pub fn PageSection(
    anchor: Anchor,
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] style: Option<String>,
    children: Children,
) -> impl IntoView {
    let navigator = use_navigator();
    let section_ref = SectionRef::new();
    navigator.register(anchor, section_ref);
    on_cleanup(move || navigator.unregister(anchor));

    view! {
        <section id=anchor.id() node_ref=section_ref class=class style=style>
            {children()}
        </section>
    }
}

/// Shared section heading.
#[component]
pub fn SectionTitle(text: &'static str) -> impl IntoView {
    view! {
        <h2 class="text-3xl md:text-4xl font-bold font-serif text-dark-charcoal text-center mb-12">
            {text}
        </h2>
    }
}
