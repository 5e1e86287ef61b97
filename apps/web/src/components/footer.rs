use chrono::Datelike;
use leptos::prelude::*;

/// Calendar year in the visitor's local time zone.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

pub fn copyright_line(year: i32, name: &str) -> String {
    format!("\u{a9} {} {}. All Rights Reserved.", year, name)
}

#[component]
pub fn Footer(name: &'static str) -> impl IntoView {
    let year = current_year();

    view! {
        <footer class="bg-white py-6">
            <div class="container mx-auto px-6 text-center text-gray-600">
                <p>{copyright_line(year, name)}</p>
            </div>
        </footer>
    }
}
