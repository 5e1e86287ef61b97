use leptos::prelude::*;

use crate::models::LeadershipItem;

#[component]
pub fn LeadershipCard(item: &'static LeadershipItem) -> impl IntoView {
    view! {
        <div class="bg-white p-6 rounded-lg shadow-md hover:shadow-xl transition-shadow duration-300">
            <div class="flex justify-between items-start">
                <div>
                    <h3 class="text-xl font-bold font-serif text-dark-charcoal">{item.title.as_str()}</h3>
                    <p class="text-md font-semibold text-whitworth-red">{item.organization.as_str()}</p>
                </div>
                <p class="text-sm text-gray-500 font-medium">{item.dates.as_str()}</p>
            </div>
            <ul class="mt-4 list-disc list-inside text-gray-700 space-y-1">
                {item.description.iter().map(|point| view! { <li>{point.as_str()}</li> }).collect_view()}
            </ul>
        </div>
    }
}
