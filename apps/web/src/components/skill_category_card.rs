use leptos::prelude::*;

use crate::models::SkillCategory;

#[component]
pub fn SkillCategoryCard(category: &'static SkillCategory) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow-md p-6">
            <h3 class="text-xl font-bold font-serif text-dark-charcoal mb-4 border-b-2 border-whitworth-red pb-2">
                {category.title.as_str()}
            </h3>
            <div class="flex flex-wrap gap-2">
                {category
                    .skills
                    .iter()
                    .map(|skill| view! {
                        <span class="bg-gray-200 text-gray-800 text-sm font-semibold px-3 py-1 rounded-full">
                            {skill.as_str()}
                        </span>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
