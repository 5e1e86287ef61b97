use leptos::prelude::*;

use crate::models::Project;

#[component]
pub fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow-lg overflow-hidden transform hover:-translate-y-2 transition-transform duration-300 group flex flex-col">
            <img src=project.image_url.as_str() alt=project.title.as_str() class="w-full h-48 object-cover" />

            <div class="p-6 flex flex-col flex-grow">
                <h3 class="text-xl font-bold font-serif text-dark-charcoal mb-2">
                    {project.title.as_str()}
                </h3>
                <p class="text-gray-600 mb-4">{project.description.as_str()}</p>

                {project.details.as_ref().map(|details| view! {
                    <ul class="list-disc list-inside text-gray-600 mb-4 text-sm space-y-1">
                        {details.iter().map(|detail| view! { <li>{detail.as_str()}</li> }).collect_view()}
                    </ul>
                })}

                // Tags
                <div class="mb-4 mt-auto">
                    {project
                        .tags
                        .iter()
                        .map(|tag| view! {
                            <span class="inline-block bg-gray-200 rounded-full px-3 py-1 text-sm font-semibold text-gray-700 mr-2 mb-2">
                                {tag.as_str()}
                            </span>
                        })
                        .collect_view()}
                </div>

                // Outbound links
                <div class="pt-4 border-t border-gray-200 flex justify-between">
                    <a
                        href=project.live_url.as_str()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-whitworth-red font-semibold hover:underline"
                    >
                        "Live Demo"
                    </a>
                    <a
                        href=project.source_url.as_str()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-gray-600 font-semibold hover:underline"
                    >
                        "Source Code"
                    </a>
                </div>
            </div>
        </div>
    }
}
