use leptos::prelude::*;

use crate::components::{LeadershipCard, PageSection, ProjectCard, SectionTitle, SkillCategoryCard};
use crate::content::ContentStore;
use crate::models::{LeadershipItem, Profile, Project, SkillCategory};
use crate::navigation::{use_navigator, Anchor};

/// Every anchored section of the portfolio, in page order.
#[component]
pub fn HomePage(content: &'static ContentStore) -> impl IntoView {
    let profile = content.profile();

    view! {
        <main>
            <HeroSection profile=profile />
            <AboutSection profile=profile />
            <SkillsSection skills=content.skills() />
            <ProjectsSection projects=content.projects() />
            <LeadershipSection items=content.leadership() />
            <ContactSection profile=profile />
        </main>
    }
}

// -- Hero -------------------------------------------------------------------

#[component]
pub fn HeroSection(profile: &'static Profile) -> impl IntoView {
    let navigator = use_navigator();

    view! {
        <PageSection
            anchor=Anchor::Hero
            class="relative h-screen flex items-center justify-center text-center text-white bg-cover bg-center"
            style=format!("background-image: url('{}')", profile.hero_image_url)
        >
            <div class="absolute inset-0 bg-dark-charcoal opacity-60"></div>
            <div class="relative z-10 px-4">
                <h1 class="text-4xl md:text-6xl font-bold font-serif mb-4 leading-tight">
                    {profile.headline.as_str()}
                </h1>
                <p class="text-lg md:text-xl max-w-3xl mx-auto mb-8">
                    {profile.tagline.as_str()}
                </p>
                <button
                    on:click=move |_| navigator.scroll_to(Anchor::Projects)
                    class="bg-whitworth-red text-white font-bold py-3 px-8 rounded-full hover:bg-opacity-90 transform hover:scale-105 transition-all duration-300"
                >
                    "View My Work"
                </button>
            </div>
        </PageSection>
    }
}

// -- About ------------------------------------------------------------------

#[component]
pub fn AboutSection(profile: &'static Profile) -> impl IntoView {
    view! {
        <PageSection anchor=Anchor::About class="py-20 bg-light-gray">
            <div class="container mx-auto px-6">
                <SectionTitle text="About Me" />
                <div class="grid md:grid-cols-3 gap-10 items-center">
                    <div class="md:col-span-1 flex justify-center">
                        <img
                            src=profile.avatar_url.as_str()
                            alt=profile.name.as_str()
                            class="rounded-full w-64 h-64 object-cover shadow-lg"
                        />
                    </div>
                    <div class="md:col-span-2 text-lg text-gray-700 space-y-4">
                        {profile.about.iter().map(|paragraph| view! { <p>{paragraph.as_str()}</p> }).collect_view()}
                    </div>
                </div>
            </div>
        </PageSection>
    }
}

// -- Skills -----------------------------------------------------------------

#[component]
pub fn SkillsSection(skills: &'static [SkillCategory]) -> impl IntoView {
    view! {
        <PageSection anchor=Anchor::Skills class="py-20 bg-white">
            <div class="container mx-auto px-6">
                <SectionTitle text="Core Competencies" />
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-2 gap-8">
                    {skills.iter().map(|category| view! { <SkillCategoryCard category=category /> }).collect_view()}
                </div>
            </div>
        </PageSection>
    }
}

// -- Projects ---------------------------------------------------------------

#[component]
pub fn ProjectsSection(projects: &'static [Project]) -> impl IntoView {
    view! {
        <PageSection anchor=Anchor::Projects class="py-20 bg-light-gray">
            <div class="container mx-auto px-6">
                <SectionTitle text="Featured Projects" />
                <div class="grid md:grid-cols-1 lg:grid-cols-3 gap-8">
                    {projects.iter().map(|project| view! { <ProjectCard project=project /> }).collect_view()}
                </div>
            </div>
        </PageSection>
    }
}

// -- Leadership -------------------------------------------------------------

#[component]
pub fn LeadershipSection(items: &'static [LeadershipItem]) -> impl IntoView {
    view! {
        <PageSection anchor=Anchor::Leadership class="py-20 bg-white">
            <div class="container mx-auto px-6">
                <SectionTitle text="Leadership & Involvement" />
                <div class="max-w-4xl mx-auto space-y-8">
                    {items.iter().map(|item| view! { <LeadershipCard item=item /> }).collect_view()}
                </div>
            </div>
        </PageSection>
    }
}

// -- Contact ----------------------------------------------------------------

const GITHUB_ICON: &str = "M12 2C6.477 2 2 6.477 2 12c0 4.418 2.865 8.168 6.839 9.49.5.092.682-.217.682-.482 0-.237-.009-.868-.014-1.703-2.782.605-3.369-1.343-3.369-1.343-.454-1.158-1.11-1.466-1.11-1.466-.908-.62.069-.608.069-.608 1.003.07 1.531 1.032 1.531 1.032.892 1.53 2.341 1.088 2.91.832.092-.647.35-1.088.636-1.338-2.22-.253-4.555-1.113-4.555-4.951 0-1.093.39-1.988 1.031-2.688-.103-.253-.446-1.272.098-2.65 0 0 .84-.27 2.75 1.026A9.564 9.564 0 0112 6.844c.85.004 1.705.115 2.504.337 1.909-1.296 2.747-1.027 2.747-1.027.546 1.379.203 2.398.1 2.651.64.7 1.03 1.595 1.03 2.688 0 3.848-2.338 4.695-4.566 4.942.359.308.678.92.678 1.852 0 1.338-.012 2.419-.012 2.747 0 .268.18.58.688.482A10.001 10.001 0 0022 12c0-5.523-4.477-10-10-10z";
const LINKEDIN_ICON: &str = "M19 0h-14c-2.761 0-5 2.239-5 5v14c0 2.761 2.239 5 5 5h14c2.762 0 5-2.239 5-5v-14c0-2.761-2.238-5-5-5zm-11 19h-3v-11h3v11zm-1.5-12.268c-.966 0-1.75-.79-1.75-1.764s.784-1.764 1.75-1.764 1.75.79 1.75 1.764-.783 1.764-1.75 1.764zm13.5 12.268h-3v-5.604c0-3.368-4-3.113-4 0v5.604h-3v-11h3v1.765c1.396-2.586 7-2.777 7 2.476v6.759z";

#[component]
pub fn ContactSection(profile: &'static Profile) -> impl IntoView {
    view! {
        <PageSection anchor=Anchor::Contact class="py-20 bg-dark-charcoal text-white">
            <div class="container mx-auto px-6 text-center">
                <h2 class="text-3xl md:text-4xl font-bold font-serif mb-4">"Let's Connect"</h2>
                <p class="text-lg text-gray-300 max-w-2xl mx-auto mb-8">
                    {profile.contact_blurb.as_str()}
                </p>
                <div class="flex justify-center items-center space-x-6">
                    <a
                        href=profile.mailto()
                        class="text-whitworth-red bg-white font-bold py-3 px-8 rounded-full hover:bg-gray-200 transform hover:scale-105 transition-all duration-300"
                    >
                        {profile.email.as_str()}
                    </a>
                </div>
                <div class="flex justify-center mt-8 space-x-6">
                    <ProfileLink href=profile.github_url.as_str() label="GitHub Profile" icon_path=GITHUB_ICON even_odd=true />
                    <ProfileLink href=profile.linkedin_url.as_str() label="LinkedIn Profile" icon_path=LINKEDIN_ICON />
                </div>
            </div>
        </PageSection>
    }
}

/// External profile link, opened in a new browsing context.
#[component]
fn ProfileLink(
    href: &'static str,
    label: &'static str,
    icon_path: &'static str,
    #[prop(optional)] even_odd: bool,
) -> impl IntoView {
    let fill_rule = even_odd.then_some("evenodd");

    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            class="text-gray-300 hover:text-white transition-colors"
            aria-label=label
        >
            <svg class="w-8 h-8" fill="currentColor" viewBox="0 0 24 24" aria-hidden="true">
                <path fill-rule=fill_rule clip-rule=fill_rule d=icon_path />
            </svg>
        </a>
    }
}
