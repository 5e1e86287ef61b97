//! Markup produced by the presentation tree. Needs the `ssr` feature.
#![cfg(feature = "ssr")]

use leptos::prelude::*;

use portfolio_web::components::ProjectCard;
use portfolio_web::content::ContentStore;
use portfolio_web::models::Project;
use portfolio_web::navigation::{provide_navigator, Anchor, NAV_LINKS};
use portfolio_web::pages::{HomePage, ProjectsSection};
use portfolio_web::shell::render_document;

fn project(title: &str, details: Option<&[&str]>) -> Project {
    Project {
        title: title.into(),
        description: format!("{} description", title),
        details: details.map(|d| d.iter().map(|s| s.to_string()).collect()),
        tags: vec!["Rust".into()],
        image_url: format!("https://picsum.photos/seed/{}/600/400", title),
        live_url: "#".into(),
        source_url: "#".into(),
    }
}

fn leak<T>(value: T) -> &'static T {
    Box::leak(Box::new(value))
}

fn render<F, V>(view: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    Owner::new().with(|| {
        provide_navigator();
        view().to_html()
    })
}

#[test]
fn test_project_without_details_has_no_list() {
    let project = leak(project("Solo", None));
    let html = render(|| view! { <ProjectCard project=project /> });
    assert!(!html.contains("<ul"));
    assert!(!html.contains("<li"));
}

#[test]
fn test_project_details_render_in_order() {
    let project = leak(project("Listed", Some(&["x", "y"])));
    let html = render(|| view! { <ProjectCard project=project /> });

    assert_eq!(html.matches("<ul").count(), 1);
    assert_eq!(html.matches("<li").count(), 2);
    let x = html.find(">x<").unwrap();
    let y = html.find(">y<").unwrap();
    assert!(x < y);
}

#[test]
fn test_project_links_open_new_context() {
    let project = leak(project("Linked", None));
    let html = render(|| view! { <ProjectCard project=project /> });
    assert_eq!(html.matches("target=\"_blank\"").count(), 2);
    assert_eq!(html.matches("rel=\"noopener noreferrer\"").count(), 2);
}

#[test]
fn test_projects_render_in_store_order() {
    let projects: &'static [Project] = Vec::leak(vec![
        project("Alpha", None),
        project("Bravo", None),
        project("Charlie", None),
    ]);
    let html = render(|| view! { <ProjectsSection projects=projects /> });

    let positions: Vec<_> = ["Alpha", "Bravo", "Charlie"]
        .iter()
        .map(|title| {
            assert_eq!(html.matches(&format!("{} description", title)).count(), 1);
            html.find(&format!("{} description", title)).unwrap()
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(html.contains("id=\"projects\""));
}

#[test]
fn test_nav_links_point_at_rendered_anchors() {
    let html = render_document();
    for anchor in NAV_LINKS {
        assert!(html.contains(&format!("href=\"#{}\"", anchor.id())), "link {}", anchor);
        assert!(html.contains(&format!("id=\"{}\"", anchor.id())), "section {}", anchor);
    }
}

#[test]
fn test_sections_render_in_page_order() {
    let html = render_document();
    let positions: Vec<_> = Anchor::ALL
        .iter()
        .map(|anchor| html.find(&format!("id=\"{}\"", anchor.id())).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    let footer = html.find("<footer").unwrap();
    assert!(positions.last().unwrap() < &footer);
}

#[test]
fn test_document_includes_bundled_content() {
    let store = ContentStore::global();
    let html = render_document();
    for project in store.projects() {
        assert!(html.contains(project.title.as_str()));
    }
    assert!(html.contains(&store.profile().mailto()));
    assert!(html.contains("All Rights Reserved."));
}

#[test]
fn test_document_head_has_title_and_description() {
    let store = ContentStore::global();
    let html = render_document();
    let head_end = html.find("</head>").unwrap();
    let head = &html[..head_end];

    assert!(head.contains("<title>"));
    assert!(head.contains("name=\"description\""));
    assert!(head.contains(store.profile().tagline.as_str()));
}

#[test]
fn test_sections_register_on_mount_and_leave_on_cleanup() {
    let outer = Owner::new();
    outer.with(|| {
        let navigator = provide_navigator();
        let page = Owner::new();
        page.with(|| {
            let _html = view! { <HomePage content=ContentStore::global() /> }.to_html();
        });

        let expected: Vec<_> = Anchor::ALL.iter().map(|a| a.id().to_string()).collect();
        assert_eq!(navigator.registered_ids(), expected);

        page.cleanup();
        assert!(navigator.registered_ids().is_empty());
    });
}
