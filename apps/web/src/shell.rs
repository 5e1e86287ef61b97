use leptos::prelude::*;
use leptos_meta::ServerMetaContext;

use crate::content::ContentStore;
use crate::App;

/// Renders the whole page to an HTML document string.
pub fn render_document() -> String {
    let profile = ContentStore::global().profile();
    let title = format!("{} | {}", profile.name, profile.headline);
    let description = profile.tagline.as_str();

    Owner::new().with(|| {
        // The app's leptos_meta tags register here; the head below is written
        // directly.
        let (meta_context, _) = ServerMetaContext::new();
        provide_context(meta_context);

        view! {
            <!DOCTYPE html>
            <html lang="en">
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <title>{title}</title>
                    <meta name="description" content=description/>
                </head>
                <body>
                    <App/>
                </body>
            </html>
        }
        .to_html()
    })
}
