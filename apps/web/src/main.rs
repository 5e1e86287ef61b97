use leptos::mount::mount_to_body;
use portfolio_web::app::App;
use portfolio_web::content::ContentStore;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("Failed to initialize logger");

    if let Err(err) = ContentStore::global().validate() {
        log::warn!("bundled content is inconsistent: {}", err);
    }

    mount_to_body(App);
}
