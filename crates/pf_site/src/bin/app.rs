use pf_site::app::App;
use tracing::info;

fn main() {
    // install global collector writing to the browser console.
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    info!("Starting portfolio");

    leptos::mount::mount_to_body(App);
}
