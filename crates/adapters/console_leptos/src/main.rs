use chainwatch_adapter_console_leptos::App;
use chainwatch_adapter_console_leptos::browser::init_logging;
use leptos::prelude::*;

fn main() {
    init_logging();
    tracing::info!("chainwatch console starting");
    mount_to_body(App);
}
