//! Goal Tracker Frontend Entry Point

mod app;
mod components;
mod context;
mod logging;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let logs = logging::init();
    mount_to_body(move || view! { <App logs=logs.clone() /> });
}
