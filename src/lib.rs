#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod bus;
pub mod contact;
pub mod content;
pub mod motion;
pub mod scroll;
pub mod section;
pub mod speech;
pub mod transition;
pub mod view_state;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    use leptos::prelude::document;
    use wasm_bindgen::JsCast;

    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // only fails if a logger is already installed
    let _ = console_log::init_with_level(level);

    let Some(root) = document()
        .get_element_by_id(MOUNT_ID)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        log::error!("mount target #{MOUNT_ID} not found, portfolio not started");
        return;
    };
    leptos::mount::hydrate_from(root, App).forget();
}
