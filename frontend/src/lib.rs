pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Starting Employee Manager frontend");

    // window.__EMPLOYEE_MANAGER_ENV (env.js) takes precedence over ./config.json.
    wasm_bindgen_futures::spawn_local(async move {
        config::init().await;
    });

    router::mount_app();
}
