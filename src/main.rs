#[cfg(target_arch = "wasm32")]
mod api;
#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod state;

// Чистая логика не зависит от браузера, поэтому собирается и тестируется на хосте.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod format;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod models;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod pagination;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod query;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod requests;

#[cfg(target_arch = "wasm32")]
fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    // Пустой main нужен только чтобы `cargo build` на хосте проходил.
}
