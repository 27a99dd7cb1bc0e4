pub mod app;
pub mod layout;
pub mod shared;
pub mod system;

use layout::browser::WebBrowser;
use layout::context::PageContext;
use layout::dom::Browser;
use layout::page_config::PageConfig;
use layout::pages::{resolve, URL_SCHEME};
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsValue;

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    app::mount_login_root();
    shared::forms::init_file_input();
}

/// Composes the shared layout of the current page.
/// Accepts `{ title, icon, navActive }`, all optional.
#[wasm_bindgen(js_name = initLayout)]
pub async fn init_layout(page_config: JsValue) {
    layout::init_layout(PageConfig::from_js(page_config)).await;
}

#[wasm_bindgen(js_name = navigateToPage)]
pub fn navigate_to_page(page: String) {
    layout::navigator::spawn_navigation(page);
}

#[wasm_bindgen(js_name = getPageUrl)]
pub fn get_page_url(page: &str) -> Option<String> {
    resolve(page, PageContext::from_path(&WebBrowser.pathname()), URL_SCHEME)
}

#[wasm_bindgen(js_name = initStatusDropdowns)]
pub fn init_status_dropdowns() {
    layout::events::init_status_dropdowns();
}

#[wasm_bindgen(js_name = initUnifiedAnimations)]
pub fn init_unified_animations() {
    layout::animations::init_unified_animations();
}

#[wasm_bindgen(js_name = togglePassword)]
pub fn toggle_password(input_id: &str) {
    shared::forms::toggle_password(input_id);
}
