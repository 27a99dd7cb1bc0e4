use crate::system::pages::login::LoginPage;
use wasm_bindgen::JsCast;

pub const LOGIN_ROOT: &str = "login-root";

/// Mounts the login page into `#login-root` on pages that have one.
pub fn mount_login_root() {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(LOGIN_ROOT))
        .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        return;
    };

    log::debug!("Mounting login page");
    leptos::mount::mount_to(root, LoginPage).forget();
}
