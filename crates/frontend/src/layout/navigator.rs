use super::browser::{BrowserDom, WebBrowser};
use super::context::PageContext;
use super::dom::{Browser, Dom};
use super::pages::{resolve, URL_SCHEME};
use std::time::Duration;

pub const MAIN_CONTENT: &str = "mainContent";
pub const TRANSITIONING_CLASS: &str = "transitioning";
/// Time given to the exit transition before the document is replaced.
pub const TRANSITION_DELAY: Duration = Duration::from_millis(200);

/// Navigates to a logical page. Returns the URL navigated to, or `None` when
/// the name does not resolve.
pub async fn navigate_to_page<D, B>(dom: &D, browser: &B, page: &str) -> Option<String>
where
    D: Dom,
    B: Browser,
{
    let context = PageContext::from_path(&browser.pathname());
    let Some(url) = resolve(page, context, URL_SCHEME) else {
        log::warn!("URL não encontrada para a página: {}", page);
        return None;
    };

    if let Some(main) = dom.by_id(MAIN_CONTENT) {
        dom.add_class(&main, TRANSITIONING_CLASS);
        browser.sleep(TRANSITION_DELAY).await;
    }

    log::debug!("Navigating to {} ({})", page, url);
    browser.navigate(&url);
    Some(url)
}

/// Fire-and-forget navigation from an event handler.
pub fn spawn_navigation(page: String) {
    wasm_bindgen_futures::spawn_local(async move {
        navigate_to_page(&BrowserDom, &WebBrowser, &page).await;
    });
}
