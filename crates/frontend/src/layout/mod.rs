//! Shared page layout: fragment composition, navigation and page-wide UI.
//!
//! Every static page calls `initLayout` once. The sequence is:
//!
//! ```text
//! path ──▶ PageContext ──▶ load slots (one after another)
//!                               │
//!                               ▼
//!                     bind page config ──▶ rebind listeners
//! ```
//!
//! Navigation is always a full document load; nothing here survives it.

pub mod animations;
pub mod binder;
pub mod browser;
pub mod context;
pub mod dom;
pub mod events;
pub mod global_context;
pub mod listeners;
pub mod loader;
pub mod navigator;
pub mod page_config;
pub mod pages;

#[cfg(test)]
pub(crate) mod testing;

use browser::{BrowserDom, HttpFragments, WebBrowser};
use context::PageContext;
use dom::{Browser, Dom, FragmentSource};
use page_config::PageConfig;

/// Injects the context's layout fragments and applies the page config.
///
/// Slots are loaded sequentially so that the binder only runs once every
/// fragment is in the document.
pub async fn compose_layout<D, F>(dom: &D, fragments: &F, path: &str, config: &PageConfig)
where
    D: Dom,
    F: FragmentSource,
{
    match PageContext::from_path(path) {
        Some(context) => {
            log::debug!("Layout context {:?} for {}", context, path);
            for slot in context.slots() {
                loader::load_component(dom, fragments, slot.fragment, slot.placeholder).await;
            }
        }
        None => log::debug!("No layout context for {}", path),
    }

    binder::bind_page_config(dom, config);
}

/// Browser entry point behind `initLayout`.
pub async fn init_layout(config: PageConfig) {
    let path = WebBrowser.pathname();
    compose_layout(&BrowserDom, &HttpFragments, &path, &config).await;
    events::rebind_event_listeners();
}
