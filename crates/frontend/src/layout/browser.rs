//! `web_sys` implementations of the layout seams.

use super::dom::{Browser, Dom, FragmentSource};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use std::time::Duration;
use wasm_bindgen::JsCast;
use web_sys::Element;

fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

/// The live document.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDom;

impl Dom for BrowserDom {
    type Node = Element;

    fn by_id(&self, id: &str) -> Option<Element> {
        document()?.get_element_by_id(id)
    }

    fn by_class(&self, class: &str) -> Vec<Element> {
        let Some(document) = document() else {
            return Vec::new();
        };
        match document.query_selector_all(&format!(".{}", class)) {
            Ok(list) => (0..list.length())
                .filter_map(|i| list.item(i))
                .filter_map(|node| node.dyn_into::<Element>().ok())
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    fn find_in(&self, node: &Element, class: &str) -> Option<Element> {
        node.query_selector(&format!(".{}", class)).ok().flatten()
    }

    fn parent(&self, node: &Element) -> Option<Element> {
        node.parent_element()
    }

    fn id(&self, node: &Element) -> Option<String> {
        let id = node.id();
        if id.is_empty() {
            None
        } else {
            Some(id)
        }
    }

    fn tag_name(&self, node: &Element) -> String {
        node.tag_name().to_lowercase()
    }

    fn attr(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn text(&self, node: &Element) -> String {
        node.text_content().unwrap_or_default()
    }

    fn set_text(&self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn set_inner_html(&self, node: &Element, html: &str) {
        node.set_inner_html(html);
    }

    fn set_class_name(&self, node: &Element, class_name: &str) {
        node.set_class_name(class_name);
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn add_class(&self, node: &Element, class: &str) {
        let _ = node.class_list().add_1(class);
    }

    fn remove_class(&self, node: &Element, class: &str) {
        let _ = node.class_list().remove_1(class);
    }
}

/// `window.location` and `setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebBrowser;

impl Browser for WebBrowser {
    fn pathname(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default()
    }

    fn navigate(&self, url: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(url) {
                log::error!("Navigation to {} failed: {:?}", url, e);
            }
        }
    }

    async fn sleep(&self, duration: Duration) {
        TimeoutFuture::new(duration.as_millis() as u32).await;
    }
}

/// Fragments fetched over HTTP from the serving origin.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpFragments;

impl FragmentSource for HttpFragments {
    async fn fetch(&self, path: &str) -> Result<String, String> {
        let response = Request::get(path)
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        if !response.ok() {
            return Err(format!(
                "Componente não encontrado: {} ({})",
                path,
                response.status()
            ));
        }

        response
            .text()
            .await
            .map_err(|e| format!("Failed to read response: {}", e))
    }
}
