use serde::Deserialize;
use wasm_bindgen::JsValue;

/// Per-page settings passed by the page script to `initLayout`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageConfig {
    #[serde(default)]
    pub title: Option<String>,
    /// Font Awesome icon class, e.g. `fa-users`.
    #[serde(default)]
    pub icon: Option<String>,
    /// Id of the navigation item to mark active.
    #[serde(default)]
    pub nav_active: Option<String>,
}

impl PageConfig {
    /// Reads the config from a JS object. `undefined`, `null` and malformed
    /// values give an empty config.
    pub fn from_js(value: JsValue) -> Self {
        if value.is_undefined() || value.is_null() {
            return Self::default();
        }
        serde_wasm_bindgen::from_value(value).unwrap_or_else(|e| {
            log::warn!("Invalid page config: {}", e);
            Self::default()
        })
    }
}
