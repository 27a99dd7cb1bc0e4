//! Form helpers shared by the static pages.

use crate::layout::browser::BrowserDom;
use crate::layout::dom::Dom;
use crate::layout::listeners::{DomListener, ListenerRegistry};
use std::cell::RefCell;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

pub const FILE_INPUT: &str = "file-input";
pub const FILE_NAME: &str = "file-name";
pub const NO_FILE_SELECTED: &str = "Nenhum arquivo selecionado.";

thread_local! {
    static FORM_LISTENERS: RefCell<ListenerRegistry<DomListener>> =
        RefCell::new(ListenerRegistry::new());
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordVisibility {
    Hidden,
    Shown,
}

impl PasswordVisibility {
    pub fn from_input_type(input_type: &str) -> Self {
        if input_type == "password" {
            PasswordVisibility::Hidden
        } else {
            PasswordVisibility::Shown
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            PasswordVisibility::Hidden => PasswordVisibility::Shown,
            PasswordVisibility::Shown => PasswordVisibility::Hidden,
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            PasswordVisibility::Hidden => "password",
            PasswordVisibility::Shown => "text",
        }
    }

    /// Icon offering the opposite action.
    pub fn icon(self) -> &'static str {
        match self {
            PasswordVisibility::Hidden => "fa-eye",
            PasswordVisibility::Shown => "fa-eye-slash",
        }
    }
}

/// Flips a password input between hidden and shown, swapping the eye icon of
/// its `.password-group` toggle button. No-op when input or button is missing.
pub fn toggle_password(input_id: &str) {
    let dom = BrowserDom;
    let Some(input) = dom
        .by_id(input_id)
        .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
    else {
        return;
    };
    let Some(button) = input
        .closest(".password-group")
        .ok()
        .flatten()
        .and_then(|group| {
            group
                .query_selector(".password-toggle-btn, .password-toggle")
                .ok()
                .flatten()
        })
    else {
        return;
    };

    let current = PasswordVisibility::from_input_type(&input.type_());
    let next = current.toggled();
    input.set_type(next.input_type());

    if let Some(icon) = button.query_selector("i").ok().flatten() {
        dom.remove_class(&icon, current.icon());
        dom.add_class(&icon, next.icon());
    }
}

pub fn file_label(file_name: Option<&str>) -> String {
    file_name.unwrap_or(NO_FILE_SELECTED).to_string()
}

/// Shows the chosen file name of `#file-input` in `#file-name`.
pub fn init_file_input() {
    let Some(input) = BrowserDom
        .by_id(FILE_INPUT)
        .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
    else {
        return;
    };

    let source = input.clone();
    let listener = DomListener::attach(input.into(), "change", move |_| {
        let name = source.files().and_then(|files| files.get(0)).map(|f| f.name());
        if let Some(label) = BrowserDom.by_id(FILE_NAME) {
            BrowserDom.set_text(&label, &file_label(name.as_deref()));
        }
    });
    if let Some(listener) = listener {
        FORM_LISTENERS.with(|registry| registry.borrow_mut().bind("file-input:change", listener));
    }
}
