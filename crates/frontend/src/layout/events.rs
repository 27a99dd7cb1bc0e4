//! Page-wide click handling.
//!
//! One delegated `click` listener on the document serves navigation links,
//! the profile dropdown and the status dropdowns, including elements that
//! were injected after it was installed.

use super::animations;
use super::browser::BrowserDom;
use super::dom::Dom;
use super::global_context::UiState;
use super::listeners::{DomListener, ListenerRegistry};
use super::navigator::spawn_navigation;
use std::cell::RefCell;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

pub const PROFILE_BTN: &str = "profileBtn";
pub const PROFILE_DROPDOWN: &str = "profileDropdown";
pub const STATUS_DROPDOWN: &str = "status-dropdown";
const STATUS_BADGE_WRAPPER: &str = "status-badge-wrapper";
const STATUS_BADGE: &str = "status-badge";
const DROPDOWN_MENU: &str = "dropdown-menu";
const DROPDOWN_ITEM: &str = "dropdown-item";
const ACTIVE: &str = "active";
const OPEN: &str = "open";

const DOCUMENT_CLICK: &str = "document:click";

thread_local! {
    static UI_STATE: RefCell<UiState> = RefCell::new(UiState::new());
    static LISTENERS: RefCell<ListenerRegistry<DomListener>> =
        RefCell::new(ListenerRegistry::new());
}

/// What a click landed on, collected from the target and its ancestors.
struct ClickPath<N> {
    page: Option<String>,
    on_profile_button: bool,
    in_profile_dropdown: bool,
    badge_of: Option<N>,
    item_of: Option<(N, N)>,
}

fn classify<D: Dom>(dom: &D, target: &D::Node) -> ClickPath<D::Node> {
    let mut path = ClickPath {
        page: None,
        on_profile_button: false,
        in_profile_dropdown: false,
        badge_of: None,
        item_of: None,
    };
    let mut in_badge = false;
    let mut item = None;
    let mut status_seen = false;

    for node in dom.ancestors(target) {
        if path.page.is_none() && dom.tag_name(&node) == "a" {
            path.page = dom.attr(&node, "data-page");
        }

        match dom.id(&node).as_deref() {
            Some(PROFILE_BTN) => path.on_profile_button = true,
            Some(PROFILE_DROPDOWN) => path.in_profile_dropdown = true,
            _ => {}
        }

        if status_seen {
            continue;
        }
        if dom.has_class(&node, STATUS_BADGE_WRAPPER) {
            in_badge = true;
        }
        if item.is_none() && dom.has_class(&node, DROPDOWN_ITEM) {
            item = Some(node.clone());
        }
        if dom.has_class(&node, STATUS_DROPDOWN) {
            status_seen = true;
            if in_badge {
                path.badge_of = Some(node.clone());
            } else if let Some(item) = item.take() {
                path.item_of = Some((node.clone(), item));
            }
        }
    }

    path
}

/// Applies a click to the dropdowns and returns the page to navigate to, if
/// the click was on a navigation link.
pub fn handle_click<D: Dom>(dom: &D, state: &mut UiState, target: &D::Node) -> Option<String> {
    let path = classify(dom, target);
    update_profile(dom, state, &path);
    update_status_dropdowns(dom, state, &path);
    path.page
}

fn update_profile<D: Dom>(dom: &D, state: &mut UiState, path: &ClickPath<D::Node>) {
    let (Some(button), Some(dropdown)) = (dom.by_id(PROFILE_BTN), dom.by_id(PROFILE_DROPDOWN))
    else {
        return;
    };

    // Badge toggles leave the profile dropdown alone
    if path.on_profile_button {
        state.toggle_profile();
    } else if !path.in_profile_dropdown && path.badge_of.is_none() {
        state.close_profile();
    }

    dom.set_class(&dropdown, ACTIVE, state.profile_open);
    dom.set_class(&button, ACTIVE, state.profile_open);
}

fn is_interactive<D: Dom>(dom: &D, dropdown: &D::Node) -> bool {
    dom.find_in(dropdown, STATUS_BADGE_WRAPPER).is_some()
        && dom.find_in(dropdown, DROPDOWN_MENU).is_some()
}

fn select_status<D: Dom>(dom: &D, dropdown: &D::Node, item: &D::Node) {
    let value = dom.attr(item, "data-value").unwrap_or_default();
    let label = dom.text(item);

    let badge = dom
        .find_in(dropdown, STATUS_BADGE_WRAPPER)
        .and_then(|wrapper| dom.find_in(&wrapper, STATUS_BADGE));
    if let Some(badge) = badge {
        if value.is_empty() {
            dom.set_class_name(&badge, STATUS_BADGE);
        } else {
            dom.set_class_name(&badge, &format!("{} {}", STATUS_BADGE, value));
        }
        dom.set_text(&badge, &label.trim().to_uppercase());
    }
    log::info!("Status alterado para: {}", value);
}

fn update_status_dropdowns<D: Dom>(dom: &D, state: &mut UiState, path: &ClickPath<D::Node>) {
    let dropdowns = dom.by_class(STATUS_DROPDOWN);

    if let Some((dropdown, item)) = &path.item_of {
        if is_interactive(dom, dropdown) {
            select_status(dom, dropdown, item);
        }
    }

    let toggled = path
        .badge_of
        .as_ref()
        .filter(|dropdown| is_interactive(dom, dropdown))
        .and_then(|dropdown| dropdowns.iter().position(|d| d == dropdown));
    match toggled {
        Some(index) => state.toggle_status(index),
        // The profile button leaves the status dropdowns alone
        None if path.on_profile_button => {}
        None => state.close_all_except(None),
    }

    for (index, dropdown) in dropdowns.iter().enumerate() {
        dom.set_class(dropdown, OPEN, state.is_status_open(index));
    }
}

fn on_document_click(event: Event) {
    let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return;
    };

    let page = UI_STATE.with(|state| handle_click(&BrowserDom, &mut state.borrow_mut(), &target));
    if let Some(page) = page {
        event.prevent_default();
        spawn_navigation(page);
    }
}

fn install_click_delegate() {
    UI_STATE.with(|state| *state.borrow_mut() = UiState::new());

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    match DomListener::attach(document.into(), "click", on_document_click) {
        Some(listener) => {
            LISTENERS.with(|registry| registry.borrow_mut().bind(DOCUMENT_CLICK, listener))
        }
        None => log::error!("Failed to attach document click listener"),
    }
}

/// Re-establishes UI listeners after layout fragments were injected and
/// starts revealing `.fade-in` elements. Safe to call repeatedly.
pub fn rebind_event_listeners() {
    install_click_delegate();
    animations::observe_scroll_reveals();
}

/// Enables the status dropdowns of the current page.
pub fn init_status_dropdowns() {
    if BrowserDom.by_class(STATUS_DROPDOWN).is_empty() {
        return;
    }
    install_click_delegate();
}
