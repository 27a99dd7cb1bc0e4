//! Fade-in reveals: staggered on load, or once on first scroll into view.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use super::browser::{BrowserDom, WebBrowser};
use super::dom::{Browser, Dom};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

pub const VISIBLE_CLASS: &str = "visible";
pub const ANIMATE_ON_LOAD: &str = "animate-on-load";
pub const SCROLL_REVEAL_CLASSES: [&str; 2] = ["fade-in", "fade-in-section"];
pub const STAGGER_STEP: Duration = Duration::from_millis(200);
/// Share of the element that must be visible before it is revealed.
pub const SCROLL_THRESHOLD: f64 = 0.1;
pub const SCROLL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Delay of the `index`-th on-load element (0-based).
pub fn stagger_delay(index: usize) -> Duration {
    STAGGER_STEP * (index as u32 + 1)
}

/// Elements waiting to be revealed. Each element is revealed at most once;
/// afterwards it is neither observed nor accepted again.
#[derive(Debug)]
pub struct RevealTracker<N> {
    observed: Vec<N>,
    revealed: Vec<N>,
}

impl<N> Default for RevealTracker<N> {
    fn default() -> Self {
        Self {
            observed: Vec::new(),
            revealed: Vec::new(),
        }
    }
}

impl<N: PartialEq + Clone> RevealTracker<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the element is already observed or revealed.
    pub fn observe(&mut self, node: &N) -> bool {
        if self.observed.contains(node) || self.revealed.contains(node) {
            return false;
        }
        self.observed.push(node.clone());
        true
    }

    /// Handles an intersection entry. Returns `true` when the element must be
    /// revealed and unobserved now.
    pub fn on_intersection(&mut self, node: &N, is_intersecting: bool) -> bool {
        if !is_intersecting {
            return false;
        }
        let Some(position) = self.observed.iter().position(|n| n == node) else {
            return false;
        };
        let node = self.observed.swap_remove(position);
        self.revealed.push(node);
        true
    }

    #[cfg(test)]
    pub fn is_observed(&self, node: &N) -> bool {
        self.observed.contains(node)
    }

    #[cfg(test)]
    pub fn is_revealed(&self, node: &N) -> bool {
        self.revealed.contains(node)
    }
}

/// Reveals on-load elements one after the other.
pub async fn reveal_on_load<D: Dom, B: Browser>(dom: &D, browser: &B, elements: Vec<D::Node>) {
    for (index, element) in elements.iter().enumerate() {
        let wait = if index == 0 {
            stagger_delay(0)
        } else {
            stagger_delay(index) - stagger_delay(index - 1)
        };
        browser.sleep(wait).await;
        dom.add_class(element, VISIBLE_CLASS);
    }
}

struct ScrollReveal {
    observer: IntersectionObserver,
    tracker: Rc<RefCell<RevealTracker<Element>>>,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

thread_local! {
    static SCROLL_REVEAL: RefCell<Option<ScrollReveal>> = const { RefCell::new(None) };
}

fn create_scroll_reveal() -> Option<ScrollReveal> {
    let tracker: Rc<RefCell<RevealTracker<Element>>> = Rc::new(RefCell::new(RevealTracker::new()));
    let tracker_cb = tracker.clone();

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                if tracker_cb
                    .borrow_mut()
                    .on_intersection(&target, entry.is_intersecting())
                {
                    BrowserDom.add_class(&target, VISIBLE_CLASS);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&wasm_bindgen::JsValue::from_f64(SCROLL_THRESHOLD));
    options.set_root_margin(SCROLL_ROOT_MARGIN);

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => Some(ScrollReveal {
            observer,
            tracker,
            _callback: callback,
        }),
        Err(e) => {
            log::error!("IntersectionObserver unavailable: {:?}", e);
            None
        }
    }
}

/// Registers every `.fade-in` / `.fade-in-section` element with the page's
/// single intersection observer. Already known elements are skipped.
pub fn observe_scroll_reveals() {
    let elements: Vec<Element> = SCROLL_REVEAL_CLASSES
        .iter()
        .flat_map(|class| BrowserDom.by_class(class))
        .collect();
    if elements.is_empty() {
        return;
    }

    SCROLL_REVEAL.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_none() {
            *slot = create_scroll_reveal();
        }
        let Some(reveal) = slot.as_ref() else {
            return;
        };
        for element in elements {
            if reveal.tracker.borrow_mut().observe(&element) {
                reveal.observer.observe(&element);
            }
        }
    });
}

/// Starts both kinds of reveal for the current page.
pub fn init_unified_animations() {
    let immediate = BrowserDom.by_class(ANIMATE_ON_LOAD);
    if !immediate.is_empty() {
        wasm_bindgen_futures::spawn_local(async move {
            reveal_on_load(&BrowserDom, &WebBrowser, immediate).await;
        });
    }
    observe_scroll_reveals();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::testing::{FakeBrowser, FakeDom};
    use futures::executor::block_on;

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay(0), Duration::from_millis(200));
        assert_eq!(stagger_delay(2), Duration::from_millis(600));
    }

    #[test]
    fn test_reveals_once() {
        let mut tracker = RevealTracker::new();
        assert!(tracker.observe(&7));

        assert!(!tracker.on_intersection(&7, false));
        assert!(tracker.is_observed(&7));

        assert!(tracker.on_intersection(&7, true));
        assert!(!tracker.is_observed(&7));
        assert!(tracker.is_revealed(&7));

        assert!(!tracker.on_intersection(&7, true));
        assert!(!tracker.observe(&7));
    }

    #[test]
    fn test_unknown_element_is_ignored() {
        let mut tracker: RevealTracker<u32> = RevealTracker::new();
        assert!(!tracker.on_intersection(&1, true));
    }

    #[test]
    fn test_double_observe_is_rejected() {
        let mut tracker = RevealTracker::new();
        assert!(tracker.observe(&"hero"));
        assert!(!tracker.observe(&"hero"));
    }

    #[test]
    fn test_reveal_on_load_is_cascading() {
        let dom = FakeDom::new();
        let first = dom.add("section", None, None, &[ANIMATE_ON_LOAD]);
        let second = dom.add("section", None, None, &[ANIMATE_ON_LOAD]);
        let third = dom.add("section", None, None, &[ANIMATE_ON_LOAD]);
        let browser = FakeBrowser::at("/portal/index.html");

        block_on(reveal_on_load(&dom, &browser, dom.by_class(ANIMATE_ON_LOAD)));

        for node in [first, second, third] {
            assert!(dom.has_class(&node, VISIBLE_CLASS));
        }
        assert_eq!(
            *browser.log.borrow(),
            vec!["sleep 200".to_string(), "sleep 200".to_string(), "sleep 200".to_string()]
        );
    }
}
