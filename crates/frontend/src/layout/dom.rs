//! Seams between the layout logic and the browser.
//!
//! Layout code is written against these traits; `browser.rs` implements them
//! over `web_sys`, tests implement them in memory.

use std::future::Future;
use std::time::Duration;

/// The subset of DOM access the layout needs.
pub trait Dom {
    type Node: Clone + PartialEq;

    fn by_id(&self, id: &str) -> Option<Self::Node>;
    /// Elements carrying `class`, in document order.
    fn by_class(&self, class: &str) -> Vec<Self::Node>;
    /// First descendant of `node` carrying `class`.
    fn find_in(&self, node: &Self::Node, class: &str) -> Option<Self::Node>;
    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    fn id(&self, node: &Self::Node) -> Option<String>;
    /// Lower-case tag name.
    fn tag_name(&self, node: &Self::Node) -> String;
    fn attr(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn text(&self, node: &Self::Node) -> String;

    fn set_text(&self, node: &Self::Node, text: &str);
    fn set_inner_html(&self, node: &Self::Node, html: &str);
    fn set_class_name(&self, node: &Self::Node, class_name: &str);
    fn has_class(&self, node: &Self::Node, class: &str) -> bool;
    fn add_class(&self, node: &Self::Node, class: &str);
    fn remove_class(&self, node: &Self::Node, class: &str);

    fn set_class(&self, node: &Self::Node, class: &str, on: bool) {
        if on {
            self.add_class(node, class);
        } else {
            self.remove_class(node, class);
        }
    }

    /// `node` followed by its ancestors, innermost first.
    fn ancestors(&self, node: &Self::Node) -> Vec<Self::Node> {
        let mut chain = vec![node.clone()];
        let mut current = node.clone();
        while let Some(parent) = self.parent(&current) {
            chain.push(parent.clone());
            current = parent;
        }
        chain
    }
}

/// Window-level services: location and timers.
pub trait Browser {
    fn pathname(&self) -> String;
    /// Full document navigation.
    fn navigate(&self, url: &str);
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// Where layout fragments come from.
pub trait FragmentSource {
    fn fetch(&self, path: &str) -> impl Future<Output = Result<String, String>>;
}
