//! In-memory DOM, browser and fragment source for layout tests.

use super::dom::{Browser, Dom, FragmentSource};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

#[derive(Debug, Clone, Default)]
struct FakeNode {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attrs: HashMap<String, String>,
    text: String,
    html: String,
    parent: Option<usize>,
    detached: bool,
}

type Template = Rc<dyn Fn(&FakeDom, usize)>;

/// Flat arena of elements; a node is its index.
#[derive(Default)]
pub struct FakeDom {
    nodes: RefCell<Vec<FakeNode>>,
    templates: RefCell<HashMap<String, Template>>,
}

impl FakeDom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(
        &self,
        tag: &str,
        parent: Option<usize>,
        id: Option<&str>,
        classes: &[&str],
    ) -> usize {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(FakeNode {
            tag: tag.to_string(),
            id: id.map(str::to_string),
            classes: classes.iter().map(|c| c.to_string()).collect(),
            parent,
            ..Default::default()
        });
        nodes.len() - 1
    }

    pub fn set_attr(&self, node: usize, name: &str, value: &str) {
        self.nodes.borrow_mut()[node]
            .attrs
            .insert(name.to_string(), value.to_string());
    }

    pub fn inner_html(&self, node: usize) -> String {
        self.nodes.borrow()[node].html.clone()
    }

    pub fn class_name(&self, node: usize) -> String {
        self.nodes.borrow()[node].classes.join(" ")
    }

    /// Elements to build whenever exactly `html` is injected somewhere.
    pub fn template(&self, html: &str, build: impl Fn(&FakeDom, usize) + 'static) {
        self.templates
            .borrow_mut()
            .insert(html.to_string(), Rc::new(build));
    }

    fn is_descendant(&self, node: usize, ancestor: usize) -> bool {
        let nodes = self.nodes.borrow();
        let mut current = nodes[node].parent;
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = nodes[parent].parent;
        }
        false
    }

    fn live(&self) -> Vec<usize> {
        let nodes = self.nodes.borrow();
        (0..nodes.len()).filter(|i| !nodes[*i].detached).collect()
    }
}

impl Dom for FakeDom {
    type Node = usize;

    fn by_id(&self, id: &str) -> Option<usize> {
        self.live()
            .into_iter()
            .find(|i| self.nodes.borrow()[*i].id.as_deref() == Some(id))
    }

    fn by_class(&self, class: &str) -> Vec<usize> {
        self.live()
            .into_iter()
            .filter(|i| self.has_class(i, class))
            .collect()
    }

    fn find_in(&self, node: &usize, class: &str) -> Option<usize> {
        self.live()
            .into_iter()
            .find(|i| self.is_descendant(*i, *node) && self.has_class(i, class))
    }

    fn parent(&self, node: &usize) -> Option<usize> {
        self.nodes.borrow()[*node].parent
    }

    fn id(&self, node: &usize) -> Option<String> {
        self.nodes.borrow()[*node].id.clone()
    }

    fn tag_name(&self, node: &usize) -> String {
        self.nodes.borrow()[*node].tag.clone()
    }

    fn attr(&self, node: &usize, name: &str) -> Option<String> {
        self.nodes.borrow()[*node].attrs.get(name).cloned()
    }

    fn text(&self, node: &usize) -> String {
        self.nodes.borrow()[*node].text.clone()
    }

    fn set_text(&self, node: &usize, text: &str) {
        self.nodes.borrow_mut()[*node].text = text.to_string();
    }

    fn set_inner_html(&self, node: &usize, html: &str) {
        let children: Vec<usize> = self
            .live()
            .into_iter()
            .filter(|i| self.is_descendant(*i, *node))
            .collect();
        {
            let mut nodes = self.nodes.borrow_mut();
            for child in children {
                nodes[child].detached = true;
            }
            nodes[*node].html = html.to_string();
        }
        let template = self.templates.borrow().get(html).cloned();
        if let Some(build) = template {
            build(self, *node);
        }
    }

    fn set_class_name(&self, node: &usize, class_name: &str) {
        self.nodes.borrow_mut()[*node].classes =
            class_name.split_whitespace().map(str::to_string).collect();
    }

    fn has_class(&self, node: &usize, class: &str) -> bool {
        self.nodes.borrow()[*node].classes.iter().any(|c| c == class)
    }

    fn add_class(&self, node: &usize, class: &str) {
        if !self.has_class(node, class) {
            self.nodes.borrow_mut()[*node].classes.push(class.to_string());
        }
    }

    fn remove_class(&self, node: &usize, class: &str) {
        self.nodes.borrow_mut()[*node].classes.retain(|c| c != class);
    }
}

/// Records sleeps and navigations in call order.
pub struct FakeBrowser {
    path: String,
    pub log: RefCell<Vec<String>>,
}

impl FakeBrowser {
    pub fn at(path: &str) -> Self {
        Self {
            path: path.to_string(),
            log: RefCell::new(Vec::new()),
        }
    }

    pub fn navigations(&self) -> Vec<String> {
        self.log
            .borrow()
            .iter()
            .filter_map(|entry| entry.strip_prefix("navigate ").map(str::to_string))
            .collect()
    }
}

impl Browser for FakeBrowser {
    fn pathname(&self) -> String {
        self.path.clone()
    }

    fn navigate(&self, url: &str) {
        self.log.borrow_mut().push(format!("navigate {}", url));
    }

    async fn sleep(&self, duration: Duration) {
        self.log
            .borrow_mut()
            .push(format!("sleep {}", duration.as_millis()));
    }
}

/// Serves fixed bodies; unknown paths fail like a 404.
#[derive(Default)]
pub struct FakeFragments {
    bodies: HashMap<String, String>,
    pub requested: RefCell<Vec<String>>,
}

impl FakeFragments {
    pub fn with(mut self, path: &str, body: &str) -> Self {
        self.bodies.insert(path.to_string(), body.to_string());
        self
    }
}

impl FragmentSource for FakeFragments {
    async fn fetch(&self, path: &str) -> Result<String, String> {
        self.requested.borrow_mut().push(path.to_string());
        self.bodies
            .get(path)
            .cloned()
            .ok_or_else(|| format!("Componente não encontrado: {} (404)", path))
    }
}
