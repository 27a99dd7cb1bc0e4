use super::dom::Dom;
use super::page_config::PageConfig;

pub const HEADER_TITLE: &str = "header-title";
pub const HEADER_ICON: &str = "header-icon";

/// Applies the page config to the freshly injected header and sidebar.
/// Missing elements and unset fields are skipped.
pub fn bind_page_config<D: Dom>(dom: &D, config: &PageConfig) {
    if let (Some(title), Some(element)) = (&config.title, dom.by_id(HEADER_TITLE)) {
        dom.set_text(&element, title);
    }

    if let (Some(icon), Some(element)) = (&config.icon, dom.by_id(HEADER_ICON)) {
        dom.set_class_name(&element, &format!("fa-solid {}", icon));
    }

    if let Some(item) = config.nav_active.as_deref().and_then(|id| dom.by_id(id)) {
        dom.add_class(&item, "active");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::testing::FakeDom;

    fn config() -> PageConfig {
        PageConfig {
            title: Some("Vereadores".to_string()),
            icon: Some("fa-users".to_string()),
            nav_active: Some("nav-vereadores".to_string()),
        }
    }

    #[test]
    fn test_binds_title_icon_and_active_item() {
        let dom = FakeDom::new();
        let title = dom.add("h1", None, Some(HEADER_TITLE), &[]);
        let icon = dom.add("i", None, Some(HEADER_ICON), &["fa-solid", "fa-house"]);
        let item = dom.add("li", None, Some("nav-vereadores"), &["nav-item"]);

        bind_page_config(&dom, &config());

        assert_eq!(dom.text(&title), "Vereadores");
        assert_eq!(dom.class_name(icon), "fa-solid fa-users");
        assert_eq!(dom.class_name(item), "nav-item active");
    }

    #[test]
    fn test_missing_elements_are_skipped() {
        let dom = FakeDom::new();
        bind_page_config(&dom, &config());

        let title = dom.add("h1", None, Some(HEADER_TITLE), &[]);
        dom.set_text(&title, "Painel");
        bind_page_config(&dom, &PageConfig::default());
        assert_eq!(dom.text(&title), "Painel");
    }
}
