//! Page context: which part of the site the current document belongs to.

/// Placeholder ids owned by the page HTML.
pub const SIDEBAR_PLACEHOLDER: &str = "sidebar-placeholder";
pub const HEADER_PLACEHOLDER: &str = "header-placeholder";
pub const NAVBAR_PLACEHOLDER: &str = "navbar-placeholder";
pub const FOOTER_PLACEHOLDER: &str = "footer-placeholder";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageContext {
    Admin,
    App,
    Portal,
}

/// A fragment and the placeholder it is injected into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutSlot {
    pub fragment: &'static str,
    pub placeholder: &'static str,
}

impl PageContext {
    #[cfg(test)]
    pub fn all() -> [PageContext; 3] {
        [PageContext::Admin, PageContext::App, PageContext::Portal]
    }

    /// Classifies a URL path. Checked in order admin, app, portal; `None`
    /// means the page gets no shared layout.
    pub fn from_path(path: &str) -> Option<Self> {
        if path.contains("/admin/") {
            Some(PageContext::Admin)
        } else if path.contains("/app/") {
            Some(PageContext::App)
        } else if path.contains("/portal/") {
            Some(PageContext::Portal)
        } else {
            None
        }
    }

    /// Directory of the static site this context lives in.
    pub fn dir(&self) -> &'static str {
        match self {
            PageContext::Admin => "admin",
            PageContext::App => "app",
            PageContext::Portal => "portal",
        }
    }

    /// Layout slots in load order.
    pub fn slots(&self) -> &'static [LayoutSlot] {
        match self {
            PageContext::Admin => &[
                LayoutSlot {
                    fragment: "/components/admin_sidebar.html",
                    placeholder: SIDEBAR_PLACEHOLDER,
                },
                LayoutSlot {
                    fragment: "/components/admin_header.html",
                    placeholder: HEADER_PLACEHOLDER,
                },
            ],
            PageContext::App => &[
                LayoutSlot {
                    fragment: "/components/app_sidebar.html",
                    placeholder: SIDEBAR_PLACEHOLDER,
                },
                LayoutSlot {
                    fragment: "/components/app_header.html",
                    placeholder: HEADER_PLACEHOLDER,
                },
            ],
            PageContext::Portal => &[
                LayoutSlot {
                    fragment: "/components/portal_navbar.html",
                    placeholder: NAVBAR_PLACEHOLDER,
                },
                LayoutSlot {
                    fragment: "/components/portal_footer.html",
                    placeholder: FOOTER_PLACEHOLDER,
                },
            ],
        }
    }
}
