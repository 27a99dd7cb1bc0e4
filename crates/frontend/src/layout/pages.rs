//! Logical page names and their URLs.

use super::context::PageContext;

/// How resolved URLs are written. Chosen once for the whole deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlScheme {
    /// `/app/vereadores.html`, for a site served from the domain root.
    Absolute,
    /// `vereadores.html` or `../app/vereadores.html`, for static hosting
    /// under an arbitrary directory.
    Relative,
}

pub const URL_SCHEME: UrlScheme = UrlScheme::Absolute;

pub const DASHBOARD: &str = "dashboard";
pub const DASHBOARD_ADMIN: &str = "dashboard_admin";

/// (name, site directory, file)
const PAGE_MAP: &[(&str, PageContext, &str)] = &[
    (DASHBOARD_ADMIN, PageContext::Admin, "dashboard_admin.html"),
    ("nova-camara", PageContext::Admin, "nova_camara.html"),
    (DASHBOARD, PageContext::App, "dashboard.html"),
    ("cadastro", PageContext::App, "cadastro_de_pautas.html"),
    ("nova_pauta", PageContext::App, "nova_pauta.html"),
    ("editar_pauta", PageContext::App, "editar_pauta.html"),
    ("vereadores", PageContext::App, "vereadores.html"),
    ("editar_vereador", PageContext::App, "editar_vereador.html"),
    ("ordem_do_dia", PageContext::App, "ordem_do_dia.html"),
    ("relatorio", PageContext::App, "relatorio.html"),
    ("perfil", PageContext::App, "perfil_camara.html"),
    ("sessoes", PageContext::App, "nova_sessao.html"),
];

#[cfg(test)]
pub fn page_names() -> impl Iterator<Item = &'static str> {
    PAGE_MAP.iter().map(|(name, _, _)| *name)
}

/// Resolves a logical page name from the given context.
///
/// Under the admin context the generic `dashboard` resolves to the admin
/// dashboard. Returns `None` for unknown names.
pub fn resolve(page: &str, context: Option<PageContext>, scheme: UrlScheme) -> Option<String> {
    let key = if context == Some(PageContext::Admin) && page == DASHBOARD {
        DASHBOARD_ADMIN
    } else {
        page
    };

    let (_, tree, file) = PAGE_MAP.iter().find(|(name, _, _)| *name == key)?;

    let url = match scheme {
        UrlScheme::Absolute => format!("/{}/{}", tree.dir(), file),
        UrlScheme::Relative => match context {
            Some(current) if current == *tree => file.to_string(),
            Some(_) => format!("../{}/{}", tree.dir(), file),
            None => format!("{}/{}", tree.dir(), file),
        },
    };
    Some(url)
}

/// Page the user lands on after login.
pub fn landing_page(is_admin: bool) -> &'static str {
    if is_admin {
        DASHBOARD_ADMIN
    } else {
        DASHBOARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_page_resolves_in_every_context() {
        for scheme in [UrlScheme::Absolute, UrlScheme::Relative] {
            for context in PageContext::all() {
                for name in page_names() {
                    let url = resolve(name, Some(context), scheme);
                    assert!(
                        url.as_deref().is_some_and(|u| !u.is_empty()),
                        "{name} in {context:?} ({scheme:?})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_unknown_page_is_not_found() {
        for context in PageContext::all() {
            assert_eq!(resolve("painel", Some(context), UrlScheme::Absolute), None);
            assert_eq!(resolve("", Some(context), UrlScheme::Relative), None);
        }
        assert_eq!(resolve("painel", None, UrlScheme::Absolute), None);
    }

    #[test]
    fn test_admin_dashboard_alias() {
        let aliased = resolve(DASHBOARD, Some(PageContext::Admin), UrlScheme::Absolute);
        assert_eq!(aliased.as_deref(), Some("/admin/dashboard_admin.html"));
        for context in PageContext::all() {
            assert_eq!(
                resolve(DASHBOARD_ADMIN, Some(context), UrlScheme::Absolute),
                aliased
            );
        }
        assert_eq!(
            resolve(DASHBOARD, Some(PageContext::App), UrlScheme::Absolute).as_deref(),
            Some("/app/dashboard.html")
        );
        assert_eq!(
            resolve(DASHBOARD, Some(PageContext::Portal), UrlScheme::Absolute).as_deref(),
            Some("/app/dashboard.html")
        );
    }

    #[test]
    fn test_relative_scheme() {
        assert_eq!(
            resolve("vereadores", Some(PageContext::App), UrlScheme::Relative).as_deref(),
            Some("vereadores.html")
        );
        assert_eq!(
            resolve("vereadores", Some(PageContext::Admin), UrlScheme::Relative).as_deref(),
            Some("../app/vereadores.html")
        );
        assert_eq!(
            resolve(DASHBOARD, Some(PageContext::Admin), UrlScheme::Relative).as_deref(),
            Some("dashboard_admin.html")
        );
        assert_eq!(
            resolve("nova-camara", None, UrlScheme::Relative).as_deref(),
            Some("admin/nova_camara.html")
        );
    }

    #[test]
    fn test_landing_page() {
        assert_eq!(landing_page(true), DASHBOARD_ADMIN);
        assert_eq!(landing_page(false), DASHBOARD);
    }
}
