use super::dom::{Dom, FragmentSource};

pub fn error_markup(path: &str) -> String {
    format!(
        "<p style=\"color:red;\">Erro ao carregar componente: {}</p>",
        path
    )
}

/// Fetches the fragment at `path` into the element `placeholder_id`.
///
/// A page may omit a layout slot, so a missing placeholder is a no-op.
/// Failures are logged and shown inside the placeholder, never returned.
pub async fn load_component<D, F>(dom: &D, fragments: &F, path: &str, placeholder_id: &str)
where
    D: Dom,
    F: FragmentSource,
{
    let Some(target) = dom.by_id(placeholder_id) else {
        return;
    };

    match fragments.fetch(path).await {
        Ok(html) => dom.set_inner_html(&target, &html),
        Err(e) => {
            log::error!("Erro ao carregar componente: {}", e);
            dom.set_inner_html(&target, &error_markup(path));
        }
    }
}
