use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::browser::{BrowserDom, WebBrowser};
use crate::layout::navigator::navigate_to_page;
use crate::layout::pages::landing_page;
use crate::shared::forms::PasswordVisibility;
use crate::system::auth::{api, storage};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (visibility, set_visibility) = signal(PasswordVisibility::Hidden);
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    // A visit to the login page ends any previous session
    storage::clear_session();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get_untracked();
        let password_val = password.get_untracked();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::login(email_val, password_val).await {
                Ok(response) => {
                    log::info!("Login bem-sucedido para {}", response.user.id);
                    storage::save_access_token(&response.token);
                    storage::save_user(&response.user);

                    let page = landing_page(response.user.is_admin());
                    if navigate_to_page(&BrowserDom, &WebBrowser, page).await.is_none() {
                        set_is_loading.set(false);
                    }
                }
                Err(e) => {
                    log::warn!("Login falhou: {}", e);
                    set_error_message.set(Some(e));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Câmara Municipal"</h1>
                <h2>"Acesso ao sistema"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"E-mail"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="nome@camara.gov.br"
                            value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group password-group">
                        <label for="password">"Senha"</label>
                        <input
                            type=move || visibility.get().input_type()
                            id="password"
                            value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                        <button
                            type="button"
                            class="password-toggle-btn"
                            aria-label="Mostrar senha"
                            on:click=move |_| set_visibility.update(|v| *v = v.toggled())
                        >
                            <i class=move || format!("fa-solid {}", visibility.get().icon())></i>
                        </button>
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Entrando..." } else { "Entrar" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
