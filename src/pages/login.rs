use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::Message;
use crate::config::{DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME, REDIRECT_DELAY_MS};
use crate::routes::Route;
use crate::services::ApiClient;
use crate::stores::SessionHandle;
use crate::utils::i18n::t;

/// Field-level check applied before any login call goes out.
fn credentials_present(username: &str, password: &str) -> bool {
    !username.trim().is_empty() && !password.trim().is_empty()
}

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let session = use_context::<SessionHandle>().expect("session store context");
    let navigator = use_navigator().expect("router context");

    let username = use_state(|| DEFAULT_ADMIN_USERNAME.to_string());
    let password = use_state(|| DEFAULT_ADMIN_PASSWORD.to_string());
    let error = use_state(String::new);
    let success = use_state(String::new);
    let loading = use_state(|| false);

    // Scoped-lifetime guards: a login resolving after unmount must not touch
    // state, and a pending redirect must die with the page.
    let alive = use_mut_ref(|| true);
    let redirect_timer = use_mut_ref(|| None::<Timeout>);

    // Mount pre-check: an existing stored session skips the login call and
    // goes straight to the dashboard after the usual delay.
    {
        let session = session.clone();
        let success = success.clone();
        let navigator = navigator.clone();
        let alive = alive.clone();
        let redirect_timer = redirect_timer.clone();

        use_effect_with((), move |_| {
            if session.get().is_some() {
                log::info!("ℹ️ Admin session already stored, redirecting to dashboard");
                success.set(t("already_logged_in").to_string());
                *redirect_timer.borrow_mut() = Some(Timeout::new(REDIRECT_DELAY_MS, move || {
                    navigator.push(&Route::AdminDashboard);
                }));
            }

            move || {
                *alive.borrow_mut() = false;
                redirect_timer.borrow_mut().take();
            }
        });
    }

    // Shared by quick login and manual submit: same call, same outcome
    // handling. Overlap is only prevented by the disabled controls.
    let attempt_login = {
        let session = session.clone();
        let navigator = navigator.clone();
        let error = error.clone();
        let success = success.clone();
        let loading = loading.clone();
        let alive = alive.clone();
        let redirect_timer = redirect_timer.clone();

        Callback::from(move |(username, password): (String, String)| {
            let session = session.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let success = success.clone();
            let loading = loading.clone();
            let alive = alive.clone();
            let redirect_timer = redirect_timer.clone();

            loading.set(true);
            error.set(String::new());
            success.set(String::new());

            wasm_bindgen_futures::spawn_local(async move {
                let result = ApiClient::new().login(&username, &password).await;
                if !*alive.borrow() {
                    log::debug!("Login resolved after page teardown, dropped");
                    return;
                }

                match result {
                    Ok(payload) => {
                        if let Err(e) = session.set(&payload) {
                            log::error!("❌ Failed to persist admin session: {}", e);
                        }
                        success.set(t("login_success").to_string());
                        *redirect_timer.borrow_mut() =
                            Some(Timeout::new(REDIRECT_DELAY_MS, move || {
                                navigator.push(&Route::AdminDashboard);
                            }));
                    }
                    Err(e) => {
                        log::error!("❌ Login failed: {}", e);
                        error.set(e.display_message(t("login_failed")).to_string());
                    }
                }

                // Busy flag clears whatever the outcome
                loading.set(false);
            });
        })
    };

    let on_auto_login = {
        let attempt_login = attempt_login.clone();
        Callback::from(move |_: MouseEvent| {
            log::info!("🚀 Quick login with default admin credentials");
            attempt_login.emit((
                DEFAULT_ADMIN_USERNAME.to_string(),
                DEFAULT_ADMIN_PASSWORD.to_string(),
            ));
        })
    };

    let on_submit = {
        let username = username.clone();
        let password = password.clone();
        let error = error.clone();
        let attempt_login = attempt_login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let user = (*username).clone();
            let pass = (*password).clone();
            if !credentials_present(&user, &pass) {
                error.set(t("fields_required").to_string());
                return;
            }

            log::info!("📝 Manual login as: {}", user);
            attempt_login.emit((user, pass));
        })
    };

    let on_username_input = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            username.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            password.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let busy_label = t("logging_in");

    html! {
        <div class="page login-page">
            <div class="login-card">
                <div class="login-header">
                    <h3>{ t("admin_login") }</h3>
                </div>
                <div class="login-body">
                    if !(*error).is_empty() {
                        <Message variant="danger">{ (*error).clone() }</Message>
                    }
                    if !(*success).is_empty() {
                        <Message variant="success">{ (*success).clone() }</Message>
                    }

                    <button
                        class="btn btn-success btn-block"
                        onclick={on_auto_login}
                        disabled={*loading}
                    >
                        { if *loading { busy_label } else { t("quick_login") } }
                    </button>

                    <hr />
                    <p class="muted centered">{ t("manual_login_hint") }</p>

                    <form onsubmit={on_submit}>
                        <div class="form-group">
                            <label for="username">{ t("username") }</label>
                            <input
                                type="text"
                                id="username"
                                placeholder={t("username_placeholder")}
                                value={(*username).clone()}
                                oninput={on_username_input}
                                required=true
                                disabled={*loading}
                            />
                        </div>

                        <div class="form-group">
                            <label for="password">{ t("password") }</label>
                            <input
                                type="password"
                                id="password"
                                placeholder={t("password_placeholder")}
                                value={(*password).clone()}
                                oninput={on_password_input}
                                required=true
                                disabled={*loading}
                            />
                        </div>

                        <button
                            type="submit"
                            class="btn btn-primary btn-block"
                            disabled={*loading}
                        >
                            { if *loading { busy_label } else { t("manual_login") } }
                        </button>
                    </form>

                    <p class="muted centered small">{ t("default_credentials_hint") }</p>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_credentials_pass_field_validation() {
        assert!(credentials_present(
            DEFAULT_ADMIN_USERNAME,
            DEFAULT_ADMIN_PASSWORD
        ));
    }

    #[test]
    fn empty_username_is_rejected() {
        assert!(!credentials_present("", "admin123"));
    }

    #[test]
    fn empty_password_is_rejected() {
        assert!(!credentials_present("admin", ""));
    }

    #[test]
    fn whitespace_only_fields_are_rejected() {
        assert!(!credentials_present("   ", "admin123"));
    }
}
