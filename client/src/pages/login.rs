//! Login page with a username/password form.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::HOME_ROUTE;
use crate::net::api::ApiError;
use crate::net::types::PotentialUser;
use crate::state::user::use_user_context;

pub(crate) fn login_error_message(err: &ApiError) -> String {
    format!("LoginPage::error: {err}")
}

pub(crate) const LOGIN_HEADING: &str = "Se connecter";
pub(crate) const LOGIN_SUBMIT_LABEL: &str = "S'authentifier";

#[component]
pub fn LoginPage() -> impl IntoView {
    let user = use_user_context();
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let candidate = PotentialUser::new(username.get_untracked(), password.get_untracked());
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match user.login_user(candidate).await {
                Ok(()) => navigate(HOME_ROUTE, NavigateOptions::default()),
                Err(err) => leptos::logging::error!("{}", login_error_message(&err)),
            }
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h1>{LOGIN_HEADING}</h1>
                <label>
                    "Username"
                    <input
                        class="auth-input"
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        class="auth-input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button class="auth-button" type="submit">{LOGIN_SUBMIT_LABEL}</button>
            </form>
        </div>
    }
}
