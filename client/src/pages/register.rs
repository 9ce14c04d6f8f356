//! Account creation page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::HOME_ROUTE;
use crate::net::api::ApiError;
use crate::net::types::PotentialUser;
use crate::state::user::use_user_context;

pub(crate) fn register_error_message(err: &ApiError) -> String {
    format!("RegisterPage::error: {err}")
}

pub(crate) const REGISTER_HEADING: &str = "Ajoutez un utilisateur";
pub(crate) const REGISTER_SUBMIT_LABEL: &str = "Créer le compte";

#[component]
pub fn RegisterPage() -> impl IntoView {
    let user = use_user_context();
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let candidate = PotentialUser::new(username.get_untracked(), password.get_untracked());
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match user.register_user(candidate).await {
                Ok(()) => navigate(HOME_ROUTE, NavigateOptions::default()),
                Err(err) => leptos::logging::error!("{}", register_error_message(&err)),
            }
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h1>{REGISTER_HEADING}</h1>
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
                <button class="auth-button" type="submit">{REGISTER_SUBMIT_LABEL}</button>
            </form>
        </div>
    }
}
