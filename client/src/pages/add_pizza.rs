//! Form for adding a pizza to the menu. Signed-in users only.

#[cfg(test)]
#[path = "add_pizza_test.rs"]
mod add_pizza_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::HOME_ROUTE;
use crate::net::api;
use crate::net::types::{NewPizza, ValidationError};
use crate::state::user::use_user_context;
use crate::util::auth::install_unauth_redirect;

/// Build the request body, rejecting blank fields before any network call.
pub(crate) fn pizza_from_inputs(title: String, content: String) -> Result<NewPizza, ValidationError> {
    let pizza = NewPizza { title, content };
    pizza.validate()?;
    Ok(pizza)
}

pub(crate) const ADD_PIZZA_HEADING: &str = "Ajoutez une pizza";
pub(crate) const ADD_PIZZA_SUBMIT_LABEL: &str = "Ajouter";

#[component]
pub fn AddPizzaPage() -> impl IntoView {
    let user = use_user_context();
    let navigate = use_navigate();
    install_unauth_redirect(user, navigate.clone());

    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let pizza = match pizza_from_inputs(title.get_untracked(), content.get_untracked()) {
            Ok(pizza) => pizza,
            Err(err) => {
                info.set(err.to_string());
                return;
            }
        };
        info.set(String::new());
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::add_pizza(&pizza).await {
                Ok(created) => {
                    leptos::logging::log!("AddPizzaPage::created: {}", created.title);
                    navigate(HOME_ROUTE, NavigateOptions::default());
                }
                Err(err) => {
                    leptos::logging::error!("AddPizzaPage::error: {err}");
                    info.set(err.to_string());
                }
            }
        });
    };

    view! {
        <div class="add-pizza-page">
            <form class="pizza-form" on:submit=on_submit>
                <h1>{ADD_PIZZA_HEADING}</h1>
                <label>
                    "Pizza"
                    <input
                        class="pizza-input"
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Description"
                    <textarea
                        class="pizza-input"
                        prop:value=move || content.get()
                        on:input=move |ev| content.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <button class="pizza-button" type="submit">{ADD_PIZZA_SUBMIT_LABEL}</button>
                <Show when=move || !info.get().is_empty()>
                    <p class="pizza-form__message">{move || info.get()}</p>
                </Show>
            </form>
        </div>
    }
}
