//! Top navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! The set of links depends on whether a user is signed in. Logging out drops
//! the server session first, then the local identity, then returns home.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::types::AuthenticatedUser;
use crate::state::user::{UserContext, use_user_context};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    Go(&'static str),
    Logout,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub action: NavAction,
}

const HOME: NavItem = NavItem { label: "Home", action: NavAction::Go("/") };

/// Links shown for the given identity, in display order.
pub fn nav_items(user: Option<&AuthenticatedUser>) -> Vec<NavItem> {
    match user {
        Some(_) => vec![
            HOME,
            NavItem { label: "Ajouter une pizza", action: NavAction::Go("/add-pizza") },
            NavItem { label: "Se déconnecter", action: NavAction::Logout },
        ],
        None => vec![
            HOME,
            NavItem { label: "Créer un utilisateur", action: NavAction::Go("/register") },
            NavItem { label: "Se connecter", action: NavAction::Go("/login") },
        ],
    }
}

pub fn greeting(user: &AuthenticatedUser) -> String {
    format!("Hello dear {}", user.username)
}

#[component]
pub fn Navbar() -> impl IntoView {
    let user = use_user_context();
    let navigate = use_navigate();
    let go_home = RwSignal::new(false);

    Effect::new(move || {
        if go_home.get() {
            go_home.set(false);
            navigate("/", NavigateOptions::default());
        }
    });

    let items = move || {
        nav_items(user.authenticated_user().as_ref())
            .into_iter()
            .map(|item| match item.action {
                NavAction::Go(path) => view! {
                    <A href=path attr:class="navbar__item">{item.label}</A>
                }
                .into_any(),
                NavAction::Logout => view! {
                    <button class="navbar__item" on:click=move |_| logout(user, go_home)>
                        {item.label}
                    </button>
                }
                .into_any(),
            })
            .collect_view()
    };

    view! {
        <nav class="navbar">
            <span class="navbar__brand">"Pizzeria"</span>
            {items}
            {move || user.authenticated_user().map(|u| view! {
                <span class="navbar__greeting">{greeting(&u)}</span>
            })}
        </nav>
    }
}

fn logout(user: UserContext, go_home: RwSignal<bool>) {
    leptos::task::spawn_local(async move {
        if let Err(err) = api::logout().await {
            leptos::logging::error!("Navbar::logout error: {err}");
        }
        user.clear_user();
        go_home.set(true);
    });
}
