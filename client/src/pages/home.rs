//! Landing page with the pizza and drink menus.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both menus are fetched from the REST API once the page mounts in the
//! browser; the server render shows the loading placeholders.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::drink_menu::DrinkMenu;
use crate::components::pizza_menu::PizzaMenu;
use crate::net::api;

#[component]
pub fn HomePage() -> impl IntoView {
    let pizzas = LocalResource::new(api::fetch_pizzas);
    let drinks = LocalResource::new(api::fetch_drinks);

    view! {
        <div class="home-page">
            <h1>"Notre menu"</h1>
            <Suspense fallback=|| view! { <p class="menu-loading">"Chargement du menu..."</p> }>
                {move || pizzas.get().map(|result| match result {
                    Ok(pizzas) => view! { <PizzaMenu pizzas=pizzas/> }.into_any(),
                    Err(err) => {
                        leptos::logging::error!("HomePage::pizzas error: {err}");
                        view! { <p class="menu-error">"Menu indisponible"</p> }.into_any()
                    }
                })}
            </Suspense>
            <Suspense fallback=|| view! { <p class="menu-loading">"Chargement des boissons..."</p> }>
                {move || drinks.get().map(|result| match result {
                    Ok(drinks) => view! { <DrinkMenu title="Nos boissons" drinks=drinks/> }.into_any(),
                    Err(err) => {
                        leptos::logging::error!("HomePage::drinks error: {err}");
                        view! { <p class="menu-error">"Boissons indisponibles"</p> }.into_any()
                    }
                })}
            </Suspense>
        </div>
    }
}
