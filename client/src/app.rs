//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::pages::{add_pizza::AddPizzaPage, home::HomePage, login::LoginPage, register::RegisterPage};
use crate::state::session_store::default_store;
use crate::state::user::UserContext;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="fr">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the user context and sets up client-side routing. The stored
/// session is read after hydration so server and browser render the same
/// first frame.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let user = UserContext::new(default_store());
    provide_context(user);
    Effect::new(move || user.restore());

    view! {
        <Stylesheet id="leptos" href="/pkg/pizzeria.css"/>
        <Title text="Pizzeria"/>

        <Router>
            <Navbar/>
            <main>
                <Routes fallback=|| "Page introuvable.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("add-pizza") view=AddPizzaPage/>
                </Routes>
            </main>
        </Router>
    }
}
