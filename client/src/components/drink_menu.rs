//! Drink cards under a section title.
//!
//! DESIGN
//! ======
//! One card per drink: image, title, volume and price. Formatting helpers are
//! kept pure for tests.

#[cfg(test)]
#[path = "drink_menu_test.rs"]
mod drink_menu_test;

use leptos::prelude::*;

use crate::net::types::Drink;

pub fn price_label(price: f64) -> String {
    format!("Prix: {price}")
}

/// `alt` text for a drink image.
pub fn image_alt(drink: &Drink) -> String {
    format!("{} ({})", drink.title, drink.volume)
}

#[component]
pub fn DrinkMenu(#[prop(into)] title: String, drinks: Vec<Drink>) -> impl IntoView {
    view! {
        <section class="drink-menu">
            <h2 class="drink-menu__title">{title}</h2>
            <div class="drink-menu__cards">
                {drinks
                    .into_iter()
                    .map(|drink| {
                        let alt = image_alt(&drink);
                        let price = price_label(drink.price);
                        view! {
                            <div class="drink-card">
                                <img class="drink-card__image" src=drink.image alt=alt/>
                                <h3 class="drink-card__title">{drink.title}</h3>
                                <p class="drink-card__volume">{drink.volume}</p>
                                <p class="drink-card__price">{price}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
