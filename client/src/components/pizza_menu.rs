//! Pizza menu table.

use leptos::prelude::*;

use crate::net::types::Pizza;

#[component]
pub fn PizzaMenu(pizzas: Vec<Pizza>) -> impl IntoView {
    view! {
        <table class="pizza-menu">
            <thead>
                <tr>
                    <th>"Pizza"</th>
                    <th>"Description"</th>
                </tr>
            </thead>
            <tbody>
                {pizzas
                    .into_iter()
                    .map(|pizza| view! {
                        <tr class="pizza-menu__row">
                            <td class="pizza-menu__title">{pizza.title}</td>
                            <td class="pizza-menu__content">{pizza.content}</td>
                        </tr>
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}
