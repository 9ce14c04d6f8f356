//! Pizza and drink catalogue.
//!
//! Seeded with the house menu at startup and kept in memory; pizzas added
//! through the API receive monotonically increasing ids.

use wire::{Drink, NewPizza, Pizza};

#[derive(Debug, Clone)]
pub struct Menu {
    pizzas: Vec<Pizza>,
    drinks: Vec<Drink>,
    next_pizza_id: u32,
}

impl Menu {
    /// Empty catalogue.
    #[must_use]
    pub fn new() -> Self {
        Self { pizzas: Vec::new(), drinks: Vec::new(), next_pizza_id: 1 }
    }

    /// Catalogue pre-filled with the house pizzas and drinks.
    #[must_use]
    pub fn seeded() -> Self {
        let mut menu = Self::new();
        for (title, content) in HOUSE_PIZZAS {
            menu.add_pizza(NewPizza { title: (*title).to_owned(), content: (*content).to_owned() });
        }
        menu.drinks = HOUSE_DRINKS
            .iter()
            .zip(1..)
            .map(|((title, image, volume, price), id)| Drink {
                id,
                title: (*title).to_owned(),
                image: (*image).to_owned(),
                volume: (*volume).to_owned(),
                price: *price,
            })
            .collect();
        menu
    }

    #[must_use]
    pub fn pizzas(&self) -> &[Pizza] {
        &self.pizzas
    }

    #[must_use]
    pub fn drinks(&self) -> &[Drink] {
        &self.drinks
    }

    /// Append a pizza and return it with its assigned id.
    pub fn add_pizza(&mut self, new: NewPizza) -> Pizza {
        let pizza = Pizza { id: self.next_pizza_id, title: new.title, content: new.content };
        self.next_pizza_id += 1;
        self.pizzas.push(pizza.clone());
        pizza
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}

const HOUSE_PIZZAS: &[(&str, &str)] = &[
    ("4 fromages", "Gruyère, Sérac, Appenzel, Gorgonzola, Tomates"),
    ("Vegan", "Tomates, Courgettes, Oignons, Aubergines, Poivrons"),
    ("Vegetarian", "Mozarella, Tomates, Oignons, Poivrons, Champignons, Olives"),
    ("Alpage", "Gruyère, Mozarella, Lardons, Tomates"),
    ("Diable", "Tomates, Mozarella, Chorizo piquant, Jalapenos"),
];

const HOUSE_DRINKS: &[(&str, &str, &str, f64)] = &[
    ("Coca-Cola", "/images/coke.jpg", "Bouteille 33cl", 2.5),
    ("Pepsi", "/images/pepsi.jpg", "Bouteille 33cl", 2.5),
    ("Eau Minérale", "/images/water.jpg", "Bouteille 50cl", 1.5),
    ("Bière artisanale", "/images/beer.jpg", "Bouteille 33cl", 4.0),
];

#[cfg(test)]
#[path = "menu_test.rs"]
mod tests;
