//! Wire types shared with the server.

pub use wire::{AuthenticatedUser, Drink, NewPizza, Pizza, PotentialUser, ValidationError};
