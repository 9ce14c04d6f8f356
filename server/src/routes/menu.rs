//! Menu routes: pizza and drink catalogue.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::Json;
use wire::{Drink, NewPizza, Pizza};

use super::auths::AuthUser;
use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/pizzas`
pub async fn list_pizzas(State(state): State<AppState>) -> Json<Vec<Pizza>> {
    Json(state.menu.read().await.pizzas().to_vec())
}

/// `POST /api/pizzas`: add a pizza; requires a session.
pub async fn create_pizza(
    State(state): State<AppState>,
    auth: AuthUser,
    body: Result<Json<NewPizza>, JsonRejection>,
) -> Result<(StatusCode, Json<Pizza>), ApiError> {
    let Json(new_pizza) = body.map_err(|e| ApiError::Validation(e.body_text()))?;
    new_pizza.validate()?;

    let pizza = state.menu.write().await.add_pizza(new_pizza);
    tracing::info!(username = %auth.user.username, pizza_id = pizza.id, "pizza added");
    Ok((StatusCode::CREATED, Json(pizza)))
}

/// `GET /api/drinks`
pub async fn list_drinks(State(state): State<AppState>) -> Json<Vec<Drink>> {
    Json(state.menu.read().await.drinks().to_vec())
}

#[cfg(test)]
#[path = "menu_test.rs"]
mod tests;
