use super::*;

fn labels(items: &[NavItem]) -> Vec<&'static str> {
    items.iter().map(|i| i.label).collect()
}

#[test]
fn anonymous_sees_register_and_login() {
    let items = nav_items(None);
    assert_eq!(labels(&items), ["Home", "Créer un utilisateur", "Se connecter"]);
    assert_eq!(items[1].action, NavAction::Go("/register"));
    assert_eq!(items[2].action, NavAction::Go("/login"));
}

#[test]
fn signed_in_sees_add_pizza_and_logout() {
    let bob = AuthenticatedUser::public("bob");
    let items = nav_items(Some(&bob));
    assert_eq!(labels(&items), ["Home", "Ajouter une pizza", "Se déconnecter"]);
    assert_eq!(items[1].action, NavAction::Go("/add-pizza"));
    assert_eq!(items[2].action, NavAction::Logout);
}

#[test]
fn home_always_first() {
    assert_eq!(nav_items(None)[0], HOME);
    assert_eq!(nav_items(Some(&AuthenticatedUser::public("x")))[0].action, NavAction::Go("/"));
}

#[test]
fn greeting_uses_username() {
    assert_eq!(greeting(&AuthenticatedUser::public("bob")), "Hello dear bob");
}
