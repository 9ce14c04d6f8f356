use super::*;

fn coke() -> Drink {
    Drink {
        id: 1,
        title: "Coca-Cola".to_owned(),
        image: "/images/coke.jpg".to_owned(),
        volume: "Canette 33 cl".to_owned(),
        price: 2.5,
    }
}

#[test]
fn price_label_prefixes_prix() {
    assert_eq!(price_label(2.5), "Prix: 2.5");
    assert_eq!(price_label(3.0), "Prix: 3");
}

#[test]
fn image_alt_mentions_title_and_volume() {
    assert_eq!(image_alt(&coke()), "Coca-Cola (Canette 33 cl)");
}
