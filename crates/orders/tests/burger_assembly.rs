use std::sync::Arc;

use grillhouse_catalog::{BunRef, IngredientRef, Menu};
use grillhouse_core::{DomainError, Money};
use grillhouse_orders::Burger;

fn bun_from_menu(menu: &Menu, name: &str) -> BunRef {
    Arc::new(menu.bun(name).expect("bun on the standard menu").clone())
}

fn ingredient_from_menu(menu: &Menu, name: &str) -> IngredientRef {
    Arc::new(
        menu.ingredient(name)
            .expect("ingredient on the standard menu")
            .clone(),
    )
}

#[test]
fn assembles_a_burger_from_the_standard_menu() {
    grillhouse_observability::init_for_tests();

    let menu = Menu::standard();
    let mut burger = Burger::new();

    burger.set_buns(bun_from_menu(&menu, "red bun"));
    burger.add_ingredient(ingredient_from_menu(&menu, "chili sauce"));
    burger.add_ingredient(ingredient_from_menu(&menu, "cutlet"));
    burger.add_ingredient(ingredient_from_menu(&menu, "dinosaur"));

    // Rework the order: dinosaur goes on top, the chili sauce comes off.
    burger.move_ingredient(2, 0).unwrap();
    burger.remove_ingredient(1).unwrap();

    assert_eq!(burger.price().unwrap(), Money::from_major(900));
    assert_eq!(
        burger.receipt().unwrap(),
        "(==== red bun ====)\n\
         = filling dinosaur =\n\
         = filling cutlet =\n\
         (==== red bun ====)\n\
         \n\
         Price: 900.0"
    );
}

#[test]
fn a_shared_menu_item_can_back_two_burgers() {
    grillhouse_observability::init_for_tests();

    let menu = Menu::standard();
    let sauce = ingredient_from_menu(&menu, "sour cream");

    let mut first = Burger::new();
    first.set_buns(bun_from_menu(&menu, "black bun"));
    first.add_ingredient(Arc::clone(&sauce));

    let mut second = Burger::new();
    second.set_buns(bun_from_menu(&menu, "white bun"));
    second.add_ingredient(Arc::clone(&sauce));
    second.add_ingredient(Arc::clone(&sauce));

    assert_eq!(first.price().unwrap(), Money::from_major(400));
    assert_eq!(second.price().unwrap(), Money::from_major(800));
}

#[test]
fn surfaces_domain_errors_at_the_boundary() {
    grillhouse_observability::init_for_tests();

    let menu = Menu::standard();
    let mut burger = Burger::new();

    assert_eq!(burger.price().unwrap_err(), DomainError::MissingBun);
    assert_eq!(burger.receipt().unwrap_err(), DomainError::MissingBun);
    assert_eq!(
        burger.remove_ingredient(0).unwrap_err(),
        DomainError::IndexOutOfRange { index: 0, len: 0 }
    );

    burger.set_buns(bun_from_menu(&menu, "black bun"));
    burger.add_ingredient(ingredient_from_menu(&menu, "hot sauce"));
    assert_eq!(
        burger.move_ingredient(1, 0).unwrap_err(),
        DomainError::IndexOutOfRange { index: 1, len: 1 }
    );

    // The failed operations left the assembly untouched.
    assert_eq!(burger.ingredient_count(), 1);
    assert_eq!(burger.price().unwrap(), Money::from_major(300));
}
