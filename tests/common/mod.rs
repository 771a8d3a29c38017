use cash_drawer::domain::denomination::Denomination;
use cash_drawer::domain::drawer::Drawer;
use cash_drawer::domain::money::Money;
use rand::Rng;

/// A drawer holding a random whole number of pieces of every denomination.
pub fn random_drawer<R: Rng>(rng: &mut R, max_pieces: i64) -> Drawer {
    Drawer::new(
        Denomination::ALL
            .into_iter()
            .map(|d| (d, d.unit_value() * rng.gen_range(0..=max_pieces))),
    )
    .expect("random drawer is always valid")
}

/// A drawer built from `(denomination, cents)` pairs.
pub fn drawer_of(entries: &[(Denomination, i64)]) -> Drawer {
    Drawer::new(
        entries
            .iter()
            .map(|(d, cents)| (*d, Money::from_cents(*cents))),
    )
    .expect("fixture drawer is valid")
}
