//! The fixture catalog served by the application under test.
//!
//! Product slugs key the per-item `data-test` controls
//! (`add-to-cart-<slug>`, `remove-<slug>`); display names appear in
//! rendered listings and line items. Tests address products through these
//! constants instead of embedding raw strings.

/// `Sauce Labs Backpack`
pub const BACKPACK: &str = "sauce-labs-backpack";

/// `Sauce Labs Bike Light`
pub const BIKE_LIGHT: &str = "sauce-labs-bike-light";

/// `Sauce Labs Bolt T-Shirt`
pub const BOLT_T_SHIRT: &str = "sauce-labs-bolt-t-shirt";

/// `Sauce Labs Fleece Jacket`
pub const FLEECE_JACKET: &str = "sauce-labs-fleece-jacket";

/// `Sauce Labs Onesie`
pub const ONESIE: &str = "sauce-labs-onesie";

/// `Test.allTheThings() T-Shirt (Red)`
pub const RED_T_SHIRT: &str = "test.allthethings()-t-shirt-(red)";

/// Number of products in the fixture catalog
pub const CATALOG_SIZE: usize = 6;

/// All catalog slugs
pub const ALL: [&str; CATALOG_SIZE] = [
    BACKPACK,
    BIKE_LIGHT,
    BOLT_T_SHIRT,
    FLEECE_JACKET,
    ONESIE,
    RED_T_SHIRT,
];

/// Display name for a catalog slug, if known
#[must_use]
pub fn display_name(slug: &str) -> Option<&'static str> {
    match slug {
        BACKPACK => Some("Sauce Labs Backpack"),
        BIKE_LIGHT => Some("Sauce Labs Bike Light"),
        BOLT_T_SHIRT => Some("Sauce Labs Bolt T-Shirt"),
        FLEECE_JACKET => Some("Sauce Labs Fleece Jacket"),
        ONESIE => Some("Sauce Labs Onesie"),
        RED_T_SHIRT => Some("Test.allTheThings() T-Shirt (Red)"),
        _ => None,
    }
}
