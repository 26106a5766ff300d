//! Processing buildings — preserves jar, keg, oil maker — and the choice
//! of the most profitable outlet.

use crate::shared::*;

use super::multiply_price_by_percentage;

const ARTISAN_PERCENT: u32 = 140;
const OIL_PRICE: u32 = 100;

// ─────────────────────────────────────────────────────────────────────────────
// Preserves jar
// ─────────────────────────────────────────────────────────────────────────────

/// Jelly from fruit, pickles from vegetables, nothing from anything else.
/// Quality makes no difference to processed goods; every unit sells at the
/// same price.
pub fn proceeds_from_preserves_jar(
    crop: &CropDefinition,
    quantity: f64,
    artisan: bool,
) -> Option<Proceeds> {
    let name = match crop.crop_type {
        CropType::Fruit => "Jelly",
        CropType::Vegetable => "Pickles",
        _ => return None,
    };

    let base_price = 2 * crop.sell_price + 50;
    let price = if artisan {
        multiply_price_by_percentage(base_price, ARTISAN_PERCENT)
    } else {
        base_price
    };

    Some(Proceeds {
        name: name.to_string(),
        price: price as f64,
        quantity,
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Keg
// ─────────────────────────────────────────────────────────────────────────────

/// What the keg turns this crop into, and at what base price. Name special
/// cases take precedence over the type rules.
fn kegged_good(crop: &CropDefinition) -> Option<(&'static str, u32)> {
    match crop.name.as_str() {
        "Wheat" => return Some(("Beer", 200)),
        // Technically vinegar needs milled rice first.
        "Unmilled Rice" => return Some(("Vinegar", 100)),
        "Coffee Bean" => return Some(("Coffee", 150)),
        "Tea Leaves" => return Some(("Green Tea", 100)),
        "Hops" => return Some(("Pale Ale", 300)),
        _ => {}
    }

    match crop.crop_type {
        CropType::Fruit => Some(("Wine", 3 * crop.sell_price)),
        CropType::Vegetable => Some(("Juice", multiply_price_by_percentage(crop.sell_price, 225))),
        _ => None,
    }
}

pub fn proceeds_from_keg(
    crop: &CropDefinition,
    quantity: f64,
    artisan: bool,
) -> Option<Proceeds> {
    let (name, base_price) = kegged_good(crop)?;

    let proceeds = match name {
        // Coffee takes 5 beans per cup and is not an artisan good.
        "Coffee" => Proceeds {
            name: name.to_string(),
            price: base_price as f64,
            quantity: quantity / 5.0,
        },
        // Each rice gives 2 vinegar; also not an artisan good.
        "Vinegar" => Proceeds {
            name: name.to_string(),
            price: base_price as f64,
            quantity: quantity * 2.0,
        },
        _ => {
            let price = if artisan {
                multiply_price_by_percentage(base_price, ARTISAN_PERCENT)
            } else {
                base_price
            };
            Proceeds {
                name: name.to_string(),
                price: price as f64,
                quantity,
            }
        }
    };

    Some(proceeds)
}

// ─────────────────────────────────────────────────────────────────────────────
// Oil maker
// ─────────────────────────────────────────────────────────────────────────────

/// Oil per crop. Each sunflower harvest gives 1 flower and ~1 seed; running
/// the flower through the seed maker first averages 2 more seeds, so 3 oils
/// per harvest total.
fn oil_amount(crop: &CropDefinition) -> Option<f64> {
    match crop.name.as_str() {
        "Corn" => Some(1.0),
        "Sunflower" => Some(3.0),
        _ => None,
    }
}

pub fn proceeds_from_oil_maker(crop: &CropDefinition, quantity: f64) -> Option<Proceeds> {
    let amount = oil_amount(crop)?;

    Some(Proceeds {
        name: "Oil".to_string(),
        price: OIL_PRICE as f64, // no artisan bonus
        quantity: amount * quantity,
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Selection
// ─────────────────────────────────────────────────────────────────────────────

/// Pick the highest-revenue outlet. Raw sale is the starting baseline even
/// at zero revenue, so a result always exists; a later candidate must win
/// strictly, so ties keep the earlier one.
pub fn select_best_outcome(
    raw: Proceeds,
    candidates: impl IntoIterator<Item = (ProcessingType, Option<Proceeds>)>,
) -> (ProcessingType, Proceeds, f64) {
    let mut best = (ProcessingType::Raw, raw.revenue(), raw);

    for (processing_type, proceeds) in candidates {
        let Some(proceeds) = proceeds else {
            continue;
        };
        let revenue = proceeds.revenue();
        if revenue > best.1 {
            best = (processing_type, revenue, proceeds);
        }
    }

    let (processing_type, revenue, proceeds) = best;
    (processing_type, proceeds, revenue)
}
