//! Raw-sale pricing: per-quality prices, expected yield, and aggregation.

use crate::shared::*;

use super::multiply_price_by_percentage;

const TILLER_PERCENT: u32 = 110;

// ─────────────────────────────────────────────────────────────────────────────
// Prices
// ─────────────────────────────────────────────────────────────────────────────

/// Sell price of the raw crop at each quality tier.
///
/// Prices are truncated after each multiplier, quality first. The order is
/// load-bearing: Silver Ancient Fruit is 687, and 755 with Tiller —
///   550 * 1.25 = 687.5 -> 687, then 687 * 1.1 = 755.7 -> 755.
/// Combining the multipliers before truncating gives 756, which is wrong.
pub fn crop_prices(crop: &CropDefinition, tiller: bool) -> QualityVector<u32> {
    let tiller_applies = tiller && crop.crop_type.benefits_from_tiller();
    QualityVector::from_fn(|quality| {
        let price = multiply_price_by_percentage(crop.sell_price, quality.price_percent());
        if tiller_applies {
            multiply_price_by_percentage(price, TILLER_PERCENT)
        } else {
            price
        }
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Expected yield
// ─────────────────────────────────────────────────────────────────────────────

/// Expected crops per harvest, split by quality. Any yield beyond the
/// first unit — deterministic extras and the fractional chance of one
/// more — is always normal quality, so it lands entirely in that slot.
///
/// Tea overrides all of this: no quality variance, one leaf per harvest.
pub fn expected_crops_per_harvest(
    crop: &CropDefinition,
    quality: &QualityVector<f64>,
) -> QualityVector<f64> {
    match crop.special_handling {
        Some(SpecialHandling::Tea) => NO_QUALITY,
        None => {
            let crop_yield = crop.base_yield.unwrap_or(1) as f64
                + crop.percent_chance_extra.unwrap_or(0) as f64 / 100.0;

            let mut output = *quality;
            output.normal += crop_yield - 1.0;
            output
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Raw-sale proceeds
// ─────────────────────────────────────────────────────────────────────────────

/// Per-tier proceeds of selling the crop raw. Always computed so the
/// display layer can show the full price breakdown, whichever processing
/// path wins.
pub fn proceeds_by_quality(
    crop: &CropDefinition,
    quantities: &QualityVector<f64>,
    tiller: bool,
) -> QualityVector<Proceeds> {
    let prices = crop_prices(crop, tiller);
    prices.zip(quantities, |&price, &quantity| Proceeds {
        name: crop.name.clone(),
        price: price as f64,
        quantity,
    })
}

/// Aggregate raw-sale proceeds across all tiers.
///
/// The average price is revenue-weighted, not a plain mean of the tier
/// prices — the quantity distribution is non-uniform. A zero total falls
/// back to the undiscounted base sell price rather than dividing by zero.
pub fn raw_proceeds(
    crop: &CropDefinition,
    quantities: &QualityVector<f64>,
    tiller: bool,
) -> Proceeds {
    let prices = crop_prices(crop, tiller).map(|&p| p as f64);

    let total_crops = quantities.sum();
    let total_revenue = prices.dot(quantities);
    let avg_price = if total_crops == 0.0 {
        crop.sell_price as f64
    } else {
        total_revenue / total_crops
    };

    Proceeds {
        name: crop.name.clone(),
        price: avg_price,
        quantity: total_crops,
    }
}
