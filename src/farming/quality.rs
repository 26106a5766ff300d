//! Crop quality — probability model and per-harvest sampling.
//!
//! Quality is decided by a series of weighted coin flips, one coin per
//! tier, tested from rarest to most common. `compute_quality` turns the
//! coins into a closed-form distribution for expected-value math;
//! `roll_quality` flips them for a single harvest.

use rand::Rng;

use crate::shared::*;

/// Coin probabilities for one (farming level, fertilizer) configuration.
/// Iridium only exists with deluxe fertilizer; deluxe also makes the
/// silver coin a sure thing, so nothing stays normal quality.
struct QualityCoins {
    gold: f64,
    silver: f64,
    iridium: f64,
}

fn quality_coins(farming_level: u32, fertilizer: Option<QualityFertilizer>) -> QualityCoins {
    let fertilizer_level = fertilizer.map_or(0, QualityFertilizer::level) as f64;
    let deluxe = fertilizer == Some(QualityFertilizer::Deluxe);
    let level = farming_level as f64;

    let gold = 0.2 * (level / 10.0) + 0.2 * fertilizer_level * ((level + 2.0) / 12.0) + 0.01;
    let silver = if deluxe { 1.0 } else { (2.0 * gold).min(0.75) };
    // The iridium coin derives from the raw gold value; the gold coin itself
    // is a flip probability, so anything past 1.0 is just a sure thing
    // (reachable with deluxe fertilizer from level 13 up).
    let iridium = if deluxe { gold / 2.0 } else { 0.0 };

    QualityCoins { gold: gold.min(1.0), silver, iridium }
}

/// The quality distribution for a farming level and fertilizer choice.
/// Components always sum to 1.
///
/// The coins are flipped one at a time, so each tier's probability is
/// conditioned on every rarer tier failing first — this is not four
/// independent draws.
pub fn compute_quality(
    farming_level: u32,
    fertilizer: Option<QualityFertilizer>,
) -> QualityVector<f64> {
    let coins = quality_coins(farming_level, fertilizer);

    let iridium = coins.iridium;
    let gold = (1.0 - iridium) * coins.gold;
    let silver = (1.0 - iridium - gold) * coins.silver;
    let normal = 1.0 - iridium - gold - silver;

    QualityVector { normal, silver, gold, iridium }
}

/// Roll the quality of a single harvested crop through the same coin
/// sequence the distribution models.
pub fn roll_quality<R: Rng + ?Sized>(
    rng: &mut R,
    farming_level: u32,
    fertilizer: Option<QualityFertilizer>,
) -> Quality {
    let coins = quality_coins(farming_level, fertilizer);

    if rng.gen::<f64>() < coins.iridium {
        Quality::Iridium
    } else if rng.gen::<f64>() < coins.gold {
        Quality::Gold
    } else if rng.gen::<f64>() < coins.silver {
        Quality::Silver
    } else {
        Quality::Normal
    }
}
