//! Growth-period modifiers and harvest counting.

use crate::shared::*;

// ─────────────────────────────────────────────────────────────────────────────
// Growth period
// ─────────────────────────────────────────────────────────────────────────────

/// Growth period after speed modifiers. Speed-Gro and Agriculturist are
/// additive, and the subtracted amount is rounded up, so the period always
/// shortens by at least the full fractional speed-up.
pub fn modified_growth_period(
    base_period: u32,
    speedgro: Option<SpeedGro>,
    is_agriculturist: bool,
) -> u32 {
    let speedgro_factor = speedgro.map_or(0.0, SpeedGro::growth_bonus);
    let agriculturist_factor = if is_agriculturist { 0.1 } else { 0.0 };
    let factor = speedgro_factor + agriculturist_factor;

    base_period - (base_period as f64 * factor).ceil() as u32
}

// ─────────────────────────────────────────────────────────────────────────────
// Harvest counting
// ─────────────────────────────────────────────────────────────────────────────

/// How many harvests fit into `days_remaining`, and how many of those days
/// are productively consumed.
pub fn count_harvests(
    crop: &CropDefinition,
    days_remaining: u32,
    speedgro: Option<SpeedGro>,
    is_agriculturist: bool,
) -> Harvests {
    match crop.special_handling {
        None => count_standard(crop, days_remaining, speedgro, is_agriculturist),
        Some(SpecialHandling::Tea) => count_tea(crop, days_remaining),
    }
}

fn count_standard(
    crop: &CropDefinition,
    days_remaining: u32,
    speedgro: Option<SpeedGro>,
    is_agriculturist: bool,
) -> Harvests {
    let growth_period = modified_growth_period(crop.days_to_grow, speedgro, is_agriculturist);

    let mut count = 0;
    let mut duration_days = 0;
    if days_remaining >= growth_period {
        count += 1;
        duration_days += growth_period;
        if let Some(regrowth) = crop.regrowth_period {
            let extra = (days_remaining - growth_period) / regrowth;
            count += extra;
            duration_days += extra * regrowth;
        }
    }

    Harvests { count, duration_days }
}

/// Tea follows the season, not the regrowth clock, and ignores speed
/// bonuses entirely (Agriculturist included).
///
/// Every full season block past the first gives exactly 7 leaves. Within
/// the first (partial) season tea behaves like a regrowth crop with a
/// 1-day regrowth period, so once matured it yields one leaf per remaining
/// day. That remainder rule is a deliberate approximation of the in-game
/// weekly harvest calendar; so is reporting the whole window as the
/// duration.
fn count_tea(crop: &CropDefinition, days_remaining: u32) -> Harvests {
    let mut count = 0;
    let mut days = days_remaining;
    while days > DAYS_PER_SEASON {
        days -= DAYS_PER_SEASON;
        count += 7;
    }

    if days >= crop.days_to_grow {
        count += days - crop.days_to_grow;
    }

    Harvests {
        count,
        duration_days: days_remaining,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regrowth_crop(days_to_grow: u32, regrowth_period: Option<u32>) -> CropDefinition {
        CropDefinition {
            name: "Test Crop".to_string(),
            crop_type: CropType::Vegetable,
            season: Some(Season::Spring),
            multiseason: None,
            days_to_grow,
            regrowth_period,
            seed_cost: 20,
            sell_price: 50,
            base_yield: None,
            percent_chance_extra: None,
            special_handling: None,
        }
    }

    fn tea() -> CropDefinition {
        CropDefinition {
            name: "Tea Leaves".to_string(),
            crop_type: CropType::Other,
            season: Some(Season::Spring),
            multiseason: Some(3),
            days_to_grow: 20,
            regrowth_period: None,
            seed_cost: 500,
            sell_price: 50,
            base_yield: None,
            percent_chance_extra: None,
            special_handling: Some(SpecialHandling::Tea),
        }
    }

    #[test]
    fn test_modified_growth_period_no_bonuses() {
        assert_eq!(modified_growth_period(12, None, false), 12);
    }

    #[test]
    fn test_modified_growth_period_rounds_reduction_up() {
        // 12 * 0.10 = 1.2, ceil = 2 days saved
        assert_eq!(modified_growth_period(12, Some(SpeedGro::Basic), false), 10);
        // 13 * 0.25 = 3.25, ceil = 4 days saved
        assert_eq!(modified_growth_period(13, Some(SpeedGro::Deluxe), false), 9);
    }

    #[test]
    fn test_modified_growth_period_bonuses_are_additive() {
        // 0.33 + 0.10 = 0.43; 14 * 0.43 = 6.02, ceil = 7 days saved
        assert_eq!(modified_growth_period(14, Some(SpeedGro::Hyper), true), 7);
    }

    #[test]
    fn test_single_harvest_crop_caps_at_one() {
        let crop = regrowth_crop(6, None);
        let h = count_harvests(&crop, 27, None, false);
        assert_eq!(h, Harvests { count: 1, duration_days: 6 });
    }

    #[test]
    fn test_no_harvest_when_window_too_short() {
        let crop = regrowth_crop(10, Some(3));
        let h = count_harvests(&crop, 9, None, false);
        assert_eq!(h, Harvests { count: 0, duration_days: 0 });
    }

    #[test]
    fn test_regrowth_arithmetic() {
        // grow 10, regrow 3, 19 days: 1 + floor(9/3) = 4 harvests,
        // 10 + 3*3 = 19 useful days
        let crop = regrowth_crop(10, Some(3));
        let h = count_harvests(&crop, 19, None, false);
        assert_eq!(h, Harvests { count: 4, duration_days: 19 });
    }

    #[test]
    fn test_regrowth_leftover_days_are_not_useful() {
        let crop = regrowth_crop(10, Some(3));
        let h = count_harvests(&crop, 20, None, false);
        assert_eq!(h, Harvests { count: 4, duration_days: 19 });
    }

    #[test]
    fn test_speedgro_buys_an_extra_regrowth_harvest() {
        // grow 10 -> 9 with basic Speed-Gro; (19 - 9) / 3 = 3 extras
        let crop = regrowth_crop(10, Some(3));
        let h = count_harvests(&crop, 19, Some(SpeedGro::Basic), false);
        assert_eq!(h, Harvests { count: 4, duration_days: 18 });
    }

    #[test]
    fn test_tea_first_season_remainder_model() {
        // 27 days, matured after 20: 27 - 20 = 7 leaves. One leaf per day
        // after maturation is the deliberate simplification of the weekly
        // schedule.
        let h = count_harvests(&tea(), 27, None, false);
        assert_eq!(h, Harvests { count: 7, duration_days: 27 });
    }

    #[test]
    fn test_tea_full_seasons_give_seven_each() {
        // 83 days = 2 full blocks (7 + 7) + 27-day remainder (7)
        let h = count_harvests(&tea(), 83, None, false);
        assert_eq!(h, Harvests { count: 21, duration_days: 83 });
    }

    #[test]
    fn test_tea_exact_block_stays_in_remainder() {
        // The block loop is strict (> 28): 28 days is one remainder, not a
        // full block, so 28 - 20 = 8 leaves.
        let h = count_harvests(&tea(), 28, None, false);
        assert_eq!(h, Harvests { count: 8, duration_days: 28 });
    }

    #[test]
    fn test_tea_ignores_speed_bonuses() {
        let with = count_harvests(&tea(), 27, Some(SpeedGro::Hyper), true);
        let without = count_harvests(&tea(), 27, None, false);
        assert_eq!(with, without);
    }

    #[test]
    fn test_tea_too_short_window_yields_nothing() {
        let h = count_harvests(&tea(), 19, None, false);
        assert_eq!(h, Harvests { count: 0, duration_days: 19 });
    }
}
