//! Calendar domain — crop eligibility and growing-window arithmetic.
//!
//! Responsible for:
//! - Expanding a crop's starting season + multiseason span into the set of
//!   seasons it grows in (wrapping around the 4-season year)
//! - Deciding whether a scenario is in-season for a crop
//! - Counting the days remaining in the growing window

use crate::shared::*;

/// The seasons a crop grows in: its starting season plus the following
/// `multiseason - 1` seasons, wrapping around the year. At most one full
/// year of slots. `None` for greenhouse-only crops (no season field).
pub fn growing_seasons(crop: &CropDefinition) -> Option<Vec<Season>> {
    let start = crop.season?;
    let span = crop.multiseason.unwrap_or(1).clamp(1, SEASONS_PER_YEAR);
    Some((0..span as usize).map(|i| start.offset(i)).collect())
}

/// Days left to grow `crop` when planting on `start_day` of
/// `current_season`. `None` = the crop cannot be grown in this season.
///
/// With multiseason disabled only the rest of the current season counts;
/// otherwise every remaining season of the crop's span contributes a full
/// 28-day block, minus the days already elapsed in the first one.
pub fn days_remaining(
    crop: &CropDefinition,
    current_season: Season,
    start_day: u32,
    multiseason_enabled: bool,
) -> Option<u32> {
    // Greenhouse-only crops (e.g. Cactus Fruit) never grow outdoors.
    let seasons = growing_seasons(crop)?;

    let position = seasons.iter().position(|&s| s == current_season)?;

    let seasons_left = if multiseason_enabled {
        (seasons.len() - position) as u32
    } else {
        1
    };
    Some(DAYS_PER_SEASON * seasons_left - start_day)
}

/// Resolve a scenario to the number of growth days available for `crop`.
/// `None` = out of season.
///
/// Greenhouse scenarios bypass season filtering entirely; the minus one
/// accounts for the planting day not counting as a growth day.
pub fn resolve_window(crop: &CropDefinition, scenario: &Scenario) -> Option<u32> {
    match scenario.start {
        ScenarioStart::Greenhouse { num_seasons } => Some(num_seasons * DAYS_PER_SEASON - 1),
        ScenarioStart::Season { season, start_day } => {
            days_remaining(crop, season, start_day, scenario.multiseason_enabled)
        }
    }
}
