//! The calculation engine — the sole entry point display collaborators
//! consume.
//!
//! Data flows strictly downward: calendar resolver → harvest counter →
//! quality model → pricing → processing optimizer. Every call is a pure
//! function of its inputs; nothing is memoized or mutated across calls.

use crate::calendar;
use crate::economy::{pricing, processing};
use crate::farming::growth;
use crate::shared::*;

/// Evaluate one crop against a scenario.
pub fn calculate(crop: &CropDefinition, scenario: &Scenario) -> Calculation {
    let is_agriculturist = scenario.is_agriculturist();
    let speedgro = scenario.fertilizer.speedgro;

    let Some(days_remaining) = calendar::resolve_window(crop, scenario) else {
        return Calculation::OutOfSeason;
    };

    let harvests = growth::count_harvests(crop, days_remaining, speedgro, is_agriculturist);

    // Expected crops of each quality across the whole window.
    let quality = scenario.quality_probabilities.unwrap_or(NO_QUALITY);
    let per_harvest = pricing::expected_crops_per_harvest(crop, &quality);
    let total_by_quality = per_harvest.map(|&x| x * harvests.count as f64);
    let total_crops = total_by_quality.sum();

    // Raw sale is always evaluated; the enabled buildings compete with it.
    let is_artisan = scenario.is_artisan();
    let raw = pricing::raw_proceeds(crop, &total_by_quality, scenario.tiller_skill_chosen);

    let mut candidates: Vec<(ProcessingType, Option<Proceeds>)> = Vec::new();
    if scenario.preserves_jar_enabled {
        candidates.push((
            ProcessingType::Preserves,
            processing::proceeds_from_preserves_jar(crop, total_crops, is_artisan),
        ));
    }
    if scenario.kegs_enabled {
        candidates.push((
            ProcessingType::Keg,
            processing::proceeds_from_keg(crop, total_crops, is_artisan),
        ));
    }
    if scenario.oil_maker_enabled {
        candidates.push((
            ProcessingType::Oil,
            processing::proceeds_from_oil_maker(crop, total_crops),
        ));
    }

    let (processing_type, proceeds, revenue) = processing::select_best_outcome(raw, candidates);

    Calculation::Grown(CropData {
        definition: crop.clone(),
        useful_days: harvests.duration_days,
        growth_period: growth::modified_growth_period(crop.days_to_grow, speedgro, is_agriculturist),
        num_harvests: harvests.count,
        num_crops: total_crops,
        crop_proceeds: pricing::proceeds_by_quality(
            crop,
            &total_by_quality,
            scenario.tiller_skill_chosen,
        ),
        processing_type,
        proceeds,
        revenue,
        profit: revenue - crop.seed_cost as f64,
    })
}

/// Evaluate every crop in a table and keep the ones that can grow.
/// Out-of-season entries are dropped here so display collaborators only
/// see growable rows.
pub fn evaluate_all<'a>(
    crops: impl IntoIterator<Item = &'a CropDefinition>,
    scenario: &Scenario,
) -> Vec<CropData> {
    crops
        .into_iter()
        .filter_map(|crop| calculate(crop, scenario).grown())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn base_scenario() -> Scenario {
        Scenario {
            start: ScenarioStart::Season { season: Season::Spring, start_day: 1 },
            multiseason_enabled: true,
            quality_probabilities: None,
            tiller_skill_chosen: false,
            level_10_profession: None,
            fertilizer: Fertilizer::default(),
            preserves_jar_enabled: false,
            kegs_enabled: false,
            oil_maker_enabled: false,
        }
    }

    fn strawberry() -> CropDefinition {
        CropDefinition {
            name: "Strawberry".to_string(),
            crop_type: CropType::Fruit,
            season: Some(Season::Spring),
            multiseason: None,
            days_to_grow: 8,
            regrowth_period: Some(4),
            seed_cost: 100,
            sell_price: 120,
            base_yield: None,
            percent_chance_extra: Some(2),
            special_handling: None,
        }
    }

    #[test]
    fn test_out_of_season_crop_returns_tagged_variant() {
        let mut scenario = base_scenario();
        scenario.start = ScenarioStart::Season { season: Season::Summer, start_day: 1 };
        assert_eq!(calculate(&strawberry(), &scenario), Calculation::OutOfSeason);
    }

    #[test]
    fn test_zero_growth_days_left_is_grown_with_zero_harvests() {
        let mut scenario = base_scenario();
        scenario.start = ScenarioStart::Season { season: Season::Spring, start_day: 28 };
        let data = calculate(&strawberry(), &scenario).grown().unwrap();
        assert_eq!(data.num_harvests, 0);
        assert_eq!(data.useful_days, 0);
        assert_eq!(data.num_crops, 0.0);
        assert_eq!(data.revenue, 0.0);
        // Seed cost still counts against you.
        assert_eq!(data.profit, -100.0);
        // Average-price fallback: no division by zero.
        assert_eq!(data.proceeds.price, 120.0);
    }

    #[test]
    fn test_strawberry_spring_day_one() {
        // 27 days: first harvest on day 8, then floor(19/4) = 4 regrowths.
        let data = calculate(&strawberry(), &base_scenario()).grown().unwrap();
        assert_eq!(data.num_harvests, 5);
        assert_eq!(data.useful_days, 8 + 4 * 4);
        // 1.02 expected crops per harvest
        assert_abs_diff_eq!(data.num_crops, 5.1, epsilon = 1e-12);
        assert_eq!(data.processing_type, ProcessingType::Raw);
        assert_abs_diff_eq!(data.revenue, 5.1 * 120.0, epsilon = 1e-9);
        assert_abs_diff_eq!(data.profit, 5.1 * 120.0 - 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_calculate_is_idempotent() {
        let mut scenario = base_scenario();
        scenario.quality_probabilities = Some(crate::farming::quality::compute_quality(
            7,
            Some(QualityFertilizer::Basic),
        ));
        scenario.tiller_skill_chosen = true;
        scenario.kegs_enabled = true;

        let first = calculate(&strawberry(), &scenario);
        let second = calculate(&strawberry(), &scenario);
        assert_eq!(first, second);
    }

    #[test]
    fn test_keg_wins_over_preserves_when_strictly_better() {
        // Fruit: wine = 3*120 = 360 vs jelly = 2*120 + 50 = 290.
        let mut scenario = base_scenario();
        scenario.preserves_jar_enabled = true;
        scenario.kegs_enabled = true;

        let data = calculate(&strawberry(), &scenario).grown().unwrap();
        assert_eq!(data.processing_type, ProcessingType::Keg);
        assert_eq!(data.proceeds.name, "Wine");
        assert_abs_diff_eq!(data.revenue, 360.0 * data.num_crops, epsilon = 1e-9);
    }

    #[test]
    fn test_disabled_paths_are_not_considered() {
        let mut scenario = base_scenario();
        scenario.preserves_jar_enabled = true; // kegs stay off

        let data = calculate(&strawberry(), &scenario).grown().unwrap();
        assert_eq!(data.processing_type, ProcessingType::Preserves);
        assert_eq!(data.proceeds.name, "Jelly");
    }

    #[test]
    fn test_crop_proceeds_vector_present_even_when_keg_wins() {
        let mut scenario = base_scenario();
        scenario.kegs_enabled = true;

        let data = calculate(&strawberry(), &scenario).grown().unwrap();
        assert_eq!(data.processing_type, ProcessingType::Keg);
        // Raw per-quality breakdown still fully populated.
        assert_eq!(data.crop_proceeds.normal.price, 120.0);
        assert_eq!(data.crop_proceeds.silver.price, 150.0);
        assert_eq!(data.crop_proceeds.gold.price, 180.0);
        assert_eq!(data.crop_proceeds.iridium.price, 240.0);
    }

    #[test]
    fn test_evaluate_all_filters_out_of_season() {
        let mut summer_crop = strawberry();
        summer_crop.name = "Melon".to_string();
        summer_crop.season = Some(Season::Summer);

        let crops = vec![strawberry(), summer_crop];
        let rows = evaluate_all(&crops, &base_scenario());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].definition.name, "Strawberry");
    }

    #[test]
    fn test_daily_profit_helper() {
        let data = calculate(&strawberry(), &base_scenario()).grown().unwrap();
        let daily = data.daily_profit().unwrap();
        assert_abs_diff_eq!(daily, data.profit / 24.0, epsilon = 1e-12);

        let mut scenario = base_scenario();
        scenario.start = ScenarioStart::Season { season: Season::Spring, start_day: 28 };
        let no_days = calculate(&strawberry(), &scenario).grown().unwrap();
        assert_eq!(no_days.daily_profit(), None);
    }
}
