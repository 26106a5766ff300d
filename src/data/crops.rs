use crate::shared::*;

fn crop(
    name: &str,
    crop_type: CropType,
    season: Option<Season>,
    days_to_grow: u32,
    seed_cost: u32,
    sell_price: u32,
) -> CropDefinition {
    CropDefinition {
        name: name.to_string(),
        crop_type,
        season,
        multiseason: None,
        days_to_grow,
        regrowth_period: None,
        seed_cost,
        sell_price,
        base_yield: None,
        percent_chance_extra: None,
        special_handling: None,
    }
}

/// The built-in crop definition table.
///
/// Prices and growth times follow the base game. Crops the engine
/// special-cases by name (Wheat, Unmilled Rice, Coffee Bean, Tea Leaves,
/// Hops, Corn, Sunflower) are all present so every processing path is
/// reachable from the shipped data.
pub fn all_crops() -> Vec<CropDefinition> {
    vec![
        // ── Spring ──────────────────────────────────────────────────────────
        crop("Blue Jazz", CropType::Flower, Some(Season::Spring), 7, 30, 50),
        crop("Cauliflower", CropType::Vegetable, Some(Season::Spring), 12, 80, 175),
        CropDefinition {
            // 4 beans per pick, kegged 5:1 into coffee.
            multiseason: Some(2),
            regrowth_period: Some(2),
            base_yield: Some(4),
            percent_chance_extra: Some(2),
            ..crop("Coffee Bean", CropType::Other, Some(Season::Spring), 10, 2500, 15)
        },
        crop("Garlic", CropType::Vegetable, Some(Season::Spring), 4, 40, 60),
        CropDefinition {
            regrowth_period: Some(3),
            ..crop("Green Bean", CropType::Vegetable, Some(Season::Spring), 10, 60, 40)
        },
        crop("Kale", CropType::Vegetable, Some(Season::Spring), 6, 70, 110),
        crop("Parsnip", CropType::Vegetable, Some(Season::Spring), 4, 20, 35),
        CropDefinition {
            percent_chance_extra: Some(25),
            ..crop("Potato", CropType::Vegetable, Some(Season::Spring), 6, 50, 80)
        },
        crop("Rhubarb", CropType::Fruit, Some(Season::Spring), 13, 100, 220),
        CropDefinition {
            regrowth_period: Some(4),
            percent_chance_extra: Some(2),
            ..crop("Strawberry", CropType::Fruit, Some(Season::Spring), 8, 100, 120)
        },
        crop("Tulip", CropType::Flower, Some(Season::Spring), 6, 20, 30),
        crop("Unmilled Rice", CropType::Vegetable, Some(Season::Spring), 8, 40, 30),

        // ── Summer ──────────────────────────────────────────────────────────
        CropDefinition {
            regrowth_period: Some(4),
            base_yield: Some(3),
            percent_chance_extra: Some(2),
            ..crop("Blueberry", CropType::Fruit, Some(Season::Summer), 13, 80, 50)
        },
        CropDefinition {
            multiseason: Some(2),
            regrowth_period: Some(4),
            ..crop("Corn", CropType::Vegetable, Some(Season::Summer), 14, 150, 50)
        },
        CropDefinition {
            regrowth_period: Some(1),
            ..crop("Hops", CropType::Vegetable, Some(Season::Summer), 11, 60, 25)
        },
        CropDefinition {
            regrowth_period: Some(3),
            percent_chance_extra: Some(3),
            ..crop("Hot Pepper", CropType::Fruit, Some(Season::Summer), 5, 40, 40)
        },
        crop("Melon", CropType::Fruit, Some(Season::Summer), 12, 80, 250),
        crop("Poppy", CropType::Flower, Some(Season::Summer), 7, 100, 140),
        crop("Radish", CropType::Vegetable, Some(Season::Summer), 6, 40, 90),
        crop("Red Cabbage", CropType::Vegetable, Some(Season::Summer), 9, 100, 260),
        crop("Starfruit", CropType::Fruit, Some(Season::Summer), 13, 400, 750),
        crop("Summer Spangle", CropType::Flower, Some(Season::Summer), 8, 50, 90),
        CropDefinition {
            // A flower, so the oil maker (3 oils via the seed maker) is its
            // only processing outlet.
            multiseason: Some(2),
            ..crop("Sunflower", CropType::Flower, Some(Season::Summer), 8, 200, 80)
        },
        CropDefinition {
            regrowth_period: Some(4),
            percent_chance_extra: Some(5),
            ..crop("Tomato", CropType::Fruit, Some(Season::Summer), 11, 50, 60)
        },
        CropDefinition {
            multiseason: Some(2),
            ..crop("Wheat", CropType::Vegetable, Some(Season::Summer), 4, 10, 25)
        },

        // ── Fall ────────────────────────────────────────────────────────────
        crop("Amaranth", CropType::Vegetable, Some(Season::Fall), 7, 70, 150),
        crop("Artichoke", CropType::Vegetable, Some(Season::Fall), 8, 30, 160),
        crop("Beet", CropType::Vegetable, Some(Season::Fall), 6, 20, 100),
        crop("Bok Choy", CropType::Vegetable, Some(Season::Fall), 4, 50, 80),
        CropDefinition {
            regrowth_period: Some(5),
            base_yield: Some(2),
            percent_chance_extra: Some(10),
            ..crop("Cranberries", CropType::Fruit, Some(Season::Fall), 7, 240, 75)
        },
        CropDefinition {
            regrowth_period: Some(5),
            ..crop("Eggplant", CropType::Vegetable, Some(Season::Fall), 5, 20, 60)
        },
        crop("Fairy Rose", CropType::Flower, Some(Season::Fall), 12, 200, 290),
        CropDefinition {
            regrowth_period: Some(3),
            ..crop("Grape", CropType::Fruit, Some(Season::Fall), 10, 60, 80)
        },
        crop("Pumpkin", CropType::Vegetable, Some(Season::Fall), 13, 100, 320),
        crop("Yam", CropType::Vegetable, Some(Season::Fall), 10, 60, 160),
        crop("Sweet Gem Berry", CropType::Other, Some(Season::Fall), 24, 1000, 3000),

        // ── Cross-season & special ──────────────────────────────────────────
        CropDefinition {
            // Ancient seeds can't be bought; profit equals revenue.
            multiseason: Some(3),
            regrowth_period: Some(7),
            ..crop("Ancient Fruit", CropType::Fruit, Some(Season::Spring), 28, 0, 550)
        },
        CropDefinition {
            multiseason: Some(3),
            special_handling: Some(SpecialHandling::Tea),
            ..crop("Tea Leaves", CropType::Other, Some(Season::Spring), 20, 500, 50)
        },
        // No season: greenhouse-only.
        crop("Cactus Fruit", CropType::Fruit, None, 12, 150, 75),
    ]
}
