//! Shared types for the almanac engine.
//!
//! This is the type contract. Every domain module imports from here.
//! No domain imports from any other domain directly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ═══════════════════════════════════════════════════════════════════════
// CALENDAR
// ═══════════════════════════════════════════════════════════════════════

pub const DAYS_PER_SEASON: u32 = 28;
pub const SEASONS_PER_YEAR: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    pub fn next(self) -> Self {
        match self {
            Season::Spring => Season::Summer,
            Season::Summer => Season::Fall,
            Season::Fall => Season::Winter,
            Season::Winter => Season::Spring,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Season::Spring => 0,
            Season::Summer => 1,
            Season::Fall => 2,
            Season::Winter => 3,
        }
    }

    /// Season `offset` steps after this one, wrapping around the year.
    pub fn offset(self, offset: usize) -> Self {
        Season::ALL[(self.index() + offset) % Season::ALL.len()]
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        };
        write!(f, "{name}")
    }
}

/// An unknown season string is malformed static data, not a runtime
/// condition to recover from.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown season `{0}`")]
pub struct ParseSeasonError(pub String);

impl FromStr for Season {
    type Err = ParseSeasonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "spring" => Ok(Season::Spring),
            "summer" => Ok(Season::Summer),
            "fall" => Ok(Season::Fall),
            "winter" => Ok(Season::Winter),
            _ => Err(ParseSeasonError(s.to_string())),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// QUALITY
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    #[default]
    Normal,
    Silver,
    Gold,
    Iridium,
}

impl Quality {
    pub const ALL: [Quality; 4] = [
        Quality::Normal,
        Quality::Silver,
        Quality::Gold,
        Quality::Iridium,
    ];

    /// Sell-price multiplier as an integer percentage. Integer math keeps
    /// the truncation exact (550 × 1.25 must be 687, never 687.49999...).
    pub fn price_percent(self) -> u32 {
        match self {
            Quality::Normal => 100,
            Quality::Silver => 125,
            Quality::Gold => 150,
            Quality::Iridium => 200,
        }
    }
}

/// Fixed mapping over the four quality tiers. Always fully populated,
/// never sparse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct QualityVector<T> {
    pub normal: T,
    pub silver: T,
    pub gold: T,
    pub iridium: T,
}

impl<T> QualityVector<T> {
    pub fn from_fn(mut f: impl FnMut(Quality) -> T) -> Self {
        QualityVector {
            normal: f(Quality::Normal),
            silver: f(Quality::Silver),
            gold: f(Quality::Gold),
            iridium: f(Quality::Iridium),
        }
    }

    pub fn get(&self, quality: Quality) -> &T {
        match quality {
            Quality::Normal => &self.normal,
            Quality::Silver => &self.silver,
            Quality::Gold => &self.gold,
            Quality::Iridium => &self.iridium,
        }
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> QualityVector<U> {
        QualityVector {
            normal: f(&self.normal),
            silver: f(&self.silver),
            gold: f(&self.gold),
            iridium: f(&self.iridium),
        }
    }

    pub fn zip<U, V>(
        &self,
        other: &QualityVector<U>,
        mut f: impl FnMut(&T, &U) -> V,
    ) -> QualityVector<V> {
        QualityVector {
            normal: f(&self.normal, &other.normal),
            silver: f(&self.silver, &other.silver),
            gold: f(&self.gold, &other.gold),
            iridium: f(&self.iridium, &other.iridium),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Quality, &T)> {
        Quality::ALL.iter().map(move |&q| (q, self.get(q)))
    }
}

impl QualityVector<f64> {
    pub fn sum(&self) -> f64 {
        self.normal + self.silver + self.gold + self.iridium
    }

    pub fn dot(&self, other: &QualityVector<f64>) -> f64 {
        self.zip(other, |a, b| a * b).sum()
    }
}

/// The distribution used when quality modeling is disabled: everything is
/// base quality.
pub const NO_QUALITY: QualityVector<f64> = QualityVector {
    normal: 1.0,
    silver: 0.0,
    gold: 0.0,
    iridium: 0.0,
};

// ═══════════════════════════════════════════════════════════════════════
// SKILLS & FERTILIZER
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level10Profession {
    /// +40% sell price on jarred/kegged goods.
    Artisan,
    /// -10% growth time.
    Agriculturist,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityFertilizer {
    Basic,
    Quality,
    Deluxe,
}

impl QualityFertilizer {
    /// Fertilizer level as it enters the quality formula.
    pub fn level(self) -> u32 {
        match self {
            QualityFertilizer::Basic => 1,
            QualityFertilizer::Quality => 2,
            QualityFertilizer::Deluxe => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeedGro {
    Basic,
    Deluxe,
    Hyper,
}

impl SpeedGro {
    pub fn growth_bonus(self) -> f64 {
        match self {
            SpeedGro::Basic => 0.10,
            SpeedGro::Deluxe => 0.25,
            SpeedGro::Hyper => 0.33,
        }
    }
}

/// The two fertilizer axes. Only one item is ever applied to a tile, so
/// callers set at most one axis; both may be `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Fertilizer {
    pub quality: Option<QualityFertilizer>,
    pub speedgro: Option<SpeedGro>,
}

// ═══════════════════════════════════════════════════════════════════════
// CROP DEFINITIONS — static data
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CropType {
    Fruit,
    Vegetable,
    Flower,
    Other,
}

impl CropType {
    /// Tiller boosts raw sale prices for these types only.
    pub fn benefits_from_tiller(self) -> bool {
        matches!(self, CropType::Fruit | CropType::Vegetable | CropType::Flower)
    }
}

/// Crops whose harvest schedule doesn't fit the standard regrowth model.
/// An unrecognized tag in external data fails deserialization outright —
/// silently defaulting would produce confidently-wrong profit figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecialHandling {
    Tea,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CropDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub crop_type: CropType,
    /// First season the crop grows in. `None` = greenhouse-only.
    #[serde(default)]
    pub season: Option<Season>,
    /// Number of consecutive seasons starting from `season`. `None` = 1.
    #[serde(default)]
    pub multiseason: Option<u32>,
    pub days_to_grow: u32,
    #[serde(default)]
    pub regrowth_period: Option<u32>,
    pub seed_cost: u32,
    pub sell_price: u32,
    /// Deterministic units per harvest. `None` = 1. (`yield` is reserved
    /// in Rust; the wire name is kept for external tables.)
    #[serde(default, rename = "yield")]
    pub base_yield: Option<u32>,
    /// Chance (0-100) of one extra normal-quality unit per harvest.
    #[serde(default)]
    pub percent_chance_extra: Option<u32>,
    #[serde(default)]
    pub special_handling: Option<SpecialHandling>,
}

// ═══════════════════════════════════════════════════════════════════════
// SCENARIO — per-interaction user input
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ScenarioStart {
    /// Planting on `start_day` (1-28) of `season`.
    Season { season: Season, start_day: u32 },
    /// Season-agnostic growing across `num_seasons` 28-day blocks (>= 1).
    Greenhouse { num_seasons: u32 },
}

/// Everything the user controls. The engine performs no sanitization:
/// callers clamp farming level to [0, 14] and wrap start days to [1, 28].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub start: ScenarioStart,
    pub multiseason_enabled: bool,
    /// `None` = quality modeling off (100% normal).
    pub quality_probabilities: Option<QualityVector<f64>>,
    pub tiller_skill_chosen: bool,
    pub level_10_profession: Option<Level10Profession>,
    pub fertilizer: Fertilizer,
    pub preserves_jar_enabled: bool,
    pub kegs_enabled: bool,
    pub oil_maker_enabled: bool,
}

impl Scenario {
    pub fn is_agriculturist(&self) -> bool {
        self.level_10_profession == Some(Level10Profession::Agriculturist)
    }

    pub fn is_artisan(&self) -> bool {
        self.level_10_profession == Some(Level10Profession::Artisan)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// CALCULATION OUTPUT
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Harvests {
    pub count: u32,
    /// Days actually consumed productively, not the scenario's whole window.
    pub duration_days: u32,
}

/// What a stack of goods sells for. Price and quantity may both be
/// fractional: price from averaging across qualities, quantity from
/// expected-value yield.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proceeds {
    pub name: String,
    pub price: f64,
    pub quantity: f64,
}

impl Proceeds {
    pub fn revenue(&self) -> f64 {
        self.price * self.quantity
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessingType {
    Raw,
    Preserves,
    Keg,
    Oil,
}

impl fmt::Display for ProcessingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProcessingType::Raw => "-",
            ProcessingType::Preserves => "Preserves Jar",
            ProcessingType::Keg => "Keg",
            ProcessingType::Oil => "Oil Maker",
        };
        write!(f, "{name}")
    }
}

/// One fully-evaluated (crop, scenario) pair. Constructed fresh per
/// calculation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropData {
    pub definition: CropDefinition,
    pub useful_days: u32,
    /// Growth period after speed modifiers.
    pub growth_period: u32,
    pub num_harvests: u32,
    pub num_crops: f64,
    /// Raw-sale proceeds per quality tier; always computed, even when a
    /// processing path wins.
    pub crop_proceeds: QualityVector<Proceeds>,
    pub processing_type: ProcessingType,
    pub proceeds: Proceeds,
    pub revenue: f64,
    pub profit: f64,
}

impl CropData {
    /// Profit per productive day; `None` when the crop never matures.
    pub fn daily_profit(&self) -> Option<f64> {
        if self.useful_days == 0 {
            None
        } else {
            Some(self.profit / self.useful_days as f64)
        }
    }
}

/// Outcome of evaluating one crop against a scenario. A two-variant enum
/// rather than a sentinel so every call site is checked exhaustively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Calculation {
    Grown(CropData),
    OutOfSeason,
}

impl Calculation {
    pub fn grown(self) -> Option<CropData> {
        match self {
            Calculation::Grown(data) => Some(data),
            Calculation::OutOfSeason => None,
        }
    }
}
