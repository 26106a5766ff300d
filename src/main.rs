use std::env;
use std::process::ExitCode;
use std::str::FromStr;

use almanac::data;
use almanac::engine;
use almanac::farming::quality;
use almanac::shared::*;

const USAGE: &str = "\
Usage: almanac <season> <start-day> [options]
       almanac greenhouse <num-seasons> [options]

Options:
  --level <0-14>                    farming level (turns on quality modeling)
  --fertilizer <basic|quality|deluxe>
  --speedgro <basic|deluxe|hyper>
  --tiller
  --artisan | --agriculturist
  --jars  --kegs  --oil
  --no-multiseason";

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let scenario = match parse_scenario(&args) {
        Ok(scenario) => scenario,
        Err(message) => {
            eprintln!("error: {message}\n\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    let crops = data::all_crops();
    let mut rows = engine::evaluate_all(&crops, &scenario);
    rows.sort_by(|a, b| b.profit.total_cmp(&a.profit));

    println!(
        "{:<16} {:>8} {:>8}  {:<16} {:>10} {:>10} {:>9}",
        "Crop", "Harvests", "Crops", "Sold as", "Revenue", "Profit", "Gold/day"
    );
    for row in &rows {
        let daily = match row.daily_profit() {
            Some(daily) => format!("{daily:.2}"),
            None => "-".to_string(),
        };
        println!(
            "{:<16} {:>8} {:>8.2}  {:<16} {:>10.0} {:>10.0} {:>9}",
            row.definition.name,
            row.num_harvests,
            row.num_crops,
            row.proceeds.name,
            row.revenue,
            row.profit,
            daily,
        );
    }

    ExitCode::SUCCESS
}

/// Build a scenario from the command line. The engine expects sanitized
/// input, so day and level are clamped here.
fn parse_scenario(args: &[String]) -> Result<Scenario, String> {
    let mut args = args.iter();

    let start = match args.next().map(String::as_str) {
        None => return Err("missing season".to_string()),
        Some("greenhouse") => {
            let value = args.next().ok_or("greenhouse needs a season count")?;
            let num_seasons: u32 =
                value.parse().map_err(|_| format!("bad season count `{value}`"))?;
            if num_seasons == 0 {
                return Err("season count must be at least 1".to_string());
            }
            ScenarioStart::Greenhouse { num_seasons }
        }
        Some(word) => {
            let season = Season::from_str(word).map_err(|e| e.to_string())?;
            let value = args.next().ok_or("missing start day")?;
            let day: u32 = value.parse().map_err(|_| format!("bad start day `{value}`"))?;
            ScenarioStart::Season { season, start_day: day.clamp(1, DAYS_PER_SEASON) }
        }
    };

    let mut scenario = Scenario {
        start,
        multiseason_enabled: true,
        quality_probabilities: None,
        tiller_skill_chosen: false,
        level_10_profession: None,
        fertilizer: Fertilizer::default(),
        preserves_jar_enabled: false,
        kegs_enabled: false,
        oil_maker_enabled: false,
    };
    let mut farming_level = None;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--level" => {
                let value = args.next().ok_or("--level needs a value")?;
                let level: u32 =
                    value.parse().map_err(|_| format!("bad farming level `{value}`"))?;
                farming_level = Some(level.min(14));
            }
            "--fertilizer" => {
                let value = args.next().ok_or("--fertilizer needs a value")?;
                scenario.fertilizer.quality = Some(match value.as_str() {
                    "basic" => QualityFertilizer::Basic,
                    "quality" => QualityFertilizer::Quality,
                    "deluxe" => QualityFertilizer::Deluxe,
                    other => return Err(format!("unknown fertilizer `{other}`")),
                });
            }
            "--speedgro" => {
                let value = args.next().ok_or("--speedgro needs a value")?;
                scenario.fertilizer.speedgro = Some(match value.as_str() {
                    "basic" => SpeedGro::Basic,
                    "deluxe" => SpeedGro::Deluxe,
                    "hyper" => SpeedGro::Hyper,
                    other => return Err(format!("unknown speed-gro `{other}`")),
                });
            }
            "--tiller" => scenario.tiller_skill_chosen = true,
            "--artisan" => scenario.level_10_profession = Some(Level10Profession::Artisan),
            "--agriculturist" => {
                scenario.level_10_profession = Some(Level10Profession::Agriculturist)
            }
            "--jars" => scenario.preserves_jar_enabled = true,
            "--kegs" => scenario.kegs_enabled = true,
            "--oil" => scenario.oil_maker_enabled = true,
            "--no-multiseason" => scenario.multiseason_enabled = false,
            other => return Err(format!("unknown option `{other}`")),
        }
    }

    // Applied after the loop so flag order doesn't matter.
    if let Some(level) = farming_level {
        scenario.quality_probabilities =
            Some(quality::compute_quality(level, scenario.fertilizer.quality));
    }

    Ok(scenario)
}
