//! # AgroCalc CLI Application
//!
//! Terminal front end for the agronomic calculation engine. Prompts for
//! field dimensions and irrigation parameters, runs the engine, and prints
//! a formatted report plus the JSON form of each result.

use std::io::{self, BufRead, Write};

use agro_core::calculations::area::{self, AreaInput, Shape};
use agro_core::calculations::irrigation::{self, IrrigationInput};
use agro_core::calculations::seeds::{self, SeedsInput};
use agro_core::crops::CropKind;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_crop(prompt: &str) -> CropKind {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return CropKind::Maize;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return CropKind::Maize;
    }

    CropKind::from_code_or_default(input.trim())
}

fn main() {
    println!("AgroCalc CLI - Agronomic Field Calculator");
    println!("=========================================");
    println!();

    let length_m = prompt_f64("Field length (m) [120.0]: ", 120.0);
    let width_m = prompt_f64("Field width (m) [80.0]: ", 80.0);
    let crop = prompt_crop("Crop (maize/soybean/bean/rice/wheat) [maize]: ");
    let row_spacing_cm = prompt_f64("Row spacing (cm) [50.0]: ", 50.0);
    let plant_spacing_cm = prompt_f64("Plant spacing (cm) [20.0]: ", 20.0);
    let et0 = prompt_f64("Evapotranspiration (mm/day) [5.0]: ", 5.0);
    let efficiency = prompt_f64("Irrigation efficiency (%) [80.0]: ", 80.0);
    let precipitation = prompt_f64("Precipitation (mm/day) [1.0]: ", 1.0);

    println!();

    let area_input = AreaInput {
        label: "CLI field".to_string(),
        shape: Shape::Rectangular { length_m, width_m },
    };

    let area_result = match area::calculate(&area_input) {
        Ok(result) => result,
        Err(e) => return report_error(&e),
    };

    let seeds_input = SeedsInput {
        label: "CLI planting".to_string(),
        area_m2: area_result.area_m2,
        crop,
        row_spacing_cm,
        plant_spacing_cm,
    };

    let irrigation_input = IrrigationInput {
        label: "CLI irrigation".to_string(),
        area_m2: area_result.area_m2,
        evapotranspiration_mm_day: et0,
        efficiency_pct: efficiency,
        precipitation_mm_day: precipitation,
    };

    println!("═══════════════════════════════════════");
    println!("  FIELD CALCULATION RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    println!("Area:");
    println!("  {:.2} m² ({:.4} ha)", area_result.area_m2, area_result.area_ha);
    println!("  {:.2} acres, {:.6} km²", area_result.area_acres, area_result.area_km2);
    println!("  Perimeter: {:.2} m", area_result.perimeter_m);
    println!();

    match seeds::calculate(&seeds_input) {
        Ok(result) => {
            println!("Seeds ({}):", crop);
            println!("  Plants per m²:  {:.1}", result.plants_per_m2);
            println!("  Total plants:   {}", result.total_plants);
            println!("  Seeds needed:   {} ({:.2} kg)", result.seeds_needed, result.weight_kg);
            println!("  Estimated cost: R$ {:.2}", result.cost_brl);
            println!();
        }
        Err(e) => return report_error(&e),
    }

    match irrigation::calculate(&irrigation_input) {
        Ok(result) => {
            println!("Irrigation:");
            println!("  Net depth:      {:.1} mm/day", result.net_mm_day);
            println!("  Gross depth:    {:.1} mm/day", result.gross_mm_day);
            println!("  Daily volume:   {:.0} L", result.daily_liters);
            println!("  Weekly volume:  {:.0} L", result.weekly_liters);
            println!("  Monthly volume: {:.0} L", result.monthly_liters);
            println!("  Frequency:      {}", result.frequency);
            println!("  Daily cost:     R$ {:.2}", result.daily_cost_brl);
            println!("  Monthly cost:   R$ {:.2}", result.monthly_cost_brl);
            println!();
            println!("═══════════════════════════════════════");

            println!();
            println!("JSON Output (for API use):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(e) => report_error(&e),
    }
}

fn report_error(e: &agro_core::CalcError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
    std::process::exit(1);
}
