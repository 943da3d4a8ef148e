use std::path::PathBuf;

use saf_pathway_toolbox::{
    config::{load_or_default, Config},
    i18n::Translator,
    report::{render_text, render_toml},
    scenario::{Scenario, ScenarioUpdate},
    units::{Currency, FuelUnit},
};

fn temp_config(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("saf_toolbox_{}_{name}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("temp dir");
    dir.join("config.toml")
}

#[test]
fn toml_report_contains_results() {
    let s = Scenario::default();
    let results = s.derived();
    let text = render_toml(&s, &results).expect("toml report");
    let doc: toml::Table = text.parse().expect("valid toml");
    let res = doc["results"].as_table().expect("results table");
    assert_eq!(res["pathway"].as_str(), Some("Hefa"));
    assert!(res.contains_key("abatement_cost_per_tonne"));
    assert_eq!(res["components"].as_array().map(|a| a.len()), Some(6));
    assert!(doc["inputs"].as_table().is_some());
}

#[test]
fn toml_report_omits_undefined_abatement_cost() {
    let mut s = Scenario::default();
    s.set_field(ScenarioUpdate::FossilCi(1.0));
    let results = s.derived();
    assert!(results.abatement_cost_per_tonne.is_none());
    let text = render_toml(&s, &results).expect("toml report");
    let doc: toml::Table = text.parse().expect("valid toml");
    assert!(!doc["results"]
        .as_table()
        .expect("results table")
        .contains_key("abatement_cost_per_tonne"));
}

#[test]
fn text_report_uses_display_units() {
    let tr = Translator::new("en");
    let mut s = Scenario::default();
    let text = render_text(&s, &s.derived(), &tr);
    assert!(text.contains("HEFA"));
    assert!(text.contains("USD/gal"));
    assert!(text.contains("Annual output: 26417200 gal"));

    s.set_field(ScenarioUpdate::Currency(Currency::Eur));
    s.set_field(ScenarioUpdate::DisplayUnit(FuelUnit::Liter));
    let text = render_text(&s, &s.derived(), &tr);
    assert!(text.contains("EUR/L"));
    assert!(text.contains("EUR/t CO2e"));
    assert!(text.contains("Hydrotreater"));
}

#[test]
fn config_created_when_missing_and_reloaded() {
    let path = temp_config("create");
    let _ = std::fs::remove_file(&path);
    let cfg = load_or_default(&path).expect("default config");
    assert_eq!(cfg, Config::default());
    assert!(path.exists());

    let mut changed = cfg.clone();
    changed.display.currency = Currency::Eur;
    changed.display.unit = FuelUnit::Tonne;
    changed.assumptions.amortization_years = 25.0;
    changed.save(&path).expect("save");

    let reloaded = load_or_default(&path).expect("reload");
    assert_eq!(reloaded, changed);
    let inputs = reloaded.initial_inputs();
    assert_eq!(inputs.currency, Currency::Eur);
    assert_eq!(inputs.fx_rate, 0.92);
    assert_eq!(inputs.display_unit, FuelUnit::Tonne);
}

#[test]
fn partial_config_fills_defaults() {
    let path = temp_config("partial");
    std::fs::write(&path, "language = \"ko\"\n[assumptions]\ngallons_per_ton = 300.0\n")
        .expect("write");
    let cfg = load_or_default(&path).expect("load");
    assert_eq!(cfg.language, "ko");
    assert_eq!(cfg.assumptions.gallons_per_ton, 300.0);
    assert_eq!(cfg.assumptions.amortization_years, 20.0);
    assert_eq!(cfg.display.unit, FuelUnit::Gallon);

    let s = Scenario::with_inputs(cfg.initial_inputs(), cfg.assumptions.clone());
    assert_eq!(s.derived().annual_gallons, 100.0 * 1000.0 * 300.0);
}

#[test]
fn malformed_config_is_an_error() {
    let path = temp_config("broken");
    std::fs::write(&path, "language = [\n").expect("write");
    assert!(load_or_default(&path).is_err());
}
