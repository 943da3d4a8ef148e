use approx::{assert_abs_diff_eq, assert_relative_eq};
use saf_pathway_toolbox::{
    assumptions::ModelAssumptions,
    pathway::PathwayId,
    scenario::{
        pathway_baselines, preset_patch, Preset, Scenario, ScenarioInputs, ScenarioUpdate,
        MIN_PLANT_SIZE_KT,
    },
    units::{Currency, FuelUnit},
};

#[test]
fn default_scenario_is_hefa_baseline() {
    let s = Scenario::default();
    assert_eq!(s.inputs().pathway, PathwayId::Hefa);
    assert_eq!(s.equipment().len(), 6);
    assert_relative_eq!(s.equipment().total(), 305_000_000.0);

    let r = s.derived();
    let expected_pre = 880.0 / 264.172 + 3.25 / 264.172 + 6_800_000.0 / 26_417_200.0 + 0.77;
    assert_abs_diff_eq!(r.total_pre_credit, expected_pre, epsilon = 1e-3);
    assert_relative_eq!(
        r.abatement_cost_per_tonne.unwrap(),
        (r.total_post_credit - 2.30) / ((10.0 - 2.8) / 1000.0),
        max_relative = 1e-9
    );
    // 상각비는 참고값이며 합계에 들어가지 않는다
    let sum: f64 = r.components.iter().map(|c| c.usd_per_gal).sum();
    assert_abs_diff_eq!(sum, r.total_pre_credit, epsilon = 1e-9);
    assert!(r.capex_per_gal > 0.0);
}

#[test]
fn currency_change_resets_fx_rate() {
    let mut s = Scenario::default();
    s.set_field(ScenarioUpdate::FxRate(1.10));
    assert_relative_eq!(s.inputs().fx_rate, 1.10);
    s.set_field(ScenarioUpdate::Currency(Currency::Eur));
    assert_relative_eq!(s.inputs().fx_rate, 0.92);
    s.set_field(ScenarioUpdate::FxRate(0.0));
    assert!(s.inputs().fx_rate > 0.0);
}

#[test]
fn invalid_values_are_clamped() {
    let mut s = Scenario::default();
    s.set_field(ScenarioUpdate::PlantSize(0.0));
    assert_eq!(s.inputs().plant_size_kt_per_year, MIN_PLANT_SIZE_KT);
    s.set_field(ScenarioUpdate::BlendPercent(140.0));
    assert_eq!(s.inputs().blend_percent, 100.0);
    s.set_field(ScenarioUpdate::FeedstockPrice(-10.0));
    assert_eq!(s.inputs().feedstock_price_per_ton, 0.0);
    s.set_field(ScenarioUpdate::HydrogenPrice(f64::NAN));
    assert_eq!(s.inputs().hydrogen_price_per_kg, 0.0);
    s.set_field(ScenarioUpdate::ScalingExponent(2.0));
    assert_eq!(s.inputs().scaling_exponent, 1.0);
    s.set_field(ScenarioUpdate::UserCiAdjustment(-1.5));
    assert_eq!(s.inputs().user_ci_adjustment, -1.5);

    let r = s.derived();
    assert!(r.total_pre_credit.is_finite());
    assert!(r.saf_ci >= 0.0);
    assert!(r.abatement >= 0.0);
}

#[test]
fn with_inputs_clamps_requested_values() {
    let inputs = ScenarioInputs {
        plant_size_kt_per_year: -5.0,
        currency: Currency::Jpy,
        fx_rate: 140.0,
        ..ScenarioInputs::default()
    };
    let s = Scenario::with_inputs(inputs, ModelAssumptions::default());
    assert_eq!(s.inputs().plant_size_kt_per_year, MIN_PLANT_SIZE_KT);
    assert_eq!(s.inputs().currency, Currency::Jpy);
    assert_relative_eq!(s.inputs().fx_rate, 140.0);
    assert!(s.equipment().total() < 305_000_000.0);
}

#[test]
fn pathway_switch_updates_baselines_together() {
    let mut s = Scenario::default();
    s.set_field(ScenarioUpdate::Pathway(PathwayId::Ptl));
    assert_eq!(s.inputs().pathway, PathwayId::Ptl);
    assert_relative_eq!(s.inputs().electricity_mwh_per_year, 2_190_000.0);
    assert_relative_eq!(s.inputs().co2_price_per_ton, 120.0);
    assert_relative_eq!(s.equipment().get("Electrolyzer").unwrap(), 171_000_000.0);

    s.select_pathway(PathwayId::PtlDirectAirCapture);
    assert_relative_eq!(s.inputs().co2_price_per_ton, 450.0);
    assert_relative_eq!(s.inputs().electricity_mwh_per_year, 2_628_000.0);
    assert!(s.equipment().get("Direct air capture").is_some());
    assert!(s.equipment().get("RWGS reactor").is_some());
    assert!(s.equipment().get("Hydrotreater").is_none());
}

#[test]
fn non_co2_pathway_keeps_current_co2_price() {
    let mut s = Scenario::default();
    s.select_pathway(PathwayId::Ptl);
    s.set_field(ScenarioUpdate::Co2Price(200.0));
    let baselines = s.select_pathway(PathwayId::Hefa);
    assert_relative_eq!(baselines.co2_price_per_ton, 200.0);
    assert_relative_eq!(s.inputs().co2_price_per_ton, 200.0);
    assert_relative_eq!(s.inputs().electricity_mwh_per_year, 85_000.0);
}

#[test]
fn pathway_baselines_do_not_mutate() {
    let s = Scenario::default();
    let b = pathway_baselines(PathwayId::PtlBiogenicCo2, s.inputs(), s.assumptions());
    assert_relative_eq!(b.co2_price_per_ton, 60.0);
    assert_relative_eq!(b.electricity_mwh_per_year, 1_971_000.0);
    assert_eq!(s.inputs().pathway, PathwayId::Hefa);
}

#[test]
fn manual_equipment_edit_is_overwritten_on_rescale() {
    let mut s = Scenario::default();
    assert!(s.set_equipment_cost("Hydrotreater", 1.0));
    assert_eq!(s.equipment().get("Hydrotreater"), Some(1.0));
    assert_eq!(s.derived().total_equipment_usd, 305_000_000.0 - 118_000_000.0 + 1.0);

    s.set_field(ScenarioUpdate::PlantSize(100.0));
    assert_eq!(s.equipment().get("Hydrotreater"), Some(118_000_000.0));
}

#[test]
fn electrolyzer_follows_power_demand_only() {
    let mut s = Scenario::default();
    s.select_pathway(PathwayId::Ptl);
    assert!(!s.set_equipment_cost("Electrolyzer", 1.0));

    let rwgs = s.equipment().get("RWGS reactor");
    s.set_field(ScenarioUpdate::ElectricityMwh(4_380_000.0));
    assert_relative_eq!(s.equipment().get("Electrolyzer").unwrap(), 342_000_000.0);
    assert_eq!(s.equipment().get("RWGS reactor"), rwgs);

    s.set_field(ScenarioUpdate::ScalingExponent(0.9));
    s.set_field(ScenarioUpdate::PlantSize(300.0));
    assert_relative_eq!(s.equipment().get("Electrolyzer").unwrap(), 342_000_000.0);
}

#[test]
fn grid_addon_applies_to_canonical_ptl_only() {
    let mut s = Scenario::default();
    s.select_pathway(PathwayId::Ptl);
    let r = s.derived();
    assert_relative_eq!(r.ptl_electricity_addon, 0.02 * 35.0);
    assert_relative_eq!(r.saf_ci, 0.9 + 0.7);

    s.select_pathway(PathwayId::PtlBiogenicCo2);
    let r = s.derived();
    assert_eq!(r.ptl_electricity_addon, 0.0);
    assert_relative_eq!(r.saf_ci, 0.7);
}

#[test]
fn presets_patch_expected_fields() {
    let mut s = Scenario::default();
    let patch = s.apply_preset(Preset::CheapFeedstock);
    assert_eq!(patch.feedstock_price_per_ton, Some(600.0));
    assert_relative_eq!(s.inputs().feedstock_price_per_ton, 600.0);
    assert_relative_eq!(s.inputs().co2_price_per_ton, 60.0);

    s.apply_preset(Preset::HighPowerPrice);
    assert_relative_eq!(s.inputs().electricity_price_per_kwh, 0.15);
    s.apply_preset(Preset::GenerousCredits);
    assert_relative_eq!(s.inputs().policy_credit_per_gal, 1.75);

    let before = s.inputs().clone();
    assert!(s.apply_preset(Preset::HighCapex).is_empty());
    assert_eq!(s.inputs(), &before);

    s.apply_preset(Preset::Baseline);
    let defaults = ScenarioInputs::default();
    assert_eq!(s.inputs().feedstock_price_per_ton, defaults.feedstock_price_per_ton);
    assert_eq!(s.inputs().electricity_price_per_kwh, defaults.electricity_price_per_kwh);
    assert_eq!(s.inputs().policy_credit_per_gal, defaults.policy_credit_per_gal);
}

#[test]
fn baseline_preset_uses_pathway_co2_price() {
    let mut s = Scenario::default();
    s.select_pathway(PathwayId::PtlDirectAirCapture);
    s.set_field(ScenarioUpdate::Co2Price(10.0));
    let patch = preset_patch(Preset::Baseline, s.inputs());
    assert_eq!(patch.co2_price_per_ton, Some(450.0));
}

#[test]
fn generous_credit_can_zero_post_credit_total() {
    let mut s = Scenario::default();
    s.set_field(ScenarioUpdate::PolicyCredit(50.0));
    let r = s.derived();
    assert_eq!(r.total_post_credit, 0.0);
    assert!(r.total_pre_credit > 0.0);
}

#[test]
fn blend_extremes_through_scenario() {
    let mut s = Scenario::default();
    s.set_field(ScenarioUpdate::BlendPercent(0.0));
    assert_eq!(s.derived().blended_price_per_gal, 2.30);
    s.set_field(ScenarioUpdate::BlendPercent(100.0));
    let r = s.derived();
    assert_eq!(r.blended_price_per_gal, r.total_post_credit);
}

#[test]
fn display_settings_do_not_change_usd_results() {
    let mut s = Scenario::default();
    let usd = s.derived();
    s.set_field(ScenarioUpdate::Currency(Currency::Krw));
    s.set_field(ScenarioUpdate::DisplayUnit(FuelUnit::Tonne));
    s.set_field(ScenarioUpdate::Density(0.78));
    assert_eq!(s.derived(), usd);
    let conv = s.converter();
    assert_relative_eq!(
        conv.from_display(conv.to_display(usd.total_post_credit)),
        usd.total_post_credit,
        max_relative = 1e-12
    );
}

#[test]
fn preset_and_pathway_names_parse() {
    assert_eq!("cheap-feedstock".parse::<Preset>().unwrap(), Preset::CheapFeedstock);
    assert_eq!("High CAPEX".parse::<Preset>().unwrap(), Preset::HighCapex);
    assert!("turbo".parse::<Preset>().is_err());
    assert_eq!("ptl-dac".parse::<PathwayId>().unwrap(), PathwayId::PtlDirectAirCapture);
    assert_eq!("hefa".parse::<PathwayId>().unwrap(), PathwayId::Hefa);
    assert!("coal".parse::<PathwayId>().is_err());
}

#[test]
fn pathway_switch_seeds_ptl_inputs_from_catalog() {
    let mut s = Scenario::default();
    let ptl = PathwayId::Ptl.pathway().ptl_defaults.unwrap();
    assert_eq!(s.inputs().ptl_electricity_use_kwh_per_gal, ptl.electricity_use_kwh_per_gal);
    assert_eq!(s.inputs().ptl_grid_intensity_kg_per_kwh, ptl.grid_intensity_kg_per_kwh);

    let b = s.select_pathway(PathwayId::PtlDirectAirCapture);
    assert_eq!(b.ptl_electricity_use_kwh_per_gal, Some(38.0));
    assert_eq!(s.inputs().ptl_electricity_use_kwh_per_gal, 38.0);

    s.select_pathway(PathwayId::PtlBiogenicCo2);
    assert_eq!(s.inputs().ptl_electricity_use_kwh_per_gal, 32.0);

    // PtL 기본값이 없는 경로는 사용자가 바꾼 값을 유지한다
    s.set_field(ScenarioUpdate::PtlElectricityUse(41.0));
    s.set_field(ScenarioUpdate::PtlGridIntensity(0.1));
    let b = s.select_pathway(PathwayId::Hefa);
    assert!(b.ptl_electricity_use_kwh_per_gal.is_none());
    assert_eq!(s.inputs().ptl_electricity_use_kwh_per_gal, 41.0);
    assert_eq!(s.inputs().ptl_grid_intensity_kg_per_kwh, 0.1);

    s.select_pathway(PathwayId::Ptl);
    assert_eq!(s.inputs().ptl_electricity_use_kwh_per_gal, 35.0);
    assert_eq!(s.inputs().ptl_grid_intensity_kg_per_kwh, 0.02);
}
