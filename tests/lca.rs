use approx::{assert_abs_diff_eq, assert_relative_eq};
use saf_pathway_toolbox::lca::{abatement, grid_electricity_addon, AbatementInput};

fn hefa() -> AbatementInput {
    AbatementInput {
        baseline_ci: 2.8,
        transport_addon: 0.0,
        user_adjustment: 0.0,
        applies_grid_addon: false,
        grid_intensity_kg_per_kwh: 0.02,
        electricity_use_kwh_per_gal: 35.0,
        fossil_ci: 10.0,
        saf_price_per_gal: 3.87,
        fossil_price_per_gal: 2.30,
    }
}

#[test]
fn hefa_abatement_cost() {
    let res = abatement(&hefa());
    assert_relative_eq!(res.saf_ci, 2.8);
    assert_relative_eq!(res.abatement, 7.2);
    assert_relative_eq!(res.saf_premium, 3.87 - 2.30);
    let cost = res.abatement_cost_per_tonne.unwrap();
    assert_relative_eq!(cost, (3.87 - 2.30) / (7.2 / 1000.0), max_relative = 1e-12);
}

#[test]
fn grid_addon_only_when_enabled() {
    let mut input = hefa();
    assert_eq!(grid_electricity_addon(&input), 0.0);
    input.applies_grid_addon = true;
    input.baseline_ci = 0.9;
    assert_relative_eq!(grid_electricity_addon(&input), 0.7);
    let res = abatement(&input);
    assert_relative_eq!(res.saf_ci, 1.6);
    assert_relative_eq!(res.ptl_electricity_addon, 0.7);
}

#[test]
fn ci_and_abatement_are_clamped() {
    let mut input = hefa();
    input.user_adjustment = -50.0;
    let res = abatement(&input);
    assert_eq!(res.saf_ci, 0.0);
    assert_relative_eq!(res.abatement, 10.0);

    input.user_adjustment = 20.0;
    let res = abatement(&input);
    assert_eq!(res.abatement, 0.0);
    assert!(res.saf_ci > input.fossil_ci);
}

#[test]
fn no_abatement_means_no_cost() {
    let mut input = hefa();
    input.fossil_ci = 2.8;
    let res = abatement(&input);
    assert_abs_diff_eq!(res.abatement, 0.0);
    assert!(res.abatement_cost_per_tonne.is_none());
}

#[test]
fn cheaper_saf_gives_negative_cost() {
    let mut input = hefa();
    input.saf_price_per_gal = 2.0;
    let res = abatement(&input);
    assert!(res.saf_premium < 0.0);
    assert!(res.abatement_cost_per_tonne.unwrap() < 0.0);
}
