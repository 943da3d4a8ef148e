use approx::assert_relative_eq;
use saf_pathway_toolbox::pathway::{self, catalog::ELECTROLYZER_ITEM, EquipmentSizing, PathwayId};

#[test]
fn catalog_covers_every_id() {
    assert_eq!(pathway::pathways().len(), PathwayId::ALL.len());
    for id in PathwayId::ALL {
        assert_eq!(id.pathway().id, id);
        assert_eq!(pathway::find(id.code()).map(|p| p.id), Some(id));
    }
    assert_eq!(pathway::find("hefa").map(|p| p.id), Some(PathwayId::Hefa));
    assert!(pathway::find("coal-to-liquid").is_none());
}

#[test]
fn cost_share_templates_sum_to_100() {
    for p in pathway::pathways() {
        let sum: f64 = p.cost_shares.iter().map(|s| s.percent).sum();
        assert_relative_eq!(sum, 100.0, epsilon = 1e-9);
    }
}

#[test]
fn ptl_family_flags() {
    for p in pathway::pathways() {
        let is_ptl = matches!(
            p.id,
            PathwayId::Ptl | PathwayId::PtlBiogenicCo2 | PathwayId::PtlDirectAirCapture
        );
        assert_eq!(p.ptl_defaults.is_some(), is_ptl, "{}", p.name);
        assert_eq!(p.uses_co2_feedstock(), is_ptl, "{}", p.name);
        assert_eq!(p.uses_electrolytic_hydrogen(), is_ptl, "{}", p.name);
        let electrolyzers = p
            .equipment
            .iter()
            .filter(|e| e.sizing == EquipmentSizing::ElectrolyzerCapacity)
            .count();
        assert_eq!(electrolyzers, usize::from(is_ptl), "{}", p.name);
        assert!(p.baseline_ci_kg_per_gal > 0.0);
    }
    assert!(PathwayId::Ptl.pathway().grid_ci_addon);
    assert!(!PathwayId::PtlBiogenicCo2.pathway().grid_ci_addon);
    assert_eq!(PathwayId::Ptl.pathway().feedstock_label(), "Feedstock");
    assert_eq!(PathwayId::PtlDirectAirCapture.pathway().feedstock_label(), "DAC CO2");
    assert!(PathwayId::Ptl
        .pathway()
        .equipment
        .iter()
        .any(|e| e.name == ELECTROLYZER_ITEM));
}
