//! 입력 전체로부터 파생값을 한 번에 계산한다.
//!
//! 관찰자 연쇄 대신 순수 함수 하나로 의존 관계를 고정한다:
//! 설비비 → 상각 / 생산비 → 혼합 가격, 그리고 생산비 → 감축 비용.

use serde::{Deserialize, Serialize};

use crate::assumptions::ModelAssumptions;
use crate::economics::{
    amortize, blend_price, production_cost, BlendInput, CapexInput, CostComponent,
    EquipmentCostSet, ProductionCostInput,
};
use crate::lca::{self, AbatementInput};
use crate::pathway::PathwayId;
use crate::scenario::ScenarioInputs;

/// 화면/보고서에 필요한 모든 파생값. 금액은 USD/gal 기준이다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedResults {
    pub pathway: PathwayId,
    pub total_pre_credit: f64,
    pub total_post_credit: f64,
    pub electricity_per_gal: f64,
    /// [gal/년]
    pub annual_gallons: f64,
    /// [USD]
    pub total_equipment_usd: f64,
    /// [USD/년]
    pub annual_debt_service: f64,
    /// 참고값. 생산비 합계에 포함되지 않는다.
    pub capex_per_gal: f64,
    pub blended_price_per_gal: f64,
    pub premium_percent: f64,
    /// [kg CO2e/gal]
    pub ptl_electricity_addon: f64,
    /// [kg CO2e/gal]
    pub saf_ci: f64,
    /// [kg CO2e/gal]
    pub abatement: f64,
    pub saf_premium: f64,
    /// [USD/t CO2e]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abatement_cost_per_tonne: Option<f64>,
    pub components: Vec<CostComponent>,
}

/// 현재 입력값과 설비비 목록으로 모든 파생값을 계산한다.
pub fn compute_all(
    inputs: &ScenarioInputs,
    equipment: &EquipmentCostSet,
    assumptions: &ModelAssumptions,
) -> DerivedResults {
    let pathway = inputs.pathway.pathway();

    let cost = production_cost(
        pathway,
        &ProductionCostInput {
            feedstock_price_per_ton: inputs.feedstock_price_per_ton,
            feedstock_tons_per_ton_saf: inputs.feedstock_tons_per_ton_saf,
            hydrogen_price_per_kg: inputs.hydrogen_price_per_kg,
            hydrogen_kg_per_ton_saf: inputs.hydrogen_kg_per_ton_saf,
            co2_price_per_ton: inputs.co2_price_per_ton,
            co2_tons_per_ton_saf: inputs.co2_tons_per_ton_saf,
            electricity_price_per_kwh: inputs.electricity_price_per_kwh,
            plant_electricity_mwh_per_year: inputs.electricity_mwh_per_year,
            plant_size_kt_per_year: inputs.plant_size_kt_per_year,
            chemicals_per_gal: inputs.chemicals_per_gal,
            om_per_gal: inputs.om_per_gal,
            logistics_per_gal: inputs.logistics_per_gal,
            policy_credit_per_gal: inputs.policy_credit_per_gal,
        },
        assumptions,
    );

    let total_equipment_usd = equipment.total();
    let capex = amortize(
        CapexInput {
            total_equipment_usd,
            annual_gallons: cost.annual_gallons,
        },
        assumptions,
    );

    let blend = blend_price(BlendInput {
        saf_price_per_gal: cost.total_post_credit,
        fossil_price_per_gal: inputs.fossil_price_per_gal,
        blend_percent: inputs.blend_percent,
    });

    let lca = lca::abatement(&AbatementInput {
        baseline_ci: pathway.baseline_ci_kg_per_gal,
        transport_addon: inputs.transport_addon,
        user_adjustment: inputs.user_ci_adjustment,
        applies_grid_addon: pathway.grid_ci_addon,
        grid_intensity_kg_per_kwh: inputs.ptl_grid_intensity_kg_per_kwh,
        electricity_use_kwh_per_gal: inputs.ptl_electricity_use_kwh_per_gal,
        fossil_ci: inputs.fossil_ci,
        saf_price_per_gal: cost.total_post_credit,
        fossil_price_per_gal: inputs.fossil_price_per_gal,
    });

    DerivedResults {
        pathway: pathway.id,
        total_pre_credit: cost.total_pre_credit,
        total_post_credit: cost.total_post_credit,
        electricity_per_gal: cost.electricity_per_gal,
        annual_gallons: cost.annual_gallons,
        total_equipment_usd,
        annual_debt_service: capex.annual_debt_service,
        capex_per_gal: capex.capex_per_gal,
        blended_price_per_gal: blend.blended_price_per_gal,
        premium_percent: blend.premium_percent,
        ptl_electricity_addon: lca.ptl_electricity_addon,
        saf_ci: lca.saf_ci,
        abatement: lca.abatement,
        saf_premium: lca.saf_premium,
        abatement_cost_per_tonne: lca.abatement_cost_per_tonne,
        components: cost.components,
    }
}
