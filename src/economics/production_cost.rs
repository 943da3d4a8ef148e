use serde::{Deserialize, Serialize};

use crate::assumptions::ModelAssumptions;
use crate::pathway::Pathway;

/// 생산비 구성 항목 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CostComponentKind {
    Feedstock,
    Hydrogen,
    Electricity,
    Chemicals,
    OperationsMaintenance,
    Logistics,
}

/// 생산비 구성 항목 하나.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostComponent {
    pub kind: CostComponentKind,
    pub name: String,
    /// [USD/gal]
    pub usd_per_gal: f64,
    /// 크레딧 차감 전 합계 대비 비중 (0~1)
    pub share: f64,
}

/// 갤런당 생산비 계산 입력. 금액은 모두 USD 기준이다.
#[derive(Debug, Clone)]
pub struct ProductionCostInput {
    /// 원료 가격 [USD/t]
    pub feedstock_price_per_ton: f64,
    /// SAF 1톤당 원료 소요량 [t/t]
    pub feedstock_tons_per_ton_saf: f64,
    /// 수소 가격 [USD/kg]
    pub hydrogen_price_per_kg: f64,
    /// SAF 1톤당 수소 소요량 [kg/t]
    pub hydrogen_kg_per_ton_saf: f64,
    /// CO2 가격 [USD/t]
    pub co2_price_per_ton: f64,
    /// SAF 1톤당 CO2 소요량 [t/t]
    pub co2_tons_per_ton_saf: f64,
    /// 전력 단가 [USD/kWh]
    pub electricity_price_per_kwh: f64,
    /// 플랜트 연간 전력 수요 [MWh/년]
    pub plant_electricity_mwh_per_year: f64,
    /// 플랜트 규모 [kt/년]
    pub plant_size_kt_per_year: f64,
    /// [USD/gal]
    pub chemicals_per_gal: f64,
    /// [USD/gal]
    pub om_per_gal: f64,
    /// [USD/gal]
    pub logistics_per_gal: f64,
    /// 정책 크레딧 [USD/gal]
    pub policy_credit_per_gal: f64,
}

/// 생산비 계산 결과.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionCostResult {
    /// 비중 내림차순으로 정렬된 구성 항목
    pub components: Vec<CostComponent>,
    /// 크레딧 차감 전 합계 [USD/gal]
    pub total_pre_credit: f64,
    /// 크레딧 차감 후 합계 [USD/gal], 0 이상
    pub total_post_credit: f64,
    /// 전력비 [USD/gal]
    pub electricity_per_gal: f64,
    /// 연간 SAF 생산량 [gal/년]
    pub annual_gallons: f64,
}

/// 원료(또는 CO2) 비용 [USD/gal].
pub fn feedstock_cost_per_gal(
    pathway: &Pathway,
    input: &ProductionCostInput,
    assumptions: &ModelAssumptions,
) -> f64 {
    if pathway.uses_co2_feedstock() {
        input.co2_price_per_ton * input.co2_tons_per_ton_saf / assumptions.gallons_per_ton
    } else {
        input.feedstock_price_per_ton * input.feedstock_tons_per_ton_saf
            / assumptions.gallons_per_ton
    }
}

/// 수소 비용 [USD/gal]. 수전해 경로는 전력 단가로부터 산정한다.
pub fn hydrogen_cost_per_gal(
    pathway: &Pathway,
    input: &ProductionCostInput,
    assumptions: &ModelAssumptions,
) -> f64 {
    let kg_per_gal = input.hydrogen_kg_per_ton_saf / assumptions.gallons_per_ton;
    if pathway.uses_electrolytic_hydrogen() {
        input.electricity_price_per_kwh * assumptions.electrolyzer_kwh_per_kg_h2 * kg_per_gal
    } else {
        input.hydrogen_price_per_kg * kg_per_gal
    }
}

/// 플랜트 전력비 [USD/gal]. 생산량이 0이면 0.
pub fn electricity_cost_per_gal(input: &ProductionCostInput, assumptions: &ModelAssumptions) -> f64 {
    let gallons = assumptions.annual_gallons(input.plant_size_kt_per_year);
    if gallons > 0.0 {
        input.plant_electricity_mwh_per_year * 1000.0 * input.electricity_price_per_kwh / gallons
    } else {
        0.0
    }
}

/// 여섯 개 구성 항목으로 갤런당 생산비를 계산한다.
///
/// 설비 상각비(CAPEX)는 여기에 포함하지 않는다.
pub fn production_cost(
    pathway: &Pathway,
    input: &ProductionCostInput,
    assumptions: &ModelAssumptions,
) -> ProductionCostResult {
    let hydrogen_label = if pathway.uses_electrolytic_hydrogen() {
        "Hydrogen (electrolysis)"
    } else {
        "Hydrogen"
    };
    let electricity_per_gal = electricity_cost_per_gal(input, assumptions);
    let raw = [
        (
            CostComponentKind::Feedstock,
            pathway.feedstock_label(),
            feedstock_cost_per_gal(pathway, input, assumptions),
        ),
        (
            CostComponentKind::Hydrogen,
            hydrogen_label,
            hydrogen_cost_per_gal(pathway, input, assumptions),
        ),
        (CostComponentKind::Electricity, "Electricity", electricity_per_gal),
        (CostComponentKind::Chemicals, "Chemicals", input.chemicals_per_gal),
        (CostComponentKind::OperationsMaintenance, "O&M", input.om_per_gal),
        (CostComponentKind::Logistics, "Logistics", input.logistics_per_gal),
    ];

    let total_pre_credit: f64 = raw.iter().map(|(_, _, v)| v).sum();
    let mut components: Vec<CostComponent> = raw
        .iter()
        .map(|&(kind, name, usd_per_gal)| CostComponent {
            kind,
            name: name.to_string(),
            usd_per_gal,
            share: if total_pre_credit > 0.0 {
                usd_per_gal / total_pre_credit
            } else {
                0.0
            },
        })
        .collect();
    components.sort_by(|a, b| b.share.total_cmp(&a.share));

    let total_post_credit = (total_pre_credit - input.policy_credit_per_gal).max(0.0);

    ProductionCostResult {
        components,
        total_pre_credit,
        total_post_credit,
        electricity_per_gal,
        annual_gallons: assumptions.annual_gallons(input.plant_size_kt_per_year),
    }
}
