use serde::{Deserialize, Serialize};

use crate::assumptions::ModelAssumptions;

/// 설비비 상각 입력.
#[derive(Debug, Clone)]
pub struct CapexInput {
    /// 설비비 합계 [USD]
    pub total_equipment_usd: f64,
    /// 연간 SAF 생산량 [gal/년]
    pub annual_gallons: f64,
}

/// 설비비 상각 결과.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapexResult {
    /// 연간 상환액 [USD/년]
    pub annual_debt_service: f64,
    /// 갤런당 자본비 [USD/gal]
    pub capex_per_gal: f64,
}

/// 정액법으로 갤런당 자본비를 계산한다. 생산량이 0이면 0.
pub fn amortize(input: CapexInput, assumptions: &ModelAssumptions) -> CapexResult {
    let annual_debt_service = if assumptions.amortization_years > 0.0 {
        input.total_equipment_usd / assumptions.amortization_years
    } else {
        0.0
    };
    let capex_per_gal = if input.annual_gallons > 0.0 {
        annual_debt_service / input.annual_gallons
    } else {
        0.0
    };
    CapexResult {
        annual_debt_service,
        capex_per_gal,
    }
}
