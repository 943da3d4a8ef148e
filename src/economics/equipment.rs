use serde::{Deserialize, Serialize};

use crate::assumptions::ModelAssumptions;
use crate::pathway::{EquipmentSizing, Pathway};

/// 설비 규모 지수의 허용 범위.
pub const MIN_SCALING_EXPONENT: f64 = 0.5;
pub const MAX_SCALING_EXPONENT: f64 = 1.0;

/// 개별 설비 항목의 현재 비용.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentCost {
    pub name: String,
    /// 설비비 [USD]
    pub usd: f64,
    /// true면 전력 수요로부터 산정되는 항목이며 직접 편집할 수 없다.
    pub derived: bool,
}

/// 현재 플랜트 규모로 환산된 설비비 목록. 카탈로그 순서를 유지한다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EquipmentCostSet {
    items: Vec<EquipmentCost>,
}

impl EquipmentCostSet {
    pub fn iter(&self) -> impl Iterator<Item = &EquipmentCost> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.items
            .iter()
            .find(|item| item.name.eq_ignore_ascii_case(name))
            .map(|item| item.usd)
    }

    /// 항목 비용을 직접 수정한다.
    ///
    /// 없는 항목이거나 산정 전용 항목(전해조)이면 아무것도 바꾸지 않고 false를
    /// 반환한다. 음수/비유한 값은 0으로 보정한다.
    pub fn set(&mut self, name: &str, usd: f64) -> bool {
        match self
            .items
            .iter_mut()
            .find(|item| item.name.eq_ignore_ascii_case(name))
        {
            Some(item) if !item.derived => {
                item.usd = if usd.is_finite() { usd.max(0.0) } else { 0.0 };
                true
            }
            _ => false,
        }
    }

    /// 설비비 합계 [USD].
    pub fn total(&self) -> f64 {
        self.items.iter().map(|item| item.usd).sum()
    }

    /// 전력 수요가 바뀌었을 때 전해조 항목만 다시 산정한다.
    pub fn refresh_electrolyzer(&mut self, electricity_mwh_per_year: f64, assumptions: &ModelAssumptions) {
        let cost = electrolyzer_cost(electricity_mwh_per_year, assumptions);
        for item in self.items.iter_mut().filter(|item| item.derived) {
            item.usd = cost;
        }
    }
}

/// 설비 규모 환산 입력.
#[derive(Debug, Clone)]
pub struct EquipmentScalingInput {
    /// 현재 플랜트 규모 [kt/년]
    pub plant_size_kt_per_year: f64,
    /// 기준 플랜트 규모 [kt/년]
    pub reference_size_kt_per_year: f64,
    /// 규모 지수 (0.5~1.0, 범위 밖이면 클램프)
    pub scaling_exponent: f64,
    /// 현재 연간 전력 수요 [MWh/년]
    pub electricity_mwh_per_year: f64,
}

/// 규모 환산 계수 (S/S0)^e. 규모가 0 이하이면 1을 쓴다.
pub fn scale_factor(plant_size: f64, reference_size: f64, exponent: f64) -> f64 {
    if plant_size <= 0.0 || reference_size <= 0.0 {
        return 1.0;
    }
    let e = exponent.clamp(MIN_SCALING_EXPONENT, MAX_SCALING_EXPONENT);
    (plant_size / reference_size).powf(e)
}

/// 연간 전력 수요를 평균 전력 [MW]로 환산한다.
pub fn electrolyzer_capacity_mw(electricity_mwh_per_year: f64, assumptions: &ModelAssumptions) -> f64 {
    electricity_mwh_per_year * 1000.0 / assumptions.hours_per_year / 1000.0
}

/// 전해조 설비비. 블록 단가 × 블록 수 × 예비비 배수로 산정하며 규모 지수와 무관하다.
pub fn electrolyzer_cost(electricity_mwh_per_year: f64, assumptions: &ModelAssumptions) -> f64 {
    let mw = electrolyzer_capacity_mw(electricity_mwh_per_year, assumptions);
    let blocks = mw / assumptions.electrolyzer_block_mw;
    (blocks * assumptions.electrolyzer_block_cost_usd * assumptions.electrolyzer_contingency).round()
}

/// 경로의 기준 설비비를 현재 규모로 환산한다.
pub fn scale_equipment(
    pathway: &Pathway,
    input: &EquipmentScalingInput,
    assumptions: &ModelAssumptions,
) -> EquipmentCostSet {
    let factor = scale_factor(
        input.plant_size_kt_per_year,
        input.reference_size_kt_per_year,
        input.scaling_exponent,
    );
    let items = pathway
        .equipment
        .iter()
        .map(|item| match item.sizing {
            EquipmentSizing::PowerLaw => EquipmentCost {
                name: item.name.to_string(),
                usd: (item.baseline_usd * factor).round(),
                derived: false,
            },
            EquipmentSizing::ElectrolyzerCapacity => EquipmentCost {
                name: item.name.to_string(),
                usd: electrolyzer_cost(input.electricity_mwh_per_year, assumptions),
                derived: true,
            },
        })
        .collect();
    EquipmentCostSet { items }
}
