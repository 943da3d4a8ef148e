use serde::{Deserialize, Serialize};

/// 계산 엔진에 주입되는 전역 가정값.
///
/// 기본값은 기준 밀도에서의 톤-갤런 환산, PEM 전해조 소비전력, 20년 정액 상각을
/// 사용한다. 설정 파일의 `[assumptions]` 섹션으로 덮어쓸 수 있다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelAssumptions {
    /// SAF 1톤당 갤런 [gal/t]
    pub gallons_per_ton: f64,
    /// 수소 1 kg 생산에 필요한 전력 [kWh/kg]
    pub electrolyzer_kwh_per_kg_h2: f64,
    /// 설비비 정액 상각 기간 [년]
    pub amortization_years: f64,
    /// 연간 운전 시간 [h/년]
    pub hours_per_year: f64,
    /// 전해조 블록 용량 [MW]
    pub electrolyzer_block_mw: f64,
    /// 전해조 블록당 설비비 [USD]
    pub electrolyzer_block_cost_usd: f64,
    /// 전해조 예비비 배수 (1.14 = 14% 가산)
    pub electrolyzer_contingency: f64,
}

impl Default for ModelAssumptions {
    fn default() -> Self {
        Self {
            gallons_per_ton: 264.172,
            electrolyzer_kwh_per_kg_h2: 43.4,
            amortization_years: 20.0,
            hours_per_year: 8760.0,
            electrolyzer_block_mw: 5.0,
            electrolyzer_block_cost_usd: 3_000_000.0,
            electrolyzer_contingency: 1.14,
        }
    }
}

impl ModelAssumptions {
    /// 연간 생산량 [kt/년]을 갤런으로 환산한다.
    pub fn annual_gallons(&self, plant_size_kt_per_year: f64) -> f64 {
        plant_size_kt_per_year * 1000.0 * self.gallons_per_ton
    }
}
