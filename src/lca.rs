//! 탄소집약도(CI)와 감축 비용 계산.

use serde::{Deserialize, Serialize};

/// 감축 비용 계산 입력. CI는 모두 kg CO2e/gal 기준이다.
#[derive(Debug, Clone)]
pub struct AbatementInput {
    /// 경로 기준 CI
    pub baseline_ci: f64,
    /// 수송 가산
    pub transport_addon: f64,
    /// 사용자 조정값 (음수 가능)
    pub user_adjustment: f64,
    /// 전력망 CI 가산을 적용하는 경로인지 여부
    pub applies_grid_addon: bool,
    /// 전력망 탄소집약도 [kg CO2e/kWh]
    pub grid_intensity_kg_per_kwh: f64,
    /// 갤런당 전력 사용량 [kWh/gal]
    pub electricity_use_kwh_per_gal: f64,
    /// 화석 제트연료 CI
    pub fossil_ci: f64,
    /// 크레딧 차감 후 SAF 가격 [USD/gal]
    pub saf_price_per_gal: f64,
    /// 화석 제트연료 가격 [USD/gal]
    pub fossil_price_per_gal: f64,
}

/// 감축 비용 계산 결과.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbatementResult {
    /// 전력망 CI 가산 [kg CO2e/gal]
    pub ptl_electricity_addon: f64,
    /// SAF CI [kg CO2e/gal], 0 이상
    pub saf_ci: f64,
    /// 감축량 [kg CO2e/gal], 0 이상
    pub abatement: f64,
    /// SAF 가격 - 화석 가격 [USD/gal], 음수 가능
    pub saf_premium: f64,
    /// 감축 비용 [USD/t CO2e]. 감축량이 0이면 산정 근거가 없으므로 `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abatement_cost_per_tonne: Option<f64>,
}

/// 전력망 CI 가산을 계산한다. 가산 대상 경로가 아니면 0.
pub fn grid_electricity_addon(input: &AbatementInput) -> f64 {
    if input.applies_grid_addon {
        input.grid_intensity_kg_per_kwh * input.electricity_use_kwh_per_gal
    } else {
        0.0
    }
}

/// SAF CI, 감축량, 감축 비용을 계산한다.
pub fn abatement(input: &AbatementInput) -> AbatementResult {
    let ptl_electricity_addon = grid_electricity_addon(input);
    let saf_ci = (input.baseline_ci
        + input.transport_addon
        + ptl_electricity_addon
        + input.user_adjustment)
        .max(0.0);
    let abatement = (input.fossil_ci - saf_ci).max(0.0);
    let saf_premium = input.saf_price_per_gal - input.fossil_price_per_gal;
    let abatement_cost_per_tonne = if abatement > 0.0 {
        Some(saf_premium / (abatement / 1000.0))
    } else {
        None
    };
    AbatementResult {
        ptl_electricity_addon,
        saf_ci,
        abatement,
        saf_premium,
        abatement_cost_per_tonne,
    }
}
