use serde::{Deserialize, Serialize};

/// 미국 갤런당 리터.
pub const LITERS_PER_GALLON: f64 = 3.785411784;

/// 제트연료 기준 밀도 [kg/L].
pub const DEFAULT_JET_DENSITY_KG_PER_L: f64 = 0.8;

/// 연료 가격 표시 단위. 내부 기준은 미국 갤런이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FuelUnit {
    Gallon,
    Liter,
    Kilogram,
    Tonne,
}

impl FuelUnit {
    pub const ALL: [FuelUnit; 4] = [
        FuelUnit::Gallon,
        FuelUnit::Liter,
        FuelUnit::Kilogram,
        FuelUnit::Tonne,
    ];

    /// 표시용 약어.
    pub fn symbol(&self) -> &'static str {
        match self {
            FuelUnit::Gallon => "gal",
            FuelUnit::Liter => "L",
            FuelUnit::Kilogram => "kg",
            FuelUnit::Tonne => "t",
        }
    }
}

/// 1 갤런이 선택 단위로 몇 단위인지를 반환한다.
///
/// 질량 단위는 밀도 [kg/L]에 의존한다. 밀도가 바뀌면 kg/t 계수도 즉시 바뀐다.
pub fn unit_factor(unit: FuelUnit, density_kg_per_l: f64) -> f64 {
    match unit {
        FuelUnit::Gallon => 1.0,
        FuelUnit::Liter => LITERS_PER_GALLON,
        FuelUnit::Kilogram => density_kg_per_l * LITERS_PER_GALLON,
        FuelUnit::Tonne => density_kg_per_l * LITERS_PER_GALLON / 1000.0,
    }
}

/// 연료 수량을 다른 단위로 변환한다.
pub fn convert_fuel_quantity(value: f64, from: FuelUnit, to: FuelUnit, density_kg_per_l: f64) -> f64 {
    let gallons = value / unit_factor(from, density_kg_per_l);
    gallons * unit_factor(to, density_kg_per_l)
}
