use crate::units::*;

/// 코드 문자열 해석 시 발생 가능한 오류.
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    #[error("알 수 없는 단위: {0}")]
    UnknownUnit(String),
    /// 알 수 없는 통화 코드
    #[error("알 수 없는 통화: {0}")]
    UnknownCurrency(String),
    /// 알 수 없는 경로 코드
    #[error("알 수 없는 생산 경로: {0}")]
    UnknownPathway(String),
    /// 알 수 없는 프리셋 이름
    #[error("알 수 없는 프리셋: {0}")]
    UnknownPreset(String),
}

/// 내부 기준(USD/gal)과 사용자 표시 단위(통화/물리 단위) 사이를 변환한다.
///
/// 상태를 갖지 않으며 현재 입력값으로부터 매번 새로 만든다. 따라서 밀도나 환율이
/// 바뀌면 이미 표시된 모든 값의 환산 계수도 함께 바뀐다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayConverter {
    pub currency: Currency,
    /// 1 USD당 표시 통화 단위
    pub fx_rate: f64,
    pub unit: FuelUnit,
    /// 연료 밀도 [kg/L]
    pub density_kg_per_l: f64,
}

impl DisplayConverter {
    pub fn new(currency: Currency, fx_rate: f64, unit: FuelUnit, density_kg_per_l: f64) -> Self {
        Self {
            currency,
            fx_rate,
            unit,
            density_kg_per_l,
        }
    }

    /// 1 갤런을 선택 단위로 환산하는 계수.
    pub fn unit_factor(&self) -> f64 {
        unit_factor(self.unit, self.density_kg_per_l)
    }

    /// USD/gal 값을 표시 통화/단위 값으로 변환한다.
    pub fn to_display(&self, usd_per_gal: f64) -> f64 {
        convert_from_usd(usd_per_gal, self.fx_rate) / self.unit_factor()
    }

    /// 표시 통화/단위 값을 USD/gal로 되돌린다.
    pub fn from_display(&self, display_per_unit: f64) -> f64 {
        convert_to_usd(display_per_unit, self.fx_rate) * self.unit_factor()
    }

    /// `EUR/L`처럼 표시 단위 라벨을 만든다.
    pub fn label(&self) -> String {
        format!("{}/{}", self.currency.code(), self.unit.symbol())
    }
}

/// 단위 문자열을 enum으로 변환한다.
///
/// 예시: `gal`, `L`, `kg`, `t`, `tonne`.
pub fn parse_fuel_unit(s: &str) -> Result<FuelUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "gal" | "gallon" | "usgal" => Ok(FuelUnit::Gallon),
        "l" | "liter" | "litre" => Ok(FuelUnit::Liter),
        "kg" | "kilogram" => Ok(FuelUnit::Kilogram),
        "t" | "tonne" | "ton" | "mt" => Ok(FuelUnit::Tonne),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

/// 통화 코드를 enum으로 변환한다.
pub fn parse_currency(s: &str) -> Result<Currency, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "usd" | "$" => Ok(Currency::Usd),
        "eur" | "€" => Ok(Currency::Eur),
        "gbp" | "£" => Ok(Currency::Gbp),
        "jpy" | "¥" => Ok(Currency::Jpy),
        "krw" | "₩" => Ok(Currency::Krw),
        _ => Err(ConversionError::UnknownCurrency(s.to_string())),
    }
}
