//! SAF 생산 경로 참조 데이터.
//!
//! 경로별 기준값(비용 비중 템플릿, 기준 탄소집약도, 기준 설비비, 기준 전력 수요)은
//! 프로세스 시작 시 정의되며 이후 변경되지 않는다. 경로 전환은 여기서 값을 읽어
//! 시나리오 상태로 전파하는 것으로만 이루어진다.

pub mod catalog;

use serde::{Deserialize, Serialize};

use crate::conversion::ConversionError;

/// 생산 경로 식별자.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathwayId {
    /// Hydroprocessed Esters and Fatty Acids
    Hefa,
    /// Alcohol-to-Jet
    AlcoholToJet,
    /// 바이오매스 가스화 + Fischer-Tropsch
    FischerTropsch,
    /// Power-to-Liquids (e-fuels) 표준 경로
    Ptl,
    /// 바이오매스 유래 CO2를 쓰는 신규 e-SAF
    PtlBiogenicCo2,
    /// 직접공기포집(DAC) CO2를 쓰는 신규 e-SAF
    PtlDirectAirCapture,
}

impl PathwayId {
    pub const ALL: [PathwayId; 6] = [
        PathwayId::Hefa,
        PathwayId::AlcoholToJet,
        PathwayId::FischerTropsch,
        PathwayId::Ptl,
        PathwayId::PtlBiogenicCo2,
        PathwayId::PtlDirectAirCapture,
    ];

    /// CLI/설정에서 쓰는 짧은 코드.
    pub fn code(&self) -> &'static str {
        match self {
            PathwayId::Hefa => "hefa",
            PathwayId::AlcoholToJet => "atj",
            PathwayId::FischerTropsch => "ft",
            PathwayId::Ptl => "ptl",
            PathwayId::PtlBiogenicCo2 => "ptl-biogenic",
            PathwayId::PtlDirectAirCapture => "ptl-dac",
        }
    }

    /// 카탈로그 레코드를 반환한다.
    pub fn pathway(&self) -> &'static Pathway {
        catalog::lookup(*self)
    }
}

impl std::fmt::Display for PathwayId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.pathway().name)
    }
}

impl std::str::FromStr for PathwayId {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        find(s)
            .map(|p| p.id)
            .ok_or_else(|| ConversionError::UnknownPathway(s.to_string()))
    }
}

/// 원료 비용 항목의 산정 방식.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeedstockModel {
    /// 원료 가격 × 원료 소요량
    Purchased,
    /// CO2 가격 × CO2 소요량. `source_label`이 있으면 비용 항목 이름으로 쓴다.
    Co2 { source_label: Option<&'static str> },
}

/// 수소 공급 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HydrogenSupply {
    /// 외부 구매 수소
    Purchased,
    /// 현장 수전해 수소 (전력 단가로 비용 산정)
    Electrolytic,
}

/// 설비 항목의 규모 환산 규칙.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquipmentSizing {
    /// c0 × (S/S0)^e
    PowerLaw,
    /// 연간 전력 수요로부터 산정하는 전해조 용량. 사용자가 직접 편집할 수 없다.
    ElectrolyzerCapacity,
}

/// 기준 플랜트 규모에서의 설비 항목.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquipmentItem {
    pub name: &'static str,
    /// 기준 규모에서의 설비비 [USD]
    pub baseline_usd: f64,
    pub sizing: EquipmentSizing,
}

/// 표시 전용 비용 비중 템플릿 항목 [%].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostShare {
    pub category: &'static str,
    pub percent: f64,
}

/// PtL 계열 경로의 기본값.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PtlDefaults {
    /// 전력망 탄소집약도 [kg CO2e/kWh]
    pub grid_intensity_kg_per_kwh: f64,
    /// 연료 갤런당 전력 사용량 [kWh/gal]
    pub electricity_use_kwh_per_gal: f64,
    /// 기준 CO2 가격 [USD/t]
    pub co2_price_usd_per_ton: f64,
}

/// 생산 경로 참조 레코드.
#[derive(Debug)]
pub struct Pathway {
    pub id: PathwayId,
    pub name: &'static str,
    pub description: &'static str,
    pub cost_shares: &'static [CostShare],
    /// 기준 탄소집약도 [kg CO2e/gal]
    pub baseline_ci_kg_per_gal: f64,
    pub ptl_defaults: Option<PtlDefaults>,
    pub equipment: &'static [EquipmentItem],
    /// 기준 규모에서의 연간 전력 수요 [MWh/년]
    pub baseline_electricity_mwh_per_year: f64,
    pub feedstock: FeedstockModel,
    pub hydrogen: HydrogenSupply,
    /// 전력망 탄소집약도 가산을 계산하는 경로인지 여부
    pub grid_ci_addon: bool,
}

impl Pathway {
    pub fn uses_co2_feedstock(&self) -> bool {
        matches!(self.feedstock, FeedstockModel::Co2 { .. })
    }

    pub fn uses_electrolytic_hydrogen(&self) -> bool {
        self.hydrogen == HydrogenSupply::Electrolytic
    }

    /// 원료 비용 항목 이름. CO2 공급원이 명시된 경로만 별도 이름을 갖는다.
    pub fn feedstock_label(&self) -> &'static str {
        match self.feedstock {
            FeedstockModel::Co2 {
                source_label: Some(label),
            } => label,
            _ => "Feedstock",
        }
    }

    /// 기준 CO2 가격. CO2 원료를 쓰지 않는 경로는 `None`.
    pub fn baseline_co2_price(&self) -> Option<f64> {
        self.ptl_defaults.map(|d| d.co2_price_usd_per_ton)
    }
}

/// 전체 경로 목록.
pub fn pathways() -> &'static [Pathway] {
    &catalog::PATHWAYS
}

/// 코드 또는 이름으로 경로를 찾는다. 대소문자를 구분하지 않는다.
pub fn find(code: &str) -> Option<&'static Pathway> {
    let code = code.trim();
    catalog::PATHWAYS
        .iter()
        .find(|p| p.id.code().eq_ignore_ascii_case(code) || p.name.eq_ignore_ascii_case(code))
}
