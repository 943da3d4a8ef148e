//! 사용자 입력 상태와 그 변경 규칙.
//!
//! 입력값(`ScenarioInputs`)과 설비비 목록(`EquipmentCostSet`)은 항상 한 쌍으로
//! `Scenario`가 소유한다. 모든 변경은 `&mut self` 메서드를 거치며, 잘못된 값은 오류로
//! 돌려보내지 않고 가장 가까운 유효값으로 보정한다.

use serde::{Deserialize, Serialize};

use crate::assumptions::ModelAssumptions;
use crate::conversion::{ConversionError, DisplayConverter};
use crate::economics::equipment::{
    scale_equipment, EquipmentCostSet, EquipmentScalingInput, MAX_SCALING_EXPONENT,
    MIN_SCALING_EXPONENT,
};
use crate::engine::{self, DerivedResults};
use crate::pathway::PathwayId;
use crate::units::{Currency, FuelUnit, DEFAULT_JET_DENSITY_KG_PER_L};

/// 플랜트 규모 하한 [kt/년].
pub const MIN_PLANT_SIZE_KT: f64 = 1.0;
/// 환율 하한. 0이면 역변환이 정의되지 않는다.
pub const MIN_FX_RATE: f64 = 1e-6;
/// 밀도 하한 [kg/L].
pub const MIN_DENSITY_KG_PER_L: f64 = 0.1;

/// 프리셋에서 쓰는 고정값.
pub const CHEAP_FEEDSTOCK_FACTOR: f64 = 0.75;
pub const CHEAP_CO2_PRICE_PER_TON: f64 = 60.0;
pub const HIGH_POWER_PRICE_PER_KWH: f64 = 0.15;
pub const GENEROUS_CREDIT_PER_GAL: f64 = 1.75;

/// 사용자가 조정할 수 있는 전체 입력값. 금액은 USD, 연료 단위는 갤런 기준.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInputs {
    pub currency: Currency,
    /// 1 USD당 표시 통화 단위
    pub fx_rate: f64,
    pub display_unit: FuelUnit,
    /// [kg/L]
    pub density_kg_per_l: f64,
    pub pathway: PathwayId,
    /// [USD/t]
    pub feedstock_price_per_ton: f64,
    /// [t/t SAF]
    pub feedstock_tons_per_ton_saf: f64,
    /// [USD/kg]
    pub hydrogen_price_per_kg: f64,
    /// [kg/t SAF]
    pub hydrogen_kg_per_ton_saf: f64,
    /// [USD/t]
    pub co2_price_per_ton: f64,
    /// [t/t SAF]
    pub co2_tons_per_ton_saf: f64,
    /// [USD/gal]
    pub chemicals_per_gal: f64,
    /// [USD/gal]
    pub om_per_gal: f64,
    /// [USD/gal]
    pub logistics_per_gal: f64,
    /// [USD/gal]
    pub policy_credit_per_gal: f64,
    /// [%]
    pub blend_percent: f64,
    /// [kt/년]
    pub plant_size_kt_per_year: f64,
    /// [MWh/년]
    pub electricity_mwh_per_year: f64,
    /// [USD/kWh]
    pub electricity_price_per_kwh: f64,
    pub scaling_exponent: f64,
    /// [kt/년]
    pub reference_size_kt_per_year: f64,
    /// [USD/gal]
    pub fossil_price_per_gal: f64,
    /// [kg CO2e/gal]
    pub fossil_ci: f64,
    /// [kg CO2e/gal]
    pub transport_addon: f64,
    /// [kg CO2e/gal]
    pub user_ci_adjustment: f64,
    /// [kg CO2e/kWh]
    pub ptl_grid_intensity_kg_per_kwh: f64,
    /// [kWh/gal]
    pub ptl_electricity_use_kwh_per_gal: f64,
}

impl Default for ScenarioInputs {
    fn default() -> Self {
        let hefa = PathwayId::Hefa.pathway();
        let ptl = PathwayId::Ptl.pathway().ptl_defaults;
        Self {
            currency: Currency::Usd,
            fx_rate: Currency::Usd.default_fx_rate(),
            display_unit: FuelUnit::Gallon,
            density_kg_per_l: DEFAULT_JET_DENSITY_KG_PER_L,
            pathway: hefa.id,
            feedstock_price_per_ton: 800.0,
            feedstock_tons_per_ton_saf: 1.1,
            hydrogen_price_per_kg: 6.5,
            hydrogen_kg_per_ton_saf: 0.5,
            co2_price_per_ton: 120.0,
            co2_tons_per_ton_saf: 3.2,
            chemicals_per_gal: 0.12,
            om_per_gal: 0.35,
            logistics_per_gal: 0.30,
            policy_credit_per_gal: 0.50,
            blend_percent: 30.0,
            plant_size_kt_per_year: 100.0,
            electricity_mwh_per_year: hefa.baseline_electricity_mwh_per_year,
            electricity_price_per_kwh: 0.08,
            scaling_exponent: 0.6,
            reference_size_kt_per_year: 100.0,
            fossil_price_per_gal: 2.30,
            fossil_ci: 10.0,
            transport_addon: 0.0,
            user_ci_adjustment: 0.0,
            ptl_grid_intensity_kg_per_kwh: ptl.map_or(0.0, |d| d.grid_intensity_kg_per_kwh),
            ptl_electricity_use_kwh_per_gal: ptl.map_or(0.0, |d| d.electricity_use_kwh_per_gal),
        }
    }
}

impl ScenarioInputs {
    /// 현재 통화/단위/밀도로 표시 변환기를 만든다.
    pub fn converter(&self) -> DisplayConverter {
        DisplayConverter::new(self.currency, self.fx_rate, self.display_unit, self.density_kg_per_l)
    }
}

/// 입력 필드 하나의 변경 요청.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScenarioUpdate {
    /// 통화 변경. 환율은 해당 통화의 기본값으로 초기화된다.
    Currency(Currency),
    FxRate(f64),
    DisplayUnit(FuelUnit),
    Density(f64),
    Pathway(PathwayId),
    FeedstockPrice(f64),
    FeedstockRatio(f64),
    HydrogenPrice(f64),
    HydrogenRatio(f64),
    Co2Price(f64),
    Co2Ratio(f64),
    Chemicals(f64),
    OperationsMaintenance(f64),
    Logistics(f64),
    PolicyCredit(f64),
    BlendPercent(f64),
    PlantSize(f64),
    ElectricityMwh(f64),
    ElectricityPrice(f64),
    ScalingExponent(f64),
    ReferenceSize(f64),
    FossilPrice(f64),
    FossilCi(f64),
    TransportAddon(f64),
    UserCiAdjustment(f64),
    PtlGridIntensity(f64),
    PtlElectricityUse(f64),
}

/// 하한 이상으로 보정한다. 비유한 값은 하한으로 본다.
fn at_least(value: f64, min: f64) -> f64 {
    if value.is_finite() {
        value.max(min)
    } else {
        min
    }
}

fn within(value: f64, min: f64, max: f64) -> f64 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        min
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// 경로 전환 시 함께 바뀌는 기준값 묶음.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathwayBaselines {
    pub equipment_costs: EquipmentCostSet,
    /// [MWh/년]
    pub electricity_mwh_per_year: f64,
    /// [USD/t]
    pub co2_price_per_ton: f64,
    /// PtL 계열 경로만 값을 가진다. `None`이면 현재 입력을 유지한다. [kg CO2e/kWh]
    pub ptl_grid_intensity_kg_per_kwh: Option<f64>,
    /// [kWh/gal]
    pub ptl_electricity_use_kwh_per_gal: Option<f64>,
}

/// 이름이 붙은 입력 프리셋.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Preset {
    Baseline,
    CheapFeedstock,
    HighCapex,
    HighPowerPrice,
    GenerousCredits,
}

impl Preset {
    pub const ALL: [Preset; 5] = [
        Preset::Baseline,
        Preset::CheapFeedstock,
        Preset::HighCapex,
        Preset::HighPowerPrice,
        Preset::GenerousCredits,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Baseline => "Baseline",
            Preset::CheapFeedstock => "Cheap feedstock",
            Preset::HighCapex => "High CAPEX",
            Preset::HighPowerPrice => "High power price",
            Preset::GenerousCredits => "Generous credits",
        }
    }
}

impl std::str::FromStr for Preset {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        match key.as_str() {
            "baseline" => Ok(Preset::Baseline),
            "cheapfeedstock" => Ok(Preset::CheapFeedstock),
            "highcapex" => Ok(Preset::HighCapex),
            "highpowerprice" => Ok(Preset::HighPowerPrice),
            "generouscredits" => Ok(Preset::GenerousCredits),
            _ => Err(ConversionError::UnknownPreset(s.to_string())),
        }
    }
}

/// 일부 입력만 바꾸는 변경 묶음. `None`인 필드는 그대로 둔다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioPatch {
    pub feedstock_price_per_ton: Option<f64>,
    pub hydrogen_price_per_kg: Option<f64>,
    pub co2_price_per_ton: Option<f64>,
    pub electricity_price_per_kwh: Option<f64>,
    pub policy_credit_per_gal: Option<f64>,
}

impl ScenarioPatch {
    pub fn is_empty(&self) -> bool {
        self == &ScenarioPatch::default()
    }

    fn updates(&self) -> Vec<ScenarioUpdate> {
        [
            self.feedstock_price_per_ton.map(ScenarioUpdate::FeedstockPrice),
            self.hydrogen_price_per_kg.map(ScenarioUpdate::HydrogenPrice),
            self.co2_price_per_ton.map(ScenarioUpdate::Co2Price),
            self.electricity_price_per_kwh.map(ScenarioUpdate::ElectricityPrice),
            self.policy_credit_per_gal.map(ScenarioUpdate::PolicyCredit),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// 현재 입력값 기준으로 프리셋이 바꿀 필드를 계산한다.
pub fn preset_patch(preset: Preset, inputs: &ScenarioInputs) -> ScenarioPatch {
    match preset {
        Preset::Baseline => {
            let defaults = ScenarioInputs::default();
            ScenarioPatch {
                feedstock_price_per_ton: Some(defaults.feedstock_price_per_ton),
                hydrogen_price_per_kg: Some(defaults.hydrogen_price_per_kg),
                co2_price_per_ton: Some(
                    inputs
                        .pathway
                        .pathway()
                        .baseline_co2_price()
                        .unwrap_or(defaults.co2_price_per_ton),
                ),
                electricity_price_per_kwh: Some(defaults.electricity_price_per_kwh),
                policy_credit_per_gal: Some(defaults.policy_credit_per_gal),
            }
        }
        Preset::CheapFeedstock => ScenarioPatch {
            feedstock_price_per_ton: Some(inputs.feedstock_price_per_ton * CHEAP_FEEDSTOCK_FACTOR),
            co2_price_per_ton: Some(CHEAP_CO2_PRICE_PER_TON),
            ..ScenarioPatch::default()
        },
        // 설비비는 이미 현재 설비 목록에 반영되어 있다
        Preset::HighCapex => ScenarioPatch::default(),
        Preset::HighPowerPrice => ScenarioPatch {
            electricity_price_per_kwh: Some(HIGH_POWER_PRICE_PER_KWH),
            ..ScenarioPatch::default()
        },
        Preset::GenerousCredits => ScenarioPatch {
            policy_credit_per_gal: Some(GENEROUS_CREDIT_PER_GAL),
            ..ScenarioPatch::default()
        },
    }
}

/// 입력값과 설비비 목록의 한 쌍. 단일 소유자만 변경한다.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    inputs: ScenarioInputs,
    equipment: EquipmentCostSet,
    assumptions: ModelAssumptions,
}

impl Default for Scenario {
    fn default() -> Self {
        Self::new(ModelAssumptions::default())
    }
}

impl Scenario {
    /// 기본 입력값과 기본 경로 설비비로 시나리오를 만든다.
    pub fn new(assumptions: ModelAssumptions) -> Self {
        Self::with_inputs(ScenarioInputs::default(), assumptions)
    }

    /// 주어진 입력값으로 시나리오를 만든다. 입력값은 모두 보정되고, 설비비는 현재
    /// 규모/전력 수요 기준으로 새로 환산된다.
    pub fn with_inputs(inputs: ScenarioInputs, assumptions: ModelAssumptions) -> Self {
        let requested = inputs.clone();
        let mut scenario = Self {
            inputs,
            equipment: EquipmentCostSet::default(),
            assumptions,
        };
        // 통화 변경은 환율을 초기화하므로 환율은 그 뒤에 적용한다
        for update in [
            ScenarioUpdate::Currency(requested.currency),
            ScenarioUpdate::FxRate(requested.fx_rate),
            ScenarioUpdate::Density(requested.density_kg_per_l),
            ScenarioUpdate::FeedstockPrice(requested.feedstock_price_per_ton),
            ScenarioUpdate::FeedstockRatio(requested.feedstock_tons_per_ton_saf),
            ScenarioUpdate::HydrogenPrice(requested.hydrogen_price_per_kg),
            ScenarioUpdate::HydrogenRatio(requested.hydrogen_kg_per_ton_saf),
            ScenarioUpdate::Co2Price(requested.co2_price_per_ton),
            ScenarioUpdate::Co2Ratio(requested.co2_tons_per_ton_saf),
            ScenarioUpdate::Chemicals(requested.chemicals_per_gal),
            ScenarioUpdate::OperationsMaintenance(requested.om_per_gal),
            ScenarioUpdate::Logistics(requested.logistics_per_gal),
            ScenarioUpdate::PolicyCredit(requested.policy_credit_per_gal),
            ScenarioUpdate::BlendPercent(requested.blend_percent),
            ScenarioUpdate::ElectricityPrice(requested.electricity_price_per_kwh),
            ScenarioUpdate::FossilPrice(requested.fossil_price_per_gal),
            ScenarioUpdate::FossilCi(requested.fossil_ci),
            ScenarioUpdate::TransportAddon(requested.transport_addon),
            ScenarioUpdate::UserCiAdjustment(requested.user_ci_adjustment),
            ScenarioUpdate::PtlGridIntensity(requested.ptl_grid_intensity_kg_per_kwh),
            ScenarioUpdate::PtlElectricityUse(requested.ptl_electricity_use_kwh_per_gal),
            ScenarioUpdate::ReferenceSize(requested.reference_size_kt_per_year),
            ScenarioUpdate::ScalingExponent(requested.scaling_exponent),
            ScenarioUpdate::PlantSize(requested.plant_size_kt_per_year),
            ScenarioUpdate::ElectricityMwh(requested.electricity_mwh_per_year),
        ] {
            scenario.set_field(update);
        }
        scenario.rescale_equipment();
        scenario
    }

    pub fn inputs(&self) -> &ScenarioInputs {
        &self.inputs
    }

    pub fn equipment(&self) -> &EquipmentCostSet {
        &self.equipment
    }

    pub fn assumptions(&self) -> &ModelAssumptions {
        &self.assumptions
    }

    pub fn converter(&self) -> DisplayConverter {
        self.inputs.converter()
    }

    /// 필드 하나를 변경한다. 값은 유효 범위로 보정되며, 설비비 등 의존 상태도 함께
    /// 갱신된다.
    pub fn set_field(&mut self, update: ScenarioUpdate) -> &ScenarioInputs {
        let inputs = &mut self.inputs;
        match update {
            ScenarioUpdate::Currency(currency) => {
                inputs.currency = currency;
                inputs.fx_rate = currency.default_fx_rate();
            }
            ScenarioUpdate::FxRate(v) => inputs.fx_rate = at_least(v, MIN_FX_RATE),
            ScenarioUpdate::DisplayUnit(unit) => inputs.display_unit = unit,
            ScenarioUpdate::Density(v) => inputs.density_kg_per_l = at_least(v, MIN_DENSITY_KG_PER_L),
            ScenarioUpdate::Pathway(id) => {
                self.select_pathway(id);
            }
            ScenarioUpdate::FeedstockPrice(v) => inputs.feedstock_price_per_ton = at_least(v, 0.0),
            ScenarioUpdate::FeedstockRatio(v) => inputs.feedstock_tons_per_ton_saf = at_least(v, 0.0),
            ScenarioUpdate::HydrogenPrice(v) => inputs.hydrogen_price_per_kg = at_least(v, 0.0),
            ScenarioUpdate::HydrogenRatio(v) => inputs.hydrogen_kg_per_ton_saf = at_least(v, 0.0),
            ScenarioUpdate::Co2Price(v) => inputs.co2_price_per_ton = at_least(v, 0.0),
            ScenarioUpdate::Co2Ratio(v) => inputs.co2_tons_per_ton_saf = at_least(v, 0.0),
            ScenarioUpdate::Chemicals(v) => inputs.chemicals_per_gal = at_least(v, 0.0),
            ScenarioUpdate::OperationsMaintenance(v) => inputs.om_per_gal = at_least(v, 0.0),
            ScenarioUpdate::Logistics(v) => inputs.logistics_per_gal = at_least(v, 0.0),
            ScenarioUpdate::PolicyCredit(v) => inputs.policy_credit_per_gal = at_least(v, 0.0),
            ScenarioUpdate::BlendPercent(v) => inputs.blend_percent = within(v, 0.0, 100.0),
            ScenarioUpdate::PlantSize(v) => {
                inputs.plant_size_kt_per_year = at_least(v, MIN_PLANT_SIZE_KT);
                self.rescale_equipment();
            }
            ScenarioUpdate::ElectricityMwh(v) => {
                inputs.electricity_mwh_per_year = at_least(v, 0.0);
                let mwh = inputs.electricity_mwh_per_year;
                self.equipment.refresh_electrolyzer(mwh, &self.assumptions);
            }
            ScenarioUpdate::ElectricityPrice(v) => {
                inputs.electricity_price_per_kwh = at_least(v, 0.0)
            }
            ScenarioUpdate::ScalingExponent(v) => {
                inputs.scaling_exponent = within(v, MIN_SCALING_EXPONENT, MAX_SCALING_EXPONENT);
                self.rescale_equipment();
            }
            ScenarioUpdate::ReferenceSize(v) => {
                inputs.reference_size_kt_per_year = at_least(v, 0.0);
                self.rescale_equipment();
            }
            ScenarioUpdate::FossilPrice(v) => inputs.fossil_price_per_gal = at_least(v, 0.0),
            ScenarioUpdate::FossilCi(v) => inputs.fossil_ci = at_least(v, 0.0),
            ScenarioUpdate::TransportAddon(v) => inputs.transport_addon = at_least(v, 0.0),
            ScenarioUpdate::UserCiAdjustment(v) => inputs.user_ci_adjustment = finite_or_zero(v),
            ScenarioUpdate::PtlGridIntensity(v) => {
                inputs.ptl_grid_intensity_kg_per_kwh = at_least(v, 0.0)
            }
            ScenarioUpdate::PtlElectricityUse(v) => {
                inputs.ptl_electricity_use_kwh_per_gal = at_least(v, 0.0)
            }
        }
        &self.inputs
    }

    /// 경로를 전환한다. 기준 전력 수요, 기준 CO2 가격, PtL 기본값, 설비비를 모두 계산한 뒤 한 번에
    /// 반영하므로 중간 상태가 관찰되지 않는다. 수동 편집한 설비비는 덮어쓴다.
    pub fn select_pathway(&mut self, id: PathwayId) -> PathwayBaselines {
        let baselines = pathway_baselines(id, &self.inputs, &self.assumptions);
        self.inputs.pathway = id;
        self.inputs.electricity_mwh_per_year = baselines.electricity_mwh_per_year;
        self.inputs.co2_price_per_ton = baselines.co2_price_per_ton;
        if let Some(v) = baselines.ptl_grid_intensity_kg_per_kwh {
            self.inputs.ptl_grid_intensity_kg_per_kwh = v;
        }
        if let Some(v) = baselines.ptl_electricity_use_kwh_per_gal {
            self.inputs.ptl_electricity_use_kwh_per_gal = v;
        }
        self.equipment = baselines.equipment_costs.clone();
        baselines
    }

    /// 프리셋을 적용하고 실제로 바뀐 필드 묶음을 반환한다.
    pub fn apply_preset(&mut self, preset: Preset) -> ScenarioPatch {
        let patch = preset_patch(preset, &self.inputs);
        self.apply_patch(&patch);
        patch
    }

    pub fn apply_patch(&mut self, patch: &ScenarioPatch) -> &ScenarioInputs {
        for update in patch.updates() {
            self.set_field(update);
        }
        &self.inputs
    }

    /// 설비 항목 하나를 직접 수정한다. 전해조 항목과 없는 항목은 거부된다.
    /// 규모/지수/경로가 바뀌면 수동 편집값은 다시 덮어써진다.
    pub fn set_equipment_cost(&mut self, name: &str, usd: f64) -> bool {
        self.equipment.set(name, usd)
    }

    /// 현재 입력 전체로 파생값을 다시 계산한다.
    pub fn derived(&self) -> DerivedResults {
        engine::compute_all(&self.inputs, &self.equipment, &self.assumptions)
    }

    fn rescale_equipment(&mut self) {
        self.equipment = scale_equipment(
            self.inputs.pathway.pathway(),
            &scaling_input(&self.inputs, self.inputs.electricity_mwh_per_year),
            &self.assumptions,
        );
    }
}

fn scaling_input(inputs: &ScenarioInputs, electricity_mwh_per_year: f64) -> EquipmentScalingInput {
    EquipmentScalingInput {
        plant_size_kt_per_year: inputs.plant_size_kt_per_year,
        reference_size_kt_per_year: inputs.reference_size_kt_per_year,
        scaling_exponent: inputs.scaling_exponent,
        electricity_mwh_per_year,
    }
}

/// 경로 전환 시 적용될 기준값을 상태 변경 없이 계산한다.
///
/// CO2 원료를 쓰지 않는 경로는 현재 CO2 가격과 PtL 입력을 그대로 둔다.
pub fn pathway_baselines(
    id: PathwayId,
    inputs: &ScenarioInputs,
    assumptions: &ModelAssumptions,
) -> PathwayBaselines {
    let pathway = id.pathway();
    let electricity_mwh_per_year = pathway.baseline_electricity_mwh_per_year;
    let equipment_costs = scale_equipment(
        pathway,
        &scaling_input(inputs, electricity_mwh_per_year),
        assumptions,
    );
    PathwayBaselines {
        equipment_costs,
        electricity_mwh_per_year,
        co2_price_per_ton: pathway
            .baseline_co2_price()
            .unwrap_or(inputs.co2_price_per_ton),
        ptl_grid_intensity_kg_per_kwh: pathway.ptl_defaults.map(|d| d.grid_intensity_kg_per_kwh),
        ptl_electricity_use_kwh_per_gal: pathway
            .ptl_defaults
            .map(|d| d.electricity_use_kwh_per_gal),
    }
}
