use std::io::{self, BufRead, Write};

use crate::app::AppError;
use crate::conversion::{self, DisplayConverter};
use crate::i18n::{keys, Translator};
use crate::pathway::{self, PathwayId};
use crate::report;
use crate::scenario::{Preset, Scenario, ScenarioInputs, ScenarioUpdate};
use crate::units::{convert_fuel_quantity, FuelUnit};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    SelectPathway,
    EditField,
    ApplyPreset,
    EditEquipment,
    ShowResults,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
/// 입력이 끝나면(EOF) 종료를 선택한 것으로 본다.
pub fn main_menu(tr: &Translator, input: &mut impl BufRead) -> Result<MenuChoice, AppError> {
    for key in [
        keys::MAIN_MENU_TITLE,
        keys::MAIN_MENU_SELECT_PATHWAY,
        keys::MAIN_MENU_EDIT_FIELD,
        keys::MAIN_MENU_APPLY_PRESET,
        keys::MAIN_MENU_EDIT_EQUIPMENT,
        keys::MAIN_MENU_SHOW_RESULTS,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = match read_line(input, tr.t(keys::PROMPT_MENU_SELECT)) {
            Ok(sel) => sel,
            Err(err) if err.is_end_of_input() => return Ok(MenuChoice::Exit),
            Err(err) => return Err(err),
        };
        match sel.trim() {
            "1" => return Ok(MenuChoice::SelectPathway),
            "2" => return Ok(MenuChoice::EditField),
            "3" => return Ok(MenuChoice::ApplyPreset),
            "4" => return Ok(MenuChoice::EditEquipment),
            "5" => return Ok(MenuChoice::ShowResults),
            "6" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 카탈로그의 경로 목록을 출력한다.
pub fn print_pathways(tr: &Translator) {
    println!("{}", tr.t(keys::PATHWAY_LIST_HEADING));
    for (i, p) in pathway::pathways().iter().enumerate() {
        println!(
            "{}) {:<28} [{}] CI {:.1} kg CO2e/gal - {}",
            i + 1,
            p.name,
            p.id.code(),
            p.baseline_ci_kg_per_gal,
            p.description
        );
    }
}

/// 경로 선택 메뉴를 처리한다.
pub fn handle_select_pathway(
    tr: &Translator,
    scenario: &mut Scenario,
    input: &mut impl BufRead,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::PATHWAY_HEADING));
    print_pathways(tr);
    let n = read_index(tr, input, PathwayId::ALL.len())?;
    let Some(id) = n.and_then(|i| PathwayId::ALL.get(i).copied()) else {
        return Ok(());
    };
    let baselines = scenario.select_pathway(id);
    println!("{} {id}", tr.t(keys::PATHWAY_SELECTED));
    println!(
        "  electricity = {:.0} MWh/yr, CO2 = {:.1} USD/t, equipment = {:.0} USD",
        baselines.electricity_mwh_per_year,
        baselines.co2_price_per_ton,
        baselines.equipment_costs.total()
    );
    let shares: Vec<String> = id
        .pathway()
        .cost_shares
        .iter()
        .map(|s| format!("{} {:.0}%", s.category, s.percent))
        .collect();
    println!("  {}", shares.join(", "));
    Ok(())
}

/// 편집 가능한 입력 필드 하나.
struct FieldSpec {
    label: &'static str,
    /// true면 연료 단위당 금액 필드로 표시 통화/단위로 입력받는다.
    per_fuel_unit: bool,
    unit: &'static str,
    current: fn(&ScenarioInputs) -> f64,
    update: fn(f64) -> ScenarioUpdate,
}

#[rustfmt::skip]
const FIELDS: &[FieldSpec] = &[
    FieldSpec { label: "Feedstock price", per_fuel_unit: false, unit: "USD/t", current: |i| i.feedstock_price_per_ton, update: ScenarioUpdate::FeedstockPrice },
    FieldSpec { label: "Feedstock ratio", per_fuel_unit: false, unit: "t/t SAF", current: |i| i.feedstock_tons_per_ton_saf, update: ScenarioUpdate::FeedstockRatio },
    FieldSpec { label: "Hydrogen price", per_fuel_unit: false, unit: "USD/kg", current: |i| i.hydrogen_price_per_kg, update: ScenarioUpdate::HydrogenPrice },
    FieldSpec { label: "Hydrogen ratio", per_fuel_unit: false, unit: "kg/t SAF", current: |i| i.hydrogen_kg_per_ton_saf, update: ScenarioUpdate::HydrogenRatio },
    FieldSpec { label: "CO2 price", per_fuel_unit: false, unit: "USD/t", current: |i| i.co2_price_per_ton, update: ScenarioUpdate::Co2Price },
    FieldSpec { label: "CO2 ratio", per_fuel_unit: false, unit: "t/t SAF", current: |i| i.co2_tons_per_ton_saf, update: ScenarioUpdate::Co2Ratio },
    FieldSpec { label: "Chemicals", per_fuel_unit: true, unit: "", current: |i| i.chemicals_per_gal, update: ScenarioUpdate::Chemicals },
    FieldSpec { label: "O&M", per_fuel_unit: true, unit: "", current: |i| i.om_per_gal, update: ScenarioUpdate::OperationsMaintenance },
    FieldSpec { label: "Logistics", per_fuel_unit: true, unit: "", current: |i| i.logistics_per_gal, update: ScenarioUpdate::Logistics },
    FieldSpec { label: "Policy credit", per_fuel_unit: true, unit: "", current: |i| i.policy_credit_per_gal, update: ScenarioUpdate::PolicyCredit },
    FieldSpec { label: "Fossil jet price", per_fuel_unit: true, unit: "", current: |i| i.fossil_price_per_gal, update: ScenarioUpdate::FossilPrice },
    FieldSpec { label: "Blend ratio", per_fuel_unit: false, unit: "%", current: |i| i.blend_percent, update: ScenarioUpdate::BlendPercent },
    FieldSpec { label: "Plant size", per_fuel_unit: false, unit: "kt/yr", current: |i| i.plant_size_kt_per_year, update: ScenarioUpdate::PlantSize },
    FieldSpec { label: "Reference plant size", per_fuel_unit: false, unit: "kt/yr", current: |i| i.reference_size_kt_per_year, update: ScenarioUpdate::ReferenceSize },
    FieldSpec { label: "Scaling exponent", per_fuel_unit: false, unit: "-", current: |i| i.scaling_exponent, update: ScenarioUpdate::ScalingExponent },
    FieldSpec { label: "Plant electricity", per_fuel_unit: false, unit: "MWh/yr", current: |i| i.electricity_mwh_per_year, update: ScenarioUpdate::ElectricityMwh },
    FieldSpec { label: "Electricity price", per_fuel_unit: false, unit: "USD/kWh", current: |i| i.electricity_price_per_kwh, update: ScenarioUpdate::ElectricityPrice },
    FieldSpec { label: "Fossil CI", per_fuel_unit: false, unit: "kg CO2e/gal", current: |i| i.fossil_ci, update: ScenarioUpdate::FossilCi },
    FieldSpec { label: "Transport add-on", per_fuel_unit: false, unit: "kg CO2e/gal", current: |i| i.transport_addon, update: ScenarioUpdate::TransportAddon },
    FieldSpec { label: "User CI adjustment", per_fuel_unit: false, unit: "kg CO2e/gal", current: |i| i.user_ci_adjustment, update: ScenarioUpdate::UserCiAdjustment },
    FieldSpec { label: "PtL grid intensity", per_fuel_unit: false, unit: "kg CO2e/kWh", current: |i| i.ptl_grid_intensity_kg_per_kwh, update: ScenarioUpdate::PtlGridIntensity },
    FieldSpec { label: "PtL electricity use", per_fuel_unit: false, unit: "kWh/gal", current: |i| i.ptl_electricity_use_kwh_per_gal, update: ScenarioUpdate::PtlElectricityUse },
];

fn field_display(field: &FieldSpec, inputs: &ScenarioInputs, conv: &DisplayConverter) -> (f64, String) {
    let value = (field.current)(inputs);
    if field.per_fuel_unit {
        (conv.to_display(value), conv.label())
    } else {
        (value, field.unit.to_string())
    }
}

/// 입력값 수정 메뉴를 처리한다.
pub fn handle_edit_field(
    tr: &Translator,
    scenario: &mut Scenario,
    input: &mut impl BufRead,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::FIELD_HEADING));
    let conv = scenario.converter();
    for (i, field) in FIELDS.iter().enumerate() {
        let (value, unit) = field_display(field, scenario.inputs(), &conv);
        println!("{:>2}) {:<22} {value:>14.4} {unit}", i + 1, field.label);
    }
    let Some(field) = read_index(tr, input, FIELDS.len())?.and_then(|i| FIELDS.get(i)) else {
        return Ok(());
    };
    let entered = read_f64(tr, input, tr.t(keys::FIELD_PROMPT_VALUE))?;
    let canonical = if field.per_fuel_unit {
        conv.from_display(entered)
    } else {
        entered
    };
    scenario.set_field((field.update)(canonical));

    let (stored, unit) = field_display(field, scenario.inputs(), &scenario.converter());
    println!("{} {stored:.4} {unit}", tr.t(keys::FIELD_UPDATED));
    if (stored - entered).abs() > 1e-9 * entered.abs().max(1.0) {
        println!("{}", tr.t(keys::CLAMPED_NOTE));
    }
    Ok(())
}

/// 프리셋 메뉴를 처리한다.
pub fn handle_apply_preset(
    tr: &Translator,
    scenario: &mut Scenario,
    input: &mut impl BufRead,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::PRESET_HEADING));
    for (i, preset) in Preset::ALL.iter().enumerate() {
        println!("{}) {}", i + 1, preset.name());
    }
    let Some(preset) = read_index(tr, input, Preset::ALL.len())?.and_then(|i| Preset::ALL.get(i).copied())
    else {
        return Ok(());
    };
    apply_preset_verbose(tr, scenario, preset);
    Ok(())
}

/// 프리셋을 적용하고 결과를 알린다.
pub fn apply_preset_verbose(tr: &Translator, scenario: &mut Scenario, preset: Preset) {
    let patch = scenario.apply_preset(preset);
    println!("{} {}", tr.t(keys::PRESET_APPLIED), preset.name());
    if patch.is_empty() {
        println!("{}", tr.t(keys::PRESET_NO_CHANGE));
    }
}

/// 설비비 수정 메뉴를 처리한다.
pub fn handle_edit_equipment(
    tr: &Translator,
    scenario: &mut Scenario,
    input: &mut impl BufRead,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::EQUIPMENT_HEADING));
    println!("{}", tr.t(keys::EQUIPMENT_RESET_NOTE));
    let names: Vec<(String, bool)> = scenario
        .equipment()
        .iter()
        .map(|item| (item.name.clone(), item.derived))
        .collect();
    for (i, item) in scenario.equipment().iter().enumerate() {
        let tag = if item.derived {
            tr.t(keys::EQUIPMENT_DERIVED_TAG)
        } else {
            ""
        };
        println!("{}) {:<28} {:>16.0} USD {tag}", i + 1, item.name, item.usd);
    }
    let Some((name, derived)) = read_index(tr, input, names.len())?.and_then(|i| names.get(i)) else {
        return Ok(());
    };
    if *derived {
        println!("{}", tr.t(keys::EQUIPMENT_REJECTED));
        return Ok(());
    }
    let usd = read_f64(tr, input, tr.t(keys::EQUIPMENT_PROMPT_VALUE))?;
    if !scenario.set_equipment_cost(name, usd) {
        println!("{}", tr.t(keys::EQUIPMENT_REJECTED));
    }
    Ok(())
}

/// 결과 보고서를 출력한다.
pub fn handle_show_results(tr: &Translator, scenario: &Scenario) {
    let results = scenario.derived();
    print!("{}", report::render_text(scenario, &results, tr));
}

/// 표시 설정 메뉴를 처리한다. 바뀐 통화/단위/밀도는 설정 파일 기본값에도 반영된다.
pub fn handle_settings(
    tr: &Translator,
    scenario: &mut Scenario,
    input: &mut impl BufRead,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    let inputs = scenario.inputs();
    println!(
        "{} {} (1 USD = {} {}), {:.3} kg/L (1 gal = {:.3} kg)",
        tr.t(keys::SETTINGS_CURRENT),
        scenario.converter().label(),
        inputs.fx_rate,
        inputs.currency.code(),
        inputs.density_kg_per_l,
        convert_fuel_quantity(1.0, FuelUnit::Gallon, FuelUnit::Kilogram, inputs.density_kg_per_l)
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(input, tr.t(keys::PROMPT_SELECT))?;
    match sel.trim() {
        "1" => {
            let code = read_line(input, tr.t(keys::SETTINGS_PROMPT_CURRENCY))?;
            let currency = conversion::parse_currency(&code)?;
            scenario.set_field(ScenarioUpdate::Currency(currency));
        }
        "2" => {
            let rate = read_f64(tr, input, tr.t(keys::SETTINGS_PROMPT_FX_RATE))?;
            scenario.set_field(ScenarioUpdate::FxRate(rate));
        }
        "3" => {
            let code = read_line(input, tr.t(keys::SETTINGS_PROMPT_UNIT))?;
            let unit = conversion::parse_fuel_unit(&code)?;
            scenario.set_field(ScenarioUpdate::DisplayUnit(unit));
        }
        "4" => {
            let density = read_f64(tr, input, tr.t(keys::SETTINGS_PROMPT_DENSITY))?;
            scenario.set_field(ScenarioUpdate::Density(density));
        }
        _ => {
            println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
            return Ok(());
        }
    }
    println!("{} {}", tr.t(keys::SETTINGS_SAVED), scenario.converter().label());
    Ok(())
}

/// 1부터 시작하는 번호를 읽어 0 기반 인덱스로 돌려준다. 빈 입력이면 취소.
fn read_index(
    tr: &Translator,
    input: &mut impl BufRead,
    len: usize,
) -> Result<Option<usize>, AppError> {
    loop {
        let sel = read_line(input, tr.t(keys::PROMPT_SELECT))?;
        let sel = sel.trim();
        if sel.is_empty() {
            return Ok(None);
        }
        match sel.parse::<usize>() {
            Ok(n) if (1..=len).contains(&n) => return Ok(Some(n - 1)),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 한 줄을 읽는다. 입력이 끝났으면 `UnexpectedEof` 오류를 돌려준다.
fn read_line(input: &mut impl BufRead, prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Err(AppError::Io(io::ErrorKind::UnexpectedEof.into()));
    }
    Ok(buf)
}

fn read_f64(tr: &Translator, input: &mut impl BufRead, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(input, prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
