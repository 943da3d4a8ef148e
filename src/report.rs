//! 계산 결과를 텍스트/TOML 보고서로 만든다.

use std::fmt::Write as _;

use serde::Serialize;

use crate::economics::EquipmentCostSet;
use crate::engine::DerivedResults;
use crate::i18n::{keys, Translator};
use crate::scenario::{Scenario, ScenarioInputs};
use crate::units::{convert_fuel_quantity, FuelUnit};

/// TOML 출력용 문서. 입력, 설비비, 결과를 함께 담는다.
#[derive(Debug, Serialize)]
pub struct ReportDocument<'a> {
    pub inputs: &'a ScenarioInputs,
    pub equipment: &'a EquipmentCostSet,
    pub results: &'a DerivedResults,
}

/// 보고서를 TOML 문자열로 직렬화한다. 금액은 내부 기준(USD/gal) 그대로 쓴다.
pub fn render_toml(scenario: &Scenario, results: &DerivedResults) -> Result<String, toml::ser::Error> {
    toml::to_string_pretty(&ReportDocument {
        inputs: scenario.inputs(),
        equipment: scenario.equipment(),
        results,
    })
}

/// 사람이 읽는 보고서. 단가는 현재 표시 통화/단위로 환산한다.
pub fn render_text(scenario: &Scenario, results: &DerivedResults, tr: &Translator) -> String {
    let conv = scenario.converter();
    let per_unit = conv.label();
    let currency = scenario.inputs().currency;
    let mut out = String::new();

    let _ = writeln!(out, "{}", tr.t(keys::REPORT_HEADING));
    let _ = writeln!(out, "{} {}", tr.t(keys::PATHWAY_SELECTED), results.pathway);
    let _ = writeln!(out, "{}", tr.t(keys::REPORT_COMPONENTS));
    for c in &results.components {
        let _ = writeln!(
            out,
            "  {:<24} {:>10.4} {per_unit}  {:>5.1}%",
            c.name,
            conv.to_display(c.usd_per_gal),
            c.share * 100.0
        );
    }
    let _ = writeln!(
        out,
        "{} {:.4} {per_unit}",
        tr.t(keys::REPORT_TOTAL_PRE),
        conv.to_display(results.total_pre_credit)
    );
    let _ = writeln!(
        out,
        "{} {:.4} {per_unit}",
        tr.t(keys::REPORT_TOTAL_POST),
        conv.to_display(results.total_post_credit)
    );
    let _ = writeln!(
        out,
        "{} {:.4} {per_unit}",
        tr.t(keys::REPORT_ELECTRICITY),
        conv.to_display(results.electricity_per_gal)
    );
    let _ = writeln!(
        out,
        "{} {:.0} {}",
        tr.t(keys::REPORT_ANNUAL_OUTPUT),
        convert_fuel_quantity(
            results.annual_gallons,
            FuelUnit::Gallon,
            conv.unit,
            conv.density_kg_per_l
        ),
        conv.unit.symbol()
    );
    let _ = writeln!(
        out,
        "{} {:.4} {per_unit}  ({})",
        tr.t(keys::REPORT_CAPEX),
        conv.to_display(results.capex_per_gal),
        tr.t(keys::REPORT_CAPEX_NOTE)
    );
    let _ = writeln!(
        out,
        "{} {:.4} {per_unit}",
        tr.t(keys::REPORT_BLEND),
        conv.to_display(results.blended_price_per_gal)
    );
    let _ = writeln!(out, "{} {:.2}%", tr.t(keys::REPORT_PREMIUM), results.premium_percent);
    let _ = writeln!(out, "{} {:.3} kg CO2e/gal", tr.t(keys::REPORT_SAF_CI), results.saf_ci);
    let _ = writeln!(out, "{} {:.3} kg CO2e/gal", tr.t(keys::REPORT_ABATEMENT), results.abatement);
    match results.abatement_cost_per_tonne {
        // 톤당 비용은 연료 단위와 무관하므로 통화만 환산한다
        Some(cost) => {
            let _ = writeln!(
                out,
                "{} {:.1} {}/t CO2e",
                tr.t(keys::REPORT_ABATEMENT_COST),
                cost * conv.fx_rate,
                currency.code()
            );
        }
        None => {
            let _ = writeln!(
                out,
                "{} {}",
                tr.t(keys::REPORT_ABATEMENT_COST),
                tr.t(keys::REPORT_NOT_COMPUTABLE)
            );
        }
    }

    let _ = writeln!(out, "{}", tr.t(keys::REPORT_EQUIPMENT));
    for item in scenario.equipment().iter() {
        let tag = if item.derived {
            tr.t(keys::EQUIPMENT_DERIVED_TAG)
        } else {
            ""
        };
        let _ = writeln!(out, "  {:<28} {:>16.0} USD {tag}", item.name, item.usd);
    }
    let _ = writeln!(
        out,
        "{} {:.0} USD",
        tr.t(keys::REPORT_EQUIPMENT_TOTAL),
        results.total_equipment_usd
    );
    out
}
