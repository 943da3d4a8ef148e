//! 경로별 기준 데이터 테이블. 기준 플랜트 규모는 100 kt/년이다.
//! 값은 비교용 예시치이며 실제 사업성 검토에는 현장 견적으로 대체해야 한다.
use super::{
    CostShare, EquipmentItem, EquipmentSizing, FeedstockModel, HydrogenSupply, Pathway,
    PathwayId, PtlDefaults,
};

/// 전해조 설비 항목 이름.
pub const ELECTROLYZER_ITEM: &str = "Electrolyzer";

const fn share(category: &'static str, percent: f64) -> CostShare {
    CostShare { category, percent }
}

const fn scaled(name: &'static str, baseline_usd: f64) -> EquipmentItem {
    EquipmentItem {
        name,
        baseline_usd,
        sizing: EquipmentSizing::PowerLaw,
    }
}

const fn electrolyzer(baseline_usd: f64) -> EquipmentItem {
    EquipmentItem {
        name: ELECTROLYZER_ITEM,
        baseline_usd,
        sizing: EquipmentSizing::ElectrolyzerCapacity,
    }
}

/// 식별자로 레코드를 찾는다.
pub fn lookup(id: PathwayId) -> &'static Pathway {
    match id {
        PathwayId::Hefa => &PATHWAYS[0],
        PathwayId::AlcoholToJet => &PATHWAYS[1],
        PathwayId::FischerTropsch => &PATHWAYS[2],
        PathwayId::Ptl => &PATHWAYS[3],
        PathwayId::PtlBiogenicCo2 => &PATHWAYS[4],
        PathwayId::PtlDirectAirCapture => &PATHWAYS[5],
    }
}

pub(crate) static PATHWAYS: [Pathway; 6] = [
    Pathway {
        id: PathwayId::Hefa,
        name: "HEFA",
        description: "폐식용유·동식물성 유지를 수소화처리해 파라핀계 제트연료를 만드는 상용 경로",
        cost_shares: &[
            share("Feedstock", 70.0),
            share("Hydrogen", 8.0),
            share("Electricity", 3.0),
            share("Chemicals", 4.0),
            share("O&M", 8.0),
            share("Logistics", 7.0),
        ],
        baseline_ci_kg_per_gal: 2.8,
        ptl_defaults: None,
        equipment: &[
            scaled("Feed pretreatment", 42_000_000.0),
            scaled("Hydrotreater", 118_000_000.0),
            scaled("Isomerization unit", 54_000_000.0),
            scaled("Fractionation", 31_000_000.0),
            scaled("Hydrogen supply", 22_000_000.0),
            scaled("Utilities & offsites", 38_000_000.0),
        ],
        baseline_electricity_mwh_per_year: 85_000.0,
        feedstock: FeedstockModel::Purchased,
        hydrogen: HydrogenSupply::Purchased,
        grid_ci_addon: false,
    },
    Pathway {
        id: PathwayId::AlcoholToJet,
        name: "Alcohol-to-Jet",
        description: "에탄올/이소부탄올을 탈수·올리고머화·수소화해 제트연료로 전환하는 경로",
        cost_shares: &[
            share("Feedstock", 60.0),
            share("Hydrogen", 6.0),
            share("Electricity", 6.0),
            share("Chemicals", 6.0),
            share("O&M", 14.0),
            share("Logistics", 8.0),
        ],
        baseline_ci_kg_per_gal: 4.1,
        ptl_defaults: None,
        equipment: &[
            scaled("Ethanol dehydration", 65_000_000.0),
            scaled("Oligomerization", 88_000_000.0),
            scaled("Hydrotreater", 72_000_000.0),
            scaled("Fractionation", 29_000_000.0),
            scaled("Utilities & offsites", 41_000_000.0),
        ],
        baseline_electricity_mwh_per_year: 120_000.0,
        feedstock: FeedstockModel::Purchased,
        hydrogen: HydrogenSupply::Purchased,
        grid_ci_addon: false,
    },
    Pathway {
        id: PathwayId::FischerTropsch,
        name: "Fischer-Tropsch",
        description: "농림 잔재물 가스화 후 합성가스를 FT 합성해 제트연료를 얻는 경로",
        cost_shares: &[
            share("Feedstock", 35.0),
            share("Hydrogen", 5.0),
            share("Electricity", 10.0),
            share("Chemicals", 5.0),
            share("O&M", 30.0),
            share("Logistics", 15.0),
        ],
        baseline_ci_kg_per_gal: 1.2,
        ptl_defaults: None,
        equipment: &[
            scaled("Gasifier", 210_000_000.0),
            scaled("Syngas cleanup", 95_000_000.0),
            scaled("Air separation unit", 80_000_000.0),
            scaled("FT reactor", 150_000_000.0),
            scaled("Hydrocracker", 70_000_000.0),
            scaled("Utilities & offsites", 60_000_000.0),
        ],
        baseline_electricity_mwh_per_year: 210_000.0,
        feedstock: FeedstockModel::Purchased,
        hydrogen: HydrogenSupply::Purchased,
        grid_ci_addon: false,
    },
    Pathway {
        id: PathwayId::Ptl,
        name: "PtL (e-fuels)",
        description: "포집 CO2와 수전해 수소로 RWGS-FT 합성을 거쳐 e-SAF를 만드는 경로",
        cost_shares: &[
            share("CO2", 15.0),
            share("Hydrogen (electrolysis)", 55.0),
            share("Electricity", 10.0),
            share("Chemicals", 3.0),
            share("O&M", 12.0),
            share("Logistics", 5.0),
        ],
        baseline_ci_kg_per_gal: 0.9,
        ptl_defaults: Some(PtlDefaults {
            grid_intensity_kg_per_kwh: 0.02,
            electricity_use_kwh_per_gal: 35.0,
            co2_price_usd_per_ton: 120.0,
        }),
        equipment: &[
            // 250 MW 평균 부하 기준
            electrolyzer(171_000_000.0),
            scaled("CO2 capture & compression", 60_000_000.0),
            scaled("RWGS reactor", 75_000_000.0),
            scaled("FT synthesis", 140_000_000.0),
            scaled("Upgrading", 55_000_000.0),
            scaled("Utilities & offsites", 50_000_000.0),
        ],
        baseline_electricity_mwh_per_year: 2_190_000.0,
        feedstock: FeedstockModel::Co2 { source_label: None },
        hydrogen: HydrogenSupply::Electrolytic,
        grid_ci_addon: true,
    },
    Pathway {
        id: PathwayId::PtlBiogenicCo2,
        name: "Novel: Biogenic CO2 e-SAF",
        description: "바이오에탄올·바이오가스 공정의 고농도 CO2를 메탄올 경유로 전환하는 신규 경로",
        cost_shares: &[
            share("Biogenic CO2", 10.0),
            share("Hydrogen (electrolysis)", 58.0),
            share("Electricity", 10.0),
            share("Chemicals", 4.0),
            share("O&M", 13.0),
            share("Logistics", 5.0),
        ],
        baseline_ci_kg_per_gal: 0.7,
        ptl_defaults: Some(PtlDefaults {
            grid_intensity_kg_per_kwh: 0.02,
            electricity_use_kwh_per_gal: 32.0,
            co2_price_usd_per_ton: 60.0,
        }),
        equipment: &[
            // 225 MW
            electrolyzer(153_900_000.0),
            scaled("Biogenic CO2 purification", 28_000_000.0),
            scaled("Methanol synthesis", 95_000_000.0),
            scaled("Methanol-to-jet", 110_000_000.0),
            scaled("Utilities & offsites", 45_000_000.0),
        ],
        baseline_electricity_mwh_per_year: 1_971_000.0,
        feedstock: FeedstockModel::Co2 {
            source_label: Some("Biogenic CO2"),
        },
        hydrogen: HydrogenSupply::Electrolytic,
        grid_ci_addon: false,
    },
    Pathway {
        id: PathwayId::PtlDirectAirCapture,
        name: "Novel: DAC e-SAF",
        description: "직접공기포집 CO2와 수전해 수소를 쓰는 신규 e-SAF 경로",
        cost_shares: &[
            share("DAC CO2", 25.0),
            share("Hydrogen (electrolysis)", 48.0),
            share("Electricity", 10.0),
            share("Chemicals", 3.0),
            share("O&M", 10.0),
            share("Logistics", 4.0),
        ],
        baseline_ci_kg_per_gal: 0.5,
        ptl_defaults: Some(PtlDefaults {
            grid_intensity_kg_per_kwh: 0.02,
            electricity_use_kwh_per_gal: 38.0,
            co2_price_usd_per_ton: 450.0,
        }),
        equipment: &[
            // 300 MW
            electrolyzer(205_200_000.0),
            scaled("Direct air capture", 240_000_000.0),
            scaled("RWGS reactor", 75_000_000.0),
            scaled("FT synthesis", 140_000_000.0),
            scaled("Utilities & offsites", 52_000_000.0),
        ],
        baseline_electricity_mwh_per_year: 2_628_000.0,
        feedstock: FeedstockModel::Co2 {
            source_label: Some("DAC CO2"),
        },
        hydrogen: HydrogenSupply::Electrolytic,
        grid_ci_addon: false,
    },
];
