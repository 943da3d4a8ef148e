use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use saf_pathway_toolbox::{
    app::{self, AppError},
    config::{self, DEFAULT_CONFIG_PATH},
    conversion,
    i18n::{self, Translator},
    pathway::PathwayId,
    report,
    scenario::{Preset, Scenario, ScenarioUpdate},
    ui_cli,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    Text,
    Toml,
}

/// SAF 생산 경로별 생산비와 탄소 감축 비용을 비교한다.
#[derive(Debug, Parser)]
#[command(name = "saf_pathway_toolbox", version)]
struct Cli {
    /// 설정 파일 경로
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// 언어 (auto/ko/en)
    #[arg(long, short = 'L')]
    lang: Option<String>,
    /// 생산 경로 코드 (hefa, atj, ft, ptl, ptl-biogenic, ptl-dac)
    #[arg(long)]
    pathway: Option<String>,
    /// 적용할 프리셋 이름 (예: "cheap-feedstock")
    #[arg(long)]
    preset: Option<String>,
    /// 플랜트 규모 [kt/년]
    #[arg(long)]
    plant_size: Option<f64>,
    /// SAF 혼합률 [%]
    #[arg(long)]
    blend: Option<f64>,
    /// 표시 통화 코드
    #[arg(long)]
    currency: Option<String>,
    /// 표시 단위 (gal/L/kg/t)
    #[arg(long)]
    unit: Option<String>,
    /// 보고서를 한 번 출력하고 종료한다
    #[arg(long, value_enum, num_args = 0..=1, default_missing_value = "text")]
    report: Option<ReportFormat>,
    /// 경로 목록을 출력하고 종료한다
    #[arg(long)]
    list_pathways: bool,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 보고서 또는 대화형 메뉴를 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut cfg = match config::load_or_default(&cli.config) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("{}: {err}", Translator::new("en").t(i18n::keys::ERROR_PREFIX));
            return ExitCode::FAILURE;
        }
    };
    let lang = i18n::resolve_language(cli.lang.as_deref(), Some(cfg.language.as_str()));
    let tr = Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());

    match try_run(&cli, &mut cfg, &tr) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: &Cli, cfg: &mut config::Config, tr: &Translator) -> Result<(), AppError> {
    if cli.list_pathways {
        ui_cli::print_pathways(tr);
        return Ok(());
    }

    let mut scenario = Scenario::with_inputs(cfg.initial_inputs(), cfg.assumptions.clone());
    if let Some(code) = &cli.pathway {
        scenario.select_pathway(code.parse::<PathwayId>()?);
    }
    if let Some(code) = &cli.currency {
        scenario.set_field(ScenarioUpdate::Currency(conversion::parse_currency(code)?));
    }
    if let Some(code) = &cli.unit {
        scenario.set_field(ScenarioUpdate::DisplayUnit(conversion::parse_fuel_unit(code)?));
    }
    if let Some(size) = cli.plant_size {
        scenario.set_field(ScenarioUpdate::PlantSize(size));
    }
    if let Some(blend) = cli.blend {
        scenario.set_field(ScenarioUpdate::BlendPercent(blend));
    }
    if let Some(name) = &cli.preset {
        ui_cli::apply_preset_verbose(tr, &mut scenario, name.parse::<Preset>()?);
    }

    if let Some(format) = cli.report {
        let results = scenario.derived();
        match format {
            ReportFormat::Text => print!("{}", report::render_text(&scenario, &results, tr)),
            ReportFormat::Toml => print!("{}", report::render_toml(&scenario, &results)?),
        }
        return Ok(());
    }

    app::run(&mut scenario, tr, &mut io::stdin().lock())?;

    // 대화형 세션에서 바꾼 표시 설정은 다음 실행의 기본값이 된다
    let inputs = scenario.inputs();
    cfg.display.currency = inputs.currency;
    cfg.display.fx_rate = Some(inputs.fx_rate);
    cfg.display.unit = inputs.display_unit;
    cfg.display.density_kg_per_l = inputs.density_kg_per_l;
    cfg.save(&cli.config)?;
    Ok(())
}
