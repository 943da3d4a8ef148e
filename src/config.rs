use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::assumptions::ModelAssumptions;
use crate::scenario::ScenarioInputs;
use crate::units::{Currency, FuelUnit, DEFAULT_JET_DENSITY_KG_PER_L};

/// 기본 설정 파일 이름.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 가격 표시 기본값.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayDefaults {
    pub currency: Currency,
    /// 지정하지 않으면 통화 기본 환율을 쓴다.
    pub fx_rate: Option<f64>,
    pub unit: FuelUnit,
    pub density_kg_per_l: f64,
}

impl Default for DisplayDefaults {
    fn default() -> Self {
        Self {
            currency: Currency::Usd,
            fx_rate: None,
            unit: FuelUnit::Gallon,
            density_kg_per_l: DEFAULT_JET_DENSITY_KG_PER_L,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드 (auto/ko/en)
    pub language: String,
    /// TOML 언어팩 디렉터리
    pub language_pack_dir: Option<String>,
    pub display: DisplayDefaults,
    pub assumptions: ModelAssumptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            language_pack_dir: None,
            display: DisplayDefaults::default(),
            assumptions: ModelAssumptions::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 표시 기본값을 반영한 초기 입력값.
    pub fn initial_inputs(&self) -> ScenarioInputs {
        let display = &self.display;
        ScenarioInputs {
            currency: display.currency,
            fx_rate: display
                .fx_rate
                .unwrap_or_else(|| display.currency.default_fx_rate()),
            display_unit: display.unit,
            density_kg_per_l: display.density_kg_per_l,
            ..ScenarioInputs::default()
        }
    }
}
