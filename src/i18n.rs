use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const CLAMPED_NOTE: &str = "general.clamped_note";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_SELECT_PATHWAY: &str = "main_menu.select_pathway";
    pub const MAIN_MENU_EDIT_FIELD: &str = "main_menu.edit_field";
    pub const MAIN_MENU_APPLY_PRESET: &str = "main_menu.apply_preset";
    pub const MAIN_MENU_EDIT_EQUIPMENT: &str = "main_menu.edit_equipment";
    pub const MAIN_MENU_SHOW_RESULTS: &str = "main_menu.show_results";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";

    pub const PATHWAY_HEADING: &str = "pathway.heading";
    pub const PATHWAY_SELECTED: &str = "pathway.selected";
    pub const PATHWAY_LIST_HEADING: &str = "pathway.list_heading";

    pub const FIELD_HEADING: &str = "field.heading";
    pub const FIELD_PROMPT_VALUE: &str = "field.prompt_value";
    pub const FIELD_UPDATED: &str = "field.updated";

    pub const PRESET_HEADING: &str = "preset.heading";
    pub const PRESET_APPLIED: &str = "preset.applied";
    pub const PRESET_NO_CHANGE: &str = "preset.no_change";

    pub const EQUIPMENT_HEADING: &str = "equipment.heading";
    pub const EQUIPMENT_PROMPT_ITEM: &str = "equipment.prompt_item";
    pub const EQUIPMENT_PROMPT_VALUE: &str = "equipment.prompt_value";
    pub const EQUIPMENT_REJECTED: &str = "equipment.rejected";
    pub const EQUIPMENT_RESET_NOTE: &str = "equipment.reset_note";
    pub const EQUIPMENT_DERIVED_TAG: &str = "equipment.derived_tag";

    pub const REPORT_HEADING: &str = "report.heading";
    pub const REPORT_COMPONENTS: &str = "report.components";
    pub const REPORT_TOTAL_PRE: &str = "report.total_pre";
    pub const REPORT_TOTAL_POST: &str = "report.total_post";
    pub const REPORT_CAPEX: &str = "report.capex";
    pub const REPORT_CAPEX_NOTE: &str = "report.capex_note";
    pub const REPORT_ELECTRICITY: &str = "report.electricity";
    pub const REPORT_ANNUAL_OUTPUT: &str = "report.annual_output";
    pub const REPORT_BLEND: &str = "report.blend";
    pub const REPORT_PREMIUM: &str = "report.premium";
    pub const REPORT_SAF_CI: &str = "report.saf_ci";
    pub const REPORT_ABATEMENT: &str = "report.abatement";
    pub const REPORT_ABATEMENT_COST: &str = "report.abatement_cost";
    pub const REPORT_NOT_COMPUTABLE: &str = "report.not_computable";
    pub const REPORT_EQUIPMENT: &str = "report.equipment";
    pub const REPORT_EQUIPMENT_TOTAL: &str = "report.equipment_total";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CURRENCY: &str = "settings.prompt_currency";
    pub const SETTINGS_PROMPT_FX_RATE: &str = "settings.prompt_fx_rate";
    pub const SETTINGS_PROMPT_UNIT: &str = "settings.prompt_unit";
    pub const SETTINGS_PROMPT_DENSITY: &str = "settings.prompt_density";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        if code.to_lowercase().starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir.and_then(|dir| load_overrides(dir, lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 언어팩 → 선택 언어 → 영어 순으로 찾는다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v.as_str();
        }
        match self.lang {
            Language::Ko => ko(key).unwrap_or_else(|| en(key)),
            Language::En => en(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(code) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(code);
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|lang| normalize_locale_string(&lang))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵 또는 중첩 테이블.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Table = toml::from_str(src).ok()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    walk(&format!("{prefix}.{k}"), v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in &value {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        CLAMPED_NOTE => "참고: 입력값이 허용 범위로 보정되었습니다.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        MAIN_MENU_TITLE => "\n=== SAF Pathway Toolbox ===",
        MAIN_MENU_SELECT_PATHWAY => "1) 생산 경로 선택",
        MAIN_MENU_EDIT_FIELD => "2) 입력값 수정",
        MAIN_MENU_APPLY_PRESET => "3) 프리셋 적용",
        MAIN_MENU_EDIT_EQUIPMENT => "4) 설비비 수정",
        MAIN_MENU_SHOW_RESULTS => "5) 결과 보기",
        MAIN_MENU_SETTINGS => "6) 표시 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PATHWAY_HEADING => "\n-- 생산 경로 --",
        PATHWAY_SELECTED => "선택된 경로:",
        PATHWAY_LIST_HEADING => "사용 가능한 생산 경로:",
        FIELD_HEADING => "\n-- 입력값 --",
        FIELD_PROMPT_VALUE => "새 값: ",
        FIELD_UPDATED => "저장된 값:",
        PRESET_HEADING => "\n-- 프리셋 --",
        PRESET_APPLIED => "프리셋 적용:",
        PRESET_NO_CHANGE => "바뀐 입력값이 없습니다 (설비비는 현재 값을 그대로 사용).",
        EQUIPMENT_HEADING => "\n-- 설비비 --",
        EQUIPMENT_PROMPT_ITEM => "항목 번호: ",
        EQUIPMENT_PROMPT_VALUE => "설비비 [USD]: ",
        EQUIPMENT_REJECTED => "전해조 항목은 전력 수요로부터 자동 산정되므로 수정할 수 없습니다.",
        EQUIPMENT_RESET_NOTE => "참고: 규모·지수·경로를 바꾸면 수동 수정값은 기본 환산값으로 덮어써집니다.",
        EQUIPMENT_DERIVED_TAG => "(자동 산정)",
        REPORT_HEADING => "\n=== 결과 ===",
        REPORT_COMPONENTS => "생산비 구성 (비중 내림차순):",
        REPORT_TOTAL_PRE => "생산비 합계 (크레딧 전):",
        REPORT_TOTAL_POST => "생산비 합계 (크레딧 후):",
        REPORT_CAPEX => "자본비 (참고):",
        REPORT_CAPEX_NOTE => "자본비는 생산비 합계에 포함되지 않습니다.",
        REPORT_ELECTRICITY => "전력비:",
        REPORT_ANNUAL_OUTPUT => "연간 생산량:",
        REPORT_BLEND => "혼합 가격:",
        REPORT_PREMIUM => "화석연료 대비 할증:",
        REPORT_SAF_CI => "SAF 탄소집약도:",
        REPORT_ABATEMENT => "감축량:",
        REPORT_ABATEMENT_COST => "감축 비용:",
        REPORT_NOT_COMPUTABLE => "산정 불가 (감축량 없음)",
        REPORT_EQUIPMENT => "설비비:",
        REPORT_EQUIPMENT_TOTAL => "설비비 합계:",
        SETTINGS_HEADING => "\n-- 표시 설정 --",
        SETTINGS_CURRENT => "현재 표시:",
        SETTINGS_OPTIONS => "1) 통화  2) 환율  3) 단위  4) 밀도",
        SETTINGS_PROMPT_CURRENCY => "통화 코드 (USD/EUR/GBP/JPY/KRW): ",
        SETTINGS_PROMPT_FX_RATE => "1 USD당 환율: ",
        SETTINGS_PROMPT_UNIT => "단위 (gal/L/kg/t): ",
        SETTINGS_PROMPT_DENSITY => "밀도 [kg/L]: ",
        SETTINGS_SAVED => "표시 설정이 변경되었습니다:",
        _ => return None,
    })
}

fn en(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        CLAMPED_NOTE => "Note: the value was adjusted to the allowed range.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        INVALID_SELECTION_RETRY => "Invalid selection. Try again.",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        MAIN_MENU_TITLE => "\n=== SAF Pathway Toolbox ===",
        MAIN_MENU_SELECT_PATHWAY => "1) Select pathway",
        MAIN_MENU_EDIT_FIELD => "2) Edit input",
        MAIN_MENU_APPLY_PRESET => "3) Apply preset",
        MAIN_MENU_EDIT_EQUIPMENT => "4) Edit equipment cost",
        MAIN_MENU_SHOW_RESULTS => "5) Show results",
        MAIN_MENU_SETTINGS => "6) Display settings",
        MAIN_MENU_EXIT => "0) Exit",
        PATHWAY_HEADING => "\n-- Pathways --",
        PATHWAY_SELECTED => "Selected pathway:",
        PATHWAY_LIST_HEADING => "Available pathways:",
        FIELD_HEADING => "\n-- Inputs --",
        FIELD_PROMPT_VALUE => "New value: ",
        FIELD_UPDATED => "Stored value:",
        PRESET_HEADING => "\n-- Presets --",
        PRESET_APPLIED => "Preset applied:",
        PRESET_NO_CHANGE => "No inputs changed (equipment costs are used as they are).",
        EQUIPMENT_HEADING => "\n-- Equipment costs --",
        EQUIPMENT_PROMPT_ITEM => "Item number: ",
        EQUIPMENT_PROMPT_VALUE => "Cost [USD]: ",
        EQUIPMENT_REJECTED => "The electrolyzer is derived from electricity demand and cannot be edited.",
        EQUIPMENT_RESET_NOTE => "Note: changing plant size, exponent or pathway overwrites manual edits.",
        EQUIPMENT_DERIVED_TAG => "(derived)",
        REPORT_HEADING => "\n=== Results ===",
        REPORT_COMPONENTS => "Cost components (by descending share):",
        REPORT_TOTAL_PRE => "Total cost (pre-credit):",
        REPORT_TOTAL_POST => "Total cost (post-credit):",
        REPORT_CAPEX => "CAPEX (informational):",
        REPORT_CAPEX_NOTE => "CAPEX is not included in the total cost.",
        REPORT_ELECTRICITY => "Electricity:",
        REPORT_ANNUAL_OUTPUT => "Annual output:",
        REPORT_BLEND => "Blended price:",
        REPORT_PREMIUM => "Premium over fossil:",
        REPORT_SAF_CI => "SAF carbon intensity:",
        REPORT_ABATEMENT => "Abatement:",
        REPORT_ABATEMENT_COST => "Abatement cost:",
        REPORT_NOT_COMPUTABLE => "not computable (no abatement)",
        REPORT_EQUIPMENT => "Equipment:",
        REPORT_EQUIPMENT_TOTAL => "Equipment total:",
        SETTINGS_HEADING => "\n-- Display settings --",
        SETTINGS_CURRENT => "Current display:",
        SETTINGS_OPTIONS => "1) Currency  2) FX rate  3) Unit  4) Density",
        SETTINGS_PROMPT_CURRENCY => "Currency code (USD/EUR/GBP/JPY/KRW): ",
        SETTINGS_PROMPT_FX_RATE => "Rate per 1 USD: ",
        SETTINGS_PROMPT_UNIT => "Unit (gal/L/kg/t): ",
        SETTINGS_PROMPT_DENSITY => "Density [kg/L]: ",
        SETTINGS_SAVED => "Display settings changed:",
        _ => "[missing translation]",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn korean_falls_back_to_english_for_unknown_keys() {
        let tr = Translator::new("ko-KR");
        assert_eq!(tr.language(), Language::Ko);
        assert_eq!(tr.t(keys::APP_EXIT), "프로그램을 종료합니다.");
        assert_eq!(tr.t("no.such.key"), "[missing translation]");
    }

    #[test]
    fn cli_flag_wins_over_config() {
        assert_eq!(resolve_language(Some("ko"), Some("en")), "ko");
        assert_eq!(resolve_language(Some("auto"), Some("en-US")), "en");
    }

    #[test]
    fn nested_pack_tables_flatten_to_dotted_keys() {
        let map = parse_toml_to_map("[report]\nheading = \"Résultats\"\n").unwrap();
        assert_eq!(map.get("report.heading").map(String::as_str), Some("Résultats"));
    }
}
