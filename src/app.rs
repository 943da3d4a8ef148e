use std::io::BufRead;

use crate::config::ConfigError;
use crate::conversion::ConversionError;
use crate::i18n::{self, Translator};
use crate::scenario::Scenario;
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 파일/콘솔 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 단위/통화/경로 코드 해석 오류
    #[error("입력 해석 오류: {0}")]
    Conversion(#[from] ConversionError),
    /// 보고서 직렬화 오류
    #[error("보고서 직렬화 오류: {0}")]
    Report(#[from] toml::ser::Error),
}

impl AppError {
    /// 입력 스트림이 끝나서 발생한 오류인지 여부.
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, AppError::Io(e) if e.kind() == std::io::ErrorKind::UnexpectedEof)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다. 설정 저장은 호출자가 한다.
///
/// 입력이 끝나면 종료 메뉴를 고른 것과 같이 정상 종료한다.
pub fn run(scenario: &mut Scenario, tr: &Translator, input: &mut impl BufRead) -> Result<(), AppError> {
    loop {
        let step = match ui_cli::main_menu(tr, input)? {
            MenuChoice::SelectPathway => ui_cli::handle_select_pathway(tr, scenario, input),
            MenuChoice::EditField => ui_cli::handle_edit_field(tr, scenario, input),
            MenuChoice::ApplyPreset => ui_cli::handle_apply_preset(tr, scenario, input),
            MenuChoice::EditEquipment => ui_cli::handle_edit_equipment(tr, scenario, input),
            MenuChoice::ShowResults => {
                ui_cli::handle_show_results(tr, scenario);
                Ok(())
            }
            MenuChoice::Settings => ui_cli::handle_settings(tr, scenario, input),
            MenuChoice::Exit => break,
        };
        match step {
            Ok(()) => {}
            Err(err) if err.is_end_of_input() => break,
            // 잘못된 통화/단위 코드는 루프를 끝내지 않고 알리기만 한다
            Err(AppError::Conversion(e)) => eprintln!("{}: {e}", tr.t(i18n::keys::ERROR_PREFIX)),
            Err(other) => return Err(other),
        }
    }
    println!("{}", tr.t(i18n::keys::APP_EXIT));
    Ok(())
}
