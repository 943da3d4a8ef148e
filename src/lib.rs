//! SAF(지속가능 항공유) 생산 경로별 생산비, 설비비, 탄소 감축 비용을 계산하는 라이브러리.
//!
//! 계산 엔진(`engine`)은 순수 함수로 두고, 대화형 CLI(`app`, `ui_cli`)는 그 위에 얹는다.

pub mod app;
pub mod assumptions;
pub mod config;
pub mod conversion;
pub mod economics;
pub mod engine;
pub mod i18n;
pub mod lca;
pub mod pathway;
pub mod report;
pub mod scenario;
pub mod ui_cli;
pub mod units;
