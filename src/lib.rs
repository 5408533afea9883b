//! 구독 지출 분석 엔진. 계산 로직은 라이브러리에 두고 CLI는 얇게 유지한다.

pub mod analysis;
pub mod app;
pub mod config;
pub mod model;
pub mod portfolio;
pub mod reference;
pub mod ui_cli;
pub mod usage;
