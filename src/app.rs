use std::fs;
use std::path::{Path, PathBuf};

use clap::Subcommand;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::analysis::opportunity_cost::MAX_YEARS;
use crate::config::{Config, ConfigError};
use crate::model::UsageImportRow;
use crate::portfolio::{Portfolio, PortfolioError};
use crate::ui_cli::{self, MenuChoice};
use crate::usage;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    #[error("데이터 오류: {0}")]
    Portfolio(#[from] PortfolioError),
    #[error("가져오기 파일 파싱 오류: {0}")]
    ImportParse(#[from] toml::de::Error),
}

/// 메뉴 없이 바로 실행하는 하위 명령.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// 월/연 지출과 카테고리별 요약
    Summary,
    /// 구독별 ROI 등급과 추천
    Roi,
    /// 가족 요금제 공유 절약
    Sharing,
    /// 번들 상품 추천
    Bundles,
    /// 적용 가능한 할인 이벤트
    Discounts,
    /// 아낀 돈을 투자했을 때의 기회비용
    Invest {
        /// 매달 아끼는 금액 [원]. 생략하면 ROI 추천 절감액 합계를 쓴다.
        #[arg(long)]
        monthly: Option<i64>,
        /// 투자 기간 [년]. 생략하면 설정값.
        #[arg(long)]
        years: Option<u32>,
    },
    /// 구독 DNA 분석
    Dna,
    /// CSV 파서가 만든 행 목록(TOML)을 주간 사용량으로 가져온다
    Import {
        /// `[[rows]]` 항목(app_name, date, usage_minutes)을 가진 TOML 파일
        rows: PathBuf,
    },
}

#[derive(Debug, Deserialize)]
struct ImportFile {
    #[serde(default)]
    rows: Vec<UsageImportRow>,
}

/// 하위 명령 하나를 실행한다.
pub fn run_command(cfg: &Config, data_path: &Path, command: Command) -> Result<(), AppError> {
    let mut portfolio = Portfolio::load(data_path)?;
    match command {
        Command::Summary => ui_cli::print_summary(&portfolio),
        Command::Roi => ui_cli::print_roi(&portfolio, cfg),
        Command::Sharing => ui_cli::print_sharing(&portfolio),
        Command::Bundles => ui_cli::print_bundles(&portfolio),
        Command::Discounts => ui_cli::print_discounts(&portfolio),
        Command::Invest { monthly, years } => {
            let monthly = monthly.unwrap_or_else(|| ui_cli::recommended_monthly_saving(&portfolio, cfg));
            let years = years.unwrap_or(cfg.investment.years).min(MAX_YEARS);
            ui_cli::print_investment(monthly, years, cfg);
        }
        Command::Dna => ui_cli::print_dna(&portfolio),
        Command::Import { rows } => {
            let content = fs::read_to_string(&rows)?;
            let file: ImportFile = toml::from_str(&content)?;
            let outcome = usage::import_rows(&file.rows, &portfolio.subscriptions);
            info!(
                records = outcome.records.len(),
                unmatched = outcome.unmatched.len(),
                "사용량 가져오기"
            );
            ui_cli::print_import(&outcome);
            portfolio.usage.extend(outcome.records);
            portfolio.save(data_path)?;
        }
    }
    Ok(())
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(cfg: &mut Config, config_path: &Path, data_path: &Path) -> Result<(), AppError> {
    let portfolio = Portfolio::load(data_path)?;
    loop {
        match ui_cli::main_menu()? {
            MenuChoice::Summary => ui_cli::print_summary(&portfolio),
            MenuChoice::Roi => ui_cli::print_roi(&portfolio, cfg),
            MenuChoice::Sharing => ui_cli::print_sharing(&portfolio),
            MenuChoice::Bundles => ui_cli::print_bundles(&portfolio),
            MenuChoice::Discounts => ui_cli::print_discounts(&portfolio),
            MenuChoice::Invest => ui_cli::handle_investment(&portfolio, cfg)?,
            MenuChoice::Dna => ui_cli::print_dna(&portfolio),
            MenuChoice::Settings => {
                ui_cli::handle_settings(cfg)?;
                cfg.save(config_path)?;
            }
            MenuChoice::Exit => {
                cfg.save(config_path)?;
                println!("프로그램을 종료합니다.");
                break;
            }
        }
    }
    Ok(())
}
