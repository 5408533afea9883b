use std::path::PathBuf;

use clap::Parser;
use subscription_toolbox::app::{self, AppError, Command};
use subscription_toolbox::config;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "subscription_toolbox", version, about = "구독 지출 분석 도구")]
struct Cli {
    /// 설정 파일 경로
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// 데이터 파일 경로 (설정값보다 우선)
    #[arg(long)]
    data: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 하위 명령 또는 메뉴를 실행한다.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default(&cli.config)?;
    let data_path = cli.data.unwrap_or_else(|| cfg.data_path.clone());
    match cli.command {
        Some(command) => app::run_command(&cfg, &data_path, command),
        None => app::run(&mut cfg, &cli.config, &data_path),
    }
}
