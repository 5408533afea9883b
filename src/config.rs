use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::analysis::opportunity_cost::find_scenario;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 기회비용 시뮬레이션 기본값.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InvestmentSettings {
    /// 투자 기간 [년]
    pub years: u32,
    /// 기본으로 강조할 시나리오 id
    pub scenario: String,
}

impl Default for InvestmentSettings {
    fn default() -> Self {
        Self {
            years: 10,
            scenario: "sp500".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SharingSettings {
    /// true면 가족 요금제 프리셋이 없어도 공유 가능하다고 보고 ROI를 계산한다.
    pub assume_available: bool,
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 구독/사용량 데이터 파일 경로
    pub data_path: PathBuf,
    pub investment: InvestmentSettings,
    pub sharing: SharingSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("subscriptions.toml"),
            investment: InvestmentSettings::default(),
            sharing: SharingSettings::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("알 수 없는 투자 시나리오: {0}")]
    UnknownScenario(String),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 만들어 저장한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        info!(path = %path.display(), "기본 설정 파일 생성");
        Ok(cfg)
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if find_scenario(&self.investment.scenario).is_none() {
            return Err(ConfigError::UnknownScenario(self.investment.scenario.clone()));
        }
        Ok(())
    }

    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
