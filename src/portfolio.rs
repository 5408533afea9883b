//! 로컬 TOML 데이터 파일과 메모리 스냅샷 사이의 변환.
//!
//! 계산기는 이 모듈을 모른다. CLI가 여기서 읽은 목록을 그대로 넘긴다.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::model::{InputMethod, Subscription, SubscriptionDraft, ValidationError, WeeklyUsage};

#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("데이터 파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("데이터 파일 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("데이터 파일 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("'{name}' 항목이 올바르지 않습니다: {source}")]
    Invalid {
        name: String,
        #[source]
        source: ValidationError,
    },
    #[error("사용량 기록의 구독 '{0}'을(를) 찾을 수 없습니다.")]
    UnknownSubscription(String),
}

/// 파일의 `[[usage]]` 항목. `subscription_id`가 있으면 id로, 없으면 이름으로 구독을 찾는다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageEntry {
    pub subscription: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<String>,
    pub week_start: NaiveDate,
    pub minutes: u32,
    #[serde(default)]
    pub method: InputMethod,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortfolioFile {
    #[serde(default)]
    pub subscriptions: Vec<SubscriptionDraft>,
    #[serde(default)]
    pub usage: Vec<UsageEntry>,
}

#[derive(Debug, Clone, Default)]
pub struct Portfolio {
    pub subscriptions: Vec<Subscription>,
    pub usage: Vec<WeeklyUsage>,
}

impl Portfolio {
    /// TOML 문자열을 읽어 검증까지 마친 스냅샷을 만든다.
    pub fn parse(content: &str) -> Result<Self, PortfolioError> {
        let file: PortfolioFile = toml::from_str(content)?;
        let mut subscriptions = Vec::with_capacity(file.subscriptions.len());
        for draft in file.subscriptions {
            let name = draft.name.clone();
            let sub = Subscription::create(draft)
                .map_err(|source| PortfolioError::Invalid { name, source })?;
            subscriptions.push(sub);
        }
        let mut usage = Vec::with_capacity(file.usage.len());
        for entry in file.usage {
            let by_id = entry
                .subscription_id
                .as_deref()
                .and_then(|id| subscriptions.iter().find(|s| s.id == id));
            let sub = by_id
                .or_else(|| {
                    subscriptions
                        .iter()
                        .find(|s| s.name == entry.subscription.trim())
                })
                .ok_or_else(|| PortfolioError::UnknownSubscription(entry.subscription.clone()))?;
            let record = WeeklyUsage::record(sub.id.clone(), entry.week_start, entry.minutes, entry.method)
                .map_err(|source| PortfolioError::Invalid {
                    name: entry.subscription.clone(),
                    source,
                })?;
            usage.push(record);
        }
        Ok(Self {
            subscriptions,
            usage,
        })
    }

    /// 파일이 없으면 빈 스냅샷을 돌려준다.
    pub fn load(path: &Path) -> Result<Self, PortfolioError> {
        if !path.exists() {
            info!(path = %path.display(), "데이터 파일이 없어 빈 목록으로 시작");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn to_file(&self) -> PortfolioFile {
        let usage = self
            .usage
            .iter()
            .filter_map(|r| {
                let sub = self.subscriptions.iter().find(|s| s.id == r.subscription_id)?;
                Some(UsageEntry {
                    subscription: sub.name.clone(),
                    subscription_id: Some(sub.id.clone()),
                    week_start: r.week_start_date,
                    minutes: r.usage_minutes,
                    method: r.input_method,
                })
            })
            .collect();
        PortfolioFile {
            subscriptions: self.subscriptions.iter().map(Subscription::to_draft).collect(),
            usage,
        }
    }

    pub fn to_toml_string(&self) -> Result<String, PortfolioError> {
        Ok(toml::to_string_pretty(&self.to_file())?)
    }

    pub fn save(&self, path: &Path) -> Result<(), PortfolioError> {
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}
