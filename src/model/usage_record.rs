use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::validation::{self, ValidationError};

/// 사용량을 어떤 방식으로 입력했는지.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMethod {
    #[default]
    Manual,
    Csv,
    Feeling,
}

/// 한 구독의 한 주 사용량 기록.
///
/// `subscription_id`는 약한 참조다. 대상 구독이 삭제돼도 기록은 남고,
/// 조회 시 어떤 구독과도 매칭되지 않을 뿐이다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyUsage {
    pub subscription_id: String,
    pub week_start_date: NaiveDate,
    pub usage_minutes: u32,
    pub input_method: InputMethod,
}

impl WeeklyUsage {
    pub fn record(
        subscription_id: impl Into<String>,
        week_start_date: NaiveDate,
        usage_minutes: u32,
        input_method: InputMethod,
    ) -> Result<Self, ValidationError> {
        validation::check_weekly_minutes(usage_minutes)?;
        Ok(Self {
            subscription_id: subscription_id.into(),
            week_start_date,
            usage_minutes,
            input_method,
        })
    }
}

/// CSV 파서가 넘겨주는 한 줄. 파싱 자체는 이 크레이트 밖의 일이다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageImportRow {
    pub app_name: String,
    pub date: NaiveDate,
    pub usage_minutes: u32,
}
