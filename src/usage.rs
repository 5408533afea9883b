//! 주간 사용량 기록 조회와 입력 변환.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::model::validation::MAX_WEEKLY_MINUTES;
use crate::model::{InputMethod, Subscription, UsageImportRow, WeeklyUsage};
use crate::reference::matching::resolve;

/// 가장 최근 주의 기록. 같은 주가 여럿이면 목록에서 뒤에 있는 것.
pub fn latest_for<'a>(records: &'a [WeeklyUsage], subscription_id: &str) -> Option<&'a WeeklyUsage> {
    records
        .iter()
        .filter(|r| r.subscription_id == subscription_id)
        .max_by_key(|r| r.week_start_date)
}

/// 주간 평균 사용 시간 [분]. 기록이 없으면 `None`.
pub fn average_weekly_minutes(records: &[WeeklyUsage], subscription_id: &str) -> Option<f64> {
    let (sum, n) = records
        .iter()
        .filter(|r| r.subscription_id == subscription_id)
        .fold((0u64, 0u32), |(sum, n), r| (sum + u64::from(r.usage_minutes), n + 1));
    if n == 0 {
        None
    } else {
        Some(sum as f64 / f64::from(n))
    }
}

/// 어떤 구독과도 연결되지 않는 기록.
pub fn orphaned_records<'a>(
    records: &'a [WeeklyUsage],
    subscriptions: &[Subscription],
) -> Vec<&'a WeeklyUsage> {
    let orphans: Vec<&WeeklyUsage> = records
        .iter()
        .filter(|r| !subscriptions.iter().any(|s| s.id == r.subscription_id))
        .collect();
    if !orphans.is_empty() {
        debug!(count = orphans.len(), "구독과 연결되지 않은 사용량 기록");
    }
    orphans
}

/// 정확한 시간을 모를 때 고르는 체감 사용량.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageFeeling {
    Never,
    Rarely,
    Sometimes,
    Often,
    Daily,
}

impl UsageFeeling {
    pub fn weekly_minutes(&self) -> u32 {
        match self {
            UsageFeeling::Never => 0,
            UsageFeeling::Rarely => 30,
            UsageFeeling::Sometimes => 120,
            UsageFeeling::Often => 300,
            UsageFeeling::Daily => 600,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UsageFeeling::Never => "안 씀",
            UsageFeeling::Rarely => "가끔",
            UsageFeeling::Sometimes => "보통",
            UsageFeeling::Often => "자주",
            UsageFeeling::Daily => "매일",
        }
    }

    pub fn to_record(&self, subscription_id: impl Into<String>, week_start_date: NaiveDate) -> WeeklyUsage {
        WeeklyUsage {
            subscription_id: subscription_id.into(),
            week_start_date,
            usage_minutes: self.weekly_minutes(),
            input_method: InputMethod::Feeling,
        }
    }
}

/// 날짜가 속한 주의 월요일.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

#[derive(Debug, Clone, Default)]
pub struct ImportOutcome {
    pub records: Vec<WeeklyUsage>,
    /// 어떤 구독과도 매칭되지 않은 앱 이름(중복 제거, 처음 나온 순서)
    pub unmatched: Vec<String>,
}

/// CSV에서 읽은 일별 행을 구독별 주간 기록으로 합친다.
///
/// 한 주 합계는 한 주 전체 분(10080)을 넘지 않게 자른다. 결과는 구독 목록 순서,
/// 그 안에서는 주 시작일 순이다.
pub fn import_rows(rows: &[UsageImportRow], subscriptions: &[Subscription]) -> ImportOutcome {
    let mut weekly: BTreeMap<(usize, NaiveDate), u32> = BTreeMap::new();
    let mut unmatched: Vec<String> = Vec::new();

    for row in rows {
        let hit = resolve(subscriptions, |s| s.name.as_str(), &row.app_name)
            .and_then(|sub| subscriptions.iter().position(|s| s.id == sub.id));
        match hit {
            Some(idx) => {
                let total = weekly.entry((idx, week_start(row.date))).or_insert(0);
                *total = total.saturating_add(row.usage_minutes);
            }
            None => {
                let name = row.app_name.trim().to_string();
                if !unmatched.contains(&name) {
                    unmatched.push(name);
                }
            }
        }
    }

    if !unmatched.is_empty() {
        warn!(apps = ?unmatched, "구독과 매칭되지 않은 앱");
    }

    let records = weekly
        .into_iter()
        .map(|((idx, week), minutes)| WeeklyUsage {
            subscription_id: subscriptions[idx].id.clone(),
            week_start_date: week,
            usage_minutes: minutes.min(MAX_WEEKLY_MINUTES),
            input_method: InputMethod::Csv,
        })
        .collect();

    ImportOutcome { records, unmatched }
}
