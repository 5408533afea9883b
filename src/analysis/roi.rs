//! 분당 비용 기반 ROI 등급과 유지/공유/다운그레이드/해지 추천.

use super::cost::{round_half_up, round_won};
use crate::model::{Subscription, WeeklyUsage};
use crate::reference::services::find_family_plan;
use crate::usage::average_weekly_minutes;

/// 한 달을 주 단위로 환산하는 고정 계수.
pub const WEEKS_PER_MONTH: f64 = 4.33;

/// 월 요금을 월 이용 분으로 나눈 값 [원/분].
///
/// 이용 시간이 0 이하이면 `f64::INFINITY`를 돌려준다. 오류가 아니라
/// "쓰지 않음"을 뜻하는 값이며 등급 계산에서 F로 이어진다.
pub fn cost_per_minute(monthly_price: i64, weekly_usage_minutes: f64) -> f64 {
    let monthly_minutes = weekly_usage_minutes * WEEKS_PER_MONTH;
    if monthly_minutes <= 0.0 {
        return f64::INFINITY;
    }
    monthly_price as f64 / monthly_minutes
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RoiGrade {
    A,
    B,
    C,
    D,
    F,
}

impl RoiGrade {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoiGrade::A => "A",
            RoiGrade::B => "B",
            RoiGrade::C => "C",
            RoiGrade::D => "D",
            RoiGrade::F => "F",
        }
    }
}

impl std::fmt::Display for RoiGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 분당 비용을 등급으로 나눈다. F는 미사용(무한대/NaN) 전용이고,
/// 아무리 비싸도 이용 기록이 있으면 D에 머문다.
pub fn roi_grade(cost_per_minute: f64) -> RoiGrade {
    if !cost_per_minute.is_finite() {
        RoiGrade::F
    } else if cost_per_minute < 10.0 {
        RoiGrade::A
    } else if cost_per_minute < 30.0 {
        RoiGrade::B
    } else if cost_per_minute < 70.0 {
        RoiGrade::C
    } else {
        RoiGrade::D
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Keep,
    Share,
    Downgrade,
    Cancel,
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::Keep => "유지",
            Action::Share => "공유",
            Action::Downgrade => "다운그레이드",
            Action::Cancel => "해지",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub action: Action,
    pub reason: String,
}

/// 등급별 추천. B/C 등급에서는 공유 가능 여부를 유지/다운그레이드보다 먼저 본다.
pub fn recommend(
    grade: RoiGrade,
    subscription: &Subscription,
    sharing_available: bool,
) -> Recommendation {
    let can_share = sharing_available && !subscription.is_shared;
    let (action, reason) = match grade {
        RoiGrade::A => (Action::Keep, "충분히 활용하고 있어요.".to_string()),
        RoiGrade::B if can_share => (
            Action::Share,
            "적당히 쓰고 있어요. 가족 요금제로 나누면 더 아낄 수 있어요.".to_string(),
        ),
        RoiGrade::B => (Action::Keep, "적당히 쓰고 있어요.".to_string()),
        RoiGrade::C if can_share => (
            Action::Share,
            "쓰는 만큼에 비해 비싸요. 함께 쓸 사람을 찾아보세요.".to_string(),
        ),
        RoiGrade::C => (
            Action::Downgrade,
            "쓰는 만큼에 비해 비싸요. 더 저렴한 요금제를 고려해 보세요.".to_string(),
        ),
        RoiGrade::D => (Action::Cancel, "거의 쓰지 않고 있어요.".to_string()),
        RoiGrade::F => (
            Action::Cancel,
            format!(
                "사용 기록이 없어요. 해지하면 매달 {}원을 아낄 수 있어요.",
                subscription.monthly_price()
            ),
        ),
    };
    Recommendation { action, reason }
}

/// 추천 행동별 예상 절감액. 실제 요금제가 아니라 고정 비율 추정치다.
pub fn potential_savings(action: Action, monthly_price: i64) -> i64 {
    match action {
        Action::Cancel => monthly_price,
        Action::Downgrade => round_won(monthly_price as f64 * 0.3),
        Action::Share => round_won(monthly_price as f64 * 0.5),
        Action::Keep => 0,
    }
}

/// 프리셋 테이블에 가족/공유 요금제가 있는 서비스인지.
pub fn sharing_available(subscription: &Subscription) -> bool {
    find_family_plan(&subscription.name).is_some()
}

#[derive(Debug, Clone)]
pub struct RoiAnalysis {
    pub subscription_id: String,
    pub subscription_name: String,
    pub monthly_price: i64,
    /// 표시용으로 소수 첫째 자리까지 반올림한 분당 비용. 미사용이면 0.
    pub cost_per_minute: f64,
    pub grade: RoiGrade,
    pub recommendation: Action,
    pub reason: String,
    pub monthly_usage_minutes: i64,
    pub potential_savings: i64,
}

fn round_tenth(value: f64) -> f64 {
    if value.is_finite() {
        round_half_up(value * 10.0) / 10.0
    } else {
        0.0
    }
}

pub fn analyze(
    subscription: &Subscription,
    weekly_usage_minutes: f64,
    sharing_available: bool,
) -> RoiAnalysis {
    let monthly_price = subscription.monthly_price();
    let cpm = cost_per_minute(monthly_price, weekly_usage_minutes);
    let grade = roi_grade(cpm);
    let Recommendation { action, reason } = recommend(grade, subscription, sharing_available);
    RoiAnalysis {
        subscription_id: subscription.id.clone(),
        subscription_name: subscription.name.clone(),
        monthly_price,
        cost_per_minute: round_tenth(cpm),
        grade,
        recommendation: action,
        reason,
        monthly_usage_minutes: round_won(weekly_usage_minutes * WEEKS_PER_MONTH),
        potential_savings: potential_savings(action, monthly_price),
    }
}

/// 분석 대상(active/trial) 구독 전체를 평균 주간 사용량으로 분석한다.
/// 기록이 없는 구독은 0분으로 본다. 결과는 입력 순서를 따른다.
pub fn analyze_all(
    subscriptions: &[Subscription],
    records: &[WeeklyUsage],
    assume_sharing: bool,
) -> Vec<RoiAnalysis> {
    subscriptions
        .iter()
        .filter(|s| s.is_billable())
        .map(|s| {
            let weekly = average_weekly_minutes(records, &s.id).unwrap_or(0.0);
            analyze(s, weekly, assume_sharing || sharing_available(s))
        })
        .collect()
}
