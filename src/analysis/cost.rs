use std::collections::BTreeMap;

use crate::model::{BillingCycle, Category, Subscription, SubscriptionStatus};

/// 반올림(0.5는 올림). 음수도 `floor(x + 0.5)` 규칙을 따른다.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// 원 단위 정수로 반올림한다. 유한하지 않은 값은 0.
pub fn round_won(value: f64) -> i64 {
    if value.is_finite() {
        round_half_up(value) as i64
    } else {
        0
    }
}

/// 결제 금액을 월 환산가로 바꾼다. 월 환산이 필요한 모든 곳은 이 함수를 쓴다.
pub fn monthly_price(price: i64, cycle: BillingCycle) -> i64 {
    match cycle {
        BillingCycle::Monthly => price,
        BillingCycle::Yearly => round_won(price as f64 / 12.0),
    }
}

/// 카테고리별 월 지출. 구독이 없는 카테고리도 0으로 채워 항상 8개 항목을 돌려준다.
pub fn cost_by_category(subscriptions: &[Subscription]) -> BTreeMap<Category, i64> {
    let mut map: BTreeMap<Category, i64> = Category::ALL.iter().map(|c| (*c, 0)).collect();
    for sub in subscriptions.iter().filter(|s| s.is_billable()) {
        *map.entry(sub.category).or_insert(0) += sub.monthly_price();
    }
    map
}

pub fn total_monthly_cost(subscriptions: &[Subscription]) -> i64 {
    subscriptions
        .iter()
        .filter(|s| s.is_billable())
        .map(|s| s.monthly_price())
        .sum()
}

pub fn total_yearly_cost(subscriptions: &[Subscription]) -> i64 {
    total_monthly_cost(subscriptions) * 12
}

/// 해지한 구독으로 매달 아끼고 있는 금액.
pub fn cancelled_monthly_savings(subscriptions: &[Subscription]) -> i64 {
    subscriptions
        .iter()
        .filter(|s| s.status == SubscriptionStatus::Cancelled)
        .map(|s| s.monthly_price())
        .sum()
}

/// 월간→연간 결제 전환 시 절감액.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleSavings {
    /// 연간 절감액. 연간 요금이 더 비싸면 음수다.
    pub yearly_savings: i64,
    pub monthly_savings: i64,
    /// 월 결제 1년치 대비 절감 비율 [%]
    pub percent_saved: i64,
}

/// 부호를 그대로 돌려준다. 화면에서 0으로 자를지는 호출 측이 정한다.
pub fn cycle_savings(monthly_price: i64, yearly_price: i64) -> CycleSavings {
    let twelve_months = monthly_price * 12;
    let yearly_savings = twelve_months - yearly_price;
    let percent_saved = if monthly_price == 0 {
        0
    } else {
        round_won(yearly_savings as f64 / twelve_months as f64 * 100.0)
    };
    CycleSavings {
        yearly_savings,
        monthly_savings: round_won(yearly_savings as f64 / 12.0),
        percent_saved,
    }
}
